//! Column names of the store's record and profile rows, and the schema
//! version tag every record row carries.
//!
//! Quantities are written in the base unit of their dimension:
//!
//! | Column | Unit |
//! |--------|------|
//! | `time`, `duration` | milliseconds |
//! | `avg_speed` | m/s |
//! | `distance`, `elevation_gain` | meters |
//! | `pressure_systolic`, `pressure_diastolic` | pascals |
//! | `calories` | kilocalories |
//! | `value` | metric dependent, see [`crate::Metric::fields`] |

use serde::{Deserialize, Serialize};

// ============================================================================
// Record columns
// ============================================================================

/// Store-assigned row identity
pub const ID: &str = "_id";
/// Metric id of the record
pub const METRIC: &str = "_metric";
/// Schema version tag
pub const VERSION: &str = "_version";
/// Observation time, milliseconds since the Unix epoch
pub const TIME: &str = "time";

pub const DURATION: &str = "duration";
pub const AVG_SPEED: &str = "avg_speed";
pub const CALORIES: &str = "calories";
pub const DISTANCE: &str = "distance";
pub const ELEVATION_GAIN: &str = "elevation_gain";
pub const NOTES: &str = "notes";
pub const STEPS: &str = "steps";
pub const SYMPTOMS_OTHER: &str = "symptoms_other";
pub const SYMPTOMS_PHYSICAL: &str = "symptoms_physical";
pub const SEXUAL_ACTIVITY: &str = "sexual_activity";
pub const VALUE: &str = "value";
pub const MEAL_RELATION: &str = "meal_relation";
pub const PRESSURE_SYSTOLIC: &str = "pressure_systolic";
pub const PRESSURE_DIASTOLIC: &str = "pressure_diastolic";
pub const MOOD: &str = "mood";

/// Columns present in every record row, whatever the family
pub const COMMON: &[&str] = &[ID, METRIC, VERSION, TIME];

// ============================================================================
// Medical profile columns
// ============================================================================

pub mod profile {
    pub const ALLERGIES: &str = "allergies";
    pub const BLOOD_TYPE: &str = "blood_type";
    /// Height in meters
    pub const HEIGHT: &str = "height";
    pub const MEDICATIONS: &str = "medications";
    pub const NOTES: &str = "notes";
    pub const ORGAN_DONOR: &str = "organ_donor";
    pub const BIOLOGICAL_SEX: &str = "sex";

    pub const ALL: &[&str] = &[
        ALLERGIES,
        BLOOD_TYPE,
        HEIGHT,
        MEDICATIONS,
        NOTES,
        ORGAN_DONOR,
        BIOLOGICAL_SEX,
    ];
}

// ============================================================================
// Schema version
// ============================================================================

/// Schema version tag stored in the `_version` column
///
/// Versions are named after chemical elements; the first release is
/// Actinium. A row without a tag, or with a tag older than [`SchemaVersion::MIN`],
/// is read as `MIN`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaVersion(i64);

impl SchemaVersion {
    pub const ACTINIUM: SchemaVersion = SchemaVersion(1);

    /// Oldest version this library can read
    pub const MIN: SchemaVersion = SchemaVersion::ACTINIUM;

    /// Version written by this library
    pub const CURRENT: SchemaVersion = SchemaVersion::ACTINIUM;

    pub fn from_raw(raw: i64) -> Self {
        if raw < Self::MIN.0 {
            Self::MIN
        } else {
            SchemaVersion(raw)
        }
    }

    pub fn raw(self) -> i64 {
        self.0
    }
}

impl Default for SchemaVersion {
    fn default() -> Self {
        Self::CURRENT
    }
}
