//! Health records.
//!
//! Each family of metrics is one closed enum with a variant per known metric
//! plus a `Generic` fallback. Every variant embeds a [`RecordCore`] holding
//! identity, time and schema version.
//!
//! Encoding always writes the full column set of the family, filling columns
//! the variant does not use with their defaults. Decoding is total: a row
//! whose metric is not known to this library becomes the family's `Generic`
//! variant carrying every column.

use crate::columns::{self, SchemaVersion};
use crate::metric::{Metric, MetricFamily};
use crate::repo::RecordsRepo;
use crate::store::{ColumnValue, Row};
use chrono::{DateTime, Utc};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Current wall-clock time in milliseconds since the Unix epoch
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

// ============================================================================
// Shared fields
// ============================================================================

/// Fields shared by every record
///
/// Only `time` takes part in equality and hashing: two records describing
/// the same observation are equal whatever their store identity.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct RecordCore {
    /// Store identity, `0` until persisted
    pub id: i64,
    /// Milliseconds since the Unix epoch
    pub time: i64,
    pub version: SchemaVersion,
}

impl RecordCore {
    pub fn new(time: i64) -> Self {
        RecordCore {
            id: 0,
            time,
            version: SchemaVersion::CURRENT,
        }
    }

    pub fn now() -> Self {
        Self::new(now_millis())
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn is_persisted(&self) -> bool {
        self.id > 0
    }

    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.time)
    }

    pub(crate) fn read(row: &Row) -> Self {
        RecordCore {
            id: row.get_i64(columns::ID),
            time: row.get_i64(columns::TIME),
            version: SchemaVersion::from_raw(row.get_i64(columns::VERSION)),
        }
    }

    pub(crate) fn write(&self, row: &mut Row, metric_id: i32) {
        row.set(columns::ID, self.id);
        row.set(columns::METRIC, metric_id);
        row.set(columns::TIME, self.time);
        row.set(columns::VERSION, self.version.raw());
    }
}

impl PartialEq for RecordCore {
    fn eq(&self, other: &Self) -> bool {
        self.time == other.time
    }
}

impl Eq for RecordCore {}

impl Hash for RecordCore {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.time.hash(state);
    }
}

// ============================================================================
// Traits
// ============================================================================

/// A closed family of records sharing one repository and row schema
pub trait RecordFamily: Clone + fmt::Debug + PartialEq + Send + Sync + Sized + 'static {
    const FAMILY: MetricFamily;

    fn core(&self) -> &RecordCore;

    fn core_mut(&mut self) -> &mut RecordCore;

    /// Raw metric id, which for `Generic` records may be unknown to this library
    fn metric_id(&self) -> i32;

    /// Write the variant's own columns
    fn write_columns(&self, row: &mut Row);

    /// Decode a row of this family; never fails
    fn parse_row(row: &Row) -> Self;

    /// Cell holding the process-wide repository of the family
    fn instance_cell() -> &'static OnceCell<RecordsRepo<Self>>;

    fn id(&self) -> i64 {
        self.core().id
    }

    fn time(&self) -> i64 {
        self.core().time
    }

    /// Encode to a row carrying every column of the family
    fn to_row(&self) -> Row {
        let mut row = default_row(Self::FAMILY);
        self.core().write(&mut row, self.metric_id());
        self.write_columns(&mut row);
        row
    }
}

/// A record type bound to exactly one metric
///
/// Leaf records convert into their family enum with `From` and back with
/// `TryFrom`, which hands the record back unchanged on a metric mismatch.
pub trait MetricRecord: Clone + Sized {
    type Family: RecordFamily + From<Self>;

    const METRIC: Metric;

    fn core(&self) -> &RecordCore;

    fn write_columns(&self, row: &mut Row);

    fn read_columns(core: RecordCore, row: &Row) -> Self;

    /// Encode through the family, so the row carries every family column
    fn to_family_row(&self) -> Row {
        Self::Family::from(self.clone()).to_row()
    }
}

// ============================================================================
// Row helpers
// ============================================================================

fn column_default(column: &str) -> ColumnValue {
    match column {
        columns::NOTES => ColumnValue::Text(String::new()),
        columns::AVG_SPEED
        | columns::CALORIES
        | columns::DISTANCE
        | columns::ELEVATION_GAIN
        | columns::VALUE
        | columns::PRESSURE_SYSTOLIC
        | columns::PRESSURE_DIASTOLIC => ColumnValue::Real(0.0),
        _ => ColumnValue::Integer(0),
    }
}

/// Row holding every column of `family` at its default
pub(crate) fn default_row(family: MetricFamily) -> Row {
    let mut row = Row::new();
    for column in family.columns() {
        row.set(column, column_default(column));
    }
    row
}

/// Generates a family enum, its `RecordFamily` impl and the conversions
/// between the enum and its leaf records. Variant names match `Metric`.
macro_rules! record_family {
    (
        $(#[$meta:meta])*
        $family:ident($kind:expr) {
            $($variant:ident($leaf:ident),)+
        }
        generic $generic:ident,
        cell $cell:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $family {
            $($variant($leaf),)+
            Generic($generic),
        }

        impl $family {
            /// Metric of the record; `Unknown` when its id is not in the catalogue
            pub fn metric(&self) -> $crate::metric::Metric {
                $crate::metric::Metric::from_id(
                    <Self as $crate::records::RecordFamily>::metric_id(self),
                )
            }
        }

        static $cell: once_cell::sync::OnceCell<$crate::repo::RecordsRepo<$family>> =
            once_cell::sync::OnceCell::new();

        impl $crate::records::RecordFamily for $family {
            const FAMILY: $crate::metric::MetricFamily = $kind;

            fn core(&self) -> &$crate::records::RecordCore {
                match self {
                    $($family::$variant(r) => &r.core,)+
                    $family::Generic(r) => &r.core,
                }
            }

            fn core_mut(&mut self) -> &mut $crate::records::RecordCore {
                match self {
                    $($family::$variant(r) => &mut r.core,)+
                    $family::Generic(r) => &mut r.core,
                }
            }

            fn metric_id(&self) -> i32 {
                match self {
                    $($family::$variant(_) => $crate::metric::Metric::$variant.id(),)+
                    $family::Generic(r) => r.metric_id,
                }
            }

            fn write_columns(&self, row: &mut $crate::store::Row) {
                match self {
                    $($family::$variant(r) => {
                        $crate::records::MetricRecord::write_columns(r, row)
                    })+
                    $family::Generic(r) => r.write_columns(row),
                }
            }

            fn parse_row(row: &$crate::store::Row) -> Self {
                let core = $crate::records::RecordCore::read(row);
                let metric_id = row.get_i32($crate::columns::METRIC);
                match $crate::metric::Metric::from_id(metric_id) {
                    $($crate::metric::Metric::$variant => $family::$variant(
                        <$leaf as $crate::records::MetricRecord>::read_columns(core, row),
                    ),)+
                    _ => $family::Generic($generic::read(metric_id, core, row)),
                }
            }

            fn instance_cell() -> &'static once_cell::sync::OnceCell<$crate::repo::RecordsRepo<Self>> {
                &$cell
            }
        }

        $(
            impl From<$leaf> for $family {
                fn from(record: $leaf) -> Self {
                    $family::$variant(record)
                }
            }

            impl TryFrom<$family> for $leaf {
                type Error = $family;

                fn try_from(record: $family) -> std::result::Result<Self, $family> {
                    match record {
                        $family::$variant(r) => Ok(r),
                        other => Err(other),
                    }
                }
            }
        )+

        impl From<$generic> for $family {
            fn from(record: $generic) -> Self {
                $family::Generic(record)
            }
        }
    };
}

pub(crate) use record_family;

/// Generates a leaf record holding a single quantity in the `value` column.
macro_rules! value_record {
    (
        $(#[$meta:meta])*
        $name:ident: $family:ident::$metric:ident,
        $ty:ty, write $to:ident, read $from:path
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub struct $name {
            pub core: $crate::records::RecordCore,
            pub value: $ty,
        }

        impl $name {
            pub fn new(time: i64, value: $ty) -> Self {
                $name {
                    core: $crate::records::RecordCore::new(time),
                    value,
                }
            }
        }

        impl $crate::records::MetricRecord for $name {
            type Family = $family;
            const METRIC: $crate::metric::Metric = $crate::metric::Metric::$metric;

            fn core(&self) -> &$crate::records::RecordCore {
                &self.core
            }

            fn write_columns(&self, row: &mut $crate::store::Row) {
                row.set($crate::columns::VALUE, self.value.$to());
            }

            fn read_columns(
                core: $crate::records::RecordCore,
                row: &$crate::store::Row,
            ) -> Self {
                $name {
                    core,
                    value: $from(row.get_f64($crate::columns::VALUE)),
                }
            }
        }
    };
}

pub(crate) use value_record;

mod activity;
mod body;
mod breathing;
mod heart_blood;
mod mindfulness;

pub use activity::*;
pub use body::*;
pub use breathing::*;
pub use heart_blood::*;
pub use mindfulness::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::{Length, Mass, Scalar, Speed};
    use std::collections::HashSet;

    #[test]
    fn test_core_equality_ignores_id_and_version() {
        let a = RecordCore::new(1_000);
        let mut b = RecordCore::new(1_000).with_id(9);
        b.version = SchemaVersion::from_raw(3);
        assert_eq!(a, b);
        assert_ne!(a, RecordCore::new(1_001));
    }

    #[test]
    fn test_core_persisted_once_id_assigned() {
        let core = RecordCore::new(1_000);
        assert!(!core.is_persisted());
        assert!(core.with_id(4).is_persisted());
    }

    #[test]
    fn test_record_equality_ignores_id() {
        let record = RunningRecord::new(
            5_000,
            1_800_000,
            Speed::kilometers_per_hour(10.0),
            Length::kilometers(5.0),
        );
        let mut stored = record.clone();
        stored.core.id = 44;

        assert_eq!(record, stored);
        let mut set = HashSet::new();
        set.insert(ActivityRecord::from(record));
        assert!(set.contains(&ActivityRecord::from(stored)));
    }

    #[test]
    fn test_records_of_different_metrics_differ() {
        let weight = BodyRecord::from(WeightRecord::new(10, Mass::kilograms(70.0)));
        let generic = BodyRecord::from(GenericBodyRecord {
            core: RecordCore::new(10),
            metric_id: 1008,
            value: Scalar::new(70.0),
            ..GenericBodyRecord::default()
        });
        assert_ne!(weight, generic);
    }

    #[test]
    fn test_to_row_fills_family_columns() {
        let row = ActivityRecord::from(WorkoutRecord::new(1, 60_000, 300.0, "legs")).to_row();
        for column in MetricFamily::Activity.columns() {
            assert!(row.contains(column), "missing {}", column);
        }
        assert_eq!(row.get_f64(columns::AVG_SPEED), 0.0);
        assert_eq!(row.get_i64(columns::METRIC), Metric::Workout.id() as i64);
        assert_eq!(row.get_i64(columns::VERSION), SchemaVersion::CURRENT.raw());
    }

    #[test]
    fn test_missing_version_reads_as_min() {
        let row = WeightRecord::new(7, Mass::kilograms(80.0))
            .to_family_row()
            .with(columns::VERSION, ColumnValue::Null);
        let record = BodyRecord::parse_row(&row);
        assert_eq!(record.core().version, SchemaVersion::MIN);
    }

    #[test]
    fn test_timestamp() {
        let core = RecordCore::new(86_400_000);
        let ts = core.timestamp().unwrap();
        assert_eq!(ts.timestamp(), 86_400);
    }
}
