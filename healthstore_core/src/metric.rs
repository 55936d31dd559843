//! Metric catalogue.
//!
//! A metric is a kind of health observation. Ids are partitioned into blocks
//! of one thousand per family, so the family of any id (even one this
//! library does not know) follows from integer division.

use crate::columns;
use serde::{Deserialize, Serialize};

/// Path segment of the medical profile address
pub const PROFILE_PATH: &str = "profile";

// ============================================================================
// Families
// ============================================================================

/// Record family: one repository and one base address per family
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricFamily {
    Activity,
    Body,
    Breathing,
    HeartBlood,
    Mindfulness,
}

impl MetricFamily {
    pub const ALL: [MetricFamily; 5] = [
        MetricFamily::Activity,
        MetricFamily::Body,
        MetricFamily::Breathing,
        MetricFamily::HeartBlood,
        MetricFamily::Mindfulness,
    ];

    /// First id of the family's block
    pub fn block_start(self) -> i32 {
        match self {
            MetricFamily::Activity => 0,
            MetricFamily::Body => 1000,
            MetricFamily::Breathing => 2000,
            MetricFamily::HeartBlood => 3000,
            MetricFamily::Mindfulness => 4000,
        }
    }

    /// Family whose block contains `id`, if any
    pub fn of_id(id: i32) -> Option<MetricFamily> {
        if id < 0 {
            return None;
        }
        match id / 1000 {
            0 => Some(MetricFamily::Activity),
            1 => Some(MetricFamily::Body),
            2 => Some(MetricFamily::Breathing),
            3 => Some(MetricFamily::HeartBlood),
            4 => Some(MetricFamily::Mindfulness),
            _ => None,
        }
    }

    /// Path segment of the family's base address
    pub fn base_path(self) -> &'static str {
        match self {
            MetricFamily::Activity => "activity",
            MetricFamily::Body => "body",
            MetricFamily::Breathing => "breathing",
            MetricFamily::HeartBlood => "blood",
            MetricFamily::Mindfulness => "mindfulness",
        }
    }

    /// Known metrics of the family, in id order
    pub fn metrics(self) -> &'static [Metric] {
        match self {
            MetricFamily::Activity => &[
                Metric::Cycling,
                Metric::Running,
                Metric::Walking,
                Metric::Workout,
            ],
            MetricFamily::Body => &[
                Metric::AbdominalCircumference,
                Metric::BodyMassIndex,
                Metric::BodyTemperature,
                Metric::LeanBodyMass,
                Metric::MenstrualCycle,
                Metric::UvIndex,
                Metric::WaterIntake,
                Metric::Weight,
            ],
            MetricFamily::Breathing => &[
                Metric::InhalerUsage,
                Metric::OxygenSaturation,
                Metric::PeakExpiratoryFlow,
                Metric::RespiratoryRate,
                Metric::VitalCapacity,
            ],
            MetricFamily::HeartBlood => &[
                Metric::BloodAlcoholConcentration,
                Metric::BloodPressure,
                Metric::Glucose,
                Metric::HeartRate,
                Metric::PerfusionIndex,
            ],
            MetricFamily::Mindfulness => &[Metric::Meditation, Metric::Mood, Metric::Sleep],
        }
    }

    /// Closed column set of the family's rows, excluding the common columns
    pub fn columns(self) -> &'static [&'static str] {
        use columns::*;
        match self {
            MetricFamily::Activity => &[
                DURATION,
                AVG_SPEED,
                CALORIES,
                DISTANCE,
                ELEVATION_GAIN,
                NOTES,
                STEPS,
            ],
            MetricFamily::Body => &[
                NOTES,
                SYMPTOMS_OTHER,
                SYMPTOMS_PHYSICAL,
                SEXUAL_ACTIVITY,
                VALUE,
            ],
            MetricFamily::Breathing => &[NOTES, VALUE],
            MetricFamily::HeartBlood => &[
                NOTES,
                MEAL_RELATION,
                PRESSURE_SYSTOLIC,
                PRESSURE_DIASTOLIC,
                VALUE,
            ],
            MetricFamily::Mindfulness => &[DURATION, MOOD, NOTES],
        }
    }
}

// ============================================================================
// Metrics
// ============================================================================

/// A kind of health observation, identified by a stable integer id
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum Metric {
    Unknown = -1,

    Cycling = 1,
    Running = 2,
    Walking = 3,
    Workout = 4,

    AbdominalCircumference = 1001,
    BodyMassIndex = 1002,
    BodyTemperature = 1003,
    LeanBodyMass = 1004,
    MenstrualCycle = 1005,
    UvIndex = 1006,
    WaterIntake = 1007,
    Weight = 1008,

    InhalerUsage = 2001,
    OxygenSaturation = 2002,
    PeakExpiratoryFlow = 2003,
    RespiratoryRate = 2004,
    VitalCapacity = 2005,

    BloodAlcoholConcentration = 3001,
    BloodPressure = 3002,
    Glucose = 3003,
    HeartRate = 3004,
    PerfusionIndex = 3005,

    Meditation = 4001,
    Mood = 4002,
    Sleep = 4003,
}

impl Metric {
    pub fn id(self) -> i32 {
        self as i32
    }

    /// Metric with the given id, or `Unknown`
    pub fn from_id(id: i32) -> Metric {
        MetricFamily::of_id(id)
            .and_then(|family| family.metrics().iter().copied().find(|m| m.id() == id))
            .unwrap_or(Metric::Unknown)
    }

    /// Family of the metric; `None` for `Unknown`
    pub fn family(self) -> Option<MetricFamily> {
        MetricFamily::of_id(self.id())
    }

    /// Columns the metric uses beyond the common ones, with their units
    pub fn fields(self) -> &'static [FieldSpec] {
        use columns::*;
        use Unit::*;

        // Struct literals keep the slices promotable to 'static
        macro_rules! f {
            ($column:expr, $unit:expr) => {
                FieldSpec {
                    column: $column,
                    unit: $unit,
                }
            };
        }

        match self {
            Metric::Unknown => &[],

            Metric::Cycling => &[
                f!(DURATION, Milliseconds),
                f!(AVG_SPEED, MetersPerSecond),
                f!(DISTANCE, Meters),
                f!(ELEVATION_GAIN, Meters),
            ],
            Metric::Running => &[
                f!(DURATION, Milliseconds),
                f!(AVG_SPEED, MetersPerSecond),
                f!(DISTANCE, Meters),
            ],
            Metric::Walking => &[
                f!(DURATION, Milliseconds),
                f!(DISTANCE, Meters),
                f!(STEPS, Count),
            ],
            Metric::Workout => &[
                f!(DURATION, Milliseconds),
                f!(CALORIES, Kilocalories),
                f!(NOTES, Text),
            ],

            Metric::AbdominalCircumference => &[f!(VALUE, Meters)],
            Metric::BodyMassIndex => &[f!(VALUE, KilogramsPerSquareMeter)],
            Metric::BodyTemperature => &[f!(VALUE, Celsius)],
            Metric::LeanBodyMass => &[f!(VALUE, Ratio)],
            Metric::MenstrualCycle => &[
                f!(SEXUAL_ACTIVITY, Flags),
                f!(SYMPTOMS_PHYSICAL, Flags),
                f!(SYMPTOMS_OTHER, Flags),
                f!(VALUE, Index),
            ],
            Metric::UvIndex => &[f!(VALUE, Index)],
            Metric::WaterIntake => &[f!(VALUE, Glasses), f!(NOTES, Text)],
            Metric::Weight => &[f!(VALUE, Kilograms)],

            Metric::InhalerUsage => &[f!(NOTES, Text)],
            Metric::OxygenSaturation => &[f!(VALUE, Ratio)],
            Metric::PeakExpiratoryFlow => &[f!(VALUE, LitersPerMinute)],
            Metric::RespiratoryRate => &[f!(VALUE, BreathsPerMinute)],
            Metric::VitalCapacity => &[f!(VALUE, Liters)],

            Metric::BloodAlcoholConcentration => &[f!(VALUE, Ratio)],
            Metric::BloodPressure => &[
                f!(PRESSURE_SYSTOLIC, Pascals),
                f!(PRESSURE_DIASTOLIC, Pascals),
            ],
            Metric::Glucose => &[f!(MEAL_RELATION, Kind), f!(VALUE, MilligramsPerDeciliter)],
            Metric::HeartRate => &[f!(VALUE, BeatsPerMinute)],
            Metric::PerfusionIndex => &[f!(VALUE, Ratio)],

            Metric::Meditation => &[f!(DURATION, Milliseconds)],
            Metric::Mood => &[f!(MOOD, Flags), f!(NOTES, Text)],
            Metric::Sleep => &[f!(DURATION, Milliseconds)],
        }
    }
}

/// One column a metric writes, with the unit it is stored in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub column: &'static str,
    pub unit: Unit,
}

/// Storage unit of a column
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unit {
    Milliseconds,
    Meters,
    MetersPerSecond,
    Kilograms,
    KilogramsPerSquareMeter,
    Pascals,
    Celsius,
    MilligramsPerDeciliter,
    Kilocalories,
    Liters,
    LitersPerMinute,
    BreathsPerMinute,
    BeatsPerMinute,
    Glasses,
    Count,
    /// Fraction in `0.0..=1.0`
    Ratio,
    /// Dimensionless number
    Index,
    /// Bit-flag set
    Flags,
    /// Closed enumeration
    Kind,
    Text,
}
