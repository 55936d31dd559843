use super::{record_family, value_record, MetricRecord, RecordCore};
use crate::columns::*;
use crate::metric::{Metric, MetricFamily};
use crate::store::{ColumnValue, Row};
use crate::values::{BloodGlucose, MealRelation, Pressure, Scalar};
use serde::{Deserialize, Serialize};

record_family! {
    /// Records of the heart and blood family
    HeartBloodRecord(MetricFamily::HeartBlood) {
        BloodAlcoholConcentration(BloodAlcoholConcentrationRecord),
        BloodPressure(BloodPressureRecord),
        Glucose(GlucoseRecord),
        HeartRate(HeartRateRecord),
        PerfusionIndex(PerfusionIndexRecord),
    }
    generic GenericHeartBloodRecord,
    cell HEART_BLOOD_REPO
}

value_record! {
    /// Fraction of alcohol in the blood, in `0.0..=1.0`
    BloodAlcoholConcentrationRecord: HeartBloodRecord::BloodAlcoholConcentration,
    Scalar, write value, read Scalar::new
}

value_record! {
    /// Beats per minute
    HeartRateRecord: HeartBloodRecord::HeartRate,
    Scalar, write value, read Scalar::new
}

value_record! {
    PerfusionIndexRecord: HeartBloodRecord::PerfusionIndex,
    Scalar, write value, read Scalar::new
}

/// Systolic and diastolic pressure of one measurement
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BloodPressureRecord {
    pub core: RecordCore,
    pub systolic: Pressure,
    pub diastolic: Pressure,
}

impl BloodPressureRecord {
    pub fn new(time: i64, systolic: Pressure, diastolic: Pressure) -> Self {
        BloodPressureRecord {
            core: RecordCore::new(time),
            systolic,
            diastolic,
        }
    }
}

impl MetricRecord for BloodPressureRecord {
    type Family = HeartBloodRecord;
    const METRIC: Metric = Metric::BloodPressure;

    fn core(&self) -> &RecordCore {
        &self.core
    }

    fn write_columns(&self, row: &mut Row) {
        row.set(PRESSURE_SYSTOLIC, self.systolic.as_pascals());
        row.set(PRESSURE_DIASTOLIC, self.diastolic.as_pascals());
    }

    fn read_columns(core: RecordCore, row: &Row) -> Self {
        BloodPressureRecord {
            core,
            systolic: Pressure::pascals(row.get_f64(PRESSURE_SYSTOLIC)),
            diastolic: Pressure::pascals(row.get_f64(PRESSURE_DIASTOLIC)),
        }
    }
}

/// Blood glucose reading
///
/// The reading is whole mg/dL and is stored as an integer. Real cells
/// written by older clients are rounded on read.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GlucoseRecord {
    pub core: RecordCore,
    pub meal_relation: MealRelation,
    pub value: BloodGlucose,
}

impl GlucoseRecord {
    pub fn new(time: i64, meal_relation: MealRelation, value: BloodGlucose) -> Self {
        GlucoseRecord {
            core: RecordCore::new(time),
            meal_relation,
            value,
        }
    }
}

impl MetricRecord for GlucoseRecord {
    type Family = HeartBloodRecord;
    const METRIC: Metric = Metric::Glucose;

    fn core(&self) -> &RecordCore {
        &self.core
    }

    fn write_columns(&self, row: &mut Row) {
        row.set(MEAL_RELATION, self.meal_relation.raw());
        row.set(VALUE, self.value.as_mg_dl());
    }

    fn read_columns(core: RecordCore, row: &Row) -> Self {
        GlucoseRecord {
            core,
            meal_relation: MealRelation::from_raw(row.get_i64(MEAL_RELATION)),
            value: BloodGlucose::mg_dl(read_mg_dl(row)),
        }
    }
}

fn read_mg_dl(row: &Row) -> i64 {
    match row.get(VALUE) {
        Some(ColumnValue::Real(v)) => v.round() as i64,
        _ => row.get_i64(VALUE),
    }
}

/// Heart and blood row whose metric this library does not know
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenericHeartBloodRecord {
    pub core: RecordCore,
    pub metric_id: i32,
    pub notes: String,
    pub meal_relation: MealRelation,
    pub systolic: Pressure,
    pub diastolic: Pressure,
    pub value: Scalar,
}

impl GenericHeartBloodRecord {
    fn read(metric_id: i32, core: RecordCore, row: &Row) -> Self {
        GenericHeartBloodRecord {
            core,
            metric_id,
            notes: row.get_string(NOTES),
            meal_relation: MealRelation::from_raw(row.get_i64(MEAL_RELATION)),
            systolic: Pressure::pascals(row.get_f64(PRESSURE_SYSTOLIC)),
            diastolic: Pressure::pascals(row.get_f64(PRESSURE_DIASTOLIC)),
            value: Scalar::new(row.get_f64(VALUE)),
        }
    }

    fn write_columns(&self, row: &mut Row) {
        row.set(NOTES, self.notes.as_str());
        row.set(MEAL_RELATION, self.meal_relation.raw());
        row.set(PRESSURE_SYSTOLIC, self.systolic.as_pascals());
        row.set(PRESSURE_DIASTOLIC, self.diastolic.as_pascals());
        row.set(VALUE, self.value.value());
    }
}
