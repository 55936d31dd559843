use super::{record_family, value_record, MetricRecord, RecordCore};
use crate::columns::*;
use crate::metric::{Metric, MetricFamily};
use crate::store::Row;
use crate::values::Scalar;
use serde::{Deserialize, Serialize};

record_family! {
    /// Records of the breathing family
    BreathingRecord(MetricFamily::Breathing) {
        InhalerUsage(InhalerUsageRecord),
        OxygenSaturation(OxygenSaturationRecord),
        PeakExpiratoryFlow(PeakExpiratoryFlowRecord),
        RespiratoryRate(RespiratoryRateRecord),
        VitalCapacity(VitalCapacityRecord),
    }
    generic GenericBreathingRecord,
    cell BREATHING_REPO
}

value_record! {
    /// SpO2 as a fraction in `0.0..=1.0`
    OxygenSaturationRecord: BreathingRecord::OxygenSaturation,
    Scalar, write value, read Scalar::new
}

value_record! {
    /// Liters per minute
    PeakExpiratoryFlowRecord: BreathingRecord::PeakExpiratoryFlow,
    Scalar, write value, read Scalar::new
}

value_record! {
    /// Breaths per minute
    RespiratoryRateRecord: BreathingRecord::RespiratoryRate,
    Scalar, write value, read Scalar::new
}

value_record! {
    /// Liters
    VitalCapacityRecord: BreathingRecord::VitalCapacity,
    Scalar, write value, read Scalar::new
}

/// One use of an inhaler
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InhalerUsageRecord {
    pub core: RecordCore,
    pub notes: String,
}

impl InhalerUsageRecord {
    pub fn new(time: i64, notes: impl Into<String>) -> Self {
        InhalerUsageRecord {
            core: RecordCore::new(time),
            notes: notes.into(),
        }
    }
}

impl MetricRecord for InhalerUsageRecord {
    type Family = BreathingRecord;
    const METRIC: Metric = Metric::InhalerUsage;

    fn core(&self) -> &RecordCore {
        &self.core
    }

    fn write_columns(&self, row: &mut Row) {
        row.set(NOTES, self.notes.as_str());
    }

    fn read_columns(core: RecordCore, row: &Row) -> Self {
        InhalerUsageRecord {
            core,
            notes: row.get_string(NOTES),
        }
    }
}

/// Breathing row whose metric this library does not know
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenericBreathingRecord {
    pub core: RecordCore,
    pub metric_id: i32,
    pub notes: String,
    pub value: Scalar,
}

impl GenericBreathingRecord {
    fn read(metric_id: i32, core: RecordCore, row: &Row) -> Self {
        GenericBreathingRecord {
            core,
            metric_id,
            notes: row.get_string(NOTES),
            value: Scalar::new(row.get_f64(VALUE)),
        }
    }

    fn write_columns(&self, row: &mut Row) {
        row.set(NOTES, self.notes.as_str());
        row.set(VALUE, self.value.value());
    }
}
