use super::{record_family, value_record, MetricRecord, RecordCore};
use crate::columns::*;
use crate::metric::{Metric, MetricFamily};
use crate::store::Row;
use crate::values::{
    flags_from_column, flags_to_column, Length, Mass, MenstrualCycleOtherSymptoms,
    MenstrualCyclePhysicalSymptoms, Scalar, SexualActivity, Temperature,
};
use serde::{Deserialize, Serialize};

record_family! {
    /// Records of the body family
    BodyRecord(MetricFamily::Body) {
        AbdominalCircumference(AbdominalCircumferenceRecord),
        BodyMassIndex(BodyMassIndexRecord),
        BodyTemperature(BodyTemperatureRecord),
        LeanBodyMass(LeanBodyMassRecord),
        MenstrualCycle(MenstrualCycleRecord),
        UvIndex(UvIndexRecord),
        WaterIntake(WaterIntakeRecord),
        Weight(WeightRecord),
    }
    generic GenericBodyRecord,
    cell BODY_REPO
}

value_record! {
    /// Waist circumference
    AbdominalCircumferenceRecord: BodyRecord::AbdominalCircumference,
    Length, write as_meters, read Length::meters
}

value_record! {
    /// Body mass index in kg/m²
    BodyMassIndexRecord: BodyRecord::BodyMassIndex,
    Scalar, write value, read Scalar::new
}

value_record! {
    BodyTemperatureRecord: BodyRecord::BodyTemperature,
    Temperature, write as_celsius, read Temperature::celsius
}

value_record! {
    /// Lean share of the body mass, as a fraction in `0.0..=1.0`
    LeanBodyMassRecord: BodyRecord::LeanBodyMass,
    Scalar, write value, read Scalar::new
}

value_record! {
    UvIndexRecord: BodyRecord::UvIndex,
    Scalar, write value, read Scalar::new
}

value_record! {
    WeightRecord: BodyRecord::Weight,
    Mass, write as_kilograms, read Mass::kilograms
}

/// One day of a menstrual cycle
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MenstrualCycleRecord {
    pub core: RecordCore,
    pub other_symptoms: MenstrualCycleOtherSymptoms,
    pub physical_symptoms: MenstrualCyclePhysicalSymptoms,
    pub sexual_activity: SexualActivity,
    /// Flow intensity
    pub flow: Scalar,
}

impl MenstrualCycleRecord {
    pub fn new(
        time: i64,
        other_symptoms: MenstrualCycleOtherSymptoms,
        physical_symptoms: MenstrualCyclePhysicalSymptoms,
        sexual_activity: SexualActivity,
        flow: Scalar,
    ) -> Self {
        MenstrualCycleRecord {
            core: RecordCore::new(time),
            other_symptoms,
            physical_symptoms,
            sexual_activity,
            flow,
        }
    }
}

impl MetricRecord for MenstrualCycleRecord {
    type Family = BodyRecord;
    const METRIC: Metric = Metric::MenstrualCycle;

    fn core(&self) -> &RecordCore {
        &self.core
    }

    fn write_columns(&self, row: &mut Row) {
        row.set(SYMPTOMS_OTHER, flags_to_column(self.other_symptoms));
        row.set(SYMPTOMS_PHYSICAL, flags_to_column(self.physical_symptoms));
        row.set(SEXUAL_ACTIVITY, flags_to_column(self.sexual_activity));
        row.set(VALUE, self.flow.value());
    }

    fn read_columns(core: RecordCore, row: &Row) -> Self {
        MenstrualCycleRecord {
            core,
            other_symptoms: flags_from_column(row.get_i64(SYMPTOMS_OTHER)),
            physical_symptoms: flags_from_column(row.get_i64(SYMPTOMS_PHYSICAL)),
            sexual_activity: flags_from_column(row.get_i64(SEXUAL_ACTIVITY)),
            flow: Scalar::new(row.get_f64(VALUE)),
        }
    }
}

/// Water drunk, counted in glasses
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WaterIntakeRecord {
    pub core: RecordCore,
    pub glasses: Scalar,
    pub notes: String,
}

impl WaterIntakeRecord {
    pub fn new(time: i64, glasses: Scalar, notes: impl Into<String>) -> Self {
        WaterIntakeRecord {
            core: RecordCore::new(time),
            glasses,
            notes: notes.into(),
        }
    }
}

impl MetricRecord for WaterIntakeRecord {
    type Family = BodyRecord;
    const METRIC: Metric = Metric::WaterIntake;

    fn core(&self) -> &RecordCore {
        &self.core
    }

    fn write_columns(&self, row: &mut Row) {
        row.set(VALUE, self.glasses.value());
        row.set(NOTES, self.notes.as_str());
    }

    fn read_columns(core: RecordCore, row: &Row) -> Self {
        WaterIntakeRecord {
            core,
            glasses: Scalar::new(row.get_f64(VALUE)),
            notes: row.get_string(NOTES),
        }
    }
}

/// Body row whose metric this library does not know
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenericBodyRecord {
    pub core: RecordCore,
    pub metric_id: i32,
    pub notes: String,
    pub other_symptoms: MenstrualCycleOtherSymptoms,
    pub physical_symptoms: MenstrualCyclePhysicalSymptoms,
    pub sexual_activity: SexualActivity,
    pub value: Scalar,
}

impl GenericBodyRecord {
    fn read(metric_id: i32, core: RecordCore, row: &Row) -> Self {
        GenericBodyRecord {
            core,
            metric_id,
            notes: row.get_string(NOTES),
            other_symptoms: flags_from_column(row.get_i64(SYMPTOMS_OTHER)),
            physical_symptoms: flags_from_column(row.get_i64(SYMPTOMS_PHYSICAL)),
            sexual_activity: flags_from_column(row.get_i64(SEXUAL_ACTIVITY)),
            value: Scalar::new(row.get_f64(VALUE)),
        }
    }

    fn write_columns(&self, row: &mut Row) {
        row.set(NOTES, self.notes.as_str());
        row.set(SYMPTOMS_OTHER, flags_to_column(self.other_symptoms));
        row.set(SYMPTOMS_PHYSICAL, flags_to_column(self.physical_symptoms));
        row.set(SEXUAL_ACTIVITY, flags_to_column(self.sexual_activity));
        row.set(VALUE, self.value.value());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::RecordFamily;

    #[test]
    fn test_weight_written_in_kilograms() {
        let record = WeightRecord::new(1, Mass::pounds(154.0));
        let row = record.to_family_row();
        assert!((row.get_f64(VALUE) - 69.853_224_98).abs() < 1e-6);
        assert_eq!(BodyRecord::parse_row(&row), BodyRecord::Weight(record));
    }

    #[test]
    fn test_abdominal_circumference_round_trip() {
        let record = AbdominalCircumferenceRecord::new(2, Length::centimeters(82.5));
        let decoded = BodyRecord::parse_row(&record.to_family_row());
        assert_eq!(decoded.metric(), Metric::AbdominalCircumference);
        assert_eq!(
            AbdominalCircumferenceRecord::try_from(decoded).unwrap().value,
            Length::centimeters(82.5)
        );
    }

    #[test]
    fn test_menstrual_cycle_flags_round_trip() {
        let record = MenstrualCycleRecord::new(
            3,
            MenstrualCycleOtherSymptoms::INSOMNIA | MenstrualCycleOtherSymptoms::MOOD_SWINGS,
            MenstrualCyclePhysicalSymptoms::CRAMPS,
            SexualActivity::PROTECTED_SEX,
            Scalar::new(2.0),
        );
        let row = record.to_family_row();
        assert_eq!(row.get_i64(SYMPTOMS_OTHER), 16 + 32);
        assert_eq!(row.get_i64(SYMPTOMS_PHYSICAL), 4);

        let decoded = BodyRecord::parse_row(&row);
        assert_eq!(decoded, BodyRecord::MenstrualCycle(record));
    }

    #[test]
    fn test_unknown_flag_bits_dropped_on_read() {
        let row = MenstrualCycleRecord::default()
            .to_family_row()
            .with(SEXUAL_ACTIVITY, 8 | 64);
        let record = MenstrualCycleRecord::try_from(BodyRecord::parse_row(&row)).unwrap();
        assert_eq!(record.sexual_activity, SexualActivity::SEX);
    }

    #[test]
    fn test_water_intake_notes() {
        let record = WaterIntakeRecord::new(4, Scalar::new(3.0), "after run");
        let decoded = BodyRecord::parse_row(&record.to_family_row());
        assert_eq!(decoded, BodyRecord::WaterIntake(record));
    }

    #[test]
    fn test_generic_keeps_every_column() {
        let row = WaterIntakeRecord::new(5, Scalar::new(1.5), "x")
            .to_family_row()
            .with(METRIC, 1099)
            .with(SYMPTOMS_PHYSICAL, 1);

        let BodyRecord::Generic(generic) = BodyRecord::parse_row(&row) else {
            panic!("expected generic record");
        };
        assert_eq!(generic.metric_id, 1099);
        assert_eq!(generic.notes, "x");
        assert_eq!(generic.value, Scalar::new(1.5));
        assert_eq!(generic.physical_symptoms, MenstrualCyclePhysicalSymptoms::ACNE);
    }
}
