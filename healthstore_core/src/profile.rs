//! The user's medical profile: a single row kept beside the records.

use crate::columns::profile::*;
use crate::store::Row;
use crate::values::{BiologicalSex, BloodType, Length, OrganDonor};
use serde::{Deserialize, Serialize};

/// Medical information about the user
///
/// A profile that was never set reads back as `MedicalProfile::default()`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MedicalProfile {
    pub allergies: String,
    pub blood_type: BloodType,
    pub height: Length,
    pub medications: String,
    pub notes: String,
    pub organ_donor: OrganDonor,
    pub biological_sex: BiologicalSex,
}

impl MedicalProfile {
    pub fn to_row(&self) -> Row {
        Row::new()
            .with(ALLERGIES, self.allergies.as_str())
            .with(BLOOD_TYPE, self.blood_type.raw())
            .with(HEIGHT, self.height.as_meters())
            .with(MEDICATIONS, self.medications.as_str())
            .with(NOTES, self.notes.as_str())
            .with(ORGAN_DONOR, self.organ_donor.raw())
            .with(BIOLOGICAL_SEX, self.biological_sex.raw())
    }

    pub fn from_row(row: &Row) -> Self {
        MedicalProfile {
            allergies: row.get_string(ALLERGIES),
            blood_type: BloodType::from_raw(row.get_i64(BLOOD_TYPE)),
            height: Length::meters(row.get_f64(HEIGHT)),
            medications: row.get_string(MEDICATIONS),
            notes: row.get_string(NOTES),
            organ_donor: OrganDonor::from_raw(row.get_i64(ORGAN_DONOR)),
            biological_sex: BiologicalSex::from_raw(row.get_i64(BIOLOGICAL_SEX)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_round_trip() {
        let profile = MedicalProfile {
            allergies: "penicillin".into(),
            blood_type: BloodType::AbNeg,
            height: Length::centimeters(181.0),
            medications: String::new(),
            notes: "asthma".into(),
            organ_donor: OrganDonor::Yes,
            biological_sex: BiologicalSex::Female,
        };

        let row = profile.to_row();
        assert_eq!(row.get_i64(BLOOD_TYPE), 7);
        assert_eq!(row.get_i64(BIOLOGICAL_SEX), 1);
        assert_eq!(MedicalProfile::from_row(&row), profile);
    }

    #[test]
    fn test_empty_row_is_default() {
        assert_eq!(MedicalProfile::from_row(&Row::new()), MedicalProfile::default());
    }

    #[test]
    fn test_out_of_range_kinds_read_as_unknown() {
        let row = MedicalProfile::default()
            .to_row()
            .with(BLOOD_TYPE, 42)
            .with(ORGAN_DONOR, -1);
        let profile = MedicalProfile::from_row(&row);
        assert_eq!(profile.blood_type, BloodType::Unknown);
        assert_eq!(profile.organ_donor, OrganDonor::Unknown);
    }
}
