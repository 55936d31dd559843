//! Closed small-integer value domains.
//!
//! Raw values outside a domain decode to its `Unknown` variant.

use serde::{Deserialize, Serialize};

/// Relation of a glucose reading to a meal
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealRelation {
    #[default]
    Unknown,
    Before,
    After,
}

impl MealRelation {
    pub fn from_raw(raw: i64) -> Self {
        match raw {
            1 => MealRelation::Before,
            2 => MealRelation::After,
            _ => MealRelation::Unknown,
        }
    }

    pub fn raw(self) -> i64 {
        match self {
            MealRelation::Unknown => 0,
            MealRelation::Before => 1,
            MealRelation::After => 2,
        }
    }
}

/// ABO/Rh blood group
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BloodType {
    #[default]
    Unknown,
    ONeg,
    OPos,
    ANeg,
    APos,
    BNeg,
    BPos,
    AbNeg,
    AbPos,
}

impl BloodType {
    const ALL: [BloodType; 9] = [
        BloodType::Unknown,
        BloodType::ONeg,
        BloodType::OPos,
        BloodType::ANeg,
        BloodType::APos,
        BloodType::BNeg,
        BloodType::BPos,
        BloodType::AbNeg,
        BloodType::AbPos,
    ];

    pub fn from_raw(raw: i64) -> Self {
        usize::try_from(raw)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
            .unwrap_or(BloodType::Unknown)
    }

    pub fn raw(self) -> i64 {
        self as i64
    }
}

/// Biological sex recorded in the medical profile
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiologicalSex {
    #[default]
    Unknown,
    Female,
    Male,
}

impl BiologicalSex {
    pub fn from_raw(raw: i64) -> Self {
        match raw {
            1 => BiologicalSex::Female,
            2 => BiologicalSex::Male,
            _ => BiologicalSex::Unknown,
        }
    }

    pub fn raw(self) -> i64 {
        self as i64
    }
}

/// Organ donor status recorded in the medical profile
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrganDonor {
    #[default]
    Unknown,
    Yes,
    No,
}

impl OrganDonor {
    pub fn from_raw(raw: i64) -> Self {
        match raw {
            1 => OrganDonor::Yes,
            2 => OrganDonor::No,
            _ => OrganDonor::Unknown,
        }
    }

    pub fn raw(self) -> i64 {
        self as i64
    }
}
