use super::UnitValue;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

const MMOL_L_TO_MG_DL: f64 = 18.0;

/// A blood glucose concentration, stored as whole milligrams per deciliter
///
/// The store keeps glucose readings as integers, so values built from mmol/L
/// are rounded to the nearest mg/dL on construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BloodGlucose(i64);

impl BloodGlucose {
    pub const ZERO: BloodGlucose = BloodGlucose(0);

    pub fn mg_dl(value: i64) -> Self {
        Self(value)
    }

    pub fn mmol_l(value: f64) -> Self {
        Self((value * MMOL_L_TO_MG_DL).round() as i64)
    }

    pub fn as_mg_dl(&self) -> i64 {
        self.0
    }

    pub fn as_mmol_l(&self) -> f64 {
        self.0 as f64 / MMOL_L_TO_MG_DL
    }
}

impl UnitValue for BloodGlucose {
    fn plus(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    fn minus(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl Add for BloodGlucose {
    type Output = BloodGlucose;

    fn add(self, other: Self) -> Self {
        self.plus(other)
    }
}

impl Sub for BloodGlucose {
    type Output = BloodGlucose;

    fn sub(self, other: Self) -> Self {
        self.minus(other)
    }
}
