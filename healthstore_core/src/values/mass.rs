use serde::{Deserialize, Serialize};

const GRAMS_TO_KILOGRAMS: f64 = 0.001;
const OUNCES_TO_KILOGRAMS: f64 = 0.02834952;
const POUNDS_TO_KILOGRAMS: f64 = 0.45359237;

/// A mass, stored in kilograms
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mass(f64);

super::float_unit_value!(Mass);

impl Mass {
    pub fn grams(value: f64) -> Self {
        Self(value * GRAMS_TO_KILOGRAMS)
    }

    pub fn kilograms(value: f64) -> Self {
        Self(value)
    }

    pub fn ounces(value: f64) -> Self {
        Self(value * OUNCES_TO_KILOGRAMS)
    }

    pub fn pounds(value: f64) -> Self {
        Self(value * POUNDS_TO_KILOGRAMS)
    }

    pub fn as_grams(&self) -> f64 {
        self.0 / GRAMS_TO_KILOGRAMS
    }

    pub fn as_kilograms(&self) -> f64 {
        self.0
    }

    pub fn as_ounces(&self) -> f64 {
        self.0 / OUNCES_TO_KILOGRAMS
    }

    pub fn as_pounds(&self) -> f64 {
        self.0 / POUNDS_TO_KILOGRAMS
    }
}
