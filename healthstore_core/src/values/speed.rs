use serde::{Deserialize, Serialize};

const M_S_TO_KM_H: f64 = 3.6;
const M_S_TO_MI_H: f64 = 2.237;

/// A speed, stored in meters per second
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Speed(f64);

super::float_unit_value!(Speed);

impl Speed {
    pub fn kilometers_per_hour(value: f64) -> Self {
        Self(value / M_S_TO_KM_H)
    }

    pub fn meters_per_second(value: f64) -> Self {
        Self(value)
    }

    pub fn miles_per_hour(value: f64) -> Self {
        Self(value / M_S_TO_MI_H)
    }

    pub fn as_kilometers_per_hour(&self) -> f64 {
        self.0 * M_S_TO_KM_H
    }

    pub fn as_meters_per_second(&self) -> f64 {
        self.0
    }

    pub fn as_miles_per_hour(&self) -> f64 {
        self.0 * M_S_TO_MI_H
    }
}
