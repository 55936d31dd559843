use serde::{Deserialize, Serialize};

const CENTIMETERS_TO_METERS: f64 = 0.01;
const FEET_TO_METERS: f64 = 0.3048;
const INCHES_TO_METERS: f64 = 0.0254;
const KILOMETERS_TO_METERS: f64 = 1000.0;
const MILES_TO_METERS: f64 = 1609.344;
const MILLIMETERS_TO_METERS: f64 = 0.001;
const YARDS_TO_METERS: f64 = 0.9144;

/// A length, stored in meters
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Length(f64);

super::float_unit_value!(Length);

impl Length {
    pub fn centimeters(value: f64) -> Self {
        Self(value * CENTIMETERS_TO_METERS)
    }

    pub fn feet(value: f64) -> Self {
        Self(value * FEET_TO_METERS)
    }

    pub fn inches(value: f64) -> Self {
        Self(value * INCHES_TO_METERS)
    }

    pub fn kilometers(value: f64) -> Self {
        Self(value * KILOMETERS_TO_METERS)
    }

    pub fn meters(value: f64) -> Self {
        Self(value)
    }

    pub fn miles(value: f64) -> Self {
        Self(value * MILES_TO_METERS)
    }

    pub fn millimeters(value: f64) -> Self {
        Self(value * MILLIMETERS_TO_METERS)
    }

    pub fn yards(value: f64) -> Self {
        Self(value * YARDS_TO_METERS)
    }

    pub fn as_centimeters(&self) -> f64 {
        self.0 / CENTIMETERS_TO_METERS
    }

    pub fn as_feet(&self) -> f64 {
        self.0 / FEET_TO_METERS
    }

    pub fn as_inches(&self) -> f64 {
        self.0 / INCHES_TO_METERS
    }

    pub fn as_kilometers(&self) -> f64 {
        self.0 / KILOMETERS_TO_METERS
    }

    pub fn as_meters(&self) -> f64 {
        self.0
    }

    pub fn as_miles(&self) -> f64 {
        self.0 / MILES_TO_METERS
    }

    pub fn as_millimeters(&self) -> f64 {
        self.0 / MILLIMETERS_TO_METERS
    }

    pub fn as_yards(&self) -> f64 {
        self.0 / YARDS_TO_METERS
    }
}
