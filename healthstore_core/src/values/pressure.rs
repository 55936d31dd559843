use serde::{Deserialize, Serialize};

const ATMOSPHERES_TO_PASCALS: f64 = 101_325.0;
const BARS_TO_PASCALS: f64 = 100_000.0;
const IN_HG_TO_PASCALS: f64 = 3386.39;
const MM_HG_TO_PASCALS: f64 = 133.322;

/// A pressure, stored in pascals
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pressure(f64);

super::float_unit_value!(Pressure);

impl Pressure {
    pub fn atmospheres(value: f64) -> Self {
        Self(value * ATMOSPHERES_TO_PASCALS)
    }

    pub fn bars(value: f64) -> Self {
        Self(value * BARS_TO_PASCALS)
    }

    pub fn in_hg(value: f64) -> Self {
        Self(value * IN_HG_TO_PASCALS)
    }

    pub fn mm_hg(value: f64) -> Self {
        Self(value * MM_HG_TO_PASCALS)
    }

    pub fn pascals(value: f64) -> Self {
        Self(value)
    }

    pub fn as_atmospheres(&self) -> f64 {
        self.0 / ATMOSPHERES_TO_PASCALS
    }

    pub fn as_bars(&self) -> f64 {
        self.0 / BARS_TO_PASCALS
    }

    pub fn as_in_hg(&self) -> f64 {
        self.0 / IN_HG_TO_PASCALS
    }

    pub fn as_mm_hg(&self) -> f64 {
        self.0 / MM_HG_TO_PASCALS
    }

    pub fn as_pascals(&self) -> f64 {
        self.0
    }
}
