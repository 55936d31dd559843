use serde::{Deserialize, Serialize};

/// A dimensionless measurement (body mass index, UV index, ratios, rates)
///
/// Shares the bitwise equality and hashing of the unit-tagged quantities so
/// that records holding plain numbers stay comparable and hashable.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scalar(f64);

super::float_unit_value!(Scalar);

impl Scalar {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// A ratio expressed in percent, stored in the range `0.0..=1.0`
    pub fn percent(value: f64) -> Self {
        Self(value / 100.0)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn as_percent(&self) -> f64 {
        self.0 * 100.0
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent() {
        let value = Scalar::percent(97.0);
        assert!((value.value() - 0.97).abs() < 1e-12);
        assert!((value.as_percent() - 97.0).abs() < 1e-9);
    }
}
