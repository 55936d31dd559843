use serde::{Deserialize, Serialize};

const ABSOLUTE_ZERO_CELSIUS: f64 = 273.15;

/// A temperature, stored in degrees Celsius
///
/// Conversions to Fahrenheit and Kelvin are affine, so `plus`/`minus` treat
/// the operands as Celsius quantities.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Temperature(f64);

super::float_unit_value!(Temperature);

impl Temperature {
    pub fn celsius(value: f64) -> Self {
        Self(value)
    }

    pub fn fahrenheit(value: f64) -> Self {
        Self((value - 32.0) * 5.0 / 9.0)
    }

    pub fn kelvin(value: f64) -> Self {
        Self(value - ABSOLUTE_ZERO_CELSIUS)
    }

    pub fn as_celsius(&self) -> f64 {
        self.0
    }

    pub fn as_fahrenheit(&self) -> f64 {
        (self.0 * 9.0 / 5.0) + 32.0
    }

    pub fn as_kelvin(&self) -> f64 {
        self.0 + ABSOLUTE_ZERO_CELSIUS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELTA: f64 = 0.0001;

    #[test]
    fn test_body_temperature() {
        let value = Temperature::celsius(37.0);
        assert!((value.as_fahrenheit() - 98.6).abs() < DELTA);
        assert!((value.as_kelvin() - 310.15).abs() < DELTA);
    }

    #[test]
    fn test_fahrenheit_round_trip() {
        let value = Temperature::fahrenheit(212.0);
        assert!((value.as_celsius() - 100.0).abs() < DELTA);
        assert!((value.as_fahrenheit() - 212.0).abs() < DELTA);
    }

    #[test]
    fn test_kelvin() {
        assert_eq!(Temperature::kelvin(273.15), Temperature::ZERO);
    }
}
