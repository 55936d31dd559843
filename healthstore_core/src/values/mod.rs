//! Unit-safe physical quantities and the small closed value domains used by
//! records.
//!
//! Every quantity stores exactly one scalar in the canonical base unit of its
//! dimension and is only constructed through a named-unit factory:
//!
//! | Type           | Base unit |
//! |----------------|-----------|
//! | [`Length`]       | meters    |
//! | [`Mass`]         | kilograms |
//! | [`Speed`]        | m/s       |
//! | [`Pressure`]     | pascals   |
//! | [`Temperature`]  | Celsius   |
//! | [`BloodGlucose`] | mg/dL (integral) |
//!
//! Equality and hashing are defined on the stored base scalar only, so
//! `Length::centimeters(100.0) == Length::meters(1.0)`.

/// Arithmetic shared by all quantities of one physical dimension
pub trait UnitValue: Copy + PartialEq {
    /// Sum of two values of the same dimension
    fn plus(self, other: Self) -> Self;

    /// Difference of two values of the same dimension
    fn minus(self, other: Self) -> Self;
}

/// Implements bitwise equality, hashing, `UnitValue` and the `Add`/`Sub`
/// operators for a newtype over an `f64` base scalar.
macro_rules! float_unit_value {
    ($name:ident) => {
        impl $name {
            /// The zero quantity
            pub const ZERO: $name = $name(0.0);
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.0.to_bits() == other.0.to_bits()
            }
        }

        impl Eq for $name {}

        impl std::hash::Hash for $name {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                self.0.to_bits().hash(state);
            }
        }

        impl $crate::values::UnitValue for $name {
            fn plus(self, other: Self) -> Self {
                $name(self.0 + other.0)
            }

            fn minus(self, other: Self) -> Self {
                $name(self.0 - other.0)
            }
        }

        impl std::ops::Add for $name {
            type Output = $name;

            fn add(self, other: Self) -> Self {
                $crate::values::UnitValue::plus(self, other)
            }
        }

        impl std::ops::Sub for $name {
            type Output = $name;

            fn sub(self, other: Self) -> Self {
                $crate::values::UnitValue::minus(self, other)
            }
        }
    };
}

pub(crate) use float_unit_value;

mod flags;
mod glucose;
mod kinds;
mod length;
mod mass;
mod pressure;
mod scalar;
mod speed;
mod temperature;

pub use flags::{
    MenstrualCycleOtherSymptoms, MenstrualCyclePhysicalSymptoms, MoodLevel, SexualActivity,
};
pub(crate) use flags::{flags_from_column, flags_to_column};
pub use glucose::BloodGlucose;
pub use kinds::{BiologicalSex, BloodType, MealRelation, OrganDonor};
pub use length::Length;
pub use mass::Mass;
pub use pressure::Pressure;
pub use scalar::Scalar;
pub use speed::Speed;
pub use temperature::Temperature;
