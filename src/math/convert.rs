//! Unit conversions and financial formulas.
//!
//! All functions are plain formulas with no rounding; rounding happens when
//! a result is formatted for display.

use serde::{Deserialize, Serialize};
use std::fmt;

const FEET_PER_METER: f64 = 3.28084;
const CM_PER_INCH: f64 = 2.54;
const POUNDS_PER_KG: f64 = 2.20462;
const OUNCES_PER_GRAM: f64 = 0.035274;
const KELVIN_OFFSET: f64 = 273.15;

/// A supported unit conversion.
///
/// # Example
///
/// ```rust
/// use abacus::math::Conversion;
///
/// assert_eq!(Conversion::CelsiusToFahrenheit.apply(100.0), 212.0);
/// assert_eq!("inches_to_cm".parse::<Conversion>(), Ok(Conversion::InchesToCm));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Conversion {
    CelsiusToFahrenheit,
    FahrenheitToCelsius,
    CelsiusToKelvin,
    KelvinToCelsius,
    MetersToFeet,
    FeetToMeters,
    InchesToCm,
    CmToInches,
    KgToPounds,
    PoundsToKg,
    GramsToOunces,
    OuncesToGrams,
}

impl Conversion {
    pub const ALL: [Conversion; 12] = [
        Self::CelsiusToFahrenheit,
        Self::FahrenheitToCelsius,
        Self::CelsiusToKelvin,
        Self::KelvinToCelsius,
        Self::MetersToFeet,
        Self::FeetToMeters,
        Self::InchesToCm,
        Self::CmToInches,
        Self::KgToPounds,
        Self::PoundsToKg,
        Self::GramsToOunces,
        Self::OuncesToGrams,
    ];

    pub fn apply(&self, value: f64) -> f64 {
        match self {
            Self::CelsiusToFahrenheit => value * 9.0 / 5.0 + 32.0,
            Self::FahrenheitToCelsius => (value - 32.0) * 5.0 / 9.0,
            Self::CelsiusToKelvin => value + KELVIN_OFFSET,
            Self::KelvinToCelsius => value - KELVIN_OFFSET,
            Self::MetersToFeet => value * FEET_PER_METER,
            Self::FeetToMeters => value / FEET_PER_METER,
            Self::InchesToCm => value * CM_PER_INCH,
            Self::CmToInches => value / CM_PER_INCH,
            Self::KgToPounds => value * POUNDS_PER_KG,
            Self::PoundsToKg => value / POUNDS_PER_KG,
            Self::GramsToOunces => value * OUNCES_PER_GRAM,
            Self::OuncesToGrams => value / OUNCES_PER_GRAM,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::CelsiusToFahrenheit => "celsius_to_fahrenheit",
            Self::FahrenheitToCelsius => "fahrenheit_to_celsius",
            Self::CelsiusToKelvin => "celsius_to_kelvin",
            Self::KelvinToCelsius => "kelvin_to_celsius",
            Self::MetersToFeet => "meters_to_feet",
            Self::FeetToMeters => "feet_to_meters",
            Self::InchesToCm => "inches_to_cm",
            Self::CmToInches => "cm_to_inches",
            Self::KgToPounds => "kg_to_pounds",
            Self::PoundsToKg => "pounds_to_kg",
            Self::GramsToOunces => "grams_to_ounces",
            Self::OuncesToGrams => "ounces_to_grams",
        }
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Conversion {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|conversion| conversion.name() == s)
            .ok_or(())
    }
}

/// Interest accrued at `rate` percent per period over `time` periods.
pub fn simple_interest(principal: f64, rate: f64, time: f64) -> f64 {
    principal * (rate / 100.0) * time
}

/// Interest accrued with `compounds_per_period` compounding steps per
/// period. Returns only the interest, not the final balance.
pub fn compound_interest(principal: f64, rate: f64, time: f64, compounds_per_period: f64) -> f64 {
    let growth = 1.0 + rate / (100.0 * compounds_per_period);
    principal * growth.powf(compounds_per_period * time) - principal
}

/// Value today of `future_value` received after `time` periods at `rate`
/// percent.
pub fn present_value(future_value: f64, rate: f64, time: f64) -> f64 {
    future_value / (1.0 + rate / 100.0).powf(time)
}
