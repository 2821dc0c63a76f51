//! Logarithms, powers, roots and named constants.
//!
//! These return raw `f64` values: out-of-domain arguments yield NaN or an
//! infinity, which callers reject with [`crate::core::checked`].

/// Golden ratio.
pub const PHI: f64 = 1.618_033_988_749_895;

/// Look up a named constant: `pi`, `e`, `phi`, `sqrt2` or `sqrt3`.
pub fn constant(name: &str) -> Option<f64> {
    match name {
        "pi" => Some(std::f64::consts::PI),
        "e" => Some(std::f64::consts::E),
        "phi" => Some(PHI),
        "sqrt2" => Some(std::f64::consts::SQRT_2),
        "sqrt3" => Some(3.0_f64.sqrt()),
        _ => None,
    }
}

pub fn log10(value: f64) -> f64 {
    value.log10()
}

pub fn ln(value: f64) -> f64 {
    value.ln()
}

pub fn log2(value: f64) -> f64 {
    value.log2()
}

/// Logarithm of `value` in an arbitrary `base`.
pub fn log_base(value: f64, base: f64) -> f64 {
    value.ln() / base.ln()
}

pub fn sqrt(value: f64) -> f64 {
    value.sqrt()
}

pub fn square(value: f64) -> f64 {
    value * value
}

pub fn cube(value: f64) -> f64 {
    value.powi(3)
}

/// Real cube root; defined for negative values too.
pub fn cube_root(value: f64) -> f64 {
    value.cbrt()
}

pub fn power(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}

/// `value` raised to `1 / n`.
pub fn nth_root(value: f64, n: f64) -> f64 {
    value.powf(1.0 / n)
}
