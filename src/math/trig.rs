//! Trigonometric, inverse trigonometric and hyperbolic functions.
//!
//! Every function takes the angle mode explicitly. Forward functions read
//! their argument in that mode, inverse functions report in it. Hyperbolic
//! functions also convert a degree argument to radians before evaluating.

use super::angle::AngleMode;

pub fn sin(value: f64, mode: AngleMode) -> f64 {
    mode.to_radians(value).sin()
}

pub fn cos(value: f64, mode: AngleMode) -> f64 {
    mode.to_radians(value).cos()
}

pub fn tan(value: f64, mode: AngleMode) -> f64 {
    mode.to_radians(value).tan()
}

/// Arc sine; NaN outside `[-1, 1]`.
pub fn asin(value: f64, mode: AngleMode) -> f64 {
    mode.from_radians(value.asin())
}

/// Arc cosine; NaN outside `[-1, 1]`.
pub fn acos(value: f64, mode: AngleMode) -> f64 {
    mode.from_radians(value.acos())
}

pub fn atan(value: f64, mode: AngleMode) -> f64 {
    mode.from_radians(value.atan())
}

pub fn sinh(value: f64, mode: AngleMode) -> f64 {
    mode.to_radians(value).sinh()
}

pub fn cosh(value: f64, mode: AngleMode) -> f64 {
    mode.to_radians(value).cosh()
}

pub fn tanh(value: f64, mode: AngleMode) -> f64 {
    mode.to_radians(value).tanh()
}
