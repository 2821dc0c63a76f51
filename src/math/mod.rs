//! Scientific math library.
//!
//! Pure, deterministic functions used by the engine's scientific keys.
//! Nothing here holds state: the angle mode is passed explicitly to every
//! trigonometric function.
//!
//! Constants and unit conversions are also reachable as input tokens. The
//! financial formulas and [`Complex`] arithmetic take more arguments than a
//! two-operand keypad can supply, so they are library calls only.

mod angle;
mod combinatorics;
mod complex;
mod convert;
mod functions;
mod trig;

pub use angle::AngleMode;
pub use combinatorics::{
    combination, factorial, gcd, integer_argument, is_prime, lcm, permutation,
};
pub use complex::Complex;
pub use convert::{compound_interest, present_value, simple_interest, Conversion};
pub use functions::{
    constant, cube, cube_root, ln, log10, log2, log_base, nth_root, power, sqrt, square, PHI,
};
pub use trig::{acos, asin, atan, cos, cosh, sin, sinh, tan, tanh};
