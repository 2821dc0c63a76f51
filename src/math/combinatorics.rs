//! Factorials, combinatorics and number theory.

use crate::core::{checked, CalcError};

/// Largest `n` for which `n!` is finite as an `f64`.
const MAX_FACTORIAL: i64 = 170;

/// `n!` by iterative multiplication.
///
/// Negative arguments are a domain error; results too large for `f64`
/// are [`CalcError::NonFinite`].
///
/// # Example
///
/// ```rust
/// use abacus::math::factorial;
///
/// assert_eq!(factorial(5), Ok(120.0));
/// assert_eq!(factorial(0), Ok(1.0));
/// assert!(factorial(-1).is_err());
/// ```
pub fn factorial(n: i64) -> Result<f64, CalcError> {
    if n < 0 {
        return Err(CalcError::domain("factorial", "argument must not be negative"));
    }
    if n > MAX_FACTORIAL {
        return Err(CalcError::NonFinite);
    }
    Ok((2..=n).fold(1.0, |acc, i| acc * i as f64))
}

/// Ordered selections of `r` items out of `n`: `n! / (n - r)!`.
///
/// Stops as soon as the product overflows, so huge arguments fail fast.
pub fn permutation(n: i64, r: i64) -> Result<f64, CalcError> {
    check_selection("permutation", n, r)?;
    let mut acc = 1.0;
    for i in (n - r + 1)..=n {
        acc *= i as f64;
        if !acc.is_finite() {
            return Err(CalcError::NonFinite);
        }
    }
    Ok(acc)
}

/// Unordered selections of `r` items out of `n`: `n! / (r! (n - r)!)`.
pub fn combination(n: i64, r: i64) -> Result<f64, CalcError> {
    check_selection("combination", n, r)?;
    let r = r.min(n - r);
    let mut acc = 1.0;
    for i in 1..=r {
        acc = acc * (n - r + i) as f64 / i as f64;
        // r <= n - r, so every factor is at least 2 and overflow comes within ~1100 steps
        if !acc.is_finite() {
            return Err(CalcError::NonFinite);
        }
    }
    checked(acc.round())
}

fn check_selection(function: &'static str, n: i64, r: i64) -> Result<(), CalcError> {
    if n < 0 || r < 0 || r > n {
        return Err(CalcError::domain(function, "requires 0 <= r <= n"));
    }
    Ok(())
}

/// Greatest common divisor by the Euclidean algorithm; always non-negative.
///
/// # Example
///
/// ```rust
/// use abacus::math::gcd;
///
/// assert_eq!(gcd(12, 18), 6);
/// assert_eq!(gcd(-12, 18), 6);
/// assert_eq!(gcd(0, 7), 7);
/// ```
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    // gcd(i64::MIN, 0) is 2^63, which does not fit
    i64::try_from(a).unwrap_or(i64::MAX)
}

/// Least common multiple: `|a * b| / gcd(a, b)`.
///
/// `lcm(0, 0)` is a domain error; products beyond `i64` overflow.
pub fn lcm(a: i64, b: i64) -> Result<i64, CalcError> {
    let divisor = gcd(a, b);
    if divisor == 0 {
        return Err(CalcError::domain("lcm", "undefined for 0 and 0"));
    }
    (a / divisor)
        .checked_mul(b)
        .and_then(i64::checked_abs)
        .ok_or(CalcError::Overflow { function: "lcm" })
}

/// Primality by trial division over odd divisors up to `√n`.
///
/// # Example
///
/// ```rust
/// use abacus::math::is_prime;
///
/// assert!(is_prime(17));
/// assert!(!is_prime(1));
/// assert!(!is_prime(21));
/// ```
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut divisor: i64 = 3;
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// Convert a display value to an integer argument.
///
/// Fractional or non-finite values are a domain error for `function`.
pub fn integer_argument(function: &'static str, value: f64) -> Result<i64, CalcError> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(CalcError::domain(function, "expects an integer"));
    }
    if value.abs() >= 9.2e18 {
        return Err(CalcError::Overflow { function });
    }
    Ok(value as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factorial_of_small_values() {
        assert_eq!(factorial(0), Ok(1.0));
        assert_eq!(factorial(1), Ok(1.0));
        assert_eq!(factorial(5), Ok(120.0));
        assert_eq!(factorial(10), Ok(3_628_800.0));
    }

    #[test]
    fn factorial_of_negative_is_domain_error() {
        assert!(matches!(
            factorial(-1),
            Err(CalcError::Domain { function: "factorial", .. })
        ));
    }

    #[test]
    fn factorial_overflows_past_170() {
        assert!(factorial(170).unwrap().is_finite());
        assert_eq!(factorial(171), Err(CalcError::NonFinite));
    }

    #[test]
    fn permutations() {
        assert_eq!(permutation(5, 2), Ok(20.0));
        assert_eq!(permutation(5, 0), Ok(1.0));
        assert_eq!(permutation(5, 5), Ok(120.0));
    }

    #[test]
    fn combinations() {
        assert_eq!(combination(5, 2), Ok(10.0));
        assert_eq!(combination(52, 5), Ok(2_598_960.0));
        assert_eq!(combination(10, 0), Ok(1.0));
        assert_eq!(combination(10, 10), Ok(1.0));
    }

    #[test]
    fn huge_selections_overflow_without_iterating_every_factor() {
        assert_eq!(
            permutation(3_000_000_000, 3_000_000_000),
            Err(CalcError::NonFinite)
        );
        assert_eq!(
            combination(6_000_000_000, 3_000_000_000),
            Err(CalcError::NonFinite)
        );
        assert_eq!(
            permutation(i64::MAX / 2, i64::MAX / 4),
            Err(CalcError::NonFinite)
        );
    }

    #[test]
    fn large_selections_with_small_results_still_succeed() {
        assert_eq!(permutation(1_000_000_000, 1), Ok(1_000_000_000.0));
        assert_eq!(combination(1_000_000_000, 999_999_999), Ok(1_000_000_000.0));
    }

    #[test]
    fn invalid_selections_are_domain_errors() {
        assert!(permutation(-1, 0).is_err());
        assert!(permutation(3, -1).is_err());
        assert!(combination(3, 4).is_err());
    }

    #[test]
    fn gcd_and_lcm() {
        assert_eq!(gcd(48, 36), 12);
        assert_eq!(gcd(17, 5), 1);
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(lcm(4, 6), Ok(12));
        assert_eq!(lcm(-4, 6), Ok(12));
        assert_eq!(lcm(0, 5), Ok(0));
    }

    #[test]
    fn lcm_of_zeros_is_domain_error() {
        assert!(matches!(lcm(0, 0), Err(CalcError::Domain { .. })));
    }

    #[test]
    fn lcm_overflow_is_reported() {
        assert_eq!(
            lcm(i64::MAX, i64::MAX - 1),
            Err(CalcError::Overflow { function: "lcm" })
        );
    }

    #[test]
    fn primality() {
        let primes: Vec<i64> = (0..30).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert!(is_prime(7919));
        assert!(!is_prime(7917));
        assert!(!is_prime(-7));
    }

    #[test]
    fn integer_argument_rejects_fractions() {
        assert_eq!(integer_argument("gcd", 12.0), Ok(12));
        assert!(integer_argument("gcd", 1.5).is_err());
        assert!(integer_argument("gcd", f64::NAN).is_err());
        assert_eq!(
            integer_argument("gcd", 1e19),
            Err(CalcError::Overflow { function: "gcd" })
        );
    }
}
