//! Fixed-point helpers. Intermediate products are taken in `U256` so that
//! 18-decimal amounts never overflow before the final division.

use crate::errors::ExchangeError;
use soroban_sdk::{Env, U256};

pub fn add(a: i128, b: i128) -> Result<i128, ExchangeError> {
    a.checked_add(b).ok_or(ExchangeError::Overflow)
}

fn to_u256(env: &Env, n: i128) -> Result<U256, ExchangeError> {
    if n < 0 {
        return Err(ExchangeError::InvariantViolation);
    }
    Ok(U256::from_u128(env, n as u128))
}

fn to_i128(n: &U256) -> Result<i128, ExchangeError> {
    n.to_u128()
        .and_then(|n| i128::try_from(n).ok())
        .ok_or(ExchangeError::Overflow)
}

/// `a * b / c`, rounded down. `a` and `b` must be non-negative and `c`
/// positive; only the quotient has to fit in `i128`.
pub fn mul_div_floor(env: &Env, a: i128, b: i128, c: i128) -> Result<i128, ExchangeError> {
    if c <= 0 {
        return Err(ExchangeError::InvariantViolation);
    }
    let product = to_u256(env, a)?.mul(&to_u256(env, b)?);
    to_i128(&product.div(&to_u256(env, c)?))
}

/// `floor(sqrt(a * b))` (Newton's method on the full-width product).
pub fn sqrt_product(env: &Env, a: i128, b: i128) -> Result<i128, ExchangeError> {
    let n = to_u256(env, a)?.mul(&to_u256(env, b)?);
    let zero = U256::from_u32(env, 0);
    if n == zero {
        return Ok(0);
    }
    let one = U256::from_u32(env, 1);
    let two = U256::from_u32(env, 2);
    let mut x = n.clone();
    let mut y = x.add(&one).div(&two);
    while y < x {
        x = y;
        y = x.add(&n.div(&x)).div(&two);
    }
    to_i128(&x)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WAD: i128 = 1_000_000_000_000_000_000;

    #[test]
    fn sqrt_of_perfect_squares() {
        let env = Env::default();
        assert_eq!(sqrt_product(&env, 0, 5), Ok(0));
        assert_eq!(sqrt_product(&env, 1, 1), Ok(1));
        assert_eq!(sqrt_product(&env, 100, 100), Ok(100));
        assert_eq!(sqrt_product(&env, 4, 25), Ok(10));
        assert_eq!(sqrt_product(&env, 1_000_000 * WAD, 1_000_000 * WAD), Ok(1_000_000 * WAD));
    }

    #[test]
    fn sqrt_rounds_down() {
        let env = Env::default();
        assert_eq!(sqrt_product(&env, 2, 1), Ok(1));
        assert_eq!(sqrt_product(&env, 3, 33), Ok(9));
        assert_eq!(sqrt_product(&env, i128::MAX, 1), Ok(13_043_817_825_332_782_212));
        assert_eq!(sqrt_product(&env, i128::MAX, i128::MAX), Ok(i128::MAX));
    }

    #[test]
    fn mul_div_floor_rounds_down() {
        let env = Env::default();
        assert_eq!(mul_div_floor(&env, 100, 10, 110), Ok(9));
        assert_eq!(mul_div_floor(&env, 7, 3, 2), Ok(10));
    }

    #[test]
    fn mul_div_keeps_wide_intermediates() {
        let env = Env::default();
        // 1e45 does not fit in i128; the quotient does.
        assert_eq!(
            mul_div_floor(&env, 1_000_000 * WAD, 1_000 * WAD, 1_001_000 * WAD),
            Ok(999_000_999_000_999_000_999)
        );
        assert_eq!(
            mul_div_floor(&env, i128::MAX, 2, 4),
            Ok(85_070_591_730_234_615_865_843_651_857_942_052_863)
        );
    }

    #[test]
    fn mul_div_reports_overflow() {
        let env = Env::default();
        assert_eq!(mul_div_floor(&env, i128::MAX, 2, 1), Err(ExchangeError::Overflow));
        assert_eq!(mul_div_floor(&env, 1, 1, 0), Err(ExchangeError::InvariantViolation));
        assert_eq!(mul_div_floor(&env, -1, 1, 1), Err(ExchangeError::InvariantViolation));
    }
}
