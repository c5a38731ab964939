//! Pricing engines a trade can be routed to.

use crate::errors::ExchangeError;
use crate::types::{PairRecord, Strategy};
use crate::{math, pool, registry, storage};
use soroban_sdk::{Address, Env};

/// Constant-product bonding curve:
/// `amount_out = floor(reserve_out * amount_in / (reserve_in + amount_in))`.
///
/// Output is strictly below `reserve_out`, so a trade can never drain a
/// side of the pair.
pub fn curve_amount_out(
    env: &Env,
    reserve_in: i128,
    reserve_out: i128,
    amount_in: i128,
) -> Result<i128, ExchangeError> {
    if amount_in <= 0 {
        return Err(ExchangeError::ZeroInput);
    }
    if reserve_in <= 0 || reserve_out <= 0 {
        return Err(ExchangeError::InvalidReserves);
    }
    let denominator = math::add(reserve_in, amount_in)?;
    let amount_out = math::mul_div_floor(env, reserve_out, amount_in, denominator)?;
    if amount_out <= 0 {
        return Err(ExchangeError::InsufficientOutput);
    }
    Ok(amount_out)
}

/// Curve output for `pair` without touching state.
pub fn quote(
    env: &Env,
    pair: &PairRecord,
    asset_in: &Address,
    amount_in: i128,
) -> Result<i128, ExchangeError> {
    let (reserve_in, reserve_out) = pair.reserves_for(asset_in);
    curve_amount_out(env, reserve_in, reserve_out, amount_in)
}

/// Read-only check that `strategy` has liquidity on both sides of the pair.
pub fn check_reserves(
    env: &Env,
    strategy: Strategy,
    pair: &PairRecord,
    asset_in: &Address,
    asset_out: &Address,
) -> Result<(), ExchangeError> {
    match strategy {
        Strategy::Curve => {
            let (reserve_in, reserve_out) = pair.reserves_for(asset_in);
            if reserve_in <= 0 || reserve_out <= 0 {
                return Err(ExchangeError::InvalidReserves);
            }
            Ok(())
        }
        Strategy::Pool => pool::check_reserves(env, &storage::get_pool(env)?, asset_in, asset_out),
    }
}

/// Price `amount_in` of `asset_in` with `strategy` and settle it against
/// that strategy's reserves. Returns the output amount of `asset_out`.
pub fn execute(
    env: &Env,
    strategy: Strategy,
    pair: &PairRecord,
    asset_in: &Address,
    asset_out: &Address,
    amount_in: i128,
) -> Result<i128, ExchangeError> {
    match strategy {
        Strategy::Curve => {
            let amount_out = quote(env, pair, asset_in, amount_in)?;
            let (delta_a, delta_b) = registry::trade_deltas(pair, asset_in, amount_in, amount_out);
            registry::mutate_reserves(env, pair.id, delta_a, delta_b, 0)?;
            Ok(amount_out)
        }
        Strategy::Pool => {
            if amount_in <= 0 {
                return Err(ExchangeError::ZeroInput);
            }
            let pool_address = storage::get_pool(env)?;
            pool::swap(env, &pool_address, asset_in, asset_out, amount_in)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curve_matches_constant_product() {
        let env = Env::default();
        assert_eq!(curve_amount_out(&env, 100, 100, 10), Ok(9));
        assert_eq!(
            curve_amount_out(&env, 100_000_000, 100_000_000, 10_000_000),
            Ok(100_000_000 * 10_000_000 / 110_000_000)
        );
    }

    #[test]
    fn curve_rejects_zero_input() {
        let env = Env::default();
        assert_eq!(curve_amount_out(&env, 100, 100, 0), Err(ExchangeError::ZeroInput));
        assert_eq!(curve_amount_out(&env, 0, 0, 0), Err(ExchangeError::ZeroInput));
    }

    #[test]
    fn curve_rejects_empty_reserves() {
        let env = Env::default();
        assert_eq!(curve_amount_out(&env, 0, 100, 10), Err(ExchangeError::InvalidReserves));
        assert_eq!(curve_amount_out(&env, 100, 0, 10), Err(ExchangeError::InvalidReserves));
    }

    #[test]
    fn curve_rejects_dust_output() {
        let env = Env::default();
        assert_eq!(curve_amount_out(&env, 1_000_000, 1, 1), Err(ExchangeError::InsufficientOutput));
    }

    #[test]
    fn curve_prices_18_decimal_amounts() {
        let env = Env::default();
        let wad = 1_000_000_000_000_000_000i128;
        assert_eq!(
            curve_amount_out(&env, 1_000_000 * wad, 1_000_000 * wad, 1_000 * wad),
            Ok(999_000_999_000_999_000_999)
        );
    }

    #[test]
    fn curve_output_never_reaches_reserve() {
        let env = Env::default();
        let out = curve_amount_out(&env, 1, 1_000, i128::MAX / 2_000).unwrap();
        assert!(out < 1_000);
    }

    #[test]
    fn curve_price_worsens_along_one_direction() {
        let env = Env::default();
        let first = curve_amount_out(&env, 100, 100, 10).unwrap();
        let second = curve_amount_out(&env, 110, 100 - first, 10).unwrap();
        assert!(second < first);
    }
}
