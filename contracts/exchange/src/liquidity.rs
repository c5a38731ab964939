//! Moves ledger balances into bonding-curve reserves and back, minting and
//! burning liquidity shares.

use crate::errors::ExchangeError;
use crate::types::PairRecord;
use crate::{ledger, math, registry, storage};
use soroban_sdk::{Address, Env};

/// Shares minted for depositing `(amount_a, amount_b)` into `pair`.
///
/// The first deposit sets the price and mints `sqrt(amount_a * amount_b)`.
/// Later deposits mint against the smaller of the two ratios so no share is
/// left unbacked by reserves.
pub fn shares_for_deposit(
    env: &Env,
    pair: &PairRecord,
    amount_a: i128,
    amount_b: i128,
) -> Result<i128, ExchangeError> {
    if pair.total_supply == 0 {
        return math::sqrt_product(env, amount_a, amount_b);
    }
    if pair.reserve_a == 0 || pair.reserve_b == 0 {
        return Err(ExchangeError::InvariantViolation);
    }
    let by_a = math::mul_div_floor(env, amount_a, pair.total_supply, pair.reserve_a)?;
    let by_b = math::mul_div_floor(env, amount_b, pair.total_supply, pair.reserve_b)?;
    Ok(by_a.min(by_b))
}

/// Add liquidity from `user`'s ledger. Amounts may be given in either pair
/// order; returns the shares minted.
pub fn add(
    env: &Env,
    user: &Address,
    asset_a: &Address,
    asset_b: &Address,
    amount_a: i128,
    amount_b: i128,
) -> Result<(PairRecord, i128), ExchangeError> {
    if amount_a <= 0 || amount_b <= 0 {
        return Err(ExchangeError::ZeroAmount);
    }
    let pair = registry::lookup(env, asset_a, asset_b)?;
    let (amount_a, amount_b) = if *asset_a == pair.asset_a {
        (amount_a, amount_b)
    } else {
        (amount_b, amount_a)
    };

    let minted = shares_for_deposit(env, &pair, amount_a, amount_b)?;
    if minted <= 0 {
        return Err(ExchangeError::InsufficientLiquidityMinted);
    }

    ledger::debit(env, user, &pair.asset_a, amount_a)?;
    ledger::debit(env, user, &pair.asset_b, amount_b)?;
    let pair = registry::mutate_reserves(env, pair.id, amount_a, amount_b, minted)?;

    let shares = storage::get_shares(env, user, pair.id);
    storage::set_shares(env, user, pair.id, math::add(shares, minted)?);
    Ok((pair, minted))
}

/// Burn `shares` of `user` and credit the proportional reserves, rounded
/// down in favour of the pair. Returned amounts are in canonical order.
pub fn remove(
    env: &Env,
    user: &Address,
    asset_a: &Address,
    asset_b: &Address,
    shares: i128,
) -> Result<(PairRecord, i128, i128), ExchangeError> {
    if shares <= 0 {
        return Err(ExchangeError::ZeroAmount);
    }
    let pair = registry::lookup(env, asset_a, asset_b)?;
    let held = storage::get_shares(env, user, pair.id);
    if held < shares {
        return Err(ExchangeError::InsufficientShares);
    }

    let out_a = math::mul_div_floor(env, shares, pair.reserve_a, pair.total_supply)?;
    let out_b = math::mul_div_floor(env, shares, pair.reserve_b, pair.total_supply)?;

    storage::set_shares(env, user, pair.id, held - shares);
    let pair = registry::mutate_reserves(env, pair.id, -out_a, -out_b, -shares)?;
    if out_a > 0 {
        ledger::credit(env, user, &pair.asset_a, out_a)?;
    }
    if out_b > 0 {
        ledger::credit(env, user, &pair.asset_b, out_b)?;
    }
    Ok((pair, out_a, out_b))
}
