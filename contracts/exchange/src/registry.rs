//! Pair registry: one record per unordered asset pair, holding the
//! bonding-curve reserves and liquidity-share supply.

use crate::errors::ExchangeError;
use crate::storage;
use crate::storage_types::PairKey;
use crate::types::PairRecord;
use soroban_sdk::{Address, Env};

/// Canonical key for an unordered pair. `(a, b)` and `(b, a)` map to the
/// same key.
pub fn pair_key(asset_a: &Address, asset_b: &Address) -> PairKey {
    if asset_a < asset_b {
        PairKey {
            asset_a: asset_a.clone(),
            asset_b: asset_b.clone(),
        }
    } else {
        PairKey {
            asset_a: asset_b.clone(),
            asset_b: asset_a.clone(),
        }
    }
}

pub fn register(
    env: &Env,
    asset_a: &Address,
    asset_b: &Address,
    curve_param: u32,
) -> Result<PairRecord, ExchangeError> {
    if asset_a == asset_b {
        return Err(ExchangeError::InvalidAssets);
    }
    let key = pair_key(asset_a, asset_b);
    if storage::get_pair_id(env, &key).is_some() {
        return Err(ExchangeError::PairExists);
    }

    let pair = PairRecord {
        id: storage::next_pair_id(env),
        asset_a: key.asset_a.clone(),
        asset_b: key.asset_b.clone(),
        reserve_a: 0,
        reserve_b: 0,
        total_supply: 0,
        curve_param,
    };
    storage::set_pair_id(env, &key, pair.id);
    storage::set_pair(env, &pair);
    Ok(pair)
}

pub fn lookup(
    env: &Env,
    asset_a: &Address,
    asset_b: &Address,
) -> Result<PairRecord, ExchangeError> {
    let key = pair_key(asset_a, asset_b);
    let pair_id = storage::get_pair_id(env, &key).ok_or(ExchangeError::PairNotFound)?;
    load(env, pair_id)
}

pub fn load(env: &Env, pair_id: u32) -> Result<PairRecord, ExchangeError> {
    storage::get_pair(env, pair_id).ok_or(ExchangeError::PairNotFound)
}

/// Apply signed deltas to a pair's reserves and share supply in one write.
///
/// Fails without writing if any quantity would go negative, or if the
/// result would hold reserves without shares (or shares without reserves).
pub fn mutate_reserves(
    env: &Env,
    pair_id: u32,
    delta_a: i128,
    delta_b: i128,
    delta_supply: i128,
) -> Result<PairRecord, ExchangeError> {
    let mut pair = load(env, pair_id)?;

    let reserve_a = pair
        .reserve_a
        .checked_add(delta_a)
        .ok_or(ExchangeError::Overflow)?;
    let reserve_b = pair
        .reserve_b
        .checked_add(delta_b)
        .ok_or(ExchangeError::Overflow)?;
    let total_supply = pair
        .total_supply
        .checked_add(delta_supply)
        .ok_or(ExchangeError::Overflow)?;

    if reserve_a < 0 || reserve_b < 0 || total_supply < 0 {
        return Err(ExchangeError::InvariantViolation);
    }
    let empty_reserves = reserve_a == 0 && reserve_b == 0;
    if empty_reserves != (total_supply == 0) {
        return Err(ExchangeError::InvariantViolation);
    }

    pair.reserve_a = reserve_a;
    pair.reserve_b = reserve_b;
    pair.total_supply = total_supply;
    storage::set_pair(env, &pair);
    Ok(pair)
}

/// Deltas `(delta_a, delta_b)` in canonical order for a trade that adds
/// `amount_in` of `asset_in` and removes `amount_out` of the other asset.
pub fn trade_deltas(
    pair: &PairRecord,
    asset_in: &Address,
    amount_in: i128,
    amount_out: i128,
) -> (i128, i128) {
    if *asset_in == pair.asset_a {
        (amount_in, -amount_out)
    } else {
        (-amount_out, amount_in)
    }
}
