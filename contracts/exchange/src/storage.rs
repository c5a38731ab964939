use crate::errors::ExchangeError;
use crate::storage_types::*;
use crate::types::*;
use soroban_sdk::{Address, Env, Vec};

pub fn set_admin(env: &Env, admin: &Address) {
    let key = DataKey::Admin;
    env.storage().instance().set(&key, admin);
}

pub fn get_admin(env: &Env) -> Result<Address, ExchangeError> {
    let key = DataKey::Admin;
    env.storage()
        .instance()
        .get(&key)
        .ok_or(ExchangeError::NotInitialized)
}

/// Set the external pool contract used by `Strategy::Pool` trades
pub fn set_pool(env: &Env, pool: &Address) {
    let key = DataKey::Pool;
    env.storage().instance().set(&key, pool);
}

pub fn get_pool(env: &Env) -> Result<Address, ExchangeError> {
    let key = DataKey::Pool;
    env.storage()
        .instance()
        .get(&key)
        .ok_or(ExchangeError::NotInitialized)
}

/// Allocate the next pair id. Ids start at 1.
pub fn next_pair_id(env: &Env) -> u32 {
    let key = DataKey::PairCount;
    let id: u32 = env.storage().instance().get(&key).unwrap_or(0) + 1;
    env.storage().instance().set(&key, &id);
    id
}

pub fn get_pair_id(env: &Env, key: &PairKey) -> Option<u32> {
    env.storage()
        .persistent()
        .get(&DataKey::PairId(key.clone()))
}

pub fn set_pair_id(env: &Env, key: &PairKey, pair_id: u32) {
    env.storage()
        .persistent()
        .set(&DataKey::PairId(key.clone()), &pair_id);
}

pub fn get_pair(env: &Env, pair_id: u32) -> Option<PairRecord> {
    env.storage().persistent().get(&DataKey::Pair(pair_id))
}

pub fn set_pair(env: &Env, pair: &PairRecord) {
    env.storage().persistent().set(&DataKey::Pair(pair.id), pair);
}

/// Get user balance for a specific asset
pub fn get_balance(env: &Env, user: &Address, asset: &Address) -> i128 {
    let key = DataKey::Balance(BalanceDataKey {
        user: user.clone(),
        asset: asset.clone(),
    });
    env.storage().persistent().get(&key).unwrap_or(0)
}

/// Set user balance for a specific asset
pub fn set_balance(env: &Env, user: &Address, asset: &Address, amount: i128) {
    let key = DataKey::Balance(BalanceDataKey {
        user: user.clone(),
        asset: asset.clone(),
    });
    env.storage().persistent().set(&key, &amount);
}

pub fn get_shares(env: &Env, user: &Address, pair_id: u32) -> i128 {
    let key = DataKey::Shares(ShareDataKey {
        user: user.clone(),
        pair_id,
    });
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_shares(env: &Env, user: &Address, pair_id: u32, shares: i128) {
    let key = DataKey::Shares(ShareDataKey {
        user: user.clone(),
        pair_id,
    });
    env.storage().persistent().set(&key, &shares);
}

/// Allocate the next trade id. Ids start at 1.
pub fn next_trade_id(env: &Env) -> u64 {
    let key = DataKey::TradeCount;
    let id: u64 = env.storage().instance().get(&key).unwrap_or(0) + 1;
    env.storage().instance().set(&key, &id);
    id
}

pub fn record_trade(env: &Env, record: &TradeRecord) {
    // Store by trade ID
    let trade_key = DataKey::Trade(record.trade_id);
    env.storage().persistent().set(&trade_key, record);

    // Store in user trade history
    let history_key = DataKey::UserTradeHistory(record.trader.clone());
    let mut trades: Vec<u64> = env
        .storage()
        .persistent()
        .get(&history_key)
        .unwrap_or_else(|| Vec::new(env));
    trades.push_back(record.trade_id);
    env.storage().persistent().set(&history_key, &trades);
}

pub fn get_trade(env: &Env, trade_id: u64) -> Option<TradeRecord> {
    let key = DataKey::Trade(trade_id);
    env.storage().persistent().get(&key)
}

/// Most recent `limit` trades of `user`, oldest first
pub fn get_trade_history(env: &Env, user: &Address, limit: u32) -> Vec<TradeRecord> {
    let trades_key = DataKey::UserTradeHistory(user.clone());
    let trade_ids: Vec<u64> = env
        .storage()
        .persistent()
        .get(&trades_key)
        .unwrap_or_else(|| Vec::new(env));

    let mut records = Vec::new(env);
    let len = trade_ids.len();
    let start = len.saturating_sub(limit);

    for i in start..len {
        if let Some(trade_id) = trade_ids.get(i) {
            if let Some(record) = get_trade(env, trade_id) {
                records.push_back(record);
            }
        }
    }

    records
}
