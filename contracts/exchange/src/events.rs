use crate::types::*;
use soroban_sdk::{contractevent, Address, Env};

// Event topics for better filtering and indexing
// Topics are defined as string literals in the macro
#[contractevent(topics = ["TRADE", "bought"])]
#[derive(Clone, Debug)]
pub struct BoughtEvent {
    pub trade_id: u64,
    pub trader: Address,
    pub asset_in: Address,
    pub asset_out: Address,
    pub amount_in: i128,
    pub amount_out: i128,
    pub strategy: Strategy,
}

#[contractevent(topics = ["TRADE", "sold"])]
#[derive(Clone, Debug)]
pub struct SoldEvent {
    pub trade_id: u64,
    pub trader: Address,
    pub asset_in: Address,
    pub asset_out: Address,
    pub amount_in: i128,
    pub amount_out: i128,
    pub strategy: Strategy,
}

#[contractevent(topics = ["PAIR", "registered"])]
#[derive(Clone, Debug)]
pub struct PairRegisteredEvent {
    pub pair_id: u32,
    pub asset_a: Address,
    pub asset_b: Address,
    pub curve_param: u32,
}

#[contractevent(topics = ["DEPOSIT"])]
#[derive(Clone, Debug)]
pub struct DepositEvent {
    pub user: Address,
    pub token: Address,
    pub amount: i128,
}

#[contractevent(topics = ["WITHDRAW"])]
#[derive(Clone, Debug)]
pub struct WithdrawEvent {
    pub user: Address,
    pub token: Address,
    pub amount: i128,
}

#[contractevent(topics = ["LIQUIDITY", "added"])]
#[derive(Clone, Debug)]
pub struct LiquidityAddedEvent {
    pub user: Address,
    pub pair_id: u32,
    pub amount_a: i128,
    pub amount_b: i128,
    pub shares: i128,
}

#[contractevent(topics = ["LIQUIDITY", "removed"])]
#[derive(Clone, Debug)]
pub struct LiquidityRemovedEvent {
    pub user: Address,
    pub pair_id: u32,
    pub amount_a: i128,
    pub amount_b: i128,
    pub shares: i128,
}

pub fn emit_trade_event(env: &Env, record: &TradeRecord) {
    match record.side {
        Side::Buy => BoughtEvent {
            trade_id: record.trade_id,
            trader: record.trader.clone(),
            asset_in: record.asset_in.clone(),
            asset_out: record.asset_out.clone(),
            amount_in: record.amount_in,
            amount_out: record.amount_out,
            strategy: record.strategy,
        }
        .publish(env),
        Side::Sell => SoldEvent {
            trade_id: record.trade_id,
            trader: record.trader.clone(),
            asset_in: record.asset_in.clone(),
            asset_out: record.asset_out.clone(),
            amount_in: record.amount_in,
            amount_out: record.amount_out,
            strategy: record.strategy,
        }
        .publish(env),
    }
}

pub fn emit_pair_registered_event(env: &Env, pair: &PairRecord) {
    PairRegisteredEvent {
        pair_id: pair.id,
        asset_a: pair.asset_a.clone(),
        asset_b: pair.asset_b.clone(),
        curve_param: pair.curve_param,
    }
    .publish(env);
}

pub fn emit_deposit_event(env: &Env, user: &Address, token: &Address, amount: i128) {
    DepositEvent {
        user: user.clone(),
        token: token.clone(),
        amount,
    }
    .publish(env);
}

pub fn emit_withdraw_event(env: &Env, user: &Address, token: &Address, amount: i128) {
    WithdrawEvent {
        user: user.clone(),
        token: token.clone(),
        amount,
    }
    .publish(env);
}

pub fn emit_liquidity_added_event(
    env: &Env,
    user: &Address,
    pair_id: u32,
    amount_a: i128,
    amount_b: i128,
    shares: i128,
) {
    LiquidityAddedEvent {
        user: user.clone(),
        pair_id,
        amount_a,
        amount_b,
        shares,
    }
    .publish(env);
}

pub fn emit_liquidity_removed_event(
    env: &Env,
    user: &Address,
    pair_id: u32,
    amount_a: i128,
    amount_b: i128,
    shares: i128,
) {
    LiquidityRemovedEvent {
        user: user.clone(),
        pair_id,
        amount_a,
        amount_b,
        shares,
    }
    .publish(env);
}
