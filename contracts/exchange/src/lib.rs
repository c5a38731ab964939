#![no_std]
use soroban_sdk::{contract, contractimpl, log, Address, Env, Vec};

mod errors;
mod events;
mod ledger;
mod liquidity;
mod math;
mod pool;
mod registry;
mod storage;
mod storage_types;
mod strategy;
mod types;

#[cfg(test)]
mod mock_pool;

pub use errors::ExchangeError;
pub use pool::{PoolClient, PoolInterface};
pub use types::*;

#[contract]
pub struct ExchangeContract;

#[contractimpl]
impl ExchangeContract {
    /// Constructor function that runs automatically during deployment
    ///
    /// `pool` is the external constant-product pool used by trades routed
    /// with `use_curve = false`.
    pub fn __constructor(env: Env, admin: Address, pool: Address) {
        storage::set_admin(&env, &admin);
        storage::set_pool(&env, &pool);
    }

    /// Point pool-routed trades at a different external pool.
    /// Only admin can call this
    pub fn set_pool(env: Env, pool: Address) -> Result<(), ExchangeError> {
        let admin = storage::get_admin(&env)?;
        admin.require_auth();
        storage::set_pool(&env, &pool);
        Ok(())
    }

    pub fn get_admin(env: Env) -> Result<Address, ExchangeError> {
        storage::get_admin(&env)
    }

    pub fn get_pool(env: Env) -> Result<Address, ExchangeError> {
        storage::get_pool(&env)
    }

    /// Register an unordered trading pair with zeroed curve reserves.
    /// `curve_param` is stored with the pair and fixed for its lifetime.
    pub fn register_trading_pair(
        env: Env,
        asset_a: Address,
        asset_b: Address,
        curve_param: u32,
    ) -> Result<u32, ExchangeError> {
        let admin = storage::get_admin(&env)?;
        admin.require_auth();

        let pair = registry::register(&env, &asset_a, &asset_b, curve_param)?;
        log!(&env, "register_trading_pair: registered pair {}", pair.id);
        events::emit_pair_registered_event(&env, &pair);
        Ok(pair.id)
    }

    pub fn get_pair(
        env: Env,
        asset_a: Address,
        asset_b: Address,
    ) -> Result<PairRecord, ExchangeError> {
        registry::lookup(&env, &asset_a, &asset_b)
    }

    /// Deposit assets into exchange custody
    /// User must approve the exchange as spender before calling this
    pub fn deposit(
        env: Env,
        user: Address,
        asset: Address,
        amount: i128,
    ) -> Result<(), ExchangeError> {
        user.require_auth();
        ledger::deposit(&env, &user, &asset, amount)?;
        events::emit_deposit_event(&env, &user, &asset, amount);
        Ok(())
    }

    /// Withdraw assets from exchange custody
    pub fn withdraw(
        env: Env,
        user: Address,
        asset: Address,
        amount: i128,
    ) -> Result<(), ExchangeError> {
        user.require_auth();
        ledger::withdraw(&env, &user, &asset, amount)?;
        events::emit_withdraw_event(&env, &user, &asset, amount);
        Ok(())
    }

    /// Get user balance for a specific asset
    pub fn get_balance(env: Env, user: Address, asset: Address) -> i128 {
        storage::get_balance(&env, &user, &asset)
    }

    /// Move deposited balances into a pair's curve reserves.
    /// Returns the liquidity shares minted.
    pub fn add_liquidity(
        env: Env,
        user: Address,
        asset_a: Address,
        asset_b: Address,
        amount_a: i128,
        amount_b: i128,
    ) -> Result<i128, ExchangeError> {
        user.require_auth();
        let (pair, minted) = liquidity::add(&env, &user, &asset_a, &asset_b, amount_a, amount_b)?;
        log!(&env, "add_liquidity: minted {} shares on pair {}", minted, pair.id);

        let (amount_a, amount_b) = if asset_a == pair.asset_a {
            (amount_a, amount_b)
        } else {
            (amount_b, amount_a)
        };
        events::emit_liquidity_added_event(&env, &user, pair.id, amount_a, amount_b, minted);
        Ok(minted)
    }

    /// Burn liquidity shares and return the proportional reserves to the
    /// user's balance. Amounts are returned in argument order.
    pub fn remove_liquidity(
        env: Env,
        user: Address,
        asset_a: Address,
        asset_b: Address,
        shares: i128,
    ) -> Result<(i128, i128), ExchangeError> {
        user.require_auth();
        let (pair, out_a, out_b) = liquidity::remove(&env, &user, &asset_a, &asset_b, shares)?;
        log!(&env, "remove_liquidity: burned {} shares on pair {}", shares, pair.id);
        events::emit_liquidity_removed_event(&env, &user, pair.id, out_a, out_b, shares);

        if asset_a == pair.asset_a {
            Ok((out_a, out_b))
        } else {
            Ok((out_b, out_a))
        }
    }

    /// Liquidity shares `user` holds in the pair
    pub fn get_shares(
        env: Env,
        user: Address,
        asset_a: Address,
        asset_b: Address,
    ) -> Result<i128, ExchangeError> {
        let pair = registry::lookup(&env, &asset_a, &asset_b)?;
        Ok(storage::get_shares(&env, &user, pair.id))
    }

    /// Curve output for `amount_in` of `asset_in`, without trading
    pub fn quote(
        env: Env,
        asset_in: Address,
        asset_out: Address,
        amount_in: i128,
    ) -> Result<i128, ExchangeError> {
        let pair = registry::lookup(&env, &asset_in, &asset_out)?;
        strategy::quote(&env, &pair, &asset_in, amount_in)
    }

    /// Spend `amount_in` of `quote_asset` to buy `base_asset`
    pub fn buy(
        env: Env,
        trader: Address,
        quote_asset: Address,
        base_asset: Address,
        amount_in: i128,
        use_curve: bool,
    ) -> Result<i128, ExchangeError> {
        trader.require_auth();
        Self::trade(&env, Side::Buy, &trader, &quote_asset, &base_asset, amount_in, use_curve)
    }

    /// Sell `amount_in` of `base_asset` for `quote_asset`
    pub fn sell(
        env: Env,
        trader: Address,
        quote_asset: Address,
        base_asset: Address,
        amount_in: i128,
        use_curve: bool,
    ) -> Result<i128, ExchangeError> {
        trader.require_auth();
        Self::trade(&env, Side::Sell, &trader, &base_asset, &quote_asset, amount_in, use_curve)
    }

    /// Get a trade record by trade ID
    pub fn get_trade(env: Env, trade_id: u64) -> Option<TradeRecord> {
        storage::get_trade(&env, trade_id)
    }

    /// Query trade history for a user
    pub fn get_trade_history(env: Env, user: Address, limit: u32) -> Vec<TradeRecord> {
        storage::get_trade_history(&env, &user, limit)
    }
}

impl ExchangeContract {
    fn trade(
        env: &Env,
        side: Side,
        trader: &Address,
        asset_in: &Address,
        asset_out: &Address,
        amount_in: i128,
        use_curve: bool,
    ) -> Result<i128, ExchangeError> {
        log!(env, "trade: Starting trade");
        if amount_in <= 0 {
            return Err(ExchangeError::ZeroInput);
        }
        let pair = registry::lookup(env, asset_in, asset_out)?;
        let strategy = Strategy::from_flag(use_curve);
        strategy::check_reserves(env, strategy, &pair, asset_in, asset_out)?;

        // Input is committed before the strategy runs
        log!(env, "trade: Debiting trader input");
        ledger::debit(env, trader, asset_in, amount_in)?;

        log!(env, "trade: Pricing on pair {}", pair.id);
        let amount_out = strategy::execute(env, strategy, &pair, asset_in, asset_out, amount_in)?;

        log!(env, "trade: Crediting trader output {}", amount_out);
        ledger::credit(env, trader, asset_out, amount_out)?;

        let record = TradeRecord {
            trade_id: storage::next_trade_id(env),
            trader: trader.clone(),
            side,
            asset_in: asset_in.clone(),
            asset_out: asset_out.clone(),
            amount_in,
            amount_out,
            strategy,
            timestamp: env.ledger().timestamp(),
        };
        storage::record_trade(env, &record);
        events::emit_trade_event(env, &record);
        log!(env, "trade: Trade {} completed", record.trade_id);
        Ok(amount_out)
    }
}
