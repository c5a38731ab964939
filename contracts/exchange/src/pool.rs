//! Adapter for the external constant-product pool.
//!
//! The pool keeps its own reserves; nothing here touches the pair registry.

use crate::errors::ExchangeError;
use soroban_sdk::auth::{ContractContext, InvokerContractAuthEntry, SubContractInvocation};
use soroban_sdk::{contractclient, vec, Address, Env, IntoVal, Symbol};

#[contractclient(name = "PoolClient")]
pub trait PoolInterface {
    fn create_pair(env: Env, token_a: Address, token_b: Address);
    fn add_liquidity(
        env: Env,
        provider: Address,
        token_a: Address,
        token_b: Address,
        amount_a: i128,
        amount_b: i128,
    ) -> i128;
    /// Reserves as `(reserve_in, reserve_out)`; zeros for an unknown pair.
    fn get_reserves(env: Env, token_in: Address, token_out: Address) -> (i128, i128);
    /// Pulls `amount_in` of `token_in` from `trader` and pays the output
    /// of `token_out` back to `trader`.
    fn swap(
        env: Env,
        trader: Address,
        token_in: Address,
        token_out: Address,
        amount_in: i128,
    ) -> i128;
}

/// Fails with `InvalidReserves` unless the pool holds both assets.
pub fn check_reserves(
    env: &Env,
    pool: &Address,
    asset_in: &Address,
    asset_out: &Address,
) -> Result<(), ExchangeError> {
    let (reserve_in, reserve_out) = PoolClient::new(env, pool).get_reserves(asset_in, asset_out);
    if reserve_in <= 0 || reserve_out <= 0 {
        return Err(ExchangeError::InvalidReserves);
    }
    Ok(())
}

/// Swap `amount_in` out of exchange custody through the pool. The output
/// lands back in exchange custody.
pub fn swap(
    env: &Env,
    pool: &Address,
    asset_in: &Address,
    asset_out: &Address,
    amount_in: i128,
) -> Result<i128, ExchangeError> {
    check_reserves(env, pool, asset_in, asset_out)?;
    let client = PoolClient::new(env, pool);

    let exchange = env.current_contract_address();
    // The pool moves the input itself, one call below us
    env.authorize_as_current_contract(vec![
        env,
        InvokerContractAuthEntry::Contract(SubContractInvocation {
            context: ContractContext {
                contract: asset_in.clone(),
                fn_name: Symbol::new(env, "transfer"),
                args: (exchange.clone(), pool.clone(), amount_in).into_val(env),
            },
            sub_invocations: vec![env],
        }),
    ]);

    let amount_out = client.swap(&exchange, asset_in, asset_out, &amount_in);
    if amount_out <= 0 {
        return Err(ExchangeError::InsufficientOutput);
    }
    Ok(amount_out)
}
