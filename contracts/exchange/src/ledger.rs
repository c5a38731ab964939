//! Internal ledger of assets held in exchange custody per user.
//!
//! Balances only move across the token boundary in [`deposit`] and
//! [`withdraw`]; every other operation shuffles custody internally.

use crate::errors::ExchangeError;
use crate::storage;
use soroban_sdk::{token::TokenClient, Address, Env};

pub fn credit(
    env: &Env,
    user: &Address,
    asset: &Address,
    amount: i128,
) -> Result<i128, ExchangeError> {
    if amount <= 0 {
        return Err(ExchangeError::ZeroAmount);
    }
    let current = storage::get_balance(env, user, asset);
    let updated = current.checked_add(amount).ok_or(ExchangeError::Overflow)?;
    storage::set_balance(env, user, asset, updated);
    Ok(updated)
}

pub fn debit(
    env: &Env,
    user: &Address,
    asset: &Address,
    amount: i128,
) -> Result<i128, ExchangeError> {
    if amount <= 0 {
        return Err(ExchangeError::ZeroAmount);
    }
    let current = storage::get_balance(env, user, asset);
    if current < amount {
        return Err(ExchangeError::InsufficientBalance);
    }
    let updated = current - amount;
    storage::set_balance(env, user, asset, updated);
    Ok(updated)
}

/// Pull `amount` from the user's token balance into custody and credit it.
/// The user must have approved the exchange as spender beforehand.
pub fn deposit(
    env: &Env,
    user: &Address,
    asset: &Address,
    amount: i128,
) -> Result<i128, ExchangeError> {
    if amount <= 0 {
        return Err(ExchangeError::ZeroAmount);
    }
    let exchange = env.current_contract_address();
    TokenClient::new(env, asset).transfer_from(&exchange, user, &exchange, &amount);
    credit(env, user, asset, amount)
}

/// Debit the ledger, then push `amount` back out to the user.
pub fn withdraw(
    env: &Env,
    user: &Address,
    asset: &Address,
    amount: i128,
) -> Result<i128, ExchangeError> {
    let remaining = debit(env, user, asset, amount)?;
    TokenClient::new(env, asset).transfer(&env.current_contract_address(), user, &amount);
    Ok(remaining)
}
