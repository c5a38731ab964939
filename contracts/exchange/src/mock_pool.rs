#![cfg(test)]

// Minimal external constant-product pool implementing `PoolInterface`,
// used as the `Strategy::Pool` collaborator in tests.

use crate::math;
use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, panic_with_error, token::TokenClient,
    Address, Env,
};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum MockPoolError {
    PairExists = 101,
    PairNotFound = 102,
    InvalidReserves = 103,
}

#[derive(Clone)]
#[contracttype]
enum PoolKey {
    Reserves(Address, Address),
}

fn sorted(token_a: Address, token_b: Address) -> (Address, Address, bool) {
    if token_a < token_b {
        (token_a, token_b, false)
    } else {
        (token_b, token_a, true)
    }
}

fn read(env: &Env, token_a: &Address, token_b: &Address) -> Option<(i128, i128)> {
    env.storage()
        .instance()
        .get(&PoolKey::Reserves(token_a.clone(), token_b.clone()))
}

fn write(env: &Env, token_a: &Address, token_b: &Address, reserves: (i128, i128)) {
    env.storage()
        .instance()
        .set(&PoolKey::Reserves(token_a.clone(), token_b.clone()), &reserves);
}

#[contract]
pub struct MockPool;

#[contractimpl]
impl MockPool {
    pub fn create_pair(env: Env, token_a: Address, token_b: Address) {
        let (a, b, _) = sorted(token_a, token_b);
        if read(&env, &a, &b).is_some() {
            panic_with_error!(&env, MockPoolError::PairExists);
        }
        write(&env, &a, &b, (0, 0));
    }

    pub fn add_liquidity(
        env: Env,
        provider: Address,
        token_a: Address,
        token_b: Address,
        amount_a: i128,
        amount_b: i128,
    ) -> i128 {
        provider.require_auth();
        let pool = env.current_contract_address();
        TokenClient::new(&env, &token_a).transfer(&provider, &pool, &amount_a);
        TokenClient::new(&env, &token_b).transfer(&provider, &pool, &amount_b);

        let (a, b, flipped) = sorted(token_a, token_b);
        let (amount_a, amount_b) = if flipped {
            (amount_b, amount_a)
        } else {
            (amount_a, amount_b)
        };
        let (reserve_a, reserve_b) = match read(&env, &a, &b) {
            Some(reserves) => reserves,
            None => panic_with_error!(&env, MockPoolError::PairNotFound),
        };
        write(&env, &a, &b, (reserve_a + amount_a, reserve_b + amount_b));
        match math::sqrt_product(&env, amount_a, amount_b) {
            Ok(shares) => shares,
            Err(_) => panic_with_error!(&env, MockPoolError::InvalidReserves),
        }
    }

    pub fn get_reserves(env: Env, token_in: Address, token_out: Address) -> (i128, i128) {
        let (a, b, flipped) = sorted(token_in, token_out);
        let (reserve_a, reserve_b) = read(&env, &a, &b).unwrap_or((0, 0));
        if flipped {
            (reserve_b, reserve_a)
        } else {
            (reserve_a, reserve_b)
        }
    }

    pub fn swap(
        env: Env,
        trader: Address,
        token_in: Address,
        token_out: Address,
        amount_in: i128,
    ) -> i128 {
        trader.require_auth();
        let (reserve_in, reserve_out) =
            Self::get_reserves(env.clone(), token_in.clone(), token_out.clone());
        if reserve_in == 0 || reserve_out == 0 {
            panic_with_error!(&env, MockPoolError::InvalidReserves);
        }
        let denominator = reserve_in + amount_in;
        let amount_out = match math::mul_div_floor(&env, reserve_out, amount_in, denominator) {
            Ok(amount_out) => amount_out,
            Err(_) => panic_with_error!(&env, MockPoolError::InvalidReserves),
        };

        let pool = env.current_contract_address();
        TokenClient::new(&env, &token_in).transfer(&trader, &pool, &amount_in);
        TokenClient::new(&env, &token_out).transfer(&pool, &trader, &amount_out);

        let (a, b, flipped) = sorted(token_in, token_out);
        let reserves = if flipped {
            (reserve_out - amount_out, reserve_in + amount_in)
        } else {
            (reserve_in + amount_in, reserve_out - amount_out)
        };
        write(&env, &a, &b, reserves);
        amount_out
    }
}
