use soroban_sdk::{contracttype, Address};

/// Pricing engine a trade is routed to.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Strategy {
    /// Internally tracked bonding-curve reserves
    Curve,
    /// Delegated external constant-product pool
    Pool,
}

impl Strategy {
    pub fn from_flag(use_curve: bool) -> Self {
        if use_curve {
            Strategy::Curve
        } else {
            Strategy::Pool
        }
    }
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Side {
    Buy,
    Sell,
}

/// Registry entry for a trading pair. Assets are stored in canonical order
/// (`asset_a < asset_b`) regardless of the order they were registered in.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PairRecord {
    pub id: u32,
    pub asset_a: Address,
    pub asset_b: Address,
    pub reserve_a: i128,
    pub reserve_b: i128,
    pub total_supply: i128,
    pub curve_param: u32,
}

impl PairRecord {
    /// Reserves as `(reserve_in, reserve_out)` for a trade paying `asset_in`.
    pub fn reserves_for(&self, asset_in: &Address) -> (i128, i128) {
        if *asset_in == self.asset_a {
            (self.reserve_a, self.reserve_b)
        } else {
            (self.reserve_b, self.reserve_a)
        }
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TradeRecord {
    pub trade_id: u64,
    pub trader: Address,
    pub side: Side,
    pub asset_in: Address,
    pub asset_out: Address,
    pub amount_in: i128,
    pub amount_out: i128,
    pub strategy: Strategy,
    pub timestamp: u64,
}
