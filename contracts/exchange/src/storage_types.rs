use soroban_sdk::{contracttype, Address};

// Storage key for user balances (needs struct since it has two fields)
#[derive(Clone)]
#[contracttype]
pub struct BalanceDataKey {
    pub user: Address,
    pub asset: Address,
}

// Unordered pair key, always stored with asset_a < asset_b
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct PairKey {
    pub asset_a: Address,
    pub asset_b: Address,
}

#[derive(Clone)]
#[contracttype]
pub struct ShareDataKey {
    pub user: Address,
    pub pair_id: u32,
}

// Main storage key enum
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Pool,
    PairCount,
    TradeCount,
    PairId(PairKey),
    Pair(u32),                 // pair_id
    Balance(BalanceDataKey),
    Shares(ShareDataKey),
    Trade(u64),                // trade_id
    UserTradeHistory(Address), // user
}
