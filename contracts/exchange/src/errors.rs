use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ExchangeError {
    /// Trade input amount was zero or negative
    ZeroInput = 1,
    /// Ledger or liquidity amount was zero or negative
    ZeroAmount = 2,
    PairNotFound = 3,
    PairExists = 4,
    /// Both sides of a pair are the same asset
    InvalidAssets = 5,
    /// Pricing attempted against an empty reserve
    InvalidReserves = 6,
    InsufficientBalance = 7,
    /// Bookkeeping would go negative; unreachable under correct operation
    InvariantViolation = 8,
    InsufficientShares = 9,
    InsufficientLiquidityMinted = 10,
    /// Curve output rounds down to zero
    InsufficientOutput = 11,
    Overflow = 12,
    NotInitialized = 13,
}
