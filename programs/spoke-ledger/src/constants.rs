// Fixed-point base shared by fee and payout adjustment percentages: 1e18 is 100%.
pub const ONE_HUNDRED_PCT: i128 = 1_000_000_000_000_000_000;

// Slow fill payouts can be scaled up to 101x (+10000%) of the post fee amount.
pub const MAX_PAYOUT_ADJUSTMENT_PCT: i128 = 100 * ONE_HUNDRED_PCT;

// Leaf encodings start with this many zero bytes. This covers the depositor and recipient fields of EVM encoded leaves
// so that an EVM leaf can never be replayed as a leaf of this ledger (and vice versa).
pub const LEAF_PREFIX_SIZE: usize = 64;

// Repayment chain id recorded on slow fills as they are never repaid to a relayer.
pub const SLOW_FILL_REPAYMENT_CHAIN_ID: u64 = 0;
