use anchor_lang::prelude::*;

// Common Errors with EVM SpokePool.
#[error_code]
pub enum CommonError {
    #[msg("Caller is not the exclusive relayer and exclusivity deadline has not passed!")]
    NotExclusiveRelayer,
    #[msg("The Deposit is still within the exclusivity window!")]
    NoSlowFillsInExclusivityWindow,
    #[msg("The relay has already been filled!")]
    RelayFilled,
    #[msg("Slow fill requires status of Unfilled!")]
    InvalidSlowFillRequest,
    #[msg("The fill deadline has passed!")]
    ExpiredFillDeadline,
    #[msg("Invalid Merkle proof!")]
    InvalidMerkleProof,
    #[msg("Invalid chain id!")]
    InvalidChainId,
    #[msg("Invalid Merkle leaf!")]
    InvalidMerkleLeaf,
    #[msg("Leaf already claimed!")]
    ClaimedMerkleLeaf,
    #[msg("Paused fills")]
    FillsArePaused,
    #[msg("Partial fills must be repaid on the destination chain!")]
    InvalidRepaymentChain,
    #[msg("Fill amount pre fees is 0!")]
    ZeroFillAmount,
    #[msg("payoutAdjustmentPct too small")]
    PayoutAdjustmentTooSmall,
    #[msg("payoutAdjustmentPct too large")]
    PayoutAdjustmentTooLarge,
    #[msg("ReentrancyGuard: reentrant call")]
    ReentrancyGuard,
}

// Ledger specific errors.
#[error_code]
pub enum LedgerError {
    #[msg("Arithmetic overflow!")]
    ArithmeticOverflow,
    #[msg("Fee percentages must be non-negative and sum below 100%!")]
    InvalidFeePct,
    #[msg("Leaf is not part of the Merkle tree!")]
    LeafNotFound,
    #[msg("Cannot build a Merkle tree without leaves!")]
    EmptyMerkleTree,
}
