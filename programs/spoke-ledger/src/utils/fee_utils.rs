use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_PAYOUT_ADJUSTMENT_PCT, ONE_HUNDRED_PCT},
    error::{CommonError, LedgerError},
};

/// Returns `amount * pct / ONE_HUNDRED_PCT`, truncating towards zero.
pub fn apply_pct(amount: u64, pct: i128) -> Result<u64> {
    let scaled = (amount as i128).checked_mul(pct).ok_or(LedgerError::ArithmeticOverflow)?;
    let result = scaled / ONE_HUNDRED_PCT;
    if result < 0 {
        return err!(LedgerError::InvalidFeePct);
    }
    u64::try_from(result).map_err(|_| LedgerError::ArithmeticOverflow.into())
}

pub fn validate_fee_pcts(realized_lp_fee_pct: i64, relayer_fee_pct: i64) -> Result<()> {
    require!(realized_lp_fee_pct >= 0 && relayer_fee_pct >= 0, LedgerError::InvalidFeePct);
    require!(
        (realized_lp_fee_pct as i128) + (relayer_fee_pct as i128) < ONE_HUNDRED_PCT,
        LedgerError::InvalidFeePct
    );
    Ok(())
}

pub fn compute_amount_post_fees(amount: u64, fees_pct: i128) -> Result<u64> {
    apply_pct(amount, ONE_HUNDRED_PCT - fees_pct)
}

// Inverse of compute_amount_post_fees: the pre fee amount that a relayer sending `post_fee_amount` is credited with.
pub fn compute_amount_pre_fees(post_fee_amount: u64, fees_pct: i128) -> Result<u64> {
    let remaining_pct = ONE_HUNDRED_PCT - fees_pct;
    if fees_pct < 0 || remaining_pct <= 0 {
        return err!(LedgerError::InvalidFeePct);
    }
    let scaled = (post_fee_amount as i128).checked_mul(ONE_HUNDRED_PCT).ok_or(LedgerError::ArithmeticOverflow)?;
    u64::try_from(scaled / remaining_pct).map_err(|_| LedgerError::ArithmeticOverflow.into())
}

pub fn validate_payout_adjustment_pct(payout_adjustment_pct: i128) -> Result<()> {
    // -100% would zero out the payout, so the lower bound is exclusive.
    require!(payout_adjustment_pct > -ONE_HUNDRED_PCT, CommonError::PayoutAdjustmentTooSmall);
    require!(payout_adjustment_pct <= MAX_PAYOUT_ADJUSTMENT_PCT, CommonError::PayoutAdjustmentTooLarge);
    Ok(())
}

pub fn apply_payout_adjustment(amount: u64, payout_adjustment_pct: i128) -> Result<u64> {
    validate_payout_adjustment_pct(payout_adjustment_pct)?;
    apply_pct(amount, ONE_HUNDRED_PCT + payout_adjustment_pct)
}
