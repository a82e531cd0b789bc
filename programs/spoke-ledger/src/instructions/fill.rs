use anchor_lang::prelude::*;

use crate::{
    common::{LegacyRelayData, RelayData, V3RelayData},
    error::{CommonError, LedgerError},
    event::{FillType, FilledRelay, FilledV3Relay, RelayExecutionEventInfo, V3RelayExecutionEventInfo},
    host::SpokeHost,
    state::FillStatus,
    utils::{
        compute_amount_post_fees, compute_amount_pre_fees, get_relay_hash, get_v3_relay_hash, hash_non_empty_message,
        transfer_from, validate_fee_pcts,
    },
    SpokePool,
};

pub fn fill_v3_relay<H: SpokeHost>(
    pool: &mut SpokePool,
    host: &mut H,
    signer: Pubkey,
    relay_data: V3RelayData,
    repayment_chain_id: u64,
    repayment_address: Pubkey,
) -> Result<()> {
    require!(!pool.state.paused_fills, CommonError::FillsArePaused);

    let current_time = host.get_current_time()?;

    // Check if the exclusivity deadline has passed or if the caller is the exclusive relayer
    if relay_data.exclusive_relayer != signer && relay_data.is_within_exclusivity_window(current_time) {
        return err!(CommonError::NotExclusiveRelayer);
    }

    // Check if the fill deadline has passed
    if relay_data.fill_deadline < current_time {
        return err!(CommonError::ExpiredFillDeadline);
    }

    // Check the fill status and set the fill type
    let relay_hash = get_v3_relay_hash(&relay_data, pool.state.chain_id)?;
    let mut fill_status_account = pool.fills.get(&relay_hash).cloned().unwrap_or_default();
    let fill_type = match fill_status_account.status {
        FillStatus::Filled => {
            return err!(CommonError::RelayFilled);
        }
        FillStatus::RequestedSlowFill => FillType::ReplacedSlowFill,
        FillStatus::Unfilled => FillType::FastFill,
    };

    // Relayer funds the recipient directly.
    transfer_from(
        host,
        pool,
        &relay_data.output_token,
        &signer,
        &relay_data.recipient,
        relay_data.output_amount,
    )?;

    // Update the fill status to Filled, set the relayer and fill deadline
    fill_status_account.status = FillStatus::Filled;
    fill_status_account.relayer = signer;
    fill_status_account.fill_deadline = relay_data.fill_deadline;
    fill_status_account.filled_amount = relay_data.output_amount;
    pool.fills.insert(relay_hash, fill_status_account);

    // Empty message is not hashed and emits zeroed bytes32 for easier human observability.
    let message_hash = hash_non_empty_message(&relay_data.message);

    emit!(FilledV3Relay {
        input_token: relay_data.input_token,
        output_token: relay_data.output_token,
        input_amount: relay_data.input_amount,
        output_amount: relay_data.output_amount,
        repayment_chain_id,
        origin_chain_id: relay_data.origin_chain_id,
        deposit_id: relay_data.deposit_id,
        fill_deadline: relay_data.fill_deadline,
        exclusivity_deadline: relay_data.exclusivity_deadline,
        exclusive_relayer: relay_data.exclusive_relayer,
        relayer: repayment_address,
        depositor: relay_data.depositor,
        recipient: relay_data.recipient,
        message_hash,
        relay_execution_info: V3RelayExecutionEventInfo {
            updated_recipient: relay_data.recipient,
            updated_message_hash: message_hash,
            updated_output_amount: relay_data.output_amount,
            fill_type,
        },
    });

    Ok(())
}

/// Fills a fee percentage relay, possibly partially.
///
/// The relayer sends at most `max_tokens_to_send` post fee tokens. That is converted back to the pre fee `amount` units
/// the relay is tracked in and capped at what is left to fill. A fill that does not cover the whole relay amount must
/// be repaid on this chain.
pub fn fill_relay<H: SpokeHost>(
    pool: &mut SpokePool,
    host: &mut H,
    signer: Pubkey,
    relay_data: LegacyRelayData,
    max_tokens_to_send: u64,
    repayment_chain_id: u64,
) -> Result<()> {
    require!(!pool.state.paused_fills, CommonError::FillsArePaused);
    require!(relay_data.destination_chain_id == pool.state.chain_id, CommonError::InvalidChainId);
    validate_fee_pcts(relay_data.realized_lp_fee_pct, relay_data.relayer_fee_pct)?;

    let chain_id = pool.state.chain_id;
    let relay_hash = get_relay_hash(&RelayData::Legacy(relay_data.clone()), chain_id)?;
    let mut fill_status_account = pool.fills.get(&relay_hash).cloned().unwrap_or_default();
    let fill_type = match fill_status_account.status {
        FillStatus::Filled => {
            return err!(CommonError::RelayFilled);
        }
        FillStatus::RequestedSlowFill => FillType::ReplacedSlowFill,
        FillStatus::Unfilled => FillType::FastFill,
    };

    let fees_pct = relay_data.realized_lp_fee_pct as i128 + relay_data.relayer_fee_pct as i128;
    let remaining_amount =
        relay_data.amount.checked_sub(fill_status_account.filled_amount).ok_or(LedgerError::ArithmeticOverflow)?;

    // If the relayer sends more than what is left, only the remainder is filled and the amount sent is reduced to
    // match.
    let max_fill_amount_pre_fees = compute_amount_pre_fees(max_tokens_to_send, fees_pct)?;
    let (fill_amount_pre_fees, amount_to_send) = if max_fill_amount_pre_fees > remaining_amount {
        (remaining_amount, compute_amount_post_fees(remaining_amount, fees_pct)?)
    } else {
        (max_fill_amount_pre_fees, max_tokens_to_send)
    };
    require!(fill_amount_pre_fees > 0, CommonError::ZeroFillAmount);

    // Partial fills are repaid on this chain only.
    if fill_amount_pre_fees < relay_data.amount && repayment_chain_id != chain_id {
        return err!(CommonError::InvalidRepaymentChain);
    }

    let total_filled_amount = fill_status_account.filled_amount + fill_amount_pre_fees;

    transfer_from(host, pool, &relay_data.destination_token, &signer, &relay_data.recipient, amount_to_send)?;

    fill_status_account.relayer = signer;
    fill_status_account.filled_amount = total_filled_amount;
    if total_filled_amount == relay_data.amount {
        fill_status_account.status = FillStatus::Filled;
    }
    pool.fills.insert(relay_hash, fill_status_account);

    msg!("Filled {} of {} relay amount", total_filled_amount, relay_data.amount);

    let message_hash = hash_non_empty_message(&relay_data.message);

    emit!(FilledRelay {
        amount: relay_data.amount,
        total_filled_amount,
        fill_amount: fill_amount_pre_fees,
        amount_sent: amount_to_send,
        repayment_chain_id,
        origin_chain_id: relay_data.origin_chain_id,
        destination_chain_id: relay_data.destination_chain_id,
        relayer_fee_pct: relay_data.relayer_fee_pct,
        realized_lp_fee_pct: relay_data.realized_lp_fee_pct,
        deposit_id: relay_data.deposit_id,
        destination_token: relay_data.destination_token,
        relayer: signer,
        depositor: relay_data.depositor,
        recipient: relay_data.recipient,
        message_hash,
        fill_type,
        update_info: RelayExecutionEventInfo {
            recipient: relay_data.recipient,
            message_hash,
            applied_relayer_fee_pct: relay_data.relayer_fee_pct,
            is_slow_relay: false,
            payout_adjustment_pct: 0,
        },
    });

    Ok(())
}
