use anchor_lang::prelude::*;

use crate::{
    common::{LegacyRelayData, RelayData, V3RelayData},
    constants::SLOW_FILL_REPAYMENT_CHAIN_ID,
    error::{CommonError, LedgerError},
    event::{
        FillType, FilledRelay, FilledV3Relay, RelayExecutionEventInfo, RequestedV3SlowFill, V3RelayExecutionEventInfo,
    },
    host::SpokeHost,
    state::{FillStatus, FillStatusAccount},
    utils::{
        apply_payout_adjustment, compute_amount_post_fees, encode_prefixed_leaf, get_relay_hash, get_v3_relay_hash,
        hash_non_empty_message, transfer_from_vault, validate_fee_pcts, verify_merkle_proof, MerkleLeaf,
    },
    SpokePool,
};

pub fn request_v3_slow_fill<H: SpokeHost>(
    pool: &mut SpokePool,
    host: &mut H,
    signer: Pubkey,
    relay_data: V3RelayData,
) -> Result<()> {
    require!(!pool.state.paused_fills, CommonError::FillsArePaused);

    let current_time = host.get_current_time()?;

    // Check if the fill is past the exclusivity window & within the fill deadline.
    if relay_data.is_within_exclusivity_window(current_time) {
        return err!(CommonError::NoSlowFillsInExclusivityWindow);
    }
    if relay_data.fill_deadline < current_time {
        return err!(CommonError::ExpiredFillDeadline);
    }

    // Check the fill status is unfilled.
    let relay_hash = get_v3_relay_hash(&relay_data, pool.state.chain_id)?;
    let fill_status_account = pool.fills.entry(relay_hash).or_default();
    if fill_status_account.status != FillStatus::Unfilled {
        return err!(CommonError::InvalidSlowFillRequest);
    }

    fill_status_account.status = FillStatus::RequestedSlowFill; // Update the fill status to RequestedSlowFill
    fill_status_account.relayer = signer;
    fill_status_account.fill_deadline = relay_data.fill_deadline;

    // Emit the RequestedV3SlowFill event. Empty message is not hashed and emits zeroed bytes32 for easier observability
    let message_hash = hash_non_empty_message(&relay_data.message);

    emit!(RequestedV3SlowFill {
        input_token: relay_data.input_token,
        output_token: relay_data.output_token,
        input_amount: relay_data.input_amount,
        output_amount: relay_data.output_amount,
        origin_chain_id: relay_data.origin_chain_id,
        deposit_id: relay_data.deposit_id,
        fill_deadline: relay_data.fill_deadline,
        exclusivity_deadline: relay_data.exclusivity_deadline,
        exclusive_relayer: relay_data.exclusive_relayer,
        depositor: relay_data.depositor,
        recipient: relay_data.recipient,
        message_hash,
    });

    Ok(())
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct V3SlowFill {
    pub relay_data: V3RelayData,
    pub chain_id: u64,
    pub updated_output_amount: u64,
}

// Slow fill of a fee percentage relay. Only the realized LP fee is taken, the relayer fee goes back to the depositor.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct SlowFill {
    pub relay_data: LegacyRelayData,
    pub payout_adjustment_pct: i128,
}

/// Leaf of a root bundle's slow relay tree.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub enum SlowFillLeaf {
    Legacy(SlowFill),
    V3(V3SlowFill),
}

impl SlowFillLeaf {
    /// Destination chain the leaf can be executed on.
    pub fn chain_id(&self) -> u64 {
        match self {
            SlowFillLeaf::Legacy(slow_fill) => slow_fill.relay_data.destination_chain_id,
            SlowFillLeaf::V3(slow_fill) => slow_fill.chain_id,
        }
    }

    pub fn relay_data(&self) -> RelayData {
        match self {
            SlowFillLeaf::Legacy(slow_fill) => RelayData::Legacy(slow_fill.relay_data.clone()),
            SlowFillLeaf::V3(slow_fill) => RelayData::V3(slow_fill.relay_data.clone()),
        }
    }
}

impl MerkleLeaf for SlowFillLeaf {
    fn to_bytes(&self) -> Result<Vec<u8>> {
        encode_prefixed_leaf(self)
    }
}

impl From<V3SlowFill> for SlowFillLeaf {
    fn from(slow_fill: V3SlowFill) -> Self {
        SlowFillLeaf::V3(slow_fill)
    }
}

impl From<SlowFill> for SlowFillLeaf {
    fn from(slow_fill: SlowFill) -> Self {
        SlowFillLeaf::Legacy(slow_fill)
    }
}

pub fn execute_slow_relay_leaf<H: SpokeHost>(
    pool: &mut SpokePool,
    host: &mut H,
    slow_fill_leaf: SlowFillLeaf,
    root_bundle_id: u32,
    proof: Vec<[u8; 32]>,
) -> Result<()> {
    let chain_id = pool.state.chain_id;

    // A leaf addressed to another chain, an unknown bundle and a bad proof all fail the same way.
    if slow_fill_leaf.chain_id() != chain_id {
        msg!("Invalid proof: leaf is not addressed to chain {}", chain_id);
        return err!(CommonError::InvalidMerkleProof);
    }
    let root = match pool.root_bundles.get(&root_bundle_id) {
        Some(root_bundle) => root_bundle.slow_relay_root,
        None => {
            msg!("Invalid proof: unknown root bundle {}", root_bundle_id);
            return err!(CommonError::InvalidMerkleProof);
        }
    };
    let leaf = slow_fill_leaf.to_keccak_hash()?;
    verify_merkle_proof(root, leaf, &proof)?;

    let current_time = host.get_current_time()?;

    // Check if the fill status is not filled
    let relay_hash = get_relay_hash(&slow_fill_leaf.relay_data(), chain_id)?;
    let mut fill_status_account = pool.fills.get(&relay_hash).cloned().unwrap_or_default();
    if fill_status_account.status == FillStatus::Filled {
        return err!(CommonError::RelayFilled);
    }

    match slow_fill_leaf {
        SlowFillLeaf::V3(slow_fill) => {
            execute_v3_slow_fill(pool, host, slow_fill, relay_hash, fill_status_account, current_time)
        }
        SlowFillLeaf::Legacy(slow_fill) => {
            let SlowFill { relay_data, payout_adjustment_pct } = slow_fill;
            validate_fee_pcts(relay_data.realized_lp_fee_pct, relay_data.relayer_fee_pct)?;

            // Only what fast fills have not covered yet is paid, less the realized LP fee, scaled by the adjustment.
            let remaining_amount = relay_data
                .amount
                .checked_sub(fill_status_account.filled_amount)
                .ok_or(LedgerError::ArithmeticOverflow)?;
            let amount_post_fees = compute_amount_post_fees(remaining_amount, relay_data.realized_lp_fee_pct as i128)?;
            let amount_to_send = apply_payout_adjustment(amount_post_fees, payout_adjustment_pct)?;

            host.pre_execute_leaf_hook(&relay_data.destination_token)?;
            transfer_from_vault(host, pool, &relay_data.destination_token, &relay_data.recipient, amount_to_send)?;

            fill_status_account.status = FillStatus::Filled;
            fill_status_account.filled_amount = relay_data.amount;
            pool.fills.insert(relay_hash, fill_status_account);

            let message_hash = hash_non_empty_message(&relay_data.message);

            emit!(FilledRelay {
                amount: relay_data.amount,
                total_filled_amount: relay_data.amount,
                fill_amount: remaining_amount,
                amount_sent: amount_to_send,
                repayment_chain_id: SLOW_FILL_REPAYMENT_CHAIN_ID,
                origin_chain_id: relay_data.origin_chain_id,
                destination_chain_id: relay_data.destination_chain_id,
                relayer_fee_pct: relay_data.relayer_fee_pct,
                realized_lp_fee_pct: relay_data.realized_lp_fee_pct,
                deposit_id: relay_data.deposit_id,
                destination_token: relay_data.destination_token,
                relayer: Pubkey::default(), // There is no repayment address for slow fills.
                depositor: relay_data.depositor,
                recipient: relay_data.recipient,
                message_hash,
                fill_type: FillType::SlowFill,
                update_info: RelayExecutionEventInfo {
                    recipient: relay_data.recipient,
                    message_hash,
                    applied_relayer_fee_pct: 0,
                    is_slow_relay: true,
                    payout_adjustment_pct,
                },
            });

            Ok(())
        }
    }
}

fn execute_v3_slow_fill<H: SpokeHost>(
    pool: &mut SpokePool,
    host: &mut H,
    slow_fill: V3SlowFill,
    relay_hash: [u8; 32],
    mut fill_status_account: FillStatusAccount,
    current_time: u32,
) -> Result<()> {
    let V3SlowFill { relay_data, updated_output_amount, .. } = slow_fill;

    // Check if the fill deadline has passed
    if relay_data.fill_deadline < current_time {
        return err!(CommonError::ExpiredFillDeadline);
    }

    host.pre_execute_leaf_hook(&relay_data.output_token)?;
    transfer_from_vault(host, pool, &relay_data.output_token, &relay_data.recipient, updated_output_amount)?;

    // Update the fill status. We don't set the relayer and fill deadline as it is set when the slow fill was requested.
    fill_status_account.status = FillStatus::Filled;
    fill_status_account.filled_amount = relay_data.output_amount;
    pool.fills.insert(relay_hash, fill_status_account);

    // Empty message is not hashed and emits zeroed bytes32 for easier human observability.
    let message_hash = hash_non_empty_message(&relay_data.message);

    emit!(FilledV3Relay {
        input_token: relay_data.input_token,
        output_token: relay_data.output_token,
        input_amount: relay_data.input_amount,
        output_amount: relay_data.output_amount,
        repayment_chain_id: SLOW_FILL_REPAYMENT_CHAIN_ID,
        origin_chain_id: relay_data.origin_chain_id,
        deposit_id: relay_data.deposit_id,
        fill_deadline: relay_data.fill_deadline,
        exclusivity_deadline: relay_data.exclusivity_deadline,
        exclusive_relayer: relay_data.exclusive_relayer,
        relayer: Pubkey::default(), // There is no repayment address for slow fills.
        depositor: relay_data.depositor,
        recipient: relay_data.recipient,
        message_hash,
        relay_execution_info: V3RelayExecutionEventInfo {
            updated_recipient: relay_data.recipient,
            updated_message_hash: message_hash,
            updated_output_amount,
            fill_type: FillType::SlowFill,
        },
    });

    Ok(())
}
