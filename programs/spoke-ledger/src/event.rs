use anchor_lang::prelude::*;

// Admin events
#[event]
pub struct PausedFills {
    pub is_paused: bool,
}

#[event]
pub struct RelayedRootBundle {
    pub root_bundle_id: u32,
    pub relayer_refund_root: [u8; 32],
    pub slow_relay_root: [u8; 32],
}

// Fill events
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FillType {
    FastFill,
    ReplacedSlowFill,
    SlowFill,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct V3RelayExecutionEventInfo {
    pub updated_recipient: Pubkey,
    pub updated_message_hash: [u8; 32],
    pub updated_output_amount: u64,
    pub fill_type: FillType,
}

#[event]
pub struct FilledV3Relay {
    pub input_token: Pubkey,
    pub output_token: Pubkey,
    pub input_amount: u64,
    pub output_amount: u64,
    pub repayment_chain_id: u64,
    pub origin_chain_id: u64,
    pub deposit_id: [u8; 32],
    pub fill_deadline: u32,
    pub exclusivity_deadline: u32,
    pub exclusive_relayer: Pubkey,
    pub relayer: Pubkey,
    pub depositor: Pubkey,
    pub recipient: Pubkey,
    pub message_hash: [u8; 32],
    pub relay_execution_info: V3RelayExecutionEventInfo,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct RelayExecutionEventInfo {
    pub recipient: Pubkey,
    pub message_hash: [u8; 32],
    pub applied_relayer_fee_pct: i64,
    pub is_slow_relay: bool,
    pub payout_adjustment_pct: i128,
}

// Legacy fee percentage relays. `fill_amount` and `total_filled_amount` are in pre-fee relay units.
#[event]
pub struct FilledRelay {
    pub amount: u64,
    pub total_filled_amount: u64,
    pub fill_amount: u64,
    pub amount_sent: u64,
    pub repayment_chain_id: u64,
    pub origin_chain_id: u64,
    pub destination_chain_id: u64,
    pub relayer_fee_pct: i64,
    pub realized_lp_fee_pct: i64,
    pub deposit_id: u32,
    pub destination_token: Pubkey,
    pub relayer: Pubkey,
    pub depositor: Pubkey,
    pub recipient: Pubkey,
    pub message_hash: [u8; 32],
    pub fill_type: FillType,
    pub update_info: RelayExecutionEventInfo,
}

// Slow fill events
#[event]
pub struct RequestedV3SlowFill {
    pub input_token: Pubkey,
    pub output_token: Pubkey,
    pub input_amount: u64,
    pub output_amount: u64,
    pub origin_chain_id: u64,
    pub deposit_id: [u8; 32],
    pub fill_deadline: u32,
    pub exclusivity_deadline: u32,
    pub exclusive_relayer: Pubkey,
    pub depositor: Pubkey,
    pub recipient: Pubkey,
    pub message_hash: [u8; 32],
}

// Relayer refund events
#[event]
pub struct ExecutedRelayerRefundRoot {
    pub amount_to_return: u64,
    pub chain_id: u64,
    pub refund_amounts: Vec<u64>,
    pub root_bundle_id: u32,
    pub leaf_id: u32,
    pub l2_token_address: Pubkey,
    pub refund_addresses: Vec<Pubkey>,
    pub caller: Pubkey,
}
