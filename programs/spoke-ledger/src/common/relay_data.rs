use anchor_lang::prelude::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct V3RelayData {
    pub depositor: Pubkey,
    pub recipient: Pubkey,
    pub exclusive_relayer: Pubkey, // Pubkey::default() when the deposit has no exclusive relayer.
    pub input_token: Pubkey,
    pub output_token: Pubkey,
    pub input_amount: u64,
    pub output_amount: u64,
    pub origin_chain_id: u64,
    pub deposit_id: [u8; 32],
    pub fill_deadline: u32,
    pub exclusivity_deadline: u32,
    pub message: Vec<u8>,
}

impl V3RelayData {
    /// Only the exclusive relayer can act on the relay until (and including) the exclusivity deadline.
    pub fn is_within_exclusivity_window(&self, current_time: u32) -> bool {
        self.exclusive_relayer != Pubkey::default() && self.exclusivity_deadline >= current_time
    }
}

// Fee percentage based relay. The relayer is paid `amount` minus both fees on the origin side, so the recipient
// receives the post fee amount on the destination chain.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct LegacyRelayData {
    pub depositor: Pubkey,
    pub recipient: Pubkey,
    pub destination_token: Pubkey,
    pub amount: u64,
    pub origin_chain_id: u64,
    pub destination_chain_id: u64,
    pub realized_lp_fee_pct: i64,
    pub relayer_fee_pct: i64,
    pub deposit_id: u32,
    pub message: Vec<u8>,
}

/// Both relay shapes that can be settled on this ledger. The variant tag is part of the relay hash preimage.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub enum RelayData {
    Legacy(LegacyRelayData),
    V3(V3RelayData),
}

impl From<V3RelayData> for RelayData {
    fn from(relay_data: V3RelayData) -> Self {
        RelayData::V3(relay_data)
    }
}

impl From<LegacyRelayData> for RelayData {
    fn from(relay_data: LegacyRelayData) -> Self {
        RelayData::Legacy(relay_data)
    }
}
