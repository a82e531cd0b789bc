use anchor_lang::prelude::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FillStatus {
    #[default]
    Unfilled,
    RequestedSlowFill,
    Filled,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct FillStatusAccount {
    pub status: FillStatus, // Tracks the status of the fill between Unfilled, requestedSlowFill, and Filled.
    pub relayer: Pubkey,    // Relayer that requested the slow fill or last fast filled the relay.
    pub fill_deadline: u32,
    // Running total of the relay amount already filled. Pre fee `amount` units for legacy relays, `output_amount` for
    // V3 relays.
    pub filled_amount: u64,
}
