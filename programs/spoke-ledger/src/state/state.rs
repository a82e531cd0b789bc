use anchor_lang::prelude::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct State {
    pub paused_fills: bool,
    pub chain_id: u64,       // Across definition of chainId for this ledger's chain.
    pub vault: Pubkey,       // Holder of the ledger's float, funds slow fills and relayer refunds.
    pub root_bundle_id: u32, // Id assigned to the next relayed root bundle.
}
