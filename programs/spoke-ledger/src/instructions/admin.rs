use anchor_lang::prelude::*;

use crate::{
    error::LedgerError,
    event::{PausedFills, RelayedRootBundle},
    state::{RootBundle, State},
    SpokePool,
};

pub fn initialize(
    chain_id: u64, // Across definition of chainId for this ledger's chain.
    vault: Pubkey, // Holder of the ledger's float.
) -> State {
    State { paused_fills: false, chain_id, vault, root_bundle_id: 0 }
}

pub fn pause_fills(pool: &mut SpokePool, pause: bool) -> Result<()> {
    pool.state.paused_fills = pause;

    emit!(PausedFills { is_paused: pause });

    Ok(())
}

pub fn relay_root_bundle(
    pool: &mut SpokePool,
    relayer_refund_root: [u8; 32],
    slow_relay_root: [u8; 32],
) -> Result<u32> {
    let root_bundle_id = pool.state.root_bundle_id;
    let next_root_bundle_id = root_bundle_id.checked_add(1).ok_or(LedgerError::ArithmeticOverflow)?;

    pool.root_bundles
        .insert(root_bundle_id, RootBundle { relayer_refund_root, slow_relay_root, claimed_bitmap: Vec::new() });

    msg!("Relayed root bundle {}", root_bundle_id);
    emit!(RelayedRootBundle { root_bundle_id, relayer_refund_root, slow_relay_root });

    // Finally, increment the root bundle id
    pool.state.root_bundle_id = next_root_bundle_id;

    Ok(root_bundle_id)
}
