use anchor_lang::prelude::*;

use crate::{
    host::{SpokeHost, SpokePoolHandle},
    SpokePool,
};

// Relayer funded transfer straight from the signer to the recipient.
pub fn transfer_from<H: SpokeHost>(
    host: &mut H,
    pool: &mut SpokePool,
    mint: &Pubkey,
    from: &Pubkey,
    to: &Pubkey,
    amount: u64,
) -> Result<()> {
    host.transfer(SpokePoolHandle::new(pool), mint, from, to, amount)
}

// Transfer funded by the ledger's own float.
pub fn transfer_from_vault<H: SpokeHost>(
    host: &mut H,
    pool: &mut SpokePool,
    mint: &Pubkey,
    to: &Pubkey,
    amount: u64,
) -> Result<()> {
    let vault = pool.state.vault;
    host.transfer(SpokePoolHandle::new(pool), mint, &vault, to, amount)
}

// Pays all transfers out of the float or none of them.
pub fn transfer_batch_from_vault<H: SpokeHost>(
    host: &mut H,
    pool: &mut SpokePool,
    mint: &Pubkey,
    transfers: &[(Pubkey, u64)],
) -> Result<()> {
    let vault = pool.state.vault;
    host.transfer_batch(SpokePoolHandle::new(pool), mint, &vault, transfers)
}
