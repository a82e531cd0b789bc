use anchor_lang::prelude::*;

use crate::{
    common::{LegacyRelayData, V3RelayData},
    RelayerRefundLeaf, SlowFillLeaf, SpokePool,
};

/// Collaborators the ledger relies on but does not own: the clock, token movements and the pre-payout extension point.
///
/// A host failing any call aborts the entry point that made it. The ledger never commits state before its last host
/// call, and every entry point moves tokens through a single `transfer` or `transfer_batch` call, so a failed call
/// leaves both the ledger and the balances untouched.
pub trait SpokeHost {
    /// Source of "now" for fill and exclusivity deadline checks. Expected to be non-decreasing.
    fn get_current_time(&self) -> Result<u32> {
        Ok(Clock::get()?.unix_timestamp as u32)
    }

    /// Moves `amount` of `mint` tokens from `from` to `to`, either fully or not at all.
    ///
    /// The pool is handed over as the token program would hand control to a recipient, so implementations may call
    /// back into it. Any such call into a state mutating entry point fails with `ReentrancyGuard`.
    fn transfer(
        &mut self,
        pool: SpokePoolHandle<'_>,
        mint: &Pubkey,
        from: &Pubkey,
        to: &Pubkey,
        amount: u64,
    ) -> Result<()>;

    /// Moves every `(to, amount)` of `mint` tokens out of `from` as one unit: either all of them happen or none does.
    fn transfer_batch(
        &mut self,
        pool: SpokePoolHandle<'_>,
        mint: &Pubkey,
        from: &Pubkey,
        transfers: &[(Pubkey, u64)],
    ) -> Result<()>;

    /// Invoked before a slow fill pays out of the vault, e.g. to unwrap native tokens.
    fn pre_execute_leaf_hook(&mut self, _output_token: &Pubkey) -> Result<()> {
        Ok(())
    }
}

/// The ledger as seen by a host while one of its transfers is in flight.
///
/// Only the public entry points and read-only queries are reachable, so a host can neither replace the ledger nor
/// clear its reentrancy guard.
pub struct SpokePoolHandle<'a> {
    pool: &'a mut SpokePool,
}

impl<'a> SpokePoolHandle<'a> {
    pub(crate) fn new(pool: &'a mut SpokePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SpokePool {
        self.pool
    }

    pub fn pause_fills(&mut self, pause: bool) -> Result<()> {
        self.pool.pause_fills(pause)
    }

    pub fn relay_root_bundle(&mut self, relayer_refund_root: [u8; 32], slow_relay_root: [u8; 32]) -> Result<u32> {
        self.pool.relay_root_bundle(relayer_refund_root, slow_relay_root)
    }

    pub fn fill_v3_relay<H: SpokeHost>(
        &mut self,
        host: &mut H,
        signer: Pubkey,
        relay_data: V3RelayData,
        repayment_chain_id: u64,
        repayment_address: Pubkey,
    ) -> Result<()> {
        self.pool.fill_v3_relay(host, signer, relay_data, repayment_chain_id, repayment_address)
    }

    pub fn fill_relay<H: SpokeHost>(
        &mut self,
        host: &mut H,
        signer: Pubkey,
        relay_data: LegacyRelayData,
        max_tokens_to_send: u64,
        repayment_chain_id: u64,
    ) -> Result<()> {
        self.pool.fill_relay(host, signer, relay_data, max_tokens_to_send, repayment_chain_id)
    }

    pub fn request_v3_slow_fill<H: SpokeHost>(
        &mut self,
        host: &mut H,
        signer: Pubkey,
        relay_data: V3RelayData,
    ) -> Result<()> {
        self.pool.request_v3_slow_fill(host, signer, relay_data)
    }

    pub fn execute_slow_relay_leaf<H: SpokeHost>(
        &mut self,
        host: &mut H,
        slow_fill_leaf: SlowFillLeaf,
        root_bundle_id: u32,
        proof: Vec<[u8; 32]>,
    ) -> Result<()> {
        self.pool.execute_slow_relay_leaf(host, slow_fill_leaf, root_bundle_id, proof)
    }

    pub fn execute_relayer_refund_leaf<H: SpokeHost>(
        &mut self,
        host: &mut H,
        signer: Pubkey,
        root_bundle_id: u32,
        relayer_refund_leaf: RelayerRefundLeaf,
        proof: Vec<[u8; 32]>,
    ) -> Result<()> {
        self.pool.execute_relayer_refund_leaf(host, signer, root_bundle_id, relayer_refund_leaf, proof)
    }
}
