//! # Across Spoke Ledger
//!
//! Destination side settlement core of the Across spoke pool. Relayers fill relays that were deposited on another
//! chain, either directly ("fast" fills funded by the relayer) or later out of the ledger's vault ("slow" fills) once
//! the HubPool relays a root bundle whose slow relay tree contains the fill. The same root bundles authorize relayer
//! refunds out of the vault.
//!
//! The ledger owns its fill statuses, root bundles and transfer liabilities. Token movements, the clock and the pre
//! payout hook are provided by a [`SpokeHost`](host::SpokeHost).

use std::collections::{BTreeMap, HashMap};

use anchor_lang::prelude::*;

pub mod common;
pub mod constants;
pub mod error;
pub mod event;
pub mod host;
mod instructions;
pub mod state;
pub mod utils;

use common::*;
use error::CommonError;
use host::SpokeHost;
use state::*;

pub use instructions::{RelayerRefundLeaf, SlowFill, SlowFillLeaf, V3SlowFill};

#[derive(Clone, Debug)]
pub struct SpokePool {
    pub(crate) state: State,
    pub(crate) fills: HashMap<[u8; 32], FillStatusAccount>,
    pub(crate) root_bundles: BTreeMap<u32, RootBundle>,
    pub(crate) transfer_liabilities: HashMap<Pubkey, TransferLiability>,
    entered: bool, // Reentrancy guard, set while a state mutating entry point runs.
}

impl SpokePool {
    /****************************************
     *            ADMIN FUNCTIONS           *
     ****************************************/

    /// Initializes the ledger with no fills, no root bundles and fills unpaused.
    ///
    /// ### Parameters:
    /// - chain_id: The chain ID of this ledger, used to identify it in the rest of the Across protocol. Part of every
    ///   relay hash and checked against every leaf executed here.
    /// - vault: The token holder funding slow fills and relayer refunds.
    pub fn initialize(chain_id: u64, vault: Pubkey) -> Self {
        Self {
            state: instructions::initialize(chain_id, vault),
            fills: HashMap::new(),
            root_bundles: BTreeMap::new(),
            transfer_liabilities: HashMap::new(),
            entered: false,
        }
    }

    /// Pauses the ledger from processing fast fills and slow fill requests. Slow relay leaves that were already relayed
    /// in a root bundle can still be executed.
    ///
    /// ### Parameters:
    /// - pause: `true` to pause fills, `false` to unpause them.
    pub fn pause_fills(&mut self, pause: bool) -> Result<()> {
        self.non_reentrant(|pool| instructions::pause_fills(pool, pause))
    }

    /// Stores a new root bundle relayed by the HubPool and returns its id. Ids are assigned sequentially from 0.
    ///
    /// ### Parameters:
    /// - relayer_refund_root: Merkle root of the bundle's relayer refund leaves.
    /// - slow_relay_root: Merkle root of the bundle's slow fill leaves.
    pub fn relay_root_bundle(&mut self, relayer_refund_root: [u8; 32], slow_relay_root: [u8; 32]) -> Result<u32> {
        self.non_reentrant(|pool| instructions::relay_root_bundle(pool, relayer_refund_root, slow_relay_root))
    }

    /****************************************
     *          RELAYER FUNCTIONS           *
     ****************************************/

    /// Fulfill request to bridge cross chain by sending specified output tokens to recipient.
    ///
    /// Relayer & system fee is captured in the spread between input and output amounts. The relay_data hash uniquely
    /// identifies the deposit to fill, ensuring relayers are refunded only for deposits matching the original hash from
    /// the origin SpokePool. Cannot fill more than once. Partial fills are not supported.
    ///
    /// ### Parameters:
    /// - signer: The relayer. Sends output_amount of output_token to the recipient.
    /// - relay_data: Struct containing all the data needed to identify the deposit to be filled. Should match
    ///   all the same-named parameters emitted in the origin chain V3FundsDeposited event.
    ///   - exclusive_relayer: The relayer that will be exclusively allowed to fill this deposit up to and including the
    ///     exclusivity deadline timestamp. `Pubkey::default()` lets anyone fill at any time.
    ///   - fill_deadline: The deadline for the caller to fill the deposit. After this timestamp, the deposit will be
    ///     cancelled and the depositor will be refunded on the origin chain.
    /// - repayment_chain_id: Chain of SpokePool where relayer wants to be refunded after the challenge window has
    ///   passed.
    /// - repayment_address: The address of the recipient on the repayment chain that they want to be refunded to.
    pub fn fill_v3_relay<H: SpokeHost>(
        &mut self,
        host: &mut H,
        signer: Pubkey,
        relay_data: V3RelayData,
        repayment_chain_id: u64,
        repayment_address: Pubkey,
    ) -> Result<()> {
        self.non_reentrant(|pool| {
            instructions::fill_v3_relay(pool, host, signer, relay_data, repayment_chain_id, repayment_address)
        })
    }

    /// Fills a fee percentage relay by sending up to `max_tokens_to_send` post fee tokens to the recipient.
    ///
    /// Legacy relays can be filled partially over several calls. Each partial fill must be repaid on this chain, and
    /// the relay becomes Filled once its whole pre fee amount has been covered, either by fast fills or by a slow fill.
    ///
    /// ### Parameters:
    /// - signer: The relayer sending the tokens.
    /// - relay_data: The fee percentage relay. Its destination_chain_id must be this ledger's chain id.
    /// - max_tokens_to_send: Post fee amount the relayer is willing to send. Reduced to what is left to fill.
    /// - repayment_chain_id: Chain where the relayer wants to be refunded.
    pub fn fill_relay<H: SpokeHost>(
        &mut self,
        host: &mut H,
        signer: Pubkey,
        relay_data: LegacyRelayData,
        max_tokens_to_send: u64,
        repayment_chain_id: u64,
    ) -> Result<()> {
        self.non_reentrant(|pool| {
            instructions::fill_relay(pool, host, signer, relay_data, max_tokens_to_send, repayment_chain_id)
        })
    }

    /****************************************
     *         SLOW FILL FUNCTIONS          *
     ****************************************/

    /// Requests Across to send LP funds to this ledger to fulfill a slow fill.
    ///
    /// Slow fills are created by inserting slow fill objects into a Merkle tree that is included in the next HubPool
    /// "root bundle". Once the slow root is relayed, the slow fill can be executed by anyone who calls
    /// execute_slow_relay_leaf(). Cant request a slow fill if the fill deadline has passed, during the exclusivity
    /// window, or if the relay has already been filled or a slow fill has already been requested.
    pub fn request_v3_slow_fill<H: SpokeHost>(
        &mut self,
        host: &mut H,
        signer: Pubkey,
        relay_data: V3RelayData,
    ) -> Result<()> {
        self.non_reentrant(|pool| instructions::request_v3_slow_fill(pool, host, signer, relay_data))
    }

    /// Executes a slow relay leaf stored as part of a root bundle relayed by the HubPool.
    ///
    /// Executing a slow fill leaf is equivalent to filling the relayData, so this function cannot be used to
    /// double fill a recipient. There is no relayer credited with filling this relay since funds are sent directly out
    /// of the vault. Not affected by paused fills.
    ///
    /// ### Parameters:
    /// - slow_fill_leaf: Either a V3 slow fill paying updated_output_amount, or a legacy slow fill paying the unfilled
    ///   relay amount less the realized LP fee, scaled by its payout adjustment.
    /// - root_bundle_id: Unique ID of root bundle containing slow relay root that this leaf is contained in.
    /// - proof: Inclusion proof for this leaf in slow relay root in root bundle.
    pub fn execute_slow_relay_leaf<H: SpokeHost>(
        &mut self,
        host: &mut H,
        slow_fill_leaf: SlowFillLeaf,
        root_bundle_id: u32,
        proof: Vec<[u8; 32]>,
    ) -> Result<()> {
        self.non_reentrant(|pool| {
            instructions::execute_slow_relay_leaf(pool, host, slow_fill_leaf, root_bundle_id, proof)
        })
    }

    pub fn execute_v3_slow_relay_leaf<H: SpokeHost>(
        &mut self,
        host: &mut H,
        slow_fill_leaf: V3SlowFill,
        root_bundle_id: u32,
        proof: Vec<[u8; 32]>,
    ) -> Result<()> {
        self.execute_slow_relay_leaf(host, slow_fill_leaf.into(), root_bundle_id, proof)
    }

    /****************************************
     *           BUNDLE FUNCTIONS           *
     ****************************************/

    /// Executes relayer refund leaf. Anyone can call this.
    ///
    /// Pays every refund of the leaf out of the vault, marks the leaf as claimed and accrues amount_to_return to the
    /// mint's transfer liability towards the HubPool.
    ///
    /// ### Parameters:
    /// - signer: The caller, recorded in the emitted event.
    /// - root_bundle_id: Unique ID of root bundle containing the relayer refund root.
    /// - relayer_refund_leaf: Refund leaf, its chain_id must be this ledger's chain id.
    /// - proof: Inclusion proof for the leaf in the relayer refund root.
    pub fn execute_relayer_refund_leaf<H: SpokeHost>(
        &mut self,
        host: &mut H,
        signer: Pubkey,
        root_bundle_id: u32,
        relayer_refund_leaf: RelayerRefundLeaf,
        proof: Vec<[u8; 32]>,
    ) -> Result<()> {
        self.non_reentrant(|pool| {
            instructions::execute_relayer_refund_leaf(pool, host, signer, root_bundle_id, relayer_refund_leaf, proof)
        })
    }

    /****************************************
     *               QUERIES                *
     ****************************************/

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn chain_id(&self) -> u64 {
        self.state.chain_id
    }

    pub fn fill_status(&self, relay_hash: &[u8; 32]) -> FillStatus {
        self.fills.get(relay_hash).map(|account| account.status).unwrap_or_default()
    }

    pub fn fill_status_account(&self, relay_hash: &[u8; 32]) -> Option<&FillStatusAccount> {
        self.fills.get(relay_hash)
    }

    pub fn filled_amount(&self, relay_hash: &[u8; 32]) -> u64 {
        self.fills.get(relay_hash).map_or(0, |account| account.filled_amount)
    }

    pub fn root_bundle(&self, root_bundle_id: u32) -> Option<&RootBundle> {
        self.root_bundles.get(&root_bundle_id)
    }

    pub fn slow_relay_root(&self, root_bundle_id: u32) -> Option<[u8; 32]> {
        self.root_bundle(root_bundle_id).map(|root_bundle| root_bundle.slow_relay_root)
    }

    pub fn transfer_liability(&self, mint: &Pubkey) -> TransferLiability {
        self.transfer_liabilities.get(mint).cloned().unwrap_or_default()
    }

    // Runs `f` with the guard set. The flag is restored whether `f` succeeds or fails, a reentrant call leaves it
    // as is.
    fn non_reentrant<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.entered {
            return err!(CommonError::ReentrancyGuard);
        }

        self.entered = true;
        let result = f(self);
        self.entered = false;

        result
    }
}
