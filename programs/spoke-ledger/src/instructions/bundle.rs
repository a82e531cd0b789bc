use anchor_lang::prelude::*;

use crate::{
    error::{CommonError, LedgerError},
    event::ExecutedRelayerRefundRoot,
    host::SpokeHost,
    utils::{
        encode_prefixed_leaf, is_claimed, set_claimed, transfer_batch_from_vault, verify_merkle_proof, MerkleLeaf,
    },
    SpokePool,
};

/// Represents a relayer refund leaf with details for token refunds.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct RelayerRefundLeaf {
    pub amount_to_return: u64,          // Amount to return to the hub pool.
    pub chain_id: u64,                  // Chain ID for the refund.
    pub refund_amounts: Vec<u64>,       // Amounts to refund to individual accounts.
    pub leaf_id: u32,                   // Unique ID of the Merkle leaf.
    pub mint_public_key: Pubkey,        // Token mint public key for the refund.
    pub refund_addresses: Vec<Pubkey>,  // Addresses to receive the refunds.
}

impl MerkleLeaf for RelayerRefundLeaf {
    fn to_bytes(&self) -> Result<Vec<u8>> {
        encode_prefixed_leaf(self)
    }
}

/// Executes a relayer refund leaf, paying every refund out of the vault.
/// ### Parameters:
/// - `signer`: Caller executing the leaf, recorded in the emitted event.
/// - `root_bundle_id`: Bundle whose relayer refund root contains the leaf.
pub fn execute_relayer_refund_leaf<H: SpokeHost>(
    pool: &mut SpokePool,
    host: &mut H,
    signer: Pubkey,
    root_bundle_id: u32,
    relayer_refund_leaf: RelayerRefundLeaf,
    proof: Vec<[u8; 32]>,
) -> Result<()> {
    // Verify the Merkle proof for the refund leaf.
    let root_bundle = match pool.root_bundles.get(&root_bundle_id) {
        Some(root_bundle) => root_bundle,
        None => {
            msg!("Invalid proof: unknown root bundle {}", root_bundle_id);
            return err!(CommonError::InvalidMerkleProof);
        }
    };
    let leaf = relayer_refund_leaf.to_keccak_hash()?;
    verify_merkle_proof(root_bundle.relayer_refund_root, leaf, &proof)?;

    if relayer_refund_leaf.chain_id != pool.state.chain_id {
        return err!(CommonError::InvalidChainId);
    }

    // Check if the leaf has already been claimed.
    if is_claimed(&root_bundle.claimed_bitmap, relayer_refund_leaf.leaf_id) {
        return err!(CommonError::ClaimedMerkleLeaf);
    }

    // Ensure refund addresses and amounts match in length.
    if relayer_refund_leaf.refund_addresses.len() != relayer_refund_leaf.refund_amounts.len() {
        return err!(CommonError::InvalidMerkleLeaf);
    }

    let mint = relayer_refund_leaf.mint_public_key;
    let pending_to_hub_pool = pool
        .transfer_liability(&mint)
        .pending_to_hub_pool
        .checked_add(relayer_refund_leaf.amount_to_return)
        .ok_or(LedgerError::ArithmeticOverflow)?;

    // All refunds of the leaf are paid in one batch so a failure never leaves some of them paid.
    let refunds: Vec<(Pubkey, u64)> = relayer_refund_leaf
        .refund_addresses
        .iter()
        .copied()
        .zip(relayer_refund_leaf.refund_amounts.iter().copied())
        .collect();
    transfer_batch_from_vault(host, pool, &mint, &refunds)?;

    // Mark the leaf as claimed in the root bundle's bitmap.
    if let Some(root_bundle) = pool.root_bundles.get_mut(&root_bundle_id) {
        set_claimed(&mut root_bundle.claimed_bitmap, relayer_refund_leaf.leaf_id);
    }

    // Update the pending liability to the hub pool if applicable.
    if relayer_refund_leaf.amount_to_return > 0 {
        pool.transfer_liabilities.entry(mint).or_default().pending_to_hub_pool = pending_to_hub_pool;
    }

    emit!(ExecutedRelayerRefundRoot {
        amount_to_return: relayer_refund_leaf.amount_to_return,
        chain_id: relayer_refund_leaf.chain_id,
        refund_amounts: relayer_refund_leaf.refund_amounts,
        root_bundle_id,
        leaf_id: relayer_refund_leaf.leaf_id,
        l2_token_address: mint,
        refund_addresses: relayer_refund_leaf.refund_addresses,
        caller: signer,
    });

    Ok(())
}
