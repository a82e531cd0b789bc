mod common;

use anchor_lang::prelude::*;
use common::*;
use spoke_ledger::{
    error::CommonError,
    state::{State, TransferLiability},
    utils::{is_claimed, MerkleTree},
    RelayerRefundLeaf,
};

const VAULT_BALANCE: u64 = 1_000_000;

fn refund_leaf(leaf_id: u32) -> RelayerRefundLeaf {
    RelayerRefundLeaf {
        amount_to_return: 500,
        chain_id: CHAIN_ID,
        refund_amounts: vec![1000, 2000],
        leaf_id,
        mint_public_key: output_token(),
        refund_addresses: vec![relayer(), other_relayer()],
    }
}

fn funded_host() -> MockHost {
    let mut host = MockHost::new();
    host.mint_to(&output_token(), &vault(), VAULT_BALANCE);
    host
}

#[test]
fn root_bundle_ids_are_sequential() {
    let mut pool = pool();

    assert_eq!(pool.relay_root_bundle([1; 32], [2; 32]).unwrap(), 0);
    assert_eq!(pool.relay_root_bundle([3; 32], [4; 32]).unwrap(), 1);
    assert_eq!(pool.state().root_bundle_id, 2);

    let root_bundle = pool.root_bundle(1).unwrap();
    assert_eq!(root_bundle.relayer_refund_root, [3; 32]);
    assert_eq!(root_bundle.slow_relay_root, [4; 32]);
    assert!(root_bundle.claimed_bitmap.is_empty());
    assert_eq!(pool.slow_relay_root(0), Some([2; 32]));
    assert!(pool.root_bundle(2).is_none());
}

#[test]
fn refund_leaf_pays_relayers_and_accrues_liability() {
    let mut pool = pool();
    let mut host = funded_host();
    let leaves: Vec<_> = (0..3).map(refund_leaf).collect();
    let tree = MerkleTree::new(&leaves).unwrap();
    let root_bundle_id = pool.relay_root_bundle(tree.root(), [0; 32]).unwrap();

    let proof = tree.get_proof(&leaves[1]).unwrap();
    pool.execute_relayer_refund_leaf(&mut host, relayer(), root_bundle_id, leaves[1].clone(), proof).unwrap();

    assert_eq!(host.balance(&output_token(), &relayer()), 1000);
    assert_eq!(host.balance(&output_token(), &other_relayer()), 2000);
    assert_eq!(host.balance(&output_token(), &vault()), VAULT_BALANCE - 3000);
    assert_eq!(pool.transfer_liability(&output_token()).pending_to_hub_pool, 500);

    let claimed_bitmap = &pool.root_bundle(root_bundle_id).unwrap().claimed_bitmap;
    assert!(is_claimed(claimed_bitmap, 1));
    assert!(!is_claimed(claimed_bitmap, 0));

    let proof = tree.get_proof(&leaves[2]).unwrap();
    pool.execute_relayer_refund_leaf(&mut host, relayer(), root_bundle_id, leaves[2].clone(), proof).unwrap();
    assert_eq!(pool.transfer_liability(&output_token()).pending_to_hub_pool, 1000);
}

#[test]
fn refund_leaf_cannot_be_claimed_twice() {
    let mut pool = pool();
    let mut host = funded_host();
    let leaves: Vec<_> = (0..2).map(refund_leaf).collect();
    let tree = MerkleTree::new(&leaves).unwrap();
    let root_bundle_id = pool.relay_root_bundle(tree.root(), [0; 32]).unwrap();
    let proof = tree.get_proof(&leaves[0]).unwrap();

    pool.execute_relayer_refund_leaf(&mut host, relayer(), root_bundle_id, leaves[0].clone(), proof.clone()).unwrap();
    let result = pool.execute_relayer_refund_leaf(&mut host, relayer(), root_bundle_id, leaves[0].clone(), proof);

    assert_eq!(error_name(result), CommonError::ClaimedMerkleLeaf.name());
    assert_eq!(host.balance(&output_token(), &vault()), VAULT_BALANCE - 3000);
    assert_eq!(pool.transfer_liability(&output_token()).pending_to_hub_pool, 500);
}

#[test]
fn refund_leaf_validation() {
    let mut pool = pool();
    let mut host = funded_host();

    let mut other_chain = refund_leaf(0);
    other_chain.chain_id = CHAIN_ID + 1;
    let mut mismatched = refund_leaf(1);
    mismatched.refund_amounts.push(1);
    let valid = refund_leaf(2);
    let leaves = vec![other_chain.clone(), mismatched.clone(), valid.clone()];
    let tree = MerkleTree::new(&leaves).unwrap();
    let root_bundle_id = pool.relay_root_bundle(tree.root(), [0; 32]).unwrap();

    let result = pool.execute_relayer_refund_leaf(
        &mut host,
        relayer(),
        root_bundle_id,
        other_chain.clone(),
        tree.get_proof(&other_chain).unwrap(),
    );
    assert_eq!(error_name(result), CommonError::InvalidChainId.name());

    let result = pool.execute_relayer_refund_leaf(
        &mut host,
        relayer(),
        root_bundle_id,
        mismatched.clone(),
        tree.get_proof(&mismatched).unwrap(),
    );
    assert_eq!(error_name(result), CommonError::InvalidMerkleLeaf.name());

    let result = pool.execute_relayer_refund_leaf(
        &mut host,
        relayer(),
        root_bundle_id + 1,
        valid.clone(),
        tree.get_proof(&valid).unwrap(),
    );
    assert_eq!(error_name(result), CommonError::InvalidMerkleProof.name());

    let wrong_proof = tree.get_proof(&mismatched).unwrap();
    let result = pool.execute_relayer_refund_leaf(&mut host, relayer(), root_bundle_id, valid, wrong_proof);
    assert_eq!(error_name(result), CommonError::InvalidMerkleProof.name());

    assert_eq!(host.transfers, 0);
    assert!(pool.root_bundle(root_bundle_id).unwrap().claimed_bitmap.is_empty());
}

#[test]
fn underfunded_vault_pays_no_refund_of_the_leaf() {
    let mut pool = pool();
    let mut host = MockHost::new();
    host.mint_to(&output_token(), &vault(), 1500);
    let leaf = refund_leaf(0);
    let tree = MerkleTree::new(&[leaf.clone()]).unwrap();
    let root_bundle_id = pool.relay_root_bundle(tree.root(), [0; 32]).unwrap();

    // The vault covers the first refund but not both, so neither is paid.
    let result = pool.execute_relayer_refund_leaf(&mut host, relayer(), root_bundle_id, leaf.clone(), vec![]);

    assert_eq!(error_name(result), format!("{:?}", ProgramError::InsufficientFunds));
    assert_eq!(host.balance(&output_token(), &relayer()), 0);
    assert_eq!(host.balance(&output_token(), &other_relayer()), 0);
    assert_eq!(host.balance(&output_token(), &vault()), 1500);
    assert!(!is_claimed(&pool.root_bundle(root_bundle_id).unwrap().claimed_bitmap, 0));
    assert_eq!(pool.transfer_liability(&output_token()).pending_to_hub_pool, 0);

    // Once funded, the leaf pays each refund exactly once.
    host.mint_to(&output_token(), &vault(), 1500);
    pool.execute_relayer_refund_leaf(&mut host, relayer(), root_bundle_id, leaf, vec![]).unwrap();

    assert_eq!(host.balance(&output_token(), &relayer()), 1000);
    assert_eq!(host.balance(&output_token(), &other_relayer()), 2000);
    assert_eq!(host.balance(&output_token(), &vault()), 0);
    assert!(is_claimed(&pool.root_bundle(root_bundle_id).unwrap().claimed_bitmap, 0));
    assert_eq!(pool.transfer_liability(&output_token()).pending_to_hub_pool, 500);
}

#[test]
fn initialized_ledger_is_empty() {
    let pool = pool();

    assert_eq!(pool.state(), &State { paused_fills: false, chain_id: CHAIN_ID, vault: vault(), root_bundle_id: 0 });
    assert_eq!(pool.chain_id(), CHAIN_ID);
    assert!(pool.root_bundle(0).is_none());
    assert_eq!(pool.transfer_liability(&output_token()), TransferLiability::default());
}
