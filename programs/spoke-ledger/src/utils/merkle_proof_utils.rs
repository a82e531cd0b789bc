use anchor_lang::prelude::*;
use sha3::{Digest, Keccak256};

use crate::error::CommonError;

pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&hasher.finalize());
    hash
}

pub fn verify_merkle_proof(root: [u8; 32], leaf: [u8; 32], proof: &[[u8; 32]]) -> Result<()> {
    let computed_root = process_proof(proof, &leaf);
    if computed_root != root {
        msg!("Invalid proof: computed root does not match provided root");
        return err!(CommonError::InvalidMerkleProof);
    }

    Ok(())
}

pub fn verify(root: &[u8; 32], leaf: &[u8; 32], proof: &[[u8; 32]]) -> bool {
    process_proof(proof, leaf) == *root
}

// The following is the rust implementation of the merkle proof verification from OpenZeppelin that can be found here:
// https://github.com/OpenZeppelin/openzeppelin-contracts/blob/master/contracts/utils/cryptography/MerkleProof.sol
pub fn process_proof(proof: &[[u8; 32]], leaf: &[u8; 32]) -> [u8; 32] {
    let mut computed_hash = *leaf;
    for proof_element in proof.iter() {
        computed_hash = commutative_keccak256(&computed_hash, proof_element);
    }
    computed_hash
}

// See https://github.com/OpenZeppelin/openzeppelin-contracts/blob/master/contracts/utils/cryptography/Hashes.sol
pub fn commutative_keccak256(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    if a < b {
        efficient_keccak256(a, b)
    } else {
        efficient_keccak256(b, a)
    }
}

fn efficient_keccak256(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    let mut input = [0u8; 64];
    input[..32].copy_from_slice(a);
    input[32..].copy_from_slice(b);
    keccak256(&input)
}
