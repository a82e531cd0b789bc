use anchor_lang::prelude::*;

use crate::{
    constants::LEAF_PREFIX_SIZE,
    error::LedgerError,
    utils::{commutative_keccak256, keccak256},
};

/// Anything that can be committed into a root bundle tree.
pub trait MerkleLeaf {
    /// Deterministic, field order sensitive encoding of the leaf.
    fn to_bytes(&self) -> Result<Vec<u8>>;

    fn to_keccak_hash(&self) -> Result<[u8; 32]> {
        let input = self.to_bytes()?;
        Ok(keccak256(&input))
    }
}

// Ledger leaves are encoded as LEAF_PREFIX_SIZE zero bytes followed by the borsh encoded leaf. The prefix overlaps the
// depositor and recipient fields of EVM leaves so that EVM leaves can never be used on this ledger (and vice versa).
pub fn encode_prefixed_leaf<T: AnchorSerialize>(leaf: &T) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&[0u8; LEAF_PREFIX_SIZE]);
    AnchorSerialize::serialize(leaf, &mut bytes).map_err(|_| ErrorCode::AccountDidNotSerialize)?;
    Ok(bytes)
}

impl MerkleLeaf for Vec<u8> {
    fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(self.clone())
    }
}

/// Merkle tree over keccak hashed leaves using sorted pair hashing, so proofs verify with `process_proof`.
///
/// A level with an odd number of nodes promotes its last node unchanged to the next level. The promoted node simply
/// contributes no sibling to proofs at that height.
#[derive(Clone, Debug)]
pub struct MerkleTree {
    levels: Vec<Vec<[u8; 32]>>,
}

impl MerkleTree {
    pub fn new<T: MerkleLeaf>(leaves: &[T]) -> Result<Self> {
        let hashes = leaves.iter().map(|leaf| leaf.to_keccak_hash()).collect::<Result<Vec<_>>>()?;
        Self::from_leaf_hashes(hashes)
    }

    pub fn from_leaf_hashes(leaf_hashes: Vec<[u8; 32]>) -> Result<Self> {
        if leaf_hashes.is_empty() {
            return err!(LedgerError::EmptyMerkleTree);
        }

        let mut levels = vec![leaf_hashes];
        while let Some(level) = levels.last().filter(|level| level.len() > 1) {
            let next = level
                .chunks(2)
                .map(|pair| match pair {
                    [left, right] => commutative_keccak256(left, right),
                    [single] => *single,
                    _ => unreachable!("chunks(2) yields one or two nodes"),
                })
                .collect();
            levels.push(next);
        }

        Ok(Self { levels })
    }

    pub fn root(&self) -> [u8; 32] {
        // Construction guarantees at least one level and a single node on the top level.
        self.levels[self.levels.len() - 1][0]
    }

    pub fn leaf_count(&self) -> usize {
        self.levels[0].len()
    }

    pub fn leaf_index<T: MerkleLeaf>(&self, leaf: &T) -> Result<Option<usize>> {
        let hash = leaf.to_keccak_hash()?;
        Ok(self.levels[0].iter().position(|leaf_hash| *leaf_hash == hash))
    }

    /// Proof for the first leaf whose encoding matches `leaf` exactly.
    pub fn get_proof<T: MerkleLeaf>(&self, leaf: &T) -> Result<Vec<[u8; 32]>> {
        match self.leaf_index(leaf)? {
            Some(index) => self.get_proof_by_index(index),
            None => err!(LedgerError::LeafNotFound),
        }
    }

    pub fn get_proof_by_index(&self, index: usize) -> Result<Vec<[u8; 32]>> {
        if index >= self.leaf_count() {
            return err!(LedgerError::LeafNotFound);
        }

        let mut proof = Vec::with_capacity(self.levels.len() - 1);
        let mut position = index;
        for level in &self.levels[..self.levels.len() - 1] {
            if let Some(sibling) = level.get(position ^ 1) {
                proof.push(*sibling);
            }
            position /= 2;
        }

        Ok(proof)
    }
}
