//! Merkle tree over an ordered leaf set
//!
//! Construction is bottom-up. Each level pairs nodes `(2k, 2k + 1)` with
//! the sorted-pair combine; when a level holds an odd number of nodes, the
//! last node is promoted to the next level unchanged. It is never re-hashed
//! with itself, and the matching proof carries no entry for that level.
//! Verification replays the same rule, so builder and verifier agree on
//! level sizes and on which steps are combines versus pass-throughs.

use merkledrop_primitives::{hash_pair_sorted, Digest};
use rayon::prelude::*;

use crate::error::{TreeError, TreeResult};
use crate::leaf_set::LeafSet;

/// Levels at or above this size hash their pairs on the rayon pool
const PARALLEL_HASH_THRESHOLD: usize = 4096;

/// A Merkle tree committed over a distribution's leaf set
///
/// Invariant: `levels[0]` holds the leaves, every following level has
/// `ceil(prev / 2)` nodes, and the final level has exactly one node, the
/// root.
#[derive(Debug, Clone)]
pub struct DistributionTree {
    levels: Vec<Vec<Digest>>,
}

/// An inclusion proof for a single leaf
///
/// `siblings` runs from level 0 upward. Levels where the leaf's ancestor
/// was promoted without a partner contribute no entry, so a proof can be
/// shorter than the tree is deep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleProof {
    /// Index of the leaf being proven
    pub leaf_index: usize,

    /// Sibling digests along the path to the root
    pub siblings: Vec<Digest>,
}

impl DistributionTree {
    /// Build a tree with the default sorted-pair keccak combine
    pub fn build(leaves: &LeafSet) -> TreeResult<Self> {
        Self::build_with(leaves, hash_pair_sorted)
    }

    /// Build a tree with a caller-supplied combine function.
    ///
    /// The combine must be commutative for flat proofs to verify; see
    /// [`verify_proof_with`](Self::verify_proof_with), which must use the
    /// same function.
    pub fn build_with<F>(leaves: &LeafSet, combine: F) -> TreeResult<Self>
    where
        F: Fn(&Digest, &Digest) -> Digest + Sync,
    {
        if leaves.is_empty() {
            return Err(TreeError::EmptyLeafSet);
        }

        let mut levels = Vec::new();
        let mut current = leaves.as_slice().to_vec();
        while current.len() > 1 {
            let next = next_level(&current, &combine);
            levels.push(current);
            current = next;
        }
        levels.push(current);

        Ok(Self { levels })
    }

    /// The root digest
    pub fn root(&self) -> Digest {
        self.levels[self.levels.len() - 1][0]
    }

    /// Number of leaves
    pub fn leaf_count(&self) -> usize {
        self.levels[0].len()
    }

    /// Number of levels above the leaves
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    /// All nodes at `level` (0 = leaves), if the level exists
    pub fn level(&self, level: usize) -> Option<&[Digest]> {
        self.levels.get(level).map(Vec::as_slice)
    }

    /// Derive the inclusion proof for `leaf_index`
    pub fn proof(&self, leaf_index: usize) -> TreeResult<MerkleProof> {
        let leaf_count = self.leaf_count();
        if leaf_index >= leaf_count {
            return Err(TreeError::LeafIndexOutOfRange {
                index: leaf_index,
                leaf_count,
            });
        }

        let mut siblings = Vec::new();
        let mut index = leaf_index;

        for level in &self.levels[..self.levels.len() - 1] {
            let sibling_index = index ^ 1;
            if sibling_index < level.len() {
                siblings.push(level[sibling_index]);
            }
            index /= 2;
        }

        Ok(MerkleProof {
            leaf_index,
            siblings,
        })
    }

    /// Verify an inclusion proof with the default combine.
    ///
    /// This is the plain sorted-hash fold: combine the leaf with each
    /// sibling in order and compare against the root. It is exactly what an
    /// on-chain sorted-pair verifier computes from a flat proof.
    pub fn verify_proof(root: &Digest, leaf: &Digest, siblings: &[Digest]) -> bool {
        Self::verify_proof_with(root, leaf, siblings, hash_pair_sorted)
    }

    /// Verify an inclusion proof with a caller-supplied combine
    pub fn verify_proof_with<F>(
        root: &Digest,
        leaf: &Digest,
        siblings: &[Digest],
        combine: F,
    ) -> bool
    where
        F: Fn(&Digest, &Digest) -> Digest,
    {
        let mut current = *leaf;
        for sibling in siblings {
            current = combine(&current, sibling);
        }
        current == *root
    }

    /// Verify an inclusion proof against the leaf's position.
    ///
    /// Replays the level widths of a tree over `leaf_count` leaves,
    /// consuming a sibling exactly where index `leaf_index` had a partner
    /// and passing through where its ancestor was promoted. Rejects proofs
    /// whose length does not match that structure, which the plain fold
    /// cannot detect.
    pub fn verify_proof_at(
        root: &Digest,
        leaf: &Digest,
        leaf_index: usize,
        leaf_count: usize,
        siblings: &[Digest],
    ) -> bool {
        if leaf_count == 0 || leaf_index >= leaf_count {
            return false;
        }

        let mut current = *leaf;
        let mut index = leaf_index;
        let mut width = leaf_count;
        let mut remaining = siblings.iter();

        while width > 1 {
            if (index ^ 1) < width {
                let Some(sibling) = remaining.next() else {
                    return false;
                };
                current = hash_pair_sorted(&current, sibling);
            }
            index /= 2;
            width = width.div_ceil(2);
        }

        remaining.next().is_none() && current == *root
    }
}

/// Build the parent level, pairing nodes and promoting an unpaired tail
fn next_level<F>(level: &[Digest], combine: &F) -> Vec<Digest>
where
    F: Fn(&Digest, &Digest) -> Digest + Sync,
{
    let pair_or_promote = |pair: &[Digest]| {
        if pair.len() == 2 {
            combine(&pair[0], &pair[1])
        } else {
            pair[0]
        }
    };

    if level.len() >= PARALLEL_HASH_THRESHOLD {
        level.par_chunks(2).map(pair_or_promote).collect()
    } else {
        level.chunks(2).map(pair_or_promote).collect()
    }
}
