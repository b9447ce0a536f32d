//! Merkledrop tree
//!
//! Merkle-tree construction and inclusion-proof derivation over an ordered
//! leaf set. Pairs are hashed smaller-digest-first, so proofs are flat
//! sibling lists with no left/right flags, and a lone node at the tail of
//! an odd level is promoted to the next level unchanged.

pub mod error;
pub mod leaf_set;
pub mod tree;

// Re-export main types
pub use error::{TreeError, TreeResult};
pub use leaf_set::LeafSet;
pub use tree::{DistributionTree, MerkleProof};
