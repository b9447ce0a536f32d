//! Error types for tree construction and proof derivation

use thiserror::Error;

/// Errors that can occur while building a tree or deriving proofs
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    /// The leaf set is empty; no root can be produced
    #[error("Leaf set cannot be empty")]
    EmptyLeafSet,

    /// A proof was requested for an index outside the leaf set
    #[error("Leaf index {index} out of bounds (leaf count: {leaf_count})")]
    LeafIndexOutOfRange { index: usize, leaf_count: usize },
}

/// Result type for tree operations
pub type TreeResult<T> = Result<T, TreeError>;
