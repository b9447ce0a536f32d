//! Error types for recipient input and manifest encoding

use merkledrop_primitives::AddressError;
use merkledrop_tree::TreeError;
use thiserror::Error;

/// Errors that can occur while reading recipients or encoding a manifest
#[derive(Debug, Error)]
pub enum CodecError {
    /// Two input records share an identifier
    #[error("Duplicate identifier '{identifier}'")]
    DuplicateIdentifier { identifier: String },

    /// An identifier collides with the reserved root key
    #[error("Identifier '{identifier}' collides with the reserved manifest key")]
    ReservedIdentifier { identifier: String },

    /// Identifier list and leaf set disagree in length
    #[error("Identifier count {identifiers} does not match leaf count {leaves}")]
    IdentifierCountMismatch { identifiers: usize, leaves: usize },

    /// Tree and leaf set disagree in length
    #[error("Tree was built over {tree_leaves} leaves but the leaf set has {leaves}")]
    LeafCountMismatch { tree_leaves: usize, leaves: usize },

    /// A recipient identifier is not a valid address
    #[error("Invalid recipient address '{identifier}': {source}")]
    InvalidRecipient {
        identifier: String,
        source: AddressError,
    },

    /// The input has no column with the expected name
    #[error("Input has no '{column}' column")]
    MissingColumn { column: String },

    /// Tree construction or proof derivation failed
    #[error("Tree error: {0}")]
    Tree(#[from] TreeError),

    /// CSV reading failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File I/O failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for codec operations
pub type CodecResult<T> = Result<T, CodecError>;
