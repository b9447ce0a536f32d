//! Merkledrop codec
//!
//! The input and output boundary around the tree core: reading recipient
//! identifiers from CSV, and assembling and serializing the proof manifest
//! a distribution ships to its recipients.
//!
//! The manifest is a single JSON object with one key per recipient
//! identifier mapping to `{"leaf": .., "proof": [..]}`, plus the reserved
//! `"root"` key carrying the tree root. Records appear in input order and
//! `root` is written last.

pub mod error;
pub mod manifest;
pub mod recipients;

// Re-export main types
pub use error::{CodecError, CodecResult};
pub use manifest::{leaf_set_for_recipients, ClaimRecord, ProofManifest, ROOT_KEY};
pub use recipients::{read_recipients, DEFAULT_IDENTIFIER_COLUMN};
