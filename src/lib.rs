//! Merkledrop - Merkle roots and inclusion proofs for token distributions
//!
//! # Overview
//!
//! Given an ordered list of recipients, merkledrop commits to the
//! distribution with a single Merkle root and derives, for every recipient,
//! the sibling path needed to prove inclusion against that root. Pairs are
//! hashed smaller-digest-first, so proofs are flat sibling lists a standard
//! sorted-pair verifier can replay, and a lone node at the tail of an odd
//! level is promoted to the next level unchanged rather than re-hashed.
//!
//! # Crates
//!
//! - `merkledrop-primitives`: digests, recipient addresses, keccak hashing
//! - `merkledrop-tree`: tree construction, proof derivation, verification
//! - `merkledrop-codec`: recipient input and the proof manifest format
//!
//! # Example
//!
//! ```no_run
//! use merkledrop::codec::ProofManifest;
//!
//! let identifiers = vec![
//!     "0x1111111111111111111111111111111111111111".to_string(),
//!     "0x2222222222222222222222222222222222222222".to_string(),
//! ];
//! let manifest = ProofManifest::for_recipients(&identifiers).unwrap();
//! println!("root: {}", manifest.root().to_hex());
//! ```

// Re-export sub-crates
pub use merkledrop_primitives as primitives;
pub use merkledrop_tree as tree;
pub use merkledrop_codec as codec;
