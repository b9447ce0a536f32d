//! Merkledrop primitives
//!
//! Value types and hashing shared by the tree and codec layers:
//!
//! - [`Digest`]: 32-byte hash values with hex and serde support
//! - [`Address`]: 20-byte recipient addresses as read from distribution files
//! - [`keccak256`] hashing, including the sorted-pair combine the tree uses

pub mod address;
pub mod digest;
pub mod keccak;

// Re-export main types
pub use address::{leaf_digest, Address, AddressError};
pub use digest::Digest;
pub use keccak::{hash_pair_sorted, keccak256};
