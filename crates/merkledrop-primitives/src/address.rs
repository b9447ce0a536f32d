//! Recipient addresses
//!
//! Distribution files identify recipients by 20-byte hex addresses. The
//! leaf committed to the tree is keccak256 over the packed address bytes,
//! the same value `keccak256(abi.encodePacked(address))` yields on-chain.

use thiserror::Error;

use crate::digest::Digest;
use crate::keccak::keccak256;

/// Errors from parsing a recipient address
///
/// `hex::FromHexError` implements `PartialEq` but not `Eq`, so this enum
/// stops at `PartialEq` as well.
#[derive(Debug, Error, PartialEq)]
pub enum AddressError {
    /// Wrong number of hex digits (an address is 40)
    #[error("Expected 40 hex characters, got {0}")]
    InvalidLength(usize),

    /// Non-hex characters in the input
    #[error("Invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// A 20-byte recipient address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Address(pub [u8; 20]);

impl Address {
    /// Parse from a hex string, with or without a `0x` prefix.
    ///
    /// Case-insensitive; mixed-case checksums are accepted but not checked.
    pub fn from_hex(hex: &str) -> Result<Self, AddressError> {
        let hex = hex.strip_prefix("0x").unwrap_or(hex);
        if hex.len() != 40 {
            return Err(AddressError::InvalidLength(hex.len()));
        }
        let mut bytes = [0u8; 20];
        hex::decode_to_slice(hex, &mut bytes)?;
        Ok(Self(bytes))
    }

    /// Encode as a lowercase hex string carrying the `0x` marker
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 20]> for Address {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

/// Leaf digest for a recipient: keccak256 over the packed 20 address bytes
pub fn leaf_digest(address: &Address) -> Digest {
    keccak256(address.as_bytes())
}
