//! Keccak-256 hashing
//!
//! All tree hashing uses keccak256 so that roots and proofs line up with
//! EVM-side verifiers computing `keccak256(abi.encodePacked(..))`.

use sha3::{Digest as _, Keccak256};

use crate::digest::Digest;

/// Compute the keccak256 digest of `data`
pub fn keccak256(data: &[u8]) -> Digest {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&result);
    Digest(bytes)
}

/// Combine two digests into their parent: keccak256 over the 64-byte
/// concatenation with the smaller digest first.
///
/// Sorting before hashing makes the combine commutative, so a proof entry
/// never needs to record whether its sibling sat left or right.
pub fn hash_pair_sorted(a: &Digest, b: &Digest) -> Digest {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let mut buf = [0u8; 64];
    buf[..32].copy_from_slice(lo.as_bytes());
    buf[32..].copy_from_slice(hi.as_bytes());
    keccak256(&buf)
}
