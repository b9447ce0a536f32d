//! Fuzz target for address parsing
//!
//! Parsing must never panic, and any accepted address must round-trip
//! through its canonical hex encoding.

#![no_main]

use libfuzzer_sys::fuzz_target;
use merkledrop_primitives::{leaf_digest, Address, Digest};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(address) = Address::from_hex(text) {
        let canonical = address.to_hex();
        let reparsed = Address::from_hex(&canonical).expect("canonical hex must parse");
        assert_eq!(address, reparsed);

        // Hashing a parsed address must not panic either
        let _ = leaf_digest(&address);
    }

    // Digest parsing shares the hex path; exercise it on the same input
    if let Ok(digest) = Digest::from_hex(text) {
        let reparsed = Digest::from_hex(&digest.to_hex()).expect("canonical hex must parse");
        assert_eq!(digest, reparsed);
    }
});
