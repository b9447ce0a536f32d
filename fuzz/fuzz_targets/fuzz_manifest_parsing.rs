//! Fuzz target for manifest parsing
//!
//! Deserialization must never panic on arbitrary input, and anything that
//! parses must re-serialize cleanly.

#![no_main]

use libfuzzer_sys::fuzz_target;
use merkledrop_codec::ProofManifest;

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(manifest) = ProofManifest::from_json(json) {
        let reserialized = manifest.to_json_pretty().expect("parsed manifest must serialize");
        let reparsed = ProofManifest::from_json(&reserialized).expect("canonical JSON must parse");
        assert_eq!(reparsed, manifest);
    }
});
