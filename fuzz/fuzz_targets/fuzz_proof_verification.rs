//! Fuzz target for proof verification
//!
//! Both verifier forms must never panic, whatever the proof contents,
//! claimed index, or claimed leaf count.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use merkledrop_primitives::Digest;
use merkledrop_tree::DistributionTree;

#[derive(Debug, Arbitrary)]
struct VerifyInput {
    root: [u8; 32],
    leaf: [u8; 32],
    siblings: Vec<[u8; 32]>,
    leaf_index: usize,
    leaf_count: usize,
}

fuzz_target!(|input: VerifyInput| {
    // Cap the sibling path; real trees never get this deep
    let siblings: Vec<Digest> = input
        .siblings
        .into_iter()
        .take(64)
        .map(Digest::from_bytes)
        .collect();

    let root = Digest::from_bytes(input.root);
    let leaf = Digest::from_bytes(input.leaf);

    let _ = DistributionTree::verify_proof(&root, &leaf, &siblings);
    let _ = DistributionTree::verify_proof_at(
        &root,
        &leaf,
        input.leaf_index,
        input.leaf_count,
        &siblings,
    );
});
