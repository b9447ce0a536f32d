//! Property-based tests for merkledrop
//!
//! These cover the invariants that must hold for any leaf set: build
//! determinism, combine commutativity, the proof round-trip law, level
//! sizing, and odd-node pass-through.

use proptest::prelude::*;

use merkledrop::codec::{CodecError, ProofManifest};
use merkledrop::primitives::{hash_pair_sorted, Digest};
use merkledrop::tree::{DistributionTree, LeafSet};

fn leaf_set_from(bytes: Vec<[u8; 32]>) -> LeafSet {
    bytes.into_iter().map(Digest::from_bytes).collect()
}

// ============================================================
// Combine properties
// ============================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn prop_combine_is_commutative(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
        let a = Digest::from_bytes(a);
        let b = Digest::from_bytes(b);
        prop_assert_eq!(hash_pair_sorted(&a, &b), hash_pair_sorted(&b, &a));
    }

    #[test]
    fn prop_combine_differs_from_operands(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
        let a = Digest::from_bytes(a);
        let b = Digest::from_bytes(b);
        let parent = hash_pair_sorted(&a, &b);
        prop_assert_ne!(parent, a);
        prop_assert_ne!(parent, b);
    }

    #[test]
    fn prop_digest_hex_round_trip(bytes in any::<[u8; 32]>()) {
        let digest = Digest::from_bytes(bytes);
        let parsed = Digest::from_hex(&digest.to_hex()).unwrap();
        prop_assert_eq!(parsed, digest);
    }
}

// ============================================================
// Tree structure properties
// ============================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(25))]

    #[test]
    fn prop_build_is_deterministic(bytes in prop::collection::vec(any::<[u8; 32]>(), 1..100)) {
        let leaves = leaf_set_from(bytes);
        let first = DistributionTree::build(&leaves).unwrap();
        let second = DistributionTree::build(&leaves).unwrap();

        prop_assert_eq!(first.root(), second.root());
        for index in 0..leaves.len() {
            prop_assert_eq!(first.proof(index).unwrap(), second.proof(index).unwrap());
        }
    }

    #[test]
    fn prop_level_sizes_ceil_halve(bytes in prop::collection::vec(any::<[u8; 32]>(), 1..150)) {
        let leaves = leaf_set_from(bytes);
        let tree = DistributionTree::build(&leaves).unwrap();

        prop_assert_eq!(tree.level(0).unwrap().len(), leaves.len());
        for l in 1..=tree.depth() {
            let prev = tree.level(l - 1).unwrap().len();
            prop_assert_eq!(tree.level(l).unwrap().len(), prev.div_ceil(2));
        }
        prop_assert_eq!(tree.level(tree.depth()).unwrap().len(), 1);
    }

    #[test]
    fn prop_depth_is_ceil_log2(bytes in prop::collection::vec(any::<[u8; 32]>(), 1..150)) {
        let leaves = leaf_set_from(bytes);
        let tree = DistributionTree::build(&leaves).unwrap();

        let expected = leaves.len().next_power_of_two().trailing_zeros() as usize;
        prop_assert_eq!(tree.depth(), expected);
    }

    #[test]
    fn prop_proof_length_bounded_by_depth(bytes in prop::collection::vec(any::<[u8; 32]>(), 1..100)) {
        let leaves = leaf_set_from(bytes);
        let tree = DistributionTree::build(&leaves).unwrap();

        for index in 0..leaves.len() {
            prop_assert!(tree.proof(index).unwrap().siblings.len() <= tree.depth());
        }
    }

    #[test]
    fn prop_cross_pair_swap_changes_root(bytes in prop::collection::vec(any::<[u8; 32]>(), 3..64)) {
        prop_assume!(bytes[1] != bytes[2]);

        let mut swapped = bytes.clone();
        swapped.swap(1, 2);

        let original = DistributionTree::build(&leaf_set_from(bytes)).unwrap();
        let permuted = DistributionTree::build(&leaf_set_from(swapped)).unwrap();
        prop_assert_ne!(original.root(), permuted.root());
    }
}

// ============================================================
// Proof round-trip properties
// ============================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(25))]

    #[test]
    fn prop_every_proof_verifies(bytes in prop::collection::vec(any::<[u8; 32]>(), 1..64)) {
        let leaves = leaf_set_from(bytes);
        let tree = DistributionTree::build(&leaves).unwrap();
        let root = tree.root();

        for index in 0..leaves.len() {
            let proof = tree.proof(index).unwrap();
            let leaf = leaves.get(index).unwrap();
            prop_assert!(DistributionTree::verify_proof(&root, leaf, &proof.siblings));
            prop_assert!(DistributionTree::verify_proof_at(
                &root,
                leaf,
                index,
                leaves.len(),
                &proof.siblings
            ));
        }
    }

    #[test]
    fn prop_tampered_leaf_fails(
        bytes in prop::collection::vec(any::<[u8; 32]>(), 1..64),
        byte in 0usize..32,
    ) {
        let leaves = leaf_set_from(bytes);
        let tree = DistributionTree::build(&leaves).unwrap();
        let proof = tree.proof(0).unwrap();

        let mut tampered = *leaves.get(0).unwrap();
        tampered.0[byte] ^= 0x01;
        prop_assert!(!DistributionTree::verify_proof(
            &tree.root(),
            &tampered,
            &proof.siblings
        ));
    }

    #[test]
    fn prop_tampered_sibling_fails(
        bytes in prop::collection::vec(any::<[u8; 32]>(), 2..64),
        byte in 0usize..32,
    ) {
        let leaves = leaf_set_from(bytes);
        let tree = DistributionTree::build(&leaves).unwrap();

        // Index 0 always has a level-0 sibling once there are two leaves
        let mut proof = tree.proof(0).unwrap();
        proof.siblings[0].0[byte] ^= 0x01;
        prop_assert!(!DistributionTree::verify_proof(
            &tree.root(),
            leaves.get(0).unwrap(),
            &proof.siblings
        ));
    }

    #[test]
    fn prop_tampered_root_fails(
        bytes in prop::collection::vec(any::<[u8; 32]>(), 1..64),
        byte in 0usize..32,
    ) {
        let leaves = leaf_set_from(bytes);
        let tree = DistributionTree::build(&leaves).unwrap();
        let proof = tree.proof(0).unwrap();

        let mut root = tree.root();
        root.0[byte] ^= 0x01;
        prop_assert!(!DistributionTree::verify_proof(
            &root,
            leaves.get(0).unwrap(),
            &proof.siblings
        ));
    }

    #[test]
    fn prop_odd_tail_proof_skips_levels(
        half in 1usize..32,
        bytes in prop::collection::vec(any::<[u8; 32]>(), 65..66),
    ) {
        // Build an odd-sized leaf set from the generated pool
        let n = 2 * half + 1;
        let leaves = leaf_set_from(bytes[..n].to_vec());
        let tree = DistributionTree::build(&leaves).unwrap();
        let root = tree.root();

        // The tail leaf is unpaired at level 0, so its proof is shorter
        let tail = tree.proof(n - 1).unwrap();
        let head = tree.proof(0).unwrap();
        prop_assert!(tail.siblings.len() < head.siblings.len());

        prop_assert!(DistributionTree::verify_proof(
            &root,
            leaves.get(n - 1).unwrap(),
            &tail.siblings
        ));
        prop_assert!(DistributionTree::verify_proof_at(
            &root,
            leaves.get(n - 1).unwrap(),
            n - 1,
            n,
            &tail.siblings
        ));
    }

    #[test]
    fn prop_truncated_proof_fails_positional(bytes in prop::collection::vec(any::<[u8; 32]>(), 2..64)) {
        let leaves = leaf_set_from(bytes);
        let tree = DistributionTree::build(&leaves).unwrap();
        let proof = tree.proof(0).unwrap();
        let truncated = &proof.siblings[..proof.siblings.len() - 1];

        prop_assert!(!DistributionTree::verify_proof_at(
            &tree.root(),
            leaves.get(0).unwrap(),
            0,
            leaves.len(),
            truncated
        ));
    }
}

// ============================================================
// Manifest properties
// ============================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(25))]

    #[test]
    fn prop_manifest_round_trip(addresses in prop::collection::hash_set(any::<[u8; 20]>(), 1..40)) {
        let identifiers: Vec<String> = addresses
            .into_iter()
            .map(|bytes| format!("0x{}", hex::encode(bytes)))
            .collect();

        let manifest = ProofManifest::for_recipients(&identifiers).unwrap();
        let back = ProofManifest::from_json(&manifest.to_json_pretty().unwrap()).unwrap();
        prop_assert_eq!(&back, &manifest);

        let root = back.root();
        for (_, record) in back.records() {
            prop_assert!(DistributionTree::verify_proof(&root, &record.leaf, &record.proof));
        }
    }

    #[test]
    fn prop_manifest_rejects_duplicates_anywhere(
        addresses in prop::collection::hash_set(any::<[u8; 20]>(), 2..20),
        seed in any::<usize>(),
    ) {
        let mut identifiers: Vec<String> = addresses
            .into_iter()
            .map(|bytes| format!("0x{}", hex::encode(bytes)))
            .collect();

        let source = seed % identifiers.len();
        let target = (seed / 7) % (identifiers.len() + 1);
        let duplicate = identifiers[source].clone();
        identifiers.insert(target, duplicate);

        let err = ProofManifest::for_recipients(&identifiers).unwrap_err();
        prop_assert!(
            matches!(err, CodecError::DuplicateIdentifier { .. }),
            "expected DuplicateIdentifier, got {:?}",
            err
        );
    }
}
