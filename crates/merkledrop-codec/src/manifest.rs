//! Proof manifest assembly and serialization
//!
//! The manifest is the file recipients consume: one entry per identifier
//! holding that recipient's leaf digest and sibling path, plus the
//! reserved `root` key carrying the tree root. Records are written in
//! input order and the root key last.

use std::collections::HashSet;
use std::io::{Read, Write};

use merkledrop_primitives::{leaf_digest, Address, Digest};
use merkledrop_tree::{DistributionTree, LeafSet};
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CodecError, CodecResult};

/// Manifest key reserved for the tree root
pub const ROOT_KEY: &str = "root";

/// One recipient's entry in the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimRecord {
    /// The recipient's leaf digest
    pub leaf: Digest,

    /// Sibling path from level 0 upward
    pub proof: Vec<Digest>,
}

/// The full distribution manifest: per-recipient records plus the root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofManifest {
    root: Digest,
    entries: Vec<(String, ClaimRecord)>,
}

/// Parse recipient addresses and hash them into a leaf set, in input order
pub fn leaf_set_for_recipients(identifiers: &[String]) -> CodecResult<LeafSet> {
    let mut digests = Vec::with_capacity(identifiers.len());
    for identifier in identifiers {
        let address =
            Address::from_hex(identifier).map_err(|source| CodecError::InvalidRecipient {
                identifier: identifier.clone(),
                source,
            })?;
        digests.push(leaf_digest(&address));
    }
    Ok(LeafSet::from_digests(digests))
}

impl ProofManifest {
    /// Assemble a manifest from a built tree, its leaf set, and the
    /// recipient identifiers in leaf order
    pub fn encode(
        tree: &DistributionTree,
        leaves: &LeafSet,
        identifiers: &[String],
    ) -> CodecResult<Self> {
        if identifiers.len() != leaves.len() {
            return Err(CodecError::IdentifierCountMismatch {
                identifiers: identifiers.len(),
                leaves: leaves.len(),
            });
        }
        if tree.leaf_count() != leaves.len() {
            return Err(CodecError::LeafCountMismatch {
                tree_leaves: tree.leaf_count(),
                leaves: leaves.len(),
            });
        }

        let mut seen = HashSet::with_capacity(identifiers.len());
        let mut entries = Vec::with_capacity(identifiers.len());

        for (index, (identifier, leaf)) in identifiers.iter().zip(leaves.iter()).enumerate() {
            if identifier == ROOT_KEY {
                return Err(CodecError::ReservedIdentifier {
                    identifier: identifier.clone(),
                });
            }
            if !seen.insert(identifier.as_str()) {
                return Err(CodecError::DuplicateIdentifier {
                    identifier: identifier.clone(),
                });
            }

            let proof = tree.proof(index)?;
            entries.push((
                identifier.clone(),
                ClaimRecord {
                    leaf: *leaf,
                    proof: proof.siblings,
                },
            ));
        }

        Ok(Self {
            root: tree.root(),
            entries,
        })
    }

    /// Parse recipient addresses, hash leaves, build the tree, and encode
    /// the manifest in one pass
    pub fn for_recipients(identifiers: &[String]) -> CodecResult<Self> {
        let leaves = leaf_set_for_recipients(identifiers)?;
        let tree = DistributionTree::build(&leaves)?;
        Self::encode(&tree, &leaves, identifiers)
    }

    /// The tree root the records verify against
    pub fn root(&self) -> Digest {
        self.root
    }

    /// Number of recipient records
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the manifest has no records
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up one recipient's record
    pub fn record(&self, identifier: &str) -> Option<&ClaimRecord> {
        self.entries
            .iter()
            .find(|(id, _)| id == identifier)
            .map(|(_, record)| record)
    }

    /// Iterate over `(identifier, record)` pairs in input order
    pub fn records(&self) -> impl Iterator<Item = (&str, &ClaimRecord)> {
        self.entries
            .iter()
            .map(|(id, record)| (id.as_str(), record))
    }

    /// Serialize to pretty-printed JSON, indented four spaces per level
    pub fn to_json_pretty(&self) -> CodecResult<String> {
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        let json = String::from_utf8(buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(json)
    }

    /// Parse from JSON
    pub fn from_json(json: &str) -> CodecResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write pretty-printed JSON to a writer
    pub fn write_to<W: Write>(&self, mut writer: W) -> CodecResult<()> {
        let json = self.to_json_pretty()?;
        writer.write_all(json.as_bytes())?;
        Ok(())
    }

    /// Read a manifest from a reader
    pub fn read_from<R: Read>(mut reader: R) -> CodecResult<Self> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        Self::from_json(&json)
    }
}

impl Serialize for ProofManifest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len() + 1))?;
        for (identifier, record) in &self.entries {
            map.serialize_entry(identifier, record)?;
        }
        map.serialize_entry(ROOT_KEY, &self.root)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for ProofManifest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ManifestVisitor;

        impl<'de> Visitor<'de> for ManifestVisitor {
            type Value = ProofManifest;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("a map of claim records plus a root digest")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut root: Option<Digest> = None;
                let mut entries: Vec<(String, ClaimRecord)> = Vec::new();
                let mut seen: HashSet<String> = HashSet::new();

                while let Some(key) = map.next_key::<String>()? {
                    if key == ROOT_KEY {
                        if root.is_some() {
                            return Err(de::Error::duplicate_field(ROOT_KEY));
                        }
                        root = Some(map.next_value()?);
                    } else {
                        if !seen.insert(key.clone()) {
                            return Err(de::Error::custom(format!(
                                "Duplicate identifier '{}'",
                                key
                            )));
                        }
                        let record = map.next_value()?;
                        entries.push((key, record));
                    }
                }

                let root = root.ok_or_else(|| de::Error::missing_field(ROOT_KEY))?;
                Ok(ProofManifest { root, entries })
            }
        }

        deserializer.deserialize_map(ManifestVisitor)
    }
}
