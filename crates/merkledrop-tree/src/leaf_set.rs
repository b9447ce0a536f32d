//! Ordered leaf digests
//!
//! A `LeafSet` is assembled once, after input reading completes, and is
//! immutable from then on. Leaf order is input order; a leaf's index is the
//! public key used to look up its proof.

use merkledrop_primitives::Digest;

/// An ordered list of leaf digests, one per recipient
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LeafSet {
    leaves: Vec<Digest>,
}

impl LeafSet {
    /// Build from pre-computed digests, preserving their order
    pub fn from_digests(leaves: Vec<Digest>) -> Self {
        Self { leaves }
    }

    /// Number of leaves
    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    /// True when there are no leaves
    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    /// The digest at `index`, if present
    pub fn get(&self, index: usize) -> Option<&Digest> {
        self.leaves.get(index)
    }

    /// All digests in input order
    pub fn as_slice(&self) -> &[Digest] {
        &self.leaves
    }

    /// Iterate over the digests in input order
    pub fn iter(&self) -> std::slice::Iter<'_, Digest> {
        self.leaves.iter()
    }
}

impl FromIterator<Digest> for LeafSet {
    fn from_iter<I: IntoIterator<Item = Digest>>(iter: I) -> Self {
        Self {
            leaves: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a LeafSet {
    type Item = &'a Digest;
    type IntoIter = std::slice::Iter<'a, Digest>;

    fn into_iter(self) -> Self::IntoIter {
        self.leaves.iter()
    }
}
