//! Node equality oracle.
//!
//! Two predicates make up the match relation used by sibling alignment:
//!
//! - [`fully_equal`]: deep equality over every content-bearing field
//! - [`is_container_match`]: same container kind and attributes, children
//!   ignored, so the reconciler can recurse into differing items
//!
//! Neither predicate looks at `diffStatus`.

use smallvec::SmallVec;

use crate::attr::AttrsExt;
use crate::hash::Fingerprint;
use crate::node::Node;

use super::diff::DiffConfig;

/// Deep structural equality, ignoring `diffStatus`.
///
/// Compares `kind`, attributes, `text`, marks and children (recursively, in
/// order). Absent children or marks compare equal to empty ones.
pub fn fully_equal(a: &Node, b: &Node) -> bool {
    if a.kind != b.kind || a.text != b.text || a.mark_list() != b.mark_list() {
        return false;
    }
    if !a.attrs.content_eq(&b.attrs) {
        return false;
    }
    let (ac, bc) = (a.content(), b.content());
    ac.len() == bc.len() && ac.iter().zip(bc).all(|(x, y)| fully_equal(x, y))
}

/// Soft match for container kinds: same kind, kind is a container, same
/// attributes. Children are deliberately not compared.
pub fn is_container_match(a: &Node, b: &Node, config: &DiffConfig) -> bool {
    a.kind == b.kind && config.is_container(&a.kind) && a.attrs.content_eq(&b.attrs)
}

// =============================================================================
// SiblingMatcher
// =============================================================================

/// Match oracle over one pair of sibling sequences.
///
/// Every sibling is fingerprinted once, so the O(m*n) equality probes of the
/// alignment table only walk subtrees whose fingerprints already agree.
pub(crate) struct SiblingMatcher<'a> {
    old: &'a [Node],
    new: &'a [Node],
    old_prints: SmallVec<[u64; 16]>,
    new_prints: SmallVec<[u64; 16]>,
    config: &'a DiffConfig,
}

impl<'a> SiblingMatcher<'a> {
    pub(crate) fn new(old: &'a [Node], new: &'a [Node], config: &'a DiffConfig) -> Self {
        Self {
            old,
            new,
            old_prints: old.iter().map(Fingerprint::fingerprint).collect(),
            new_prints: new.iter().map(Fingerprint::fingerprint).collect(),
            config,
        }
    }

    /// `fully_equal(old[i], new[j])`
    #[inline]
    pub(crate) fn is_equal(&self, i: usize, j: usize) -> bool {
        self.old_prints[i] == self.new_prints[j] && fully_equal(&self.old[i], &self.new[j])
    }

    /// `is_container_match(old[i], new[j])`
    #[inline]
    pub(crate) fn is_container_match(&self, i: usize, j: usize) -> bool {
        is_container_match(&self.old[i], &self.new[j], self.config)
    }

    /// Match relation: equal, or soft-compatible containers
    #[inline]
    pub(crate) fn matches(&self, i: usize, j: usize) -> bool {
        self.is_equal(i, j) || self.is_container_match(i, j)
    }
}
