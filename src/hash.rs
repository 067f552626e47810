//! Deterministic hashing utilities for document nodes
//!
//! Provides cross-process deterministic hashing using blake3, and content
//! fingerprints used to reject unequal siblings without a deep walk.

use crate::attr::{AttrValue, Attrs, AttrsExt, NumberKey};
use crate::node::{Mark, Node};

// =============================================================================
// StableHasher - Builder Pattern
// =============================================================================

/// A deterministic hasher using blake3
///
/// Unlike `std::hash::Hasher`, this produces the same output across
/// process restarts for the same input.
pub struct StableHasher {
    inner: blake3::Hasher,
}

impl StableHasher {
    /// Create a new StableHasher
    #[inline]
    pub fn new() -> Self {
        Self {
            inner: blake3::Hasher::new(),
        }
    }

    /// Update with raw bytes
    #[inline]
    pub fn update(mut self, data: &[u8]) -> Self {
        self.inner.update(data);
        self
    }

    /// Update with a length-prefixed string
    #[inline]
    pub fn update_str(self, s: &str) -> Self {
        self.update_usize(s.len()).update(s.as_bytes())
    }

    /// Update with a u64 value (little-endian)
    #[inline]
    pub fn update_u64(self, v: u64) -> Self {
        self.update(&v.to_le_bytes())
    }

    /// Update with a usize value (little-endian, widened to u64)
    #[inline]
    pub fn update_usize(self, v: usize) -> Self {
        self.update_u64(v as u64)
    }

    /// Update with an i128 value (little-endian)
    #[inline]
    pub fn update_i128(self, v: i128) -> Self {
        self.update(&v.to_le_bytes())
    }

    /// Update with an f64 value. `-0.0` hashes like `0.0`, matching `==`.
    #[inline]
    pub fn update_f64(self, v: f64) -> Self {
        let v = if v == 0.0 { 0.0 } else { v };
        self.update_u64(v.to_bits())
    }

    /// Update with a single tag byte
    #[inline]
    pub fn update_tag(self, tag: u8) -> Self {
        self.update(&[tag])
    }

    /// Finish and return the hash as u64
    ///
    /// Takes the first 8 bytes of blake3 output as little-endian u64.
    #[inline]
    pub fn finish(self) -> u64 {
        let hash = self.inner.finalize();
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&hash.as_bytes()[..8]);
        u64::from_le_bytes(bytes)
    }
}

impl Default for StableHasher {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Fingerprint - content hash of nodes
// =============================================================================

/// Content fingerprint over the fields that full equality compares.
///
/// Equal content always yields equal fingerprints; the reverse is only
/// probable, so callers confirm a fingerprint hit with a deep comparison.
pub trait Fingerprint {
    /// Feed this value into `hasher`
    fn feed(&self, hasher: StableHasher) -> StableHasher;

    /// Compute the standalone fingerprint
    fn fingerprint(&self) -> u64 {
        self.feed(StableHasher::new()).finish()
    }
}

impl Fingerprint for AttrValue {
    fn feed(&self, h: StableHasher) -> StableHasher {
        match self {
            AttrValue::Null => h.update_tag(0),
            AttrValue::Bool(b) => h.update_tag(1).update_tag(*b as u8),
            // Same key as `AttrValue` equality, so `1` and `1.0` agree
            AttrValue::Number(n) => match NumberKey::of(n) {
                NumberKey::Int(v) => h.update_tag(2).update_i128(v),
                NumberKey::Float(v) => h.update_tag(6).update_f64(v),
            },
            AttrValue::String(s) => h.update_tag(3).update_str(s),
            AttrValue::List(items) => items
                .iter()
                .fold(h.update_tag(4).update_usize(items.len()), |h, v| v.feed(h)),
            AttrValue::Map(map) => map
                .iter()
                .fold(h.update_tag(5).update_usize(map.len()), |h, (k, v)| {
                    v.feed(h.update_str(k))
                }),
        }
    }
}

impl Fingerprint for Attrs {
    fn feed(&self, h: StableHasher) -> StableHasher {
        // `diffStatus` is excluded, so marked and unmarked copies agree
        self.content_iter()
            .fold(h.update_tag(b'a'), |h, (k, v)| v.feed(h.update_str(k)))
            .update_tag(b'.')
    }
}

impl Fingerprint for Mark {
    fn feed(&self, h: StableHasher) -> StableHasher {
        self.attrs.feed(h.update_str(&self.kind))
    }
}

impl Fingerprint for Node {
    fn feed(&self, h: StableHasher) -> StableHasher {
        let h = self.attrs.feed(h.update_tag(b'n').update_str(&self.kind));
        let h = match &self.text {
            Some(text) => h.update_tag(1).update_str(text),
            None => h.update_tag(0),
        };
        let marks = self.mark_list();
        let h = marks
            .iter()
            .fold(h.update_usize(marks.len()), |h, m| m.feed(h));
        let children = self.content();
        children
            .iter()
            .fold(h.update_usize(children.len()), |h, c| c.feed(h))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attr::DIFF_STATUS_KEY;
    use crate::node::kind;

    #[test]
    fn test_stable_hasher_deterministic() {
        let a = StableHasher::new().update_str("doc").update_u64(7).finish();
        let b = StableHasher::new().update_str("doc").update_u64(7).finish();
        let c = StableHasher::new().update_str("doc").update_u64(8).finish();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_length_prefix_separates_strings() {
        let a = StableHasher::new().update_str("ab").update_str("c").finish();
        let b = StableHasher::new().update_str("a").update_str("bc").finish();
        assert_ne!(a, b);
    }

    #[test]
    fn test_fingerprint_ignores_diff_status() {
        let p = Node::new(kind::PARAGRAPH).child(Node::text("x"));
        let marked = Node::new(kind::PARAGRAPH)
            .attr(DIFF_STATUS_KEY, "added")
            .child(Node::text("x").attr(DIFF_STATUS_KEY, "added"));
        assert_eq!(p.fingerprint(), marked.fingerprint());
    }

    #[test]
    fn test_fingerprint_sees_content() {
        let base = Node::new(kind::PARAGRAPH).child(Node::text("x"));
        let other_text = Node::new(kind::PARAGRAPH).child(Node::text("y"));
        let other_mark = Node::new(kind::PARAGRAPH).child(Node::text("x").mark(Mark::new("bold")));
        let other_attr = Node::new(kind::PARAGRAPH)
            .attr("textAlign", "center")
            .child(Node::text("x"));
        let fp = base.fingerprint();
        assert_ne!(fp, other_text.fingerprint());
        assert_ne!(fp, other_mark.fingerprint());
        assert_ne!(fp, other_attr.fingerprint());
    }

    #[test]
    fn test_fingerprint_absent_equals_empty() {
        let absent = Node::new(kind::PARAGRAPH);
        let empty = Node::new(kind::PARAGRAPH).children([]);
        assert_eq!(absent.fingerprint(), empty.fingerprint());
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(AttrValue::from(0.0).fingerprint(), AttrValue::from(-0.0).fingerprint());
    }

    #[test]
    fn test_number_fingerprint_follows_equality() {
        assert_eq!(AttrValue::from(1i64).fingerprint(), AttrValue::from(1.0).fingerprint());
        assert_ne!(AttrValue::from(1i64).fingerprint(), AttrValue::from(1.5).fingerprint());
        assert_ne!(
            AttrValue::from(9_007_199_254_740_992u64).fingerprint(),
            AttrValue::from(9_007_199_254_740_993u64).fingerprint()
        );
    }
}
