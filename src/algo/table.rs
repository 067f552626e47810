//! Alignment table (longest common subsequence)
//!
//! Standard LCS dynamic programming over two sibling sequences, generalized
//! with a caller-supplied match predicate. Containers with equal kind and
//! attributes count as a match even when their children differ.
//!
//! # Complexity
//!
//! - Time: O(m * n) predicate calls per sibling level
//! - Space: O((m + 1) * (n + 1)) cells
//!
//! Matched containers recurse into their own children with an independent
//! table, so very wide lists nested deeply are quadratic per level.

use crate::node::Node;

use super::diff::DiffConfig;
use super::oracle::SiblingMatcher;

/// Scoring table `T` of size `(m + 1) x (n + 1)`.
///
/// `T[i][j]` is the length of the longest matched subsequence of
/// `old[..i]` and `new[..j]`. Row 0 and column 0 are zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentTable {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

impl AlignmentTable {
    /// Build the table for sequences of length `old_len` and `new_len`.
    ///
    /// `matches(i, j)` receives 0-based indices into the old and new
    /// sequences.
    pub fn build<F>(old_len: usize, new_len: usize, mut matches: F) -> Self
    where
        F: FnMut(usize, usize) -> bool,
    {
        let rows = old_len + 1;
        let cols = new_len + 1;
        let mut cells = vec![0usize; rows * cols];

        for i in 1..rows {
            for j in 1..cols {
                cells[i * cols + j] = if matches(i - 1, j - 1) {
                    cells[(i - 1) * cols + (j - 1)] + 1
                } else {
                    cells[(i - 1) * cols + j].max(cells[i * cols + (j - 1)])
                };
            }
        }

        Self { rows, cols, cells }
    }

    /// Build the table for two sibling sequences using the node match relation
    pub fn for_siblings(old: &[Node], new: &[Node], config: &DiffConfig) -> Self {
        let matcher = SiblingMatcher::new(old, new, config);
        Self::from_matcher(&matcher, old.len(), new.len())
    }

    pub(crate) fn from_matcher(
        matcher: &SiblingMatcher<'_>,
        old_len: usize,
        new_len: usize,
    ) -> Self {
        Self::build(old_len, new_len, |i, j| matcher.matches(i, j))
    }

    /// Score `T[i][j]`
    ///
    /// # Panics
    ///
    /// Panics if `i > old_len()` or `j > new_len()`.
    #[inline]
    pub fn score(&self, i: usize, j: usize) -> usize {
        assert!(i < self.rows && j < self.cols, "alignment index out of range");
        self.cells[i * self.cols + j]
    }

    /// Length of the longest matched subsequence (`T[m][n]`)
    #[inline]
    pub fn lcs_len(&self) -> usize {
        self.cells[self.cells.len() - 1]
    }

    /// Length of the old sequence (`m`)
    #[inline]
    pub fn old_len(&self) -> usize {
        self.rows - 1
    }

    /// Length of the new sequence (`n`)
    #[inline]
    pub fn new_len(&self) -> usize {
        self.cols - 1
    }

    /// Number of cells, including the zero row and column
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::kind;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn table(old: &str, new: &str) -> AlignmentTable {
        let (old, new) = (chars(old), chars(new));
        AlignmentTable::build(old.len(), new.len(), |i, j| old[i] == new[j])
    }

    #[test]
    fn test_empty_sequences() {
        let t = table("", "");
        assert_eq!(t.lcs_len(), 0);
        assert_eq!(t.cell_count(), 1);
        assert_eq!((t.old_len(), t.new_len()), (0, 0));
    }

    #[test]
    fn test_one_side_empty() {
        let t = table("", "abc");
        assert_eq!(t.lcs_len(), 0);
        assert_eq!(t.new_len(), 3);
        let t = table("abc", "");
        assert_eq!(t.lcs_len(), 0);
    }

    #[test]
    fn test_borders_are_zero() {
        let t = table("abc", "abd");
        for i in 0..=3 {
            assert_eq!(t.score(i, 0), 0);
        }
        for j in 0..=3 {
            assert_eq!(t.score(0, j), 0);
        }
    }

    #[test]
    fn test_classic_lcs() {
        // LCS("ABCBDAB", "BDCABA") = 4
        let t = table("ABCBDAB", "BDCABA");
        assert_eq!(t.lcs_len(), 4);
        assert_eq!(t.score(1, 1), 0);
        assert_eq!(t.score(2, 1), 1);
    }

    #[test]
    fn test_single_delete() {
        let t = table("abc", "ac");
        assert_eq!(t.lcs_len(), 2);
        assert_eq!(t.score(2, 1), 1);
        assert_eq!(t.score(3, 2), 2);
    }

    #[test]
    fn test_scores_are_monotonic() {
        let t = table("xaybzc", "abcxyz");
        for i in 1..=t.old_len() {
            for j in 1..=t.new_len() {
                assert!(t.score(i, j) >= t.score(i - 1, j));
                assert!(t.score(i, j) >= t.score(i, j - 1));
            }
        }
    }

    #[test]
    fn test_container_soft_match_scores() {
        let config = DiffConfig::default();
        let old = [Node::new(kind::BULLET_LIST).child(Node::new(kind::LIST_ITEM))];
        let new = [Node::new(kind::BULLET_LIST)];
        let t = AlignmentTable::for_siblings(&old, &new, &config);
        assert_eq!(t.lcs_len(), 1);

        let new = [Node::new(kind::ORDERED_LIST)];
        let t = AlignmentTable::for_siblings(&old, &new, &config);
        assert_eq!(t.lcs_len(), 0);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(table("abcabba", "cbabac"), table("abcabba", "cbabac"));
    }

    #[test]
    #[should_panic(expected = "alignment index out of range")]
    fn test_score_out_of_range() {
        let _ = table("ab", "a").score(3, 0);
    }
}
