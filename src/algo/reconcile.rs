//! Backtracking reconciler
//!
//! Walks the alignment table from `(m, n)` back to `(0, 0)` and emits one
//! merged sequence: unchanged nodes, recursively merged containers, and
//! wholly added or removed subtrees.
//!
//! At each cell, in order:
//!
//! 1. equal nodes are emitted unchanged
//! 2. soft-matched containers are emitted with recursively merged children
//! 3. `new[j-1]` is emitted as added when `i == 0` or `T[i][j-1] >= T[i-1][j]`
//! 4. otherwise `old[i-1]` is emitted as removed
//!
//! The `>=` in step 3 prefers an insertion on ties. Since emission runs
//! backwards, a removed run ends up before the added run replacing it.

use tracing::trace;

use crate::attr::{AttrsExt, DIFF_STATUS_KEY};
use crate::node::Node;
use crate::status::{apply_status, DiffStatus};

use super::diff::{DiffConfig, DiffStats};
use super::oracle::SiblingMatcher;
use super::table::AlignmentTable;

/// Reconciliation state shared across container recursion
pub(crate) struct Reconciler<'c> {
    config: &'c DiffConfig,
    stats: DiffStats,
    depth: usize,
}

impl<'c> Reconciler<'c> {
    pub(crate) fn new(config: &'c DiffConfig) -> Self {
        Self {
            config,
            stats: DiffStats::default(),
            depth: 0,
        }
    }

    pub(crate) fn into_stats(self) -> DiffStats {
        self.stats
    }

    /// Mark every node of `nodes` (and its subtree) with `status`
    pub(crate) fn mark_all(&mut self, nodes: &[Node], status: DiffStatus) -> Vec<Node> {
        self.count(status, nodes.len());
        nodes.iter().map(|n| apply_status(n, status)).collect()
    }

    /// Merge two sibling sequences into one annotated sequence
    pub(crate) fn reconcile(&mut self, old: &[Node], new: &[Node]) -> Vec<Node> {
        let matcher = SiblingMatcher::new(old, new, self.config);
        let table = AlignmentTable::from_matcher(&matcher, old.len(), new.len());
        self.stats.cells_computed += table.cell_count();

        let mut merged = Vec::with_capacity(old.len().max(new.len()));
        let (mut i, mut j) = (old.len(), new.len());

        while i > 0 || j > 0 {
            if i > 0 && j > 0 && matcher.is_equal(i - 1, j - 1) {
                merged.push(old[i - 1].clone());
                self.stats.nodes_kept += 1;
                i -= 1;
                j -= 1;
            } else if i > 0 && j > 0 && matcher.is_container_match(i - 1, j - 1) {
                merged.push(self.merge_container(&old[i - 1], &new[j - 1]));
                i -= 1;
                j -= 1;
            } else if j > 0 && (i == 0 || table.score(i, j - 1) >= table.score(i - 1, j)) {
                merged.push(apply_status(&new[j - 1], DiffStatus::Added));
                self.count(DiffStatus::Added, 1);
                j -= 1;
            } else {
                merged.push(apply_status(&old[i - 1], DiffStatus::Removed));
                self.count(DiffStatus::Removed, 1);
                i -= 1;
            }
        }

        merged.reverse();
        merged
    }

    /// Copy of `old` whose children are the merge of both child sequences.
    ///
    /// The container itself carries no status; its descendants do.
    fn merge_container(&mut self, old: &Node, new: &Node) -> Node {
        self.depth += 1;
        self.stats.containers_recursed += 1;
        trace!(
            kind = %old.kind,
            depth = self.depth,
            old_children = old.content().len(),
            new_children = new.content().len(),
            "recursing into container"
        );

        let children = self.reconcile(old.content(), new.content());
        self.depth -= 1;

        let mut attrs = old.attrs.clone();
        attrs.remove_attr(DIFF_STATUS_KEY);
        Node {
            kind: old.kind.clone(),
            attrs,
            children: Some(children),
            text: old.text.clone(),
            marks: old.marks.clone(),
        }
    }

    fn count(&mut self, status: DiffStatus, n: usize) {
        match status {
            DiffStatus::Added => self.stats.nodes_added += n,
            DiffStatus::Removed => self.stats.nodes_removed += n,
        }
    }
}
