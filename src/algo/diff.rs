//! Document Diff
//!
//! Compares two document snapshots and produces one merged tree for a
//! history view. This is a **pure algorithm module**: no I/O, no shared
//! state, deterministic output.
//!
//! # Architecture
//!
//! ```text
//! diff(old?, new?) -> Node(doc)
//!       |
//!       v
//! Reconciler::reconcile(old.children, new.children)
//!       |-- AlignmentTable (LCS over the match relation)
//!       |-- fully_equal / is_container_match
//!       `-- apply_status (added / removed subtrees)
//! ```
//!
//! # Output
//!
//! - unchanged nodes carry no status
//! - matched containers (lists) carry no status; their items are merged
//!   recursively and carry their own statuses
//! - inserted / deleted subtrees carry `added` / `removed` on every node
//!
//! Word-level diffing, move detection and three-way merge are not attempted.

use std::sync::LazyLock;

use compact_str::CompactString;
use rustc_hash::FxHashSet;
use tracing::debug;

use crate::node::{kind, Node};
use crate::status::DiffStatus;

use super::reconcile::Reconciler;

static DEFAULT_CONFIG: LazyLock<DiffConfig> = LazyLock::new(DiffConfig::tiptap);

// =============================================================================
// Public Types
// =============================================================================

/// Configuration for the diff.
///
/// The defaults follow the rich-text editor schema:
/// root kind `doc`, containers `bulletList` / `orderedList` / `taskList`.
#[derive(Debug, Clone)]
pub struct DiffConfig {
    /// Kind of the produced root node.
    /// Default: `doc`
    pub root_kind: CompactString,
    /// Kinds eligible for the soft match (recurse into children).
    /// Default: `bulletList`, `orderedList`, `taskList`
    pub container_kinds: FxHashSet<CompactString>,
}

impl Default for DiffConfig {
    fn default() -> Self {
        DEFAULT_CONFIG.clone()
    }
}

impl DiffConfig {
    /// Create config with a custom root kind and container set.
    pub fn new<I, S>(root_kind: impl Into<CompactString>, container_kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<CompactString>,
    {
        Self {
            root_kind: root_kind.into(),
            container_kinds: container_kinds.into_iter().map(Into::into).collect(),
        }
    }

    /// Config for the rich-text editor schema (the default).
    pub fn tiptap() -> Self {
        Self::new(kind::DOC, kind::CONTAINERS)
    }

    /// Add a container kind (builder).
    pub fn with_container_kind(mut self, kind: impl Into<CompactString>) -> Self {
        self.container_kinds.insert(kind.into());
        self
    }

    /// Set the root kind (builder).
    pub fn with_root_kind(mut self, kind: impl Into<CompactString>) -> Self {
        self.root_kind = kind.into();
        self
    }

    /// Check if `kind` is eligible for the container soft match.
    #[inline]
    pub fn is_container(&self, kind: &str) -> bool {
        self.container_kinds.contains(kind)
    }
}

/// Statistics from a diff, summed over all container levels
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct DiffStats {
    /// Fully equal nodes emitted unchanged, at any container level
    pub nodes_kept: usize,
    /// Container pairs merged by recursing into their children
    pub containers_recursed: usize,
    /// Subtree roots emitted as added
    pub nodes_added: usize,
    /// Subtree roots emitted as removed
    pub nodes_removed: usize,
    /// Alignment table cells computed
    pub cells_computed: usize,
}

impl DiffStats {
    /// Number of added and removed subtree roots
    pub fn edit_count(&self) -> usize {
        self.nodes_added + self.nodes_removed
    }

    /// Check if there are no changes
    pub fn is_empty(&self) -> bool {
        self.edit_count() == 0
    }
}

/// Result of a diff: merged document plus statistics
#[derive(Debug, Clone)]
#[must_use]
pub struct DiffResult {
    /// Merged document root
    pub document: Node,
    /// Statistics about the diff
    pub stats: DiffStats,
}

impl DiffResult {
    /// Check if any insertion or deletion was detected
    pub fn has_changes(&self) -> bool {
        !self.stats.is_empty()
    }

    /// Take the merged document
    pub fn into_document(self) -> Node {
        self.document
    }
}

// =============================================================================
// Public API
// =============================================================================

/// Diff two optional document snapshots with the default config.
///
/// - both absent: empty document
/// - old absent: every new child (and descendant) marked added
/// - new absent: every old child (and descendant) marked removed
/// - both present: root children reconciled by LCS alignment
///
/// Inputs are never mutated; the result is a new tree.
pub fn diff(old: Option<&Node>, new: Option<&Node>) -> Node {
    diff_with_config(old, new, &DEFAULT_CONFIG).document
}

/// Diff two optional document snapshots with an explicit config.
pub fn diff_with_config(old: Option<&Node>, new: Option<&Node>, config: &DiffConfig) -> DiffResult {
    debug!(
        old_children = old.map(|n| n.content().len()),
        new_children = new.map(|n| n.content().len()),
        "diffing document snapshots"
    );

    let mut reconciler = Reconciler::new(config);
    let children = match (old, new) {
        (None, None) => Vec::new(),
        (None, Some(new)) => reconciler.mark_all(new.content(), DiffStatus::Added),
        (Some(old), None) => reconciler.mark_all(old.content(), DiffStatus::Removed),
        (Some(old), Some(new)) => reconciler.reconcile(old.content(), new.content()),
    };
    let stats = reconciler.into_stats();

    debug!(
        kept = stats.nodes_kept,
        added = stats.nodes_added,
        removed = stats.nodes_removed,
        containers = stats.containers_recursed,
        cells = stats.cells_computed,
        "diff complete"
    );

    DiffResult {
        document: Node::new(config.root_kind.clone()).children(children),
        stats,
    }
}

/// Diff many independent snapshot pairs in parallel.
///
/// Results are in input order and identical to calling
/// [`diff_with_config`] on each pair.
#[cfg(feature = "parallel")]
pub fn diff_batch(pairs: &[(Option<Node>, Option<Node>)], config: &DiffConfig) -> Vec<DiffResult> {
    use rayon::prelude::*;

    pairs
        .par_iter()
        .map(|(old, new)| diff_with_config(old.as_ref(), new.as_ref(), config))
        .collect()
}
