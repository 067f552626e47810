//! Tree traversal and query helpers.
//!
//! A renderer has to walk the whole result tree: container nodes merged by
//! the diff carry no status, only their descendants do.

use crate::status::DiffStatus;

use super::{kind, Node};

impl Node {
    /// Iterate over this node and all descendants (depth-first, pre-order)
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants::new(self)
    }

    /// Count this node and all descendants
    pub fn node_count(&self) -> usize {
        self.descendants().count()
    }

    /// Find all nodes (including this one) matching predicate
    pub fn find_all<F>(&self, predicate: F) -> Vec<&Node>
    where
        F: Fn(&Node) -> bool,
    {
        self.descendants().filter(|n| predicate(n)).collect()
    }

    /// Find first node (including this one) matching predicate
    pub fn find<F>(&self, predicate: F) -> Option<&Node>
    where
        F: Fn(&Node) -> bool,
    {
        self.descendants().find(|n| predicate(n))
    }

    /// Count nodes carrying `status`
    pub fn count_status(&self, status: DiffStatus) -> usize {
        self.descendants()
            .filter(|n| n.status() == Some(status))
            .count()
    }

    /// Styled block nodes carrying a status, in document order.
    ///
    /// These are the nodes a history view decorates; text leaves and
    /// unknown kinds are skipped even when marked.
    pub fn styled_changes(&self) -> impl Iterator<Item = (&Node, DiffStatus)> {
        self.descendants()
            .filter(|n| kind::is_styled_block(&n.kind))
            .filter_map(|n| n.status().map(|s| (n, s)))
    }

    /// Check if any node in the tree carries a diff status
    pub fn has_status(&self) -> bool {
        self.descendants().any(|n| n.status().is_some())
    }
}

// =============================================================================
// Descendants - depth-first node traversal
// =============================================================================

/// Depth-first iterator over a node and its descendants
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Descendants<'a> {
    fn new(root: &'a Node) -> Self {
        Self { stack: vec![root] }
    }
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Push children in reverse order so they're visited left-to-right
        self.stack.extend(node.content().iter().rev());
        Some(node)
    }
}
