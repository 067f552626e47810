//! Diff status markers
//!
//! A node's status lives in the reserved `diffStatus` attribute. Input
//! snapshots never carry it; the diff writes it onto pure insertions and
//! deletions (and every node below them).

use std::fmt;

use crate::attr::{AttrValue, AttrsExt, DIFF_STATUS_KEY};
use crate::node::Node;

/// Marker stamped onto added/removed subtrees.
///
/// The unset state is represented as `Option::<DiffStatus>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiffStatus {
    Added,
    Removed,
}

impl DiffStatus {
    /// Attribute value written under `diffStatus`
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Removed => "removed",
        }
    }

    /// Class a renderer puts on a styled block (`diff-added` / `diff-removed`)
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Added => "diff-added",
            Self::Removed => "diff-removed",
        }
    }

    /// Parse an attribute value. `null`, absent and unknown strings are unset.
    pub fn from_attr(value: &AttrValue) -> Option<Self> {
        match value.as_str()? {
            "added" => Some(Self::Added),
            "removed" => Some(Self::Removed),
            _ => None,
        }
    }
}

impl fmt::Display for DiffStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<DiffStatus> for AttrValue {
    fn from(status: DiffStatus) -> Self {
        AttrValue::from(status.as_str())
    }
}

/// Return a copy of `node` with `status` set on it and on every descendant.
///
/// Traversal uses an explicit stack, so annotation depth is not bounded by
/// the call stack.
pub fn apply_status(node: &Node, status: DiffStatus) -> Node {
    let mut out = node.clone();
    {
        let mut stack: Vec<&mut Node> = vec![&mut out];
        while let Some(current) = stack.pop() {
            current.attrs.set_attr(DIFF_STATUS_KEY, status);
            if let Some(children) = current.children.as_mut() {
                stack.extend(children.iter_mut());
            }
        }
    }
    out
}
