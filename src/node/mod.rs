//! Document node types.
//!
//! A document is a tree of typed, attributed nodes in the rich-text editor's
//! JSON shape:
//!
//! ```json
//! {"type": "paragraph", "attrs": {"textAlign": "left"},
//!  "content": [{"type": "text", "text": "Hi", "marks": [{"type": "bold"}]}]}
//! ```
//!
//! `kind` decides whether `children` may be present; the diff never assumes
//! they are and treats an absent list as empty.

mod mark;
mod traverse;

pub use mark::{Mark, Marks};
pub use traverse::Descendants;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::attr::{AttrValue, Attrs, AttrsExt, DIFF_STATUS_KEY};
use crate::status::DiffStatus;

/// Well-known node kinds of the editor schema.
pub mod kind {
    /// Root of every document and of every diff result
    pub const DOC: &str = "doc";
    /// Inline text run
    pub const TEXT: &str = "text";
    pub const PARAGRAPH: &str = "paragraph";
    pub const HEADING: &str = "heading";
    pub const BULLET_LIST: &str = "bulletList";
    pub const ORDERED_LIST: &str = "orderedList";
    pub const TASK_LIST: &str = "taskList";
    pub const LIST_ITEM: &str = "listItem";
    pub const TASK_ITEM: &str = "taskItem";
    pub const BLOCKQUOTE: &str = "blockquote";
    pub const CODE_BLOCK: &str = "codeBlock";
    pub const HORIZONTAL_RULE: &str = "horizontalRule";
    pub const IMAGE: &str = "image";
    pub const VIDEO: &str = "video";
    pub const TABLE: &str = "table";
    pub const TABLE_ROW: &str = "tableRow";
    pub const TABLE_CELL: &str = "tableCell";
    pub const TABLE_HEADER: &str = "tableHeader";

    /// List-like kinds whose children are diffed item by item
    pub const CONTAINERS: [&str; 3] = [BULLET_LIST, ORDERED_LIST, TASK_LIST];

    /// Block kinds a history view styles by diff status
    pub const STYLED_BLOCKS: [&str; 16] = [
        PARAGRAPH,
        HEADING,
        BULLET_LIST,
        ORDERED_LIST,
        LIST_ITEM,
        TASK_LIST,
        TASK_ITEM,
        BLOCKQUOTE,
        CODE_BLOCK,
        HORIZONTAL_RULE,
        IMAGE,
        VIDEO,
        TABLE,
        TABLE_ROW,
        TABLE_CELL,
        TABLE_HEADER,
    ];

    /// Check if a history view styles `kind` by its diff status
    pub fn is_styled_block(kind: &str) -> bool {
        STYLED_BLOCKS.contains(&kind)
    }
}

// =============================================================================
// Node
// =============================================================================

/// A node of the document tree.
///
/// Derived `PartialEq` is strict (it sees `diffStatus`); use
/// [`fully_equal`](crate::algo::fully_equal) for content comparison.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Node type tag (paragraph, heading, bulletList, text, ...)
    #[serde(rename = "type")]
    pub kind: CompactString,
    /// Node attributes, including the reserved `diffStatus` on diff output
    #[serde(
        default,
        deserialize_with = "crate::serialize::null_as_default",
        skip_serializing_if = "Attrs::is_empty"
    )]
    pub attrs: Attrs,
    /// Ordered children; absent for leaves
    #[serde(rename = "content", default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Node>>,
    /// Literal content of text leaves
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Inline formatting of text leaves
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marks: Option<Marks>,
}

impl Node {
    /// Create a node of the given kind with no attributes or children
    pub fn new(kind: impl Into<CompactString>) -> Self {
        Self {
            kind: kind.into(),
            ..Default::default()
        }
    }

    /// Create a text leaf
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            kind: kind::TEXT.into(),
            text: Some(content.into()),
            ..Default::default()
        }
    }

    /// Create a document root holding `children`
    pub fn doc(children: impl IntoIterator<Item = Node>) -> Self {
        Self::new(kind::DOC).children(children)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Builder API
    // ─────────────────────────────────────────────────────────────────────────

    /// Set an attribute (builder)
    pub fn attr(mut self, name: impl Into<CompactString>, value: impl Into<AttrValue>) -> Self {
        self.attrs.set_attr(name, value);
        self
    }

    /// Append a child (builder). Creates the child list if absent.
    pub fn child(mut self, child: Node) -> Self {
        self.children.get_or_insert_with(Vec::new).push(child);
        self
    }

    /// Replace the child list (builder). An empty iterator yields `Some([])`.
    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children = Some(children.into_iter().collect());
        self
    }

    /// Append an inline mark (builder)
    pub fn mark(mut self, mark: Mark) -> Self {
        self.marks.get_or_insert_with(Marks::new).push(mark);
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Children as a slice; empty when absent
    #[inline]
    pub fn content(&self) -> &[Node] {
        self.children.as_deref().unwrap_or_default()
    }

    /// Marks as a slice; empty when absent
    #[inline]
    pub fn mark_list(&self) -> &[Mark] {
        self.marks.as_deref().unwrap_or_default()
    }

    /// Check if this node has no children
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.content().is_empty()
    }

    /// Check if this node is of the given kind
    #[inline]
    pub fn is_kind(&self, kind: &str) -> bool {
        self.kind == kind
    }

    /// Diff status stamped on this node, if any
    pub fn status(&self) -> Option<DiffStatus> {
        self.attrs
            .get_attr(DIFF_STATUS_KEY)
            .and_then(DiffStatus::from_attr)
    }

    // Generates is_added(), is_removed()
    impl_status_accessors!(added, removed);

    /// Concatenated text of all text leaves, in document order
    pub fn text_content(&self) -> String {
        self.descendants()
            .filter_map(|n| n.text.as_deref())
            .collect()
    }
}
