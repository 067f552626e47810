//! Inline marks (bold, italic, link, ...) attached to text leaves

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::attr::{AttrValue, Attrs, AttrsExt};

/// Marks of one text run. Most runs carry at most a couple.
pub type Marks = SmallVec<[Mark; 2]>;

/// Inline formatting descriptor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mark {
    /// Mark type tag (bold, italic, link, highlight, ...)
    #[serde(rename = "type")]
    pub kind: CompactString,
    /// Mark attributes (e.g. `href` for links)
    #[serde(
        default,
        deserialize_with = "crate::serialize::null_as_default",
        skip_serializing_if = "Attrs::is_empty"
    )]
    pub attrs: Attrs,
}

impl Mark {
    /// Create a mark with no attributes
    pub fn new(kind: impl Into<CompactString>) -> Self {
        Self {
            kind: kind.into(),
            attrs: Attrs::new(),
        }
    }

    /// Set an attribute (builder)
    pub fn attr(mut self, name: impl Into<CompactString>, value: impl Into<AttrValue>) -> Self {
        self.attrs.set_attr(name, value);
        self
    }
}
