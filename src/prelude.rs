//! Prelude module for common imports.
//!
//! ```ignore
//! use tola_docdiff::prelude::*;
//! ```

// Node types
pub use crate::node::{kind, Mark, Marks, Node};

// Attributes
pub use crate::attr::{AttrValue, Attrs, AttrsExt};

// Status
pub use crate::status::{apply_status, DiffStatus};

// Algorithms
pub use crate::algo::{diff, diff_with_config, DiffConfig, DiffResult, DiffStats};

// JSON and history
pub use crate::history::History;
pub use crate::serialize::{diff_json, parse_document, parse_snapshot};

// Error
pub use crate::error::{DocError, DocResult};
