//! tola-docdiff - Structural diff for rich-text document trees
//!
//! Given two snapshots of a document, produces one merged tree in which
//! unchanged content appears once, deleted content is kept and marked
//! `removed`, and inserted content is marked `added`. A history view renders
//! that tree directly.
//!
//! ## Modules
//! - `node`: Node/Mark types in the editor's JSON shape
//! - `attr`: Attribute values and helpers
//! - `algo`: Equality oracle, alignment table, reconciler, entry points
//! - `status`: Diff status marker and subtree annotation
//! - `serialize`: JSON parsing and output
//! - `history`: Saved-version history and version-to-version diffs
//!
//! ## Usage
//!
//! ```
//! use tola_docdiff::{diff, Node};
//!
//! let old = Node::doc([Node::new("paragraph").child(Node::text("a"))]);
//! let new = Node::doc([
//!     Node::new("paragraph").child(Node::text("a")),
//!     Node::new("paragraph").child(Node::text("b")),
//! ]);
//!
//! let merged = diff(Some(&old), Some(&new));
//! assert!(merged.content()[1].is_added());
//! ```

// Must come first: `impl_status_accessors!` is used by `node`
#[macro_use]
mod macros;

// =============================================================================
// Modules
// =============================================================================

/// Node types: Node, Mark
pub mod node;

/// Attribute types
pub mod attr;

/// Diff status marker and annotation
pub mod status;

/// Deterministic hashing and content fingerprints
pub mod hash;

/// Algorithms: oracle, alignment table, reconciler
pub mod algo;

/// Error types
pub mod error;

/// JSON support
pub mod serialize;

/// Version history
pub mod history;

/// Prelude for common imports
pub mod prelude;

// =============================================================================
// Re-exports
// =============================================================================

// Node types
pub use node::{kind, Mark, Marks, Node};

// Attribute types
pub use attr::{AttrValue, Attrs, AttrsExt, DIFF_STATUS_KEY};

// Status
pub use status::{apply_status, DiffStatus};

// Algorithms
#[cfg(feature = "parallel")]
pub use algo::diff_batch;
pub use algo::{diff, diff_with_config, AlignmentTable, DiffConfig, DiffResult, DiffStats};

// Hashing
pub use hash::{Fingerprint, StableHasher};

// JSON
pub use serialize::{diff_json, parse_document, parse_snapshot, to_json_string};

// History
pub use history::{parse_history, History, HistoryEntry};

// Error types
pub use error::{DocError, DocResult};
