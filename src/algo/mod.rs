//! Algorithm implementations for document diffing.
//!
//! - `oracle`: node equality and container soft match
//! - `table`: LCS alignment table over sibling sequences
//! - `reconcile`: backtracking merge of two sibling sequences
//! - `diff`: top-level entry points and configuration

mod diff;
mod oracle;
mod reconcile;
mod table;

#[cfg(feature = "parallel")]
pub use diff::diff_batch;
pub use diff::{diff, diff_with_config, DiffConfig, DiffResult, DiffStats};
pub use oracle::{fully_equal, is_container_match};
pub use table::AlignmentTable;
