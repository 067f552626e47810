//! Document history snapshots.
//!
//! History is stored as a JSON array of `{"time": <ms>, "content": <doc>}`
//! entries, newest first (each save prepends the previous content). This
//! module only reads that format; fetching and storing it belongs to the
//! caller.

use serde::{Deserialize, Deserializer, Serialize};

use crate::algo::{diff_with_config, DiffConfig, DiffResult};
use crate::error::{DocError, DocResult};
use crate::node::Node;
use crate::serialize::snapshot_from_value;

/// One saved version of a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Save timestamp (milliseconds since epoch)
    pub time: i64,
    /// Document content; `None` when the saved content was empty
    #[serde(default, deserialize_with = "deserialize_snapshot")]
    pub content: Option<Node>,
}

fn deserialize_snapshot<'de, D>(deserializer: D) -> Result<Option<Node>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    snapshot_from_value(value).map_err(serde::de::Error::custom)
}

/// Saved versions of one document, newest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Wrap entries that are already ordered newest first
    pub fn new(entries: Vec<HistoryEntry>) -> Self {
        Self { entries }
    }

    /// Parse the stored JSON array
    pub fn parse(json: &str) -> DocResult<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// Entries, newest first
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of saved versions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing was saved yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Timestamps, newest first
    pub fn timestamps(&self) -> impl Iterator<Item = i64> + '_ {
        self.entries.iter().map(|e| e.time)
    }

    /// 1-based version number of `ts`, oldest version being 1
    pub fn version_number(&self, ts: i64) -> Option<usize> {
        self.position(ts).map(|idx| self.entries.len() - idx)
    }

    /// Content saved at `ts`
    ///
    /// Returns `Ok(None)` when the entry exists but its content was empty.
    pub fn snapshot(&self, ts: i64) -> DocResult<Option<&Node>> {
        self.position(ts)
            .map(|idx| self.entries[idx].content.as_ref())
            .ok_or(DocError::SnapshotNotFound { ts })
    }

    /// Diff two versions. `None` stands for a document that did not exist.
    pub fn diff_versions(
        &self,
        older: Option<i64>,
        newer: Option<i64>,
        config: &DiffConfig,
    ) -> DocResult<DiffResult> {
        let old = self.lookup(older)?;
        let new = self.lookup(newer)?;
        Ok(diff_with_config(old, new, config))
    }

    /// Diff the version at `ts` against the version saved just before it.
    ///
    /// The oldest version is diffed against an absent document, so all of
    /// its content shows as added.
    pub fn diff_with_previous(&self, ts: i64, config: &DiffConfig) -> DocResult<DiffResult> {
        let idx = self.position(ts).ok_or(DocError::SnapshotNotFound { ts })?;
        let previous = self.entries.get(idx + 1).map(|e| e.time);
        self.diff_versions(previous, Some(ts), config)
    }

    fn lookup(&self, ts: Option<i64>) -> DocResult<Option<&Node>> {
        match ts {
            Some(ts) => self.snapshot(ts),
            None => Ok(None),
        }
    }

    fn position(&self, ts: i64) -> Option<usize> {
        self.entries.iter().position(|e| e.time == ts)
    }
}

/// Parse the stored history JSON array
pub fn parse_history(json: &str) -> DocResult<History> {
    History::parse(json)
}
