//! Attribute system for document nodes
//!
//! Attributes are an unordered map from name to a JSON-like scalar or nested
//! value. `BTreeMap` keeps key order irrelevant for equality while giving a
//! deterministic serialization order.
//!
//! The `diffStatus` key is reserved: it is written only by the diff and is
//! ignored by every content comparison.

use std::collections::BTreeMap;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Reserved attribute key carrying the diff status of an output node.
pub const DIFF_STATUS_KEY: &str = "diffStatus";

/// Attribute value: closed variant over the JSON data model.
///
/// Numbers keep their JSON representation (`2` stays an integer, `2.0` a
/// float, large integers stay exact). Equality is by numeric value, so `1`
/// and `1.0` compare equal the same way JSON numbers do.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Null,
    Bool(bool),
    Number(Number),
    String(CompactString),
    List(Vec<AttrValue>),
    Map(BTreeMap<CompactString, AttrValue>),
}

impl PartialEq for AttrValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => NumberKey::of(a) == NumberKey::of(b),
            (Self::String(a), Self::String(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            _ => false,
        }
    }
}

impl AttrValue {
    /// Get as string slice (only for `String` values)
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as number (only for `Number` values)
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    /// Get as integer (only for integral `Number` values that fit)
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// Get as bool (only for `Bool` values)
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Check if this is `Null`
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// Value identity of a JSON number.
///
/// Integers and integral floats map to `Int`, so `1 == 1.0` while integers
/// beyond 2^53 keep every bit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum NumberKey {
    Int(i128),
    Float(f64),
}

impl NumberKey {
    pub(crate) fn of(n: &Number) -> Self {
        if let Some(v) = n.as_i64() {
            return Self::Int(v.into());
        }
        if let Some(v) = n.as_u64() {
            return Self::Int(v.into());
        }
        // Finite: serde_json numbers never hold NaN or infinities
        let f = n.as_f64().unwrap_or_default();
        if f.fract() == 0.0 && f.abs() < i128::MAX as f64 {
            Self::Int(f as i128)
        } else {
            Self::Float(f)
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        Self::String(s.into())
    }
}

impl From<CompactString> for AttrValue {
    fn from(s: CompactString) -> Self {
        Self::String(s)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Number> for AttrValue {
    fn from(n: Number) -> Self {
        Self::Number(n)
    }
}

/// Non-finite floats have no JSON form and become `Null`.
impl From<f64> for AttrValue {
    fn from(n: f64) -> Self {
        Number::from_f64(n).map_or(Self::Null, Self::Number)
    }
}

impl From<i64> for AttrValue {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

impl From<u64> for AttrValue {
    fn from(n: u64) -> Self {
        Self::Number(n.into())
    }
}

impl From<i32> for AttrValue {
    fn from(n: i32) -> Self {
        Self::Number(n.into())
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

/// Node attributes keyed by name.
pub type Attrs = BTreeMap<CompactString, AttrValue>;

/// Extension trait for attribute operations on Attrs
pub trait AttrsExt {
    /// Get an attribute value by name
    fn get_attr(&self, name: &str) -> Option<&AttrValue>;

    /// Check if an attribute exists
    fn has_attr(&self, name: &str) -> bool;

    /// Set an attribute value (insert or update)
    fn set_attr(&mut self, name: impl Into<CompactString>, value: impl Into<AttrValue>);

    /// Remove an attribute by name, returning the old value if present
    fn remove_attr(&mut self, name: &str) -> Option<AttrValue>;

    /// Compare content attributes, ignoring the reserved `diffStatus` key.
    fn content_eq(&self, other: &Self) -> bool;

    /// Iterate attributes except the reserved `diffStatus` key.
    fn content_iter(&self) -> impl Iterator<Item = (&CompactString, &AttrValue)>;
}

impl AttrsExt for Attrs {
    fn get_attr(&self, name: &str) -> Option<&AttrValue> {
        self.get(name)
    }

    fn has_attr(&self, name: &str) -> bool {
        self.contains_key(name)
    }

    fn set_attr(&mut self, name: impl Into<CompactString>, value: impl Into<AttrValue>) {
        self.insert(name.into(), value.into());
    }

    fn remove_attr(&mut self, name: &str) -> Option<AttrValue> {
        self.remove(name)
    }

    fn content_eq(&self, other: &Self) -> bool {
        self.content_iter().eq(other.content_iter())
    }

    fn content_iter(&self) -> impl Iterator<Item = (&CompactString, &AttrValue)> {
        self.iter().filter(|(k, _)| k.as_str() != DIFF_STATUS_KEY)
    }
}

// =============================================================================
// Tests
// =============================================================================
