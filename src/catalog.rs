//! Read-only snapshot of the hardware catalog available for dragging.
//!
//! The catalog is owned by an external service. The designer only ever sees
//! a snapshot, handed in at construction and swapped wholesale through
//! [`Catalog::replace`] when the backend reports a new parts list.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier assigned by the backend. Numeric for database rows, but any
/// string is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// A catalog part as delivered by the backend.
///
/// Only `id`, `name`, `category` and `platform` are interpreted. Everything
/// else is carried in `extra` and re-emitted unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartSnapshot {
    pub id: RecordId,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PartSnapshot {
    #[must_use]
    pub fn new(id: impl Into<RecordId>, name: &str, category: Option<&str>, platform: Option<&str>) -> Self {
        Self {
            id: id.into(),
            name: name.to_owned(),
            category: category.map(str::to_owned),
            platform: platform.map(str::to_owned),
            extra: Map::new(),
        }
    }

    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self
                .category
                .as_deref()
                .is_some_and(|c| c.to_lowercase().contains(needle))
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

/// The parts currently offered to the user.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    parts: Vec<PartSnapshot>,
}

impl Catalog {
    #[must_use]
    pub fn new(parts: Vec<PartSnapshot>) -> Self {
        Self { parts }
    }

    /// Swap in a new snapshot. Components already placed keep their own copy.
    pub fn replace(&mut self, parts: Vec<PartSnapshot>) {
        self.parts = parts;
    }

    #[must_use]
    pub fn parts(&self) -> &[PartSnapshot] {
        &self.parts
    }

    /// Look up a part by backend id.
    #[must_use]
    pub fn get(&self, id: &RecordId) -> Option<&PartSnapshot> {
        self.parts.iter().find(|p| &p.id == id)
    }

    /// Parts whose name or category contains `query`, case-insensitively.
    /// An empty query returns every part.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&PartSnapshot> {
        let needle = query.to_lowercase();
        if needle.is_empty() {
            return self.parts.iter().collect();
        }
        self.parts.iter().filter(|p| p.matches(&needle)).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}
