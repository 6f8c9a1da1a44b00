//! Core domain types for grouped ticket titles.

use serde::{Deserialize, Serialize};

/// Category stamped on every output record unless overridden.
pub const DEFAULT_CATEGORY: &str = "Network Reliability Engineering (NRE)";

/// Justification stamped on every output record unless overridden.
pub const DEFAULT_JUSTIFICATION: &str = "Initial title additions";

/// Item name used when a CTI path has no third segment.
pub const DEFAULT_ITEM: &str = "Other";

// ---------------------------------------------------------------------------
// ClassificationKey
// ---------------------------------------------------------------------------

/// The (type, item) pair titles are grouped under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassificationKey {
    /// Second segment of the CTI path.
    pub type_name: String,
    /// Third segment of the CTI path, or the configured default item.
    pub item: String,
}

impl ClassificationKey {
    pub fn new(type_name: impl Into<String>, item: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            item: item.into(),
        }
    }
}

impl std::fmt::Display for ClassificationKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.type_name, self.item)
    }
}

// ---------------------------------------------------------------------------
// OutputRecord
// ---------------------------------------------------------------------------

/// One element of the emitted JSON array.
///
/// Field order is part of the output format: `titles`, `category`, `type`,
/// `item`, `justification`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    /// Every title seen for this key, in input order. Never empty.
    pub titles: Vec<String>,
    /// Ticket category.
    pub category: String,
    /// Ticket type (the key's type).
    #[serde(rename = "type")]
    pub type_name: String,
    /// Ticket item (the key's item).
    pub item: String,
    /// Justification attached to the bulk request.
    pub justification: String,
}

impl OutputRecord {
    /// The classification key this record was grouped under.
    pub fn key(&self) -> ClassificationKey {
        ClassificationKey::new(self.type_name.clone(), self.item.clone())
    }
}
