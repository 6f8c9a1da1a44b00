//! The grouping map: classification key to ordered titles.

use indexmap::IndexMap;
use tracing::debug;

use ctigroup_shared::{ClassificationKey, ConvertOptions, OutputRecord};

/// Titles grouped by classification key.
///
/// Keys iterate in first-seen order and titles in push order. A key only
/// exists once a title has been pushed for it, so no list is ever empty.
#[derive(Debug, Clone, Default)]
pub struct TitleGroups {
    groups: IndexMap<ClassificationKey, Vec<String>>,
}

impl TitleGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `title` under `key`, creating the group on first use.
    pub fn push(&mut self, key: ClassificationKey, title: impl Into<String>) {
        self.groups.entry(key).or_default().push(title.into());
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn contains(&self, key: &ClassificationKey) -> bool {
        self.groups.contains_key(key)
    }

    /// Titles recorded for `key`, if any.
    pub fn titles(&self, key: &ClassificationKey) -> Option<&[String]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    /// Groups in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&ClassificationKey, &[String])> {
        self.groups.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Consume the map into output records, stamping the configured metadata.
    pub fn into_records(self, opts: &ConvertOptions) -> Vec<OutputRecord> {
        debug!(groups = self.groups.len(), "finalizing title groups");
        self.groups
            .into_iter()
            .map(|(key, titles)| OutputRecord {
                titles,
                category: opts.category.clone(),
                type_name: key.type_name,
                item: key.item,
                justification: opts.justification.clone(),
            })
            .collect()
    }
}
