//! Per-row classification.
//!
//! A row's first tab column holds `Category/Type/Item,Title`. The column is
//! split on commas (no CSV quoting) and the path on `/`:
//! - fewer than two path segments: the row is skipped
//! - no third segment: the item falls back to the configured default
//! - no comma: the key is derivable but there is no title to record

use csv::StringRecord;

use ctigroup_shared::ClassificationKey;

/// Separates the CTI path from the title inside the first column.
const TITLE_SEPARATOR: char = ',';

/// Separates the CTI path segments.
const PATH_SEPARATOR: char = '/';

/// Why a row contributed nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The record had no fields.
    EmptyRow,
    /// The path had fewer than two `/`-separated segments.
    ShallowPath { segments: usize },
}

/// What a single row contributes to the grouping map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome<'a> {
    /// Nothing at all.
    Skipped(SkipReason),
    /// A key could be derived, but the row carries no title.
    Untitled(ClassificationKey),
    /// A title to append under `key`.
    Titled {
        key: ClassificationKey,
        title: &'a str,
    },
}

/// Classify a framed tab-delimited record. Only the first column is read.
pub fn parse_row<'a>(record: &'a StringRecord, default_item: &str) -> RowOutcome<'a> {
    match record.get(0) {
        Some(column) => parse_column(column, default_item),
        None => RowOutcome::Skipped(SkipReason::EmptyRow),
    }
}

/// Classify the first column of a row.
///
/// Segments are taken verbatim: no trimming, and empty segments count.
/// Anything after a second comma is ignored.
pub fn parse_column<'a>(column: &'a str, default_item: &str) -> RowOutcome<'a> {
    let mut column_parts = column.split(TITLE_SEPARATOR);
    let path = column_parts.next().unwrap_or_default();
    let title = column_parts.next();

    let path_parts: Vec<&str> = path.split(PATH_SEPARATOR).collect();
    if path_parts.len() < 2 {
        return RowOutcome::Skipped(SkipReason::ShallowPath {
            segments: path_parts.len(),
        });
    }

    let type_name = path_parts[1];
    let item = path_parts.get(2).copied().unwrap_or(default_item);
    let key = ClassificationKey::new(type_name, item);

    match title {
        Some(title) => RowOutcome::Titled { key, title },
        None => RowOutcome::Untitled(key),
    }
}
