//! Row parsing, grouping, and JSON output for ctigroup.
//!
//! This crate turns tab-delimited CTI rows into grouped title records:
//! [`row`] decides what each row contributes, [`grouping`] accumulates titles
//! per classification key, [`converter`] drives the single pass end to end,
//! and [`output`] renders the JSON document.

pub mod converter;
pub mod grouping;
pub mod output;
pub mod row;

pub use converter::{
    Conversion, ConvertSummary, RowStats, convert, group_rows, process_content, process_file,
};
pub use grouping::TitleGroups;
pub use output::{render_json, write_output};
pub use row::{RowOutcome, SkipReason, parse_column, parse_row};
