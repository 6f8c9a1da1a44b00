//! End-to-end conversion: tab-delimited rows in, grouped records out.
//!
//! The whole input is read before anything is written, and the output is
//! rendered in full before it is written once. Rows that cannot be
//! classified are skipped, counted in [`RowStats`], and never reported as
//! errors.

use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use tracing::{debug, info, instrument, trace};

use ctigroup_shared::{ConvertOptions, CtiGroupError, OutputRecord, Result};

use crate::grouping::TitleGroups;
use crate::output::write_output;
use crate::row::{RowOutcome, parse_row};

/// Column delimiter of the input file.
const COLUMN_DELIMITER: u8 = b'\t';

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Per-pass row counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowStats {
    /// Records framed by the reader.
    pub rows: usize,
    /// Rows that contributed a title.
    pub titled: usize,
    /// Rows with a usable path but no title.
    pub untitled: usize,
    /// Rows dropped for an empty record or a shallow path.
    pub skipped: usize,
}

/// Records produced from one document, plus what the pass saw.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Grouped records in first-seen key order.
    pub records: Vec<OutputRecord>,
    /// Row counters for the pass.
    pub stats: RowStats,
}

/// Result of a file-to-file conversion.
#[derive(Debug, Clone)]
pub struct ConvertSummary {
    /// Number of unique (type, item) groups written.
    pub group_count: usize,
    /// Where the JSON was written.
    pub output_path: PathBuf,
    /// Row counters for the pass.
    pub stats: RowStats,
}

// ---------------------------------------------------------------------------
// Single pass
// ---------------------------------------------------------------------------

/// Run the forward pass over an in-memory tab-delimited document.
///
/// Rows are framed by a tab-delimited reader (double-quote quoting, ragged
/// rows allowed, no header). Blank lines never reach the parser.
pub fn group_rows(content: &str, default_item: &str) -> Result<(TitleGroups, RowStats)> {
    let mut reader = ReaderBuilder::new()
        .delimiter(COLUMN_DELIMITER)
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut groups = TitleGroups::new();
    let mut stats = RowStats::default();

    for (index, result) in reader.records().enumerate() {
        let record =
            result.map_err(|e| CtiGroupError::parse(format!("record {}: {e}", index + 1)))?;
        stats.rows += 1;

        match parse_row(&record, default_item) {
            RowOutcome::Titled { key, title } => {
                stats.titled += 1;
                groups.push(key, title);
            }
            RowOutcome::Untitled(key) => {
                stats.untitled += 1;
                trace!(record = index + 1, %key, "row has no title");
            }
            RowOutcome::Skipped(reason) => {
                stats.skipped += 1;
                trace!(record = index + 1, ?reason, "skipping row");
            }
        }
    }

    debug!(
        rows = stats.rows,
        titled = stats.titled,
        untitled = stats.untitled,
        skipped = stats.skipped,
        groups = groups.len(),
        "row pass complete"
    );

    Ok((groups, stats))
}

/// Group an in-memory document and finalize it into records.
pub fn process_content(content: &str, opts: &ConvertOptions) -> Result<Conversion> {
    let (groups, stats) = group_rows(content, &opts.default_item)?;
    let records = groups.into_records(opts);
    Ok(Conversion { records, stats })
}

/// Read `input` to completion, then group and finalize it.
#[instrument(skip(opts), fields(input = %input.display()))]
pub fn process_file(input: &Path, opts: &ConvertOptions) -> Result<Conversion> {
    let content = std::fs::read_to_string(input).map_err(|e| CtiGroupError::read(input, e))?;
    debug!(bytes = content.len(), "input read");
    process_content(&content, opts)
}

/// Convert `input` into the grouped JSON document at `output`.
///
/// On any error `output` is left untouched.
#[instrument(skip(opts), fields(input = %input.display(), output = %output.display()))]
pub fn convert(input: &Path, output: &Path, opts: &ConvertOptions) -> Result<ConvertSummary> {
    opts.validate()?;

    let Conversion { records, stats } = process_file(input, opts)?;
    write_output(output, &records, opts.indent)?;

    info!(
        groups = records.len(),
        rows = stats.rows,
        skipped = stats.skipped,
        "conversion complete"
    );

    Ok(ConvertSummary {
        group_count: records.len(),
        output_path: output.to_path_buf(),
        stats,
    })
}
