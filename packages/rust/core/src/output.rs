//! JSON rendering and the single-shot output write.

use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, instrument};

use ctigroup_shared::{CtiGroupError, OutputRecord, Result};

/// Render records as a pretty-printed JSON array with `indent` spaces per
/// level. No trailing newline is emitted.
pub fn render_json(records: &[OutputRecord], indent: usize) -> Result<String> {
    let indent = " ".repeat(indent);
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());

    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records
        .serialize(&mut serializer)
        .map_err(|e| CtiGroupError::Serialization(e.to_string()))?;

    String::from_utf8(buf).map_err(|e| CtiGroupError::Serialization(e.to_string()))
}

/// Render `records` in full, then write them to `path` in one call.
///
/// Nothing touches `path` if rendering fails.
#[instrument(skip(records), fields(path = %path.display(), records = records.len()))]
pub fn write_output(path: &Path, records: &[OutputRecord], indent: usize) -> Result<()> {
    let json = render_json(records, indent)?;
    std::fs::write(path, &json).map_err(|e| CtiGroupError::write(path, e))?;
    debug!(bytes = json.len(), "output written");
    Ok(())
}
