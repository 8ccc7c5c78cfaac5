//! Comma-joined line format.
//!
//! `parse(serialize(records))` reproduces the field values in order as long
//! as no field contains a comma or a line break.

use crate::model::record::{Record, RecordFields};
use log::debug;

/// Field separator.
pub const FIELD_SEPARATOR: char = ',';
const FIELD_COUNT: usize = 4;

/// Outcome of parsing one file body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRecords {
    /// Well-formed lines in file order.
    pub records: Vec<RecordFields>,
    /// Number of lines dropped for not having exactly four parts.
    pub skipped_lines: usize,
}

/// Parses file contents, keeping only lines with exactly four parts.
///
/// Blank lines and lines whose fields contain extra commas are dropped.
/// Accepts both `\n` and `\r\n` line endings.
pub fn parse(contents: &str) -> ParsedRecords {
    let mut parsed = ParsedRecords::default();
    for line in contents.lines() {
        match parse_line(line) {
            Some(fields) => parsed.records.push(fields),
            None => parsed.skipped_lines += 1,
        }
    }
    debug!(
        "event=codec_parse module=codec status=ok accepted={} skipped={}",
        parsed.records.len(),
        parsed.skipped_lines
    );
    parsed
}

/// Parses one line into fields, or `None` when it does not have four parts.
pub fn parse_line(line: &str) -> Option<RecordFields> {
    let parts = line.split(FIELD_SEPARATOR).collect::<Vec<_>>();
    if parts.len() != FIELD_COUNT {
        return None;
    }
    Some(RecordFields::new(parts[0], parts[1], parts[2], parts[3]))
}

/// Serializes records in order, one `name,dept,year,course\n` line each.
pub fn serialize<'a>(records: impl IntoIterator<Item = &'a Record>) -> String {
    let mut out = String::new();
    for record in records {
        let mut first = true;
        for value in record.fields.values() {
            if !first {
                out.push(FIELD_SEPARATOR);
            }
            out.push_str(value);
            first = false;
        }
        out.push('\n');
    }
    out
}
