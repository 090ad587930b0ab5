//! Line-oriented `NAME VALUE` record parser.
//!
//! Used for both node lists (`NAME CAPACITY`) and file lists
//! (`NAME SIZE`). Lines starting with `#` and blank lines are skipped;
//! every other line must be exactly one name, one space, one
//! non-negative finite number. The first bad line aborts the parse.

use serde::{Deserialize, Serialize};

use crate::error::MalformedRecord;

/// One parsed `(name, value)` pair, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub value: f64,
}

impl Record {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Parse raw text into records, preserving input order.
///
/// Accepts `\n` and `\r\n` terminators. No deduplication or sorting.
pub fn parse_records(text: &str) -> Result<Vec<Record>, MalformedRecord> {
    let mut records = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }
        records.push(parse_line(idx + 1, line)?);
    }

    tracing::debug!(count = records.len(), "Parsed records");
    Ok(records)
}

fn parse_line(line_no: usize, line: &str) -> Result<Record, MalformedRecord> {
    let malformed = |reason: &'static str| MalformedRecord {
        line: line_no,
        content: line.to_string(),
        reason,
    };

    let (name, value) = line
        .split_once(' ')
        .ok_or_else(|| malformed("missing space separator"))?;
    if value.contains(' ') {
        return Err(malformed("too many fields"));
    }
    if name.is_empty() {
        return Err(malformed("empty name"));
    }

    let value: f64 = value
        .parse()
        .map_err(|_| malformed("value is not a number"))?;
    if !value.is_finite() || value < 0.0 {
        return Err(malformed("value must be a finite non-negative number"));
    }

    Ok(Record::new(name, value))
}
