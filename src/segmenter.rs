// WHY: record grouping is the first pass of every scan; it must never drop,
// duplicate or reorder lines, so the whole input is preserved across records

use serde::Serialize;
use tracing::debug;

/// Prefix that opens a new record (the S5 stop-off segment)
pub const RECORD_START_MARKER: &str = "S5^";

/// An ordered, non-empty group of trimmed lines starting at a record marker
/// (or holding the lines seen before the first marker).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Record {
    lines: Vec<String>,
}

impl Record {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn first_line(&self) -> &str {
        // Records are only built from non-empty accumulators
        self.lines.first().map(String::as_str).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// True when the record was opened by an `S5^` marker line
    pub fn starts_with_marker(&self) -> bool {
        is_record_start(self.first_line())
    }
}

/// Strip surrounding whitespace from a line, including the ASCII
/// file/group/record/unit separators (`\x1c`..=`\x1f`) that some X12
/// producers leave at segment ends.
pub fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
}

/// Check whether a trimmed line opens a new record
pub fn is_record_start(line: &str) -> bool {
    line.starts_with(RECORD_START_MARKER)
}

/// Group raw lines into records.
///
/// Every line is trimmed before use. A marker line seals the record in
/// progress and starts a new one; any other line is appended to the current
/// record, so lines before the first marker form a record of their own.
pub fn segment_records<I, S>(lines: I) -> Vec<Record>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut records = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for line in lines {
        let line = trim_line(line.as_ref());

        if is_record_start(line) && !current.is_empty() {
            records.push(Record {
                lines: std::mem::take(&mut current),
            });
        }
        current.push(line.to_string());
    }

    if !current.is_empty() {
        records.push(Record { lines: current });
    }

    debug!("Segmented input into {} records", records.len());
    records
}
