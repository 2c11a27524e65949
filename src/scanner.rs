// WHY: ties segmentation and classification together so every caller (CLI,
// tests, benches) runs the exact same pipeline over an in-memory line set

use serde::Serialize;
use tracing::{debug, info};

use crate::po_classifier::{extract_po, PoClassifier, PoRule};
use crate::segmenter::{segment_records, Record};

/// A record whose PO value tripped at least one rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlaggedEntry {
    /// 1-based position of the record in the input
    pub index: usize,
    pub po_value: String,
    pub rules: Vec<PoRule>,
    #[serde(rename = "lines")]
    pub record: Record,
}

/// Outcome of scanning one input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub records_scanned: usize,
    pub flagged: Vec<FlaggedEntry>,
}

impl ScanReport {
    pub fn has_problems(&self) -> bool {
        !self.flagged.is_empty()
    }
}

/// Classify already segmented records, keeping encounter order
pub fn scan_records(classifier: &PoClassifier, records: Vec<Record>) -> ScanReport {
    let records_scanned = records.len();
    let mut flagged = Vec::new();

    for (idx, record) in records.into_iter().enumerate() {
        let index = idx + 1;
        let Some(po) = extract_po(&record) else {
            debug!("Record #{} has no PO value", index);
            continue;
        };

        if !classifier.is_problematic(Some(po)) {
            continue;
        }

        let po_value = po.to_string();
        let rules = classifier.matched_rules(&po_value);
        debug!(index, po = %po_value, ?rules, "Flagged record");

        flagged.push(FlaggedEntry {
            index,
            po_value,
            rules,
            record,
        });
    }

    info!(
        "Scanned {} records, {} flagged",
        records_scanned,
        flagged.len()
    );

    ScanReport {
        records_scanned,
        flagged,
    }
}

/// Segment raw lines and classify every resulting record
pub fn scan_lines<I, S>(classifier: &PoClassifier, lines: I) -> ScanReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    scan_records(classifier, segment_records(lines))
}
