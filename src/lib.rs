pub mod error;
pub mod po_classifier;
pub mod reader;
pub mod report;
pub mod scanner;
pub mod segmenter;

// Re-export main types for convenient access
pub use error::ScanError;
pub use po_classifier::{extract_po, PoClassifier, PoRule};
pub use scanner::{scan_lines, scan_records, FlaggedEntry, ScanReport};
pub use segmenter::{segment_records, Record};
