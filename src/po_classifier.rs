// WHY: PO extraction and the five-rule battery are the only branching logic in
// a scan; patterns are compiled once and reused for every record

use anyhow::Result;
use regex_automata::meta::Regex;
use serde::Serialize;
use tracing::{debug, info};

use crate::segmenter::{trim_line, Record};

/// Prefix of the L11 reference segment that may carry a PO number
pub const PO_SEGMENT_PREFIX: &str = "L11^";
/// Suffix marking an L11 segment whose qualifier is `PO`
pub const PO_SEGMENT_SUFFIX: &str = "^PO~";
/// Longest PO value (in characters) that is not flagged for length
pub const MAX_PO_LENGTH: usize = 20;

const EXPLICIT_PREFIX: &str = "PO-";
const NUMERIC_ALPHA_SUFFIX_PATTERN: &str = r"^.+-\d+-[A-Za-z]+$";
const SAFE_CHARSET_PATTERN: &str = r"^[A-Za-z0-9\-/]+$";

/// Extract the PO value from the first well-formed `L11^...^PO~` line.
///
/// A qualifying line with fewer than three caret-separated fields is skipped
/// and scanning continues with the next line.
pub fn extract_po(record: &Record) -> Option<&str> {
    record.lines().iter().find_map(|line| {
        let line = trim_line(line);
        if !(line.starts_with(PO_SEGMENT_PREFIX) && line.ends_with(PO_SEGMENT_SUFFIX)) {
            return None;
        }

        let fields: Vec<&str> = line.split('^').collect();
        if fields.len() >= 3 {
            Some(fields[1])
        } else {
            debug!("Skipping malformed PO segment: {}", line);
            None
        }
    })
}

/// One heuristic of the PO risk battery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PoRule {
    /// Value starts with the literal `PO-`
    ExplicitPrefix,
    /// Value ends in `-<digits>-<letters>` after at least one leading character
    NumericAlphaSuffix,
    /// Value contains a space
    EmbeddedSpace,
    /// Value is longer than [`MAX_PO_LENGTH`] characters
    ExcessLength,
    /// Value contains anything besides ASCII letters, digits, `-` and `/`
    UnsafeCharacter,
}

impl PoRule {
    /// Battery order
    pub const ALL: [PoRule; 5] = [
        PoRule::ExplicitPrefix,
        PoRule::NumericAlphaSuffix,
        PoRule::EmbeddedSpace,
        PoRule::ExcessLength,
        PoRule::UnsafeCharacter,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PoRule::ExplicitPrefix => "explicit-prefix",
            PoRule::NumericAlphaSuffix => "numeric-alpha-suffix",
            PoRule::EmbeddedSpace => "embedded-space",
            PoRule::ExcessLength => "excess-length",
            PoRule::UnsafeCharacter => "unsafe-character",
        }
    }
}

impl std::fmt::Display for PoRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Classifier holding the compiled pattern rules
#[derive(Debug, Clone)]
pub struct PoClassifier {
    numeric_alpha_suffix: Regex,
    safe_charset: Regex,
}

impl PoClassifier {
    pub fn new() -> Result<Self> {
        info!("Compiling PO classifier patterns");

        let numeric_alpha_suffix = Regex::new(NUMERIC_ALPHA_SUFFIX_PATTERN)?;
        let safe_charset = Regex::new(SAFE_CHARSET_PATTERN)?;

        debug!(
            "Compiled patterns: {} | {}",
            NUMERIC_ALPHA_SUFFIX_PATTERN, SAFE_CHARSET_PATTERN
        );

        Ok(Self {
            numeric_alpha_suffix,
            safe_charset,
        })
    }

    /// Evaluate a single rule against a PO value
    pub fn matches(&self, rule: PoRule, po: &str) -> bool {
        match rule {
            PoRule::ExplicitPrefix => po.starts_with(EXPLICIT_PREFIX),
            PoRule::NumericAlphaSuffix => self.numeric_alpha_suffix.is_match(po),
            PoRule::EmbeddedSpace => po.contains(' '),
            PoRule::ExcessLength => po.chars().count() > MAX_PO_LENGTH,
            PoRule::UnsafeCharacter => !self.safe_charset.is_match(po),
        }
    }

    /// A PO is problematic if any rule matches; an absent PO never is.
    pub fn is_problematic(&self, po: Option<&str>) -> bool {
        match po {
            Some(po) => PoRule::ALL.iter().any(|&rule| self.matches(rule, po)),
            None => false,
        }
    }

    /// Every rule the value trips, in battery order
    pub fn matched_rules(&self, po: &str) -> Vec<PoRule> {
        PoRule::ALL
            .into_iter()
            .filter(|&rule| self.matches(rule, po))
            .collect()
    }
}
