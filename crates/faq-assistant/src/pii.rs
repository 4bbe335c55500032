//! Pre-flight screening for personal identifiers in user queries.
//!
//! Every rule is evaluated on every call; labels are reported in table order, never in the order
//! the matches appear in the text. Overlapping shapes (a 12-digit Aadhaar number is also a valid
//! account number) deliberately report every matching label.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Kinds of personal identifier recognized by the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PiiKind {
    #[serde(rename = "PAN")]
    Pan,
    #[serde(rename = "Aadhaar")]
    Aadhaar,
    #[serde(rename = "Account Number")]
    AccountNumber,
}

impl PiiKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pan => "PAN",
            Self::Aadhaar => "Aadhaar",
            Self::AccountNumber => "Account Number",
        }
    }
}

struct PiiRule {
    kind: PiiKind,
    pattern: Regex,
}

impl PiiRule {
    fn new(kind: PiiKind, pattern: &str) -> Self {
        let pattern = Regex::new(pattern).expect("PII pattern compiles");
        Self { kind, pattern }
    }

    fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

// ASCII digits and ASCII word boundaries only.
static RULES: LazyLock<Vec<PiiRule>> = LazyLock::new(|| {
    vec![
        PiiRule::new(PiiKind::Pan, r"[A-Z]{5}[0-9]{4}[A-Z]"),
        PiiRule::new(
            PiiKind::Aadhaar,
            r"(?-u:\b)[0-9]{4}\s?[0-9]{4}\s?[0-9]{4}(?-u:\b)",
        ),
        PiiRule::new(PiiKind::AccountNumber, r"(?-u:\b)[0-9]{9,18}(?-u:\b)"),
    ]
});

/// Outcome of screening a single query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PiiVerdict {
    #[serde(rename = "hasPII")]
    pub has_pii: bool,
    #[serde(rename = "detectedTypes")]
    pub detected_types: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl PiiVerdict {
    fn clean() -> Self {
        Self {
            has_pii: false,
            detected_types: Vec::new(),
            message: None,
        }
    }

    fn flagged(kinds: &[PiiKind]) -> Self {
        let detected_types: Vec<&'static str> = kinds.iter().map(|kind| kind.label()).collect();
        let message = format!(
            "Personal information detected: {}. Please remove personal information from your query.",
            detected_types.join(", ")
        );

        Self {
            has_pii: true,
            detected_types,
            message: Some(message),
        }
    }

    /// Detected kinds in rule order.
    pub fn kinds(&self) -> Vec<PiiKind> {
        RULES
            .iter()
            .map(|rule| rule.kind)
            .filter(|kind| self.detected_types.contains(&kind.label()))
            .collect()
    }

    pub fn contains(&self, kind: PiiKind) -> bool {
        self.detected_types.contains(&kind.label())
    }
}

/// Screen `text` against every rule.
pub fn detect(text: &str) -> PiiVerdict {
    let kinds: Vec<PiiKind> = RULES
        .iter()
        .filter(|rule| rule.matches(text))
        .map(|rule| rule.kind)
        .collect();

    if kinds.is_empty() {
        PiiVerdict::clean()
    } else {
        PiiVerdict::flagged(&kinds)
    }
}
