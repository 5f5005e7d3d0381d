use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// How a service category relates to the product-sale revenue model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    /// Adds to product sales without replacing them.
    Complementing,
    /// Replaces a product-sale revenue model (leasing instead of selling, ...).
    Substituting,
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceType::Complementing => write!(f, "complementing"),
            ServiceType::Substituting => write!(f, "substituting"),
        }
    }
}

/// Script family of the text being classified.
///
/// Selects the matching strategy: word-boundary regexes with a windowed
/// negation check for space-delimited scripts, raw substring search with an
/// adjacent-prefix negation check for scripts without spaces between words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptVariant {
    Spaced,
    Unspaced,
}

impl std::fmt::Display for ScriptVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScriptVariant::Spaced => write!(f, "spaced"),
            ScriptVariant::Unspaced => write!(f, "unspaced"),
        }
    }
}

/// A single phrase occurrence found while scanning one text.
///
/// `start`/`end` are byte offsets into the prepared text the classifier
/// scanned (whitespace-normalized for the spaced engine, raw otherwise).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchEvent {
    pub category: String,
    pub start: usize,
    pub end: usize,
    pub phrase: String,
    pub negated: bool,
}

/// Counts and score derived from a set of category flags.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RiskSummary {
    pub service_num: usize,
    pub comp_count: usize,
    pub sub_count: usize,
    pub risk_score: f64,
}

/// Outcome of classifying one text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Every category of the taxonomy, `1` when detected, `0` otherwise.
    pub flags: BTreeMap<String, u8>,
    /// Evidence snippets for detected categories only, in first-occurrence order.
    pub evidence: BTreeMap<String, Vec<String>>,
    #[serde(flatten)]
    pub summary: RiskSummary,
}

impl ClassificationResult {
    /// Ids of the categories whose flag is set.
    pub fn detected(&self) -> impl Iterator<Item = &str> {
        self.flags
            .iter()
            .filter(|(_, v)| **v == 1)
            .map(|(k, _)| k.as_str())
    }
}

/// One company-year of a batch run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyYearRow {
    pub company: String,
    pub year: i32,
    #[serde(flatten)]
    pub result: ClassificationResult,
}
