use std::collections::HashSet;

use regex::{Regex, RegexBuilder};

use crate::models::ScriptVariant;

/// A compiled matcher for one category's phrase list.
///
/// Built once when the taxonomy is loaded and shared by every classify call.
#[derive(Debug, Clone)]
pub enum PhraseMatcher {
    /// One case-insensitive alternation, longest phrase first, anchored by
    /// `\b` on both sides. At any position the longest phrase wins.
    Bounded(Regex),
    /// One case-insensitive literal per phrase, no boundary assertions.
    /// Phrases fire independently, so a short phrase may also match inside a
    /// longer one.
    Literal(Vec<LiteralPhrase>),
}

#[derive(Debug, Clone)]
pub struct LiteralPhrase {
    pub phrase: String,
    regex: Regex,
}

/// A raw occurrence reported by a [`PhraseMatcher`], before negation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseMatch {
    pub start: usize,
    pub end: usize,
    pub phrase: String,
}

/// Trim, de-duplicate (case-insensitively, first spelling kept) and order
/// phrases longest-first. Ties keep their declaration order.
pub fn order_longest_first(phrases: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut ordered: Vec<String> = phrases
        .iter()
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty() && seen.insert(p.to_lowercase()))
        .collect();
    ordered.sort_by_key(|p| std::cmp::Reverse(p.chars().count()));
    ordered
}

/// Compile a phrase list with the strategy of the given script variant.
pub fn compile(variant: ScriptVariant, phrases: &[String]) -> Result<PhraseMatcher, regex::Error> {
    let ordered = order_longest_first(phrases);
    if ordered.is_empty() {
        return Ok(PhraseMatcher::Literal(Vec::new()));
    }

    match variant {
        ScriptVariant::Spaced => {
            let alternation = ordered
                .iter()
                .map(|p| regex::escape(&p.to_lowercase()))
                .collect::<Vec<_>>()
                .join("|");
            let regex = RegexBuilder::new(&format!(r"\b(?:{})\b", alternation))
                .case_insensitive(true)
                .build()?;
            Ok(PhraseMatcher::Bounded(regex))
        }
        ScriptVariant::Unspaced => {
            let literals = ordered
                .into_iter()
                .map(|phrase| -> Result<LiteralPhrase, regex::Error> {
                    let regex = RegexBuilder::new(&regex::escape(&phrase))
                        .case_insensitive(true)
                        .build()?;
                    Ok(LiteralPhrase { phrase, regex })
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(PhraseMatcher::Literal(literals))
        }
    }
}

impl PhraseMatcher {
    /// All occurrences in `text`.
    ///
    /// `Bounded` yields non-overlapping matches left to right. `Literal` yields
    /// each phrase's non-overlapping matches in turn, so the result is grouped
    /// by phrase (longest first) rather than sorted by position.
    pub fn find_all(&self, text: &str) -> Vec<PhraseMatch> {
        match self {
            PhraseMatcher::Bounded(regex) => regex
                .find_iter(text)
                .map(|m| PhraseMatch {
                    start: m.start(),
                    end: m.end(),
                    phrase: m.as_str().to_lowercase(),
                })
                .collect(),
            PhraseMatcher::Literal(literals) => literals
                .iter()
                .flat_map(|lit| {
                    lit.regex.find_iter(text).map(move |m| PhraseMatch {
                        start: m.start(),
                        end: m.end(),
                        phrase: lit.phrase.clone(),
                    })
                })
                .collect(),
        }
    }
}
