//! Keyword-matching classification engines.
//!
//! - [`pattern`] compiles a category's phrase list into a [`PhraseMatcher`](pattern::PhraseMatcher).
//! - [`negation`] decides whether an occurrence is negated by nearby cues.
//! - [`spaced`] / [`unspaced`] are the two [`Classifier`] implementations,
//!   one per [`ScriptVariant`].
//! - [`roots`] is the pluggable root-form capability behind the optional
//!   fallback pass.
//!
//! Both engines share the evidence and scoring mechanics in
//! [`Classifier::classify`]; they differ only in text preparation, boundary
//! handling and negation strategy.

pub mod negation;
pub mod pattern;
pub mod roots;
pub mod spaced;
pub mod unspaced;

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{ClassificationResult, MatchEvent, ScriptVariant};
use crate::risk;
use crate::taxonomy::Taxonomy;

pub use spaced::SpacedClassifier;
pub use unspaced::UnspacedClassifier;

/// Per-call classification settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifyOptions {
    /// Characters kept on each side of a match in an evidence snippet.
    pub evidence_window: usize,
    /// Run the root-form fallback for categories left undetected (spaced only).
    pub use_fallback: bool,
    /// Characters searched on each side of a match for negation cues (spaced only).
    pub negation_window: usize,
    /// Maximum snippets kept per category; `None` keeps all of them.
    pub max_evidence_per_category: Option<usize>,
}

impl ClassifyOptions {
    /// Defaults for the given script variant.
    pub fn for_variant(variant: ScriptVariant) -> Self {
        match variant {
            ScriptVariant::Spaced => ClassifyOptions {
                evidence_window: 200,
                use_fallback: false,
                negation_window: 80,
                max_evidence_per_category: None,
            },
            ScriptVariant::Unspaced => ClassifyOptions {
                evidence_window: 60,
                use_fallback: false,
                negation_window: 80,
                max_evidence_per_category: Some(20),
            },
        }
    }
}

/// A text classifier bound to one immutable [`Taxonomy`].
///
/// Implementations supply text preparation and scanning; the provided
/// [`classify`](Classifier::classify) turns match events into flags, evidence
/// and the risk summary. Classification is total: any input string, including
/// an empty one, yields a well-formed result.
pub trait Classifier: Send + Sync {
    fn variant(&self) -> ScriptVariant;

    fn taxonomy(&self) -> &Taxonomy;

    /// The text that spans and snippets refer to.
    fn prepare<'t>(&self, text: &'t str) -> Cow<'t, str>;

    /// Every occurrence of every category phrase in `prepared`, negated ones
    /// included (with `negated` set). Within a category, events are ordered by
    /// position.
    fn scan(&self, prepared: &str, options: &ClassifyOptions) -> Vec<MatchEvent>;

    /// Second-chance detection for categories the scan left at 0.
    ///
    /// Must only ever set flags, never clear them.
    fn fallback(
        &self,
        _prepared: &str,
        _flags: &mut BTreeMap<String, u8>,
        _evidence: &mut BTreeMap<String, Vec<String>>,
    ) {
    }

    fn classify(&self, text: &str, options: &ClassifyOptions) -> ClassificationResult {
        let prepared = self.prepare(text);
        let taxonomy = self.taxonomy();

        let mut flags: BTreeMap<String, u8> = taxonomy.ids().map(|id| (id.to_string(), 0)).collect();
        let mut evidence: BTreeMap<String, Vec<String>> = BTreeMap::new();

        for event in self.scan(&prepared, options) {
            if event.negated {
                continue;
            }
            flags.insert(event.category.clone(), 1);

            let snippets = evidence.entry(event.category).or_default();
            if options
                .max_evidence_per_category
                .is_some_and(|cap| snippets.len() >= cap)
            {
                continue;
            }
            snippets.push(snippet(
                &prepared,
                event.start,
                event.end,
                options.evidence_window,
                self.variant() == ScriptVariant::Spaced,
            ));
        }
        evidence.retain(|_, snippets| !snippets.is_empty());

        if options.use_fallback {
            self.fallback(&prepared, &mut flags, &mut evidence);
        }

        let summary = risk::score(&flags, taxonomy.category_types());
        ClassificationResult { flags, evidence, summary }
    }
}

/// Pick the engine matching the taxonomy's script variant.
pub fn classifier_for(taxonomy: &Taxonomy) -> Box<dyn Classifier + '_> {
    match taxonomy.variant() {
        ScriptVariant::Spaced => Box::new(SpacedClassifier::new(taxonomy)),
        ScriptVariant::Unspaced => Box::new(UnspacedClassifier::new(taxonomy)),
    }
}

/// Byte range covering up to `before` characters ahead of `start` and up to
/// `after` characters past `end`, clamped to the text.
pub(crate) fn char_window(text: &str, start: usize, end: usize, before: usize, after: usize) -> (usize, usize) {
    let lo = text[..start]
        .char_indices()
        .rev()
        .take(before)
        .last()
        .map(|(i, _)| i)
        .unwrap_or(start);
    let hi = text[end..]
        .char_indices()
        .nth(after)
        .map(|(i, _)| end + i)
        .unwrap_or(text.len());
    (lo, hi)
}

/// Evidence excerpt around `start..end` with line breaks flattened.
///
/// Spaced snippets are also trimmed; unspaced ones keep their edges.
fn snippet(text: &str, start: usize, end: usize, window: usize, trim: bool) -> String {
    let (lo, hi) = char_window(text, start, end, window, window);
    let flat = text[lo..hi].replace(['\r', '\n'], " ");
    if trim {
        flat.trim().to_string()
    } else {
        flat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_window_ascii() {
        let text = "0123456789";
        assert_eq!(char_window(text, 4, 6, 2, 2), (2, 8));
        assert_eq!(char_window(text, 1, 2, 5, 50), (0, 10));
        assert_eq!(char_window(text, 4, 6, 0, 0), (4, 6));
    }

    #[test]
    fn test_char_window_multibyte() {
        let text = "公司提供维修服务";
        let start = text.find("维修").unwrap();
        let end = start + "维修".len();
        let (lo, hi) = char_window(text, start, end, 2, 1);
        assert_eq!(&text[lo..hi], "提供维修服");
    }

    #[test]
    fn test_snippet_flattens_newlines() {
        let text = "line one\nrepair\r\nline three";
        let start = text.find("repair").unwrap();
        assert_eq!(snippet(text, start, start + 6, 100, true), "line one repair  line three");
    }

    #[test]
    fn test_snippet_trim_is_optional() {
        let text = "业务\n租赁\n";
        let start = text.find("租赁").unwrap();
        let end = start + "租赁".len();
        assert_eq!(snippet(text, start, end, 1, false), " 租赁 ");
        assert_eq!(snippet(text, start, end, 1, true), "租赁");
    }

    #[test]
    fn test_default_options_per_variant() {
        let spaced = ClassifyOptions::for_variant(ScriptVariant::Spaced);
        assert_eq!(spaced.evidence_window, 200);
        assert_eq!(spaced.negation_window, 80);
        assert_eq!(spaced.max_evidence_per_category, None);
        assert!(!spaced.use_fallback);

        let unspaced = ClassifyOptions::for_variant(ScriptVariant::Unspaced);
        assert_eq!(unspaced.evidence_window, 60);
        assert_eq!(unspaced.max_evidence_per_category, Some(20));
    }
}
