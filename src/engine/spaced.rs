use std::borrow::Cow;
use std::collections::BTreeMap;

use super::negation::NegationRule;
use super::roots::{NoRootForms, RootForms};
use super::{ClassifyOptions, Classifier};
use crate::models::{MatchEvent, ScriptVariant};
use crate::taxonomy::Taxonomy;

/// Evidence marker recorded when a category is detected by the root-form
/// fallback rather than by a phrase match.
pub const ROOT_FORM_MARKER: &str = "root_form::";

/// Classifier for space-delimited scripts (English).
///
/// Whitespace runs are collapsed before matching. Phrases match
/// case-insensitively between word boundaries, and a match is dropped when
/// any negation cue appears within `negation_window` characters of it.
pub struct SpacedClassifier<'a> {
    taxonomy: &'a Taxonomy,
    roots: Box<dyn RootForms + 'a>,
}

impl<'a> SpacedClassifier<'a> {
    /// Create a classifier with no root-form fallback capability.
    pub fn new(taxonomy: &'a Taxonomy) -> Self {
        Self::with_root_forms(taxonomy, NoRootForms)
    }

    /// Create a classifier whose fallback pass draws on `roots`.
    pub fn with_root_forms(taxonomy: &'a Taxonomy, roots: impl RootForms + 'a) -> Self {
        Self {
            taxonomy,
            roots: Box::new(roots),
        }
    }
}

/// Collapse every whitespace run to a single space and trim the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

impl Classifier for SpacedClassifier<'_> {
    fn variant(&self) -> ScriptVariant {
        ScriptVariant::Spaced
    }

    fn taxonomy(&self) -> &Taxonomy {
        self.taxonomy
    }

    fn prepare<'t>(&self, text: &'t str) -> Cow<'t, str> {
        Cow::Owned(normalize_whitespace(text))
    }

    fn scan(&self, prepared: &str, options: &ClassifyOptions) -> Vec<MatchEvent> {
        let cues = self.taxonomy.negation_cues();
        let mut events = Vec::new();

        for category in self.taxonomy.iter() {
            for m in category.matcher().find_all(prepared) {
                let negated = NegationRule::Window.is_suppressed(
                    prepared,
                    m.start,
                    m.end,
                    cues,
                    options.negation_window,
                );
                events.push(MatchEvent {
                    category: category.id().to_string(),
                    start: m.start,
                    end: m.end,
                    phrase: m.phrase,
                    negated,
                });
            }
        }

        events
    }

    fn fallback(
        &self,
        prepared: &str,
        flags: &mut BTreeMap<String, u8>,
        evidence: &mut BTreeMap<String, Vec<String>>,
    ) {
        let roots = self.roots.root_forms(prepared);
        if roots.is_empty() {
            return;
        }

        for category in self.taxonomy.iter() {
            if flags.get(category.id()).copied().unwrap_or(0) == 1 {
                continue;
            }
            let hit = category
                .phrases()
                .iter()
                .find(|p| !p.contains(' ') && roots.contains(&p.to_lowercase()));
            if let Some(phrase) = hit {
                log::debug!("root-form fallback detected `{}` via `{}`", category.id(), phrase);
                flags.insert(category.id().to_string(), 1);
                evidence
                    .entry(category.id().to_string())
                    .or_default()
                    .push(format!("{}{}", ROOT_FORM_MARKER, phrase));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::models::ServiceType;
    use crate::taxonomy::CategoryDef;

    struct FixedRoots(&'static [&'static str]);

    impl RootForms for FixedRoots {
        fn root_forms(&self, _text: &str) -> HashSet<String> {
            self.0.iter().map(|s| s.to_string()).collect()
        }
    }

    fn small_taxonomy() -> Taxonomy {
        Taxonomy::build(
            ScriptVariant::Spaced,
            vec![
                CategoryDef::new("generic", ServiceType::Complementing, &["service"]),
                CategoryDef::new("hotline", ServiceType::Complementing, &["service hotline"]),
                CategoryDef::new("leasing", ServiceType::Substituting, &["lease", "leasing"]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("  a\n\tb   c  "), "a b c");
        assert_eq!(normalize_whitespace(" \n "), "");
    }

    #[test]
    fn test_cross_category_independence() {
        let taxonomy = small_taxonomy();
        let classifier = SpacedClassifier::new(&taxonomy);
        let mut options = ClassifyOptions::for_variant(ScriptVariant::Spaced);
        options.evidence_window = 0;

        let result = classifier.classify("call our service hotline for help", &options);
        assert_eq!(result.flags["generic"], 1);
        assert_eq!(result.flags["hotline"], 1);
        assert_eq!(result.evidence["hotline"], vec!["service hotline"]);
        assert_eq!(result.evidence["generic"], vec!["service"]);
    }

    #[test]
    fn test_evidence_keeps_original_case() {
        let taxonomy = small_taxonomy();
        let classifier = SpacedClassifier::new(&taxonomy);
        let mut options = ClassifyOptions::for_variant(ScriptVariant::Spaced);
        options.evidence_window = 4;

        let result = classifier.classify("Our  LEASING\nbusiness grew", &options);
        assert_eq!(result.evidence["leasing"], vec!["Our LEASING bus"]);
    }

    #[test]
    fn test_evidence_in_occurrence_order() {
        let taxonomy = small_taxonomy();
        let classifier = SpacedClassifier::new(&taxonomy);
        let mut options = ClassifyOptions::for_variant(ScriptVariant::Spaced);
        options.evidence_window = 0;

        let result = classifier.classify("Leasing first, then a lease, then LEASE.", &options);
        assert_eq!(result.evidence["leasing"], vec!["Leasing", "lease", "LEASE"]);
    }

    #[test]
    fn test_negated_occurrence_does_not_stall_scan() {
        let taxonomy = small_taxonomy();
        let classifier = SpacedClassifier::new(&taxonomy);
        let mut options = ClassifyOptions::for_variant(ScriptVariant::Spaced);
        options.negation_window = 10;
        options.evidence_window = 0;

        let text = "we do not lease trucks. Machines are available for lease.";
        let result = classifier.classify(text, &options);
        assert_eq!(result.flags["leasing"], 1);
        assert_eq!(result.evidence["leasing"], vec!["lease"]);
    }

    #[test]
    fn test_fallback_off_by_default() {
        let taxonomy = small_taxonomy();
        let classifier = SpacedClassifier::with_root_forms(&taxonomy, FixedRoots(&["lease"]));
        let options = ClassifyOptions::for_variant(ScriptVariant::Spaced);

        let result = classifier.classify("machines were leased", &options);
        assert_eq!(result.flags["leasing"], 0);
    }

    #[test]
    fn test_fallback_sets_flag_with_marker() {
        let taxonomy = small_taxonomy();
        let classifier = SpacedClassifier::with_root_forms(&taxonomy, FixedRoots(&["lease"]));
        let mut options = ClassifyOptions::for_variant(ScriptVariant::Spaced);
        options.use_fallback = true;

        let result = classifier.classify("machines were leased", &options);
        assert_eq!(result.flags["leasing"], 1);
        assert_eq!(result.evidence["leasing"], vec!["root_form::lease"]);
        // multi-word phrases never take part in the fallback
        assert_eq!(result.flags["hotline"], 0);
    }

    #[test]
    fn test_fallback_never_touches_detected_categories() {
        let taxonomy = small_taxonomy();
        let classifier = SpacedClassifier::with_root_forms(&taxonomy, FixedRoots(&["lease", "service"]));
        let mut options = ClassifyOptions::for_variant(ScriptVariant::Spaced);
        options.use_fallback = true;
        options.evidence_window = 0;

        let result = classifier.classify("a lease", &options);
        assert_eq!(result.evidence["leasing"], vec!["lease"]);
        assert_eq!(result.evidence["generic"], vec!["root_form::service"]);
    }

    #[test]
    fn test_scan_reports_negated_events() {
        let taxonomy = small_taxonomy();
        let classifier = SpacedClassifier::new(&taxonomy);
        let options = ClassifyOptions::for_variant(ScriptVariant::Spaced);

        let events = classifier.scan("We do not offer leasing.", &options);
        assert_eq!(events.len(), 1);
        assert!(events[0].negated);
        assert_eq!(events[0].phrase, "leasing");
    }
}
