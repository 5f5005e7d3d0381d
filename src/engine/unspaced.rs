use std::borrow::Cow;

use super::negation::NegationRule;
use super::{ClassifyOptions, Classifier};
use crate::models::{MatchEvent, ScriptVariant};
use crate::taxonomy::Taxonomy;

/// Classifier for scripts written without spaces between words (Chinese).
///
/// The raw text is searched for each phrase as a plain substring; there is no
/// whitespace normalization and no word-boundary check, so a short phrase can
/// fire inside a longer one. A match is negated only when a cue sits directly
/// in front of it.
pub struct UnspacedClassifier<'a> {
    taxonomy: &'a Taxonomy,
}

impl<'a> UnspacedClassifier<'a> {
    pub fn new(taxonomy: &'a Taxonomy) -> Self {
        Self { taxonomy }
    }
}

impl Classifier for UnspacedClassifier<'_> {
    fn variant(&self) -> ScriptVariant {
        ScriptVariant::Unspaced
    }

    fn taxonomy(&self) -> &Taxonomy {
        self.taxonomy
    }

    fn prepare<'t>(&self, text: &'t str) -> Cow<'t, str> {
        Cow::Borrowed(text)
    }

    fn scan(&self, prepared: &str, options: &ClassifyOptions) -> Vec<MatchEvent> {
        let cues = self.taxonomy.negation_cues();
        let mut events = Vec::new();

        for category in self.taxonomy.iter() {
            let mut found = category.matcher().find_all(prepared);
            // phrase-grouped -> positional; the longer phrase first on a tie
            found.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

            events.extend(found.into_iter().map(|m| MatchEvent {
                category: category.id().to_string(),
                negated: NegationRule::AdjacentPrefix.is_suppressed(
                    prepared,
                    m.start,
                    m.end,
                    cues,
                    options.negation_window,
                ),
                start: m.start,
                end: m.end,
                phrase: m.phrase,
            }));
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ServiceType;
    use crate::taxonomy::CategoryDef;

    fn small_taxonomy() -> Taxonomy {
        Taxonomy::build(
            ScriptVariant::Unspaced,
            vec![
                CategoryDef::new("repair", ServiceType::Complementing, &["维修", "维修服务"]),
                CategoryDef::new("leasing", ServiceType::Substituting, &["租赁", "lease"]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_substring_without_boundaries() {
        let taxonomy = small_taxonomy();
        let classifier = UnspacedClassifier::new(&taxonomy);
        let options = ClassifyOptions::for_variant(ScriptVariant::Unspaced);

        let result = classifier.classify("the release process was smooth", &options);
        assert_eq!(result.flags["leasing"], 1);
    }

    #[test]
    fn test_overlapping_phrases_both_recorded() {
        let taxonomy = small_taxonomy();
        let classifier = UnspacedClassifier::new(&taxonomy);
        let mut options = ClassifyOptions::for_variant(ScriptVariant::Unspaced);
        options.evidence_window = 0;

        let result = classifier.classify("公司提供维修服务", &options);
        assert_eq!(result.flags["repair"], 1);
        assert_eq!(result.evidence["repair"], vec!["维修服务", "维修"]);
    }

    #[test]
    fn test_adjacent_negation() {
        let taxonomy = small_taxonomy();
        let classifier = UnspacedClassifier::new(&taxonomy);
        let options = ClassifyOptions::for_variant(ScriptVariant::Unspaced);

        let result = classifier.classify("本公司不提供租赁", &options);
        assert_eq!(result.flags["leasing"], 0);
        assert!(result.evidence.is_empty());

        // a cue that is not glued to the phrase does not negate it
        let result = classifier.classify("本公司不提供融资，但开展设备租赁", &options);
        assert_eq!(result.flags["leasing"], 1);
    }

    #[test]
    fn test_negation_is_local_to_the_occurrence() {
        let taxonomy = small_taxonomy();
        let classifier = UnspacedClassifier::new(&taxonomy);
        let mut options = ClassifyOptions::for_variant(ScriptVariant::Unspaced);
        options.evidence_window = 2;

        let result = classifier.classify("不提供租赁。现有租赁业务", &options);
        assert_eq!(result.flags["leasing"], 1);
        assert_eq!(result.evidence["leasing"], vec!["现有租赁业务"]);
    }

    #[test]
    fn test_evidence_cap() {
        let taxonomy = small_taxonomy();
        let classifier = UnspacedClassifier::new(&taxonomy);
        let mut options = ClassifyOptions::for_variant(ScriptVariant::Unspaced);
        options.max_evidence_per_category = Some(3);

        let text = "租赁。".repeat(10);
        let result = classifier.classify(&text, &options);
        assert_eq!(result.flags["leasing"], 1);
        assert_eq!(result.evidence["leasing"].len(), 3);
    }

    #[test]
    fn test_newlines_flattened_in_snippets() {
        let taxonomy = small_taxonomy();
        let classifier = UnspacedClassifier::new(&taxonomy);
        let mut options = ClassifyOptions::for_variant(ScriptVariant::Unspaced);
        options.evidence_window = 3;

        let result = classifier.classify("业务一\n设备租赁\n其他", &options);
        // flattened but not trimmed
        assert_eq!(result.evidence["leasing"], vec![" 设备租赁 其他"]);
    }

    #[test]
    fn test_configured_cue_with_trailing_space() {
        let taxonomy = Taxonomy::build_with_cues(
            ScriptVariant::Unspaced,
            vec![CategoryDef::new("leasing", ServiceType::Substituting, &["lease"])],
            vec!["no ".to_string()],
        )
        .unwrap();
        let classifier = UnspacedClassifier::new(&taxonomy);
        let options = ClassifyOptions::for_variant(ScriptVariant::Unspaced);

        assert_eq!(classifier.classify("no LEASE", &options).flags["leasing"], 0);
        assert_eq!(classifier.classify("NO lease", &options).flags["leasing"], 0);
        assert_eq!(classifier.classify("we lease", &options).flags["leasing"], 1);
    }
}
