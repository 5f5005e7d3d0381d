use super::char_window;

/// Negation cues for English annual-report prose.
pub const ENGLISH_NEGATION_CUES: &[&str] = &[
    "do not provide",
    "does not provide",
    "did not provide",
    "do not offer",
    "does not offer",
    "did not offer",
    "no longer provide",
    "no longer offered",
    "we do not",
    "we don't",
    "does not include",
    "not available",
    "without providing",
];

/// Negation cues for Chinese annual-report prose ("does not provide",
/// "has not provided", "no longer provides").
pub const CHINESE_NEGATION_CUES: &[&str] = &["不提供", "未提供", "不再提供"];

/// How a match is tested for negation.
///
/// The two rules are deliberately different: the windowed rule fires on any
/// cue near the match, in either direction, while the prefix rule only fires
/// when a cue is glued directly in front of the phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NegationRule {
    /// Any cue anywhere within `window` characters either side of the match.
    Window,
    /// A cue immediately preceding the match (cue + phrase is a literal
    /// substring), compared case-insensitively.
    ///
    /// Scoped to the occurrence: a negated mention does not suppress a later,
    /// affirmative mention of the same phrase. This is narrower than checking
    /// whether cue + phrase appears anywhere in the text, which would drop
    /// every occurrence of the phrase.
    AdjacentPrefix,
}

impl NegationRule {
    /// Whether the occurrence at `start..end` of `text` should be suppressed.
    ///
    /// `window` is ignored by [`NegationRule::AdjacentPrefix`].
    pub fn is_suppressed(
        &self,
        text: &str,
        start: usize,
        end: usize,
        cues: &[String],
        window: usize,
    ) -> bool {
        match self {
            NegationRule::Window => negated_within_window(text, start, end, cues, window),
            NegationRule::AdjacentPrefix => negated_by_prefix(text, start, cues),
        }
    }
}

fn negated_within_window(text: &str, start: usize, end: usize, cues: &[String], window: usize) -> bool {
    let (lo, hi) = char_window(text, start, end, window, window);
    let context = text[lo..hi].to_lowercase();
    cues.iter().any(|cue| context.contains(cue.to_lowercase().as_str()))
}

fn negated_by_prefix(text: &str, start: usize, cues: &[String]) -> bool {
    let before = &text[..start];
    cues.iter().any(|cue| {
        let len = cue.chars().count();
        if len == 0 {
            return false;
        }
        match before.char_indices().rev().nth(len - 1) {
            Some((i, _)) => before[i..].to_lowercase() == cue.to_lowercase(),
            None => false,
        }
    })
}
