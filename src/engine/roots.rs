use std::collections::HashSet;

/// Supplies normalized root forms (lemmas) of the words in a text.
///
/// Used by the spaced engine's optional fallback pass: a single-word phrase
/// whose lower-cased form is in the set counts as a detection.
pub trait RootForms: Send + Sync {
    fn root_forms(&self, text: &str) -> HashSet<String>;
}

/// The default provider: yields nothing, so the fallback never fires.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoRootForms;

impl RootForms for NoRootForms {
    fn root_forms(&self, _text: &str) -> HashSet<String> {
        HashSet::new()
    }
}

/// A dictionary-free provider for English.
///
/// Lower-cases alphabetic words and strips regular inflections
/// (`repairs` -> `repair`, `leased` -> `lease`, `recycling` -> `recycle`).
/// Irregular forms are left alone. Both the surface form and the stripped
/// form are included.
#[derive(Debug, Default, Clone, Copy)]
pub struct InflectionRoots;

/// Function words that never carry a category on their own.
const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "in", "is", "it", "of",
    "on", "or", "our", "that", "the", "their", "this", "to", "we", "with",
];

impl RootForms for InflectionRoots {
    fn root_forms(&self, text: &str) -> HashSet<String> {
        let mut roots = HashSet::new();
        for word in text
            .split(|c: char| !c.is_alphabetic())
            .filter(|w| !w.is_empty())
        {
            let word = word.to_lowercase();
            if STOP_WORDS.contains(&word.as_str()) {
                continue;
            }
            for root in strip_inflection(&word) {
                roots.insert(root);
            }
            roots.insert(word);
        }
        roots
    }
}

fn strip_inflection(word: &str) -> Vec<String> {
    let mut roots = Vec::new();
    if let Some(stem) = word.strip_suffix("ies").filter(|s| s.chars().count() >= 2) {
        roots.push(format!("{}y", stem));
    } else if let Some(stem) = word.strip_suffix("ing").filter(|s| s.chars().count() >= 3) {
        roots.push(stem.to_string());
        roots.push(format!("{}e", stem));
    } else if let Some(stem) = word.strip_suffix("ed").filter(|s| s.chars().count() >= 3) {
        roots.push(stem.to_string());
        roots.push(format!("{}e", stem));
    } else if let Some(stem) = word.strip_suffix("es").filter(|s| s.chars().count() >= 3) {
        roots.push(stem.to_string());
        roots.push(format!("{}e", stem));
    } else if let Some(stem) = word
        .strip_suffix('s')
        .filter(|s| s.chars().count() >= 3 && !s.ends_with('s'))
    {
        roots.push(stem.to_string());
    }
    roots
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_root_forms_is_empty() {
        assert!(NoRootForms.root_forms("Repairs and leases").is_empty());
    }

    #[test]
    fn test_inflection_roots() {
        let roots = InflectionRoots.root_forms("The company leased machines, offered repairs and recycling.");
        assert!(roots.contains("lease"));
        assert!(roots.contains("repair"));
        assert!(roots.contains("recycle"));
        assert!(roots.contains("machine"));
        assert!(!roots.contains("the"));
    }

    #[test]
    fn test_inflection_roots_keeps_double_s() {
        let roots = InflectionRoots.root_forms("business");
        assert!(roots.contains("business"));
        assert!(!roots.contains("busines"));
    }
}
