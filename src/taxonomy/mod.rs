//! The service-offering taxonomy: category ids, their types and phrase lists.
//!
//! - [`english`]: built-in dictionary for space-delimited text.
//! - [`chinese`]: built-in dictionary for unspaced (Chinese) text.
//!
//! A [`Taxonomy`] is validated and compiled once, then shared read-only by
//! every classifier built on it.

pub mod chinese;
pub mod english;

use std::collections::{HashMap, HashSet};

use serde::Deserialize;

use crate::engine::negation::{CHINESE_NEGATION_CUES, ENGLISH_NEGATION_CUES};
use crate::engine::pattern::{self, PhraseMatcher};
use crate::error::TaxonomyError;
use crate::models::{ScriptVariant, ServiceType};

/// Uncompiled category definition, as written in code or a config file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryDef {
    pub id: String,
    #[serde(rename = "type")]
    pub service_type: ServiceType,
    pub phrases: Vec<String>,
}

impl CategoryDef {
    pub fn new(id: &str, service_type: ServiceType, phrases: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            service_type,
            phrases: phrases.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// A validated category with its compiled matcher.
#[derive(Debug, Clone)]
pub struct Category {
    id: String,
    service_type: ServiceType,
    phrases: Vec<String>,
    matcher: PhraseMatcher,
}

impl Category {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn service_type(&self) -> ServiceType {
        self.service_type
    }

    /// Declared phrases, trimmed and de-duplicated, in declaration order.
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn matcher(&self) -> &PhraseMatcher {
        &self.matcher
    }
}

/// An immutable, compiled set of categories for one script variant.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    variant: ScriptVariant,
    categories: Vec<Category>,
    index: HashMap<String, usize>,
    types: HashMap<String, ServiceType>,
    negation_cues: Vec<String>,
}

impl Taxonomy {
    /// Built-in English dictionary, compiled for the spaced engine.
    pub fn english() -> Result<Self, TaxonomyError> {
        Self::build(ScriptVariant::Spaced, english::categories())
    }

    /// Built-in Chinese dictionary, compiled for the unspaced engine.
    pub fn chinese() -> Result<Self, TaxonomyError> {
        Self::build(ScriptVariant::Unspaced, chinese::categories())
    }

    /// Built-in dictionary for `variant`.
    pub fn builtin(variant: ScriptVariant) -> Result<Self, TaxonomyError> {
        match variant {
            ScriptVariant::Spaced => Self::english(),
            ScriptVariant::Unspaced => Self::chinese(),
        }
    }

    /// Validate and compile `defs` with the variant's default negation cues.
    pub fn build(variant: ScriptVariant, defs: Vec<CategoryDef>) -> Result<Self, TaxonomyError> {
        let cues = match variant {
            ScriptVariant::Spaced => ENGLISH_NEGATION_CUES,
            ScriptVariant::Unspaced => CHINESE_NEGATION_CUES,
        };
        Self::build_with_cues(
            variant,
            defs,
            cues.iter().map(|c| c.to_string()).collect(),
        )
    }

    /// Validate and compile `defs` with an explicit negation cue list.
    ///
    /// Fails on a duplicate id, a category without phrases, a blank phrase or
    /// a phrase list the regex engine refuses to compile.
    pub fn build_with_cues(
        variant: ScriptVariant,
        defs: Vec<CategoryDef>,
        negation_cues: Vec<String>,
    ) -> Result<Self, TaxonomyError> {
        let mut categories = Vec::with_capacity(defs.len());
        let mut index = HashMap::new();
        let mut types = HashMap::new();

        for def in defs {
            if index.contains_key(&def.id) {
                return Err(TaxonomyError::DuplicateCategory(def.id));
            }
            if def.phrases.is_empty() {
                return Err(TaxonomyError::EmptyCategory(def.id));
            }
            if def.phrases.iter().any(|p| p.trim().is_empty()) {
                return Err(TaxonomyError::BlankPhrase(def.id));
            }

            let matcher = pattern::compile(variant, &def.phrases).map_err(|source| {
                TaxonomyError::MalformedPattern {
                    category: def.id.clone(),
                    source,
                }
            })?;

            let mut seen = HashSet::new();
            let phrases = def
                .phrases
                .iter()
                .map(|p| p.trim().to_string())
                .filter(|p| seen.insert(p.to_lowercase()))
                .collect();

            index.insert(def.id.clone(), categories.len());
            types.insert(def.id.clone(), def.service_type);
            categories.push(Category {
                id: def.id,
                service_type: def.service_type,
                phrases,
                matcher,
            });
        }

        // kept verbatim: a trailing space can be part of an adjacent-prefix cue
        let negation_cues = negation_cues
            .into_iter()
            .filter(|c| !c.trim().is_empty())
            .collect();

        log::debug!("compiled {} taxonomy with {} categories", variant, categories.len());

        Ok(Self {
            variant,
            categories,
            index,
            types,
            negation_cues,
        })
    }

    pub fn variant(&self) -> ScriptVariant {
        self.variant
    }

    pub fn negation_cues(&self) -> &[String] {
        &self.negation_cues
    }

    pub fn get(&self, id: &str) -> Option<&Category> {
        self.index.get(id).map(|&i| &self.categories[i])
    }

    /// Categories in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Category id -> type, the input of [`risk::score`](crate::risk::score).
    pub fn category_types(&self) -> &HashMap<String, ServiceType> {
        &self.types
    }
}
