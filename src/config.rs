use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::engine::ClassifyOptions;
use crate::models::ScriptVariant;
use crate::taxonomy::{CategoryDef, Taxonomy};

/// Root configuration structure, deserialized from `.servitize/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Classification settings; unset fields take the script's defaults.
    #[serde(default)]
    pub options: OptionsConfig,
    /// Dictionary override for space-delimited text.
    pub spaced: Option<DictionaryConfig>,
    /// Dictionary override for unspaced text.
    pub unspaced: Option<DictionaryConfig>,
}

/// Optional overrides of [`ClassifyOptions`].
#[derive(Debug, Default, Clone, Deserialize)]
pub struct OptionsConfig {
    pub evidence_window: Option<usize>,
    pub use_fallback: Option<bool>,
    pub negation_window: Option<usize>,
    pub max_evidence_per_category: Option<usize>,
}

/// A full replacement dictionary for one script variant.
#[derive(Debug, Clone, Deserialize)]
pub struct DictionaryConfig {
    pub categories: Vec<CategoryDef>,
    /// Replaces the built-in negation cues when present.
    pub negation_cues: Option<Vec<String>>,
}

impl OptionsConfig {
    /// Apply the overrides on top of the defaults for `variant`.
    pub fn resolve(&self, variant: ScriptVariant) -> ClassifyOptions {
        let mut options = ClassifyOptions::for_variant(variant);
        if let Some(v) = self.evidence_window {
            options.evidence_window = v;
        }
        if let Some(v) = self.use_fallback {
            options.use_fallback = v;
        }
        if let Some(v) = self.negation_window {
            options.negation_window = v;
        }
        if let Some(v) = self.max_evidence_per_category {
            options.max_evidence_per_category = Some(v);
        }
        options
    }
}

impl Config {
    /// Build the taxonomy for `variant`: the configured dictionary if there
    /// is one, the built-in dictionary otherwise.
    pub fn taxonomy(&self, variant: ScriptVariant) -> Result<Taxonomy> {
        let dictionary = match variant {
            ScriptVariant::Spaced => self.spaced.as_ref(),
            ScriptVariant::Unspaced => self.unspaced.as_ref(),
        };

        let taxonomy = match dictionary {
            Some(dict) => match &dict.negation_cues {
                Some(cues) => Taxonomy::build_with_cues(variant, dict.categories.clone(), cues.clone()),
                None => Taxonomy::build(variant, dict.categories.clone()),
            },
            None => Taxonomy::builtin(variant),
        };

        taxonomy.with_context(|| format!("invalid {} dictionary", variant))
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override`: path passed via `--config`
/// 2. `<input_dir>/.servitize/config.toml`
/// 3. `~/.config/servitize/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(input_dir: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let project_config = input_dir.join(".servitize").join("config.toml");
    if project_config.exists() {
        return read_config(&project_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home.join(".config").join("servitize").join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("failed to parse config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_uses_builtin_dictionaries() {
        let config = Config::default();
        assert_eq!(config.taxonomy(ScriptVariant::Spaced).unwrap().len(), 13);
        assert_eq!(config.taxonomy(ScriptVariant::Unspaced).unwrap().len(), 13);
        assert_eq!(
            config.options.resolve(ScriptVariant::Unspaced),
            ClassifyOptions::for_variant(ScriptVariant::Unspaced)
        );
    }

    #[test]
    fn test_options_override() {
        let config: Config = toml::from_str(
            r#"
            [options]
            evidence_window = 50
            use_fallback = true
            max_evidence_per_category = 5
            "#,
        )
        .unwrap();
        let options = config.options.resolve(ScriptVariant::Spaced);
        assert_eq!(options.evidence_window, 50);
        assert!(options.use_fallback);
        assert_eq!(options.negation_window, 80);
        assert_eq!(options.max_evidence_per_category, Some(5));
    }

    #[test]
    fn test_dictionary_override() {
        let config: Config = toml::from_str(
            r#"
            [spaced]
            negation_cues = ["never"]

            [[spaced.categories]]
            id = "leasing"
            type = "substituting"
            phrases = ["lease"]

            [[spaced.categories]]
            id = "repair"
            type = "complementing"
            phrases = ["repair", "fix"]
            "#,
        )
        .unwrap();
        let taxonomy = config.taxonomy(ScriptVariant::Spaced).unwrap();
        assert_eq!(taxonomy.ids().collect::<Vec<_>>(), vec!["leasing", "repair"]);
        assert_eq!(taxonomy.negation_cues(), &["never"]);
        // the other variant keeps its built-in dictionary
        assert_eq!(config.taxonomy(ScriptVariant::Unspaced).unwrap().len(), 13);
    }

    #[test]
    fn test_duplicate_category_is_a_config_error() {
        let config: Config = toml::from_str(
            r#"
            [[unspaced.categories]]
            id = "a"
            type = "complementing"
            phrases = ["维修"]

            [[unspaced.categories]]
            id = "a"
            type = "complementing"
            phrases = ["保养"]
            "#,
        )
        .unwrap();
        let err = config.taxonomy(ScriptVariant::Unspaced).unwrap_err();
        assert!(format!("{:#}", err).contains("more than once"));
    }

    #[test]
    fn test_load_config_from_input_dir() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join(".servitize")).unwrap();
        fs::write(
            dir.path().join(".servitize").join("config.toml"),
            "[options]\nnegation_window = 20\n",
        )
        .unwrap();

        let config = load_config(dir.path(), None).unwrap();
        assert_eq!(config.options.negation_window, Some(20));
    }

    #[test]
    fn test_load_config_override_wins() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[options]\nevidence_window = 7\n").unwrap();

        let config = load_config(Path::new("/nonexistent"), Some(&path)).unwrap();
        assert_eq!(config.options.evidence_window, Some(7));
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[options]\nevidence_window = \"wide\"\n").unwrap();

        assert!(load_config(dir.path(), Some(&path)).is_err());
    }
}
