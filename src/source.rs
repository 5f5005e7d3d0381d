use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use regex::Regex;
use walkdir::WalkDir;

use crate::batch::YearTexts;
use crate::error::SourceError;
use crate::models::ScriptVariant;

/// Company id -> year -> text.
pub type Corpus = BTreeMap<String, YearTexts>;

/// Documents found under an input directory.
#[derive(Debug, Default)]
pub struct Collected {
    pub corpus: Corpus,
    /// Files named like a report but in a format that isn't read.
    pub skipped: Vec<PathBuf>,
}

/// Extensions read as plain text. Other document formats need converting first.
const TEXT_EXTENSIONS: &[&str] = &["txt", "md", "markdown"];

/// How company and year are read from a file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamingScheme {
    /// `COMPANY_YYYY.ext`, top-level files only.
    Suffix,
    /// `<code>_<...>_YYYY_<...>.ext`: company is the first `_` field, year the
    /// first later field made of exactly four digits. Sub-directories are
    /// searched too.
    Fields,
}

impl NamingScheme {
    pub fn for_variant(variant: ScriptVariant) -> Self {
        match variant {
            ScriptVariant::Spaced => NamingScheme::Suffix,
            ScriptVariant::Unspaced => NamingScheme::Fields,
        }
    }

    /// Company and year encoded in a file stem, if the stem fits the scheme.
    pub fn parse(&self, stem: &str) -> Option<(String, i32)> {
        match self {
            NamingScheme::Suffix => {
                let re = Regex::new(r"^(.+)_([0-9]{4})$").ok()?;
                let caps = re.captures(stem)?;
                Some((caps[1].to_string(), caps[2].parse().ok()?))
            }
            NamingScheme::Fields => {
                let mut parts = stem.split('_');
                let company = parts.next().filter(|c| !c.is_empty())?;
                let year = parts
                    .find(|p| p.len() == 4 && p.bytes().all(|b| b.is_ascii_digit()))?
                    .parse()
                    .ok()?;
                Some((company.to_string(), year))
            }
        }
    }

    fn max_depth(&self) -> usize {
        match self {
            NamingScheme::Suffix => 1,
            NamingScheme::Fields => usize::MAX,
        }
    }
}

/// Collect `{company: {year: text}}` from the plain-text files under `dir`.
///
/// Files whose names don't fit `scheme` are ignored. Report files that aren't
/// plain text are listed in [`Collected::skipped`]. When two files map to the
/// same company-year the one visited last wins.
pub fn collect_corpus(dir: &Path, scheme: NamingScheme) -> Result<Collected, SourceError> {
    if !dir.is_dir() {
        return Err(SourceError::DirectoryNotFound(dir.to_path_buf()));
    }

    let mut collected = Collected::default();

    for entry in WalkDir::new(dir)
        .max_depth(scheme.max_depth())
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let Some(stem) = path.file_stem().map(|s| s.to_string_lossy()) else {
            continue;
        };
        let Some((company, year)) = scheme.parse(&stem) else {
            continue;
        };

        if !is_text_file(path) {
            log::debug!("skipping {}: not plain text", path.display());
            collected.skipped.push(path.to_path_buf());
            continue;
        }

        let bytes = std::fs::read(path).map_err(|source| SourceError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8_lossy(&bytes).into_owned();

        log::debug!("loaded {} ({} {})", path.display(), company, year);
        collected.corpus.entry(company).or_default().insert(year, text);
    }

    Ok(collected)
}

fn is_text_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| TEXT_EXTENSIONS.contains(&ext.as_str()))
}
