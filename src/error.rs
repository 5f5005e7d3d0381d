use std::path::PathBuf;

use thiserror::Error;

/// Problems detected while building a [`Taxonomy`](crate::taxonomy::Taxonomy).
///
/// These are fatal configuration errors: they surface once at startup and
/// never during classification.
#[derive(Error, Debug)]
pub enum TaxonomyError {
    #[error("category `{0}` has no phrases")]
    EmptyCategory(String),

    #[error("category `{0}` is declared more than once")]
    DuplicateCategory(String),

    #[error("category `{0}` contains a blank phrase")]
    BlankPhrase(String),

    #[error("category `{category}` could not be compiled: {source}")]
    MalformedPattern {
        category: String,
        #[source]
        source: regex::Error,
    },
}

/// Problems discovering input documents on disk.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("input directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taxonomy_error_display() {
        let err = TaxonomyError::EmptyCategory("leasing_and_rental".to_string());
        assert_eq!(err.to_string(), "category `leasing_and_rental` has no phrases");

        let err = TaxonomyError::DuplicateCategory("x".to_string());
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_source_error_display() {
        let err = SourceError::DirectoryNotFound(PathBuf::from("/no/such/dir"));
        assert!(err.to_string().contains("/no/such/dir"));
    }
}
