//! errors.rs — Error taxonomy for loading, compilation, and search runs.
//!
//! `LoadError` is non-fatal at the run level: the orchestrator converts it
//! into a per-source status record and moves on. `ValidationError` blocks a
//! run before any loading starts. `PatternError` means the assembled
//! matcher expression was rejected by the regex engine; it aborts the whole
//! run since no source could be scanned.

/// A named source failed to produce text.
///
/// Carries the offending source key so the status callback can attribute
/// the failure. Never propagated out of the orchestrator as a hard error.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("source \"{key}\": HTTP status {status}")]
    HttpStatus { key: String, status: u16 },
    #[error("source \"{key}\": {message}")]
    Fetch { key: String, message: String },
    #[error("source \"{key}\": unknown built-in source")]
    UnknownSource { key: String },
    #[error("source \"{key}\": no pasted text or URL configured")]
    EmptySource { key: String },
}

impl LoadError {
    /// The key of the source that failed.
    pub fn key(&self) -> &str {
        match self {
            LoadError::HttpStatus { key, .. }
            | LoadError::Fetch { key, .. }
            | LoadError::UnknownSource { key }
            | LoadError::EmptySource { key } => key,
        }
    }
}

/// Template compilation was rejected by the regex engine.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("invalid pattern: {0}")]
    Regex(#[from] regex::Error),
}

/// A caller-level precondition was violated; the run never starts.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("empty search template")]
    EmptyTemplate,
    #[error("no word sources selected and no custom lists supplied")]
    NoSources,
}

/// Failure of a whole search run. `LoadError` deliberately has no variant
/// here: per-source failures are reported through the status callback, not
/// the return value.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Pattern(#[from] PatternError),
}
