//! wordlist.rs — Word sources and raw-text loading.
//!
//! A word list arrives as line-delimited text from one of three places: a
//! built-in source (a fixed key → location table), an arbitrary URL, or a
//! block of pasted text. This module resolves the raw text, splits it into
//! candidate words, and filters out everything that is not a word of the
//! target script: empty lines, lines with embedded whitespace, and lines
//! with no Hebrew letter are dropped silently, never reported as errors.
//!
//! Actual I/O lives behind the [`Fetcher`] trait — a browser host
//! implements it over `fetch()`, the CLI uses [`FileFetcher`], and tests
//! use an in-memory map. The core performs no network calls of its own and
//! imposes no timeouts; bounding a hung fetch is the host's job.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::alphabet::HEBREW;
use crate::errors::LoadError;
use crate::normalize::strip_marks;
use crate::scanner::DEFAULT_CHUNK_SIZE;

/// Fixed table of built-in source keys to their resource locations.
/// Locations are resolved through the same [`Fetcher`] as URL sources.
static BUILTIN_SOURCES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("hspell", "wordlists/hspell.txt"),
        ("wikimilon", "wordlists/wikimilon.txt"),
        ("names", "wordlists/names.txt"),
    ])
});

/// The resource location for a built-in source key, if the key is known.
pub fn builtin_location(key: &str) -> Option<&'static str> {
    BUILTIN_SOURCES.get(key).copied()
}

/// All registered built-in source keys, sorted for stable display.
pub fn builtin_keys() -> Vec<&'static str> {
    let mut keys: Vec<&'static str> = BUILTIN_SOURCES.keys().copied().collect();
    keys.sort_unstable();
    keys
}

/// One configured word source. `key` identifies the source in status
/// callbacks and error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// A named entry in the built-in registry.
    Builtin { key: String },
    /// A remote list fetched from `url`.
    Url { key: String, url: String },
    /// Text the user pasted directly; no fetch step.
    Pasted { key: String, text: String },
}

impl WordSource {
    pub fn key(&self) -> &str {
        match self {
            WordSource::Builtin { key }
            | WordSource::Url { key, .. }
            | WordSource::Pasted { key, .. } => key,
        }
    }
}

/// Why a fetch produced no text.
#[derive(Debug)]
pub enum FetchError {
    /// The transport answered with a non-2xx status.
    Status(u16),
    /// The transport failed outright (network, I/O, decode).
    Failed(String),
}

/// The I/O seam: resolve a location (URL or bundled resource path) to its
/// text content. Implementations should not cache — a search always sees
/// the current list.
pub trait Fetcher {
    fn fetch(&self, location: &str) -> Result<String, FetchError>;
}

/// Native fetcher that treats locations as filesystem paths. Serves the
/// CLI, where "remote" lists are files on disk.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default)]
pub struct FileFetcher;

#[cfg(not(target_arch = "wasm32"))]
impl Fetcher for FileFetcher {
    fn fetch(&self, location: &str) -> Result<String, FetchError> {
        std::fs::read_to_string(location).map_err(|e| FetchError::Failed(e.to_string()))
    }
}

/// Load and filter the words of `source`.
///
/// When `strip_diacritics` is set, combining marks are removed from every
/// retained word; that pass runs over fixed-size chunks like the scanner
/// does, so one oversized list cannot turn into a single unbounded step.
///
/// # Errors
///
/// [`LoadError`] when the source's text cannot be resolved: unknown
/// built-in key, fetch failure (carrying the HTTP status when there is
/// one), or a pasted/URL source with nothing in it.
pub fn load(
    source: &WordSource,
    strip_diacritics: bool,
    fetcher: &dyn Fetcher,
) -> Result<Vec<String>, LoadError> {
    let raw = match source {
        WordSource::Builtin { key } => {
            let location = builtin_location(key).ok_or_else(|| LoadError::UnknownSource {
                key: key.clone(),
            })?;
            fetch_text(key, location, fetcher)?
        }
        WordSource::Url { key, url } => {
            if url.trim().is_empty() {
                return Err(LoadError::EmptySource { key: key.clone() });
            }
            fetch_text(key, url, fetcher)?
        }
        WordSource::Pasted { key, text } => {
            if text.trim().is_empty() {
                return Err(LoadError::EmptySource { key: key.clone() });
            }
            text.clone()
        }
    };

    let mut words = parse_words(&raw);
    if strip_diacritics {
        for chunk in words.chunks_mut(DEFAULT_CHUNK_SIZE) {
            for w in chunk {
                *w = strip_marks(w);
            }
        }
    }
    Ok(words)
}

fn fetch_text(key: &str, location: &str, fetcher: &dyn Fetcher) -> Result<String, LoadError> {
    fetcher.fetch(location).map_err(|e| match e {
        FetchError::Status(status) => LoadError::HttpStatus {
            key: key.to_string(),
            status,
        },
        FetchError::Failed(message) => LoadError::Fetch {
            key: key.to_string(),
            message,
        },
    })
}

/// Split raw text into candidate words.
///
/// Handles both bare and CR-terminated line endings, trims each line, and
/// keeps only lines that are non-empty, free of embedded whitespace, and
/// contain at least one Hebrew letter.
pub fn parse_words(raw: &str) -> Vec<String> {
    raw.lines()
        .filter_map(|raw_line| {
            let line = raw_line.trim();
            if line.is_empty() {
                return None;
            }
            if line.chars().any(char::is_whitespace) {
                return None;
            }
            if !HEBREW.has_letter(line) {
                return None;
            }
            Some(line.to_string())
        })
        .collect()
}
