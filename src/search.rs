//! search.rs — End-to-end search orchestration.
//!
//! Drives load → scan → aggregate across any mix of configured sources and
//! already-loaded custom lists. A source that fails to load is reported
//! through the status callback and skipped; it never aborts the run. The
//! only hard failures are caller-level validation (empty template, nothing
//! to search) and a template the regex engine rejects — both surface
//! before any source is touched.
//!
//! Sources are processed strictly in the supplied order and each scan
//! completes before the next source starts, so the accumulated match list
//! is per-source ordered with no interleaving. Dedupe (first occurrence
//! wins) runs before the optional sort.

use std::collections::HashSet;

use serde::Serialize;

use crate::alphabet::HEBREW;
use crate::constraints::LetterConstraints;
use crate::errors::{PatternError, SearchError, ValidationError};
use crate::pattern;
use crate::scanner::{self, ProgressFn, DEFAULT_CHUNK_SIZE};
use crate::wordlist::{self, Fetcher, WordSource};

/// Recognized search options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Remove combining marks from loaded words before matching.
    pub strip_diacritics: bool,
    /// Remove repeated result words, keeping the first occurrence.
    pub dedupe: bool,
    /// Sort the final matches alphabetically.
    pub sort_results: bool,
    /// Anchor the template at both ends of the word.
    pub whole_word: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            strip_diacritics: true,
            dedupe: true,
            sort_results: true,
            whole_word: true,
        }
    }
}

/// An already-loaded word list supplied by the caller (pasted text that was
/// pre-split, or a list downloaded earlier). Scanned as-is, no load step.
#[derive(Debug, Clone)]
pub struct CustomList {
    pub name: String,
    pub words: Vec<String>,
}

/// Per-source outcome reported through the status callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceStatus {
    /// The source loaded `loaded` candidate words.
    Success { loaded: usize },
    /// The source failed to load; the run continued without it.
    Error { message: String },
}

/// Observer for per-source outcomes: `(source_key, status)`.
pub type SourceStatusFn<'a> = &'a mut dyn FnMut(&str, &SourceStatus);

/// Outcome of one orchestrator run. Constructed fresh per invocation,
/// never mutated after return.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    /// Matched words, per-source ordered, after dedupe/sort per options.
    pub matches: Vec<String>,
    /// Sum of candidate words loaded across all sources and custom lists.
    pub total_loaded: usize,
    /// Number of matches after deduplication (if enabled).
    pub total_matched: usize,
}

/// Load one source's words, applying the diacritics option.
///
/// # Errors
///
/// [`crate::errors::LoadError`] when the source's text cannot be resolved.
pub fn load_wordlist(
    source: &WordSource,
    options: &SearchOptions,
    fetcher: &dyn Fetcher,
) -> Result<Vec<String>, crate::errors::LoadError> {
    wordlist::load(source, options.strip_diacritics, fetcher)
}

/// Compile `template` and scan an already-loaded word list.
///
/// # Errors
///
/// [`PatternError`] if the template compiles to an expression the regex
/// engine rejects.
pub fn search_in_wordlist(
    words: &[String],
    template: &str,
    whole_word: bool,
    on_progress: Option<ProgressFn<'_, '_>>,
    constraints: Option<&LetterConstraints>,
) -> Result<Vec<String>, PatternError> {
    let matcher = pattern::compile(template, whole_word, &HEBREW)?;
    Ok(scanner::scan(
        words,
        &matcher,
        constraints,
        DEFAULT_CHUNK_SIZE,
        on_progress,
    ))
}

/// Run a full search: load each source, scan it, scan the custom lists,
/// then aggregate.
///
/// Per-source load failures are delivered to `on_source_status` and the
/// run continues; successes are delivered with their loaded count once the
/// source's scan completes. Custom lists get no status callback.
///
/// # Errors
///
/// [`SearchError::Validation`] for an empty template or an empty source
/// set, [`SearchError::Pattern`] if template compilation fails. Both occur
/// before any loading.
#[allow(clippy::too_many_arguments)]
pub fn load_and_search_wordlists(
    sources: &[WordSource],
    custom_lists: &[CustomList],
    template: &str,
    options: &SearchOptions,
    constraints: Option<&LetterConstraints>,
    fetcher: &dyn Fetcher,
    mut on_source_status: Option<SourceStatusFn<'_>>,
    mut on_progress: Option<ProgressFn<'_, '_>>,
) -> Result<SearchResult, SearchError> {
    if template.is_empty() {
        return Err(ValidationError::EmptyTemplate.into());
    }
    if sources.is_empty() && custom_lists.is_empty() {
        return Err(ValidationError::NoSources.into());
    }

    let matcher = pattern::compile(template, options.whole_word, &HEBREW)?;

    let mut matches: Vec<String> = Vec::new();
    let mut total_loaded = 0usize;

    for source in sources {
        match wordlist::load(source, options.strip_diacritics, fetcher) {
            Ok(words) => {
                total_loaded += words.len();
                matches.extend(scanner::scan(
                    &words,
                    &matcher,
                    constraints,
                    DEFAULT_CHUNK_SIZE,
                    on_progress.as_deref_mut(),
                ));
                if let Some(cb) = on_source_status.as_deref_mut() {
                    cb(
                        source.key(),
                        &SourceStatus::Success {
                            loaded: words.len(),
                        },
                    );
                }
            }
            Err(e) => {
                if let Some(cb) = on_source_status.as_deref_mut() {
                    cb(
                        e.key(),
                        &SourceStatus::Error {
                            message: e.to_string(),
                        },
                    );
                }
            }
        }
    }

    for list in custom_lists {
        total_loaded += list.words.len();
        matches.extend(scanner::scan(
            &list.words,
            &matcher,
            constraints,
            DEFAULT_CHUNK_SIZE,
            on_progress.as_deref_mut(),
        ));
    }

    if options.dedupe {
        matches = dedupe_first_seen(matches);
    }
    let total_matched = matches.len();
    if options.sort_results {
        // Hebrew-block code points run in alef-bet order, so the plain
        // string comparison is the locale ordering. Stable sort keeps the
        // comparator's own tie rules.
        matches.sort();
    }

    Ok(SearchResult {
        matches,
        total_loaded,
        total_matched,
    })
}

/// Remove repeated words, keeping the first occurrence in sequence order.
/// Idempotent.
fn dedupe_first_seen(matches: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::with_capacity(matches.len());
    matches
        .into_iter()
        .filter(|w| seen.insert(w.clone()))
        .collect()
}

/// Render matches as the downloadable one-word-per-line document.
pub fn matches_to_text(matches: &[String]) -> String {
    matches.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlist::FetchError;
    use std::collections::HashMap;

    struct FakeFetcher {
        texts: HashMap<String, String>,
        statuses: HashMap<String, u16>,
    }

    impl FakeFetcher {
        fn new() -> Self {
            Self {
                texts: HashMap::new(),
                statuses: HashMap::new(),
            }
        }

        fn text(mut self, location: &str, text: &str) -> Self {
            self.texts.insert(location.to_string(), text.to_string());
            self
        }

        fn status(mut self, location: &str, status: u16) -> Self {
            self.statuses.insert(location.to_string(), status);
            self
        }
    }

    impl Fetcher for FakeFetcher {
        fn fetch(&self, location: &str) -> Result<String, FetchError> {
            if let Some(&status) = self.statuses.get(location) {
                return Err(FetchError::Status(status));
            }
            self.texts
                .get(location)
                .cloned()
                .ok_or_else(|| FetchError::Failed(format!("no such location: {location}")))
        }
    }

    fn url_source(key: &str, url: &str) -> WordSource {
        WordSource::Url {
            key: key.to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn validation_empty_template() {
        let err = load_and_search_wordlists(
            &[url_source("a", "loc")],
            &[],
            "",
            &SearchOptions::default(),
            None,
            &FakeFetcher::new(),
            None,
            None,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SearchError::Validation(ValidationError::EmptyTemplate)
        ));
    }

    #[test]
    fn validation_no_sources() {
        let err = load_and_search_wordlists(
            &[],
            &[],
            "אב",
            &SearchOptions::default(),
            None,
            &FakeFetcher::new(),
            None,
            None,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SearchError::Validation(ValidationError::NoSources)
        ));
    }

    #[test]
    fn bad_template_fails_before_loading() {
        // A terminated class with a backwards range is rejected by the
        // engine, aborting the run before any source is fetched.
        let err = load_and_search_wordlists(
            &[url_source("a", "loc")],
            &[],
            "[ב-א]",
            &SearchOptions::default(),
            None,
            &FakeFetcher::new(),
            None,
            None,
        )
        .unwrap_err();
        assert!(matches!(err, SearchError::Pattern(_)));
    }

    #[test]
    fn load_error_isolation() {
        // One source 404s, the other loads 100 words of which 3 match.
        let mut body = String::new();
        for _ in 0..97 {
            body.push_str("דגים\n");
        }
        body.push_str("אהבה\nאהבה\nאהבה\n");

        let fetcher = FakeFetcher::new()
            .status("dead", 404)
            .text("alive", &body);

        let mut statuses: Vec<(String, SourceStatus)> = Vec::new();
        let mut cb = |key: &str, status: &SourceStatus| {
            statuses.push((key.to_string(), status.clone()));
        };

        let opts = SearchOptions {
            dedupe: false,
            ..SearchOptions::default()
        };
        let result = load_and_search_wordlists(
            &[url_source("broken", "dead"), url_source("ok", "alive")],
            &[],
            "אהבה",
            &opts,
            None,
            &fetcher,
            Some(&mut cb),
            None,
        )
        .unwrap();

        assert_eq!(3, result.matches.len());
        assert_eq!(100, result.total_loaded);
        assert_eq!(3, result.total_matched);

        assert_eq!(2, statuses.len());
        assert_eq!("broken", statuses[0].0);
        assert!(matches!(statuses[0].1, SourceStatus::Error { .. }));
        assert_eq!("ok", statuses[1].0);
        assert_eq!(SourceStatus::Success { loaded: 100 }, statuses[1].1);
    }

    #[test]
    fn dedupe_and_sort() {
        let lists = [CustomList {
            name: "pasted".into(),
            words: vec!["בב".into(), "אא".into(), "בב".into()],
        }];
        let result = load_and_search_wordlists(
            &[],
            &lists,
            "??",
            &SearchOptions::default(),
            None,
            &FakeFetcher::new(),
            None,
            None,
        )
        .unwrap();
        assert_eq!(vec!["אא", "בב"], result.matches);
        assert_eq!(2, result.total_matched);
        assert_eq!(3, result.total_loaded);
    }

    #[test]
    fn dedupe_preserves_first_seen_order_and_is_idempotent() {
        let v: Vec<String> = ["ג", "א", "ג", "ב", "א"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let once = dedupe_first_seen(v.clone());
        assert_eq!(vec!["ג", "א", "ב"], once);
        assert_eq!(once, dedupe_first_seen(once.clone()));
    }

    #[test]
    fn custom_lists_scanned_after_sources_without_status() {
        let fetcher = FakeFetcher::new().text("loc", "אב\nגד");
        let lists = [CustomList {
            name: "mine".into(),
            words: vec!["אב".into()],
        }];
        let mut statuses = 0usize;
        let mut cb = |_: &str, _: &SourceStatus| statuses += 1;
        let opts = SearchOptions {
            dedupe: false,
            sort_results: false,
            ..SearchOptions::default()
        };
        let result = load_and_search_wordlists(
            &[url_source("src", "loc")],
            &lists,
            "אב",
            &opts,
            None,
            &fetcher,
            Some(&mut cb),
            None,
        )
        .unwrap();
        // Source matches first, then the custom list's.
        assert_eq!(vec!["אב", "אב"], result.matches);
        assert_eq!(1, statuses); // only the configured source reports
        assert_eq!(3, result.total_loaded);
    }

    #[test]
    fn one_progress_callback_spans_sources_and_custom_lists() {
        // 1500 words -> 2 chunks, then the custom list's 2500 -> 3 chunks;
        // the same callback observes both scans in order.
        let mut body = String::new();
        for _ in 0..1500 {
            body.push_str("אב\n");
        }
        let fetcher = FakeFetcher::new().text("loc", &body);
        let lists = [CustomList {
            name: "mine".into(),
            words: vec!["אב".to_string(); 2500],
        }];
        let mut events: Vec<(usize, usize)> = Vec::new();
        let mut on_progress = |done: usize, total: usize| events.push((done, total));
        let opts = SearchOptions {
            dedupe: false,
            sort_results: false,
            ..SearchOptions::default()
        };
        let result = load_and_search_wordlists(
            &[url_source("src", "loc")],
            &lists,
            "אב",
            &opts,
            None,
            &fetcher,
            None,
            Some(&mut on_progress),
        )
        .unwrap();
        assert_eq!(4000, result.total_matched);
        assert_eq!(vec![(1, 2), (2, 2), (1, 3), (2, 3), (3, 3)], events);
    }

    #[test]
    fn search_in_wordlist_entry_point() {
        let words: Vec<String> = ["אהבה", "אכזבה", "אהוב"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let got = search_in_wordlist(&words, "אה?ה", true, None, None).unwrap();
        assert_eq!(vec!["אהבה"], got);
    }

    #[test]
    fn constraints_flow_through_run() {
        let lists = [CustomList {
            name: "pasted".into(),
            words: vec!["שלום".into(), "שלג".into(), "שמש".into()],
        }];
        let lc = LetterConstraints::new(['ש'], ['ל']);
        let result = load_and_search_wordlists(
            &[],
            &lists,
            "?",
            &SearchOptions {
                whole_word: false,
                ..SearchOptions::default()
            },
            Some(&lc),
            &FakeFetcher::new(),
            None,
            None,
        )
        .unwrap();
        assert_eq!(vec!["שמש"], result.matches);
    }

    #[test]
    fn matches_to_text_is_newline_joined() {
        let m: Vec<String> = vec!["אא".into(), "בב".into()];
        assert_eq!("אא\nבב", matches_to_text(&m));
        assert_eq!("", matches_to_text(&[]));
    }
}
