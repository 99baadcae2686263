use wasm_bindgen::prelude::*;

use crate::constraints::LetterConstraints;
use crate::errors::SearchError;
use crate::search::{self, CustomList, SearchOptions};
use crate::wordlist::{FetchError, Fetcher};

/// Surface run failures to JS as strings.
impl From<SearchError> for JsValue {
    fn from(e: SearchError) -> JsValue {
        JsValue::from_str(&format!("search error: {e}"))
    }
}

#[wasm_bindgen(start)]
fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// The browser page owns all fetching; a run started from here only ever
/// sees pre-loaded lists, so any fetch attempt is a bug.
struct NoFetch;

impl Fetcher for NoFetch {
    fn fetch(&self, location: &str) -> Result<String, FetchError> {
        Err(FetchError::Failed(format!(
            "no fetcher in wasm runs: {location}"
        )))
    }
}

/// JS entry: (words: string[], template: string, whole_word: boolean,
/// dedupe: boolean, sort_results: boolean, required: string,
/// forbidden: string)
/// → { matches: string[], total_loaded: number, total_matched: number }.
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn search_in_wordlist_wasm(
    words: JsValue,
    template: &str,
    whole_word: bool,
    dedupe: bool,
    sort_results: bool,
    required: &str,
    forbidden: &str,
) -> Result<JsValue, JsValue> {
    let words: Vec<String> = match serde_wasm_bindgen::from_value(words) {
        Ok(w) => w,
        Err(_) => wasm_bindgen::throw_str("words must be string[]"),
    };

    let constraints = if required.is_empty() && forbidden.is_empty() {
        None
    } else {
        Some(LetterConstraints::new(required.chars(), forbidden.chars()))
    };

    let options = SearchOptions {
        // The page strips marks at load time if asked; lists arrive here
        // already normalized.
        strip_diacritics: false,
        dedupe,
        sort_results,
        whole_word,
    };
    let lists = [CustomList {
        name: "words".to_string(),
        words,
    }];

    let result = search::load_and_search_wordlists(
        &[],
        &lists,
        template,
        &options,
        constraints.as_ref(),
        &NoFetch,
        None,
        None,
    )?;

    serde_wasm_bindgen::to_value(&result)
        .map_err(|_| JsValue::from_str("serialization failed — see browser console for details"))
}
