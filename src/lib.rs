//! milim — pattern-based Hebrew word list search.
//!
//! The core pipeline: raw text → candidate words → (optionally
//! de-pointed) words → matched words → deduplicated, sorted results. The
//! presentation layer (form, letter picker, file save) talks to this crate
//! only through [`search::load_wordlist`], [`search::search_in_wordlist`],
//! and [`search::load_and_search_wordlists`].

pub mod alphabet;
pub mod constraints;
pub mod errors;
pub mod normalize;
pub mod pattern;
pub mod scanner;
pub mod search;
pub mod wordlist;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use constraints::LetterConstraints;
pub use errors::{LoadError, PatternError, SearchError, ValidationError};
pub use search::{
    load_and_search_wordlists, load_wordlist, matches_to_text, search_in_wordlist, CustomList,
    SearchOptions, SearchResult, SourceStatus,
};
pub use wordlist::{Fetcher, WordSource};

#[cfg(not(target_arch = "wasm32"))]
pub use wordlist::FileFetcher;
