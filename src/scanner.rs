//! scanner.rs — Batched scan of a word list against a compiled matcher.
//!
//! A long word list is walked in fixed-size chunks so the host can observe
//! progress and interleave its own work between chunks. In the browser
//! original the gap between chunks is a yield to the event loop; here the
//! progress callback boundary plays that role. Chunking never changes the
//! result: for any chunk size, output order equals input order restricted
//! to matches.

use crate::constraints::{self, LetterConstraints};
use crate::pattern::CompiledMatcher;

/// Default number of words per scan chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Progress observer: `(completed_chunks, total_chunks)`.
///
/// The reference and trait-object lifetimes are independent so one
/// callback can be reborrowed across repeated `scan` calls.
pub type ProgressFn<'a, 'f> = &'a mut (dyn FnMut(usize, usize) + 'f);

/// Scan `words`, keeping those accepted by `matcher` and passing
/// `constraints`.
///
/// `on_progress` is invoked after each completed chunk with the number of
/// chunks done so far and the total; it is not invoked at all when the
/// whole list fits in one chunk.
pub fn scan(
    words: &[String],
    matcher: &CompiledMatcher,
    constraints: Option<&LetterConstraints>,
    chunk_size: usize,
    mut on_progress: Option<ProgressFn<'_, '_>>,
) -> Vec<String> {
    let chunk_size = chunk_size.max(1);
    let total_chunks = words.len().div_ceil(chunk_size);
    let mut matches = Vec::new();

    for (i, chunk) in words.chunks(chunk_size).enumerate() {
        matches.extend(
            chunk
                .iter()
                .filter(|w| matcher.is_match(w) && constraints::passes(w, constraints))
                .cloned(),
        );
        if total_chunks > 1 {
            if let Some(cb) = on_progress.as_deref_mut() {
                cb(i + 1, total_chunks);
            }
        }
    }

    matches
}
