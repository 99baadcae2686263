//! normalize.rs — Diacritic stripping.
//!
//! Word lists extracted from pointed (vocalized) text carry niqqud and
//! cantillation marks; searching should usually see only the base letters.
//! Stripping is canonical decomposition (NFD), dropping every combining
//! mark, then recomposing (NFC). Pure function, full-codepoint aware.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Return `word` with all combining marks removed.
///
/// For words that contain no combining marks this is the identity.
pub fn strip_marks(word: &str) -> String {
    word.nfd().filter(|c| !is_combining_mark(*c)).nfc().collect()
}
