//! alphabet.rs — The fixed set of code points treated as "letters" here.
//!
//! Word validity and wildcard expansion both work against one contiguous
//! Unicode block. For this crate that block is the Hebrew letters
//! א (U+05D0) through ת (U+05EA) — final forms (ך, ם, ן, ף, ץ) sit inside
//! the range, so they count as letters too.

/// A contiguous Unicode block of "letters of the target script".
///
/// Immutable, process-wide constant — code takes `&Alphabet` so the block
/// could in principle be swapped (say, for another script), but everything
/// in this crate uses [`HEBREW`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    /// First code point of the block, inclusive.
    pub start: char,
    /// Last code point of the block, inclusive.
    pub end: char,
}

/// The Hebrew letter block, א through ת.
pub const HEBREW: Alphabet = Alphabet {
    start: '\u{05D0}',
    end: '\u{05EA}',
};

impl Alphabet {
    /// Whether `c` is a letter of this alphabet.
    pub fn contains(&self, c: char) -> bool {
        self.start <= c && c <= self.end
    }

    /// Whether `word` contains at least one alphabet letter.
    /// Used by the loader to discard lines that carry no real word.
    pub fn has_letter(&self, word: &str) -> bool {
        word.chars().any(|c| self.contains(c))
    }

    /// The character-class expression matching exactly one alphabet letter,
    /// in `regex` syntax. This is what the wildcard token expands to.
    pub fn class_expr(&self) -> String {
        format!("[{}-{}]", self.start, self.end)
    }
}
