//! pattern.rs — Template compilation.
//!
//! Templates are a deliberately restricted pattern language, not general
//! regex:
//! - `?` matches exactly one alphabet letter,
//! - `[...]` is a character class passed through verbatim (no escaping
//!   inside, so users can write literal alternations like `[אב]`),
//! - every other character is literal; regex metacharacters are escaped.
//!
//! The scan never rejects a malformed template. An unterminated `[` class
//! silently falls back to literal interpretation: the `[` and whatever
//! class text accumulated are escaped and matched as ordinary characters.
//! Compilation can still fail when a *terminated* class carries text the
//! regex engine rejects (say, a backwards range); that [`PatternError`]
//! surfaces to the caller as a run failure.
//!
//! Matching is Unicode-codepoint aware (the `regex` crate default), which
//! matters because every Hebrew letter is two bytes in UTF-8.

use regex::Regex;

use crate::alphabet::Alphabet;
use crate::errors::PatternError;

/// The single-letter wildcard token.
pub const WILDCARD: char = '?';

/// A compiled, reusable template matcher.
///
/// Stateless with respect to candidate words: compile once, test many.
/// Whole-word mode anchors both ends; substring mode anchors neither.
#[derive(Debug, Clone)]
pub struct CompiledMatcher {
    regex: Regex,
}

impl CompiledMatcher {
    /// Whether `word` is accepted by this matcher.
    pub fn is_match(&self, word: &str) -> bool {
        self.regex.is_match(word)
    }

    /// The underlying regex source, mainly for diagnostics.
    pub fn source(&self) -> &str {
        self.regex.as_str()
    }
}

/// Compile `template` into a [`CompiledMatcher`] over `alphabet`.
///
/// Scans left to right, tracking whether the cursor is inside an open
/// bracket class:
/// - inside a class every character (including `?`) is copied verbatim
///   until the closing `]`;
/// - outside a class, `?` expands to the one-letter alphabet class and any
///   other character is escaped as needed;
/// - a class still open at the end of the template is not an error: the
///   `[` and the accumulated text are emitted as escaped literals.
///
/// # Errors
///
/// Only if the assembled expression is rejected by the regex engine (e.g.
/// a terminated class with a backwards range).
pub fn compile(
    template: &str,
    whole_word: bool,
    alphabet: &Alphabet,
) -> Result<CompiledMatcher, PatternError> {
    let mut expr = String::with_capacity(template.len() + 8);
    let mut in_class = false;
    let mut class_buf = String::new();

    for c in template.chars() {
        if in_class {
            if c == ']' {
                expr.push('[');
                expr.push_str(&class_buf);
                expr.push(']');
                class_buf.clear();
                in_class = false;
            } else {
                class_buf.push(c);
            }
        } else if c == '[' {
            in_class = true;
        } else if c == WILDCARD {
            expr.push_str(&alphabet.class_expr());
        } else {
            push_escaped(&mut expr, c);
        }
    }
    if in_class {
        // Unterminated class: whatever accumulated becomes literal text.
        push_escaped(&mut expr, '[');
        for c in class_buf.chars() {
            push_escaped(&mut expr, c);
        }
    }

    let anchored = if whole_word {
        format!("^{expr}$")
    } else {
        expr
    };

    Ok(CompiledMatcher {
        regex: Regex::new(&anchored)?,
    })
}

/// Append `c` to `expr`, backslash-escaped if it is a regex metacharacter.
fn push_escaped(expr: &mut String, c: char) {
    if c.is_ascii() && !c.is_ascii_alphanumeric() {
        // regex::escape only knows strings; punctuation is the only thing
        // that can be meta, so restrict the round trip to ASCII symbols.
        expr.push_str(&regex::escape(&c.to_string()));
    } else {
        expr.push(c);
    }
}
