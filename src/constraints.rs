//! constraints.rs — Required/forbidden letter filtering.
//!
//! A `LetterConstraints` value is an immutable-at-search-time snapshot of
//! the letter-picker widget: letters the word must contain and letters it
//! must not. The core only ever reads a snapshot passed in by the caller;
//! it never touches interactive state.

use std::collections::HashSet;
use std::fmt;

/// Paired required/forbidden letter sets used as a secondary match filter.
///
/// The two sets are kept disjoint by construction: [`LetterConstraints::require`]
/// and [`LetterConstraints::forbid`] are last-write-wins, so toggling a
/// letter back and forth in the picker can never leave it in both sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterConstraints {
    required: HashSet<char>,
    forbidden: HashSet<char>,
}

impl LetterConstraints {
    /// Build from explicit sets. Letters appearing in both are treated as
    /// required (the forbidden entry is dropped).
    pub fn new(
        required: impl IntoIterator<Item = char>,
        forbidden: impl IntoIterator<Item = char>,
    ) -> Self {
        let mut lc = Self::default();
        for c in forbidden {
            lc.forbid(c);
        }
        for c in required {
            lc.require(c);
        }
        lc
    }

    /// Mark `c` as required, clearing any forbidden mark on it.
    pub fn require(&mut self, c: char) {
        self.forbidden.remove(&c);
        self.required.insert(c);
    }

    /// Mark `c` as forbidden, clearing any required mark on it.
    pub fn forbid(&mut self, c: char) {
        self.required.remove(&c);
        self.forbidden.insert(c);
    }

    /// Remove any mark on `c`.
    pub fn clear(&mut self, c: char) {
        self.required.remove(&c);
        self.forbidden.remove(&c);
    }

    pub fn is_empty(&self) -> bool {
        self.required.is_empty() && self.forbidden.is_empty()
    }

    /// Whether `word` contains every required letter and no forbidden one.
    /// Both checks short-circuit on the first failure.
    pub fn passes(&self, word: &str) -> bool {
        self.required.iter().all(|&c| word.contains(c))
            && !self.forbidden.iter().any(|&c| word.contains(c))
    }
}

/// Deterministic display like `required={אב} forbidden={ג}`.
impl fmt::Display for LetterConstraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sorted = |set: &HashSet<char>| {
            let mut v: Vec<char> = set.iter().copied().collect();
            v.sort_unstable();
            v.into_iter().collect::<String>()
        };
        write!(
            f,
            "required={{{}}} forbidden={{{}}}",
            sorted(&self.required),
            sorted(&self.forbidden)
        )
    }
}

/// `None` constraints always pass.
pub fn passes(word: &str, constraints: Option<&LetterConstraints>) -> bool {
    constraints.map_or(true, |lc| lc.passes(word))
}
