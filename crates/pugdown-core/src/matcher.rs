/*
 * matcher.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Regex scanners for the two literal-fragment grammars.
//!
//! There is no escape mechanism in either grammar: a closing delimiter
//! inside a fragment terminates the match early, and content longer than
//! the cutoff leaves the whole fragment untouched. Both limits are hard
//! cutoffs, not configuration.

use regex::Regex;
use std::sync::LazyLock;

/// Maximum content length, in characters, recognized inside `[...]`.
pub const SQUARE_FRAGMENT_MAX: usize = 40;

/// Maximum content length, in characters, recognized inside `{{...}}`.
pub const CURLY_FRAGMENT_MAX: usize = 30;

/// `[...]` with no nested brackets and 1-40 characters of content.
static SQUARE_FRAGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\[[^\[\]]{{1,{SQUARE_FRAGMENT_MAX}}}\]"))
        .expect("Invalid square fragment pattern")
});

/// `{{...}}` with no nested braces and 1-30 characters of content.
static CURLY_FRAGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\{{\{{[^{{}}]{{1,{CURLY_FRAGMENT_MAX}}}\}}\}}"))
        .expect("Invalid curly fragment pattern")
});

/// The compiled square fragment pattern.
pub fn square_fragment() -> &'static Regex {
    &SQUARE_FRAGMENT
}

/// The compiled curly fragment pattern.
pub fn curly_fragment() -> &'static Regex {
    &CURLY_FRAGMENT
}

/// Non-overlapping square fragment matches, left to right.
pub fn square_fragments(document: &str) -> impl Iterator<Item = regex::Match<'_>> {
    SQUARE_FRAGMENT.find_iter(document)
}

/// Non-overlapping curly fragment matches, left to right.
pub fn curly_fragments(document: &str) -> impl Iterator<Item = regex::Match<'_>> {
    CURLY_FRAGMENT.find_iter(document)
}
