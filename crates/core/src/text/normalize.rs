//! Canonical text pipeline.
//!
//! `normalize` is the single source of canonical text: stored sayings and lookup
//! queries both go through it, so every comparison is canonical-vs-canonical.
//! Stage order is significant; later stages assume earlier ones ran.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use super::tables::{
    ARABIC_DIACRITICS, ARABIC_LETTER_FOLDS, ARABIC_TATWEEL, CURLY_DOUBLE_QUOTES,
    CURLY_SINGLE_QUOTES, FULLWIDTH_ASCII, FULLWIDTH_ASCII_OFFSET, FULLWIDTH_SIGNS,
    HEBREW_DIACRITICS, ZERO_WIDTH, in_ranges, lookup,
};
use crate::settings::DisplayCase;

#[allow(clippy::unwrap_used, reason = "pattern is a literal")]
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Nonspacing marks only. Spacing marks (`Mc`) carry vowels in Indic scripts
/// and must survive.
#[allow(clippy::unwrap_used, reason = "pattern is a literal")]
static NONSPACING_MARK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\p{Mn}").unwrap());

/// Leading or trailing run of punctuation (Unicode `P*` plus ASCII symbols) and
/// whitespace.
#[allow(clippy::unwrap_used, reason = "pattern is a literal")]
static EDGE_NOISE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{P}[:punct:]\s]+|[\p{P}[:punct:]\s]+$").unwrap()
});

/// Canonical form of `text` for equality and substring matching.
///
/// Total and idempotent: `normalize(&normalize(s)) == normalize(s)`. Code points
/// that no stage recognizes pass through unchanged.
#[must_use]
pub fn normalize(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let composed: String = trimmed.nfkc().nfc().collect();

    let folded: String = composed
        .chars()
        .map(fold_fullwidth)
        .filter(|c| !ZERO_WIDTH.contains(c))
        .map(straighten_quote)
        .collect();

    let decomposed: String = folded.nfd().collect();
    let unmarked: String = NONSPACING_MARK.replace_all(&decomposed, "").nfc().collect();

    let script_folded: String = unmarked
        .chars()
        .filter(|c| *c != ARABIC_TATWEEL && !in_ranges(ARABIC_DIACRITICS, *c))
        .map(|c| lookup(ARABIC_LETTER_FOLDS, c).unwrap_or(c))
        .filter(|c| !in_ranges(HEBREW_DIACRITICS, *c))
        .collect();

    let lowered = script_folded.to_lowercase();
    let collapsed = WHITESPACE_RUN.replace_all(&lowered, " ");
    EDGE_NOISE.replace_all(collapsed.trim(), "").into_owned()
}

/// Trim and collapse whitespace runs to a single space. This is the display form
/// a saying is stored under.
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned()
}

/// Display text under the configured case policy.
#[must_use]
pub fn display_text(text: &str, case: DisplayCase) -> String {
    let spaced = normalize_whitespace(text);
    match case {
        DisplayCase::Preserve => spaced,
        DisplayCase::Lowercase => spaced.to_lowercase(),
    }
}

fn fold_fullwidth(c: char) -> char {
    if FULLWIDTH_ASCII.contains(&c) {
        return char::from_u32(u32::from(c) - FULLWIDTH_ASCII_OFFSET).unwrap_or(c);
    }
    lookup(FULLWIDTH_SIGNS, c).unwrap_or(c)
}

fn straighten_quote(c: char) -> char {
    if CURLY_SINGLE_QUOTES.contains(&c) {
        '\''
    } else if CURLY_DOUBLE_QUOTES.contains(&c) {
        '"'
    } else {
        c
    }
}
