// SPDX-License-Identifier: AGPL-3.0-only
// SPDX-FileCopyrightText: 2025 Steve Clarke <stephenlclarke@mac.com> - https://xyzzy.tools

//! Embedded word lists consulted by the tokenizer and tagger.  The sets are
//! process-wide, read-only and initialised once; English and Spanish are
//! covered so bilingual titles behave sensibly.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Words that must never be masked nor counted as key words.  Consulted
/// independently of the grammatical tagger.
static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "an", "the", "of", "and", "or", "for", "to", "in", "on", "at", "by", "with", "from",
        "into", "over", "under", "after", "before",
        // Spanish
        "de", "la", "el", "los", "las", "del", "y", "en", "para", "con", "por",
    ]
    .into_iter()
    .collect()
});

static DETERMINERS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "an", "the", "this", "that", "these", "those", "el", "la", "los", "las", "un", "una",
        "unos", "unas",
    ]
    .into_iter()
    .collect()
});

static PREPOSITIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "of", "to", "in", "on", "at", "by", "with", "from", "into", "over", "under", "after",
        "before", "de", "del", "en", "para", "con", "por", "sobre", "entre",
    ]
    .into_iter()
    .collect()
});

static CONJUNCTIONS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["and", "or", "but", "nor", "y", "e", "o", "u", "pero", "ni"].into_iter().collect());

/// Digits with an optional trailing letter run, e.g. "2024" or "5k".
static NUMERIC_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+[a-zA-Z]*$").expect("valid regex"));

/// True when the lowercased word belongs to the stop-word set.
pub fn is_stop_word(normal: &str) -> bool {
    STOP_WORDS.contains(normal)
}

pub fn is_determiner(normal: &str) -> bool {
    DETERMINERS.contains(normal)
}

pub fn is_preposition(normal: &str) -> bool {
    PREPOSITIONS.contains(normal)
}

pub fn is_conjunction(normal: &str) -> bool {
    CONJUNCTIONS.contains(normal)
}

/// True for purely numeric surface forms, allowing unit-style suffixes ("5k").
pub fn is_numeric_word(word: &str) -> bool {
    NUMERIC_WORD.is_match(word)
}
