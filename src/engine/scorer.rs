// SPDX-License-Identifier: AGPL-3.0-only
// SPDX-FileCopyrightText: 2025 Steve Clarke <stephenlclarke@mac.com> - https://xyzzy.tools

//! Salience scoring.  Named entities and nouns dominate, longer and later
//! words score somewhat higher.  The weights are tuning values, not a wire
//! contract; only the relative ranking matters to callers.

use crate::engine::lexicon;
use crate::engine::tagger::{Tag, starts_uppercase};
use crate::engine::tokenizer::Token;
use std::cmp::Ordering;

/// A scoreable candidate, referenced by token index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedToken {
    pub index: usize,
    pub score: f64,
}

/// Score one token against the full sequence length.
pub fn score_token(token: &Token, total_tokens: usize) -> f64 {
    let mut score = 0.0;
    if token.tags.contains(Tag::ProperNoun) {
        score += 5.0;
    }
    if token.tags.contains(Tag::Noun) {
        score += 3.0;
    }
    if token.tags.contains(Tag::Acronym) {
        score += 3.0;
    }
    if token.tags.contains(Tag::Verb) {
        score += 2.0;
    }
    if token.tags.contains(Tag::Adjective) {
        score += 1.5;
    }
    if starts_uppercase(&token.text) {
        score += 1.0;
    }

    let length = token.text.chars().count() as f64;
    score += (length / 2.0).min(3.0);

    // Positional bias favouring later words; zero for a lone token.
    if total_tokens > 1 {
        score += (token.index as f64 / (total_tokens as f64 - 1.0)) * 2.0;
    }
    score
}

/// All word-like, non-stopword tokens sorted by descending score.  The sort
/// is stable so ties keep their left-to-right order.
pub fn rank_candidates(tokens: &[Token]) -> Vec<RankedToken> {
    let total = tokens.len();
    let mut ranked: Vec<RankedToken> = tokens
        .iter()
        .filter(|token| token.is_word && !lexicon::is_stop_word(&token.normal))
        .map(|token| RankedToken {
            index: token.index,
            score: score_token(token, total),
        })
        .collect();
    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    ranked
}
