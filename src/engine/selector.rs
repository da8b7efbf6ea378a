// SPDX-License-Identifier: AGPL-3.0-only
// SPDX-FileCopyrightText: 2025 Steve Clarke <stephenlclarke@mac.com> - https://xyzzy.tools

//! Key-word exemption and mask selection.  The exempted set and the masked
//! set are both sets of token indices and must stay disjoint.

use crate::engine::config::ObfuscationConfig;
use crate::engine::lexicon;
use crate::engine::scorer;
use crate::engine::tagger::Tag;
use crate::engine::tokenizer::Token;
use std::collections::HashSet;

const MASKABLE_ROLES: [Tag; 4] = [Tag::Noun, Tag::Adjective, Tag::Verb, Tag::Adverb];

/// Indices of the top-scoring words exempted from masking.  When fewer
/// candidates exist than requested, all of them are exempt.
pub fn select_key_words(tokens: &[Token], config: &ObfuscationConfig) -> HashSet<usize> {
    scorer::rank_candidates(tokens)
        .into_iter()
        .take(config.key_word_count)
        .map(|ranked| ranked.index)
        .collect()
}

/// Tokens eligible for masking, in original left-to-right order.
pub fn mask_candidates<'a>(
    tokens: &'a [Token],
    key_words: &HashSet<usize>,
    config: &ObfuscationConfig,
) -> Vec<&'a Token> {
    tokens
        .iter()
        .filter(|token| is_mask_candidate(token, key_words, config))
        .collect()
}

fn is_mask_candidate(
    token: &Token,
    key_words: &HashSet<usize>,
    config: &ObfuscationConfig,
) -> bool {
    if !token.is_word || key_words.contains(&token.index) {
        return false;
    }
    if lexicon::is_stop_word(&token.normal) {
        return false;
    }
    if token.text.chars().count() < config.min_word_length {
        return false;
    }
    if lexicon::is_numeric_word(&token.text) || token.tags.contains(Tag::Acronym) {
        return false;
    }
    if token
        .tags
        .contains_any(&[Tag::Preposition, Tag::Determiner, Tag::Conjunction])
    {
        return false;
    }
    token.tags.contains_any(&MASKABLE_ROLES)
}

/// Choose how many candidates to mask: at least one, targeting the
/// configured ratio of the eligible count, taken in source order.
pub fn build_masked_set(candidates: &[&Token], config: &ObfuscationConfig) -> HashSet<usize> {
    if candidates.is_empty() {
        return HashSet::new();
    }
    let target = (candidates.len() as f64 * config.target_mask_ratio).ceil();
    let mask_count = (target as usize).max(1);
    candidates
        .iter()
        .take(mask_count)
        .map(|token| token.index)
        .collect()
}

/// Guarantee at least one masked word: when nothing was eligible, mask the
/// longest non-exempt word-like token (first occurrence wins ties).
pub fn ensure_minimum_masking(
    masked: &mut HashSet<usize>,
    tokens: &[Token],
    key_words: &HashSet<usize>,
) {
    if !masked.is_empty() {
        return;
    }

    let mut fallback: Option<(usize, usize)> = None; // (length, index)
    for token in tokens {
        if !token.is_word || key_words.contains(&token.index) {
            continue;
        }
        let length = token.text.chars().count();
        if fallback.is_none_or(|(best, _)| length > best) {
            fallback = Some((length, token.index));
        }
    }
    if let Some((_, index)) = fallback {
        masked.insert(index);
    }
}
