// SPDX-License-Identifier: AGPL-3.0-only
// SPDX-FileCopyrightText: 2025 Steve Clarke <stephenlclarke@mac.com> - https://xyzzy.tools

//! Deterministic title obfuscation.  A resolved configuration drives a fixed
//! pipeline: tokenize, score, exempt the key words, filter and ration the
//! mask candidates, mask, reassemble.  Pure function of its inputs: no IO,
//! no randomness, no shared mutable state, safe to call concurrently.

pub mod config;
pub mod lexicon;
pub mod masker;
pub mod scorer;
pub mod selector;
pub mod tagger;
pub mod tokenizer;

pub use config::{
    DEFAULT_STRENGTH, MaskStyle, ObfuscationConfig, ObfuscationOptions, PresetConfig,
    STRENGTH_PRESETS, resolve_config,
};
pub use tagger::{HeuristicTagger, Tag, TagContext, TagSet, Tagger};
pub use tokenizer::{Token, tokenize_title};

/// Obfuscate a title with options merged over the strength presets.
pub fn obfuscate_title(title: &str, options: &ObfuscationOptions) -> String {
    obfuscate_title_with(title, &resolve_config(options))
}

/// Obfuscate with an already-resolved configuration.  Useful when a caller
/// resolves once and processes many titles.
pub fn obfuscate_title_with(title: &str, config: &ObfuscationConfig) -> String {
    obfuscate_title_tagged(title, config, &HeuristicTagger)
}

/// Full pipeline with a caller-supplied tagger.
pub fn obfuscate_title_tagged(
    title: &str,
    config: &ObfuscationConfig,
    tagger: &dyn Tagger,
) -> String {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let tokens = tokenize_title(trimmed, tagger);
    if tokens.is_empty() {
        return trimmed.to_string();
    }

    let key_words = selector::select_key_words(&tokens, config);
    let candidates = selector::mask_candidates(&tokens, &key_words, config);
    let mut masked = selector::build_masked_set(&candidates, config);
    selector::ensure_minimum_masking(&mut masked, &tokens, &key_words);

    let mut output = String::with_capacity(trimmed.len());
    for token in &tokens {
        output.push_str(&token.pre);
        if masked.contains(&token.index) {
            output.push_str(&masker::mask_word(
                &token.text,
                config.mask_style,
                config.mask_character,
            ));
        } else {
            output.push_str(&token.text);
        }
        output.push_str(&token.post);
    }
    output.trim().to_string()
}

/// Blanket variant: mask every whitespace-delimited segment of the title,
/// bypassing the salience pipeline entirely.  Words of up to two characters
/// are fully replaced, longer ones keep their first and last character.
pub fn obfuscate_every_word(title: &str, mask_character: char) -> String {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let mut output = String::with_capacity(trimmed.len());
    let mut iter = trimmed.char_indices().peekable();
    while let Some(&(start, first)) = iter.peek() {
        let whitespace = first.is_whitespace();
        let mut end = start;
        while let Some(&(i, c)) = iter.peek() {
            if c.is_whitespace() != whitespace {
                break;
            }
            end = i + c.len_utf8();
            iter.next();
        }
        let run = &trimmed[start..end];
        if whitespace {
            output.push_str(run);
        } else {
            output.push_str(&masker::mask_whole_segment(run, mask_character));
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strength(name: &str) -> ObfuscationOptions {
        ObfuscationOptions {
            strength: Some(name.to_string()),
            ..Default::default()
        }
    }

    fn mask_count(text: &str, mask_character: char) -> usize {
        text.chars().filter(|c| *c == mask_character).count()
    }

    #[test]
    fn masks_descriptive_words_while_preserving_key_nouns() {
        let original = "Amazing New Smartphone Review";
        let obfuscated = obfuscate_title(original, &strength("trending"));

        assert_ne!(obfuscated, original);
        assert!(obfuscated.contains("Smartphone"), "got: {obfuscated}");
        assert!(!obfuscated.contains("Amazing"), "got: {obfuscated}");
        assert!(mask_count(&obfuscated, '*') >= 3);
    }

    #[test]
    fn search_strength_applies_a_lighter_mask() {
        let original = "Amazing New Smartphone Review";
        let trending = obfuscate_title(original, &strength("trending"));
        let search = obfuscate_title(original, &strength("search"));

        assert!(mask_count(&trending, '*') > mask_count(&search, '*'));
        assert!(search.contains("Review"));
        assert_ne!(search, original);
    }

    #[test]
    fn identical_inputs_yield_identical_outputs() {
        let sample = "2024 Update: AI in Healthcare & Finance";
        let first = obfuscate_title(sample, &strength("trending"));
        let second = obfuscate_title(sample, &strength("trending"));
        assert_eq!(first, second);
    }

    #[test]
    fn multilingual_titles_keep_their_core_meaning() {
        let title = "Increíble análisis del teléfono plegable";
        let obfuscated = obfuscate_title(title, &strength("trending"));

        assert!(obfuscated.contains("teléfono"), "got: {obfuscated}");
        assert!(!obfuscated.contains("Increíble"), "got: {obfuscated}");
    }

    #[test]
    fn mask_character_override_is_used_throughout() {
        let options = ObfuscationOptions {
            strength: Some("trending".to_string()),
            mask_character: Some('#'),
            ..Default::default()
        };
        let obfuscated = obfuscate_title("Breaking News: Massive Storm Approaches", &options);

        assert!(obfuscated.contains('#'));
        assert!(!obfuscated.contains('*'));
        assert!(!obfuscated.contains("Breaking"));
    }

    #[test]
    fn key_words_survive_even_at_full_ratio() {
        let options = ObfuscationOptions {
            target_mask_ratio: Some(1.0),
            ..Default::default()
        };
        let obfuscated = obfuscate_title("Amazing New Smartphone Review", &options);
        assert!(obfuscated.contains("Review"), "got: {obfuscated}");
        assert!(!obfuscated.contains("Amazing"));
        assert!(!obfuscated.contains("Smartphone"));
    }

    #[test]
    fn stop_words_are_never_masked() {
        let obfuscated = obfuscate_title("the massive storm", &strength("trending"));
        assert!(obfuscated.starts_with("the "), "got: {obfuscated}");
        assert!(obfuscated.contains('*'));
        assert!(obfuscated.ends_with("storm"), "top noun survives: {obfuscated}");
    }

    #[test]
    fn punctuation_and_spacing_survive_masking() {
        let obfuscated = obfuscate_title("Breaking News: Storm!", &strength("trending"));
        assert!(obfuscated.contains(": "), "got: {obfuscated}");
        assert!(obfuscated.ends_with('!'), "got: {obfuscated}");
    }

    #[test]
    fn degenerate_inputs_become_empty_strings() {
        assert_eq!(obfuscate_title("", &ObfuscationOptions::default()), "");
        assert_eq!(obfuscate_title("   \t ", &ObfuscationOptions::default()), "");
    }

    #[test]
    fn titles_with_no_eligible_words_still_get_one_mask() {
        let obfuscated = obfuscate_title("AI & 2024", &strength("trending"));
        assert_eq!(obfuscated, "AI & 2***");
    }

    #[test]
    fn every_word_variant_masks_the_lot() {
        assert_eq!(obfuscate_every_word("Hello World", '*'), "H***o W***d");
        assert_eq!(obfuscate_every_word("go to", '*'), "** **");
        assert_eq!(obfuscate_every_word("  spaced   out  ", '*'), "s****d   o*t");
        assert_eq!(obfuscate_every_word("", '*'), "");
    }

    #[test]
    fn resolved_configuration_is_reusable_across_titles() {
        let config = resolve_config(&strength("search"));
        let one = obfuscate_title_with("Amazing New Smartphone Review", &config);
        let two = obfuscate_title("Amazing New Smartphone Review", &strength("search"));
        assert_eq!(one, two);
    }
}
