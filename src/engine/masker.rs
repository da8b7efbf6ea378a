// SPDX-License-Identifier: AGPL-3.0-only
// SPDX-FileCopyrightText: 2025 Steve Clarke <stephenlclarke@mac.com> - https://xyzzy.tools

//! Rendering of individual masked words.  Everything operates on code
//! points, never bytes, so accented and non-Latin characters survive.

use crate::engine::config::MaskStyle;

/// Mask one word body according to the style.  Replacement is one mask
/// character per original character so the word keeps its silhouette.
pub fn mask_word(word: &str, style: MaskStyle, mask_character: char) -> String {
    let chars: Vec<char> = word.chars().collect();
    if chars.is_empty() {
        return word.to_string();
    }

    match style {
        MaskStyle::Balanced => {
            if chars.len() <= 2 {
                // Too short to keep both ends: keep the head, mask the rest
                // (at least one mask character).
                let masked = repeat(mask_character, chars.len().saturating_sub(1).max(1));
                format!("{}{masked}", chars[0])
            } else {
                let middle = repeat(mask_character, chars.len() - 2);
                format!("{}{middle}{}", chars[0], chars[chars.len() - 1])
            }
        }
        MaskStyle::Initial => {
            if chars.len() == 1 {
                mask_character.to_string()
            } else {
                let rest = repeat(mask_character, chars.len() - 1);
                format!("{}{rest}", chars[0])
            }
        }
    }
}

/// Mask a whole segment including any punctuation it carries: segments of up
/// to two characters disappear entirely, longer ones keep their first and
/// last character.
pub fn mask_whole_segment(segment: &str, mask_character: char) -> String {
    let chars: Vec<char> = segment.chars().collect();
    if chars.len() <= 2 {
        return repeat(mask_character, chars.len());
    }
    let middle = repeat(mask_character, chars.len() - 2);
    format!("{}{middle}{}", chars[0], chars[chars.len() - 1])
}

fn repeat(mask_character: char, count: usize) -> String {
    std::iter::repeat_n(mask_character, count).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_style_keeps_only_the_first_character() {
        assert_eq!(mask_word("Amazing", MaskStyle::Initial, '*'), "A******");
        assert_eq!(mask_word("to", MaskStyle::Initial, '*'), "t*");
    }

    #[test]
    fn initial_style_fully_masks_single_characters() {
        assert_eq!(mask_word("a", MaskStyle::Initial, '*'), "*");
    }

    #[test]
    fn balanced_style_keeps_both_ends() {
        assert_eq!(mask_word("Amazing", MaskStyle::Balanced, '*'), "A*****g");
        assert_eq!(mask_word("abc", MaskStyle::Balanced, '*'), "a*c");
    }

    #[test]
    fn balanced_style_degrades_for_short_words() {
        assert_eq!(mask_word("to", MaskStyle::Balanced, '*'), "t*");
        assert_eq!(mask_word("a", MaskStyle::Balanced, '*'), "a*");
    }

    #[test]
    fn masking_counts_code_points_not_bytes() {
        assert_eq!(mask_word("teléfono", MaskStyle::Initial, '*'), "t*******");
        assert_eq!(mask_word("café", MaskStyle::Balanced, '*'), "c**é");
        assert_eq!(mask_word("日本語", MaskStyle::Balanced, '*'), "日*語");
    }

    #[test]
    fn custom_mask_characters_are_honoured() {
        assert_eq!(mask_word("storm", MaskStyle::Initial, '#'), "s####");
    }

    #[test]
    fn whole_segments_keep_trailing_punctuation_as_last_character() {
        assert_eq!(mask_whole_segment("News:", '*'), "N***:");
        assert_eq!(mask_whole_segment("World", '*'), "W***d");
    }

    #[test]
    fn tiny_whole_segments_vanish_completely() {
        assert_eq!(mask_whole_segment("to", '*'), "**");
        assert_eq!(mask_whole_segment("a", '*'), "*");
        assert_eq!(mask_whole_segment("", '*'), "");
    }

    #[test]
    fn empty_word_passes_through() {
        assert_eq!(mask_word("", MaskStyle::Initial, '*'), "");
    }
}
