// SPDX-License-Identifier: AGPL-3.0-only
// SPDX-FileCopyrightText: 2025 Steve Clarke <stephenlclarke@mac.com> - https://xyzzy.tools

//! Best-effort grammatical role tagging.  The engine only needs coarse role
//! categories, so the default implementation leans on fixed word lists,
//! capitalisation and suffix patterns rather than a full part-of-speech
//! model.  Callers wanting richer tagging can supply their own [`Tagger`].

use crate::engine::lexicon;
use std::fmt;

/// Grammatical roles a word can carry.  A word may hold several at once
/// (proper nouns are also nouns, acronyms usually are too).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum Tag {
    Noun,
    ProperNoun,
    Verb,
    Adjective,
    Adverb,
    Acronym,
    Preposition,
    Determiner,
    Conjunction,
}

impl Tag {
    const fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

/// Compact set of [`Tag`] values carried by a token.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct TagSet(u16);

impl TagSet {
    pub const fn empty() -> Self {
        TagSet(0)
    }

    pub fn insert(&mut self, tag: Tag) {
        self.0 |= tag.bit();
    }

    #[must_use]
    pub fn with(mut self, tag: Tag) -> Self {
        self.insert(tag);
        self
    }

    pub const fn contains(self, tag: Tag) -> bool {
        self.0 & tag.bit() != 0
    }

    pub fn contains_any(self, tags: &[Tag]) -> bool {
        tags.iter().any(|tag| self.contains(*tag))
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const ALL: [Tag; 9] = [
            Tag::Noun,
            Tag::ProperNoun,
            Tag::Verb,
            Tag::Adjective,
            Tag::Adverb,
            Tag::Acronym,
            Tag::Preposition,
            Tag::Determiner,
            Tag::Conjunction,
        ];
        f.debug_set()
            .entries(ALL.iter().filter(|tag| self.contains(**tag)))
            .finish()
    }
}

/// Positional facts the tagger may consult alongside the word itself.
#[derive(Debug, Clone, Copy)]
pub struct TagContext {
    /// Whether this is the first word-like token of the title.
    pub first_word: bool,
    /// Whether the nearest preceding word-like token starts lowercase.  In a
    /// title-cased heading every word is capitalised, so capitalisation is
    /// only treated as a proper-noun signal when it stands out.
    pub follows_lowercase: bool,
}

/// Pluggable tagging capability: `tag(word, context)` returns the role set.
pub trait Tagger {
    fn tag(&self, word: &str, context: &TagContext) -> TagSet;
}

/// Default tagger built from the embedded lexicon plus suffix heuristics.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicTagger;

/// Suffixes checked longest-first within each category.  A stem of at least
/// three characters is required, so short words like "red" or "only" do not
/// false-positive.
const ADVERB_SUFFIXES: [&str; 2] = ["mente", "ly"];
const ADJECTIVE_SUFFIXES: [&str; 7] = ["able", "ible", "ful", "ous", "ive", "less", "ble"];
const VERB_SUFFIXES: [&str; 6] = ["iendo", "ando", "ing", "ize", "ise", "ed"];

impl Tagger for HeuristicTagger {
    fn tag(&self, word: &str, context: &TagContext) -> TagSet {
        let normal = word.to_lowercase();

        let mut tags = TagSet::empty();
        if lexicon::is_determiner(&normal) {
            tags.insert(Tag::Determiner);
        }
        if lexicon::is_preposition(&normal) {
            tags.insert(Tag::Preposition);
        }
        if lexicon::is_conjunction(&normal) {
            tags.insert(Tag::Conjunction);
        }
        if !tags.is_empty() {
            return tags;
        }

        if is_acronym(word) {
            return TagSet::empty().with(Tag::Acronym).with(Tag::Noun);
        }
        if lexicon::is_numeric_word(word) {
            return TagSet::empty();
        }

        tags.insert(content_tag(&normal));
        if starts_uppercase(word) && !context.first_word && context.follows_lowercase {
            tags.insert(Tag::ProperNoun);
            tags.insert(Tag::Noun);
        }
        tags
    }
}

/// Whether the first character is an uppercase letter (Unicode aware).
pub fn starts_uppercase(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

/// Two or more characters, all uppercase letters ("AI", "NASA").
fn is_acronym(word: &str) -> bool {
    word.chars().count() >= 2 && word.chars().all(char::is_uppercase)
}

fn content_tag(normal: &str) -> Tag {
    if let Some(tag) = suffix_tag(normal, &ADVERB_SUFFIXES, Tag::Adverb) {
        return tag;
    }
    if let Some(tag) = suffix_tag(normal, &ADJECTIVE_SUFFIXES, Tag::Adjective) {
        return tag;
    }
    if let Some(tag) = suffix_tag(normal, &VERB_SUFFIXES, Tag::Verb) {
        return tag;
    }
    Tag::Noun
}

fn suffix_tag(normal: &str, suffixes: &[&str], tag: Tag) -> Option<Tag> {
    let len = normal.chars().count();
    for suffix in suffixes {
        if normal.ends_with(suffix) && len >= suffix.chars().count() + 3 {
            return Some(tag);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mid_title() -> TagContext {
        TagContext {
            first_word: false,
            follows_lowercase: false,
        }
    }

    #[test]
    fn function_words_short_circuit() {
        let tagger = HeuristicTagger;
        assert!(tagger.tag("The", &mid_title()).contains(Tag::Determiner));
        assert!(tagger.tag("con", &mid_title()).contains(Tag::Preposition));
        assert!(tagger.tag("pero", &mid_title()).contains(Tag::Conjunction));
        assert!(!tagger.tag("the", &mid_title()).contains(Tag::Noun));
    }

    #[test]
    fn acronyms_are_also_nouns() {
        let tags = HeuristicTagger.tag("NASA", &mid_title());
        assert!(tags.contains(Tag::Acronym));
        assert!(tags.contains(Tag::Noun));
    }

    #[test]
    fn numeric_words_carry_no_roles() {
        assert!(HeuristicTagger.tag("2024", &mid_title()).is_empty());
        assert!(HeuristicTagger.tag("5k", &mid_title()).is_empty());
    }

    #[test]
    fn suffixes_pick_content_roles() {
        let tagger = HeuristicTagger;
        assert!(tagger.tag("quickly", &mid_title()).contains(Tag::Adverb));
        assert!(tagger.tag("rápidamente", &mid_title()).contains(Tag::Adverb));
        assert!(tagger.tag("incredible", &mid_title()).contains(Tag::Adjective));
        assert!(tagger.tag("plegable", &mid_title()).contains(Tag::Adjective));
        assert!(tagger.tag("breaking", &mid_title()).contains(Tag::Verb));
    }

    #[test]
    fn short_words_do_not_false_positive_on_suffixes() {
        // "red" ends in "ed" but the stem is too short to count as a verb.
        assert!(HeuristicTagger.tag("red", &mid_title()).contains(Tag::Noun));
    }

    #[test]
    fn unknown_words_default_to_noun() {
        assert!(HeuristicTagger.tag("teléfono", &mid_title()).contains(Tag::Noun));
        assert!(HeuristicTagger.tag("smartphone", &mid_title()).contains(Tag::Noun));
    }

    #[test]
    fn distinctive_capitalisation_marks_proper_nouns() {
        let context = TagContext {
            first_word: false,
            follows_lowercase: true,
        };
        let tags = HeuristicTagger.tag("Bangkok", &context);
        assert!(tags.contains(Tag::ProperNoun));
        assert!(tags.contains(Tag::Noun));

        // Title-cased neighbours suppress the signal.
        assert!(!HeuristicTagger.tag("Bangkok", &mid_title()).contains(Tag::ProperNoun));

        // So does leading position.
        let first = TagContext {
            first_word: true,
            follows_lowercase: false,
        };
        assert!(!HeuristicTagger.tag("Bangkok", &first).contains(Tag::ProperNoun));
    }

    #[test]
    fn tag_set_tracks_membership() {
        let mut tags = TagSet::empty();
        assert!(tags.is_empty());
        tags.insert(Tag::Noun);
        tags.insert(Tag::ProperNoun);
        assert!(tags.contains(Tag::Noun));
        assert!(!tags.contains(Tag::Verb));
        assert!(tags.contains_any(&[Tag::Verb, Tag::ProperNoun]));
        assert!(!tags.contains_any(&[Tag::Verb, Tag::Adverb]));
    }
}
