// SPDX-License-Identifier: AGPL-3.0-only
// SPDX-FileCopyrightText: 2025 Steve Clarke <stephenlclarke@mac.com> - https://xyzzy.tools

//! Splits a title into an ordered run of word and non-word tokens while
//! keeping every surrounding character as trivia, so the title can be
//! reassembled losslessly around the masked word bodies.

use crate::engine::tagger::{TagContext, TagSet, Tagger};

/// One segment of the title.  `pre` and `post` hold the punctuation and
/// whitespace surrounding the word body; concatenating `pre + text + post`
/// for every token in order reproduces the input exactly.
#[derive(Debug, Clone)]
pub struct Token {
    /// Dense 0-based position in the token sequence.  Later stages refer to
    /// tokens exclusively by this index.
    pub index: usize,
    /// Raw surface form of the word body (or the whole segment for non-word
    /// tokens such as "&").
    pub text: String,
    /// Lowercased form used for lexicon lookups.
    pub normal: String,
    pub pre: String,
    pub post: String,
    pub tags: TagSet,
    /// Whether `text` contains at least one letter or digit.
    pub is_word: bool,
}

/// Tokenize a title and assign grammatical tags with the supplied tagger.
/// The input is expected to be pre-trimmed by the caller.
pub fn tokenize_title(title: &str, tagger: &dyn Tagger) -> Vec<Token> {
    let mut tokens = raw_tokens(title);

    let mut first_word_pending = true;
    let mut follows_lowercase = false;
    for token in &mut tokens {
        if !token.is_word {
            continue;
        }
        let context = TagContext {
            first_word: first_word_pending,
            follows_lowercase,
        };
        token.tags = tagger.tag(&token.text, &context);
        first_word_pending = false;
        follows_lowercase = token
            .text
            .chars()
            .next()
            .is_some_and(char::is_lowercase);
    }
    tokens
}

/// First pass: carve the title into whitespace runs and segments, peeling
/// leading/trailing punctuation of each segment into trivia.  Whitespace
/// attaches to the preceding token's `post` (or the first token's `pre`).
fn raw_tokens(title: &str) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut pending_ws = String::new();
    let mut iter = title.char_indices().peekable();

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
        let run = &title[start..end];

        if whitespace {
            match tokens.last_mut() {
                Some(last) => last.post.push_str(run),
                None => pending_ws.push_str(run),
            }
        } else {
            let mut token = segment_token(run, tokens.len());
            if !pending_ws.is_empty() {
                token.pre.insert_str(0, &pending_ws);
                pending_ws.clear();
            }
            tokens.push(token);
        }
    }
    tokens
}

/// Build a token from one non-whitespace segment.  The word body is the span
/// between the first and last alphanumeric character; anything outside it
/// becomes trivia.  Segments without letters or digits stay whole as
/// non-word tokens.
fn segment_token(segment: &str, index: usize) -> Token {
    let mut first_alnum = None;
    let mut last_alnum = None;
    for (i, c) in segment.char_indices() {
        if c.is_alphanumeric() {
            if first_alnum.is_none() {
                first_alnum = Some(i);
            }
            last_alnum = Some(i + c.len_utf8());
        }
    }

    match (first_alnum, last_alnum) {
        (Some(start), Some(end)) => {
            let body = &segment[start..end];
            Token {
                index,
                text: body.to_string(),
                normal: body.to_lowercase(),
                pre: segment[..start].to_string(),
                post: segment[end..].to_string(),
                tags: TagSet::empty(),
                is_word: true,
            }
        }
        _ => Token {
            index,
            text: segment.to_string(),
            normal: segment.to_lowercase(),
            pre: String::new(),
            post: String::new(),
            tags: TagSet::empty(),
            is_word: false,
        },
    }
}
