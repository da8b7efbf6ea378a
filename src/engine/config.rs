// SPDX-License-Identifier: AGPL-3.0-only
// SPDX-FileCopyrightText: 2025 Steve Clarke <stephenlclarke@mac.com> - https://xyzzy.tools

//! Strength presets and configuration resolution.  A named preset supplies
//! every default; caller overrides win field by field.  Resolution never
//! fails: an unknown strength silently falls back to the default preset.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Which characters of a masked word survive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaskStyle {
    /// Keep the first character only.
    Initial,
    /// Keep the first and last characters.
    Balanced,
}

impl MaskStyle {
    /// Parse a user-facing style name.  "prefix" is accepted as an alias for
    /// the initial style.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "initial" | "prefix" => Some(Self::Initial),
            "balanced" => Some(Self::Balanced),
            _ => None,
        }
    }
}

impl fmt::Display for MaskStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initial => write!(f, "initial"),
            Self::Balanced => write!(f, "balanced"),
        }
    }
}

/// Default values bundled under a strength name.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetConfig {
    pub target_mask_ratio: f64,
    pub key_word_count: usize,
    pub mask_style: MaskStyle,
    pub mask_character: char,
    pub min_word_length: usize,
}

/// Strength applied when none is requested or the name is unknown.
pub const DEFAULT_STRENGTH: &str = "trending";

const TRENDING: PresetConfig = PresetConfig {
    target_mask_ratio: 0.6,
    key_word_count: 1,
    mask_style: MaskStyle::Initial,
    mask_character: '*',
    min_word_length: 3,
};

const SEARCH: PresetConfig = PresetConfig {
    target_mask_ratio: 0.4,
    key_word_count: 2,
    mask_style: MaskStyle::Balanced,
    mask_character: '*',
    min_word_length: 3,
};

/// Read-only preset catalogue, initialised once and never mutated.
pub static STRENGTH_PRESETS: Lazy<BTreeMap<&'static str, PresetConfig>> =
    Lazy::new(|| BTreeMap::from([("trending", TRENDING), ("search", SEARCH)]));

/// Caller overrides.  Every field is optional; unset fields inherit from the
/// resolved preset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObfuscationOptions {
    pub strength: Option<String>,
    pub target_mask_ratio: Option<f64>,
    pub key_word_count: Option<usize>,
    pub mask_style: Option<MaskStyle>,
    pub mask_character: Option<char>,
    pub min_word_length: Option<usize>,
}

/// Fully-populated configuration for one obfuscation call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObfuscationConfig {
    /// The strength name as requested, even when it fell back to defaults.
    pub strength: String,
    pub target_mask_ratio: f64,
    pub key_word_count: usize,
    pub mask_style: MaskStyle,
    pub mask_character: char,
    pub min_word_length: usize,
}

/// Merge the requested preset with caller overrides, field by field.
pub fn resolve_config(options: &ObfuscationOptions) -> ObfuscationConfig {
    let strength = options.strength.as_deref().unwrap_or(DEFAULT_STRENGTH);
    let preset = STRENGTH_PRESETS.get(strength).copied().unwrap_or(TRENDING);

    ObfuscationConfig {
        strength: strength.to_string(),
        target_mask_ratio: options.target_mask_ratio.unwrap_or(preset.target_mask_ratio),
        key_word_count: options.key_word_count.unwrap_or(preset.key_word_count),
        mask_style: options.mask_style.unwrap_or(preset.mask_style),
        mask_character: options.mask_character.unwrap_or(preset.mask_character),
        min_word_length: options.min_word_length.unwrap_or(preset.min_word_length),
    }
}
