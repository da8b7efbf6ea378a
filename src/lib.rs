// SPDX-License-Identifier: AGPL-3.0-only
// SPDX-FileCopyrightText: 2025 Steve Clarke <stephenlclarke@mac.com> - https://xyzzy.tools

//! titlemask: deterministic, linguistically-aware title obfuscation.
//!
//! The [`engine`] module is the whole of the public contract: it masks a
//! configurable share of a title's words while keeping the most salient
//! nouns visible, so a reader can still infer the topic.  [`batch`] drives
//! the engine over files and stdin for the CLI binary; API-layer callers
//! should depend on [`engine`] alone.

pub mod batch;
pub mod engine;

pub use engine::{
    MaskStyle, ObfuscationConfig, ObfuscationOptions, STRENGTH_PRESETS, obfuscate_every_word,
    obfuscate_title, obfuscate_title_with, resolve_config,
};
