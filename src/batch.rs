// SPDX-License-Identifier: AGPL-3.0-only
// SPDX-FileCopyrightText: 2025 Steve Clarke <stephenlclarke@mac.com> - https://xyzzy.tools

//! Streaming driver used by the CLI: feeds titles from files, stdin or
//! `--title` flags through the engine.  Stdin is processed line by line so
//! the tool composes in pipelines; whole files are transformed in parallel
//! (the engine is a pure function, so order is restored afterwards).

use crate::engine::{self, ObfuscationConfig};
use rayon::prelude::*;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

/// How each processed title is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// The masked title alone, one per line.
    Plain,
    /// One JSON object per line carrying the original alongside the mask.
    Json,
}

/// Shared context so the per-file and per-line helpers keep short signatures.
pub struct BatchContext<'a> {
    pub out: &'a mut dyn Write,
    pub err_out: &'a mut dyn Write,
    pub config: &'a ObfuscationConfig,
    /// Mask every word instead of running the salience pipeline.
    pub every_word: bool,
    pub mode: OutputMode,
}

/// JSON row mirroring the shape upstream services expose for masked titles.
#[derive(Serialize)]
struct MaskedTitle<'a> {
    original: &'a str,
    masked: &'a str,
}

/// Process each path in order ("-" means stdin; an empty list reads stdin).
/// Returns the process exit code.
pub fn process_files(paths: &[String], ctx: &mut BatchContext<'_>) -> i32 {
    let mut had_error = false;

    if paths.is_empty() {
        return handle_stdin(ctx);
    }

    for path in paths {
        if path == "-" {
            if handle_stdin(ctx) != 0 {
                had_error = true;
            }
            continue;
        }

        if handle_file(path, ctx).is_err() {
            had_error = true;
        }
    }

    if had_error { 1 } else { 0 }
}

/// Obfuscate titles passed directly on the command line.
pub fn process_titles(titles: &[String], ctx: &mut BatchContext<'_>) -> i32 {
    for title in titles {
        let masked = transform(title, ctx.config, ctx.every_word);
        if write_row(ctx, title, &masked).is_err() {
            return 1;
        }
    }
    0
}

fn handle_stdin(ctx: &mut BatchContext<'_>) -> i32 {
    let reader = BufReader::new(io::stdin().lock());
    match stream_lines(reader, ctx) {
        Ok(()) => 0,
        Err(err) => {
            let _ = writeln!(ctx.err_out, "Error reading input: {err}");
            1
        }
    }
}

fn handle_file(path: &str, ctx: &mut BatchContext<'_>) -> io::Result<()> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            let _ = writeln!(ctx.err_out, "Cannot open file {path}: {err}");
            return Err(err);
        }
    };

    let lines: Vec<String> = BufReader::new(file).lines().collect::<io::Result<_>>()?;
    let config = ctx.config;
    let every_word = ctx.every_word;
    let masked: Vec<String> = lines
        .par_iter()
        .map(|line| transform(line, config, every_word))
        .collect();

    for (original, masked) in lines.iter().zip(&masked) {
        write_row(ctx, original, masked)?;
    }
    Ok(())
}

fn stream_lines<R: BufRead>(reader: R, ctx: &mut BatchContext<'_>) -> io::Result<()> {
    for line in reader.lines() {
        let line = line?;
        let masked = transform(&line, ctx.config, ctx.every_word);
        write_row(ctx, &line, &masked)?;
    }
    Ok(())
}

fn transform(title: &str, config: &ObfuscationConfig, every_word: bool) -> String {
    if every_word {
        engine::obfuscate_every_word(title, config.mask_character)
    } else {
        engine::obfuscate_title_with(title, config)
    }
}

fn write_row(ctx: &mut BatchContext<'_>, original: &str, masked: &str) -> io::Result<()> {
    match ctx.mode {
        OutputMode::Plain => writeln!(ctx.out, "{masked}"),
        OutputMode::Json => {
            let row = MaskedTitle { original, masked };
            let json = serde_json::to_string(&row).map_err(io::Error::other)?;
            writeln!(ctx.out, "{json}")
        }
    }
}
