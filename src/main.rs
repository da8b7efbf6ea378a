// SPDX-License-Identifier: AGPL-3.0-only
// SPDX-FileCopyrightText: 2025 Steve Clarke <stephenlclarke@mac.com> - https://xyzzy.tools

//! titlemask command-line entry point and CLI orchestration.
//!
//! The binary ties together the configuration presets and the streaming
//! title masker.  This file is intentionally light on masking logic; it
//! wires user input into the focused modules under `src/engine` and
//! `src/batch`.  The comments favour UK English and aim to give future
//! maintainers a quick reminder of why each function exists and how it
//! cooperates with the rest of the app.

use anyhow::{Result, anyhow};
use clap::error::ErrorKind;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::io;
use std::sync::OnceLock;
use titlemask::batch::{BatchContext, OutputMode, process_files, process_titles};
use titlemask::engine::{
    MaskStyle, ObfuscationOptions, PresetConfig, STRENGTH_PRESETS, resolve_config,
};

/// Build-time version information.  The CI pipeline bakes in the most recent
/// tag via `TITLEMASK_VERSION`; otherwise we fall back to Cargo's package
/// version which tracks the published crate.
const VERSION: &str = match option_env!("TITLEMASK_VERSION") {
    Some(tag) => tag,
    None => env!("CARGO_PKG_VERSION"),
};

/// Determine the current Git branch, defaulting to `main` when the metadata
/// was not injected during the build.
fn branch() -> &'static str {
    option_env!("TITLEMASK_BRANCH").unwrap_or("main")
}

/// Determine the short Git commit that went into the binary.  We rely on CI
/// to provide this, but fall back to a recognisable placeholder.
fn sha() -> &'static str {
    option_env!("TITLEMASK_COMMIT").unwrap_or("0000000")
}

/// Determine the rustc version baked in at build time.
fn rust_version() -> &'static str {
    option_env!("RUSTC_VERSION").unwrap_or("unknown")
}

/// Human-friendly version banner including branch and commit.
fn version_string() -> String {
    format!(
        "titlemask {VERSION} (branch:{}, commit:{}) [rust:{}]",
        branch(),
        sha(),
        rust_version()
    )
}

/// Cached version string with a 'static lifetime for clap metadata.
fn version_str() -> &'static str {
    static VERSION_STR: OnceLock<String> = OnceLock::new();
    VERSION_STR.get_or_init(version_string).as_str()
}

/// Conventional `main` that defers to `run` so tests can call the logic
/// without having to spin up a separate process.
fn main() {
    std::process::exit(match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err}");
            1
        }
    });
}

/// Parse CLI arguments, resolve the configuration, respond to informational
/// flags and finally drive the batch masker.  Everything user-facing goes
/// through here, so the structure favours clarity over cleverness.
fn run() -> Result<i32> {
    let cmd = build_cli();
    let matches = match cmd.try_get_matches() {
        Ok(m) => m,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                if err.kind() == ErrorKind::DisplayHelp {
                    print_usage();
                }
                return Ok(0);
            }
            _ => err.exit(),
        },
    };

    let opts = CliOptions::from_matches(&matches)?;

    if opts.show_version {
        println!("{}", version_string());
        return Ok(0);
    }

    if opts.presets {
        print_preset_table();
        return Ok(0);
    }

    let config = resolve_config(&opts.overrides());

    if opts.show_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(0);
    }

    let mode = if opts.json {
        OutputMode::Json
    } else {
        OutputMode::Plain
    };

    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    let mut ctx = BatchContext {
        out: &mut stdout,
        err_out: &mut stderr,
        config: &config,
        every_word: opts.every_word,
        mode,
    };

    if !opts.titles.is_empty() {
        return Ok(process_titles(&opts.titles, &mut ctx));
    }
    Ok(process_files(&opts.files, &mut ctx))
}

/// Construct the `clap` command with all supported arguments.  Options are
/// grouped roughly by feature area (configuration overrides, output, IO).
fn build_cli() -> Command {
    let mut cmd = Command::new("titlemask")
        .about("Title obfuscation utility - masks the forgettable words, keeps the salient ones")
        .disable_version_flag(true)
        .version(version_str())
        .arg(
            Arg::new("title")
                .long("title")
                .value_name("TEXT")
                .action(ArgAction::Append)
                .help("Obfuscate TEXT directly instead of reading files (repeatable)"),
        )
        .arg(
            Arg::new("strength")
                .long("strength")
                .value_name("NAME")
                .default_value("trending")
                .help("Strength preset to start from"),
        )
        .arg(
            Arg::new("ratio")
                .long("ratio")
                .value_name("VALUE")
                .help("Target share of eligible words to mask, in (0,1]"),
        )
        .arg(
            Arg::new("key-words")
                .long("key-words")
                .value_name("N")
                .help("Number of top-scoring words exempted from masking"),
        )
        .arg(
            Arg::new("style")
                .long("style")
                .value_name("NAME")
                .help("Mask style: initial or balanced"),
        )
        .arg(
            Arg::new("mask-char")
                .long("mask-char")
                .value_name("CHAR")
                .help("Mask character, literal or hex code like \\x23"),
        )
        .arg(
            Arg::new("min-length")
                .long("min-length")
                .value_name("N")
                .help("Minimum word length eligible for masking"),
        );

    cmd = add_flag_args(
        cmd,
        &[
            ("every-word", "Mask every word, ignoring salience"),
            ("json", "Emit one JSON object per title"),
            ("show-config", "Print the resolved configuration and exit"),
            ("presets", "List the strength presets and exit"),
        ],
    );

    cmd.arg(
        Arg::new("version")
            .long("version")
            .action(ArgAction::SetTrue)
            .help("Print version information and exit"),
    )
    .arg(
        Arg::new("files")
            .value_name("FILE")
            .num_args(0..)
            .action(ArgAction::Append)
            .trailing_var_arg(true),
    )
}

/// Add a set of boolean flag arguments that simply flip a boolean when present.
fn add_flag_args(cmd: Command, flags: &[(&'static str, &'static str)]) -> Command {
    let mut out = cmd;
    for (name, help) in flags {
        out = out.arg(
            Arg::new(*name)
                .long(*name)
                .action(ArgAction::SetTrue)
                .help(*help),
        );
    }
    out
}

/// Structured view of the CLI flags so downstream code gets type-safe access
/// to user intent.
struct CliOptions {
    strength: Option<String>,
    ratio: Option<f64>,
    key_words: Option<usize>,
    style: Option<MaskStyle>,
    mask_char: Option<char>,
    min_length: Option<usize>,
    titles: Vec<String>,
    every_word: bool,
    json: bool,
    show_config: bool,
    presets: bool,
    show_version: bool,
    files: Vec<String>,
}

impl CliOptions {
    /// Translate clap's `ArgMatches` into our strongly typed `CliOptions`.
    /// The function centralises validation so the rest of the code can assume
    /// sane values and bail out early when a user supplies nonsense.
    fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let titles: Vec<String> = matches
            .get_many::<String>("title")
            .map(|vals| vals.map(|v| v.to_string()).collect())
            .unwrap_or_default();

        let files: Vec<String> = matches
            .get_many::<String>("files")
            .map(|vals| vals.map(|v| v.to_string()).collect())
            .unwrap_or_default();

        Ok(Self {
            strength: matches.get_one::<String>("strength").cloned(),
            ratio: parse_ratio(matches.get_one::<String>("ratio"))?,
            key_words: parse_count(matches.get_one::<String>("key-words"), "key-words")?,
            style: parse_style(matches.get_one::<String>("style"))?,
            mask_char: parse_mask_char(matches.get_one::<String>("mask-char"))?,
            min_length: parse_count(matches.get_one::<String>("min-length"), "min-length")?,
            titles,
            every_word: matches.get_flag("every-word"),
            json: matches.get_flag("json"),
            show_config: matches.get_flag("show-config"),
            presets: matches.get_flag("presets"),
            show_version: matches.get_flag("version"),
            files,
        })
    }

    /// Repackage the validated flags as engine-level overrides.
    fn overrides(&self) -> ObfuscationOptions {
        ObfuscationOptions {
            strength: self.strength.clone(),
            target_mask_ratio: self.ratio,
            key_word_count: self.key_words,
            mask_style: self.style,
            mask_character: self.mask_char,
            min_word_length: self.min_length,
        }
    }
}

/// Interpret the `--ratio` override, keeping the engine's (0,1] contract.
/// This is kept separate so unit tests can focus on the parsing logic.
fn parse_ratio(value: Option<&String>) -> Result<Option<f64>> {
    match value {
        None => Ok(None),
        Some(v) => match v.parse::<f64>() {
            Ok(ratio) if ratio > 0.0 && ratio <= 1.0 => Ok(Some(ratio)),
            _ => {
                print_usage();
                Err(anyhow!(
                    "invalid value for --ratio: {v} (expected 0 < r <= 1)"
                ))
            }
        },
    }
}

/// Parse a non-negative integer flag such as `--key-words` or `--min-length`.
fn parse_count(value: Option<&String>, name: &str) -> Result<Option<usize>> {
    match value {
        None => Ok(None),
        Some(v) => match v.parse::<usize>() {
            Ok(count) => Ok(Some(count)),
            Err(_) => {
                print_usage();
                Err(anyhow!("invalid value for --{name}: {v}"))
            }
        },
    }
}

/// Interpret the `--style` override by name.
fn parse_style(value: Option<&String>) -> Result<Option<MaskStyle>> {
    match value {
        None => Ok(None),
        Some(v) => match MaskStyle::parse(v) {
            Some(style) => Ok(Some(style)),
            None => {
                print_usage();
                Err(anyhow!("invalid value for --style: {v}"))
            }
        },
    }
}

/// Parse the mask character supplied on the CLI.  Users can pass a literal
/// character or a hex escape like `\x23`.  The parser errs on the side of
/// helpful messages whilst staying strict.
fn parse_mask_char(value: Option<&String>) -> Result<Option<char>> {
    match value {
        None => Ok(None),
        Some(v) if v.is_empty() => Err(anyhow!("mask character cannot be empty")),
        Some(v) => {
            if let Some(hex) = v.strip_prefix("\\x").or_else(|| v.strip_prefix("0x")) {
                let code = u32::from_str_radix(hex, 16)
                    .map_err(|_| anyhow!("invalid mask character hex value: {v}"))?;
                return char::from_u32(code)
                    .map(Some)
                    .ok_or_else(|| anyhow!("mask character code {v} is not valid Unicode"));
            }
            if v.chars().count() == 1 {
                return Ok(v.chars().next());
            }
            Err(anyhow!(
                "mask character must be a single character or hex code like \\x23"
            ))
        }
    }
}

/// Print the condensed usage guide.  Kept in one function so we can reuse it
/// whenever argument parsing fails.
fn print_usage() {
    static USAGE: &str = include_str!("../resources/messages/usage_en.txt");
    println!("\n{USAGE}");
}

/// Print the table header for preset listings.
fn print_preset_header() {
    println!(
        "  {:<10} {:>6} {:>9} {:>10} {:>5} {:>10}",
        "Strength", "Ratio", "KeyWords", "Style", "Mask", "MinLength",
    );
}

/// Print one row of preset metadata.
fn print_preset_row(name: &str, preset: &PresetConfig) {
    println!(
        "  {:<10} {:>6} {:>9} {:>10} {:>5} {:>10}",
        name,
        preset.target_mask_ratio,
        preset.key_word_count,
        preset.mask_style.to_string(),
        preset.mask_character,
        preset.min_word_length,
    );
}

/// Render the full preset catalogue.
fn print_preset_table() {
    let names: Vec<&str> = STRENGTH_PRESETS.keys().copied().collect();
    println!("Available strengths: {}", names.join(","));
    println!();
    print_preset_header();
    for (name, preset) in STRENGTH_PRESETS.iter() {
        print_preset_row(name, preset);
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_string_matches_components() {
        let expected = format!(
            "titlemask {VERSION} (branch:{}, commit:{}) [rust:{}]",
            branch(),
            sha(),
            rust_version()
        );
        assert_eq!(version_string(), expected);
    }

    #[test]
    fn version_str_is_cached() {
        let first = version_str() as *const str;
        let second = version_str() as *const str;
        assert_eq!(first, second, "cached version string should be stable");
    }

    #[test]
    fn ratio_parser_enforces_the_open_interval() {
        assert_eq!(parse_ratio(None).unwrap(), None);
        assert_eq!(parse_ratio(Some(&"0.5".to_string())).unwrap(), Some(0.5));
        assert_eq!(parse_ratio(Some(&"1".to_string())).unwrap(), Some(1.0));
        assert!(parse_ratio(Some(&"0".to_string())).is_err());
        assert!(parse_ratio(Some(&"1.5".to_string())).is_err());
        assert!(parse_ratio(Some(&"lots".to_string())).is_err());
    }

    #[test]
    fn count_parser_rejects_negatives_and_noise() {
        assert_eq!(
            parse_count(Some(&"3".to_string()), "key-words").unwrap(),
            Some(3)
        );
        assert!(parse_count(Some(&"-1".to_string()), "key-words").is_err());
        assert!(parse_count(Some(&"many".to_string()), "key-words").is_err());
    }

    #[test]
    fn style_parser_accepts_known_names() {
        assert_eq!(
            parse_style(Some(&"balanced".to_string())).unwrap(),
            Some(MaskStyle::Balanced)
        );
        assert!(parse_style(Some(&"wavy".to_string())).is_err());
    }

    #[test]
    fn mask_char_parser_supports_literals_and_hex() {
        assert_eq!(parse_mask_char(None).unwrap(), None);
        assert_eq!(parse_mask_char(Some(&"#".to_string())).unwrap(), Some('#'));
        assert_eq!(
            parse_mask_char(Some(&"\\x23".to_string())).unwrap(),
            Some('#')
        );
        assert!(parse_mask_char(Some(&"##".to_string())).is_err());
        assert!(parse_mask_char(Some(&String::new())).is_err());
    }

    #[test]
    fn cli_matches_translate_into_overrides() {
        let matches = build_cli()
            .try_get_matches_from([
                "titlemask",
                "--strength",
                "search",
                "--ratio",
                "0.8",
                "--mask-char",
                "#",
                "--title",
                "Sample Title",
            ])
            .expect("valid args");
        let opts = CliOptions::from_matches(&matches).expect("valid options");
        let overrides = opts.overrides();
        assert_eq!(overrides.strength.as_deref(), Some("search"));
        assert_eq!(overrides.target_mask_ratio, Some(0.8));
        assert_eq!(overrides.mask_character, Some('#'));
        assert_eq!(opts.titles, vec!["Sample Title".to_string()]);
    }
}
