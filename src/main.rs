// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! htmlguard CLI - Whitelist HTML Sanitizer
//!
//! Sanitizes an HTML fragment from a file or stdin and writes the result to
//! stdout.

use std::env;
use std::fs;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use anyhow::Context;
use htmlguard::{Sanitizer, SanitizerConfig};

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("htmlguard=info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    let result = match args[1].as_str() {
        "sanitize" => parse_options(&args[2..]).and_then(run_sanitize),
        "policy" => parse_options(&args[2..]).and_then(run_policy),
        "--help" | "-h" | "help" => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        "--version" | "-v" | "version" => {
            println!("htmlguard {}", htmlguard::VERSION);
            return ExitCode::SUCCESS;
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            return ExitCode::from(1);
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

fn print_usage() {
    println!(
        r#"htmlguard - Whitelist HTML Sanitizer

USAGE:
    htmlguard <COMMAND> [OPTIONS]

COMMANDS:
    sanitize [<file>|-]   Sanitize HTML from a file (or stdin) to stdout
    policy                Print the effective policy table as JSON
    help                  Show this help message
    version               Show version information

OPTIONS:
    --strip               Drop disallowed elements instead of escaping them
    --config <file>       Load sanitizer configuration from a JSON file

EXAMPLES:
    htmlguard sanitize notes.html
    echo '<b>hi</b><script>x</script>' | htmlguard sanitize --strip
    htmlguard policy --config policy.json
"#
    );
}

/// Parsed command-line options
struct Options {
    config: SanitizerConfig,
    input: Option<String>,
}

fn parse_options(args: &[String]) -> anyhow::Result<Options> {
    let mut config: Option<SanitizerConfig> = None;
    let mut strip = false;
    let mut input = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--strip" => strip = true,
            "--config" => {
                let path = iter.next().context("--config requires a file path")?;
                config = Some(SanitizerConfig::from_file(path)?);
            }
            "-" => input = None,
            flag if flag.starts_with("--") => anyhow::bail!("unknown option: {}", flag),
            path => input = Some(path.to_string()),
        }
    }

    let mut config = config.unwrap_or_default();
    if strip {
        config.escape = false;
    }
    Ok(Options { config, input })
}

fn run_sanitize(options: Options) -> anyhow::Result<()> {
    let html = match options.input {
        Some(ref path) => fs::read_to_string(path).with_context(|| format!("reading {}", path))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };

    let sanitizer = Sanitizer::new(options.config);
    let clean = sanitizer.sanitize_string(&html)?;
    tracing::info!(
        input_bytes = html.len(),
        output_bytes = clean.len(),
        "sanitized fragment"
    );

    let mut stdout = io::stdout().lock();
    stdout.write_all(clean.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn run_policy(options: Options) -> anyhow::Result<()> {
    let policy = options.config.policy();
    println!("{}", serde_json::to_string_pretty(&policy)?);
    Ok(())
}
