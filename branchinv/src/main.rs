//! # branchinv
//!
//! A CLI tool that turns a directory of branch diffs into a Markdown inventory.
//!
//! ## Overview
//!
//! branchinv is built on top of branchinvlib. Each `*.diff` file in the input
//! directory is one branch; the report lists, per branch, how many files it
//! touches, how many lines it adds and removes, which keywords show up in
//! added lines, and the first ten modified paths.
//!
//! ## Usage
//!
//! ```bash
//! # Scan docs/branch_diffs and print Markdown
//! branchinv
//!
//! # Scan another directory, sorted by file name for stable output
//! branchinv path/to/diffs --sort
//!
//! # Skip work-in-progress branches
//! branchinv --exclude "wip-*"
//!
//! # Output as JSON
//! branchinv --output json
//! ```

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use branchinvlib::{
    scan_directory, write_markdown, DecodePolicy, FilterConfig, ListingOrder, ScanOptions,
};
use clap::{Arg, ArgAction, ArgMatches, Command};
use console::style;
use tracing::debug;

/// Directory scanned when none is given
const DEFAULT_DIFF_DIR: &str = "docs/branch_diffs";

/// Report format written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Markdown,
    Json,
}

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("branchinv")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Markdown inventory of per-branch diff statistics")
        .arg(
            Arg::new("dir")
                .help("Directory containing *.diff files")
                .default_value(DEFAULT_DIFF_DIR),
        )
        .arg(
            Arg::new("sort")
                .long("sort")
                .action(ArgAction::SetTrue)
                .conflicts_with("order")
                .help("Process diff files sorted by name (same as --order name)"),
        )
        .arg(
            Arg::new("order")
                .long("order")
                .value_parser(["listed", "name"])
                .help("Processing order: directory listing order or file name"),
        )
        .arg(
            Arg::new("include")
                .short('i')
                .long("include")
                .action(ArgAction::Append)
                .help("Only scan diff files whose name matches this glob"),
        )
        .arg(
            Arg::new("exclude")
                .short('e')
                .long("exclude")
                .action(ArgAction::Append)
                .help("Skip diff files whose name matches this glob"),
        )
        .arg(
            Arg::new("strict-utf8")
                .long("strict-utf8")
                .action(ArgAction::SetTrue)
                .help("Fail on invalid UTF-8 instead of replacing it"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["markdown", "json"])
                .default_value("markdown")
                .help("Output format"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log progress to stderr"),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .action(ArgAction::SetTrue)
                .help("Log per-file details to stderr"),
        )
}

/// Build filter config from matches
fn build_filter(matches: &ArgMatches) -> Result<FilterConfig, anyhow::Error> {
    let mut filter = FilterConfig::new();

    if let Some(includes) = matches.get_many::<String>("include") {
        for pattern in includes {
            filter = filter.include(pattern)?;
        }
    }

    if let Some(excludes) = matches.get_many::<String>("exclude") {
        for pattern in excludes {
            filter = filter.exclude(pattern)?;
        }
    }

    Ok(filter)
}

/// Build scan options from matches
fn build_options(matches: &ArgMatches) -> Result<ScanOptions, anyhow::Error> {
    let order = if matches.get_flag("sort") {
        ListingOrder::ByName
    } else {
        match matches.get_one::<String>("order") {
            Some(s) => s.parse::<ListingOrder>().map_err(anyhow::Error::msg)?,
            None => ListingOrder::AsListed,
        }
    };

    let decoding = if matches.get_flag("strict-utf8") {
        DecodePolicy::Strict
    } else {
        DecodePolicy::Lossy
    };

    Ok(ScanOptions::new()
        .filter(build_filter(matches)?)
        .order(order)
        .decoding(decoding))
}

fn output_format(matches: &ArgMatches) -> OutputFormat {
    match matches.get_one::<String>("output").map(|s| s.as_str()) {
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::Markdown,
    }
}

/// Scan the directory and write the report to `out`
fn run<W: Write>(matches: &ArgMatches, mut out: W) -> Result<(), anyhow::Error> {
    let dir = matches
        .get_one::<String>("dir")
        .map(|s| s.as_str())
        .unwrap_or(DEFAULT_DIFF_DIR);
    let options = build_options(matches)?;
    debug!(dir, ?options, "starting scan");

    let inventory = scan_directory(dir, options)?;

    match output_format(matches) {
        OutputFormat::Markdown => {
            write_markdown(&inventory, &mut out).context("failed to write report")?
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&inventory)?;
            writeln!(out, "{json}").context("failed to write report")?;
        }
    }

    out.flush().context("failed to write report")?;
    Ok(())
}

/// Initialize tracing based on CLI flags. `RUST_LOG` takes precedence.
fn init_logging(verbose: bool, debug: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if debug {
        "debug"
    } else if verbose {
        "info"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .try_init();

    debug!("Logging initialized at level: {}", level);
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    init_logging(matches.get_flag("verbose"), matches.get_flag("debug"));

    match run(&matches, io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", style("Error:").red().bold());
            ExitCode::FAILURE
        }
    }
}
