//! # linetally
//!
//! A CLI tool that scans source trees and classifies every line as code,
//! comment, or blank.
//!
//! ## Overview
//!
//! linetally is built on top of linetallylib and provides a command-line
//! interface for counting lines. It recursively scans directories (or takes
//! plain files as-is), applies an extension filter, an ignore list, and
//! optional exclude globs, then prints a per-file table and writes the same
//! report to `lineCount.txt`.
//!
//! The classifier understands `%` and `//` line comments plus `/* */` and
//! MATLAB-style `%{ %}` block comments. A line mixing code with a trailing
//! comment marker counts toward both the code and comment totals.
//!
//! ## Usage
//!
//! ```bash
//! # Count .m files under the current directory
//! linetally
//!
//! # Scan a tree plus one extra file, several extensions
//! linetally sim/ tools/patch.c --ext m --ext c
//!
//! # Skip generated files and a vendored directory
//! linetally . --ignore generated.m --exclude "**/vendor/**"
//!
//! # Write the report elsewhere, dump JSON to stdout
//! linetally . --out build/reports --json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use console::Style;
use linetallylib::{count_paths, render_report, write_report, FilterConfig, ScanResult};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("linetally")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Counts code, comment, and blank lines per file and writes a report")
        .arg(
            Arg::new("path")
                .help("Directories to scan or files to count (defaults to current directory)")
                .action(ArgAction::Append)
                .default_value("."),
        )
        .arg(
            Arg::new("ext")
                .short('e')
                .long("ext")
                .action(ArgAction::Append)
                .default_value("m")
                .help("File extension to include (can be specified multiple times)"),
        )
        .arg(
            Arg::new("ignore")
                .short('x')
                .long("ignore")
                .action(ArgAction::Append)
                .help("File name to skip, base name plus extension (can be specified multiple times)"),
        )
        .arg(
            Arg::new("exclude")
                .long("exclude")
                .action(ArgAction::Append)
                .help("Exclude files matching glob pattern"),
        )
        .arg(
            Arg::new("out")
                .short('o')
                .long("out")
                .default_value(".")
                .help("Directory to write lineCount.txt into"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print the scan result as JSON instead of the table"),
        )
}

/// Build filter config from matches
fn build_filter(matches: &ArgMatches) -> Result<FilterConfig, anyhow::Error> {
    let mut filter = FilterConfig::new();

    if let Some(exts) = matches.get_many::<String>("ext") {
        for ext in exts {
            filter = filter.extension(ext)?;
        }
    }

    if let Some(names) = matches.get_many::<String>("ignore") {
        for name in names {
            filter = filter.ignore(name);
        }
    }

    if let Some(patterns) = matches.get_many::<String>("exclude") {
        for pattern in patterns {
            filter = filter.exclude(pattern)?;
        }
    }

    Ok(filter)
}

/// Print per-file warnings to stderr, styled
fn print_warnings(result: &ScanResult) {
    let style = Style::new().yellow().bold();
    for warning in &result.warnings {
        eprintln!(
            "{} {}: {}",
            style.apply_to("warning:"),
            warning.path.display(),
            warning.message
        );
    }
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let paths: Vec<PathBuf> = matches
        .get_many::<String>("path")
        .map(|v| v.map(PathBuf::from).collect())
        .unwrap_or_default();

    let filter = build_filter(matches)?;

    let result = count_paths(&paths, &filter)?;
    print_warnings(&result);

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_report(&result));
    }

    let out_dir = matches
        .get_one::<String>("out")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let report_path = write_report(&result, &out_dir)?;

    // stderr, so stdout stays clean for piping
    eprintln!(
        "{}",
        Style::new()
            .dim()
            .apply_to(format!("Report written to {}", report_path.display()))
    );

    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
