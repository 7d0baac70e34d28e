//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::core::classify::classify;
use crate::core::io::{open_output, read_input};
use crate::core::model::{ElementKind, SortingType};
use crate::core::render::{OutputFormat, RenderConfig, Renderer};
use crate::core::report::build_report;
use crate::error::SortError;

/// sorting-tool - sort numbers, lines or words and report them.
#[derive(Parser, Debug)]
#[command(name = "sorting-tool")]
#[command(
    author,
    version,
    about,
    args_override_self = true,
    long_about = r#"sorting-tool reads text from a file or stdin, classifies it into numbers,
lines or words, and prints a report.

Two report modes are available:
- natural: every element in ascending order
- byCount: each distinct element with its count and share, least frequent first

The classic single-dash flags (-sortingType, -dataType, -inputFile, -outputFile)
are accepted alongside the long options below. Unknown flags are reported and skipped.

Examples:
    sorting-tool -dataType long < numbers.txt
    sorting-tool -sortingType byCount -dataType word -inputFile essay.txt
    sorting-tool --data-type line --format json --pretty
"#
)]
pub struct Cli {
    /// Report mode (natural/byCount).
    #[arg(
        long = "sorting-type",
        default_value = "natural",
        value_name = "TYPE",
        long_help = "Select the report mode.\n\n\
Supported values:\n\
- natural (default): elements in ascending order\n\
- byCount: distinct elements ordered by occurrence count, ties by value"
    )]
    pub sorting_type: String,

    /// Kind of elements to read (long/line/word).
    #[arg(
        long = "data-type",
        default_value = "word",
        value_name = "TYPE",
        long_help = "Select how input is split into elements.\n\n\
Supported values:\n\
- long: whitespace-separated signed 64-bit integers; other tokens are skipped\n\
- line: every input line, verbatim\n\
- word (default): whitespace-separated words"
    )]
    pub data_type: String,

    /// Read input from this file instead of stdin.
    #[arg(long = "input-file", value_name = "PATH")]
    pub input_file: Option<PathBuf>,

    /// Write the report to this file instead of stdout.
    #[arg(long = "output-file", value_name = "PATH")]
    pub output_file: Option<PathBuf>,

    /// Output format (text/json).
    #[arg(
        long,
        env = "SORTING_TOOL_FORMAT",
        default_value = "text",
        value_name = "FORMAT",
        long_help = "Select the report format.\n\n\
Supported values:\n\
- text (default): the classic report layout\n\
- json: a single JSON object with mode, label, total and data/entries"
    )]
    pub format: String,

    /// Pretty-print JSON output with indentation.
    #[arg(long)]
    pub pretty: bool,

    /// Verbose mode (more diagnostics).
    #[arg(short, long)]
    pub verbose: bool,
}

/// Long option for a flag that takes a value, by any accepted spelling
fn value_flag(arg: &str) -> Option<&'static str> {
    match arg {
        "-sortingType" | "--sorting-type" => Some("--sorting-type"),
        "-dataType" | "--data-type" => Some("--data-type"),
        "-inputFile" | "--input-file" => Some("--input-file"),
        "-outputFile" | "--output-file" => Some("--output-file"),
        "--format" => Some("--format"),
        _ => None,
    }
}

fn missing_value(long: &str) -> Option<SortError> {
    match long {
        "--sorting-type" => Some(SortError::MissingSortingType),
        "--data-type" => Some(SortError::MissingDataType),
        "--input-file" => Some(SortError::MissingInputFile),
        "--output-file" => Some(SortError::MissingOutputFile),
        _ => None,
    }
}

fn is_switch(arg: &str) -> bool {
    matches!(
        arg,
        "--pretty" | "--verbose" | "-v" | "--help" | "-h" | "--version" | "-V"
    )
}

/// Rewrite raw arguments into the form `Cli` parses.
///
/// Single-dash flags become long options. A value is missing when there is
/// no next argument or it starts with `-`. Unknown flags go to `warn` and are
/// dropped along with stray positional arguments. The first argument is the
/// program name and is kept as is.
pub fn normalize_args<I, F>(args: I, mut warn: F) -> Result<Vec<String>, SortError>
where
    I: IntoIterator<Item = String>,
    F: FnMut(String),
{
    let mut args = args.into_iter().peekable();
    let mut normalized: Vec<String> = args.next().into_iter().collect();

    while let Some(arg) = args.next() {
        if let Some(long) = value_flag(&arg) {
            match args.next_if(|next| !next.starts_with('-')) {
                Some(value) => {
                    normalized.push(long.to_string());
                    normalized.push(value);
                }
                None => match missing_value(long) {
                    Some(err) => return Err(err),
                    None => normalized.push(long.to_string()),
                },
            }
        } else if is_switch(&arg)
            || arg
                .split_once('=')
                .is_some_and(|(name, _)| name.starts_with("--") && value_flag(name).is_some())
        {
            normalized.push(arg);
        } else if arg.starts_with('-') {
            warn(format!(
                "\"{}\" is not a valid parameter. It will be skipped.",
                arg
            ));
        }
    }

    Ok(normalized)
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let kind: ElementKind = cli
        .data_type
        .parse()
        .map_err(|_| SortError::UnknownDataType(cli.data_type.clone()))?;

    let sorting: SortingType = cli.sorting_type.parse().unwrap_or_else(|e| {
        tracing::warn!("{}; falling back to natural ordering", e);
        SortingType::Natural
    });

    let format: OutputFormat = cli.format.parse().unwrap_or_else(|e| {
        tracing::warn!("{}; falling back to text", e);
        OutputFormat::default()
    });
    let render_config = RenderConfig::with_pretty(format, cli.pretty);

    tracing::debug!(
        "sorting {} ({:?}) as {:?}",
        kind.label(),
        sorting,
        render_config.format
    );

    let lines = read_input(cli.input_file.as_deref())?;
    let mut sink = open_output(cli.output_file.as_deref())?;

    let collection = classify(&lines, kind, |skipped| eprintln!("{}", skipped));
    let report = build_report(&collection, sorting);

    Renderer::with_config(render_config)
        .render_to(&report, &mut sink)
        .map_err(SortError::Write)?;

    Ok(())
}
