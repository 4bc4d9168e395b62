//! This file defines the command-line interface (CLI) for the taboo application,
//! including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "taboo",
    author = "Obscura Team (Relay)",
    version = env!("CARGO_PKG_VERSION"),
    about = "Censor taboo expressions in text",
    long_about = "Taboo identifies taboo words and phrases from a CSV word list and replaces every occurrence with asterisks of the same length. Matching is literal and case-insensitive; phrases are censored as one block.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational messages and summaries.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// Explicitly disable debug logging, even if RUST_LOG is set to DEBUG
    #[arg(long = "disable-debug", global = true, help = "Disable debug logging, overriding RUST_LOG.")]
    pub disable_debug: bool,

    /// Specify the path to a custom YAML theme file.
    #[arg(long = "theme", value_name = "FILE", global = true, help = "Specify the path to a custom YAML theme file.")]
    pub theme: Option<PathBuf>,

    /// Path to a configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", env = "TABOO_CONFIG", global = true, help = "Path to a configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `taboo` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Censors a message, a file or stdin.
    #[command(about = "Censors a message, a file or stdin, masking every taboo expression.")]
    Censor(CensorCommand),

    /// Counts taboo expressions without printing the censored text.
    #[command(about = "Counts taboo expressions in the input without printing the censored text.")]
    Scan(ScanCommand),

    /// Prints the loaded word list.
    #[command(about = "Prints the terms loaded from the word list.")]
    Terms(TermsCommand),
}

/// Where the message comes from. Stdin is used when neither is given.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// The message to censor.
    #[arg(value_name = "MESSAGE", conflicts_with = "input_file", help = "The message to check (reads from stdin if not provided).")]
    pub message: Option<String>,

    /// Path to an input file.
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,
}

/// Word list selection shared by all commands.
#[derive(Args, Debug, Clone, Default)]
pub struct WordlistArgs {
    /// Path to the CSV word list.
    #[arg(long, short = 'w', value_name = "FILE", env = "TABOO_WORDLIST", help = "Path to the CSV word list (overrides the configuration).")]
    pub wordlist: Option<PathBuf>,
}

/// Arguments for the `censor` command.
#[derive(Args, Debug)]
pub struct CensorCommand {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub wordlist: WordlistArgs,

    /// Write censored output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Copy censored output to the system clipboard.
    #[arg(long, short = 'c', help = "Copy censored output to the system clipboard.")]
    pub clipboard: bool,

    /// Show a unified diff of the changes made.
    #[arg(long, short = 'D', conflicts_with = "show_original", help = "Show a unified diff to highlight the changes made.")]
    pub diff: bool,

    /// Print the original message above the censored one.
    #[arg(long = "show-original", help = "Print the original message above the censored message.")]
    pub show_original: bool,

    /// Process input line by line (useful for streaming data from pipes).
    #[arg(long = "line-buffered", conflicts_with_all = ["message", "input_file", "diff", "show_original", "clipboard"], help = "Censor stdin line by line, flushing after each line.")]
    pub line_buffered: bool,

    /// Suppress the censor summary.
    #[arg(long = "no-summary", help = "Suppress the censor summary.")]
    pub no_summary: bool,
}

/// Arguments for the `scan` command.
#[derive(Args, Debug)]
pub struct ScanCommand {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub wordlist: WordlistArgs,

    /// Exit with a non-zero code if the total number of matches exceeds this threshold.
    #[arg(long = "fail-over-threshold", value_name = "N", help = "Exit with a non-zero code if the total number of matches exceeds this threshold.")]
    pub fail_over_threshold: Option<usize>,

    /// Export the scan report to a JSON file.
    #[arg(long = "json-file", value_name = "FILE", help = "Export the scan report to a JSON file.")]
    pub json_file: Option<PathBuf>,

    /// Print the scan report as JSON to stdout (conflicts with --json-file).
    #[arg(long = "json-stdout", conflicts_with = "json_file", help = "Print the scan report to stdout as JSON.")]
    pub json_stdout: bool,
}

/// Arguments for the `terms` command.
#[derive(Args, Debug)]
pub struct TermsCommand {
    #[command(flatten)]
    pub wordlist: WordlistArgs,
}
