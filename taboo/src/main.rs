// taboo/src/main.rs
//! Taboo entry point.
//!
//! Parses the command line, loads the word list once and dispatches to the
//! selected command.

use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;

use taboo::cli::{Cli, Commands};
use taboo::commands::{censor, error_msg, scan, terms};
use taboo::logger;
use taboo::ui::theme::{build_theme_map, ThemeStyle};
use taboo::utils::engine_setup::{build_engine, load_terms, resolve_config};
use taboo::utils::input::read_input;

fn main() -> ExitCode {
    // A missing .env file is the normal case.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    logger::init_logger(logger::level_from_flags(cli.debug, cli.disable_debug, cli.quiet));
    log::info!("taboo started. Version: {}", env!("CARGO_PKG_VERSION"));

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error_msg(format!("{:#}", e), &ThemeStyle::default_theme_map());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let theme_map = build_theme_map(cli.theme.as_ref()).context("Theme error")?;
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Censor(cmd) => {
            let config = resolve_config(config_path, &cmd.wordlist)?;
            let engine = build_engine(&config)?;

            if cmd.line_buffered {
                return censor::run_line_buffered_stdio(&engine, cmd.no_summary, cli.quiet, &theme_map);
            }

            let input = read_input(&cmd.input)?;
            let opts = censor::CensorOptions {
                input: input.text,
                source_id: input.source_id,
                clipboard: cmd.clipboard,
                diff: cmd.diff,
                show_original: cmd.show_original,
                output_path: cmd.output,
                no_summary: cmd.no_summary,
                quiet: cli.quiet,
            };
            censor::run_censor_opts(&engine, opts, &theme_map)
        }
        Commands::Scan(cmd) => {
            let config = resolve_config(config_path, &cmd.wordlist)?;
            let engine = build_engine(&config)?;
            let input = read_input(&cmd.input)?;
            let opts = scan::ScanOptions {
                input: input.text,
                source_id: input.source_id,
                json_file: cmd.json_file,
                json_stdout: cmd.json_stdout,
                fail_over_threshold: cmd.fail_over_threshold,
                quiet: cli.quiet,
            };
            scan::run_scan_opts(&engine, &opts, &theme_map).map(|_| ())
        }
        Commands::Terms(cmd) => {
            let config = resolve_config(config_path, &cmd.wordlist)?;
            let terms = load_terms(&config)?;
            terms::run_terms(&terms, cli.quiet, &theme_map)
        }
    }
}
