//! Censor command implementation.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use taboo_core::{apply_matches, summarize_matches, CensorEngine, CensorMatch, CensorSummaryItem};

use crate::commands::{info_msg, success_msg, warn_msg};
use crate::ui::censor_summary;
use crate::ui::diff_viewer;
use crate::ui::output_format::{write_censored, write_styled};
use crate::ui::theme::{ThemeEntry, ThemeMap};
use crate::utils::clipboard::copy_to_clipboard;

/// Shown when there is nothing to censor.
pub const EMPTY_MESSAGE_WARNING: &str = "Please enter a message to be censored.";

/// Options for the ergonomic run_censor_opts API
#[derive(Debug, Clone, Default)]
pub struct CensorOptions {
    pub input: String,
    pub source_id: String,
    pub clipboard: bool,
    pub diff: bool,
    pub show_original: bool,
    pub output_path: Option<PathBuf>,
    pub no_summary: bool,
    pub quiet: bool,
}

/// The main operation runner for `taboo censor`.
pub fn run_censor_opts(
    engine: &dyn CensorEngine,
    opts: CensorOptions,
    theme_map: &ThemeMap,
) -> Result<()> {
    info!("Starting censor operation.");

    if opts.input.is_empty() {
        warn_msg(EMPTY_MESSAGE_WARNING, theme_map);
        return Ok(());
    }

    let matches = engine.find_matches(&opts.input, &opts.source_id);
    let censored_content = apply_matches(&opts.input, &matches);
    let summary = summarize_matches(&engine.compiled_terms().terms, &matches);

    debug!(
        "Content censored. Original length: {}, Censored length: {}",
        opts.input.chars().count(),
        censored_content.chars().count()
    );

    handle_primary_output(&opts, &censored_content, &matches, theme_map)?;

    if opts.clipboard {
        handle_clipboard_output(&censored_content, theme_map);
    }

    handle_censor_summary(&summary, opts.no_summary || opts.quiet, theme_map)?;

    info!("Censor operation completed.");
    Ok(())
}

fn handle_primary_output(
    opts: &CensorOptions,
    censored_content: &str,
    matches: &[CensorMatch],
    theme_map: &ThemeMap,
) -> Result<()> {
    if let Some(path) = &opts.output_path {
        if !opts.quiet {
            info_msg(format!("Writing censored content to file: {}", path.display()), theme_map);
        }
        let mut file = fs::File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        write_output(opts, censored_content, matches, &mut file, theme_map, false)?;
    } else {
        debug!("Writing censored content to stdout.");
        let stdout = io::stdout();
        let supports_color = stdout.is_terminal();
        let mut writer = stdout.lock();
        write_output(opts, censored_content, matches, &mut writer, theme_map, supports_color)?;
    }
    Ok(())
}

fn write_output<W: Write + ?Sized>(
    opts: &CensorOptions,
    censored_content: &str,
    matches: &[CensorMatch],
    writer: &mut W,
    theme_map: &ThemeMap,
    supports_color: bool,
) -> Result<()> {
    if opts.diff {
        diff_viewer::print_diff(&opts.input, censored_content, writer, theme_map, supports_color)?;
    } else if opts.show_original {
        write_styled(writer, "Original Message:", ThemeEntry::Header, theme_map, supports_color)?;
        writeln!(writer)?;
        writeln!(writer, "{}", opts.input)?;
        writeln!(writer)?;
        write_styled(writer, "Censored Message:", ThemeEntry::Header, theme_map, supports_color)?;
        writeln!(writer)?;
        write_censored(writer, &opts.input, matches, theme_map, supports_color)?;
        writeln!(writer)?;
    } else {
        write_censored(writer, &opts.input, matches, theme_map, supports_color)?;
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(())
}

fn handle_clipboard_output(censored_content: &str, theme_map: &ThemeMap) {
    match copy_to_clipboard(censored_content) {
        Ok(_) => success_msg("Censored content copied to clipboard successfully.", theme_map),
        Err(e) => warn_msg(format!("Failed to copy to clipboard: {:#}", e), theme_map),
    }
}

fn handle_censor_summary(
    summary: &[CensorSummaryItem],
    suppressed: bool,
    theme_map: &ThemeMap,
) -> Result<()> {
    if !suppressed {
        debug!("Displaying censor summary.");
        let stderr_supports_color = io::stderr().is_terminal();
        censor_summary::print_summary(summary, &mut io::stderr(), theme_map, stderr_supports_color)?;
    }
    Ok(())
}

/// Censors `reader` line by line, writing and flushing each line as soon as
/// it is censored. Returns the summary aggregated over all lines.
///
/// Line terminators are preserved and never take part in matching, so a
/// phrase split across two lines is not censored.
pub fn run_line_buffered<R: BufRead, W: Write + ?Sized>(
    engine: &dyn CensorEngine,
    mut reader: R,
    writer: &mut W,
) -> Result<Vec<CensorSummaryItem>> {
    let mut summary: Vec<CensorSummaryItem> = Vec::new();
    let mut line = String::new();
    let mut line_number = 0u64;

    loop {
        line.clear();
        let read = reader.read_line(&mut line).context("Failed to read input line")?;
        if read == 0 {
            break;
        }
        line_number += 1;

        let body_len = line.trim_end_matches(['\n', '\r']).len();
        let (body, terminator) = line.split_at(body_len);
        let (censored, line_summary) = engine.censor_with_summary(body, &format!("stdin:{}", line_number));

        writer.write_all(censored.as_bytes())?;
        writer.write_all(terminator.as_bytes())?;
        writer.flush()?;

        merge_summaries(&mut summary, line_summary);
    }

    let term_order = &engine.compiled_terms().terms;
    summary.sort_by_key(|item| {
        term_order
            .iter()
            .position(|t| *t == item.term)
            .unwrap_or(usize::MAX)
    });
    debug!("Line-buffered run finished after {} lines.", line_number);
    Ok(summary)
}

/// Runs [`run_line_buffered`] over stdin and stdout, then prints the summary.
pub fn run_line_buffered_stdio(
    engine: &dyn CensorEngine,
    no_summary: bool,
    quiet: bool,
    theme_map: &ThemeMap,
) -> Result<()> {
    info!("Starting line-buffered censor operation.");
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut writer = stdout.lock();
    let summary = run_line_buffered(engine, stdin.lock(), &mut writer)?;
    handle_censor_summary(&summary, no_summary || quiet, theme_map)
}

fn merge_summaries(into: &mut Vec<CensorSummaryItem>, items: Vec<CensorSummaryItem>) {
    for item in items {
        match into.iter_mut().find(|existing| existing.term == item.term) {
            Some(existing) => {
                existing.occurrences += item.occurrences;
                existing.matched_texts.extend(item.matched_texts);
            }
            None => into.push(item),
        }
    }
}
