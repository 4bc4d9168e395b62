//! Scan command implementation: counts taboo expressions without printing
//! the censored text.

use anyhow::{bail, Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use taboo_core::{CensorEngine, ScanReport};

use crate::commands::info_msg;
use crate::ui::censor_summary;
use crate::ui::theme::ThemeMap;

/// Options for `taboo scan`.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    pub input: String,
    pub source_id: String,
    pub json_file: Option<PathBuf>,
    pub json_stdout: bool,
    pub fail_over_threshold: Option<usize>,
    pub quiet: bool,
}

/// Runs the scan and returns the report that was emitted.
///
/// # Errors
///
/// Fails when the report cannot be written, or when the number of matches
/// exceeds `fail_over_threshold`.
pub fn run_scan_opts(
    engine: &dyn CensorEngine,
    opts: &ScanOptions,
    theme_map: &ThemeMap,
) -> Result<ScanReport> {
    info!("Starting scan operation.");
    let summary = engine.analyze_for_stats(&opts.input, &opts.source_id);
    let report = ScanReport::from_summary(&opts.source_id, &summary);
    debug!("Scan found {} matches.", report.total_matches);

    if opts.json_stdout {
        let json = report.to_json_pretty()?;
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", json)?;
    } else {
        let stdout = io::stdout();
        let supports_color = stdout.is_terminal();
        censor_summary::print_summary(&summary, &mut stdout.lock(), theme_map, supports_color)?;
    }

    if let Some(path) = &opts.json_file {
        let json = report.to_json_pretty()?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write scan report to {}", path.display()))?;
        if !opts.quiet {
            info_msg(format!("Scan report written to {}", path.display()), theme_map);
        }
    }

    if let Some(threshold) = opts.fail_over_threshold {
        if report.total_matches > threshold {
            bail!(
                "Found {} taboo expressions, exceeding the threshold of {}.",
                report.total_matches,
                threshold
            );
        }
    }

    Ok(report)
}
