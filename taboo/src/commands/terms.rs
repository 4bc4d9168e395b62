//! Terms command implementation: prints the loaded word list.

use anyhow::Result;
use std::collections::HashSet;
use std::io::{self, Write};

use taboo_core::TermList;

use crate::commands::info_msg;
use crate::ui::theme::ThemeMap;

/// Writes one term per line to `writer` and returns the number of unique terms.
pub fn write_terms<W: Write + ?Sized>(terms: &TermList, writer: &mut W) -> Result<usize> {
    let mut unique = HashSet::with_capacity(terms.len());
    for term in terms {
        writeln!(writer, "{}", term)?;
        unique.insert(term.as_str());
    }
    writer.flush()?;
    Ok(unique.len())
}

/// Runs `taboo terms`.
pub fn run_terms(terms: &TermList, quiet: bool, theme_map: &ThemeMap) -> Result<()> {
    let unique = write_terms(terms, &mut io::stdout().lock())?;
    if !quiet {
        info_msg(format!("Loaded {} terms ({} unique).", terms.len(), unique), theme_map);
    }
    Ok(())
}
