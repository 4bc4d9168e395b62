//! Prints the per-term censor summary.

use std::io::{self, Write};
use taboo_core::{total_occurrences, CensorSummaryItem};

use crate::ui::output_format::write_styled;
use crate::ui::theme::{ThemeEntry, ThemeMap};

/// Writes the summary block for `summary` to `writer`.
pub fn print_summary<W: Write + ?Sized>(
    summary: &[CensorSummaryItem],
    writer: &mut W,
    theme_map: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    write_styled(writer, "--- Censor Summary ---", ThemeEntry::Header, theme_map, supports_color)?;
    writeln!(writer)?;

    if summary.is_empty() {
        writeln!(writer, "No taboo expressions found.")?;
    } else {
        for item in summary {
            write!(writer, "  ")?;
            write_styled(writer, &item.term, ThemeEntry::SummaryTerm, theme_map, supports_color)?;
            write!(writer, " (")?;
            write_styled(writer, &format_occurrences(item.occurrences), ThemeEntry::SummaryOccurrences, theme_map, supports_color)?;
            writeln!(writer, ")")?;
        }
        writeln!(writer, "Total: {}", format_occurrences(total_occurrences(summary)))?;
    }

    write_styled(writer, "----------------------", ThemeEntry::Header, theme_map, supports_color)?;
    writeln!(writer)
}

fn format_occurrences(n: usize) -> String {
    if n == 1 {
        "1 occurrence".to_string()
    } else {
        format!("{} occurrences", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;

    #[test]
    fn summary_lists_terms_and_total() {
        let summary = vec![
            CensorSummaryItem { term: "bad word".into(), occurrences: 1, matched_texts: vec!["Bad Word".into()] },
            CensorSummaryItem { term: "heck".into(), occurrences: 2, matched_texts: vec!["heck".into(), "HECK".into()] },
        ];
        let mut out = Vec::new();
        print_summary(&summary, &mut out, &ThemeStyle::default_theme_map(), false).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("  bad word (1 occurrence)\n"));
        assert!(text.contains("  heck (2 occurrences)\n"));
        assert!(text.contains("Total: 3 occurrences\n"));
    }

    #[test]
    fn empty_summary_says_so() {
        let mut out = Vec::new();
        print_summary(&[], &mut out, &ThemeStyle::default_theme_map(), false).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("No taboo expressions found."));
    }
}
