//! Diff viewer for taboo.
//!
//! Renders a line diff between the original and the censored message so
//! the censored lines can be reviewed side by side with what they replaced.

use diffy::{create_patch, Line as DiffLine};
use std::io::{self, Write};

use crate::ui::output_format::write_styled;
use crate::ui::theme::{ThemeEntry, ThemeMap};

/// Writes a unified line diff of `original` against `censored`.
///
/// Removed lines are prefixed with `-`, censored replacements with `+` and
/// unchanged context with two spaces.
pub fn print_diff<W: Write + ?Sized>(
    original: &str,
    censored: &str,
    writer: &mut W,
    theme_map: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    let patch = create_patch(original, censored);

    write_styled(writer, "--- Diff View ---", ThemeEntry::DiffHeader, theme_map, supports_color)?;
    writeln!(writer)?;

    let mut changed = false;
    for hunk in patch.hunks() {
        for line_change in hunk.lines() {
            match line_change {
                DiffLine::Delete(s) => {
                    changed = true;
                    write_styled(writer, &format!("- {}", s.trim_end_matches('\n')), ThemeEntry::DiffRemoved, theme_map, supports_color)?;
                }
                DiffLine::Insert(s) => {
                    changed = true;
                    write_styled(writer, &format!("+ {}", s.trim_end_matches('\n')), ThemeEntry::DiffAdded, theme_map, supports_color)?;
                }
                DiffLine::Context(s) => {
                    write!(writer, "  {}", s.trim_end_matches('\n'))?;
                }
            }
            writeln!(writer)?;
        }
    }

    if !changed {
        writeln!(writer, "No changes detected.")?;
    }

    write_styled(writer, "-----------------", ThemeEntry::DiffHeader, theme_map, supports_color)?;
    writeln!(writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;

    fn render(original: &str, censored: &str) -> String {
        let mut out = Vec::new();
        print_diff(original, censored, &mut out, &ThemeStyle::default_theme_map(), false).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn changed_lines_are_marked() {
        let text = render("keep me\nwhat the heck\n", "keep me\nwhat the ****\n");
        assert!(text.contains("  keep me\n"));
        assert!(text.contains("- what the heck\n"));
        assert!(text.contains("+ what the ****\n"));
    }

    #[test]
    fn identical_input_reports_no_changes() {
        let text = render("all clean\n", "all clean\n");
        assert!(text.contains("No changes detected."));
    }
}
