//! Colored, themed message printing for the CLI.
//!
//! Every function takes the writer explicitly and a `supports_color` flag, so
//! the same code renders plain text when writing to files or pipes.

use owo_colors::OwoColorize;
use std::io::{self, Write};

use taboo_core::CensorMatch;

use crate::ui::theme::{color_for, ThemeEntry, ThemeMap};

/// Writes `text` in the color of `entry`, or plain when colors are off.
pub fn write_styled<W: Write + ?Sized>(
    writer: &mut W,
    text: &str,
    entry: ThemeEntry,
    theme_map: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    match color_for(theme_map, entry) {
        Some(color) if supports_color => write!(writer, "{}", text.color(color)),
        _ => write!(writer, "{}", text),
    }
}

fn print_message<W: Write + ?Sized>(
    writer: &mut W,
    prefix: &str,
    msg: &str,
    entry: ThemeEntry,
    theme_map: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    write_styled(writer, &format!("{}{}", prefix, msg), entry, theme_map, supports_color)?;
    writeln!(writer)
}

pub fn print_info_message<W: Write + ?Sized>(writer: &mut W, msg: &str, theme_map: &ThemeMap, supports_color: bool) -> io::Result<()> {
    print_message(writer, "", msg, ThemeEntry::Info, theme_map, supports_color)
}

pub fn print_success_message<W: Write + ?Sized>(writer: &mut W, msg: &str, theme_map: &ThemeMap, supports_color: bool) -> io::Result<()> {
    print_message(writer, "", msg, ThemeEntry::Success, theme_map, supports_color)
}

pub fn print_warn_message<W: Write + ?Sized>(writer: &mut W, msg: &str, theme_map: &ThemeMap, supports_color: bool) -> io::Result<()> {
    print_message(writer, "Warning: ", msg, ThemeEntry::Warn, theme_map, supports_color)
}

pub fn print_error_message<W: Write + ?Sized>(writer: &mut W, msg: &str, theme_map: &ThemeMap, supports_color: bool) -> io::Result<()> {
    print_message(writer, "Error: ", msg, ThemeEntry::Error, theme_map, supports_color)
}

/// Writes `original` with every match replaced by its mask.
///
/// Only the masks are highlighted; text between matches is written as is,
/// asterisks included.
pub fn write_censored<W: Write + ?Sized>(
    writer: &mut W,
    original: &str,
    matches: &[CensorMatch],
    theme_map: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    let mut last_end = 0usize;
    for m in matches {
        let (start, end) = (m.start as usize, m.end as usize);
        write!(writer, "{}", &original[last_end..start])?;
        write_styled(writer, &m.censored_string, ThemeEntry::CensoredText, theme_map, supports_color)?;
        last_end = end;
    }
    write!(writer, "{}", &original[last_end..])
}
