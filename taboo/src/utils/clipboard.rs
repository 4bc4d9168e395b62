//! Clipboard support, available with the `clipboard` cargo feature.

use anyhow::Result;

/// Copies `content` to the system clipboard.
#[cfg(feature = "clipboard")]
pub fn copy_to_clipboard(content: &str) -> Result<()> {
    use anyhow::Context;

    let mut clipboard = arboard::Clipboard::new().context("Failed to access the system clipboard")?;
    clipboard
        .set_text(content.to_string())
        .context("Failed to write to the system clipboard")?;
    log::debug!("Copied {} bytes to the clipboard.", content.len());
    Ok(())
}

/// Copies `content` to the system clipboard.
#[cfg(not(feature = "clipboard"))]
pub fn copy_to_clipboard(_content: &str) -> Result<()> {
    anyhow::bail!("taboo was built without clipboard support (enable the `clipboard` feature)")
}
