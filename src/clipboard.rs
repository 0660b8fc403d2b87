// Clipboard support: one operation, "put this string on the system
// clipboard". The error is returned to the caller; whether a failed copy
// matters is a rendering decision, not ours.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Place `text` on the system clipboard.
pub fn copy(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Clipboard is not available")?;
    clipboard
        .set_text(text.to_string())
        .context("Failed to write to the clipboard")
}
