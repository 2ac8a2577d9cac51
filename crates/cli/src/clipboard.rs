//! Clipboard read primitive.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Current clipboard contents as text. An unavailable clipboard (nothing
/// copied, or non-text content) reads as the empty string rather than an
/// error; the flow turns that into a user-visible abort.
pub fn read_text() -> Result<String> {
    let mut clipboard = Clipboard::new().context("opening clipboard")?;
    match clipboard.get_text() {
        Ok(text) => Ok(text),
        Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
        Err(err) => Err(err).context("reading clipboard text"),
    }
}
