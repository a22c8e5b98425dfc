//! Character shingling.
//!
//! Shingles are computed on **Unicode scalar values** (`char`), not bytes, so a
//! multi-byte letter counts as one position.

use crate::error::{Error, Result};

/// Split `text` into overlapping windows of `width` characters.
///
/// Text no longer than `width` (including the empty string) yields a single window
/// holding the text unchanged. Otherwise yields `len - width + 1` windows in order.
pub fn sliding_window(text: &str, width: usize) -> Result<Vec<String>> {
    if width == 0 {
        return Err(Error::InvalidParam("window width must be >= 1"));
    }
    Ok(char_windows(text, width))
}

/// [`sliding_window`] for callers holding a non-zero constant width.
pub(crate) fn char_windows(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= width {
        return vec![text.to_string()];
    }
    chars
        .windows(width)
        .map(|w| w.iter().collect::<String>())
        .collect()
}
