//! Text canonicalization for titles and creator names.
//!
//! Everything here produces a *comparison form*, not display text:
//! - [`normalize_text`]: strip diacritics, lower-case, collapse whitespace
//! - [`normalize_creators`]: reduce a creator list to sorted `"f. family"` tokens
//! - [`trim`]: cut a string to a UTF-8 byte budget without splitting code points
//!
//! Letters without a decomposable base (`æ`, `ø`), symbols and emoji pass through.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Byte budget applied to each metadata field before hashing.
pub const INPUT_TRIM: usize = 128;

/// Separator between canonical creators in [`normalize_creators`] output.
pub const CREATOR_SEPARATOR: &str = "; ";

/// Normalize free text into its canonical comparison form.
///
/// Decomposes to NFD, drops combining marks, lower-cases, collapses every run of
/// Unicode whitespace (including U+00A0) into one ASCII space and trims both ends.
/// The result is recomposed to NFC so scripts whose decomposition is not mark-based
/// (Hangul) come back unchanged. Idempotent.
pub fn normalize_text(text: &str) -> String {
    let stripped: String = text
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect();
    let collapsed = stripped.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.nfc().collect()
}

/// Truncate `text` so its UTF-8 encoding fits in `max_bytes`.
///
/// Never splits a code point. Returns the (possibly shortened) prefix together
/// with its exact byte length.
pub fn trim(text: &str, max_bytes: usize) -> (&str, usize) {
    if text.len() <= max_bytes {
        return (text, text.len());
    }
    let mut end = max_bytes;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    (&text[..end], end)
}

/// [`trim`] with the default [`INPUT_TRIM`] budget.
pub fn trim_default(text: &str) -> (&str, usize) {
    trim(text, INPUT_TRIM)
}

/// Canonicalize a `;`-separated list of creator names.
///
/// Each entry becomes `"<initial>. <family>"` (or just the family name when only
/// one token survives). `"Last, First"` and `"First Last"` orderings, abbreviated
/// given names (`"M."`, `"M.Ende"`), diacritics and embedded years all collapse to
/// the same token. Entries are sorted so the input order of creators is irrelevant.
///
/// Empty or punctuation-only input yields an empty string.
pub fn normalize_creators(raw: &str) -> String {
    let mut creators: Vec<String> = raw.split(';').filter_map(normalize_creator).collect();
    creators.sort();
    creators.join(CREATOR_SEPARATOR)
}

fn normalize_creator(entry: &str) -> Option<String> {
    // Parts without letters are dates or stray punctuation ("Ende, 1999").
    let parts: Vec<&str> = entry.split(',').filter(|p| has_letters(p)).collect();
    let name = match parts.split_first() {
        None => return None,
        Some((only, [])) => (*only).to_string(),
        // "Last, First ..." reads as "First ... Last".
        Some((last, given)) => {
            let mut reordered = given.join(" ");
            reordered.push(' ');
            reordered.push_str(last);
            reordered
        }
    };

    let tokens: Vec<String> = name
        .split(|c: char| c.is_whitespace() || c == '.')
        .map(|t| t.chars().filter(|c| !c.is_numeric()).collect::<String>())
        .filter(|t| has_letters(t))
        .map(|t| normalize_text(&t))
        .filter(|t| !t.is_empty())
        .collect();

    match tokens.as_slice() {
        [] => None,
        [family] => Some(family.clone()),
        [given, .., family] => {
            let initial = given.chars().next()?;
            Some(format!("{initial}. {family}"))
        }
    }
}

fn has_letters(s: &str) -> bool {
    s.chars().any(char::is_alphabetic)
}
