//! Character classification helpers.

/// Counts ASCII letters and digits in `text`.
///
/// Iterates by code point; accented or non-Latin letters, punctuation and
/// whitespace are not counted.
pub fn count_alphanumeric(text: &str) -> u64 {
    text.chars().filter(char::is_ascii_alphanumeric).count() as u64
}
