// Text normalization — the first stage of every comparison.
//
// Extracted PDF text is full of punctuation, page numbers, and irregular
// line breaks. We reduce it to a flat run of lowercase word tokens separated
// by single spaces so the vector builder can split on whitespace.
//
// Order matters: symbols go first, then digit runs (deleted outright, so
// "abc123def" becomes "abcdef"), then whitespace is collapsed.

use std::sync::LazyLock;

use regex_lite::Regex;

/// Anything that isn't an ASCII word character or whitespace.
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("valid non-word pattern"));

static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("valid digit pattern"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// Normalize raw document text into space-separated lowercase tokens.
///
/// Never fails: empty (or all-punctuation) input yields an empty string.
/// Applying it twice gives the same result as applying it once.
pub fn normalize(text: &str) -> String {
    // Unicode spaces (NBSP, thin space, ...) are separators too, but the
    // regex classes below are ASCII-only, so fold them to ' ' first
    let spaced: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .collect();
    let without_symbols = NON_WORD.replace_all(&spaced, "");
    let without_digits = DIGITS.replace_all(&without_symbols, "");
    let collapsed = WHITESPACE.replace_all(&without_digits, " ");
    collapsed.trim().to_string()
}

/// Split normalized text into tokens. Empty text has no tokens.
pub fn tokenize(normalized: &str) -> Vec<&str> {
    normalized.split_whitespace().collect()
}
