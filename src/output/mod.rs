// Output formatting — terminal display of comparison results.

pub mod terminal;

/// Shorten normalized document text for the details dump, marking the cut
/// with "...". Counts chars, so a cut never lands inside a code point.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}
