// Filename sanitization for uploaded documents.
//
// Turns whatever the client sent into a flat, ASCII-only name that is safe
// to join onto a slot directory: path separators become underscores, anything
// outside [A-Za-z0-9._-] is dropped, and leading/trailing dots and underscores
// are stripped so "../../x.pdf" can't climb out of the slot.

const WINDOWS_RESERVED: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Sanitize an uploaded filename. May return an empty string, which callers
/// must reject.
pub fn sanitize_filename(name: &str) -> String {
    let spaced = name.replace(['/', '\\'], " ");
    let joined = spaced.split_whitespace().collect::<Vec<_>>().join("_");
    let kept: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect();
    let trimmed = kept.trim_matches(|c| c == '.' || c == '_');

    let stem = trimmed.split('.').next().unwrap_or_default();
    if WINDOWS_RESERVED
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(stem))
    {
        return format!("_{trimmed}");
    }
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name_unchanged() {
        assert_eq!(sanitize_filename("essay-v2.pdf"), "essay-v2.pdf");
    }

    #[test]
    fn test_spaces_become_underscores() {
        assert_eq!(sanitize_filename("My  Essay Final.pdf"), "My_Essay_Final.pdf");
    }

    #[test]
    fn test_path_traversal_flattened() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "etc_passwd");
        assert_eq!(sanitize_filename("C:\\Users\\me\\doc.pdf"), "C_Users_me_doc.pdf");
    }

    #[test]
    fn test_non_ascii_dropped() {
        assert_eq!(sanitize_filename("résumé.pdf"), "rsum.pdf");
    }

    #[test]
    fn test_reserved_names_prefixed() {
        assert_eq!(sanitize_filename("con.pdf"), "_con.pdf");
    }

    #[test]
    fn test_nothing_left() {
        assert_eq!(sanitize_filename("../"), "");
        assert_eq!(sanitize_filename("ü"), "");
    }
}
