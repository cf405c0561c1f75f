//! Sanitization of server-supplied text before rendering.
//!
//! Everything interpolated into the UI comes from the server, which in turn
//! echoes whatever the generation model produced. Stripping control
//! characters keeps a hostile `test_case_name` from smuggling terminal
//! escape sequences into the display; ordinary markup like `<script>` stays
//! as literal text.

/// Strips control characters from text, keeping newlines.
///
/// Newlines survive because multi-line fields (test steps, preconditions)
/// are rendered line by line; every other control character, including
/// ESC, is dropped.
pub fn sanitize(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control() || *c == '\n')
        .collect()
}

/// Truncates to `max_chars`, appending an ellipsis when anything was cut.
pub fn truncate(input: &str, max_chars: usize) -> String {
    if input.chars().count() <= max_chars {
        return input.to_string();
    }
    let mut out: String = input.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('\u{2026}');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(sanitize("Verify login works"), "Verify login works");
    }

    #[test]
    fn test_markup_stays_literal() {
        assert_eq!(
            sanitize("<script>alert('x')</script>"),
            "<script>alert('x')</script>"
        );
    }

    #[test]
    fn test_escape_sequences_are_stripped() {
        assert_eq!(sanitize("evil\x1b[31mred\x1b[0m"), "evil[31mred[0m");
        assert_eq!(sanitize("bell\x07"), "bell");
        assert_eq!(sanitize("back\x08space"), "backspace");
    }

    #[test]
    fn test_newlines_survive() {
        assert_eq!(sanitize("1. step one\n2. step two"), "1. step one\n2. step two");
        assert_eq!(sanitize("tab\there"), "tabhere");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly-10", 10), "exactly-10");
        assert_eq!(truncate("much longer than that", 10), "much long\u{2026}");
        assert_eq!(truncate("ab", 0), "\u{2026}");
    }
}
