//! Line counting and the line-number gutter listing.

/// Number of `'\n'`-delimited segments in `source`.
///
/// An empty buffer is one line; N line breaks make N+1 lines.
pub fn count_lines(source: &str) -> usize {
    source.bytes().filter(|&b| b == b'\n').count() + 1
}

/// Gutter text for `lines` lines: `1\n2\n...N\n`.
pub fn gutter_text(lines: usize) -> String {
    let mut out = String::with_capacity(lines * 4);
    for n in 1..=lines {
        out.push_str(&n.to_string());
        out.push('\n');
    }
    out
}

/// Status bar label for the line count.
pub fn line_count_label(lines: usize) -> String {
    format!("Lines: {lines}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_buffer_is_one_line() {
        assert_eq!(count_lines(""), 1);
    }

    #[test]
    fn test_count_matches_newlines_plus_one() {
        for s in ["a", "a\n", "\n\n\n", "<html>\n<body>\r\n</body>\n</html>", "é\nü"] {
            assert_eq!(count_lines(s), s.matches('\n').count() + 1, "{s:?}");
        }
    }

    #[test]
    fn test_trailing_newline_opens_a_line() {
        assert_eq!(count_lines("<p>hi</p>\n"), 2);
    }

    #[test]
    fn test_gutter_text() {
        assert_eq!(gutter_text(1), "1\n");
        assert_eq!(gutter_text(3), "1\n2\n3\n");
        assert_eq!(gutter_text(12).lines().last(), Some("12"));
    }

    #[test]
    fn test_label() {
        assert_eq!(line_count_label(count_lines("a\nb")), "Lines: 2");
    }
}
