//! Text buffer abstraction for the source buffer.
//!
//! The `TextBuffer` trait provides a common interface for text storage. In the
//! browser the `<textarea>` value is the buffer; headless hosts keep it in an
//! `EditorRope`.

/// The source buffer as the host sees it: whole-text replacement plus the
/// queries derived views need.
///
/// Lengths are in Unicode scalar values (chars), not bytes or UTF-16.
pub trait TextBuffer {
    /// Total length in chars.
    fn len_chars(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len_chars() == 0
    }

    /// Replace the whole buffer.
    fn set_text(&mut self, text: &str);

    /// Convert entire buffer to String.
    fn to_string(&self) -> String;

    /// Number of `'\n'` characters in the buffer.
    ///
    /// Only LF counts; CR and Unicode separators do not start a new line.
    fn newline_count(&self) -> usize;
}

/// Ropey-backed text buffer.
#[derive(Clone, Default)]
pub struct EditorRope {
    rope: ropey::Rope,
}

impl EditorRope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_str(s: &str) -> Self {
        Self {
            rope: ropey::Rope::from_str(s),
        }
    }
}

impl TextBuffer for EditorRope {
    fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    fn set_text(&mut self, text: &str) {
        self.rope = ropey::Rope::from_str(text);
    }

    fn to_string(&self) -> String {
        self.rope.to_string()
    }

    // Rope::len_lines also breaks on CR and U+2028, so count LF by hand.
    fn newline_count(&self) -> usize {
        self.rope
            .chunks()
            .map(|chunk| chunk.bytes().filter(|&b| b == b'\n').count())
            .sum()
    }
}

impl From<&str> for EditorRope {
    fn from(s: &str) -> Self {
        Self::from_str(s)
    }
}

impl From<String> for EditorRope {
    fn from(s: String) -> Self {
        Self::from_str(&s)
    }
}

/// Byte offset of the char at `char_offset`, clamped to the end of `s`.
pub(crate) fn char_to_byte(s: &str, char_offset: usize) -> usize {
    s.char_indices()
        .nth(char_offset)
        .map(|(byte, _)| byte)
        .unwrap_or(s.len())
}

/// Char offset of a byte offset that lies on a char boundary.
pub(crate) fn byte_to_char(s: &str, byte_offset: usize) -> usize {
    s[..byte_offset.min(s.len())].chars().count()
}

/// Convert a UTF-16 code unit offset (as used by DOM text controls) into a
/// char offset. Offsets that land inside a surrogate pair round down.
pub fn utf16_to_char_offset(s: &str, utf16_offset: usize) -> usize {
    let mut units = 0;
    for (chars, c) in s.chars().enumerate() {
        let next = units + c.len_utf16();
        if next > utf16_offset {
            return chars;
        }
        units = next;
    }
    s.chars().count()
}

/// Convert a char offset into a UTF-16 code unit offset.
pub fn char_to_utf16_offset(s: &str, char_offset: usize) -> usize {
    s.chars().take(char_offset).map(char::len_utf16).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_text_replaces_everything() {
        let mut rope = EditorRope::from_str("<p>hi</p>");
        assert_eq!(rope.len_chars(), 9);

        rope.set_text("<p>안녕</p>");
        assert_eq!(rope.to_string(), "<p>안녕</p>");
        assert_eq!(rope.len_chars(), 9);

        rope.set_text("");
        assert!(rope.is_empty());
        assert_eq!(EditorRope::new().to_string(), "");
    }

    #[test]
    fn test_newline_count_ignores_carriage_return() {
        let rope = EditorRope::from_str("a\r\nb\rc\u{2028}d\n");
        assert_eq!(rope.newline_count(), 2);
    }

    #[test]
    fn test_utf16_conversion() {
        // "a😀b": the emoji is 1 char, 2 UTF-16 units.
        let s = "a😀b";
        assert_eq!(utf16_to_char_offset(s, 0), 0);
        assert_eq!(utf16_to_char_offset(s, 1), 1);
        assert_eq!(utf16_to_char_offset(s, 2), 1); // inside the pair
        assert_eq!(utf16_to_char_offset(s, 3), 2);
        assert_eq!(utf16_to_char_offset(s, 4), 3);
        assert_eq!(utf16_to_char_offset(s, 99), 3);

        assert_eq!(char_to_utf16_offset(s, 2), 3);
        assert_eq!(char_to_utf16_offset(s, 3), 4);
    }

    #[test]
    fn test_byte_char_helpers() {
        let s = "한글<p>";
        assert_eq!(char_to_byte(s, 2), 6);
        assert_eq!(char_to_byte(s, 99), s.len());
        assert_eq!(byte_to_char(s, 6), 2);
    }
}
