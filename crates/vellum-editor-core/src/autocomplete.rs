//! Tag-prefix autocomplete.
//!
//! After every edit the text before the cursor is checked for an unclosed
//! `<` followed only by word characters. The partial tag name filters a fixed
//! vocabulary; confirming a suggestion replaces `<partial` with `<tag>`.

use std::sync::LazyLock;

use regex_lite::Regex;
use smol_str::SmolStr;

use crate::host::EditorHost;
use crate::keymap::{Key, KeydownResult};
use crate::text::byte_to_char;
use crate::types::Selection;

/// Tags offered by autocomplete, in display order.
pub const TAG_VOCABULARY: &[&str] = &[
    "html", "head", "title", "body", "div", "span", "p", "h1", "h2", "h3", "h4", "h5", "h6", "a",
    "img", "ul", "ol", "li", "table", "tr", "td", "th", "form", "input", "button", "script",
    "style", "link", "meta", "header", "footer", "nav", "section", "article",
];

static TAG_PREFIX_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<(\w*)$").unwrap());

/// An unclosed tag opening found right before the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPrefix {
    /// Char offset of the `<`.
    pub start: usize,
    /// Word characters typed after the `<` (possibly empty).
    pub partial: SmolStr,
}

/// Find `<partial` at the end of `text_before_cursor`.
pub fn detect_tag_prefix(text_before_cursor: &str) -> Option<TagPrefix> {
    let caps = TAG_PREFIX_REGEX.captures(text_before_cursor)?;
    let whole = caps.get(0)?;
    let partial = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
    Some(TagPrefix {
        start: byte_to_char(text_before_cursor, whole.start()),
        partial: SmolStr::new(partial),
    })
}

/// Vocabulary entries starting with `partial`, ignoring ASCII case.
pub fn filter_tags(partial: &str) -> Vec<&'static str> {
    let partial = partial.to_ascii_lowercase();
    TAG_VOCABULARY
        .iter()
        .copied()
        .filter(|tag| tag.starts_with(&partial))
        .collect()
}

/// Replace the `<partial` before the cursor with `<tag>` and refresh.
///
/// The cursor lands right after the inserted `>`. Returns false (and leaves
/// the host alone) when there is no open prefix before the cursor.
pub fn insert_completion<H: EditorHost + ?Sized>(host: &mut H, tag: &str) -> bool {
    let Some(prefix) = detect_tag_prefix(&host.text_before_cursor()) else {
        return false;
    };

    let source = host.source();
    let cursor = host.cursor();
    let mut updated: String = source.chars().take(prefix.start).collect();
    updated.push('<');
    updated.push_str(tag);
    updated.push('>');
    updated.extend(source.chars().skip(cursor));

    host.replace_source(&updated);
    host.set_selection(Selection::collapsed(prefix.start + tag.chars().count() + 2));
    host.refresh();
    tracing::debug!(tag, "inserted completion");
    true
}

/// Suggestion panel state.
///
/// Rebuilt from scratch on every edit, so a reopened panel never remembers
/// the previous selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Autocomplete {
    suggestions: Vec<&'static str>,
    selected: Option<usize>,
    visible: bool,
}

impl Autocomplete {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn suggestions(&self) -> &[&'static str] {
        &self.suggestions
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_tag(&self) -> Option<&'static str> {
        self.selected.and_then(|i| self.suggestions.get(i).copied())
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Rebuild from the text before the cursor. Returns whether the panel is
    /// visible afterwards.
    pub fn update(&mut self, text_before_cursor: &str) -> bool {
        let suggestions = detect_tag_prefix(text_before_cursor)
            .map(|prefix| filter_tags(&prefix.partial))
            .unwrap_or_default();

        if suggestions.is_empty() {
            self.hide();
        } else {
            self.suggestions = suggestions;
            self.selected = None;
            self.visible = true;
        }
        self.visible
    }

    /// Rebuild from the host's current cursor position.
    pub fn on_input<H: EditorHost + ?Sized>(&mut self, host: &H) -> bool {
        self.update(&host.text_before_cursor())
    }

    pub fn hide(&mut self) {
        self.suggestions.clear();
        self.selected = None;
        self.visible = false;
    }

    /// Move the selection down, stopping at the last row.
    pub fn select_next(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        let last = self.suggestions.len() - 1;
        self.selected = Some(self.selected.map_or(0, |i| (i + 1).min(last)));
    }

    /// Move the selection up, stopping at the first row.
    pub fn select_prev(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        self.selected = Some(self.selected.map_or(0, |i| i.saturating_sub(1)));
    }

    /// Keyboard handling while the panel is open.
    ///
    /// Enter without a selected row is left to the text widget.
    pub fn handle_key<H: EditorHost + ?Sized>(&mut self, key: &Key, host: &mut H) -> KeydownResult {
        if !self.visible || self.suggestions.is_empty() {
            return KeydownResult::NotHandled;
        }

        match key {
            Key::ArrowDown => {
                self.select_next();
                KeydownResult::Handled
            }
            Key::ArrowUp => {
                self.select_prev();
                KeydownResult::Handled
            }
            Key::Enter => match self.selected_tag() {
                Some(tag) => {
                    self.hide();
                    insert_completion(host, tag);
                    KeydownResult::Handled
                }
                None => KeydownResult::NotHandled,
            },
            Key::Escape => {
                self.hide();
                KeydownResult::PassThrough
            }
            _ => KeydownResult::NotHandled,
        }
    }

    /// Pointer pick of row `index`.
    pub fn choose<H: EditorHost + ?Sized>(&mut self, index: usize, host: &mut H) -> bool {
        let Some(tag) = self.suggestions.get(index).copied() else {
            return false;
        };
        self.hide();
        insert_completion(host, tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::PlainEditor;

    fn editor_at_end(source: &str) -> PlainEditor {
        let mut editor = PlainEditor::from_source(source);
        editor.set_selection(Selection::collapsed(source.chars().count()));
        editor
    }

    #[test]
    fn test_vocabulary_size() {
        assert_eq!(TAG_VOCABULARY.len(), 34);
    }

    #[test]
    fn test_detect_prefix() {
        assert_eq!(
            detect_tag_prefix("<body><d"),
            Some(TagPrefix {
                start: 6,
                partial: "d".into()
            })
        );
        assert_eq!(detect_tag_prefix("<p>").map(|p| p.partial), None);
        assert_eq!(detect_tag_prefix("x <").map(|p| p.start), Some(2));
        assert_eq!(detect_tag_prefix("<di v"), None);
        assert_eq!(detect_tag_prefix("<a<"), Some(TagPrefix { start: 2, partial: "".into() }));
        assert_eq!(detect_tag_prefix("plain"), None);
    }

    #[test]
    fn test_detect_prefix_char_offsets() {
        assert_eq!(detect_tag_prefix("안녕 <sp").map(|p| p.start), Some(3));
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        assert_eq!(filter_tags("DI"), vec!["div"]);
        assert_eq!(
            filter_tags("h"),
            vec!["html", "head", "h1", "h2", "h3", "h4", "h5", "h6", "header"]
        );
        assert_eq!(filter_tags("").len(), TAG_VOCABULARY.len());
        assert!(filter_tags("xyz").is_empty());
    }

    #[test]
    fn test_suggestions_after_body() {
        let mut ac = Autocomplete::new();
        assert!(ac.update("<html><body><d"));
        assert_eq!(ac.suggestions(), &["div"]);
        assert!(ac.suggestions().iter().all(|t| t.starts_with('d')));
        assert_eq!(ac.selected(), None);
    }

    #[test]
    fn test_no_match_hides() {
        let mut ac = Autocomplete::new();
        assert!(ac.update("<s"));
        assert!(!ac.update("<sx"));
        assert!(ac.suggestions().is_empty());
        assert!(!ac.update("<p> "));
    }

    #[test]
    fn test_reopen_starts_without_selection() {
        let mut ac = Autocomplete::new();
        ac.update("<s");
        ac.select_next();
        ac.select_next();
        assert_eq!(ac.selected(), Some(1));

        ac.update("<se");
        assert_eq!(ac.selected(), None);
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut ac = Autocomplete::new();
        ac.update("<t"); // title, table, tr, td, th
        assert_eq!(ac.suggestions().len(), 5);

        ac.select_prev();
        assert_eq!(ac.selected(), Some(0));
        ac.select_prev();
        assert_eq!(ac.selected(), Some(0));

        for _ in 0..10 {
            ac.select_next();
        }
        assert_eq!(ac.selected(), Some(4));
        assert_eq!(ac.selected_tag(), Some("th"));
    }

    #[test]
    fn test_enter_inserts_selected_tag() {
        let mut editor = editor_at_end("<html><body><d");
        let mut ac = Autocomplete::new();
        assert!(ac.on_input(&editor));

        assert_eq!(ac.handle_key(&Key::ArrowDown, &mut editor), KeydownResult::Handled);
        assert_eq!(ac.handle_key(&Key::Enter, &mut editor), KeydownResult::Handled);

        assert_eq!(editor.source(), "<html><body><div>");
        assert_eq!(editor.selection(), Selection::collapsed(17));
        assert_eq!(editor.refreshes(), 1);
        assert!(!ac.is_visible());
    }

    #[test]
    fn test_insert_keeps_text_after_cursor() {
        let mut editor = PlainEditor::from_source("<body><SP</body>");
        editor.set_selection(Selection::collapsed(9));
        assert!(insert_completion(&mut editor, "span"));
        assert_eq!(editor.source(), "<body><span></body>");
        assert_eq!(editor.cursor(), 12);
    }

    #[test]
    fn test_enter_without_selection_falls_through() {
        let mut editor = editor_at_end("<d");
        let mut ac = Autocomplete::new();
        ac.on_input(&editor);

        assert_eq!(ac.handle_key(&Key::Enter, &mut editor), KeydownResult::NotHandled);
        assert_eq!(editor.source(), "<d");
        assert!(ac.is_visible());
    }

    #[test]
    fn test_escape_hides() {
        let mut editor = editor_at_end("<d");
        let mut ac = Autocomplete::new();
        ac.on_input(&editor);

        assert_eq!(ac.handle_key(&Key::Escape, &mut editor), KeydownResult::PassThrough);
        assert!(!ac.is_visible());
        assert_eq!(ac.handle_key(&Key::ArrowDown, &mut editor), KeydownResult::NotHandled);
    }

    #[test]
    fn test_choose_by_pointer() {
        let mut editor = editor_at_end("<ul>\n  <l");
        let mut ac = Autocomplete::new();
        ac.on_input(&editor);
        assert_eq!(ac.suggestions(), &["li", "link"]);

        assert!(ac.choose(1, &mut editor));
        assert_eq!(editor.source(), "<ul>\n  <link>");
        assert!(!ac.choose(5, &mut editor));
    }
}
