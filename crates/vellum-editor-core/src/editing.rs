//! Whole-buffer editing commands shared by every host.

use crate::host::EditorHost;
use crate::types::{NotificationKind, Selection, Status};

/// Replace the buffer and refresh every derived view once.
pub fn replace_and_refresh<H: EditorHost + ?Sized>(host: &mut H, text: &str) {
    host.replace_source(text);
    host.refresh();
}

/// Replace the selection with `indent`, caret right after it.
pub fn indent_selection<H: EditorHost + ?Sized>(host: &mut H, indent: &str) {
    let source = host.source();
    let selection = host.selection();

    let mut updated: String = source.chars().take(selection.start()).collect();
    updated.push_str(indent);
    updated.extend(source.chars().skip(selection.end()));

    host.replace_source(&updated);
    host.set_selection(Selection::collapsed(selection.start() + indent.chars().count()));
    host.refresh();
}

/// Empty the buffer. Confirmation is the caller's job.
pub fn clear_source<H: EditorHost + ?Sized>(host: &mut H) {
    replace_and_refresh(host, "");
    host.set_status(Status::ok("Code cleared"));
    host.notify("Code cleared.", NotificationKind::Success);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::PlainEditor;

    #[test]
    fn test_indent_at_caret() {
        let mut editor = PlainEditor::from_source("<ul>\n<li>");
        editor.set_selection(Selection::collapsed(5));
        indent_selection(&mut editor, "    ");

        assert_eq!(editor.source(), "<ul>\n    <li>");
        assert_eq!(editor.selection(), Selection::collapsed(9));
        assert_eq!(editor.refreshes(), 1);
    }

    #[test]
    fn test_indent_replaces_selection() {
        let mut editor = PlainEditor::from_source("<p>old</p>");
        editor.set_selection(Selection::new(6, 3));
        indent_selection(&mut editor, "\t");

        assert_eq!(editor.source(), "<p>\t</p>");
        assert_eq!(editor.cursor(), 4);
    }

    #[test]
    fn test_clear() {
        let mut editor = PlainEditor::from_source("a\nb\nc");
        editor.set_selection(Selection::collapsed(5));
        clear_source(&mut editor);

        assert_eq!(editor.source(), "");
        assert_eq!(editor.selection(), Selection::collapsed(0));
        assert_eq!(editor.line_count(), 1);
        assert_eq!(editor.status(), &Status::ok("Code cleared"));
        assert_eq!(
            editor.last_notification(),
            Some(&("Code cleared.".to_owned(), NotificationKind::Success))
        );
    }
}
