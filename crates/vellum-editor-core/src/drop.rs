//! Drag-and-drop file acceptance and loading.

use smol_str::SmolStr;

use crate::editing::replace_and_refresh;
use crate::error::EditorError;
use crate::host::EditorHost;
use crate::types::NotificationKind;

/// Metadata of the first file in a drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedFile {
    pub name: SmolStr,
    /// Declared media type, empty when the platform does not know it.
    pub media_type: SmolStr,
}

impl DroppedFile {
    pub fn new(name: impl Into<SmolStr>, media_type: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
        }
    }
}

/// Accept files named `*.html` (case-sensitive) or typed `text/html`.
pub fn accept_dropped_file(file: &DroppedFile) -> Result<(), EditorError> {
    if file.name.ends_with(".html") || file.media_type == "text/html" {
        Ok(())
    } else {
        Err(EditorError::UnsupportedFile {
            name: file.name.clone(),
            media_type: file.media_type.clone(),
        })
    }
}

/// Report a rejected drop. The buffer is left untouched.
pub fn reject_drop<H: EditorHost + ?Sized>(host: &mut H, err: &EditorError) {
    tracing::warn!(%err, "drop rejected");
    let message = match err {
        EditorError::UnsupportedFile { .. } => "Only HTML files are supported.",
        _ => "Could not read the dropped file.",
    };
    host.notify(message, NotificationKind::Error);
}

/// Replace the buffer with a dropped file's contents.
pub fn load_dropped_text<H: EditorHost + ?Sized>(host: &mut H, file: &DroppedFile, text: &str) {
    replace_and_refresh(host, text);
    host.notify("File loaded!", NotificationKind::Success);
    tracing::debug!(name = %file.name, chars = text.chars().count(), "dropped file loaded");
}

/// Highlight state of the drop region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DropZoneState {
    active: bool,
}

impl DropZoneState {
    /// Class on the drop region while highlighted.
    pub const ACTIVE_CLASS: &'static str = "active";

    pub fn is_active(self) -> bool {
        self.active
    }

    pub fn drag_over(&mut self) {
        self.active = true;
    }

    /// `left_region` is false when the pointer moved onto a child of the
    /// region, which keeps the highlight on.
    pub fn drag_leave(&mut self, left_region: bool) {
        if left_region {
            self.active = false;
        }
    }

    pub fn drop(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::PlainEditor;

    #[test]
    fn test_acceptance() {
        assert!(accept_dropped_file(&DroppedFile::new("page.html", "")).is_ok());
        assert!(accept_dropped_file(&DroppedFile::new("page.html", "text/plain")).is_ok());
        assert!(accept_dropped_file(&DroppedFile::new("blob", "text/html")).is_ok());
        assert!(accept_dropped_file(&DroppedFile::new("notes.txt", "text/plain")).is_err());
    }

    #[test]
    fn test_suffix_is_case_sensitive() {
        let err = accept_dropped_file(&DroppedFile::new("page.HTML", "")).unwrap_err();
        assert_eq!(
            err,
            EditorError::UnsupportedFile {
                name: "page.HTML".into(),
                media_type: "".into()
            }
        );
        assert!(accept_dropped_file(&DroppedFile::new("page.HTML", "text/html")).is_ok());
        assert!(accept_dropped_file(&DroppedFile::new("page.htm", "")).is_err());
    }

    #[test]
    fn test_reject_leaves_buffer() {
        let mut editor = PlainEditor::from_source("<p>keep</p>");
        let file = DroppedFile::new("notes.txt", "text/plain");
        let err = accept_dropped_file(&file).unwrap_err();
        reject_drop(&mut editor, &err);

        assert_eq!(editor.source(), "<p>keep</p>");
        assert_eq!(editor.refreshes(), 0);
        assert_eq!(
            editor.last_notification(),
            Some(&("Only HTML files are supported.".to_owned(), NotificationKind::Error))
        );
    }

    #[test]
    fn test_load_replaces_and_refreshes() {
        let mut editor = PlainEditor::from_source("old");
        let file = DroppedFile::new("page.html", "text/html");
        load_dropped_text(&mut editor, &file, "<h1>A</h1>\n<p>B</p>");

        assert_eq!(editor.source(), "<h1>A</h1>\n<p>B</p>");
        assert_eq!(editor.line_count(), 2);
        assert_eq!(editor.refreshes(), 1);
        assert_eq!(
            editor.last_notification(),
            Some(&("File loaded!".to_owned(), NotificationKind::Success))
        );
    }

    #[test]
    fn test_drop_zone_highlight() {
        let mut zone = DropZoneState::default();
        zone.drag_over();
        assert!(zone.is_active());
        zone.drag_leave(false);
        assert!(zone.is_active());
        zone.drag_leave(true);
        assert!(!zone.is_active());

        zone.drag_over();
        zone.drop();
        assert!(!zone.is_active());
    }
}
