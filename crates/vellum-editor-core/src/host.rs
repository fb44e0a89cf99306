//! The editor capability interface and an in-memory implementation.
//!
//! The base editor exposes its buffer and refresh operations through
//! `EditorHost`. Enhancements (search, autocomplete, drop loading, theme) are
//! written against this trait only and never reach into a host's fields.

use crate::lines::count_lines;
use crate::text::{EditorRope, TextBuffer};
use crate::types::{NotificationKind, Selection, Status};

/// Narrow interface the base editor offers to everything composed around it.
///
/// Selection offsets are char offsets into `source()`.
pub trait EditorHost {
    /// The full source buffer.
    fn source(&self) -> String;

    /// Replace the whole source buffer. Does not refresh derived views.
    fn replace_source(&mut self, text: &str);

    /// Current selection in the text widget.
    fn selection(&self) -> Selection;

    /// Set the selection in the text widget.
    fn set_selection(&mut self, selection: Selection);

    /// Return input focus to the text widget.
    fn focus(&mut self) {}

    /// Re-derive every view of the buffer (preview, line count and anything
    /// an enhancement layer adds on top).
    fn refresh(&mut self);

    /// Update the persistent status line.
    fn set_status(&mut self, status: Status);

    /// Show a transient notification.
    fn notify(&mut self, message: &str, kind: NotificationKind);

    // === Provided ===

    /// Cursor position, taken as the start of the selection.
    fn cursor(&self) -> usize {
        self.selection().start()
    }

    /// Source text before the cursor.
    fn text_before_cursor(&self) -> String {
        self.source().chars().take(self.cursor()).collect()
    }
}

/// In-memory host backed by a `TextBuffer`.
///
/// Used for headless editing and as the reference host in tests. Every
/// refresh, status change and notification is recorded.
#[derive(Clone)]
pub struct PlainEditor<T = EditorRope> {
    buffer: T,
    selection: Selection,
    status: Status,
    notifications: Vec<(String, NotificationKind)>,
    refreshes: usize,
    line_count: usize,
    focused: bool,
}

impl<T: TextBuffer> PlainEditor<T> {
    pub fn new(buffer: T) -> Self {
        let line_count = buffer.newline_count() + 1;
        Self {
            buffer,
            selection: Selection::default(),
            status: Status::default(),
            notifications: Vec::new(),
            refreshes: 0,
            line_count,
            focused: false,
        }
    }

    pub fn buffer(&self) -> &T {
        &self.buffer
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Notifications shown so far, oldest first.
    pub fn notifications(&self) -> &[(String, NotificationKind)] {
        &self.notifications
    }

    pub fn last_notification(&self) -> Option<&(String, NotificationKind)> {
        self.notifications.last()
    }

    /// How many times derived views were refreshed.
    pub fn refreshes(&self) -> usize {
        self.refreshes
    }

    /// Line count as of the last refresh.
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }
}

impl PlainEditor<EditorRope> {
    pub fn from_source(source: &str) -> Self {
        Self::new(EditorRope::from_str(source))
    }
}

impl<T: TextBuffer> EditorHost for PlainEditor<T> {
    fn source(&self) -> String {
        self.buffer.to_string()
    }

    fn replace_source(&mut self, text: &str) {
        self.buffer.set_text(text);
        let len = self.buffer.len_chars();
        self.selection = Selection::new(
            self.selection.anchor.min(len),
            self.selection.head.min(len),
        );
    }

    fn selection(&self) -> Selection {
        self.selection
    }

    fn set_selection(&mut self, selection: Selection) {
        let len = self.buffer.len_chars();
        self.selection = Selection::new(selection.anchor.min(len), selection.head.min(len));
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn refresh(&mut self) {
        self.refreshes += 1;
        self.line_count = count_lines(&self.buffer.to_string());
    }

    fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    fn notify(&mut self, message: &str, kind: NotificationKind) {
        self.notifications.push((message.to_owned(), kind));
    }
}
