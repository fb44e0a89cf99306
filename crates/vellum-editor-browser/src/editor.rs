//! The base editor: textarea, preview iframe, status line and line count.
//!
//! `BrowserEditor` implements `EditorHost` over the DOM. Offsets handed to
//! and from the core are char offsets; the textarea speaks UTF-16.

use std::time::Duration;

use web_sys::{Document, HtmlElement, HtmlIFrameElement, HtmlTextAreaElement};

use vellum_editor_core::{
    EditorConfig, EditorError, EditorHost, NotificationKind, PreviewRenderer, Selection, Status,
    char_to_utf16_offset, count_lines, line_count_label, utf16_to_char_offset,
};

use crate::dom::element_by_id;
use crate::notification::Notifier;
use crate::preview::BlobPreviewSurface;

pub struct BrowserEditor {
    textarea: HtmlTextAreaElement,
    renderer: PreviewRenderer<BlobPreviewSurface>,
    status: HtmlElement,
    line_count: HtmlElement,
    notifier: Notifier,
}

impl BrowserEditor {
    /// Look up the editor's elements and do the initial render.
    pub fn mount(doc: &Document, config: &EditorConfig) -> Result<Self, EditorError> {
        let textarea: HtmlTextAreaElement = element_by_id(doc, &config.editor_id)?;
        let iframe: HtmlIFrameElement = element_by_id(doc, &config.preview_id)?;
        let status: HtmlElement = element_by_id(doc, &config.status_id)?;
        let line_count: HtmlElement = element_by_id(doc, &config.line_count_id)?;
        let banner: HtmlElement = element_by_id(doc, &config.notification_id)?;

        let renderer = PreviewRenderer::new(
            BlobPreviewSurface::new(iframe),
            Duration::from_millis(u64::from(config.preview_release_delay_ms)),
        );

        let mut editor = Self {
            textarea,
            renderer,
            status,
            line_count,
            notifier: Notifier::new(banner, config.notification_timeout_ms),
        };
        editor.refresh();
        editor.set_status(Status::ok("Ready"));
        tracing::debug!(editor_id = %config.editor_id, "editor mounted");
        Ok(editor)
    }

    pub fn textarea(&self) -> &HtmlTextAreaElement {
        &self.textarea
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Re-render the preview only.
    pub fn render_preview(&mut self) {
        let status = self.renderer.render_status(&self.textarea.value());
        self.set_status(status);
    }

    pub fn update_line_count(&self) {
        let lines = count_lines(&self.textarea.value());
        self.line_count
            .set_text_content(Some(&line_count_label(lines)));
    }

    /// Successful preview renders since mount.
    pub fn renders(&self) -> u64 {
        self.renderer.renders()
    }
}

impl EditorHost for BrowserEditor {
    fn source(&self) -> String {
        self.textarea.value()
    }

    fn replace_source(&mut self, text: &str) {
        self.textarea.set_value(text);
    }

    fn selection(&self) -> Selection {
        let value = self.textarea.value();
        let to_char =
            |utf16: Option<u32>| utf16_to_char_offset(&value, utf16.unwrap_or(0) as usize);
        let start = to_char(self.textarea.selection_start().ok().flatten());
        let end = to_char(self.textarea.selection_end().ok().flatten());

        let backward = self
            .textarea
            .selection_direction()
            .ok()
            .flatten()
            .is_some_and(|d| d == "backward");
        if backward {
            Selection::new(end, start)
        } else {
            Selection::new(start, end)
        }
    }

    fn set_selection(&mut self, selection: Selection) {
        let value = self.textarea.value();
        let to_utf16 = |offset: usize| char_to_utf16_offset(&value, offset) as u32;
        let direction = if selection.head < selection.anchor {
            "backward"
        } else {
            "forward"
        };
        if let Err(e) = self.textarea.set_selection_range_with_direction(
            to_utf16(selection.start()),
            to_utf16(selection.end()),
            direction,
        ) {
            tracing::warn!("setSelectionRange failed: {:?}", e);
        }
    }

    fn focus(&mut self) {
        let _ = self.textarea.focus();
    }

    fn refresh(&mut self) {
        self.render_preview();
        self.update_line_count();
    }

    fn set_status(&mut self, status: Status) {
        self.status.set_text_content(Some(&status.message));
        let _ = self.status.style().set_property("color", status.color());
    }

    fn notify(&mut self, message: &str, kind: NotificationKind) {
        self.notifier.show(message, kind);
    }
}
