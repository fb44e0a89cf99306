//! Line-number gutter next to the source textarea.

use gloo_events::EventListener;
use web_sys::{Document, Element, HtmlElement, HtmlTextAreaElement};

use vellum_editor_core::{EditorError, Theme, count_lines, gutter_text};

use crate::dom::{create_element, platform_error, set_class};

/// The gutter element plus the scroll listener keeping it aligned.
pub struct LineGutter {
    element: HtmlElement,
    scroll: Option<EventListener>,
}

impl LineGutter {
    /// Class the textarea gets once a gutter is attached.
    pub const EDITOR_CLASS: &'static str = "with-line-numbers";

    /// Append a gutter to `wrapper` and follow `textarea`'s scroll position.
    pub fn mount(
        doc: &Document,
        wrapper: &Element,
        textarea: &HtmlTextAreaElement,
    ) -> Result<Self, EditorError> {
        let element: HtmlElement = create_element(doc, "div", "line-numbers")?;
        wrapper
            .append_child(&element)
            .map_err(|e| EditorError::Platform(platform_error(e)))?;
        set_class(textarea, Self::EDITOR_CLASS, true);

        let scroll = {
            let gutter = element.clone();
            let source = textarea.clone();
            EventListener::new(textarea, "scroll", move |_| {
                gutter.set_scroll_top(source.scroll_top());
            })
        };

        let gutter = Self {
            element,
            scroll: Some(scroll),
        };
        gutter.update(&textarea.value());
        Ok(gutter)
    }

    /// List `1..=N` for the lines of `source`.
    pub fn update(&self, source: &str) {
        self.element
            .set_text_content(Some(&gutter_text(count_lines(source))));
    }

    /// Stop following the textarea's scroll position.
    pub fn detach(&mut self) {
        self.scroll = None;
    }

    pub fn is_attached(&self) -> bool {
        self.scroll.is_some()
    }

    pub fn set_theme(&self, theme: Theme) {
        set_class(&self.element, Theme::DARK_CLASS, theme.is_dark());
    }

    pub fn element(&self) -> &HtmlElement {
        &self.element
    }
}
