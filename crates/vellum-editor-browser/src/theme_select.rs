//! Theme `<select>` appended to the editor panel header.

use std::rc::Rc;

use gloo_events::EventListener;
use web_sys::{Document, Element, HtmlElement, HtmlOptionElement, HtmlSelectElement};

use vellum_editor_core::{EditorError, Theme};

use crate::dom::{create_element, platform_error};

#[derive(Clone)]
pub struct ThemeSelect {
    root: HtmlElement,
    select: HtmlSelectElement,
}

impl ThemeSelect {
    pub fn mount(doc: &Document, header: &Element) -> Result<Self, EditorError> {
        let root: HtmlElement = create_element(doc, "div", "theme-selector")?;
        let select: HtmlSelectElement = create_element(doc, "select", "")?;
        select.set_id("themeSelect");

        for theme in [Theme::Light, Theme::Dark] {
            let option = HtmlOptionElement::new_with_text_and_value(theme.label(), theme.as_str())
                .map_err(|e| EditorError::Platform(platform_error(e)))?;
            select
                .append_child(&option)
                .map_err(|e| EditorError::Platform(platform_error(e)))?;
        }

        root.append_child(&select)
            .map_err(|e| EditorError::Platform(platform_error(e)))?;
        header
            .append_child(&root)
            .map_err(|e| EditorError::Platform(platform_error(e)))?;

        Ok(Self { root, select })
    }

    /// Call `on_change` with the newly picked theme.
    pub fn listen(&self, on_change: Rc<dyn Fn(Theme)>) -> EventListener {
        let select = self.select.clone();
        EventListener::new(&self.select, "change", move |_| {
            match select.value().parse::<Theme>() {
                Ok(theme) => on_change(theme),
                Err(()) => tracing::warn!(value = %select.value(), "unknown theme"),
            }
        })
    }

    /// Sync the control without firing `change`.
    pub fn set(&self, theme: Theme) {
        self.select.set_value(theme.as_str());
    }

    pub fn value(&self) -> String {
        self.select.value()
    }

    pub fn root(&self) -> &HtmlElement {
        &self.root
    }
}
