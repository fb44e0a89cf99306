//! Autocomplete suggestion panel.
//!
//! Rows are rebuilt from the core `Autocomplete` state on every change. Row
//! clicks are handled by one delegated listener on the panel, so rebuilding
//! rows never drops a listener that is running.

use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use vellum_editor_core::{Autocomplete, EditorError};

use crate::dom::{create_element, platform_error, set_class};

const SHOW_CLASS: &str = "show";
const ITEM_CLASS: &str = "autocomplete-item";
const SELECTED_CLASS: &str = "selected";
const INDEX_ATTR: &str = "data-index";

#[derive(Clone)]
pub struct AutocompletePanel {
    element: HtmlElement,
}

impl AutocompletePanel {
    /// Append an empty panel to `wrapper`, positioned at `left`/`top`.
    pub fn mount(
        doc: &Document,
        wrapper: &Element,
        left: &str,
        top: &str,
    ) -> Result<Self, EditorError> {
        let element: HtmlElement = create_element(doc, "div", "autocomplete")?;
        let style = element.style();
        let _ = style.set_property("left", left);
        let _ = style.set_property("top", top);
        wrapper
            .append_child(&element)
            .map_err(|e| EditorError::Platform(platform_error(e)))?;
        Ok(Self { element })
    }

    /// Call `on_pick` with the index of a clicked row.
    pub fn listen(&self, on_pick: Rc<dyn Fn(usize)>) -> EventListener {
        EventListener::new(&self.element, "click", move |evt| {
            let index = evt
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.closest(&format!(".{ITEM_CLASS}")).ok().flatten())
                .and_then(|row| row.get_attribute(INDEX_ATTR))
                .and_then(|i| i.parse::<usize>().ok());
            if let Some(index) = index {
                on_pick(index);
            }
        })
    }

    /// Mirror `state` into the DOM.
    pub fn render(&self, state: &Autocomplete) {
        let Some(doc) = self.element.owner_document() else {
            return;
        };
        self.element.set_inner_html("");

        if !state.is_visible() {
            set_class(&self.element, SHOW_CLASS, false);
            return;
        }

        for (i, tag) in state.suggestions().iter().enumerate() {
            let Ok(row) = create_element::<HtmlElement>(&doc, "div", ITEM_CLASS) else {
                continue;
            };
            row.set_text_content(Some(tag));
            let _ = row.set_attribute(INDEX_ATTR, &i.to_string());
            set_class(&row, SELECTED_CLASS, state.selected() == Some(i));
            let _ = self.element.append_child(&row);
        }
        set_class(&self.element, SHOW_CLASS, true);
    }

    /// Move the `selected` class without rebuilding rows.
    pub fn update_selection(&self, state: &Autocomplete) {
        let Ok(rows) = self.element.query_selector_all(&format!(".{ITEM_CLASS}")) else {
            return;
        };
        for i in 0..rows.length() {
            if let Some(row) = rows.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                set_class(&row, SELECTED_CLASS, state.selected() == Some(i as usize));
            }
        }
    }

    pub fn is_shown(&self) -> bool {
        self.element.class_list().contains(SHOW_CLASS)
    }

    pub fn element(&self) -> &HtmlElement {
        &self.element
    }
}
