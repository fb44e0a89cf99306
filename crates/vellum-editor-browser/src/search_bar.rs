//! Search bar: query input with Next, Prev and Close buttons.

use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, HtmlInputElement, KeyboardEvent};

use vellum_editor_core::{EditorError, SearchDirection};

use crate::dom::{create_element, platform_error, set_class};

const SHOW_CLASS: &str = "show";

/// What the user asked the search bar to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchBarAction {
    Search(SearchDirection),
    Close,
}

/// Handles on the search bar elements. Cloning shares the same DOM nodes.
#[derive(Clone)]
pub struct SearchBar {
    root: HtmlElement,
    input: HtmlInputElement,
    next: HtmlButtonElement,
    prev: HtmlButtonElement,
    close: HtmlButtonElement,
}

impl SearchBar {
    /// Build the (hidden) bar and append it to `wrapper`.
    pub fn mount(doc: &Document, wrapper: &Element) -> Result<Self, EditorError> {
        let root: HtmlElement = create_element(doc, "div", "search-bar")?;

        let input: HtmlInputElement = create_element(doc, "input", "")?;
        input.set_type("text");
        input.set_id("searchInput");
        input.set_placeholder("Search...");

        let button = |id: &str, label: &str| -> Result<HtmlButtonElement, EditorError> {
            let b: HtmlButtonElement = create_element(doc, "button", "")?;
            b.set_id(id);
            b.set_text_content(Some(label));
            Ok(b)
        };
        let next = button("searchNext", "Next")?;
        let prev = button("searchPrev", "Prev")?;
        let close = button("searchClose", "\u{00d7}")?;

        for child in [
            input.unchecked_ref::<Element>(),
            next.unchecked_ref(),
            prev.unchecked_ref(),
            close.unchecked_ref(),
        ] {
            root.append_child(child)
                .map_err(|e| EditorError::Platform(platform_error(e)))?;
        }
        wrapper
            .append_child(&root)
            .map_err(|e| EditorError::Platform(platform_error(e)))?;

        Ok(Self {
            root,
            input,
            next,
            prev,
            close,
        })
    }

    /// Wire the buttons and the input's Enter / Shift+Enter / Escape keys.
    pub fn listen(&self, on_action: Rc<dyn Fn(SearchBarAction)>) -> Vec<EventListener> {
        let click = |target: &HtmlButtonElement, action: SearchBarAction| {
            let on_action = Rc::clone(&on_action);
            EventListener::new(target, "click", move |_| on_action(action))
        };

        let keydown = {
            let on_action = Rc::clone(&on_action);
            EventListener::new(&self.input, "keydown", move |evt| {
                let Some(evt) = evt.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                match evt.key().as_str() {
                    "Enter" if evt.shift_key() => {
                        on_action(SearchBarAction::Search(SearchDirection::Prev))
                    }
                    "Enter" => on_action(SearchBarAction::Search(SearchDirection::Next)),
                    "Escape" => on_action(SearchBarAction::Close),
                    _ => {}
                }
            })
        };

        vec![
            click(&self.next, SearchBarAction::Search(SearchDirection::Next)),
            click(&self.prev, SearchBarAction::Search(SearchDirection::Prev)),
            click(&self.close, SearchBarAction::Close),
            keydown,
        ]
    }

    /// Show or hide the bar. Opening focuses the query input.
    pub fn set_open(&self, open: bool) {
        set_class(&self.root, SHOW_CLASS, open);
        if open {
            let _ = self.input.focus();
        }
    }

    pub fn is_open(&self) -> bool {
        self.root.class_list().contains(SHOW_CLASS)
    }

    /// Current query, read live from the input.
    pub fn query(&self) -> String {
        self.input.value()
    }

    pub fn input(&self) -> &HtmlInputElement {
        &self.input
    }
}
