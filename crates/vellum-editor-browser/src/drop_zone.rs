//! Drop region over the editor wrapper.
//!
//! The overlay carries `active` while something is dragged over the wrapper.
//! Only the first file of a drop is passed on.

use std::cell::Cell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, DragEvent, Element, File, HtmlElement, Node};

use vellum_editor_core::{DropZoneState, DroppedFile, EditorError, PlatformError};

use crate::dom::{create_element, platform_error, set_class};

#[derive(Clone)]
pub struct DropZone {
    wrapper: Element,
    overlay: HtmlElement,
    state: Rc<Cell<DropZoneState>>,
}

impl DropZone {
    pub fn mount(doc: &Document, wrapper: &Element) -> Result<Self, EditorError> {
        let overlay: HtmlElement = create_element(doc, "div", "drop-zone")?;
        let label: HtmlElement = create_element(doc, "div", "")?;
        label.set_text_content(Some("Drop an HTML file here"));
        overlay
            .append_child(&label)
            .map_err(|e| EditorError::Platform(platform_error(e)))?;
        wrapper
            .append_child(&overlay)
            .map_err(|e| EditorError::Platform(platform_error(e)))?;

        Ok(Self {
            wrapper: wrapper.clone(),
            overlay,
            state: Rc::new(Cell::new(DropZoneState::default())),
        })
    }

    /// Wire dragover / dragleave / drop on the wrapper.
    pub fn listen(&self, on_file: Rc<dyn Fn(File)>) -> Vec<EventListener> {
        let opts = EventListenerOptions::enable_prevent_default;

        let dragover = {
            let zone = self.clone();
            EventListener::new_with_options(&self.wrapper, "dragover", opts(), move |evt| {
                evt.prevent_default();
                zone.update(DropZoneState::drag_over);
            })
        };

        let dragleave = {
            let zone = self.clone();
            EventListener::new(&self.wrapper, "dragleave", move |evt| {
                let related = evt
                    .dyn_ref::<DragEvent>()
                    .and_then(|e| e.related_target())
                    .and_then(|t| t.dyn_into::<Node>().ok());
                let left_region = !zone.wrapper.contains(related.as_ref());
                zone.update(|s| s.drag_leave(left_region));
            })
        };

        let drop = {
            let zone = self.clone();
            EventListener::new_with_options(&self.wrapper, "drop", opts(), move |evt| {
                evt.prevent_default();
                zone.update(DropZoneState::drop);

                let file = evt
                    .dyn_ref::<DragEvent>()
                    .and_then(|e| e.data_transfer())
                    .and_then(|dt| dt.files())
                    .and_then(|files| files.get(0));
                if let Some(file) = file {
                    on_file(file);
                }
            })
        };

        vec![dragover, dragleave, drop]
    }

    pub fn is_active(&self) -> bool {
        self.state.get().is_active()
    }

    fn update(&self, f: impl FnOnce(&mut DropZoneState)) {
        let mut state = self.state.get();
        f(&mut state);
        self.state.set(state);
        set_class(&self.overlay, DropZoneState::ACTIVE_CLASS, state.is_active());
    }
}

/// Name and declared media type of `file`.
pub fn dropped_file_info(file: &File) -> DroppedFile {
    DroppedFile::new(file.name(), file.type_())
}

/// Read `file` as text.
pub async fn read_file_text(file: &File) -> Result<String, PlatformError> {
    let text = JsFuture::from(file.text()).await.map_err(platform_error)?;
    text.as_string()
        .ok_or_else(|| PlatformError::from("file contents were not a string"))
}
