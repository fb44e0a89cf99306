//! DOM lookup helpers.
//!
//! Lookups used at mount time return `EditorError::MissingElement`; event
//! handlers that run later should degrade silently instead.

use gloo_utils::errors::JsError;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Window};

use vellum_editor_core::{EditorError, PlatformError};

/// Stringify a JS exception into a `PlatformError`.
pub fn platform_error(value: JsValue) -> PlatformError {
    match JsError::try_from(value) {
        Ok(err) => PlatformError(err.to_string()),
        Err(not_error) => PlatformError(not_error.to_string()),
    }
}

pub fn window() -> Result<Window, EditorError> {
    web_sys::window().ok_or_else(|| EditorError::MissingElement("window".into()))
}

pub fn document() -> Result<Document, EditorError> {
    window()?
        .document()
        .ok_or_else(|| EditorError::MissingElement("document".into()))
}

/// `getElementById`, cast to `T`.
pub fn element_by_id<T: JsCast>(doc: &Document, id: &str) -> Result<T, EditorError> {
    doc.get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
        .ok_or_else(|| EditorError::MissingElement(format!("#{id}").into()))
}

/// `querySelector`, cast to `T`.
pub fn query<T: JsCast>(doc: &Document, selector: &str) -> Result<T, EditorError> {
    doc.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<T>().ok())
        .ok_or_else(|| EditorError::MissingElement(selector.into()))
}

/// `createElement` with a class name, cast to `T`.
pub fn create_element<T: JsCast>(doc: &Document, tag: &str, class: &str) -> Result<T, EditorError> {
    let el: Element = doc
        .create_element(tag)
        .map_err(|e| EditorError::Platform(platform_error(e)))?;
    el.set_class_name(class);
    el.dyn_into::<T>()
        .map_err(|_| EditorError::MissingElement(tag.into()))
}

/// Add or remove `class` on `el`.
pub fn set_class(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}
