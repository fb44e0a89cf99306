//! Browser clipboard implementation.
//!
//! Implements `ClipboardPlatform` with the async Clipboard API and a
//! select-all plus `execCommand("copy")` fallback on the source textarea.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlDocument, HtmlTextAreaElement};

use vellum_editor_core::{ClipboardPlatform, PlatformError};

use crate::dom::platform_error;

/// Clipboard access bound to the source textarea (used by the fallback).
#[derive(Clone)]
pub struct BrowserClipboard {
    textarea: HtmlTextAreaElement,
}

impl BrowserClipboard {
    pub fn new(textarea: HtmlTextAreaElement) -> Self {
        Self { textarea }
    }
}

impl ClipboardPlatform for BrowserClipboard {
    async fn write_text(&self, text: &str) -> Result<(), PlatformError> {
        let window = web_sys::window().ok_or_else(|| PlatformError::from("no window"))?;
        let promise = window.navigator().clipboard().write_text(text);
        JsFuture::from(promise).await.map_err(platform_error)?;
        tracing::debug!("Wrote {} bytes to clipboard", text.len());
        Ok(())
    }

    fn fallback_copy(&self) -> Result<(), PlatformError> {
        self.textarea.select();
        let doc = self
            .textarea
            .owner_document()
            .and_then(|d| d.dyn_into::<HtmlDocument>().ok())
            .ok_or_else(|| PlatformError::from("no html document"))?;
        match doc.exec_command("copy") {
            Ok(true) => Ok(()),
            Ok(false) => Err(PlatformError::from("copy command was refused")),
            Err(e) => Err(platform_error(e)),
        }
    }
}
