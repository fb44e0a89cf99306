//! Blob-URL preview surface.
//!
//! Each render wraps the source in a `text/html` blob, points the iframe at a
//! fresh object URL and revokes that URL after a delay. The revoke timer owns
//! its URL, so it never touches a newer one.

use std::time::Duration;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, HtmlIFrameElement, Url};

use vellum_editor_core::{PlatformError, PreviewSurface};

use crate::dom::platform_error;

pub struct BlobPreviewSurface {
    iframe: HtmlIFrameElement,
}

impl BlobPreviewSurface {
    pub fn new(iframe: HtmlIFrameElement) -> Self {
        Self { iframe }
    }

    pub fn iframe(&self) -> &HtmlIFrameElement {
        &self.iframe
    }
}

impl PreviewSurface for BlobPreviewSurface {
    /// Object URL of the blob.
    type Resource = String;

    fn create(&mut self, source: &str) -> Result<String, PlatformError> {
        let parts = js_sys::Array::new();
        parts.push(&JsValue::from_str(source));
        let opts = BlobPropertyBag::new();
        opts.set_type("text/html");
        let blob = Blob::new_with_str_sequence_and_options(&parts, &opts).map_err(platform_error)?;
        Url::create_object_url_with_blob(&blob).map_err(platform_error)
    }

    fn show(&mut self, url: &String) {
        self.iframe.set_src(url);
    }

    fn release_after(&mut self, url: String, delay: Duration) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, move || {
            if let Err(e) = Url::revoke_object_url(&url) {
                tracing::warn!("Revoking preview URL failed: {:?}", e);
            }
        })
        .forget();
    }
}
