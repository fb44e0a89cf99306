//! WASM bindings for the vellum HTML live-preview editor.
//!
//! `HtmlEditor.mount()` attaches to existing page markup: a source textarea,
//! a preview iframe, status and line-count spans, a notification banner and
//! the toolbar buttons. Element ids can be overridden with a config object.

mod editor;
mod enhancements;
mod types;

pub use editor::*;
pub use types::*;

use wasm_bindgen::prelude::*;

/// Install the panic hook and route `tracing` to the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    use tracing::Level;
    use tracing::subscriber::set_global_default;
    use tracing_subscriber::Registry;
    use tracing_subscriber::layer::SubscriberExt;

    let console_level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let wasm_layer = tracing_wasm::WASMLayer::new(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(console_level)
            .build(),
    );

    // A host page may have installed its own subscriber already.
    let _ = set_global_default(Registry::default().with(wasm_layer));
}
