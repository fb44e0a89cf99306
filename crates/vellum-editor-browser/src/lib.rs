//! Browser DOM layer for the vellum HTML editor.
//!
//! This crate provides the DOM side of the editor on top of
//! `vellum-editor-core`. It assumes a `wasm32-unknown-unknown` target.
//!
//! # Architecture
//!
//! - `editor`: `BrowserEditor`, the base editor (`EditorHost` over the textarea)
//! - `preview`: blob-URL preview surface for the iframe
//! - `clipboard`: async Clipboard API with the select-and-copy fallback
//! - `notification`: banner with ticketed hide timers
//! - `gutter`, `search_bar`, `theme_select`, `drop_zone`, `autocomplete_panel`:
//!   the widgets composed around the base editor
//! - `events`: key parsing and the document-level shortcut dispatcher
//! - `debounce`: trailing-edge debounce over `gloo-timers`
//!
//! # Re-exports
//!
//! This crate re-exports `vellum-editor-core` for convenience, so consumers
//! only need to depend on `vellum-editor-browser`.

// Re-export core crate
pub use vellum_editor_core;
pub use vellum_editor_core::*;

pub mod autocomplete_panel;
pub mod clipboard;
pub mod debounce;
pub mod dom;
pub mod drop_zone;
pub mod editor;
pub mod events;
pub mod gutter;
pub mod notification;
pub mod preview;
pub mod search_bar;
pub mod styles;
pub mod theme_select;

pub use autocomplete_panel::AutocompletePanel;
pub use clipboard::BrowserClipboard;
pub use debounce::Debounced;
pub use drop_zone::{DropZone, dropped_file_info, read_file_text};
pub use editor::BrowserEditor;
pub use events::{KeyDispatcher, combo_from_event, modifiers_from_event, parse_browser_key};
pub use gutter::LineGutter;
pub use notification::Notifier;
pub use preview::BlobPreviewSurface;
pub use search_bar::{SearchBar, SearchBarAction};
pub use styles::{fullscreen_css, inject_styles};
pub use theme_select::ThemeSelect;
