//! vellum-editor-core: Pure Rust editor logic without DOM dependencies.
//!
//! This crate provides:
//! - `TextBuffer` trait for text storage abstraction, `EditorRope` backing it
//! - `EditorHost` - the narrow capability interface every enhancement talks to
//! - `PlainEditor<T>` - in-memory host for headless use and tests
//! - Line counting, search, tag autocomplete, drop acceptance, theme and
//!   fullscreen state, notification lifecycle, preview resource lifecycle,
//!   clipboard fallback policy and the keymap
//!
//! Platform layers (see `vellum-editor-browser`) implement `EditorHost`,
//! `PreviewSurface` and `ClipboardPlatform`.

pub mod autocomplete;
pub mod clipboard;
pub mod config;
pub mod drop;
pub mod editing;
pub mod error;
pub mod host;
pub mod keymap;
pub mod lines;
pub mod notification;
pub mod preview;
pub mod search;
pub mod text;
pub mod theme;
pub mod types;

pub use autocomplete::{
    Autocomplete, TAG_VOCABULARY, TagPrefix, detect_tag_prefix, filter_tags, insert_completion,
};
pub use clipboard::{ClipboardPlatform, CopyPath, copy_source, report_copy};
pub use config::EditorConfig;
pub use drop::{DropZoneState, DroppedFile, accept_dropped_file, load_dropped_text, reject_drop};
pub use editing::{clear_source, indent_selection, replace_and_refresh};
pub use error::{EditorError, PlatformError};
pub use host::{EditorHost, PlainEditor};
pub use keymap::{EditorCommand, Key, KeyCombo, KeydownResult, Keymap, Modifiers};
pub use lines::{count_lines, gutter_text, line_count_label};
pub use notification::{Notification, NotificationState, NotificationTicket};
pub use preview::{PreviewRenderer, PreviewSurface};
pub use search::{SearchDirection, apply_search, search_next, search_prev};
pub use smol_str::SmolStr;
pub use text::{EditorRope, TextBuffer, char_to_utf16_offset, utf16_to_char_offset};
pub use theme::{Fullscreen, Theme};
pub use types::{NotificationKind, Selection, Status};
