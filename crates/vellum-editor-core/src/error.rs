//! Error types for editor operations.
//!
//! Every variant is terminal for the single operation that raised it. Callers
//! surface them on the status line or the notification banner and carry on.

use smol_str::SmolStr;

/// Error raised by a platform layer (browser DOM, clipboard, file reader).
///
/// Platform errors are usually stringified JS exceptions, so this is a thin
/// wrapper around their message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformError(pub String);

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for PlatformError {}

impl From<&str> for PlatformError {
    fn from(s: &str) -> Self {
        PlatformError(s.to_string())
    }
}

impl From<String> for PlatformError {
    fn from(s: String) -> Self {
        PlatformError(s)
    }
}

/// Main error type for editor operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    /// The preview resource could not be constructed (e.g. blob quota).
    #[error("could not build preview: {0}")]
    RenderConstruction(#[source] PlatformError),

    /// Both the clipboard API and the select-and-copy fallback failed.
    #[error("copy failed (clipboard: {primary}; fallback: {fallback})")]
    Clipboard {
        primary: PlatformError,
        fallback: PlatformError,
    },

    /// A dropped file was neither named `*.html` nor typed `text/html`.
    #[error("unsupported file {name:?} ({media_type:?})")]
    UnsupportedFile { name: SmolStr, media_type: SmolStr },

    /// Reading a dropped file failed.
    #[error("could not read {name:?}: {source}")]
    FileRead {
        name: SmolStr,
        #[source]
        source: PlatformError,
    },

    /// A required element was not present when mounting.
    #[error("missing element {0:?}")]
    MissingElement(SmolStr),

    /// Any other platform failure.
    #[error(transparent)]
    Platform(#[from] PlatformError),
}
