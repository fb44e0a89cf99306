//! Copy-to-clipboard policy.
//!
//! The async clipboard write is tried first. If it is rejected, the platform
//! selects the whole text widget and issues the legacy copy command.

use std::future::Future;

use crate::error::{EditorError, PlatformError};
use crate::host::EditorHost;
use crate::types::{NotificationKind, Status};

/// Platform clipboard access. Write-only.
pub trait ClipboardPlatform {
    /// Write `text` through the async clipboard API.
    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), PlatformError>>;

    /// Select the whole text widget and run the legacy copy command.
    fn fallback_copy(&self) -> Result<(), PlatformError>;
}

/// Which path put the text on the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyPath {
    Clipboard,
    Fallback,
}

/// Copy `text`, falling back to select-and-copy when the clipboard API fails.
pub async fn copy_source<C: ClipboardPlatform + ?Sized>(
    clipboard: &C,
    text: &str,
) -> Result<CopyPath, EditorError> {
    let primary = match clipboard.write_text(text).await {
        Ok(()) => return Ok(CopyPath::Clipboard),
        Err(e) => e,
    };
    tracing::warn!(%primary, "clipboard write rejected, trying fallback");

    match clipboard.fallback_copy() {
        Ok(()) => Ok(CopyPath::Fallback),
        Err(fallback) => Err(EditorError::Clipboard { primary, fallback }),
    }
}

/// Surface the outcome of `copy_source` on the status line and banner.
pub fn report_copy<H: EditorHost + ?Sized>(host: &mut H, outcome: &Result<CopyPath, EditorError>) {
    match outcome {
        Ok(path) => {
            tracing::debug!(?path, "source copied");
            host.set_status(Status::ok("Code copied"));
            host.notify("Code copied to clipboard!", NotificationKind::Success);
        }
        Err(err) => {
            tracing::error!(%err, "copy failed");
            host.set_status(Status::error("Copy failed"));
            host.notify(
                "Copy failed. Please select and copy the code manually.",
                NotificationKind::Error,
            );
        }
    }
}
