//! Preview resource lifecycle.
//!
//! Every render builds a fresh resource from the source, points the surface
//! at it and schedules that same resource's release. Releases are never
//! cancelled and never look at "the current" resource, so a late release can
//! only free what it was handed.

use std::time::Duration;

use crate::error::{EditorError, PlatformError};
use crate::types::Status;

/// Platform rendering surface (an iframe fed by blob URLs in the browser).
pub trait PreviewSurface {
    /// Handle to one rendering of the source.
    type Resource;

    /// Build a resource holding `source`.
    fn create(&mut self, source: &str) -> Result<Self::Resource, PlatformError>;

    /// Point the surface at `resource`, superseding whatever it showed.
    fn show(&mut self, resource: &Self::Resource);

    /// Free `resource` once `delay` has elapsed. Must be safe if the surface
    /// has already moved on.
    fn release_after(&mut self, resource: Self::Resource, delay: Duration);
}

pub struct PreviewRenderer<S> {
    surface: S,
    release_delay: Duration,
    renders: u64,
}

impl<S: PreviewSurface> PreviewRenderer<S> {
    pub fn new(surface: S, release_delay: Duration) -> Self {
        Self {
            surface,
            release_delay,
            renders: 0,
        }
    }

    /// Render `source`. Construction failures come back as
    /// `EditorError::RenderConstruction` and leave the surface unchanged.
    pub fn render(&mut self, source: &str) -> Result<(), EditorError> {
        let resource = self
            .surface
            .create(source)
            .map_err(EditorError::RenderConstruction)?;
        self.surface.show(&resource);
        self.surface.release_after(resource, self.release_delay);
        self.renders += 1;
        Ok(())
    }

    /// Render and turn the outcome into the status line text.
    pub fn render_status(&mut self, source: &str) -> Status {
        match self.render(source) {
            Ok(()) => Status::ok("Preview updated"),
            Err(err) => {
                tracing::error!(%err, "preview update failed");
                Status::error("Preview error")
            }
        }
    }

    /// Successful renders so far.
    pub fn renders(&self) -> u64 {
        self.renders
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
