use std::sync::Arc;

use crate::{Orientation, Vec2, WindowState};

/// A callback fired after every window update.
///
/// The argument is the new window state (`None` = no items materialized).
pub type OnWindowChangeCallback = Arc<dyn Fn(Option<WindowState>) + Send + Sync>;

/// Configuration for [`crate::WindowTracker`].
#[derive(Clone)]
pub struct ScrollOptions {
    pub orientation: Orientation,

    /// The viewport size. Only the component on the scroll axis drives windowing;
    /// the cross component sizes the content region.
    pub viewport: Vec2,

    /// Optional callback fired when the window changes (or is re-emitted after a
    /// scroll event).
    pub on_window_change: Option<OnWindowChangeCallback>,
}

impl ScrollOptions {
    pub fn new(orientation: Orientation, viewport: Vec2) -> Self {
        Self {
            orientation,
            viewport,
            on_window_change: None,
        }
    }

    pub fn with_viewport(mut self, viewport: Vec2) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn with_on_window_change(
        mut self,
        on_window_change: Option<impl Fn(Option<WindowState>) + Send + Sync + 'static>,
    ) -> Self {
        self.on_window_change = on_window_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for ScrollOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrollOptions")
            .field("orientation", &self.orientation)
            .field("viewport", &self.viewport)
            .finish_non_exhaustive()
    }
}
