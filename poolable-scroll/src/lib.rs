//! A headless poolable scroll-view engine.
//!
//! Instead of instantiating one UI element per data item, a small pool of view
//! instances is recycled and repositioned as the user scrolls, so memory and layout
//! cost stay proportional to visible items rather than total item count.
//!
//! This crate focuses on the windowing core: the bidirectional index-window tracker
//! that decides which item indexes are materialized, when the window edges grow and
//! shrink, and how large jumps (flings, programmatic scrolls) trigger a
//! binary-search rebuild. Vertical and horizontal lists share one algorithm via an
//! [`Orientation`] strategy.
//!
//! It is UI-agnostic. A host UI layer is expected to provide:
//! - scroll-position change events (fed to [`WindowTracker::handle_scroll`])
//! - the viewport size
//! - per-item-kind view factories (via [`PooledViewProvider`] or a custom
//!   [`ViewProvider`])
//!
//! For smooth scroll-to-item and next/previous navigation, see the
//! `poolable-scroll-adapter` crate.
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod axis;
mod geometry;
mod layout;
mod options;
mod pool;
mod types;
mod window;


pub use axis::Orientation;
pub use geometry::{
    find_first_visible, is_out_of_viewport_backward, is_out_of_viewport_forward,
    is_partially_visible,
};
pub use layout::{LayoutEntry, LayoutTable};
pub use options::{OnWindowChangeCallback, ScrollOptions};
pub use pool::{ItemView, PooledViewProvider, ViewFactory, ViewPool, ViewProvider};
pub use types::{ItemData, ItemKind, ItemRecord, ScrollError, Vec2, WindowState};
pub use window::{FAST_SCROLL_FACTOR, WindowTracker};
