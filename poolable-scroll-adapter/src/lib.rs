//! Adapter utilities for the `poolable-scroll` crate.
//!
//! The `poolable-scroll` crate is UI-agnostic and focuses on the windowing core.
//! This crate provides the small, framework-neutral layer adapters commonly need
//! on top of it:
//!
//! - A [`ScrollController`] wrapping the tracker with start/stop gating and
//!   next/previous navigation
//! - Tween-based smooth scroll-to-item, driven by the host's frame tick
//!
//! This crate is intentionally framework-agnostic (no concrete UI bindings).
#![forbid(unsafe_code)]

mod controller;
mod tween;

#[cfg(test)]
mod tests;

pub use controller::{OnCompleteCallback, ScrollController};
pub use tween::{Easing, Tween};
