use std::any::Any;
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::sync::Arc;

/// A minimal 2D vector used for content positions, view sizes, and scroll deltas.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

/// A static tag selecting which view pool (and so which view factory) serves an item.
///
/// One pool per item kind: items of the same kind share recycled view instances,
/// items of different kinds never do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ItemKind(pub &'static str);

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A data item shown by the scroll view.
///
/// Items are opaque to the engine: it only reads `kind()` to resolve the view pool.
/// View implementations downcast the payload via `as_any()` when binding.
pub trait ItemData: Send + Sync {
    fn kind(&self) -> ItemKind;
    fn as_any(&self) -> &dyn Any;
}

/// A shared, immutable item record. Bound once per `initialize`, never mutated.
pub type ItemRecord = Arc<dyn ItemData>;

/// The contiguous index range `[trail, head]` of currently materialized items.
///
/// `trail <= head` always holds; [`crate::WindowTracker`] represents the empty
/// window as `Option::None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowState {
    pub trail: usize,
    pub head: usize,
}

impl WindowState {
    pub fn len(&self) -> usize {
        self.head - self.trail + 1
    }

    pub fn contains(&self, index: usize) -> bool {
        self.trail <= index && index <= self.head
    }
}

/// Errors surfaced to the caller.
///
/// Caller bugs (scrolling before `initialize`, out-of-range indexes, acquiring a
/// view for an unregistered kind) are contract violations and panic instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollError {
    /// No view factory was registered for an item kind present in the dataset.
    ///
    /// Reported by `initialize` while building the layout table, so a registration
    /// gap fails at startup rather than on first use.
    MissingViewFactory { kind: ItemKind },
}

impl fmt::Display for ScrollError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingViewFactory { kind } => {
                write!(f, "no view factory registered for item kind `{kind}`")
            }
        }
    }
}

impl std::error::Error for ScrollError {}
