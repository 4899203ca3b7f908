use crate::Vec2;

/// Scroll-axis strategy: maps 2D content geometry onto a single scalar axis.
///
/// Every windowing decision is made on the **axis offset**: a scalar `>= 0` that
/// increases in the forward scroll direction, regardless of orientation. Content
/// moves opposite to the drag, so:
///
/// - vertical lists: `offset = content_position.y` (content rises as you scroll down)
/// - horizontal lists: `offset = -content_position.x` (content shifts left as you
///   scroll right)
///
/// Holding this one convention everywhere lets vertical and horizontal lists share
/// a single window tracker instead of two near-duplicate implementations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Vertical,
    Horizontal,
}

impl Orientation {
    /// The component of `v` along the scroll axis (e.g. height for vertical lists).
    pub fn main(self, v: Vec2) -> f32 {
        match self {
            Self::Vertical => v.y,
            Self::Horizontal => v.x,
        }
    }

    /// The axis offset encoded by a content anchored position.
    pub fn axis_offset(self, content_position: Vec2) -> f32 {
        match self {
            Self::Vertical => content_position.y,
            Self::Horizontal => -content_position.x,
        }
    }

    /// The content anchored position encoding an axis offset (inverse of
    /// [`Self::axis_offset`]; the cross component is zero).
    pub fn content_position(self, axis_offset: f32) -> Vec2 {
        match self {
            Self::Vertical => Vec2::new(0.0, axis_offset),
            Self::Horizontal => Vec2::new(-axis_offset, 0.0),
        }
    }

    /// Whether a content position delta represents forward scrolling.
    pub fn is_moving_forward(self, delta: Vec2) -> bool {
        match self {
            Self::Vertical => delta.y > 0.0,
            Self::Horizontal => delta.x < 0.0,
        }
    }

    /// Where an item centered at `position` on the axis sits in content-local
    /// coordinates, for a content region of `content_extent` on the axis.
    ///
    /// Content-local coordinates originate at the content center, with the first
    /// item at the top (vertical) or left (horizontal) edge.
    pub fn item_anchor(self, position: f32, content_extent: f32) -> Vec2 {
        match self {
            Self::Vertical => Vec2::new(0.0, content_extent * 0.5 - position),
            Self::Horizontal => Vec2::new(-content_extent * 0.5 + position, 0.0),
        }
    }
}
