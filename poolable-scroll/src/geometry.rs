//! Pure viewport predicates over layout entries.
//!
//! All comparisons are closed at the boundary: an item whose near edge touches the
//! viewport's far edge exactly counts as *out*. The edge item therefore acts as the
//! one-item look-ahead buffer rather than as a visible item, which keeps the window
//! edges stable while the boundary item slides in.

use crate::LayoutEntry;

/// True if the item's near edge is past the viewport's far edge in the forward
/// scroll direction.
pub fn is_out_of_viewport_forward(entry: &LayoutEntry, offset: f32, extent: f32) -> bool {
    entry.min >= offset + extent
}

/// True if the item's far edge is past the viewport's near edge in the backward
/// scroll direction.
pub fn is_out_of_viewport_backward(entry: &LayoutEntry, offset: f32) -> bool {
    entry.max <= offset
}

/// True if the item's bounding interval intersects the viewport interval.
pub fn is_partially_visible(entry: &LayoutEntry, offset: f32, extent: f32) -> bool {
    !is_out_of_viewport_forward(entry, offset, extent)
        && !is_out_of_viewport_backward(entry, offset)
}

/// Binary search for any item visible in the viewport, over a table of
/// monotonically non-decreasing entries.
///
/// Returns `None` when the viewport falls in a gap outside all items (e.g. scrolled
/// past the end). Callers must treat `None` as "no visible item", never as index 0.
pub fn find_first_visible(entries: &[LayoutEntry], offset: f32, extent: f32) -> Option<usize> {
    let mut lo = 0usize;
    let mut hi = entries.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let entry = &entries[mid];
        if is_partially_visible(entry, offset, extent) {
            return Some(mid);
        }
        if is_out_of_viewport_forward(entry, offset, extent) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    None
}
