use crate::pool::ViewProvider;
use crate::{ItemRecord, Orientation, ScrollError, geometry};

/// Precomputed bounds for one item along the scroll axis.
///
/// `position` is the item center; `min`/`max` are `position ± size/2`. Entries are
/// index-parallel with the item sequence and monotonically non-decreasing, which is
/// what makes [`LayoutTable::find_first_visible`] a binary search.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutEntry {
    pub position: f32,
    pub min: f32,
    pub max: f32,
}

impl LayoutEntry {
    pub fn size(&self) -> f32 {
        self.max - self.min
    }
}

/// Per-item positions along the scroll axis, built once per dataset.
#[derive(Clone, Debug, Default)]
pub struct LayoutTable {
    entries: Vec<LayoutEntry>,
    total_extent: f32,
}

impl LayoutTable {
    /// Walks the items in order, accumulating a running offset from the provider's
    /// `peek` size hints (no view is materialized). Each item is centered at
    /// `offset + size/2`.
    ///
    /// Fails with [`ScrollError::MissingViewFactory`] when any item's kind has no
    /// registered view, so registration gaps surface at startup.
    pub fn build<P: ViewProvider>(
        items: &[ItemRecord],
        provider: &P,
        orientation: Orientation,
    ) -> Result<Self, ScrollError> {
        let mut entries = Vec::with_capacity(items.len());
        let mut offset = 0.0f32;
        for item in items {
            let size = orientation.main(provider.peek(item)?);
            entries.push(LayoutEntry {
                position: offset + size * 0.5,
                min: offset,
                max: offset + size,
            });
            offset += size;
        }
        Ok(Self {
            entries,
            total_extent: offset,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry for `index`. Panics when out of range: indexing past the dataset
    /// is a caller bug, never a recoverable condition.
    pub fn entry(&self, index: usize) -> LayoutEntry {
        self.entries[index]
    }

    pub fn get(&self, index: usize) -> Option<&LayoutEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[LayoutEntry] {
        &self.entries
    }

    /// The sum of all item sizes along the scroll axis; sizes the scrollable
    /// content region.
    pub fn total_extent(&self) -> f32 {
        self.total_extent
    }

    /// See [`geometry::find_first_visible`].
    pub fn find_first_visible(&self, offset: f32, extent: f32) -> Option<usize> {
        geometry::find_first_visible(&self.entries, offset, extent)
    }
}
