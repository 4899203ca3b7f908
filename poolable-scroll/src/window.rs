use std::collections::HashMap;

use crate::pool::{ItemView, ViewProvider};
use crate::{ItemRecord, LayoutTable, Orientation, ScrollError, ScrollOptions, Vec2, WindowState};
use crate::geometry;

/// A scroll delta larger than this many viewport extents abandons incremental
/// window adjustment in favor of full reinitialization.
pub const FAST_SCROLL_FACTOR: f32 = 2.0;

/// The windowing engine: tracks which item indexes are materialized as views and
/// adjusts the window as scroll-position events arrive.
///
/// This type is intentionally UI-agnostic:
/// - It does not render. Views are opaque [`ItemView`] objects supplied by the
///   injected [`ViewProvider`] and placed via trait callbacks.
/// - The host feeds it content-position events (`handle_scroll`) from its scroll
///   container, on its main thread; the tracker mutates synchronously inside the
///   callback and is not reentrant.
/// - The host sizes its content region from `content_size()` after `initialize`.
///
/// For smooth programmatic scrolling, see the `poolable-scroll-adapter` crate.
pub struct WindowTracker<P: ViewProvider> {
    options: ScrollOptions,
    provider: P,
    items: Vec<ItemRecord>,
    layout: LayoutTable,
    active: HashMap<usize, Box<dyn ItemView>>,
    window: Option<WindowState>,
    content_position: Vec2,
    previous_content_position: Option<Vec2>,
    initialized: bool,
}

impl<P: ViewProvider> WindowTracker<P> {
    pub fn new(options: ScrollOptions, provider: P) -> Self {
        sdebug!(
            orientation = ?options.orientation,
            "WindowTracker::new"
        );
        Self {
            options,
            provider,
            items: Vec::new(),
            layout: LayoutTable::default(),
            active: HashMap::new(),
            window: None,
            content_position: Vec2::ZERO,
            previous_content_position: None,
            initialized: false,
        }
    }

    pub fn options(&self) -> &ScrollOptions {
        &self.options
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    pub fn orientation(&self) -> Orientation {
        self.options.orientation
    }

    pub fn viewport(&self) -> Vec2 {
        self.options.viewport
    }

    /// Records a new viewport size. The window is re-evaluated against the live
    /// predicates on the next scroll event.
    pub fn set_viewport(&mut self, viewport: Vec2) {
        self.options.viewport = viewport;
    }

    fn viewport_extent(&self) -> f32 {
        self.orientation().main(self.options.viewport)
    }

    /// Binds a dataset: releases any live window, rebuilds the layout table from
    /// the provider's size hints, resets the scroll position, and populates the
    /// initial window from the start of the viewport.
    ///
    /// Must be called before any scroll event is processed. Re-calling fully
    /// resets the session for the new dataset.
    ///
    /// Fails with [`ScrollError::MissingViewFactory`] when an item's kind has no
    /// registered view; nothing is bound in that case.
    pub fn initialize(&mut self, items: Vec<ItemRecord>) -> Result<(), ScrollError> {
        let layout = LayoutTable::build(&items, &self.provider, self.orientation())?;
        self.release_all();
        sdebug!(
            count = items.len(),
            total_extent = layout.total_extent(),
            "initialize"
        );
        self.items = items;
        self.layout = layout;
        self.content_position = Vec2::ZERO;
        self.previous_content_position = Some(Vec2::ZERO);
        self.initialized = true;
        self.populate_initial(0.0);
        self.update_relative_positions();
        self.notify();
        Ok(())
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[ItemRecord] {
        &self.items
    }

    pub fn layout(&self) -> &LayoutTable {
        &self.layout
    }

    pub fn window(&self) -> Option<WindowState> {
        self.window
    }

    /// Number of live (materialized) views.
    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    pub fn is_materialized(&self, index: usize) -> bool {
        self.active.contains_key(&index)
    }

    pub fn content_position(&self) -> Vec2 {
        self.content_position
    }

    /// The current scroll position as a scalar along the axis (see
    /// [`Orientation::axis_offset`]).
    pub fn axis_offset(&self) -> f32 {
        self.orientation().axis_offset(self.content_position)
    }

    /// The size of the scrollable content region: total item extent on the scroll
    /// axis, viewport size on the cross axis.
    pub fn content_size(&self) -> Vec2 {
        let total = self.layout.total_extent();
        match self.orientation() {
            Orientation::Vertical => Vec2::new(self.options.viewport.x, total),
            Orientation::Horizontal => Vec2::new(total, self.options.viewport.y),
        }
    }

    pub fn is_scrolled_to_start(&self) -> bool {
        matches!(self.window, Some(w) if w.trail == 0)
    }

    pub fn is_scrolled_to_end(&self) -> bool {
        matches!(self.window, Some(w) if w.head + 1 == self.items.len())
    }

    /// Processes one scroll-position event from the host.
    ///
    /// This is the single mutation entry point: all materialization and release
    /// decisions happen synchronously here. Panics when called before
    /// [`Self::initialize`].
    pub fn handle_scroll(&mut self, content_position: Vec2) {
        assert!(
            self.initialized,
            "WindowTracker::handle_scroll called before initialize"
        );
        let previous = self.previous_content_position.unwrap_or(content_position);
        let delta = content_position - previous;
        self.previous_content_position = Some(content_position);
        self.content_position = content_position;

        if self.items.is_empty() {
            return;
        }

        let offset = self.axis_offset();
        if self.window.is_none() {
            // Only reachable after a jump landed outside the data extent; retry a
            // full rebuild at the new offset.
            self.reinitialize_at(offset);
        } else if self.is_fast_scroll(delta) {
            strace!(offset, "fast scroll");
            self.reinitialize_at(offset);
        } else if self.orientation().is_moving_forward(delta) {
            self.advance_forward(offset);
        } else {
            self.advance_backward(offset);
        }

        self.materialize_visible_gaps(offset);
        self.update_relative_positions();
        self.notify();
    }

    /// Jumps so that the item is centered in the viewport, with no animation.
    ///
    /// Returns the content position the host should apply to its scroll container.
    /// Panics on an out-of-range index.
    pub fn scroll_to_item(&mut self, index: usize) -> Vec2 {
        let position = self.content_position_for_item(index);
        self.handle_scroll(position);
        position
    }

    /// The content position that centers `index` in the viewport, clamped so the
    /// content never scrolls past its ends. Panics on an out-of-range index.
    pub fn content_position_for_item(&self, index: usize) -> Vec2 {
        assert!(
            index < self.items.len(),
            "item index out of range (index={index}, count={})",
            self.items.len()
        );
        let extent = self.viewport_extent();
        let target = self.layout.entry(index).position - extent * 0.5;
        let max_offset = (self.layout.total_extent() - extent).max(0.0);
        self.orientation()
            .content_position(target.clamp(0.0, max_offset))
    }

    /// The materialized item closest to the viewport center, or `None` when the
    /// window is empty. Used for scroll snapping and next/previous navigation.
    pub fn find_closest_item_to_center(&self) -> Option<usize> {
        let w = self.window?;
        let center = self.axis_offset() + self.viewport_extent() * 0.5;
        let mut closest = w.trail;
        let mut best = f32::INFINITY;
        for index in w.trail..=w.head {
            let distance = (self.layout.entry(index).position - center).abs();
            if distance < best {
                best = distance;
                closest = index;
            }
        }
        Some(closest)
    }

    fn is_fast_scroll(&self, delta: Vec2) -> bool {
        self.orientation().main(delta).abs() > FAST_SCROLL_FACTOR * self.viewport_extent()
    }

    /// Full rebuild: release everything, binary-search a visible seed index, then
    /// greedily extend both edges. A search miss (viewport outside the data
    /// extent) leaves the window empty; the next event retries.
    fn reinitialize_at(&mut self, offset: f32) {
        self.release_all();
        let extent = self.viewport_extent();
        let Some(seed) = self.layout.find_first_visible(offset, extent) else {
            swarn!(offset, "no item visible at offset");
            return;
        };
        sdebug!(seed, offset, "window rebuilt");
        self.window = Some(WindowState {
            trail: seed,
            head: seed,
        });
        self.materialize(seed);
        while self.try_extend_trail(offset) {}
        while self.try_extend_head(offset) {}
    }

    /// Initial population: the head walks forward from index 0 while items stay
    /// partially visible, materializing one extra look-ahead item at the edge.
    fn populate_initial(&mut self, offset: f32) {
        if self.items.is_empty() {
            self.window = None;
            return;
        }
        let extent = self.viewport_extent();
        let mut head = 0usize;
        loop {
            let entry = self.layout.entry(head);
            let visible = geometry::is_partially_visible(&entry, offset, extent);
            if visible || geometry::is_out_of_viewport_forward(&entry, offset, extent) {
                self.materialize(head);
            }
            if !visible || head + 1 == self.items.len() {
                break;
            }
            head += 1;
        }
        self.window = Some(WindowState { trail: 0, head });
    }

    fn advance_forward(&mut self, offset: f32) {
        if self.is_scrolled_to_end() {
            return;
        }
        while self.try_release_trail(offset) {}
        while self.try_extend_head(offset) {}
    }

    fn advance_backward(&mut self, offset: f32) {
        if self.is_scrolled_to_start() {
            return;
        }
        while self.try_release_head(offset) {}
        while self.try_extend_trail(offset) {}
    }

    /// Extends the head by one while the current head is not yet past the far
    /// viewport edge. The index always advances; the view is created only when the
    /// new entry is partially visible or just beyond the far edge (the one-item
    /// look-ahead buffer).
    fn try_extend_head(&mut self, offset: f32) -> bool {
        let extent = self.viewport_extent();
        let Some(w) = self.window else {
            return false;
        };
        if w.head + 1 >= self.items.len() {
            return false;
        }
        if geometry::is_out_of_viewport_forward(&self.layout.entry(w.head), offset, extent) {
            return false;
        }
        let head = w.head + 1;
        self.window = Some(WindowState { head, ..w });
        let entry = self.layout.entry(head);
        if geometry::is_partially_visible(&entry, offset, extent)
            || geometry::is_out_of_viewport_forward(&entry, offset, extent)
        {
            self.materialize(head);
        }
        true
    }

    /// Mirror of [`Self::try_extend_head`] for the trailing edge.
    fn try_extend_trail(&mut self, offset: f32) -> bool {
        let extent = self.viewport_extent();
        let Some(w) = self.window else {
            return false;
        };
        if w.trail == 0 {
            return false;
        }
        if geometry::is_out_of_viewport_backward(&self.layout.entry(w.trail), offset) {
            return false;
        }
        let trail = w.trail - 1;
        self.window = Some(WindowState { trail, ..w });
        let entry = self.layout.entry(trail);
        if geometry::is_partially_visible(&entry, offset, extent)
            || geometry::is_out_of_viewport_backward(&entry, offset)
        {
            self.materialize(trail);
        }
        true
    }

    fn try_release_trail(&mut self, offset: f32) -> bool {
        let Some(w) = self.window else {
            return false;
        };
        // The head entry is always kept so the window never collapses to empty.
        if w.trail >= w.head {
            return false;
        }
        if !geometry::is_out_of_viewport_backward(&self.layout.entry(w.trail), offset) {
            return false;
        }
        self.release(w.trail);
        self.window = Some(WindowState {
            trail: w.trail + 1,
            ..w
        });
        true
    }

    fn try_release_head(&mut self, offset: f32) -> bool {
        let extent = self.viewport_extent();
        let Some(w) = self.window else {
            return false;
        };
        if w.head <= w.trail {
            return false;
        }
        if !geometry::is_out_of_viewport_forward(&self.layout.entry(w.head), offset, extent) {
            return false;
        }
        self.release(w.head);
        self.window = Some(WindowState {
            head: w.head - 1,
            ..w
        });
        true
    }

    /// Invariant: every partially visible index inside `[trail, head]` holds a
    /// view. The edge loops alone cannot guarantee this: a release loop stops at
    /// the opposite edge's guard, and a later extension can then walk past an
    /// index while it is momentarily out of the viewport, stranding a gap that
    /// scrolls back into view. Swept after every event.
    fn materialize_visible_gaps(&mut self, offset: f32) {
        let Some(w) = self.window else {
            return;
        };
        let extent = self.viewport_extent();
        for index in w.trail..=w.head {
            if !self.active.contains_key(&index)
                && geometry::is_partially_visible(&self.layout.entry(index), offset, extent)
            {
                self.materialize(index);
            }
        }
    }

    fn materialize(&mut self, index: usize) {
        let position = self.item_position_in_content(index);
        let item = &self.items[index];
        let mut view = self.provider.acquire(item);
        view.bind(item, index);
        view.set_position(position);
        strace!(index, "materialize");
        let replaced = self.active.insert(index, view);
        debug_assert!(replaced.is_none(), "duplicate materialization (index={index})");
        if let Some(stale) = replaced {
            self.provider.release(&self.items[index], stale);
        }
    }

    fn release(&mut self, index: usize) {
        if let Some(view) = self.active.remove(&index) {
            strace!(index, "release");
            self.provider.release(&self.items[index], view);
        }
    }

    fn release_all(&mut self) {
        for (index, view) in self.active.drain() {
            self.provider.release(&self.items[index], view);
        }
        self.window = None;
    }

    fn item_position_in_content(&self, index: usize) -> Vec2 {
        let entry = self.layout.entry(index);
        self.orientation()
            .item_anchor(entry.position, self.layout.total_extent())
    }

    /// Emits the relative-position side channel for every live view:
    /// `1 - |item center - viewport center| / (extent/2)`, clamped to `0..=1`.
    fn update_relative_positions(&mut self) {
        let extent = self.viewport_extent();
        let center = self.axis_offset() + extent * 0.5;
        let half = (extent * 0.5).max(f32::EPSILON);
        for (&index, view) in self.active.iter_mut() {
            let distance = (self.layout.entry(index).position - center).abs();
            view.set_relative_position((1.0 - distance / half).clamp(0.0, 1.0));
        }
    }

    fn notify(&self) {
        if let Some(cb) = &self.options.on_window_change {
            cb(self.window);
        }
    }
}

impl<P: ViewProvider> core::fmt::Debug for WindowTracker<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WindowTracker")
            .field("options", &self.options)
            .field("item_count", &self.items.len())
            .field("window", &self.window)
            .field("active_len", &self.active.len())
            .finish_non_exhaustive()
    }
}
