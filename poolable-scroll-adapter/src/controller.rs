use poolable_scroll::{
    ItemRecord, ScrollError, ScrollOptions, Vec2, ViewProvider, WindowTracker,
};

use crate::{Easing, Tween};

/// Fired once when an animated scroll reaches its target. Cancelled animations
/// (user scroll, an immediate jump, `stop`) never fire it.
pub type OnCompleteCallback = Box<dyn FnOnce() + Send>;

struct Animation {
    tween: Tween,
    on_complete: Option<OnCompleteCallback>,
}

/// A framework-neutral controller that wraps a [`WindowTracker`] and adds the
/// common adapter workflows: immediate and tween-driven scroll-to-item, and
/// next/previous navigation relative to the viewport center.
///
/// This type holds no UI objects. A host adapter drives it by calling:
/// - `on_scroll(position)` when its scroll container reports movement
/// - `tick(dt)` each frame; the returned content position (if any) is applied
///   back to the real scroll container
///
/// One animation runs at a time: starting a second animated scroll while one is
/// in flight is a no-op returning `false`. User scrolls and immediate jumps win
/// over an active animation and cancel it.
pub struct ScrollController<P: ViewProvider> {
    tracker: WindowTracker<P>,
    animation: Option<Animation>,
    running: bool,
}

impl<P: ViewProvider> ScrollController<P> {
    pub fn new(options: ScrollOptions, provider: P) -> Self {
        Self::from_tracker(WindowTracker::new(options, provider))
    }

    pub fn from_tracker(tracker: WindowTracker<P>) -> Self {
        Self {
            tracker,
            animation: None,
            running: true,
        }
    }

    pub fn tracker(&self) -> &WindowTracker<P> {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut WindowTracker<P> {
        &mut self.tracker
    }

    pub fn into_tracker(self) -> WindowTracker<P> {
        self.tracker
    }

    /// See [`WindowTracker::initialize`]. Cancels any active animation.
    pub fn initialize(&mut self, items: Vec<ItemRecord>) -> Result<(), ScrollError> {
        self.cancel_animation();
        self.tracker.initialize(items)
    }

    /// Resumes event processing after [`Self::stop`]. Controllers start running.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Suspends the controller: scroll events and ticks become inert until
    /// [`Self::start`]. An active animation is cancelled without completing.
    pub fn stop(&mut self) {
        self.running = false;
        self.cancel_animation();
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.animation = None;
    }

    /// Call when the host's scroll container reports a position change (user
    /// wheel/drag). Cancels any active animation: the user wins.
    pub fn on_scroll(&mut self, content_position: Vec2) {
        if !self.running {
            return;
        }
        self.cancel_animation();
        self.tracker.handle_scroll(content_position);
    }

    /// Jumps so the item is centered, with no animation. Cancels any active
    /// animation. Returns the content position to apply to the scroll container.
    /// Panics on an out-of-range index.
    pub fn scroll_to_item(&mut self, index: usize) -> Vec2 {
        self.cancel_animation();
        self.tracker.scroll_to_item(index)
    }

    /// Starts an animated scroll centering the item over `duration` seconds.
    ///
    /// Returns `false` (and does nothing) when another animated scroll is in
    /// flight. A non-positive duration degrades to an immediate jump; either way
    /// `on_complete` fires on completion. Panics on an out-of-range index.
    pub fn scroll_to_item_animated(
        &mut self,
        index: usize,
        duration: f32,
        easing: Easing,
        on_complete: Option<OnCompleteCallback>,
    ) -> bool {
        if self.animation.is_some() {
            return false;
        }
        let target = self.tracker.content_position_for_item(index);
        if duration <= 0.0 {
            self.tracker.handle_scroll(target);
            if let Some(cb) = on_complete {
                cb();
            }
            return true;
        }
        let orientation = self.tracker.orientation();
        let tween = Tween::new(
            self.tracker.axis_offset(),
            orientation.axis_offset(target),
            duration,
            easing,
        );
        self.animation = Some(Animation { tween, on_complete });
        true
    }

    /// Jumps to the item after the one closest to the viewport center, clamped to
    /// the last item. Returns the applied content position, or `None` when the
    /// window is empty.
    pub fn scroll_to_next(&mut self) -> Option<Vec2> {
        let index = self.next_index()?;
        Some(self.scroll_to_item(index))
    }

    /// Mirror of [`Self::scroll_to_next`] toward the start.
    pub fn scroll_to_previous(&mut self) -> Option<Vec2> {
        let index = self.previous_index()?;
        Some(self.scroll_to_item(index))
    }

    /// Animated variant of [`Self::scroll_to_next`]. Returns `false` when an
    /// animation is in flight or the window is empty.
    pub fn scroll_to_next_animated(
        &mut self,
        duration: f32,
        easing: Easing,
        on_complete: Option<OnCompleteCallback>,
    ) -> bool {
        match self.next_index() {
            Some(index) => self.scroll_to_item_animated(index, duration, easing, on_complete),
            None => false,
        }
    }

    /// Animated variant of [`Self::scroll_to_previous`].
    pub fn scroll_to_previous_animated(
        &mut self,
        duration: f32,
        easing: Easing,
        on_complete: Option<OnCompleteCallback>,
    ) -> bool {
        match self.previous_index() {
            Some(index) => self.scroll_to_item_animated(index, duration, easing, on_complete),
            None => false,
        }
    }

    /// Advances the controller by one frame.
    ///
    /// With an animation active, samples the tween, feeds the tracker, and
    /// returns the content position the host should apply to its scroll
    /// container. On natural completion, `on_complete` fires exactly once.
    /// Returns `None` when idle or stopped.
    pub fn tick(&mut self, dt: f32) -> Option<Vec2> {
        if !self.running {
            return None;
        }
        let animation = self.animation.as_mut()?;
        animation.tween.advance(dt);
        let position = self
            .tracker
            .orientation()
            .content_position(animation.tween.sample());
        let done = animation.tween.is_done();
        let on_complete = if done {
            self.animation.take().and_then(|a| a.on_complete)
        } else {
            None
        };

        self.tracker.handle_scroll(position);
        if let Some(cb) = on_complete {
            cb();
        }
        Some(position)
    }

    fn next_index(&self) -> Option<usize> {
        let closest = self.tracker.find_closest_item_to_center()?;
        Some((closest + 1).min(self.tracker.item_count().saturating_sub(1)))
    }

    fn previous_index(&self) -> Option<usize> {
        let closest = self.tracker.find_closest_item_to_center()?;
        Some(closest.saturating_sub(1))
    }
}

impl<P: ViewProvider> core::fmt::Debug for ScrollController<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrollController")
            .field("tracker", &self.tracker)
            .field("running", &self.running)
            .field("is_animating", &self.animation.is_some())
            .finish()
    }
}
