use crate::*;

use std::any::Any;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use poolable_scroll::{
    ItemData, ItemKind, ItemRecord, ItemView, Orientation, PooledViewProvider, ScrollOptions, Vec2,
};

const ROW: ItemKind = ItemKind("row");

struct RowItem;

impl ItemData for RowItem {
    fn kind(&self) -> ItemKind {
        ROW
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

struct StubView;

impl ItemView for StubView {
    fn size(&self) -> Vec2 {
        Vec2::new(200.0, 100.0)
    }

    fn bind(&mut self, _item: &ItemRecord, _index: usize) {}

    fn set_visible(&mut self, _visible: bool) {}

    fn set_position(&mut self, _position: Vec2) {}
}

fn rows(count: usize) -> Vec<ItemRecord> {
    (0..count).map(|_| Arc::new(RowItem) as ItemRecord).collect()
}

/// A controller over `count` items of 100 each, viewport 300, already initialized.
fn controller(count: usize) -> ScrollController<PooledViewProvider> {
    let mut provider = PooledViewProvider::new();
    provider.register(ROW, || Box::new(StubView));
    let options = ScrollOptions::new(Orientation::Vertical, Vec2::new(200.0, 300.0));
    let mut controller = ScrollController::new(options, provider);
    controller.initialize(rows(count)).unwrap();
    controller
}

fn completion_counter() -> (Arc<AtomicUsize>, OnCompleteCallback) {
    let counter = Arc::new(AtomicUsize::new(0));
    let cb = {
        let counter = Arc::clone(&counter);
        Box::new(move || {
            counter.fetch_add(1, Ordering::Relaxed);
        })
    };
    (counter, cb)
}

#[test]
fn immediate_scroll_to_item_centers_target() {
    let mut c = controller(10);

    let position = c.scroll_to_item(5);
    assert_eq!(position, Vec2::new(0.0, 400.0));
    assert_eq!(c.tracker().find_closest_item_to_center(), Some(5));
    assert!(!c.is_animating());
}

#[test]
fn animated_scroll_reaches_target_and_completes_once() {
    let mut c = controller(10);
    let (completed, cb) = completion_counter();

    assert!(c.scroll_to_item_animated(5, 1.0, Easing::Linear, Some(cb)));
    assert!(c.is_animating());

    // Four quarter-second frames walk the offset 0 -> 400 linearly.
    assert_eq!(c.tick(0.25), Some(Vec2::new(0.0, 100.0)));
    assert_eq!(c.tick(0.25), Some(Vec2::new(0.0, 200.0)));
    assert_eq!(completed.load(Ordering::Relaxed), 0);
    assert_eq!(c.tick(0.25), Some(Vec2::new(0.0, 300.0)));
    assert_eq!(c.tick(0.25), Some(Vec2::new(0.0, 400.0)));

    assert!(!c.is_animating());
    assert_eq!(completed.load(Ordering::Relaxed), 1);
    assert_eq!(c.tracker().find_closest_item_to_center(), Some(5));

    // Once done the controller is idle again.
    assert_eq!(c.tick(0.25), None);
    assert_eq!(completed.load(Ordering::Relaxed), 1);
}

#[test]
fn overshooting_frame_lands_exactly_on_target() {
    let mut c = controller(10);

    assert!(c.scroll_to_item_animated(5, 0.1, Easing::SmoothStep, None));
    // One huge frame: the sample clamps to the target, never past it.
    assert_eq!(c.tick(5.0), Some(Vec2::new(0.0, 400.0)));
    assert!(!c.is_animating());
}

#[test]
fn second_animated_scroll_is_rejected_while_in_flight() {
    let mut c = controller(10);
    let (completed, cb) = completion_counter();

    assert!(c.scroll_to_item_animated(5, 1.0, Easing::Linear, None));
    assert!(!c.scroll_to_item_animated(8, 1.0, Easing::Linear, Some(cb)));

    // The first animation still runs to its own target.
    c.tick(1.0);
    assert_eq!(c.tracker().find_closest_item_to_center(), Some(5));
    assert_eq!(completed.load(Ordering::Relaxed), 0);
}

#[test]
fn user_scroll_cancels_animation_without_completing() {
    let mut c = controller(10);
    let (completed, cb) = completion_counter();

    assert!(c.scroll_to_item_animated(5, 1.0, Easing::Linear, Some(cb)));
    c.tick(0.25);

    c.on_scroll(Vec2::new(0.0, 120.0));
    assert!(!c.is_animating());
    assert_eq!(c.tick(0.25), None);
    assert_eq!(completed.load(Ordering::Relaxed), 0);
}

#[test]
fn immediate_jump_cancels_animation() {
    let mut c = controller(10);
    let (completed, cb) = completion_counter();

    assert!(c.scroll_to_item_animated(8, 1.0, Easing::Linear, Some(cb)));
    c.scroll_to_item(2);

    assert!(!c.is_animating());
    assert_eq!(c.tracker().find_closest_item_to_center(), Some(2));
    assert_eq!(completed.load(Ordering::Relaxed), 0);
}

#[test]
fn zero_duration_degrades_to_immediate_jump() {
    let mut c = controller(10);
    let (completed, cb) = completion_counter();

    assert!(c.scroll_to_item_animated(5, 0.0, Easing::Linear, Some(cb)));
    assert!(!c.is_animating());
    assert_eq!(completed.load(Ordering::Relaxed), 1);
    assert_eq!(c.tracker().find_closest_item_to_center(), Some(5));
}

#[test]
fn stop_suspends_events_and_cancels_without_completing() {
    let mut c = controller(10);
    let (completed, cb) = completion_counter();

    assert!(c.scroll_to_item_animated(5, 1.0, Easing::Linear, Some(cb)));
    c.stop();

    assert!(!c.is_running());
    assert!(!c.is_animating());
    assert_eq!(c.tick(1.0), None);
    assert_eq!(completed.load(Ordering::Relaxed), 0);

    // Scroll events are dropped while stopped.
    let window = c.tracker().window();
    c.on_scroll(Vec2::new(0.0, 500.0));
    assert_eq!(c.tracker().window(), window);

    c.start();
    c.on_scroll(Vec2::new(0.0, 250.0));
    assert_ne!(c.tracker().window(), window);
}

#[test]
fn next_previous_navigate_relative_to_center() {
    let mut c = controller(10);

    // Fresh state: viewport center 150 sits on item 1, so next targets item 2.
    assert_eq!(c.scroll_to_next(), Some(Vec2::new(0.0, 100.0)));
    assert_eq!(c.tracker().find_closest_item_to_center(), Some(2));

    assert_eq!(c.scroll_to_previous(), Some(Vec2::ZERO));

    // Previous from the very start clamps to item 0.
    assert_eq!(c.scroll_to_previous(), Some(Vec2::ZERO));
    assert!(c.tracker().is_scrolled_to_start());
}

#[test]
fn next_clamps_at_last_item() {
    let mut c = controller(10);

    for _ in 0..20 {
        c.scroll_to_next();
    }
    assert!(c.tracker().is_scrolled_to_end());
    // Centering the last item is clamped to max scroll.
    assert_eq!(c.tracker().content_position(), Vec2::new(0.0, 700.0));
}

#[test]
fn navigation_on_empty_dataset_is_none() {
    let mut c = controller(0);

    assert_eq!(c.scroll_to_next(), None);
    assert_eq!(c.scroll_to_previous(), None);
    assert!(!c.scroll_to_next_animated(1.0, Easing::Linear, None));
    assert!(!c.scroll_to_previous_animated(1.0, Easing::Linear, None));
}

#[test]
fn tween_samples_linearly_and_clamps() {
    let mut tween = Tween::new(0.0, 400.0, 1.0, Easing::Linear);
    assert_eq!(tween.sample(), 0.0);

    tween.advance(0.5);
    assert_eq!(tween.sample(), 200.0);
    assert!(!tween.is_done());

    tween.advance(2.0);
    assert!(tween.is_done());
    assert_eq!(tween.sample(), 400.0);
}

#[test]
fn easing_curves_hit_endpoints() {
    for easing in [Easing::Linear, Easing::SmoothStep, Easing::EaseInOutCubic] {
        assert_eq!(easing.sample(0.0), 0.0, "{easing:?} at 0");
        assert_eq!(easing.sample(1.0), 1.0, "{easing:?} at 1");
        assert!((easing.sample(0.5) - 0.5).abs() < 1e-6, "{easing:?} at 0.5");
    }
}
