use std::any::Any;
use std::sync::Arc;

use poolable_scroll::{
    ItemData, ItemKind, ItemRecord, ItemView, Orientation, PooledViewProvider, ScrollOptions, Vec2,
};
use poolable_scroll_adapter::{Easing, ScrollController};

const CARD: ItemKind = ItemKind("card");

struct Card;

impl ItemData for Card {
    fn kind(&self) -> ItemKind {
        CARD
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

struct CardView;

impl ItemView for CardView {
    fn size(&self) -> Vec2 {
        Vec2::new(320.0, 96.0)
    }

    fn bind(&mut self, _item: &ItemRecord, _index: usize) {}

    fn set_visible(&mut self, _visible: bool) {}

    fn set_position(&mut self, _position: Vec2) {}
}

fn main() {
    // Example: a controller driving a tween scroll without holding any UI objects.
    //
    // An adapter would:
    // - start an animated scroll (e.g. in response to a "jump to card" command)
    // - call tick(dt) from its frame loop
    // - apply the returned content position to the real scroll container
    let mut provider = PooledViewProvider::new();
    provider.register(CARD, || Box::new(CardView));

    let options = ScrollOptions::new(Orientation::Vertical, Vec2::new(320.0, 480.0));
    let mut c = ScrollController::new(options, provider);
    c.initialize((0..500).map(|_| Arc::new(Card) as ItemRecord).collect())
        .unwrap();

    let started = c.scroll_to_item_animated(
        250,
        0.4,
        Easing::SmoothStep,
        Some(Box::new(|| println!("arrived"))),
    );
    println!("animation started: {started}");

    let mut frame = 0u32;
    while let Some(position) = c.tick(1.0 / 60.0) {
        frame += 1;
        if frame % 6 == 0 {
            println!(
                "frame={frame} offset={:.1} window={:?}",
                position.y,
                c.tracker().window()
            );
        }
    }

    println!(
        "done: closest={:?} active={}",
        c.tracker().find_closest_item_to_center(),
        c.tracker().active_len()
    );
}
