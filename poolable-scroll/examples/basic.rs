// Example: a headless vertical list driven by synthetic scroll events.
use std::any::Any;
use std::sync::Arc;

use poolable_scroll::{
    ItemData, ItemKind, ItemRecord, ItemView, Orientation, PooledViewProvider, ScrollOptions, Vec2,
    WindowTracker,
};

const ROW: ItemKind = ItemKind("row");

struct Row {
    label: String,
}

impl ItemData for Row {
    fn kind(&self) -> ItemKind {
        ROW
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

struct RowView {
    label: String,
}

impl ItemView for RowView {
    fn size(&self) -> Vec2 {
        Vec2::new(320.0, 64.0)
    }

    fn bind(&mut self, item: &ItemRecord, index: usize) {
        let row = item.as_any().downcast_ref::<Row>().unwrap();
        self.label = format!("#{index} {}", row.label);
    }

    fn set_visible(&mut self, _visible: bool) {}

    fn set_position(&mut self, position: Vec2) {
        println!("  place {:<12} at ({:.0}, {:.0})", self.label, position.x, position.y);
    }
}

fn main() {
    let mut provider = PooledViewProvider::new();
    provider.register(ROW, || {
        Box::new(RowView {
            label: String::new(),
        })
    });

    let options = ScrollOptions::new(Orientation::Vertical, Vec2::new(320.0, 480.0))
        .with_on_window_change(Some(|window| println!("window = {window:?}")));
    let mut tracker = WindowTracker::new(options, provider);

    let items: Vec<ItemRecord> = (0..1_000)
        .map(|i| {
            Arc::new(Row {
                label: format!("row {i}"),
            }) as ItemRecord
        })
        .collect();
    tracker.initialize(items).unwrap();
    println!("content_size = {:?}", tracker.content_size());

    // Drag down a little, then fling far past the fast-scroll threshold.
    for offset in [40.0, 120.0, 200.0] {
        tracker.handle_scroll(Vec2::new(0.0, offset));
    }
    println!("active views after drag: {}", tracker.active_len());

    tracker.handle_scroll(Vec2::new(0.0, 40_000.0));
    println!("active views after fling: {}", tracker.active_len());
    println!("closest to center: {:?}", tracker.find_closest_item_to_center());
}
