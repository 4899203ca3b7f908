use std::collections::HashMap;
use std::sync::Arc;

use crate::{ItemKind, ItemRecord, ScrollError, Vec2};

/// A recyclable view instance, implemented by the host UI layer.
///
/// The engine never renders; it drives these callbacks as items enter and leave the
/// window. `size` must be answerable before the view is ever shown (it is read from
/// the pool's template instance while building the layout table).
pub trait ItemView {
    /// The view's footprint. Items of one kind share a single footprint.
    fn size(&self) -> Vec2;

    /// Binds the view to an item when it enters the window.
    fn bind(&mut self, item: &ItemRecord, index: usize);

    /// Shown on acquire, hidden on release.
    fn set_visible(&mut self, visible: bool);

    /// Places the view in content-local coordinates.
    fn set_position(&mut self, position: Vec2);

    /// Distance from the viewport center, normalized to `0..=1` (1 = centered).
    ///
    /// A presentation side channel (scale/fade effects); default is a no-op.
    fn set_relative_position(&mut self, _t: f32) {}
}

/// The view-supply capability injected into [`crate::WindowTracker`].
///
/// `peek` must not materialize a view, only report its footprint; it is the startup
/// validation path and returns an error for unregistered kinds. `acquire`/`release`
/// run post-validation and panic on unregistered kinds (an integration bug).
pub trait ViewProvider {
    fn peek(&self, item: &ItemRecord) -> Result<Vec2, ScrollError>;
    fn acquire(&mut self, item: &ItemRecord) -> Box<dyn ItemView>;
    fn release(&mut self, item: &ItemRecord, view: Box<dyn ItemView>);
}

/// Creates view instances on pool miss.
pub type ViewFactory = Arc<dyn Fn() -> Box<dyn ItemView> + Send + Sync>;

/// A pool of recyclable views for one item kind.
///
/// `release` hides the instance and stacks it; `acquire` pops a free instance (or
/// creates one) and shows it. Instances are recycled, never destroyed.
pub struct ViewPool {
    factory: ViewFactory,
    template: Box<dyn ItemView>,
    free: Vec<Box<dyn ItemView>>,
}

impl ViewPool {
    pub fn new(factory: impl Fn() -> Box<dyn ItemView> + Send + Sync + 'static) -> Self {
        let factory: ViewFactory = Arc::new(factory);
        let template = factory();
        Self {
            factory,
            template,
            free: Vec::new(),
        }
    }

    /// The footprint of this kind's views, read from the template instance.
    pub fn peek_size(&self) -> Vec2 {
        self.template.size()
    }

    pub fn acquire(&mut self) -> Box<dyn ItemView> {
        let mut view = self.free.pop().unwrap_or_else(|| (self.factory)());
        view.set_visible(true);
        view
    }

    pub fn release(&mut self, mut view: Box<dyn ItemView>) {
        view.set_visible(false);
        self.free.push(view);
    }

    /// Number of idle instances currently held.
    pub fn idle_len(&self) -> usize {
        self.free.len()
    }
}

impl core::fmt::Debug for ViewPool {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ViewPool")
            .field("idle_len", &self.free.len())
            .finish_non_exhaustive()
    }
}

/// The default [`ViewProvider`]: one [`ViewPool`] per registered item kind.
#[derive(Default)]
pub struct PooledViewProvider {
    pools: HashMap<ItemKind, ViewPool>,
}

impl PooledViewProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the view factory for `kind`, instantiating one template view for
    /// `peek`. Re-registering a kind replaces its pool.
    pub fn register(
        &mut self,
        kind: ItemKind,
        factory: impl Fn() -> Box<dyn ItemView> + Send + Sync + 'static,
    ) {
        sdebug!(kind = kind.0, "register view factory");
        self.pools.insert(kind, ViewPool::new(factory));
    }

    pub fn is_registered(&self, kind: ItemKind) -> bool {
        self.pools.contains_key(&kind)
    }

    pub fn pool(&self, kind: ItemKind) -> Option<&ViewPool> {
        self.pools.get(&kind)
    }

    fn pool_mut(&mut self, kind: ItemKind) -> &mut ViewPool {
        match self.pools.get_mut(&kind) {
            Some(pool) => pool,
            None => panic!("no view factory registered for item kind `{kind}`"),
        }
    }
}

impl ViewProvider for PooledViewProvider {
    fn peek(&self, item: &ItemRecord) -> Result<Vec2, ScrollError> {
        let kind = item.kind();
        self.pools
            .get(&kind)
            .map(ViewPool::peek_size)
            .ok_or(ScrollError::MissingViewFactory { kind })
    }

    fn acquire(&mut self, item: &ItemRecord) -> Box<dyn ItemView> {
        self.pool_mut(item.kind()).acquire()
    }

    fn release(&mut self, item: &ItemRecord, view: Box<dyn ItemView>) {
        self.pool_mut(item.kind()).release(view);
    }
}

impl core::fmt::Debug for PooledViewProvider {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PooledViewProvider")
            .field("kinds", &self.pools.len())
            .finish_non_exhaustive()
    }
}
