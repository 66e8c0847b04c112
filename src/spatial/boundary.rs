//! Per-tick detection of entities that have left the map

use tracing::trace;

use crate::spatial::cell::Cell;
use crate::spatial::grid::GridExtent;

/// Whether `cell` lies outside the map
pub fn is_outside<G: GridExtent + ?Sized>(extent: &G, cell: Cell) -> bool {
    !extent.contains(cell)
}

/// Reports tracked entities whose cell is off the map
///
/// Level triggered: an entity is reported on every tick it spends outside,
/// not only on the tick it crosses the edge.
#[derive(Clone, Debug, Default)]
pub struct BoundaryWatcher {
    ticks: u64,
}

impl BoundaryWatcher {
    /// Create a watcher
    pub const fn new() -> Self {
        Self { ticks: 0 }
    }

    /// Number of ticks processed so far
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Keys of all `(key, cell)` entries whose cell is outside `extent`
    pub fn tick<G, K, I>(&mut self, extent: &G, entities: I) -> Vec<K>
    where
        G: GridExtent + ?Sized,
        I: IntoIterator<Item = (K, Cell)>,
    {
        self.ticks += 1;
        let outside: Vec<K> = entities
            .into_iter()
            .filter(|(_, cell)| is_outside(extent, *cell))
            .map(|(key, _)| key)
            .collect();
        if !outside.is_empty() {
            trace!(tick = self.ticks, count = outside.len(), "entities outside map");
        }
        outside
    }
}
