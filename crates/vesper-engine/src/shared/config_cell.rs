use std::sync::Arc;

use parking_lot::RwLock;
use vesper_pattern::PatternConfig;

/// Single-slot holder of the newest configuration.
///
/// Writers swap in whole records; readers get an `Arc` to whichever record
/// was current when they asked. Intermediate writes between two reads are
/// never observed.
#[derive(Clone, Default)]
pub struct ConfigCell {
    slot: Arc<RwLock<Arc<PatternConfig>>>,
}

impl ConfigCell {
    pub fn new(config: PatternConfig) -> Self {
        Self {
            slot: Arc::new(RwLock::new(Arc::new(config))),
        }
    }

    /// The current record.
    pub fn load(&self) -> Arc<PatternConfig> {
        Arc::clone(&self.slot.read())
    }

    /// Replaces the record.
    pub fn store(&self, config: PatternConfig) {
        *self.slot.write() = Arc::new(config);
    }

    /// Read-modify-write under the write lock, so concurrent writers do not
    /// lose each other's changes. Returns the stored record.
    pub fn update<F>(&self, f: F) -> Arc<PatternConfig>
    where
        F: FnOnce(&PatternConfig) -> PatternConfig,
    {
        let mut slot = self.slot.write();
        let next = Arc::new(f(&slot));
        *slot = Arc::clone(&next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use vesper_pattern::{PartialConfig, ShapeId, StyleId};

    #[test]
    fn readers_keep_their_snapshot() {
        let cell = ConfigCell::default();
        let before = cell.load();
        cell.store(PatternConfig { shape: ShapeId::Cube, ..PatternConfig::default() });

        assert_eq!(before.shape, ShapeId::Sphere);
        assert_eq!(cell.load().shape, ShapeId::Cube);
    }

    #[test]
    fn last_write_wins() {
        let cell = ConfigCell::default();
        for density in [20, 40, 60] {
            cell.store(PatternConfig { density, ..PatternConfig::default() });
        }
        assert_eq!(cell.load().density, 60);
    }

    #[test]
    fn update_merges_partials() {
        let cell = ConfigCell::default();
        let partial = PartialConfig { style: Some(StyleId::Lava), ..PartialConfig::EMPTY };
        let stored = cell.update(|cur| partial.apply_to(cur));
        assert_eq!(stored.style, Some(StyleId::Lava));
        assert_eq!(*cell.load(), *stored);
    }

    #[test]
    fn concurrent_updates_are_not_lost() {
        let cell = ConfigCell::new(PatternConfig { density: 0, ..PatternConfig::default() });
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let cell = cell.clone();
                thread::spawn(move || {
                    for _ in 0..100 {
                        cell.update(|c| PatternConfig { density: c.density + 1, ..c.clone() });
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(cell.load().density, 400);
    }
}
