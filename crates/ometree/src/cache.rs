// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Last-access cache for the path resolver
//!
//! One entry per slot (entity kind), holding the index path of the most
//! recent successful resolution and the node it produced. A lookup with any
//! other path misses and the resolver walks from the parent slot.
//!
//! Entries never go stale while the root is unchanged, since nodes are never
//! removed and lists only grow. Replacing the root clears everything.

use crate::node::NodeRef;
use crate::path::IndexPath;
use crate::schema::EntityKind;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub inserts: u64,
    pub invalidations: u64,
}

struct CacheEntry {
    path: IndexPath,
    node: NodeRef,
}

/// Single-entry memo per slot.
///
/// Interior mutability lets read-only getters refresh the cache; the store is
/// single-threaded (`NodeRef` is `!Send`), so `RefCell` suffices.
pub struct LastAccessCache {
    enabled: bool,
    entries: RefCell<HashMap<EntityKind, CacheEntry>>,
    stats: Cell<CacheStats>,
}

impl LastAccessCache {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            entries: RefCell::new(HashMap::new()),
            stats: Cell::new(CacheStats::default()),
        }
    }

    pub fn stats(&self) -> CacheStats {
        self.stats.get()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn record(&self, f: impl FnOnce(&mut CacheStats)) {
        let mut stats = self.stats.get();
        f(&mut stats);
        self.stats.set(stats);
    }

    /// Node last resolved for `kind`, if it was resolved at exactly `path`
    pub fn lookup(&self, kind: EntityKind, path: &IndexPath) -> Option<NodeRef> {
        if !self.enabled {
            return None;
        }
        let hit = self
            .entries
            .borrow()
            .get(&kind)
            .filter(|entry| entry.path == *path)
            .map(|entry| entry.node.clone());
        match hit {
            Some(node) => {
                self.record(|s| s.hits += 1);
                diagnostics::log_debug!(
                    "cache hit {kind} {path}",
                    kind: kind.name(),
                    path: path.to_string()
                );
                Some(node)
            }
            None => {
                self.record(|s| s.misses += 1);
                None
            }
        }
    }

    /// Overwrites the slot's entry
    pub fn store(&self, kind: EntityKind, path: IndexPath, node: NodeRef) {
        if !self.enabled {
            return;
        }
        _ = self
            .entries
            .borrow_mut()
            .insert(kind, CacheEntry { path, node });
        self.record(|s| s.inserts += 1);
    }

    /// Drops every entry
    pub fn clear(&self) {
        let dropped = {
            let mut entries = self.entries.borrow_mut();
            let n = entries.len();
            entries.clear();
            n
        };
        if dropped > 0 {
            self.record(|s| s.invalidations += dropped as u64);
            diagnostics::log_debug!("cache cleared, {dropped} entries dropped", dropped: dropped);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(indices: &[usize]) -> IndexPath {
        IndexPath::new(indices).unwrap()
    }

    #[test]
    fn test_single_entry_per_slot() {
        let cache = LastAccessCache::new(true);
        let a = NodeRef::new(EntityKind::Image);
        let b = NodeRef::new(EntityKind::Image);

        cache.store(EntityKind::Image, path(&[0]), a.clone());
        assert_eq!(cache.lookup(EntityKind::Image, &path(&[0])), Some(a));

        cache.store(EntityKind::Image, path(&[1]), b.clone());
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.lookup(EntityKind::Image, &path(&[0])), None);
        assert_eq!(cache.lookup(EntityKind::Image, &path(&[1])), Some(b));
    }

    #[test]
    fn test_slots_are_independent() {
        let cache = LastAccessCache::new(true);
        let image = NodeRef::new(EntityKind::Image);
        let pixels = NodeRef::new(EntityKind::Pixels);
        cache.store(EntityKind::Image, path(&[0]), image.clone());
        cache.store(EntityKind::Pixels, path(&[0, 0]), pixels.clone());
        assert_eq!(cache.lookup(EntityKind::Image, &path(&[0])), Some(image));
        assert_eq!(cache.lookup(EntityKind::Pixels, &path(&[0, 0])), Some(pixels));
    }

    #[test]
    fn test_stats() {
        let cache = LastAccessCache::new(true);
        let node = NodeRef::new(EntityKind::Group);
        assert_eq!(cache.lookup(EntityKind::Group, &path(&[0])), None);
        cache.store(EntityKind::Group, path(&[0]), node);
        _ = cache.lookup(EntityKind::Group, &path(&[0]));
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(
            cache.stats(),
            CacheStats {
                hits: 1,
                misses: 1,
                inserts: 1,
                invalidations: 1,
            }
        );
    }

    #[test]
    fn test_disabled_cache_never_hits() {
        let cache = LastAccessCache::new(false);
        cache.store(EntityKind::Group, path(&[0]), NodeRef::new(EntityKind::Group));
        assert_eq!(cache.lookup(EntityKind::Group, &path(&[0])), None);
        assert!(cache.is_empty());
        assert_eq!(cache.stats(), CacheStats::default());
    }
}
