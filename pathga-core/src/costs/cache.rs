#[cfg(test)]
#[path = "../../tests/unit/costs/cache_test.rs"]
mod cache_test;

use super::Cost;
use rustc_hash::FxHashMap;
use std::sync::{Arc, Mutex, RwLock};

type CostKey = (String, String);
type CostSlot = Arc<Mutex<Option<Cost>>>;

/// A thread safe memory of observed travel costs keyed by ordered pair of location ids.
///
/// The cache only grows: entries are never evicted. It can be shared between runs as long as the
/// same travel cost service backs it; call [`CostCache::clear`] when the service or its data changes.
///
/// Each key owns a slot guarded by its own lock, so concurrent first lookups of the same pair wait
/// for a single computation instead of issuing duplicate requests. A failed computation leaves the
/// slot empty.
#[derive(Default)]
pub struct CostCache {
    slots: RwLock<FxHashMap<CostKey, CostSlot>>,
}

impl CostCache {
    /// Returns a cached cost for given ordered pair.
    pub fn get(&self, from: &str, to: &str) -> Option<Cost> {
        let slot = self.find_slot(from, to)?;
        let value = *slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        value
    }

    /// Returns a cached cost or computes it using given function and stores the result.
    /// The second value of returned tuple is true when the cost was already cached.
    pub fn get_or_try_insert_with<E, F>(&self, from: &str, to: &str, compute_fn: F) -> Result<(Cost, bool), E>
    where
        F: FnOnce() -> Result<Cost, E>,
    {
        let slot = match self.find_slot(from, to) {
            Some(slot) => slot,
            None => {
                let mut slots = self.slots.write().unwrap_or_else(|poisoned| poisoned.into_inner());
                slots.entry((from.to_string(), to.to_string())).or_default().clone()
            }
        };

        let mut value = slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        match *value {
            Some(cost) => Ok((cost, true)),
            None => {
                let cost = compute_fn()?;
                *value = Some(cost);

                Ok((cost, false))
            }
        }
    }

    /// Returns amount of cached costs.
    pub fn size(&self) -> usize {
        let slots = self.slots.read().unwrap_or_else(|poisoned| poisoned.into_inner());

        slots.values().filter(|slot| slot.lock().is_ok_and(|value| value.is_some())).count()
    }

    /// Removes all cached costs.
    pub fn clear(&self) {
        self.slots.write().unwrap_or_else(|poisoned| poisoned.into_inner()).clear();
    }

    fn find_slot(&self, from: &str, to: &str) -> Option<CostSlot> {
        let slots = self.slots.read().unwrap_or_else(|poisoned| poisoned.into_inner());

        slots.get(&(from.to_string(), to.to_string())).cloned()
    }
}
