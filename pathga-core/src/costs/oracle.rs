#[cfg(test)]
#[path = "../../tests/unit/costs/oracle_test.rs"]
mod oracle_test;

use super::{Cost, CostCache, TravelCostService};
use crate::models::Location;
use crate::utils::OptimizationError;
use std::sync::{Arc, OnceLock};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Keeps track of travel cost lookups.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OracleStatistics {
    /// Amount of requests sent to travel cost service.
    pub service_calls: usize,
    /// Amount of lookups answered from cache.
    pub cache_hits: usize,
}

/// A memoizing travel cost lookup: each ordered pair of location ids is requested from the
/// underlying service at most once per cache lifetime.
///
/// The first failed lookup is remembered: any later cache miss returns that error without
/// contacting the service again.
pub struct CostOracle {
    service: Arc<dyn TravelCostService + Send + Sync>,
    cache: Arc<CostCache>,
    is_symmetric: bool,
    failure: OnceLock<OptimizationError>,
    service_calls: AtomicUsize,
    cache_hits: AtomicUsize,
}

impl CostOracle {
    /// Creates a new instance of `CostOracle`.
    pub fn new(service: Arc<dyn TravelCostService + Send + Sync>, cache: Arc<CostCache>) -> Self {
        Self {
            service,
            cache,
            is_symmetric: false,
            failure: OnceLock::new(),
            service_calls: AtomicUsize::new(0),
            cache_hits: AtomicUsize::new(0),
        }
    }

    /// Marks travel costs as symmetric: a cost from `a` to `b` is reused for `b` to `a`.
    pub fn with_symmetry(mut self, is_symmetric: bool) -> Self {
        self.is_symmetric = is_symmetric;
        self
    }

    /// Returns travel cost between two locations.
    pub fn cost(&self, from: &Location, to: &Location) -> Result<Cost, OptimizationError> {
        let (key_from, key_to) = if self.is_symmetric && from.id > to.id {
            (to.id.as_str(), from.id.as_str())
        } else {
            (from.id.as_str(), to.id.as_str())
        };

        let (cost, is_cached) = self.cache.get_or_try_insert_with(key_from, key_to, || {
            if let Some(failure) = self.failure.get() {
                return Err(failure.clone());
            }

            self.service_calls.fetch_add(1, Ordering::Relaxed);

            let unavailable = |reason: String| OptimizationError::OracleUnavailable {
                origin: from.id.clone(),
                destination: to.id.clone(),
                reason,
                generation: None,
            };

            let failure = match self.service.cost(from, to) {
                Ok(cost) if cost.is_finite() && cost >= 0. => return Ok(cost),
                Ok(cost) => unavailable(format!("invalid cost value: '{cost}'")),
                Err(err) => unavailable(err.to_string()),
            };

            Err(self.failure.get_or_init(|| failure).clone())
        })?;

        if is_cached {
            self.cache_hits.fetch_add(1, Ordering::Relaxed);
        }

        Ok(cost)
    }

    /// Returns lookup statistics.
    pub fn statistics(&self) -> OracleStatistics {
        OracleStatistics {
            service_calls: self.service_calls.load(Ordering::Relaxed),
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
        }
    }
}
