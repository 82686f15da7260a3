#[cfg(test)]
#[path = "../../tests/unit/utils/environment_test.rs"]
mod environment_test;

use crate::utils::{DefaultRandom, Random};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A logger type which is called with various information regarding the work done by the solver.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Specifies a computational quota for a single optimization run.
/// The main purpose is to allow to stop algorithm in reaction to external events such as user
/// cancellation or a hard deadline set by the caller.
pub trait Quota {
    /// Returns true when computation should be stopped.
    fn is_reached(&self) -> bool;
}

/// A quota which is reached once its flag is raised, e.g. from a signal handler or a watchdog
/// observing the travel cost service.
#[derive(Clone, Default)]
pub struct CancellationQuota {
    is_cancelled: Arc<AtomicBool>,
}

impl CancellationQuota {
    /// Raises the flag.
    pub fn cancel(&self) {
        self.is_cancelled.store(true, Ordering::Relaxed);
    }
}

impl Quota for CancellationQuota {
    fn is_reached(&self) -> bool {
        self.is_cancelled.load(Ordering::Relaxed)
    }
}

/// Keeps track of environment specific information which influences algorithm behavior.
#[derive(Clone)]
pub struct Environment {
    /// A wrapper on random generator.
    pub random: Arc<dyn Random + Send + Sync>,

    /// A global execution quota.
    pub quota: Option<Arc<dyn Quota + Send + Sync>>,

    /// Amount of threads used to evaluate fitness within one generation.
    pub parallelism: usize,

    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates an instance of `Environment`.
    pub fn new(
        random: Arc<dyn Random + Send + Sync>,
        quota: Option<Arc<dyn Quota + Send + Sync>>,
        parallelism: usize,
        logger: InfoLogger,
    ) -> Self {
        Self { random, quota, parallelism: parallelism.max(1), logger }
    }

    /// Creates an instance of `Environment` using given random seed and silent logger.
    pub fn new_with_seed(seed: u64) -> Self {
        Self::new(Arc::new(DefaultRandom::new_with_seed(seed)), None, get_cpus(), Arc::new(|_| {}))
    }

    /// Returns true if quota is set and reached.
    pub fn is_quota_reached(&self) -> bool {
        self.quota.as_ref().is_some_and(|quota| quota.is_reached())
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new(Arc::new(DefaultRandom::default()), None, get_cpus(), Arc::new(|msg| println!("{msg}")))
    }
}

/// Returns amount of CPUs.
#[cfg(not(target_arch = "wasm32"))]
pub fn get_cpus() -> usize {
    num_cpus::get()
}

/// Returns amount of CPUs.
#[cfg(target_arch = "wasm32")]
pub fn get_cpus() -> usize {
    1
}
