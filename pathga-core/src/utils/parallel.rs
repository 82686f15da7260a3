#[cfg(test)]
#[path = "../../tests/unit/utils/parallel_test.rs"]
mod parallel_test;

pub use self::actual::ThreadPool;
pub use self::actual::parallel_try_collect;

#[cfg(not(target_arch = "wasm32"))]
mod actual {
    use rayon::prelude::*;

    /// A pool of worker threads used to evaluate a population. When a dedicated pool cannot be
    /// created, work runs on the global rayon pool.
    pub struct ThreadPool {
        inner: Option<rayon::ThreadPool>,
    }

    impl ThreadPool {
        /// Creates a new instance of `ThreadPool` with given amount of threads.
        pub fn new(num_threads: usize) -> Self {
            Self { inner: rayon::ThreadPoolBuilder::new().num_threads(num_threads.max(1)).build().ok() }
        }

        /// Runs operation inside of the pool.
        pub fn execute<OP, R>(&self, op: OP) -> R
        where
            OP: FnOnce() -> R + Send,
            R: Send,
        {
            match &self.inner {
                Some(pool) => pool.install(op),
                None => op(),
            }
        }
    }

    /// Maps items in parallel keeping their order in the result. Stops scheduling work once
    /// any item fails and returns one of the errors.
    pub fn parallel_try_collect<T, F, R, E>(source: &[T], map_op: F) -> Result<Vec<R>, E>
    where
        T: Send + Sync,
        F: Fn(&T) -> Result<R, E> + Sync + Send,
        R: Send,
        E: Send,
    {
        source.par_iter().map(map_op).collect()
    }
}

#[cfg(target_arch = "wasm32")]
mod actual {
    /// A single threaded stand-in.
    pub struct ThreadPool;

    impl ThreadPool {
        /// Creates a new instance of `ThreadPool`.
        pub fn new(_num_threads: usize) -> Self {
            Self
        }

        /// Runs operation on the current thread.
        pub fn execute<OP, R>(&self, op: OP) -> R
        where
            OP: FnOnce() -> R + Send,
            R: Send,
        {
            op()
        }
    }

    /// Maps items sequentially till the first error.
    pub fn parallel_try_collect<T, F, R, E>(source: &[T], map_op: F) -> Result<Vec<R>, E>
    where
        T: Send + Sync,
        F: Fn(&T) -> Result<R, E> + Sync + Send,
        R: Send,
        E: Send,
    {
        source.iter().map(map_op).collect()
    }
}
