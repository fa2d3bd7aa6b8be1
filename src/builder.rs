use crate::ThreadPool;
use rayon::ThreadPoolBuildError;

/// Builder for `ThreadPool`.
///
/// The worker count is fixed when the pool is built and stays fixed for
/// the pool's whole lifetime.
#[derive(Default)]
pub struct ThreadPoolBuilder {
    real_builder: rayon::ThreadPoolBuilder,
}

impl ThreadPoolBuilder {
    /// Creates a new ThreadPoolBuilder.
    pub fn new() -> Self {
        ThreadPoolBuilder {
            real_builder: rayon::ThreadPoolBuilder::new(),
        }
    }
    /// Sets the number of threads to use.
    /// When unset the pool matches the machine's available concurrency.
    pub fn num_threads(self, num_threads: usize) -> Self {
        ThreadPoolBuilder {
            real_builder: self.real_builder.num_threads(num_threads),
        }
    }
    /// Build the `ThreadPool`.
    pub fn build(self) -> Result<ThreadPool, ThreadPoolBuildError> {
        self.real_builder.build().map(|p| ThreadPool { pool: p })
    }
}
