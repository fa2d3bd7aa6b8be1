//! `ThreadPool` structure fixing the worker count for a whole run.
use crate::Comparator;
use std::time::{Duration, Instant};

/// Takes two closures and *potentially* runs them in parallel. It
/// returns a pair of the results from those closures.
///
/// The underlying technique is work stealing: the rayon runtime uses a
/// fixed pool of worker threads; the calling thread starts executing
/// one closure while advertising the other one for idle workers to
/// steal. `join` only returns once both closures have completed, so the
/// caller never observes a half-finished fork. No ordering is
/// guaranteed between the two closures.
///
/// Example:
///
/// ```
/// let (s1, s2) = fork_kernels::join(
///     || (0..10_000u64).sum::<u64>(),
///     || (0..20_000u64).sum::<u64>(),
/// );
/// assert!(s1 < s2);
/// ```
pub fn join<A, B, RA, RB>(oper_a: A, oper_b: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    rayon::join(oper_a, oper_b)
}

/// We wrap rayon's pool into our own struct so the worker count is
/// decided once, at startup, and every kernel run through `install`
/// schedules on that pool.
pub struct ThreadPool {
    pub(crate) pool: rayon::ThreadPool,
}

impl ThreadPool {
    /// Execute given closure in the thread pool: all `join`s beneath it
    /// are scheduled on this pool's workers.
    pub fn install<OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        self.pool.install(op)
    }

    /// Execute given closure in the thread pool, returning its result
    /// together with the elapsed wall-clock time.
    pub fn timed_install<OP, R>(&self, op: OP) -> (R, Duration)
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        let start = Instant::now();
        let r = self.pool.install(op);
        (r, start.elapsed())
    }

    /// Number of worker threads in this pool.
    pub fn current_num_threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// This function simply returns a comparator that allows us to add
    /// algorithms for comparison.
    pub fn compare(&self) -> Comparator {
        Comparator::new(self)
    }
}
