//! This crate provides fork-join parallel kernels for in-memory slices,
//! running on the rayon work-stealing pool: an extremum-with-index
//! reduction, an in-place quicksort and a pair of array-construction
//! routines for sequential versus parallel throughput comparisons.
#![deny(missing_docs)]
#![warn(clippy::all)]

mod builder;
pub use crate::builder::ThreadPoolBuilder;
mod pool;
pub use crate::pool::{join, ThreadPool};
pub use rayon::current_num_threads;

mod reduce;
pub use crate::reduce::{extremum, EmptySlice, Extremum, IndexedValue};
mod sort;
pub use crate::sort::{quicksort, quicksort_with_grain};
mod fill;
pub use crate::fill::{fill_parallel, fill_sequential};

mod compare;
pub use crate::compare::Comparator;
