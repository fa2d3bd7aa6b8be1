//! Sequential and parallel construction of random integer arrays.
//!
//! Both routines build the same kind of array; they exist so callers can
//! compare the throughput of a plain loop against an element-wise
//! parallel construction on the pool. The arrays are random, so the two
//! strategies agree in shape and value range, not element-for-element.
use rand::distributions::{Distribution, Uniform};
use rayon::prelude::*;
use std::ops::RangeInclusive;

/// Builds `len` integers drawn uniformly from `range`, one after
/// another, on the calling thread.
pub fn fill_sequential(len: usize, range: RangeInclusive<i32>) -> Vec<i32> {
    let between = Uniform::from(range);
    let mut rng = rand::thread_rng();
    let mut v = Vec::with_capacity(len);
    for _ in 0..len {
        v.push(between.sample(&mut rng));
    }
    v
}

/// Builds the same array shape as [`fill_sequential`] but every element
/// is produced through the pool's parallel iterator machinery. Each
/// worker samples from its own generator and the elements are collected
/// in index order, so no state is shared between tasks.
pub fn fill_parallel(len: usize, range: RangeInclusive<i32>) -> Vec<i32> {
    let between = Uniform::from(range);
    (0..len)
        .into_par_iter()
        .map_init(rand::thread_rng, |rng, _| between.sample(rng))
        .collect()
}
