//! In-place fork-join quicksort.
use crate::join;

/// Sorts the slice ascending, in place.
///
/// Each partition step puts the pivot in its final position and hands
/// the two remaining halves to [`join`](crate::join): one is sorted by
/// the calling thread, the other is advertised for idle workers to
/// steal. The call returns once the whole slice is sorted. Recursion
/// splits all the way down to single-element ranges; see
/// [`quicksort_with_grain`] to cut it off earlier.
///
/// Example:
///
/// ```
/// let mut v = vec![5, 3, 8, 3, 1];
/// fork_kernels::quicksort(&mut v);
/// assert_eq!(v, vec![1, 3, 3, 5, 8]);
/// ```
pub fn quicksort<T: Ord + Send>(v: &mut [T]) {
    quicksort_with_grain(v, 1)
}

/// Same as [`quicksort`] except that ranges shorter than `grain` are
/// sorted sequentially instead of producing stealable tasks.
pub fn quicksort_with_grain<T: Ord + Send>(v: &mut [T], grain: usize) {
    if v.len() <= 1 {
        return;
    }
    if v.len() < grain {
        sequential_quicksort(v);
        return;
    }
    let middle = partition(v);
    let (left, rest) = v.split_at_mut(middle);
    let (_pivot, right) = rest.split_at_mut(1);
    join(
        || quicksort_with_grain(left, grain),
        || quicksort_with_grain(right, grain),
    );
}

fn sequential_quicksort<T: Ord>(v: &mut [T]) {
    if v.len() <= 1 {
        return;
    }
    let middle = partition(v);
    let (left, rest) = v.split_at_mut(middle);
    let (_pivot, right) = rest.split_at_mut(1);
    sequential_quicksort(left);
    sequential_quicksort(right);
}

/// Partition around the last element: one forward pass moves every
/// element strictly less than the pivot value to the front, then the
/// pivot is swapped into the boundary, its final sorted position, which
/// is returned. Elements equal to the pivot end up in the right half.
fn partition<T: Ord>(v: &mut [T]) -> usize {
    let pivot = v.len() - 1;
    let mut store = 0;
    for i in 0..pivot {
        if v[i] < v[pivot] {
            v.swap(i, store);
            store += 1;
        }
    }
    v.swap(store, pivot);
    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    #[test]
    fn small_scenario() {
        let mut v = vec![5, 3, 8, 3, 1];
        quicksort(&mut v);
        assert_eq!(v, vec![1, 3, 3, 5, 8]);
    }

    #[test]
    fn empty_and_singleton() {
        let mut empty: Vec<i32> = Vec::new();
        quicksort(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec![1];
        quicksort(&mut one);
        assert_eq!(one, vec![1]);
    }

    #[test]
    fn all_equal_is_unchanged() {
        let mut v = vec![3, 3, 3];
        quicksort(&mut v);
        assert_eq!(v, vec![3, 3, 3]);
    }

    #[test]
    fn sorting_a_sorted_slice_is_idempotent() {
        let mut v: Vec<u32> = (0..1_000).collect();
        quicksort(&mut v);
        assert!(v.iter().copied().eq(0..1_000));
        quicksort(&mut v);
        assert!(v.iter().copied().eq(0..1_000));
    }

    #[test]
    fn reverse_sorted() {
        let mut v: Vec<u32> = (0..1_000).rev().collect();
        quicksort(&mut v);
        assert!(v.iter().copied().eq(0..1_000));
    }

    #[test]
    fn matches_the_standard_sort_on_a_million_elements() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut v: Vec<i32> = (0..1_000_000).map(|_| rng.gen_range(1..=25_000)).collect();
        let mut expected = v.clone();
        expected.sort_unstable();
        quicksort(&mut v);
        assert_eq!(v, expected);
    }

    #[test]
    fn random_lengths_with_duplicates() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let len = rng.gen_range(0..200);
            let mut v: Vec<i8> = (0..len).map(|_| rng.gen_range(-5..=5)).collect();
            let mut expected = v.clone();
            expected.sort_unstable();
            quicksort(&mut v);
            assert_eq!(v, expected);
        }
    }

    #[test]
    fn grained_sort_agrees_with_the_default() {
        let mut rng = StdRng::seed_from_u64(7);
        let reference: Vec<i32> = (0..10_000).map(|_| rng.gen_range(1..=100)).collect();
        let mut plain = reference.clone();
        let mut grained = reference;
        quicksort(&mut plain);
        quicksort_with_grain(&mut grained, 64);
        assert_eq!(plain, grained);
    }

    #[test]
    fn partition_places_the_pivot() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let len = rng.gen_range(1..100);
            let mut v: Vec<i32> = (0..len).map(|_| rng.gen_range(0..10)).collect();
            let middle = partition(&mut v);
            let pivot = v[middle];
            assert!(v[..middle].iter().all(|&e| e < pivot));
            assert!(v[middle + 1..].iter().all(|&e| e >= pivot));
        }
    }
}
