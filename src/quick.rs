//! Iterative quicksort with a random pivot and Lomuto partitioning.
//!
//! Pending ranges live on an explicit stack instead of the call stack. The larger half is pushed
//! first, so the smaller one is processed next and the stack stays logarithmic in expectation.

use std::cmp::Ordering;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

sort_impl!("quick_unstable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    quicksort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quicksort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn quicksort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    // Seeded by length so that a given input is always sorted the same way.
    let mut rng = StdRng::seed_from_u64(len as u64);

    // Half-open ranges `begin..end` with at least two elements.
    let mut stack = vec![(0, len)];

    while let Some((begin, end)) = stack.pop() {
        let pivot_pos = rng.gen_range(begin..end);
        v.swap(pivot_pos, end - 1);

        let mid = begin + partition_lomuto(&mut v[begin..end], is_less);

        let left = (begin, mid);
        let right = (mid + 1, end);
        let (larger, smaller) = if mid - begin > end - (mid + 1) {
            (left, right)
        } else {
            (right, left)
        };

        for (range_begin, range_end) in [larger, smaller] {
            if range_end - range_begin >= 2 {
                stack.push((range_begin, range_end));
            }
        }
    }
}

/// Partitions `v` around its last element. Everything not greater than the pivot ends up in
/// front of it. Returns the final position of the pivot.
fn partition_lomuto<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let pivot = v.len() - 1;
    let mut store = 0;

    for i in 0..pivot {
        if !is_less(&v[pivot], &v[i]) {
            v.swap(store, i);
            store += 1;
        }
    }

    v.swap(store, pivot);
    store
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_input() {
        let mut v = [1, 4, 2, 3, 5, 8, 6];
        sort(&mut v);
        assert_eq!(v, [1, 2, 3, 4, 5, 6, 8]);
    }

    #[test]
    fn partition_places_pivot() {
        let mut v = [7, 2, 9, 4, 5];
        let mid = partition_lomuto(&mut v, &mut |a: &i32, b: &i32| a.lt(b));

        assert_eq!(mid, 2);
        assert_eq!(v[mid], 5);
        assert!(v[..mid].iter().all(|&x| x <= 5));
        assert!(v[mid + 1..].iter().all(|&x| x > 5));
    }

    #[test]
    fn partition_keeps_equal_elements_left() {
        let mut v = [3, 3, 1, 3];
        let mid = partition_lomuto(&mut v, &mut |a: &i32, b: &i32| a.lt(b));
        assert_eq!(mid, 3);
        assert_eq!(v, [3, 3, 1, 3]);
    }

    #[test]
    fn deterministic_for_same_input() {
        let input = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (0, 'e'), (2, 'f')];

        let mut a = input;
        let mut b = input;
        sort_by(&mut a, |x, y| x.0.cmp(&y.0));
        sort_by(&mut b, |x, y| x.0.cmp(&y.0));

        assert_eq!(a, b);
        assert!(a.windows(2).all(|w| w[0].0 <= w[1].0));
    }
}
