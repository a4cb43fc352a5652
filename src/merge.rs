//! Top-down merge sort.
//!
//! The merge runs over a permutation of indices, which is applied to the slice at the end with
//! swaps. That keeps the sort generic over any `T` without a `Clone` bound or `unsafe` moves.

use std::cmp::Ordering;

sort_impl!("merge_stable");

/// Sorts the slice in ascending order with merge sort.
///
/// This sort is stable and *O*(*n* \* log(*n*)) worst-case. It allocates two index buffers of
/// length *n*.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    merge_sort(v, &mut |a, b| a.lt(b));
}

/// Sorts the slice with a comparator function, see [`sort`].
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn merge_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let mut order = (0..len).collect::<Vec<usize>>();
    let mut scratch = vec![0; len];
    sort_indices(&mut order, &mut scratch, &mut |a: &usize, b: &usize| {
        is_less(&v[*a], &v[*b])
    });

    apply_permutation(v, &mut order);
}

fn sort_indices<F>(idx: &mut [usize], scratch: &mut [usize], is_less: &mut F)
where
    F: FnMut(&usize, &usize) -> bool,
{
    let len = idx.len();
    if len < 2 {
        return;
    }

    let mid = len / 2;
    sort_indices(&mut idx[..mid], &mut scratch[..mid], is_less);
    sort_indices(&mut idx[mid..], &mut scratch[mid..], is_less);

    // Already in order, nothing to merge.
    if !is_less(&idx[mid], &idx[mid - 1]) {
        return;
    }

    let (mut left, mut right) = (0, mid);
    for out in scratch[..len].iter_mut() {
        // Taking from the left on ties keeps equal elements in input order.
        let take_left = right == len || (left < mid && !is_less(&idx[right], &idx[left]));
        if take_left {
            *out = idx[left];
            left += 1;
        } else {
            *out = idx[right];
            right += 1;
        }
    }

    idx.copy_from_slice(&scratch[..len]);
}

/// Rearranges `v` so that `v[i]` afterwards holds the element that was at `order[i]`. `order` is
/// consumed, every entry ends up as its own index.
fn apply_permutation<T>(v: &mut [T], order: &mut [usize]) {
    for start in 0..v.len() {
        let mut pos = start;
        while order[pos] != pos {
            let src = order[pos];
            order[pos] = pos;
            if src == start {
                break;
            }

            v.swap(pos, src);
            pos = src;
        }
    }
}
