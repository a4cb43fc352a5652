use std::cmp::Ordering;

sort_impl!("selection_unstable");

/// Sorts the slice in ascending order by repeatedly moving the minimum of the unsorted suffix to
/// its front.
///
/// This sort is unstable, in-place and always performs *n* \* (*n* - 1) / 2 comparisons. It does
/// at most *n* - 1 swaps.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    selection_sort(v, &mut |a, b| a.lt(b));
}

/// Sorts the slice with a comparator function, see [`sort`].
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    selection_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn selection_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    for i in 0..len.saturating_sub(1) {
        let min_idx = min_index(&v[i..], is_less) + i;

        if min_idx != i {
            v.swap(i, min_idx);
        }
    }
}

/// Returns the index of the first minimum in `v`. `v` must not be empty.
fn min_index<T, F>(v: &[T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let mut min_idx = 0;
    for j in 1..v.len() {
        // Strict, on ties the earlier index is kept.
        if is_less(&v[j], &v[min_idx]) {
            min_idx = j;
        }
    }

    min_idx
}
