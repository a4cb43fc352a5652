//! Bubble sort with early exit.
//!
//! Every pass walks the unsorted prefix and swaps adjacent out-of-order elements, which moves the
//! largest remaining element to the end of that prefix. The scanned range shrinks by one per pass,
//! and sorting stops after the first pass that performs no swap.

use std::cmp::Ordering;

sort_impl!("bubble_stable");

/// What a single bubble sort invocation did.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BubbleStats {
    /// Number of full passes, including the final pass without swaps.
    pub passes: usize,
    /// Number of adjacent swaps over all passes.
    pub swaps: usize,
}

/// Sorts the slice in ascending order.
///
/// This sort is stable, in-place and *O*(*n*^2) worst-case. Already sorted input finishes after a
/// single pass.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    bubble_sort(v, &mut |a, b| a.lt(b));
}

/// Sorts the slice with a comparator function.
///
/// See [`sort`].
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    bubble_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Same as [`sort`], but reports how many passes and swaps were needed.
pub fn sort_with_stats<T>(v: &mut [T]) -> BubbleStats
where
    T: Ord,
{
    bubble_sort(v, &mut |a, b| a.lt(b))
}

/// Same as [`sort_by`], but reports how many passes and swaps were needed.
pub fn sort_by_with_stats<T, F>(v: &mut [T], mut compare: F) -> BubbleStats
where
    F: FnMut(&T, &T) -> Ordering,
{
    bubble_sort(v, &mut |a, b| compare(a, b) == Ordering::Less)
}

fn bubble_sort<T, F>(v: &mut [T], is_less: &mut F) -> BubbleStats
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    let mut stats = BubbleStats::default();

    loop {
        let mut changed = false;

        // Everything past `len - 1 - passes` already holds its final value.
        let end = len.saturating_sub(1).saturating_sub(stats.passes);
        for i in 0..end {
            // Strict comparison, equal neighbours are never swapped.
            if is_less(&v[i + 1], &v[i]) {
                v.swap(i, i + 1);
                stats.swaps += 1;
                changed = true;
            }
        }

        stats.passes += 1;

        if !changed {
            break;
        }
    }

    log::trace!(
        "bubble sort of len {len} took {} passes and {} swaps",
        stats.passes,
        stats.swaps
    );

    stats
}
