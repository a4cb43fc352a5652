use std::cmp::Ordering;

sort_impl!("heap_unstable");

/// Sorts the slice in ascending order with heapsort.
///
/// This sort is unstable, in-place and *O*(*n* \* log(*n*)) worst-case.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    heapsort(v, &mut |a, b| a.lt(b));
}

/// Sorts the slice with a comparator function, see [`sort`].
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    heapsort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn heapsort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    // Build the heap in linear time.
    for i in (0..v.len() / 2).rev() {
        sift_down(v, i, is_less);
    }

    // Pop maximal elements from the heap.
    for i in (1..v.len()).rev() {
        v.swap(0, i);
        sift_down(&mut v[..i], 0, is_less);
    }
}

/// Restores `parent >= child` below `node`.
fn sift_down<T, F>(v: &mut [T], mut node: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        let mut child = 2 * node + 1;
        if child >= v.len() {
            break;
        }

        // Choose the greater child.
        if child + 1 < v.len() && is_less(&v[child], &v[child + 1]) {
            child += 1;
        }

        if !is_less(&v[node], &v[child]) {
            break;
        }

        v.swap(node, child);
        node = child;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_input() {
        let mut v = [70, 15, 2, 51, 60];
        sort(&mut v);
        assert_eq!(v, [2, 15, 51, 60, 70]);
    }

    #[test]
    fn sift_down_restores_heap() {
        let mut v = [1, 9, 8, 4, 5];
        sift_down(&mut v, 0, &mut |a: &i32, b: &i32| a.lt(b));
        assert_eq!(v, [9, 5, 8, 4, 1]);
    }

    #[test]
    fn descending_comparisons_stay_n_log_n() {
        let len = 1_024;
        let mut v = (0..len).rev().collect::<Vec<i32>>();
        let mut comparisons = 0usize;
        sort_by(&mut v, |a, b| {
            comparisons += 1;
            a.cmp(b)
        });

        assert!(v.windows(2).all(|w| w[0] <= w[1]));
        // Two comparisons per level, log2(1024) = 10 levels, plus heap construction.
        assert!(comparisons <= 3 * 10 * len as usize);
    }
}
