use std::cmp::Ordering;

sort_impl!("insertion_stable");

/// Sorts the slice in ascending order by growing a sorted prefix one element at a time.
///
/// This sort is stable, in-place and *O*(*n*^2) worst-case, *O*(*n*) on already sorted input.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    insertion_sort(v, &mut |a, b| a.lt(b));
}

/// Sorts the slice with a comparator function, see [`sort`].
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    insertion_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn insertion_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..v.len() {
        insert_tail(&mut v[..=i], is_less);
    }
}

/// Inserts the last element of `v` into the sorted prefix `v[..len - 1]`.
fn insert_tail<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let key = v.len() - 1;

    // Walk left past every element strictly greater than the key. Equal elements stop the walk,
    // which keeps the sort stable.
    let mut hole = key;
    while hole > 0 && is_less(&v[key], &v[hole - 1]) {
        hole -= 1;
    }

    // Shifts v[hole..key] one slot to the right and drops the key into `hole`.
    v[hole..].rotate_right(1);
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
    fn empty_and_single() {
        let mut empty: [i32; 0] = [];
        sort(&mut empty);

        let mut single = [7];
        sort(&mut single);
        assert_eq!(single, [7]);
    }

    #[test]
    fn stable_for_equal_keys() {
        let mut v = [(3, 'a'), (1, 'b'), (3, 'c'), (2, 'd'), (1, 'e')];
        sort_by(&mut v, |a, b| a.0.cmp(&b.0));
        assert_eq!(v, [(1, 'b'), (1, 'e'), (2, 'd'), (3, 'a'), (3, 'c')]);
    }

    #[test]
    fn sorted_input_linear_comparisons() {
        let mut comparisons = 0;
        let mut v = [1, 2, 3, 4, 5, 6];
        sort_by(&mut v, |a, b| {
            comparisons += 1;
            a.cmp(b)
        });

        // Every key stops at its left neighbour.
        assert_eq!(comparisons, 5);
    }

    #[test]
    fn key_moves_to_front() {
        let mut v = [2, 3, 4, 1];
        sort(&mut v);
        assert_eq!(v, [1, 2, 3, 4]);
    }
}
