use std::fmt::Debug;
use std::io::{self, Write};
use std::sync::Mutex;

use elementary_sort::{bubble, heap, insertion, merge, patterns, quick, rust_std, selection, Sort};

#[cfg(not(feature = "large_test_sizes"))]
const TEST_SIZES: [usize; 20] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 15, 16, 17, 20, 24, 33, 50, 100, 200,
];

#[cfg(feature = "large_test_sizes")]
const TEST_SIZES: [usize; 24] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 15, 16, 17, 20, 24, 33, 50, 100, 200, 500, 1_000, 2_048,
    5_000,
];

fn get_or_init_random_seed<S: Sort>() -> u64 {
    static SEED_WRITTEN: Mutex<bool> = Mutex::new(false);
    let seed = patterns::random_init_seed();

    let mut seed_writer = SEED_WRITTEN.lock().unwrap_or_else(|e| e.into_inner());
    if !*seed_writer {
        // Always write the seed before doing anything to ensure reproducibility of failures.
        io::stdout()
            .write_all(format!("\nSeed: {seed}\nTesting: {}\n\n", <S as Sort>::name()).as_bytes())
            .unwrap();
        io::stdout().flush().unwrap();

        *seed_writer = true;
    }

    seed
}

fn sort_comp<T: Ord + Clone + Debug, S: Sort>(v: &mut [T]) {
    let _seed = get_or_init_random_seed::<S>();

    let original_clone = v.to_vec();

    let mut stdlib_sorted_vec = v.to_vec();
    let stdlib_sorted = stdlib_sorted_vec.as_mut_slice();
    stdlib_sorted.sort();

    let testsort_sorted = v;
    <S as Sort>::sort(testsort_sorted);

    assert_eq!(stdlib_sorted.len(), testsort_sorted.len());

    if stdlib_sorted != testsort_sorted {
        eprintln!("Original: {:?}", original_clone);
        eprintln!("Expected: {:?}", stdlib_sorted);
        eprintln!("Got:      {:?}", testsort_sorted);

        panic!("Test assertion failed!")
    }
}

fn test_impl<T: Ord + Clone + Debug, S: Sort>(pattern_fn: impl Fn(usize) -> Vec<T>) {
    for test_size in TEST_SIZES {
        let mut test_data = pattern_fn(test_size);
        sort_comp::<T, S>(test_data.as_mut_slice());
    }
}

// --- TESTS ---

fn basic<S: Sort>() {
    sort_comp::<i32, S>(&mut []);
    sort_comp::<(), S>(&mut []);
    sort_comp::<(), S>(&mut [()]);
    sort_comp::<(), S>(&mut [(), ()]);
    sort_comp::<(), S>(&mut [(), (), ()]);
    sort_comp::<i32, S>(&mut [2, 3]);
    sort_comp::<i32, S>(&mut [2, 3, 6]);
    sort_comp::<i32, S>(&mut [2, 3, 99, 6]);
    sort_comp::<i32, S>(&mut [2, 7709, 400, 90932]);
    sort_comp::<i32, S>(&mut [15, -1, 3, -1, -3, -1, 7]);
}

fn sample_inputs<S: Sort>() {
    sort_comp::<i32, S>(&mut [1, 4, 2, 3, 5, 8, 6]);
    sort_comp::<i32, S>(&mut [70, 15, 2, 51, 60]);
    sort_comp::<i32, S>(&mut [64, 25, 12, 22, 11]);
}

fn fixed_seed<S: Sort>() {
    let fixed_seed_a = patterns::random_init_seed();
    let fixed_seed_b = patterns::random_init_seed();

    assert_eq!(fixed_seed_a, fixed_seed_b);
}

fn random<S: Sort>() {
    test_impl::<i32, S>(patterns::random);
}

fn random_d4<S: Sort>() {
    test_impl::<i32, S>(|test_size| patterns::random_uniform(test_size, 0..4));
}

fn random_binary<S: Sort>() {
    test_impl::<i32, S>(|test_size| patterns::random_uniform(test_size, 0..=1));
}

fn random_type_u64<S: Sort>() {
    test_impl::<u64, S>(|size| {
        patterns::random(size)
            .iter()
            .map(|val| -> u64 {
                // Extends the value into the 64 bit range,
                // while preserving input order.
                let x = ((*val as i64) + (i32::MAX as i64) + 1) as u64;
                x.checked_mul(i32::MAX as u64).unwrap()
            })
            .collect()
    });
}

fn random_str<S: Sort>() {
    test_impl::<String, S>(|test_size| {
        patterns::random(test_size)
            .into_iter()
            .map(|val| format!("{}", val))
            .collect::<Vec<_>>()
    });
}

fn all_equal<S: Sort>() {
    test_impl::<i32, S>(patterns::all_equal);
}

fn ascending<S: Sort>() {
    test_impl::<i32, S>(patterns::ascending);
}

fn descending<S: Sort>() {
    test_impl::<i32, S>(patterns::descending);
}

fn mostly_ascending<S: Sort>() {
    test_impl::<i32, S>(|test_size| patterns::mostly_ascending(test_size, 5.0));
}

fn saw_mixed<S: Sort>() {
    test_impl::<i32, S>(|test_size| {
        patterns::saw_mixed(test_size, ((test_size as f64).log2().round()) as usize)
    });
}

fn pipe_organ<S: Sort>() {
    test_impl::<i32, S>(patterns::pipe_organ);
}

fn permutation<S: Sort>() {
    let _seed = get_or_init_random_seed::<S>();

    // Counting values per bucket shows that nothing got lost or duplicated.
    for test_size in TEST_SIZES {
        let orig = patterns::random_uniform(test_size, 0..=9);
        let mut v = orig.clone();
        <S as Sort>::sort(&mut v);

        let mut counts_orig = [0usize; 10];
        let mut counts_sorted = [0usize; 10];
        for (a, b) in orig.iter().zip(v.iter()) {
            counts_orig[*a as usize] += 1;
            counts_sorted[*b as usize] += 1;
        }

        assert_eq!(counts_orig, counts_sorted);
        assert!(v.windows(2).all(|w| w[0] <= w[1]));
    }
}

fn idempotence<S: Sort>() {
    let _seed = get_or_init_random_seed::<S>();

    for test_size in TEST_SIZES {
        let mut v = patterns::random(test_size);
        <S as Sort>::sort(&mut v);

        let once = v.clone();
        <S as Sort>::sort(&mut v);

        assert_eq!(v, once);
    }
}

fn stability<S: Sort>() {
    let _seed = get_or_init_random_seed::<S>();

    if <S as Sort>::name().contains("unstable") {
        // It would be great to mark the test as skipped, but that isn't possible as of now.
        return;
    }

    let rand_vals = patterns::random_uniform(5_000, 0..=9);
    let mut rand_idx = 0;

    for len in 2..55 {
        let mut counts = [0; 10];

        // create a vector like [(6, 1), (5, 1), (6, 2), ...],
        // where the first item of each tuple is random, but
        // the second item represents which occurrence of that
        // number this element is, i.e., the second elements
        // will occur in sorted order.
        let orig: Vec<(i32, i32)> = (0..len)
            .map(|_| {
                let n = rand_vals[rand_idx];
                rand_idx = (rand_idx + 1) % rand_vals.len();

                counts[n as usize] += 1;
                (n, counts[n as usize])
            })
            .collect();

        let mut v = orig.clone();
        // Only sort on the first element, so an unstable sort
        // may mix up the counts.
        <S as Sort>::sort_by(&mut v, |a, b| a.0.cmp(&b.0));

        // This comparison includes the count (the second item
        // of the tuple), so elements with equal first items
        // will need to be ordered with increasing
        // counts... i.e., exactly asserting that this sort is
        // stable.
        assert!(v.windows(2).all(|w| w[0] <= w[1]));
    }
}

fn sort_vs_sort_by<S: Sort>() {
    let _seed = get_or_init_random_seed::<S>();

    // Ensure that sort and sort_by produce the same result.
    let mut input_normal = [800, 3, -801, 5, -801, -3, 60, 200, 50, 7, 10];
    let expected = [-801, -801, -3, 3, 5, 7, 10, 50, 60, 200, 800];

    let mut input_sort_by = input_normal.to_vec();

    <S as Sort>::sort(&mut input_normal);
    <S as Sort>::sort_by(&mut input_sort_by, |a, b| a.cmp(b));

    assert_eq!(input_normal, expected);
    assert_eq!(input_sort_by, expected);
}

fn sort_by_reverse<S: Sort>() {
    let _seed = get_or_init_random_seed::<S>();

    let mut v = patterns::random(TEST_SIZES[TEST_SIZES.len() - 1]);
    <S as Sort>::sort_by(&mut v, |a, b| b.cmp(a));

    assert!(v.windows(2).all(|w| w[0] >= w[1]));
}

fn comparison_bound<S: Sort>() {
    let _seed = get_or_init_random_seed::<S>();

    // No sort here needs more than n * (n - 1) comparisons. Bubble sort comes closest when
    // counting its final no-swap pass, quicksort on all-equal input does half of that.
    for test_size in TEST_SIZES {
        let mut v = patterns::random(test_size);
        let mut comp_count = 0usize;
        <S as Sort>::sort_by(&mut v, |a, b| {
            comp_count += 1;
            a.cmp(b)
        });

        assert!(comp_count <= test_size * test_size.saturating_sub(1));
    }
}

fn int_edge<S: Sort>() {
    let _seed = get_or_init_random_seed::<S>();

    // Ensure that the sort can handle integer edge cases.
    sort_comp::<i32, S>(&mut [i32::MIN, i32::MAX]);
    sort_comp::<i32, S>(&mut [i32::MAX, i32::MIN]);
    sort_comp::<i32, S>(&mut [i32::MIN, 3]);
    sort_comp::<i32, S>(&mut [i32::MIN, -3]);
    sort_comp::<i32, S>(&mut [i32::MIN, -3, i32::MAX]);
    sort_comp::<i32, S>(&mut [i32::MIN, -3, i32::MAX, i32::MIN, 5]);
    sort_comp::<i32, S>(&mut [i32::MAX, 3, i32::MIN, 5, i32::MIN, -3, 60, 200, 50, 7, 10]);

    sort_comp::<u64, S>(&mut [u64::MIN, u64::MAX]);
    sort_comp::<u64, S>(&mut [u64::MAX, u64::MIN]);
    sort_comp::<u64, S>(&mut [u64::MIN, u64::MAX - 3, u64::MAX, u64::MIN, 5]);

    let mut large = patterns::random(TEST_SIZES[TEST_SIZES.len() - 1]);
    large.push(i32::MAX);
    large.push(i32::MIN);
    large.push(i32::MAX);
    sort_comp::<i32, S>(&mut large);
}

macro_rules! instantiate_sort_tests {
    ($prefix:ident, $sort_impl:ty, [$($test_name:ident),* $(,)?]) => {
        $(
            paste::paste! {
                #[test]
                fn [<$prefix _ $test_name>]() {
                    $test_name::<$sort_impl>();
                }
            }
        )*
    };
    ($prefix:ident, $sort_impl:ty) => {
        instantiate_sort_tests!(
            $prefix,
            $sort_impl,
            [
                all_equal,
                ascending,
                basic,
                comparison_bound,
                descending,
                fixed_seed,
                idempotence,
                int_edge,
                mostly_ascending,
                permutation,
                pipe_organ,
                random,
                random_binary,
                random_d4,
                random_str,
                random_type_u64,
                sample_inputs,
                saw_mixed,
                sort_by_reverse,
                sort_vs_sort_by,
                stability,
            ]
        );
    };
}

instantiate_sort_tests!(bubble, bubble::SortImpl);
instantiate_sort_tests!(insertion, insertion::SortImpl);
instantiate_sort_tests!(selection, selection::SortImpl);
instantiate_sort_tests!(merge, merge::SortImpl);
instantiate_sort_tests!(quick, quick::SortImpl);
instantiate_sort_tests!(heap, heap::SortImpl);
instantiate_sort_tests!(rust_std, rust_std::SortImpl);
