//! Provides a set of input patterns for testing, benchmarking and comparing the sorts.
//! Currently limited to i32 values.

use std::sync::Mutex;

use once_cell::sync::OnceCell;
use rand::prelude::*;

use crate::config::Config;

// --- Public ---

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    random_vec(len)
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    // :.:.:.::
    let mut rng = new_rng();

    // Abstracting over ranges in Rust :(
    let dist: rand::distributions::Uniform<i32> = range.into();

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    (0..len).map(|_| 66).collect::<Vec<_>>()
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect::<Vec<_>>()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect::<Vec<_>>()
}

/// Ascending values where `max(1, len * swap_percent / 100)` random position pairs were swapped.
pub fn mostly_ascending(len: usize, swap_percent: f64) -> Vec<i32> {
    //     .:
    //   :.::
    // .:::.:

    let mut vals = ascending(len);
    if len == 0 {
        return vals;
    }

    let swap_count = cmp_max_one(((len as f64 / 100.0) * swap_percent) as usize);
    let mut rng = new_rng();

    for _ in 0..swap_count {
        let a = rng.gen_range(0..len);
        let b = rng.gen_range(0..len);
        vals.swap(a, b);
    }

    vals
}

pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    if len == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(len);
    let chunks_size = cmp_max_one(len / saw_count.max(1));
    let saw_directions = random_uniform((len / chunks_size) + 1, 0..=1);

    for (i, chunk) in vals.chunks_mut(chunks_size).enumerate() {
        if saw_directions[i] == 0 {
            chunk.sort();
        } else {
            chunk.sort_by_key(|&e| std::cmp::Reverse(e));
        }
    }

    vals
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random_vec(len);

    let first_half = &mut vals[0..(len / 2)];
    first_half.sort();

    let second_half = &mut vals[(len / 2)..len];
    second_half.sort_by_key(|&e| std::cmp::Reverse(e));

    vals
}

/// Overwrites the default behavior so that each call to a random derived pattern yields new random
/// values.
///
/// By default `patterns::random(4)` will yield the same values per process invocation.
/// For benchmarks it's advised to call this function.
pub fn use_random_seed_each_time() {
    let (seed_type, _) = get_or_init_seed_type_and_value();
    if seed_type == SeedType::ExternalOverride {
        log::warn!("Ignoring request for a fresh seed per pattern, the seed is overridden.");
        return;
    }

    *SEED_TYPE_AND_VALUE.lock().unwrap_or_else(|e| e.into_inner()) =
        Some((SeedType::RandomEachTime, 0));
}

pub fn random_init_seed() -> u64 {
    get_or_init_seed_type_and_value().1
}

// --- Private ---

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum SeedType {
    RandomEachTime,
    RandomOncePerProcess,
    ExternalOverride,
}

static SEED_TYPE_AND_VALUE: Mutex<Option<(SeedType, u64)>> = Mutex::new(None);

fn get_or_init_seed_type_and_value() -> (SeedType, u64) {
    let (seed_type, seed_val) = *SEED_TYPE_AND_VALUE
        .lock()
        .unwrap_or_else(|e| e.into_inner())
        .get_or_insert_with(|| {
            if let Some(override_seed) = override_seed() {
                (SeedType::ExternalOverride, override_seed)
            } else {
                let per_process_seed = thread_rng().gen();
                log::debug!("Using per-process pattern seed {per_process_seed}");
                (SeedType::RandomOncePerProcess, per_process_seed)
            }
        });

    if seed_type == SeedType::RandomEachTime {
        (SeedType::RandomEachTime, thread_rng().gen())
    } else {
        (seed_type, seed_val)
    }
}

fn override_seed() -> Option<u64> {
    // The environment is read once, later changes are not picked up.
    static OVERRIDE: OnceCell<Option<u64>> = OnceCell::new();

    *OVERRIDE.get_or_init(|| match Config::from_env() {
        Ok(config) => config.override_seed,
        Err(err) => {
            log::warn!("Ignoring seed override, {err}");
            None
        }
    })
}

fn new_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

fn random_vec(len: usize) -> Vec<i32> {
    let mut rng = new_rng();

    (0..len).map(|_| rng.gen::<i32>()).collect()
}

fn cmp_max_one(val: usize) -> usize {
    std::cmp::max(val, 1)
}
