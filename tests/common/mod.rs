//! Helpers shared by the integration tests.

#![allow(dead_code)]

use std::collections::hash_map::DefaultHasher;
use std::env;
use std::hash::{Hash, Hasher};

use min_max_heap::raw;
use rand::rngs::StdRng;
use rand::SeedableRng;

const SEED_VAR: &str = "MIN_MAX_HEAP_SEED";
const DEFAULT_SEED: u64 = 0x5eed_0f_4ea9;

/// Returns a random number generator seeded for the named test.
///
/// The base seed can be overridden through `MIN_MAX_HEAP_SEED` to replay a
/// failure. It is mixed with the test name so every test draws its own stream.
pub fn test_rng(name: &str) -> StdRng {
    let seed = env::var(SEED_VAR)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_SEED);
    let mut hasher = DefaultHasher::new();
    name.hash(&mut hasher);
    println!("{}: using seed {}", name, seed);
    StdRng::seed_from_u64(seed ^ hasher.finish())
}

/// Panics with the offending pair if `v` is not a valid min-max heap.
pub fn verify(v: &Vec<i32>) {
    if let Some((i, d)) = raw::violation(v) {
        panic!("heap invariant violated: [{}] = {} vs [{}] = {} in {:?}", i, v[i], d, v[d], v);
    }
}
