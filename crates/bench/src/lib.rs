//! Shared setup for the workspace benchmarks.

use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 800;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;
const RNG_SEED: u64 = 0x5EED_2026;
const SEED_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

/// Sizes at or above this use the large runtime preset.
pub const LARGE_SIZE_THRESHOLD: usize = 65_536;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

pub fn apply_runtime_config_for_size<M: Measurement>(size: usize, group: &mut BenchmarkGroup<'_, M>) {
    if size >= LARGE_SIZE_THRESHOLD {
        apply_large_runtime_config(group);
    } else {
        apply_small_runtime_config(group);
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// Deterministic RNG distinct per `(kind, size)` pair.
pub fn rng_for(kind: u64, size: usize) -> StdRng {
    let mut z = RNG_SEED
        ^ kind.wrapping_mul(SEED_MIX)
        ^ (size as u64).wrapping_mul(SEED_MIX.rotate_left(17));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    StdRng::seed_from_u64(z ^ (z >> 31))
}

/// Edges `(child, parent)` of a uniformly random recursive tree on `0..n`.
pub fn random_tree_edges<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<(usize, usize)> {
    (1..n).map(|i| (i, rng.random_range(0..i))).collect()
}

/// Edges of a path `0 - 1 - ... - n-1` in random order, the worst shape for naive trees.
pub fn shuffled_path_edges<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<(usize, usize)> {
    let mut edges: Vec<_> = (1..n).map(|i| (i - 1, i)).collect();
    for i in (1..edges.len()).rev() {
        let j = rng.random_range(0..=i);
        edges.swap(i, j);
    }
    edges
}
