use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::SamplingMode;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const RNG_SEED: u64 = 0x5EED_2026;

/// Criterion runtime tiers. Larger inputs get flat sampling and longer
/// measurement windows so the sample count stays meaningful.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Tier {
    Quick,
    Standard,
    Extended,
}

pub fn configure<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, tier: Tier) {
    let (samples, warm_up_ms, measure_ms) = match tier {
        Tier::Quick => (15, 100, 200),
        Tier::Standard => (15, 500, 1000),
        Tier::Extended => (10, 800, 1500),
    };
    group.sample_size(samples);
    group.warm_up_time(Duration::from_millis(warm_up_ms));
    group.measurement_time(Duration::from_millis(measure_ms));
    if tier != Tier::Quick {
        group.sampling_mode(SamplingMode::Flat);
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// splitmix64 avalanche step; nearby salts give unrelated seed streams.
#[inline]
pub fn mix_seed(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Uniform random dataset.
pub fn uniform_u64(len: usize, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.random()).collect()
}

/// Ascending dataset disturbed by `swaps_per_mille` random transpositions
/// per thousand elements (at least one).
pub fn nearly_sorted_u64(len: usize, seed: u64, swaps_per_mille: usize) -> Vec<u64> {
    let mut data: Vec<u64> = (0..len as u64).collect();
    if len < 2 {
        return data;
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let swaps = (len * swaps_per_mille / 1000).max(1);
    for _ in 0..swaps {
        let a = rng.random_range(0..len);
        let b = rng.random_range(0..len);
        data.swap(a, b);
    }
    data
}

/// Dataset drawn from `classes` distinct values; heavy duplication.
pub fn dup_heavy_u64(len: usize, seed: u64, classes: u64) -> Vec<u64> {
    let classes = classes.max(1);
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.random_range(0..classes) * 17).collect()
}
