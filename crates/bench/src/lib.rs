use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 300;
const LARGE_RUNTIME_MEASURE_MS: u64 = 800;
const LARGE_INPUT_THRESHOLD: usize = 65536;
const RNG_SEED: u64 = 0x5EED_2026;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum KeyDistribution {
    Uniform,
    FewDistinct,
    Ascending,
    AllEqual,
}

pub const ALL_DISTRIBUTIONS: [KeyDistribution; 4] = [
    KeyDistribution::Uniform,
    KeyDistribution::FewDistinct,
    KeyDistribution::Ascending,
    KeyDistribution::AllEqual,
];

impl KeyDistribution {
    pub fn label(self) -> &'static str {
        match self {
            Self::Uniform => "uniform",
            Self::FewDistinct => "few_distinct",
            Self::Ascending => "ascending",
            Self::AllEqual => "all_equal",
        }
    }
}

pub fn apply_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, size: usize) {
    if size < LARGE_INPUT_THRESHOLD {
        group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
        group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
        group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
    } else {
        group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
        group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
        group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

pub fn generate_keys<R: Rng + ?Sized>(rng: &mut R, dist: KeyDistribution, size: usize) -> Vec<f64> {
    match dist {
        KeyDistribution::Uniform => (0..size).map(|_| rng.random::<f64>()).collect(),
        KeyDistribution::FewDistinct => (0..size).map(|_| rng.random_range(0..16) as f64).collect(),
        KeyDistribution::Ascending => (0..size).map(|i| i as f64).collect(),
        KeyDistribution::AllEqual => vec![1.0; size],
    }
}
