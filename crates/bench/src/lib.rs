//! Criterion presets shared by the workspace benches.

use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::SamplingMode;
use criterion::measurement::Measurement;

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 120;
const LARGE_RUNTIME_MEASURE_MS: u64 = 360;
const LARGE_INPUT_THRESHOLD: usize = 8_192;

pub const RNG_SEED: u64 = 0x5EED_2026;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

/// Small inputs get auto sampling; past the threshold one iteration is slow
/// enough that flat sampling with fewer samples keeps runs short.
pub fn apply_runtime_for_size<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, size: usize) {
    if size <= LARGE_INPUT_THRESHOLD {
        apply_small_runtime_config(group);
        group.sampling_mode(SamplingMode::Auto);
    } else {
        group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
        group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
        group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
        group.sampling_mode(SamplingMode::Flat);
    }
}
