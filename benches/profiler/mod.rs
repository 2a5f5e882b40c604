// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

// Shared criterion configuration with pprof flamegraph output.
// Knobs are read from the environment so CI can run short sweeps while local
// profiling runs can crank the sampling frequency:
//   PROTEUS_BENCH_SAMPLES / PROTEUS_BENCH_WARMUP_MS / PROTEUS_BENCH_MEASURE_MS
//   PROTEUS_PROFILE_HZ

use std::time::Duration;

use criterion::Criterion;
use pprof::criterion::{Output, PProfProfiler};

fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or(default),
        Err(_) => default,
    }
}

pub fn criterion() -> Criterion {
    let samples = env_parse("PROTEUS_BENCH_SAMPLES", 60usize).clamp(10, 200);
    let warmup_ms = env_parse("PROTEUS_BENCH_WARMUP_MS", 3_000u64).clamp(500, 60_000);
    let measure_ms = env_parse("PROTEUS_BENCH_MEASURE_MS", 5_000u64).clamp(1_000, 120_000);
    let profile_hz = env_parse("PROTEUS_PROFILE_HZ", 100i32).clamp(1, 1_000);

    Criterion::default()
        .sample_size(samples)
        .warm_up_time(Duration::from_millis(warmup_ms))
        .measurement_time(Duration::from_millis(measure_ms))
        .with_profiler(PProfProfiler::new(profile_hz, Output::Flamegraph(None)))
}
