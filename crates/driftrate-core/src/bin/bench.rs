/// Core benchmarks for every driftrate procedure.
///
/// Uses std::time::Instant for timing and std::hint::black_box to prevent
/// dead-code elimination. Reports the median of `REPEATS` runs.
use std::hint::black_box;
use std::time::{Duration, Instant};

use driftrate_core::constants::{DEFAULT_DT, DEFAULT_ETA, DEFAULT_SLICE_DELTA_D};
use driftrate_core::drift::integrate_drift;
use driftrate_core::field::sample_field;
use driftrate_core::minimize::minimize;
use driftrate_core::slices::{sample_endogenous, sample_threshold_slices};
use driftrate_core::Parameters;

const REPEATS: usize = 7;

/// Run a closure `REPEATS` times, return the median duration.
fn median_time<F: FnMut()>(mut f: F) -> Duration {
    let mut times: Vec<Duration> = (0..REPEATS)
        .map(|_| {
            let start = Instant::now();
            f();
            start.elapsed()
        })
        .collect();
    times.sort();
    times[REPEATS / 2]
}

fn bench_field(params: &Parameters, sizes: &[usize]) -> Vec<(&'static str, usize, Duration)> {
    let mut results = Vec::new();
    for &n in sizes {
        // Warmup
        black_box(sample_field(n, params));

        let dur = median_time(|| {
            black_box(sample_field(n, params));
        });
        results.push(("field", n * n, dur));
    }
    results
}

fn bench_slices(params: &Parameters) -> Vec<(&'static str, usize, Duration)> {
    black_box(sample_threshold_slices(&DEFAULT_SLICE_DELTA_D, params));
    let slices = median_time(|| {
        black_box(sample_threshold_slices(&DEFAULT_SLICE_DELTA_D, params));
    });

    black_box(sample_endogenous(0.1, params));
    let endogenous = median_time(|| {
        black_box(sample_endogenous(0.1, params));
    });

    vec![
        ("threshold_slices", 5 * 400, slices),
        ("endogenous", 400, endogenous),
    ]
}

fn bench_drift(params: &Parameters, sizes: &[usize]) -> Vec<(&'static str, usize, Duration)> {
    let mut results = Vec::new();
    for &n in sizes {
        black_box(integrate_drift(n, DEFAULT_DT, params));

        let dur = median_time(|| {
            black_box(integrate_drift(n, DEFAULT_DT, params));
        });
        results.push(("drift", n, dur));
    }
    results
}

fn bench_minimize(sizes: &[usize]) -> Vec<(&'static str, usize, Duration)> {
    let mut results = Vec::new();
    for &n in sizes {
        black_box(minimize(n, DEFAULT_ETA));

        let dur = median_time(|| {
            black_box(minimize(n, DEFAULT_ETA));
        });
        results.push(("minimize", n, dur));
    }
    results
}

fn main() {
    let params = Parameters::default();

    println!("driftrate Core Benchmarks");
    println!("============================================================");
    println!("{:<18} {:>8}   {:>12}", "Procedure", "N", "Median (ms)");
    println!("--------------------------------------------");

    let mut all_results: Vec<(&str, usize, Duration)> = Vec::new();

    all_results.extend(bench_field(&params, &[50, 200, 1000]));
    all_results.extend(bench_slices(&params));
    all_results.extend(bench_drift(&params, &[2000, 200_000]));
    all_results.extend(bench_minimize(&[2000, 200_000]));

    for (procedure, n, dur) in &all_results {
        let ms = dur.as_secs_f64() * 1000.0;
        println!("{:<18} {:>8}      {:>8.3}", procedure, n, ms);
    }

    println!("============================================================");
}
