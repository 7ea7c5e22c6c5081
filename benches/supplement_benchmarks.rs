//! Performance benchmarks for the wage supplement engine.
//!
//! This benchmark suite verifies that the engine meets performance targets:
//! - Holiday calendar for one year: < 10μs mean (uncached)
//! - Single supplement calculation (library): < 100μs mean
//! - Single calculation over HTTP: < 1ms mean
//! - Batch of 100 calculations: < 100ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use crewplan_engine::api::{AppState, create_router};
use crewplan_engine::calculation::compute_supplements;
use crewplan_engine::calendar::{HolidayCalendar, holidays_in_year};
use crewplan_engine::config::ConfigLoader;
use crewplan_engine::models::WorkInterval;

use axum::{body::Body, http::Request};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/crewplan").expect("Failed to load config");
    AppState::new(config)
}

fn make_datetime(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").expect("Valid datetime")
}

/// Creates a calculation request body for a Friday-to-Saturday night shift.
fn create_request_body(shift_id: &str) -> String {
    serde_json::json!({
        "shift": {
            "id": shift_id,
            "start_time": "2024-01-05T22:00:00",
            "end_time": "2024-01-06T07:00:00"
        },
        "base_hourly_rate": "200"
    })
    .to_string()
}

/// Benchmark: Computing the holiday set for one year from scratch.
fn bench_holidays_in_year(c: &mut Criterion) {
    c.bench_function("holidays_in_year", |b| {
        b.iter(|| black_box(holidays_in_year(black_box(2024)).expect("Valid year")))
    });
}

/// Benchmark: Single supplement calculation at the library level.
///
/// Target: < 100μs mean
fn bench_compute_supplements(c: &mut Criterion) {
    let config = ConfigLoader::load("./config/crewplan").expect("Failed to load config");
    let rules = config.rules().to_vec();
    let calendar = HolidayCalendar::new();
    let interval = WorkInterval::new(
        make_datetime("2024-01-05T22:00:00"),
        make_datetime("2024-01-06T07:00:00"),
    )
    .expect("Valid interval");
    let base_rate = Decimal::new(200, 0);

    // Warm the calendar cache so the benchmark measures the overlap sweep.
    calendar.holidays(2024).expect("Valid year");

    c.bench_function("compute_supplements", |b| {
        b.iter(|| {
            black_box(
                compute_supplements(
                    black_box(&interval),
                    black_box(&rules),
                    black_box(base_rate),
                    &calendar,
                )
                .expect("Calculation succeeds"),
            )
        })
    });
}

/// Benchmark: Single calculation over HTTP.
///
/// Target: < 1ms mean
fn bench_single_calculation_http(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();
    let router = create_router(state);
    let body = create_request_body("shift_bench_001");

    c.bench_function("single_calculation_http", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/calculate")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: Batch of 100 calculations over HTTP.
///
/// Target: < 100ms mean
fn bench_batch_100(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();

    let requests: Vec<String> = (0..100)
        .map(|i| create_request_body(&format!("shift_batch_{:03}", i)))
        .collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(100));

    group.bench_function("batch_100", |b| {
        b.to_async(&rt).iter(|| async {
            let mut results = Vec::with_capacity(100);
            for body in &requests {
                let router = create_router(state.clone());
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/calculate")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                results.push(response);
            }
            black_box(results)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_holidays_in_year,
    bench_compute_supplements,
    bench_single_calculation_http,
    bench_batch_100
);
criterion_main!(benches);
