//! Performance benchmarks for the Net Salary Engine.
//!
//! Covers the bare statutory calculation, the audited calculation, and a full
//! round trip through the HTTP router.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use net_salary_engine::api::{AppState, CalculationRequest, create_router};
use net_salary_engine::calculation::{calculate_net_salary, compute_results};
use net_salary_engine::config::statutory_schedule;
use net_salary_engine::models::{MaritalStatus, SalaryInputs};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn sample_inputs(gross_salary: f64) -> SalaryInputs {
    SalaryInputs {
        gross_salary,
        payment_count: 14,
        age: 45,
        professional_group: 5,
        disability_degree: 0,
        marital_status: MaritalStatus::Married,
        num_children: 2,
    }
}

/// Benchmark: statutory calculation without audit trail.
fn bench_compute_results(c: &mut Criterion) {
    let inputs = sample_inputs(30000.0);
    c.bench_function("compute_results", |b| {
        b.iter(|| compute_results(black_box(&inputs)).unwrap())
    });
}

/// Benchmark: audited calculation across a batch of salaries.
fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate_net_salary_batch");
    for size in [100usize, 1000] {
        let batch: Vec<SalaryInputs> = (0..size)
            .map(|i| sample_inputs(10000.0 + i as f64 * 250.0))
            .collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &batch, |b, batch| {
            b.iter(|| {
                for inputs in batch {
                    black_box(calculate_net_salary(inputs, statutory_schedule()).unwrap());
                }
            })
        });
    }
    group.finish();
}

/// Benchmark: POST /calculate through the router.
fn bench_http_round_trip(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::default());
    let request = CalculationRequest {
        gross_salary: 30000.0,
        payment_count: 14,
        age: 30,
        professional_group: 5,
        disability_degree: 0,
        marital_status: "soltero".to_string(),
        num_children: 0,
    };
    let body = serde_json::to_string(&request).unwrap();

    c.bench_function("http_calculate", |b| {
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

criterion_group!(
    benches,
    bench_compute_results,
    bench_batch,
    bench_http_round_trip
);
criterion_main!(benches);
