//! Performance benchmarks for the Payroll Engine.
//!
//! Covers the calculation layer on its own (wages for one employee, payroll
//! over growing rosters) and the `/payroll` endpoint end to end.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use payroll_engine::api::{AppState, PayrollRequest, create_router};
use payroll_engine::calculation::{all_wages_for, calculate_payroll};
use payroll_engine::config::ConfigLoader;
use payroll_engine::models::{EmployeeRecord, EmployeeRow, create_employee_record};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Two weeks of weekday dates.
const WORK_DATES: [&str; 10] = [
    "2024-07-15",
    "2024-07-16",
    "2024-07-17",
    "2024-07-18",
    "2024-07-19",
    "2024-07-22",
    "2024-07-23",
    "2024-07-24",
    "2024-07-25",
    "2024-07-26",
];

/// Creates an employee who worked 0900-1700 on every work date.
fn create_fortnight_employee(index: usize) -> EmployeeRecord {
    let mut employee = create_employee_record(EmployeeRow::new(
        format!("Employee{:04}", index),
        "Bench",
        "Staff",
        Decimal::from(25 + (index % 10) as u32),
    ));
    for date in WORK_DATES {
        employee
            .create_time_in_event(&format!("{} 0900", date))
            .expect("valid timestamp");
        employee
            .create_time_out_event(&format!("{} 1700", date))
            .expect("valid timestamp");
    }
    employee
}

/// Creates a `/payroll` request body for `employee_count` employees.
fn create_payroll_request(employee_count: usize) -> PayrollRequest {
    let employees: Vec<serde_json::Value> = (0..employee_count)
        .map(|i| {
            serde_json::json!({
                "record": [format!("Employee{:04}", i), "Bench", "Staff", 25],
                "time_in": WORK_DATES.iter().map(|d| format!("{} 0900", d)).collect::<Vec<_>>(),
                "time_out": WORK_DATES.iter().map(|d| format!("{} 1700", d)).collect::<Vec<_>>()
            })
        })
        .collect();

    serde_json::from_value(serde_json::json!({ "employees": employees }))
        .expect("Failed to create request")
}

/// Benchmark: Wages for one employee across a fortnight.
fn bench_all_wages_for(c: &mut Criterion) {
    let employee = create_fortnight_employee(0);

    c.bench_function("all_wages_for_fortnight", |b| {
        b.iter(|| black_box(all_wages_for(black_box(&employee)).unwrap()))
    });
}

/// Benchmark: Payroll over rosters of increasing size.
fn bench_payroll_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("payroll_scaling");

    for employee_count in [10usize, 100, 1000].iter() {
        let employees: Vec<EmployeeRecord> =
            (0..*employee_count).map(create_fortnight_employee).collect();

        group.throughput(Throughput::Elements(*employee_count as u64));
        group.bench_with_input(
            BenchmarkId::new("employees", employee_count),
            &employees,
            |b, employees| b.iter(|| black_box(calculate_payroll(employees).unwrap())),
        );
    }

    group.finish();
}

/// Benchmark: `/payroll` endpoint for a 100 employee roster.
fn bench_payroll_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let config = ConfigLoader::load("./config").expect("Failed to load config");
    let router = create_router(AppState::new(config));
    let body = serde_json::to_string(&create_payroll_request(100)).unwrap();

    let mut group = c.benchmark_group("payroll_endpoint");
    group.throughput(Throughput::Elements(100));
    group.sample_size(20);

    group.bench_function("roster_100", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/payroll")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_all_wages_for,
    bench_payroll_scaling,
    bench_payroll_endpoint,
);
criterion_main!(benches);
