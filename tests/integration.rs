//! Integration tests for the payroll engine HTTP API.
//!
//! This suite drives the full stack through the router: calculation,
//! duplicate prevention, recalculation idempotence, manual saves,
//! deletion, and period-filtered listings.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::RateConfig;
use payroll_engine::filter::PayrollFilter;
use payroll_engine::ledger::PayrollLedger;
use payroll_engine::models::{AttendanceRecord, Employee, PayrollRecord, Period};
use payroll_engine::store::{MemoryAttendanceStore, MemoryEmployeeStore, MemoryPayrollStore};

// =============================================================================
// Test Helpers
// =============================================================================

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn full_day(id: u64, employee_id: u64, year: i32, month: u32, day: u32) -> AttendanceRecord {
    AttendanceRecord {
        id,
        employee_id,
        date: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
        check_in: None,
        check_out: None,
        hours_worked: dec("8"),
    }
}

/// One employee with base 75000 and 20 full days in March 2024, plus a
/// second employee with no attendance.
fn create_test_state() -> AppState {
    let employees = MemoryEmployeeStore::new(vec![
        Employee {
            id: 1001,
            full_name: "Ada Lovelace".to_string(),
            base_salary: dec("75000"),
        },
        Employee {
            id: 2002,
            full_name: "Grace Hopper".to_string(),
            base_salary: dec("60000"),
        },
    ]);

    let attendance = (1..=20)
        .map(|day| full_day(day as u64, 1001, 2024, 3, day))
        .collect();

    AppState::new(PayrollLedger::new(
        employees,
        MemoryAttendanceStore::new(attendance),
        MemoryPayrollStore::new(),
        RateConfig::default(),
    ))
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };
    (status, json)
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        router,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

async fn post_empty(router: Router, uri: &str) -> (StatusCode, Value) {
    send(
        router,
        Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    send(
        router,
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

async fn delete(router: Router, uri: &str) -> (StatusCode, Value) {
    send(
        router,
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

fn calculate_body(employee_id: u64, year: i32, month: u32) -> Value {
    json!({"employee_id": employee_id, "year": year, "month": month})
}

// =============================================================================
// Calculation
// =============================================================================

/// E2E-001: reference example
/// base 75000, rates (10, 5, 50), 20 qualifying days in March 2024
#[tokio::test]
async fn test_e2e_001_calculate_reference_example() {
    let router = create_router_for_test();

    let (status, body) = post_json(router, "/payroll/calculate", calculate_body(1001, 2024, 3)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["base_salary"], "75000");
    assert_eq!(body["deductions"], "11250");
    assert_eq!(body["bonuses"], "1000");
    assert_eq!(body["net_salary"], "64750");
}

/// E2E-002: employee with no attendance gets no bonus
#[tokio::test]
async fn test_e2e_002_calculate_without_attendance() {
    let router = create_router_for_test();

    let (status, body) = post_json(router, "/payroll/calculate", calculate_body(2002, 2024, 3)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["bonuses"], "0");
    let net: PayrollRecord = serde_json::from_value(body).unwrap();
    assert_eq!(net.net_salary, dec("51000"));
}

/// E2E-003: duplicate period is rejected, next period still succeeds
#[tokio::test]
async fn test_e2e_003_duplicate_period() {
    let router = create_router_for_test();

    let (status, _) = post_json(
        router.clone(),
        "/payroll/calculate",
        calculate_body(1001, 2024, 3),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = post_json(
        router.clone(),
        "/payroll/calculate",
        calculate_body(1001, 2024, 3),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "DUPLICATE_PERIOD");
    assert!(body["message"].as_str().unwrap().contains("3/2024"));

    let (status, _) = post_json(router, "/payroll/calculate", calculate_body(1001, 2024, 4)).await;
    assert_eq!(status, StatusCode::CREATED);
}

/// E2E-004: unknown employee is 404 naming the entity
#[tokio::test]
async fn test_e2e_004_calculate_unknown_employee() {
    let router = create_router_for_test();

    let (status, body) = post_json(router, "/payroll/calculate", calculate_body(9999, 2024, 3)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
    assert!(body["message"].as_str().unwrap().contains("employee"));
}

/// E2E-005: month out of range is 400 naming the field
#[tokio::test]
async fn test_e2e_005_calculate_invalid_month() {
    let router = create_router_for_test();

    let (status, body) = post_json(router, "/payroll/calculate", calculate_body(1001, 2024, 13)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["message"].as_str().unwrap().contains("month"));
}

// =============================================================================
// Recalculation
// =============================================================================

/// E2E-006: recalculating twice with unchanged inputs is idempotent
#[tokio::test]
async fn test_e2e_006_recalculate_idempotent() {
    let router = create_router_for_test();

    let (_, created) = post_json(
        router.clone(),
        "/payroll/calculate",
        calculate_body(1001, 2024, 3),
    )
    .await;
    let id = created["id"].as_u64().unwrap();

    let (status, first) = post_empty(router.clone(), &format!("/payroll/{}/recalculate", id)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, second) = post_empty(router, &format!("/payroll/{}/recalculate", id)).await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(first, created);
    assert_eq!(second, first);
}

/// E2E-007: recalculate on a missing id is 404
#[tokio::test]
async fn test_e2e_007_recalculate_missing() {
    let router = create_router_for_test();

    let (status, body) = post_empty(router, "/payroll/42/recalculate").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

// =============================================================================
// Manual save
// =============================================================================

/// E2E-008: manual save recomputes net salary from supplied fields
#[tokio::test]
async fn test_e2e_008_save_recomputes_net() {
    let router = create_router_for_test();

    let (status, body) = post_json(
        router,
        "/payroll",
        json!({
            "employee_id": 2002,
            "month": 5,
            "year": 2024,
            "base_salary": "60000",
            "deductions": "9000",
            "bonuses": "450"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].as_u64().unwrap() > 0);
    assert_eq!(body["net_salary"], "51450");
}

/// E2E-009: manual save cannot bypass the uniqueness invariant
#[tokio::test]
async fn test_e2e_009_save_duplicate_period() {
    let router = create_router_for_test();

    post_json(
        router.clone(),
        "/payroll/calculate",
        calculate_body(1001, 2024, 3),
    )
    .await;

    let (status, body) = post_json(
        router,
        "/payroll",
        json!({
            "employee_id": 1001,
            "month": 3,
            "year": 2024,
            "base_salary": "75000",
            "deductions": "0",
            "bonuses": "0"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "DUPLICATE_PERIOD");
}

/// E2E-010: updating an existing record keeps its id and recomputes net
#[tokio::test]
async fn test_e2e_010_save_updates_existing() {
    let router = create_router_for_test();

    let (_, created) = post_json(
        router.clone(),
        "/payroll/calculate",
        calculate_body(1001, 2024, 3),
    )
    .await;
    let id = created["id"].as_u64().unwrap();

    let (status, updated) = post_json(
        router.clone(),
        "/payroll",
        json!({
            "id": id,
            "employee_id": 1001,
            "month": 3,
            "year": 2024,
            "base_salary": "75000",
            "deductions": "11250",
            "bonuses": "2000"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"].as_u64().unwrap(), id);
    assert_eq!(updated["net_salary"], "65750");

    let (_, listed) = get(router, "/payroll").await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

/// E2E-011: save without an employee is 400 naming the field
#[tokio::test]
async fn test_e2e_011_save_validation() {
    let router = create_router_for_test();

    let (status, body) = post_json(
        router,
        "/payroll",
        json!({
            "employee_id": 0,
            "month": 3,
            "year": 2024,
            "base_salary": "100",
            "deductions": "0",
            "bonuses": "0"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["message"].as_str().unwrap().contains("employee_id"));
}

// =============================================================================
// Deletion
// =============================================================================

/// E2E-012: delete is terminal; save and recalculate both 404 afterwards
#[tokio::test]
async fn test_e2e_012_delete_is_terminal() {
    let router = create_router_for_test();

    let (_, created) = post_json(
        router.clone(),
        "/payroll/calculate",
        calculate_body(1001, 2024, 3),
    )
    .await;
    let id = created["id"].as_u64().unwrap();

    let (status, _) = delete(router.clone(), &format!("/payroll/{}", id)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = post_empty(router.clone(), &format!("/payroll/{}/recalculate", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = post_json(
        router.clone(),
        "/payroll",
        json!({
            "id": id,
            "employee_id": 1001,
            "month": 3,
            "year": 2024,
            "base_salary": "75000",
            "deductions": "0",
            "bonuses": "0"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = delete(router, &format!("/payroll/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Listing and filtering
// =============================================================================

/// E2E-013: listings come back most recent period first
#[tokio::test]
async fn test_e2e_013_list_ordering() {
    let router = create_router_for_test();

    for (year, month) in [(2024, 3), (2023, 12), (2024, 4)] {
        let (status, _) = post_json(
            router.clone(),
            "/payroll/calculate",
            calculate_body(1001, year, month),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = get(router, "/payroll").await;
    assert_eq!(status, StatusCode::OK);

    let periods: Vec<(i64, i64)> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| (r["year"].as_i64().unwrap(), r["month"].as_i64().unwrap()))
        .collect();
    assert_eq!(periods, vec![(2024, 4), (2024, 3), (2023, 12)]);
}

/// E2E-014: period query restricts the listing to the exact tuple
#[tokio::test]
async fn test_e2e_014_list_filtered_by_period() {
    let router = create_router_for_test();

    post_json(
        router.clone(),
        "/payroll/calculate",
        calculate_body(1001, 2024, 3),
    )
    .await;
    post_json(
        router.clone(),
        "/payroll/calculate",
        calculate_body(1001, 2024, 4),
    )
    .await;

    let (status, body) = get(router, "/payroll?month=3&year=2024").await;
    assert_eq!(status, StatusCode::OK);

    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["month"].as_i64().unwrap(), 3);
    assert_eq!(records[0]["year"].as_i64().unwrap(), 2024);
}

/// E2E-015: the filter view projects a fetched listing without reordering
#[tokio::test]
async fn test_e2e_015_filter_view_over_listing() {
    let router = create_router_for_test();

    for (employee, month) in [(1001, 3), (2002, 3), (1001, 4)] {
        post_json(
            router.clone(),
            "/payroll/calculate",
            calculate_body(employee, 2024, month),
        )
        .await;
    }

    let (_, body) = get(router, "/payroll").await;
    let records: Vec<PayrollRecord> = serde_json::from_value(body).unwrap();

    let march = PayrollFilter::ByPeriod(Period::new(2024, 3)).apply(&records);
    assert_eq!(march.len(), 2);
    assert_eq!(march[0].employee_id, 1001);
    assert_eq!(march[1].employee_id, 2002);

    let all = PayrollFilter::All.apply(&records);
    assert_eq!(all, records);
}
