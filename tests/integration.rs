//! Integration tests for the payroll engine.
//!
//! This test suite drives the HTTP API end to end:
//! - Department listing
//! - Employee add / edit / delete and bucket membership
//! - Validation and unknown department errors
//! - Bonus selection and payroll figures
//! - Persistence through the JSON file store

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tempfile::tempdir;
use tower::ServiceExt;

use hr_payroll::api::{AppState, create_router};
use hr_payroll::registry::{DEFAULT_DEPARTMENTS, Registry};
use hr_payroll::store::{JsonFileStore, MemoryStore};

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let registry = Registry::initialize(MemoryStore::new()).expect("Failed to initialize registry");
    AppState::new(registry)
}

fn router(state: &AppState) -> Router {
    create_router(state.clone())
}

/// Normalize decimal string by removing trailing zeros after decimal point
fn normalize_decimal(s: &str) -> String {
    Decimal::from_str(s).unwrap().normalize().to_string()
}

fn assert_decimal(value: &Value, expected: &str) {
    let actual = value.as_str().unwrap_or_else(|| panic!("not a decimal string: {value}"));
    assert_eq!(
        normalize_decimal(actual),
        normalize_decimal(expected),
        "Expected {}, got {}",
        expected,
        actual
    );
}

async fn send(state: &AppState, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router(state).oneshot(request).await.unwrap();

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

fn employee_body(first: &str, last: &str, department: &str, wage: Value, hours: Value) -> Value {
    json!({
        "first_name": first,
        "last_name": last,
        "department": department,
        "wage": wage,
        "hours": hours
    })
}

async fn add(state: &AppState, first: &str, department: &str) -> Value {
    let (status, body) = send(
        state,
        "POST",
        "/employees",
        Some(employee_body(first, "Doe", department, json!(20), json!(100))),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "unexpected body: {body}");
    body
}

async fn members_of(state: &AppState, department: &str) -> Vec<u64> {
    let (_, departments) = send(state, "GET", "/departments", None).await;
    departments
        .as_array()
        .unwrap()
        .iter()
        .find(|d| d["name"] == department)
        .unwrap()["members"]
        .as_array()
        .unwrap()
        .iter()
        .map(|id| id.as_u64().unwrap())
        .collect()
}

// =============================================================================
// SECTION 1: Departments and Employee Lifecycle
// =============================================================================

#[tokio::test]
async fn test_departments_are_fixed_and_ordered() {
    let state = create_test_state();
    let (status, body) = send(&state, "GET", "/departments", None).await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, DEFAULT_DEPARTMENTS);
}

#[tokio::test]
async fn test_create_employee_assigns_id_and_bucket() {
    let state = create_test_state();
    let body = add(&state, "Jane", "Sales").await;

    assert_eq!(body["id"], 1);
    assert_eq!(body["bonus"], "none");
    assert_eq!(body["department"], "Sales");
    assert_eq!(members_of(&state, "Sales").await, vec![1]);

    let second = add(&state, "John", "Sales").await;
    assert_eq!(second["id"], 2);
    assert_eq!(members_of(&state, "Sales").await, vec![1, 2]);
}

#[tokio::test]
async fn test_list_and_get_employee() {
    let state = create_test_state();
    add(&state, "Jane", "Sales").await;
    add(&state, "John", "Marketing").await;

    let (status, list) = send(&state, "GET", "/employees", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 2);
    assert_eq!(list[0]["first_name"], "Jane");

    let (status, employee) = send(&state, "GET", "/employees/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(employee["first_name"], "John");

    let (status, error) = send(&state, "GET", "/employees/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "EMPLOYEE_NOT_FOUND");
}

#[tokio::test]
async fn test_update_moves_employee_to_new_bucket() {
    let state = create_test_state();
    add(&state, "Jane", "Sales").await;

    let (status, body) = send(
        &state,
        "PUT",
        "/employees/1",
        Some(employee_body("Jane", "Smith", "Accounting", json!("25.50"), json!(40))),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["last_name"], "Smith");
    assert_decimal(&body["wage"], "25.5");
    assert!(members_of(&state, "Sales").await.is_empty());
    assert_eq!(members_of(&state, "Accounting").await, vec![1]);
    state.registry().check_consistency().unwrap();
}

#[tokio::test]
async fn test_update_in_same_department_does_not_duplicate_membership() {
    let state = create_test_state();
    add(&state, "Jane", "Sales").await;

    for hours in [10, 20, 30] {
        let (status, _) = send(
            &state,
            "PUT",
            "/employees/1",
            Some(employee_body("Jane", "Doe", "Sales", json!(20), json!(hours))),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    assert_eq!(members_of(&state, "Sales").await, vec![1]);
}

#[tokio::test]
async fn test_delete_removes_employee_everywhere() {
    let state = create_test_state();
    add(&state, "Jane", "Sales").await;
    add(&state, "John", "Sales").await;

    let (status, _) = send(&state, "DELETE", "/employees/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, list) = send(&state, "GET", "/employees", None).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(members_of(&state, "Sales").await, vec![2]);

    let (status, _) = send(&state, "DELETE", "/employees/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// SECTION 2: Error Cases
// =============================================================================

#[tokio::test]
async fn test_empty_first_name_is_validation_error() {
    let state = create_test_state();
    let (status, body) = send(
        &state,
        "POST",
        "/employees",
        Some(employee_body("", "Doe", "Sales", json!(10), json!(5))),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["message"].as_str().unwrap().contains("first_name"));
}

#[tokio::test]
async fn test_negative_wage_is_validation_error() {
    let state = create_test_state();
    let (status, body) = send(
        &state,
        "POST",
        "/employees",
        Some(employee_body("A", "B", "Sales", json!(-1), json!(5))),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_non_numeric_hours_is_validation_error() {
    let state = create_test_state();
    let (status, body) = send(
        &state,
        "POST",
        "/employees",
        Some(employee_body("A", "B", "Sales", json!(10), json!("lots"))),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["message"].as_str().unwrap().contains("hours"));
}

#[tokio::test]
async fn test_missing_department_is_validation_error() {
    let state = create_test_state();
    let (status, body) = send(
        &state,
        "POST",
        "/employees",
        Some(json!({"first_name": "A", "last_name": "B", "wage": 10, "hours": 5})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_unknown_department_is_rejected_without_side_effects() {
    let state = create_test_state();
    let (status, body) = send(
        &state,
        "POST",
        "/employees",
        Some(employee_body("A", "B", "Nonexistent", json!(10), json!(5))),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "UNKNOWN_DEPARTMENT");

    let (_, list) = send(&state, "GET", "/employees", None).await;
    assert!(list.as_array().unwrap().is_empty());

    // The failed add must not consume an id.
    assert_eq!(add(&state, "Jane", "Sales").await["id"], 1);
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let state = create_test_state();
    let request = Request::builder()
        .method("POST")
        .uri("/employees")
        .header("Content-Type", "application/json")
        .body(Body::from("{ not json"))
        .unwrap();

    let response = router(&state).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_update_unknown_employee_is_not_found() {
    let state = create_test_state();
    let (status, body) = send(
        &state,
        "PUT",
        "/employees/42",
        Some(employee_body("A", "B", "Sales", json!(10), json!(5))),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "EMPLOYEE_NOT_FOUND");
}

// =============================================================================
// SECTION 3: Bonus and Payroll
// =============================================================================

#[tokio::test]
async fn test_payroll_reference_scenario() {
    let state = create_test_state();
    add(&state, "Jane", "Sales").await;

    let (status, body) = send(
        &state,
        "PUT",
        "/employees/1/bonus",
        Some(json!({"bonus": "$5000"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bonus"], "5000");

    let (status, body) = send(&state, "GET", "/employees/1/payroll", None).await;
    assert_eq!(status, StatusCode::OK);

    let summary = &body["summary"];
    assert_decimal(&summary["base_pay"], "2000");
    assert_decimal(&summary["gross_salary"], "7000");
    assert_decimal(&summary["tax_rate"], "0.10");
    assert_decimal(&summary["tax_amount"], "700");
    assert_decimal(&summary["deductions"], "140");
    assert_decimal(&summary["net_pay"], "6160");

    assert_eq!(body["display"]["total_salary"], "$7000.00");
    assert_eq!(body["display"]["tax_rate"], "10.00%");
    assert_eq!(body["display"]["taxes"], "$700.00");
    assert_eq!(body["display"]["deductions"], "$140.00");
    assert_eq!(body["display"]["bonus"], "$5000");

    let labels: Vec<&str> = body["distribution"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["label"].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["Salary", "Taxes", "Deductions", "Bonus"]);
}

#[tokio::test]
async fn test_payroll_without_bonus_has_three_slices() {
    let state = create_test_state();
    add(&state, "Jane", "Sales").await;

    let (status, body) = send(&state, "GET", "/employees/1/payroll", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["distribution"].as_array().unwrap().len(), 3);
    assert_decimal(&body["summary"]["gross_salary"], "2000");
}

#[tokio::test]
async fn test_payroll_bonus_preview_does_not_store_bonus() {
    let state = create_test_state();
    add(&state, "Jane", "Sales").await;

    let (status, body) = send(&state, "GET", "/employees/1/payroll?bonus=10000", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_decimal(&body["summary"]["gross_salary"], "12000");

    let (_, employee) = send(&state, "GET", "/employees/1", None).await;
    assert_eq!(employee["bonus"], "none");
}

#[tokio::test]
async fn test_payroll_upper_bracket() {
    let state = create_test_state();
    let (status, _) = send(
        &state,
        "POST",
        "/employees",
        Some(employee_body("Rich", "Person", "Project Management", json!(100), json!(1000))),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = send(&state, "GET", "/employees/1/payroll?bonus=5000", None).await;
    assert_decimal(&body["summary"]["gross_salary"], "105000");
    assert_decimal(&body["summary"]["tax_rate"], "0.30");
    assert_eq!(body["display"]["tax_rate"], "30.00%");
}

#[tokio::test]
async fn test_invalid_bonus_is_rejected() {
    let state = create_test_state();
    add(&state, "Jane", "Sales").await;

    let (status, body) = send(
        &state,
        "PUT",
        "/employees/1/bonus",
        Some(json!({"bonus": "2500"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_BONUS");

    let (status, body) = send(&state, "GET", "/employees/1/payroll?bonus=7", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_BONUS");
}

#[tokio::test]
async fn test_payroll_for_missing_employee_is_not_found() {
    let state = create_test_state();
    let (status, body) = send(&state, "GET", "/employees/3/payroll", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "EMPLOYEE_NOT_FOUND");
}

// =============================================================================
// SECTION 4: Persistence
// =============================================================================

#[tokio::test]
async fn test_persist_round_trips_through_json_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data/employees.json");

    let state = AppState::new(Registry::initialize(JsonFileStore::new(&path)).unwrap());
    add(&state, "Jane", "Sales").await;
    add(&state, "John", "Marketing").await;
    send(&state, "DELETE", "/employees/1", None).await;
    send(&state, "PUT", "/employees/2/bonus", Some(json!({"bonus": "1000"}))).await;

    let (status, _) = send(&state, "POST", "/persist", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let reloaded = Registry::initialize(JsonFileStore::new(&path)).unwrap();
    assert_eq!(reloaded.list_employees().len(), 1);
    let john = reloaded.get_employee(2).unwrap();
    assert_eq!(john.first_name, "John");
    assert!(reloaded.department("Marketing").unwrap().contains(2));
    assert_eq!(reloaded.next_id(), 3);
    reloaded.check_consistency().unwrap();
}

#[tokio::test]
async fn test_first_run_without_data_file_starts_empty() {
    let dir = tempdir().unwrap();
    let registry = Registry::initialize(JsonFileStore::new(dir.path().join("employees.json"))).unwrap();
    let state = AppState::new(registry);

    let (status, list) = send(&state, "GET", "/employees", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_persists_leave_latest_snapshot_on_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("employees.json");
    let state = AppState::new(Registry::initialize(JsonFileStore::new(&path)).unwrap());

    let tasks: Vec<_> = (0..20)
        .map(|i| {
            let state = state.clone();
            tokio::spawn(async move {
                add(&state, "Worker", DEFAULT_DEPARTMENTS[i % DEFAULT_DEPARTMENTS.len()]).await;
                let (status, _) = send(&state, "POST", "/persist", None).await;
                assert_eq!(status, StatusCode::NO_CONTENT);
            })
        })
        .collect();
    for task in tasks {
        task.await.unwrap();
    }

    // Every add precedes its own save, so the last save taken holds all 20.
    let reloaded = Registry::initialize(JsonFileStore::new(&path)).unwrap();
    assert_eq!(reloaded.list_employees().len(), 20);
    assert_eq!(reloaded.list_employees(), state.registry().list_employees());
    reloaded.check_consistency().unwrap();
}

// =============================================================================
// SECTION 5: Concurrent Callers
// =============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_adds_keep_ids_unique_and_buckets_consistent() {
    let state = create_test_state();

    let tasks: Vec<_> = (0..40)
        .map(|i| {
            let state = state.clone();
            tokio::spawn(async move {
                let department = DEFAULT_DEPARTMENTS[i % DEFAULT_DEPARTMENTS.len()];
                let (status, body) = send(
                    &state,
                    "POST",
                    "/employees",
                    Some(employee_body("Worker", "Bee", department, json!(15), json!(i))),
                )
                .await;
                assert_eq!(status, StatusCode::CREATED);
                body["id"].as_u64().unwrap()
            })
        })
        .collect();

    let mut ids = Vec::new();
    for task in tasks {
        ids.push(task.await.unwrap());
    }
    ids.sort_unstable();
    assert_eq!(ids, (1..=40).collect::<Vec<u64>>());

    let registry = state.registry();
    assert_eq!(registry.list_employees().len(), 40);
    registry.check_consistency().unwrap();
}
