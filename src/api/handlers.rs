//! HTTP request handlers for the payroll API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_payroll;
use crate::error::EngineError;
use crate::models::{Department, Employee};

use super::request::{BonusRequest, EmployeeRequest, PayrollQuery};
use super::response::{ApiError, ApiErrorResponse, PayrollResponse};
use super::state::AppState;

type ApiResult<T> = Result<T, ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/departments", get(list_departments))
        .route("/employees", get(list_employees).post(create_employee))
        .route(
            "/employees/:id",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
        .route("/employees/:id/bonus", put(set_bonus))
        .route("/employees/:id/payroll", get(payroll))
        .route("/persist", post(persist))
        .with_state(state)
}

/// Maps a body rejection to a `MALFORMED_JSON` response.
fn reject_body(correlation_id: Uuid, rejection: JsonRejection) -> ApiErrorResponse {
    warn!(
        correlation_id = %correlation_id,
        error = %rejection.body_text(),
        "Rejected request body"
    );
    let error = match rejection {
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        other => ApiError::malformed_json(other.body_text()),
    };
    ApiErrorResponse::bad_request(error)
}

/// Logs a failed operation and converts it to a response.
fn fail(correlation_id: Uuid, operation: &str, error: EngineError) -> ApiErrorResponse {
    warn!(
        correlation_id = %correlation_id,
        operation,
        error = %error,
        "Request failed"
    );
    error.into()
}

/// Handler for GET /departments.
async fn list_departments(State(state): State<AppState>) -> Json<Vec<Department>> {
    Json(state.registry().list_departments().to_vec())
}

/// Handler for GET /employees.
async fn list_employees(State(state): State<AppState>) -> Json<Vec<Employee>> {
    Json(state.registry().list_employees().to_vec())
}

/// Handler for GET /employees/{id}.
async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<Json<Employee>> {
    state
        .registry()
        .get_employee(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| EngineError::EmployeeNotFound { id }.into())
}

/// Handler for POST /employees.
async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let Json(request) = payload.map_err(|r| reject_body(correlation_id, r))?;

    let employee = request
        .into_draft()
        .and_then(|draft| state.registry().add_employee(draft))
        .map_err(|e| fail(correlation_id, "create_employee", e))?;

    info!(
        correlation_id = %correlation_id,
        employee_id = employee.id,
        "Employee created"
    );
    Ok((StatusCode::CREATED, Json(employee)))
}

/// Handler for PUT /employees/{id}.
async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> ApiResult<Json<Employee>> {
    let correlation_id = Uuid::new_v4();
    let Json(request) = payload.map_err(|r| reject_body(correlation_id, r))?;

    let employee = request
        .into_draft()
        .and_then(|draft| state.registry().edit_employee(id, draft))
        .map_err(|e| fail(correlation_id, "update_employee", e))?;

    info!(correlation_id = %correlation_id, employee_id = id, "Employee updated");
    Ok(Json(employee))
}

/// Handler for DELETE /employees/{id}.
async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<StatusCode> {
    let correlation_id = Uuid::new_v4();
    state
        .registry()
        .delete_employee(id)
        .map_err(|e| fail(correlation_id, "delete_employee", e))?;

    info!(correlation_id = %correlation_id, employee_id = id, "Employee removed");
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for PUT /employees/{id}/bonus.
async fn set_bonus(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    payload: Result<Json<BonusRequest>, JsonRejection>,
) -> ApiResult<Json<Employee>> {
    let correlation_id = Uuid::new_v4();
    let Json(request) = payload.map_err(|r| reject_body(correlation_id, r))?;

    let employee = request
        .bonus()
        .and_then(|bonus| state.registry().set_bonus(id, bonus))
        .map_err(|e| fail(correlation_id, "set_bonus", e))?;

    Ok(Json(employee))
}

/// Handler for GET /employees/{id}/payroll.
///
/// The optional `bonus` query previews a bonus without storing it.
async fn payroll(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Query(query): Query<PayrollQuery>,
) -> ApiResult<Json<PayrollResponse>> {
    let correlation_id = Uuid::new_v4();
    let bonus_selection = query
        .bonus_selection()
        .map_err(|e| fail(correlation_id, "payroll", e))?;

    let employee = state
        .registry()
        .get_employee(id)
        .cloned()
        .ok_or_else(|| fail(correlation_id, "payroll", EngineError::EmployeeNotFound { id }))?;

    let summary = calculate_payroll(&employee, bonus_selection);
    info!(
        correlation_id = %correlation_id,
        employee_id = id,
        gross_salary = %summary.gross_salary,
        "Payroll calculated"
    );
    Ok(Json(PayrollResponse::new(employee, summary)))
}

/// Handler for POST /persist.
///
/// The snapshot is taken under the registry lock; the file write runs on the
/// blocking pool so other requests keep being served.
async fn persist(State(state): State<AppState>) -> ApiResult<StatusCode> {
    let correlation_id = Uuid::new_v4();
    let _permit = state.persist_permit().await;

    let (store, employees) = {
        let registry = state.registry();
        (registry.store(), registry.list_employees().to_vec())
    };
    let count = employees.len();

    tokio::task::spawn_blocking(move || store.save(&employees))
        .await
        .map_err(|e| {
            fail(
                correlation_id,
                "persist",
                EngineError::Persistence {
                    path: "employee store".to_string(),
                    message: format!("save task failed: {e}"),
                },
            )
        })?
        .map_err(|e| fail(correlation_id, "persist", e))?;

    info!(correlation_id = %correlation_id, employees = count, "Registry persisted");
    Ok(StatusCode::NO_CONTENT)
}
