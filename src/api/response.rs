//! Response types for the payroll API.
//!
//! This module defines the payroll response body and the error response
//! structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::calculation::{format_currency, format_percent};
use crate::error::EngineError;
use crate::models::{DistributionSlice, Employee, PayrollSummary};

/// Body returned by `GET /employees/{id}/payroll`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollResponse {
    /// The employee the figures were calculated for.
    pub employee: Employee,
    /// Exact figures.
    pub summary: PayrollSummary,
    /// Chart slices. The bonus slice repeats money already in the salary slice.
    pub distribution: Vec<DistributionSlice>,
    /// Figures rounded for display.
    pub display: PayrollDisplay,
}

impl PayrollResponse {
    /// Builds the response from an employee and its calculated summary.
    pub fn new(employee: Employee, summary: PayrollSummary) -> Self {
        let distribution = summary.distribution().slices();
        let display = PayrollDisplay::from(&summary);
        Self {
            employee,
            summary,
            distribution,
            display,
        }
    }
}

/// Payroll figures formatted to two decimal places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollDisplay {
    /// e.g. `"$7000.00"`.
    pub total_salary: String,
    /// e.g. `"10.00%"`.
    pub tax_rate: String,
    /// e.g. `"$700.00"`.
    pub taxes: String,
    /// e.g. `"$140.00"`.
    pub deductions: String,
    /// e.g. `"$6160.00"`.
    pub net_pay: String,
    /// e.g. `"$5000"` or `"None"`.
    pub bonus: String,
}

impl From<&PayrollSummary> for PayrollDisplay {
    fn from(summary: &PayrollSummary) -> Self {
        Self {
            total_salary: format_currency(summary.gross_salary),
            tax_rate: format_percent(summary.tax_rate),
            taxes: format_currency(summary.tax_amount),
            deductions: format_currency(summary.deductions),
            net_pay: format_currency(summary.net_pay),
            bonus: summary.bonus.to_string(),
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::Validation { field, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    message,
                    format!("Correct the '{}' field and resubmit", field),
                ),
            },
            EngineError::UnknownDepartment { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "UNKNOWN_DEPARTMENT",
                    message,
                    "GET /departments lists the valid department names",
                ),
            },
            EngineError::InvalidBonus { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_BONUS",
                    message,
                    "Valid bonuses are none, 1000, 5000 and 10000",
                ),
            },
            EngineError::EmployeeNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("EMPLOYEE_NOT_FOUND", message),
            },
            EngineError::RegistryInconsistent { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::new("REGISTRY_INCONSISTENT", message),
            },
            EngineError::IdsExhausted { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::new("IDS_EXHAUSTED", message),
            },
            EngineError::Persistence { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "PERSISTENCE_ERROR",
                    "Failed to save employee data",
                    message,
                ),
            },
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                }
            }
        }
    }
}
