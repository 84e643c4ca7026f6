//! HTTP API module for the payroll engine.
//!
//! This module exposes the registry and the payroll calculator as a REST
//! API: department and employee listing, employee add/edit/delete, bonus
//! selection, payroll figures and an explicit persist call.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{BonusRequest, EmployeeRequest, NumberInput, PayrollQuery};
pub use response::{ApiError, ApiErrorResponse, PayrollDisplay, PayrollResponse};
pub use state::AppState;
