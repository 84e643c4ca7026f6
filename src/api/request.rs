//! Request types for the payroll API.
//!
//! Employee fields are accepted leniently (missing text defaults to empty,
//! numbers may arrive as JSON numbers or strings) so that bad input reaches
//! the registry's validation and comes back as a `VALIDATION_ERROR` naming
//! the field, rather than as a generic JSON rejection.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{Bonus, EmployeeDraft};

/// A numeric form field as submitted by a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberInput {
    /// A JSON number, e.g. `20.5`.
    Number(serde_json::Number),
    /// A string that should contain a number, e.g. `"20.50"`.
    Text(String),
}

impl NumberInput {
    /// JSON numbers written in exponent form (`1e20`, `1.5e-7`) are expanded
    /// so they parse like any other decimal.
    fn as_text(&self) -> String {
        match self {
            NumberInput::Number(number) => {
                let text = number.to_string();
                if text.contains(['e', 'E']) {
                    Decimal::from_scientific(&text)
                        .map(|value| value.to_string())
                        .unwrap_or(text)
                } else {
                    text
                }
            }
            NumberInput::Text(text) => text.clone(),
        }
    }
}

impl Default for NumberInput {
    fn default() -> Self {
        NumberInput::Text(String::new())
    }
}

/// Request body for creating or replacing an employee.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// The employee's first name.
    #[serde(default)]
    pub first_name: String,
    /// The employee's last name.
    #[serde(default)]
    pub last_name: String,
    /// The department to place the employee in.
    #[serde(default)]
    pub department: Option<String>,
    /// Hourly wage.
    #[serde(default)]
    pub wage: NumberInput,
    /// Hours worked in the pay period.
    #[serde(default)]
    pub hours: NumberInput,
}

impl EmployeeRequest {
    /// Parses the request into a draft for the registry.
    pub fn into_draft(self) -> EngineResult<EmployeeDraft> {
        EmployeeDraft::from_text(
            &self.first_name,
            &self.last_name,
            self.department.as_deref(),
            &self.wage.as_text(),
            &self.hours.as_text(),
        )
    }
}

/// Request body for `PUT /employees/{id}/bonus`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BonusRequest {
    /// Bonus code such as `"none"`, `"5000"` or `"$5000"`.
    pub bonus: String,
}

impl BonusRequest {
    /// Parses the bonus code.
    pub fn bonus(&self) -> EngineResult<Bonus> {
        Bonus::from_code(&self.bonus)
    }
}

/// Query string for `GET /employees/{id}/payroll`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PayrollQuery {
    /// Optional bonus to preview instead of the stored one.
    #[serde(default)]
    pub bonus: Option<String>,
}

impl PayrollQuery {
    /// Parses the optional bonus selection.
    pub fn bonus_selection(&self) -> EngineResult<Option<Bonus>> {
        self.bonus.as_deref().map(Bonus::from_code).transpose()
    }
}
