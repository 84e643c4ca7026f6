//! Employee model and the draft used to create or replace one.
//!
//! [`Employee`] is the stored record. [`EmployeeDraft`] carries every
//! replaceable field and owns the validation rules shared by add and edit.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Bonus;
use crate::error::{EngineError, EngineResult};

/// Represents an employee tracked by the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Sequential identifier assigned by the registry.
    pub id: u64,
    /// The employee's first name.
    pub first_name: String,
    /// The employee's last name.
    pub last_name: String,
    /// Name of the department bucket the employee belongs to.
    pub department: String,
    /// Hourly wage.
    pub wage: Decimal,
    /// Hours worked in the pay period.
    pub hours: Decimal,
    /// The bonus currently attached to the employee.
    #[serde(default)]
    pub bonus: Bonus,
}

impl Employee {
    /// Returns "first last", the label used wherever employees are listed.
    ///
    /// # Examples
    ///
    /// ```
    /// use hr_payroll::models::{Bonus, Employee};
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: 1,
    ///     first_name: "Ada".to_string(),
    ///     last_name: "Lovelace".to_string(),
    ///     department: "Development Team".to_string(),
    ///     wage: Decimal::new(20, 0),
    ///     hours: Decimal::new(100, 0),
    ///     bonus: Bonus::None,
    /// };
    /// assert_eq!(employee.full_name(), "Ada Lovelace");
    /// ```
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Wage multiplied by hours, before any bonus.
    pub fn base_pay(&self) -> Decimal {
        self.wage * self.hours
    }

    /// Fails when wage, hours and the largest bonus cannot be combined into
    /// a gross salary without overflowing.
    ///
    /// Drafts are checked by [`EmployeeDraft::validate`]; this covers
    /// records that arrive from a store.
    pub fn check_payable(&self) -> EngineResult<()> {
        require_payable(self.wage, self.hours)
    }

    pub(crate) fn from_draft(id: u64, draft: EmployeeDraft, department: String) -> Self {
        Self {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            department,
            wage: draft.wage,
            hours: draft.hours,
            bonus: Bonus::None,
        }
    }

    pub(crate) fn apply_draft(&mut self, draft: EmployeeDraft, department: String) {
        self.first_name = draft.first_name;
        self.last_name = draft.last_name;
        self.department = department;
        self.wage = draft.wage;
        self.hours = draft.hours;
    }
}

/// The replaceable fields of an employee, as submitted by a caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDraft {
    /// The employee's first name.
    pub first_name: String,
    /// The employee's last name.
    pub last_name: String,
    /// The chosen department, if one was picked.
    pub department: Option<String>,
    /// Hourly wage.
    pub wage: Decimal,
    /// Hours worked in the pay period.
    pub hours: Decimal,
}

impl EmployeeDraft {
    /// Builds a draft from already-typed values.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        department: impl Into<String>,
        wage: Decimal,
        hours: Decimal,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            department: Some(department.into()),
            wage,
            hours,
        }
    }

    /// Builds a draft from raw form text.
    ///
    /// Wage and hours must parse as decimal numbers; anything else is a
    /// validation error naming the field.
    ///
    /// # Examples
    ///
    /// ```
    /// use hr_payroll::models::EmployeeDraft;
    ///
    /// let draft = EmployeeDraft::from_text("Ada", "Lovelace", Some("Sales"), "20.50", "38").unwrap();
    /// assert_eq!(draft.wage.to_string(), "20.50");
    ///
    /// assert!(EmployeeDraft::from_text("Ada", "Lovelace", Some("Sales"), "twenty", "38").is_err());
    /// ```
    pub fn from_text(
        first_name: &str,
        last_name: &str,
        department: Option<&str>,
        wage: &str,
        hours: &str,
    ) -> EngineResult<Self> {
        Ok(Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            department: department.map(str::to_string),
            wage: parse_number("wage", wage)?,
            hours: parse_number("hours", hours)?,
        })
    }

    /// Checks every field without consulting the department list.
    ///
    /// Returns the department name on success so callers do not have to
    /// unwrap it a second time.
    pub fn validate(&self) -> EngineResult<&str> {
        require_text("first_name", &self.first_name)?;
        require_text("last_name", &self.last_name)?;

        let department = match self.department.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => return Err(EngineError::validation("department", "a department is required")),
        };

        require_non_negative("wage", self.wage)?;
        require_non_negative("hours", self.hours)?;
        require_payable(self.wage, self.hours)?;

        Ok(department)
    }
}

fn require_text(field: &str, value: &str) -> EngineResult<()> {
    if value.trim().is_empty() {
        return Err(EngineError::validation(field, "must not be empty"));
    }
    Ok(())
}

fn require_non_negative(field: &str, value: Decimal) -> EngineResult<()> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(EngineError::validation(
            field,
            format!("must be a non-negative number, got {}", value),
        ));
    }
    Ok(())
}

fn require_payable(wage: Decimal, hours: Decimal) -> EngineResult<()> {
    let largest_bonus = Bonus::ALL
        .iter()
        .map(Bonus::amount)
        .max()
        .unwrap_or_default();

    wage.checked_mul(hours)
        .and_then(|base| base.checked_add(largest_bonus))
        .map(|_| ())
        .ok_or_else(|| {
            EngineError::validation(
                "wage",
                format!("{} an hour for {} hours is too large to pay", wage, hours),
            )
        })
}

fn parse_number(field: &str, text: &str) -> EngineResult<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(EngineError::validation(field, "must not be empty"));
    }
    Decimal::from_str(trimmed).map_err(|_| {
        EngineError::validation(field, format!("'{}' is not a valid number", trimmed))
    })
}
