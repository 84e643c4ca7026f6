//! Payroll calculation logic.
//!
//! This module contains the pure functions that derive payroll figures from
//! an employee record: bonus amount, gross salary, tiered tax rate, tax
//! amount, flat deductions, the combined payroll summary with its chart
//! distribution, and the two-decimal display formatting applied on top.
//! None of these functions touch the registry.

mod deductions;
mod format;
mod gross_salary;
mod payroll;
mod tax;

pub use deductions::{DEDUCTION_RATE, deductions};
pub use format::{format_currency, format_percent};
pub use gross_salary::{bonus_amount, bonus_amount_for_code, gross_salary, gross_salary_with_bonus};
pub use payroll::{calculate_payroll, distribution};
pub use tax::{
    LOWER_BRACKET_CEILING, LOWER_BRACKET_RATE, MIDDLE_BRACKET_CEILING, MIDDLE_BRACKET_RATE,
    UPPER_BRACKET_RATE, tax_amount, tax_rate,
};
