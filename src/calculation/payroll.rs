//! Full payroll calculation for one employee.
//!
//! Combines gross salary, tax and deductions into a [`PayrollSummary`] and
//! exposes the chart [`PayDistribution`] derived from it.

use crate::models::{Bonus, Employee, PayDistribution, PayrollSummary};

use super::{bonus_amount, deductions, gross_salary_with_bonus, tax_amount, tax_rate};

/// Calculates every payroll figure for an employee.
///
/// `bonus_selection` previews a different bonus without touching the record;
/// `None` uses the employee's stored bonus.
///
/// # Examples
///
/// ```
/// use hr_payroll::calculation::calculate_payroll;
/// use hr_payroll::models::{Bonus, Employee};
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: 1,
///     first_name: "Jane".to_string(),
///     last_name: "Doe".to_string(),
///     department: "Sales".to_string(),
///     wage: Decimal::new(20, 0),
///     hours: Decimal::new(100, 0),
///     bonus: Bonus::None,
/// };
///
/// let summary = calculate_payroll(&employee, Some(Bonus::FiveThousand));
/// assert_eq!(summary.gross_salary, Decimal::new(7000, 0));
/// assert_eq!(summary.tax_amount, Decimal::new(700, 0));
/// assert_eq!(summary.deductions, Decimal::new(140, 0));
/// ```
pub fn calculate_payroll(employee: &Employee, bonus_selection: Option<Bonus>) -> PayrollSummary {
    let bonus = bonus_selection.unwrap_or(employee.bonus);
    let gross = gross_salary_with_bonus(employee, bonus);
    let tax = tax_amount(gross);
    let deducted = deductions(gross);

    PayrollSummary {
        employee_id: employee.id,
        base_pay: employee.base_pay(),
        bonus,
        bonus_amount: bonus_amount(bonus),
        gross_salary: gross,
        tax_rate: tax_rate(gross),
        tax_amount: tax,
        deductions: deducted,
        net_pay: gross - tax - deducted,
    }
}

/// Returns the chart breakdown for an employee's stored bonus.
///
/// The bonus slice is included only when a bonus is set.
pub fn distribution(employee: &Employee) -> PayDistribution {
    calculate_payroll(employee, None).distribution()
}
