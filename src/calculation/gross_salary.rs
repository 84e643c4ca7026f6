//! Gross salary and bonus amount calculation.
//!
//! Gross salary is hourly earnings plus whatever bonus is attached to the
//! employee. No rounding happens here.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{Bonus, Employee};

/// Returns the monetary value of a bonus selection.
///
/// # Examples
///
/// ```
/// use hr_payroll::calculation::bonus_amount;
/// use hr_payroll::models::Bonus;
/// use rust_decimal::Decimal;
///
/// assert_eq!(bonus_amount(Bonus::None), Decimal::ZERO);
/// assert_eq!(bonus_amount(Bonus::TenThousand), Decimal::new(10000, 0));
/// ```
pub fn bonus_amount(bonus: Bonus) -> Decimal {
    bonus.amount()
}

/// Returns the value of a bonus given as a raw code.
///
/// Codes outside the fixed set fail with `InvalidBonus`; they are never
/// treated as zero.
///
/// # Examples
///
/// ```
/// use hr_payroll::calculation::bonus_amount_for_code;
/// use rust_decimal::Decimal;
///
/// assert_eq!(bonus_amount_for_code("$5000").unwrap(), Decimal::new(5000, 0));
/// assert!(bonus_amount_for_code("$1234").is_err());
/// ```
pub fn bonus_amount_for_code(code: &str) -> EngineResult<Decimal> {
    Bonus::from_code(code).map(bonus_amount)
}

/// Calculates gross salary as `wage * hours + bonus`.
///
/// # Examples
///
/// ```
/// use hr_payroll::calculation::gross_salary;
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
///     bonus: Bonus::FiveThousand,
/// };
/// assert_eq!(gross_salary(&employee), Decimal::new(7000, 0));
/// ```
pub fn gross_salary(employee: &Employee) -> Decimal {
    gross_salary_with_bonus(employee, employee.bonus)
}

/// Calculates gross salary using `bonus` in place of the stored bonus.
pub fn gross_salary_with_bonus(employee: &Employee, bonus: Bonus) -> Decimal {
    employee.base_pay() + bonus_amount(bonus)
}
