//! Flat payroll deductions.

use rust_decimal::Decimal;

/// 2% of gross salary.
pub const DEDUCTION_RATE: Decimal = Decimal::from_parts(2, 0, 0, false, 2);

/// Returns the deduction for a gross salary: `0.02 * gross_salary`.
///
/// # Examples
///
/// ```
/// use hr_payroll::calculation::deductions;
/// use rust_decimal::Decimal;
///
/// assert_eq!(deductions(Decimal::new(7000, 0)), Decimal::new(140, 0));
/// ```
pub fn deductions(gross_salary: Decimal) -> Decimal {
    DEDUCTION_RATE * gross_salary
}
