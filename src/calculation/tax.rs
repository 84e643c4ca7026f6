//! Tiered tax rate calculation.
//!
//! Three fixed brackets with inclusive upper bounds. A salary sitting exactly
//! on a ceiling is taxed at the lower bracket's rate.

use rust_decimal::Decimal;

/// Highest gross salary taxed at [`LOWER_BRACKET_RATE`].
pub const LOWER_BRACKET_CEILING: Decimal = Decimal::from_parts(50_000, 0, 0, false, 0);

/// Highest gross salary taxed at [`MIDDLE_BRACKET_RATE`].
pub const MIDDLE_BRACKET_CEILING: Decimal = Decimal::from_parts(100_000, 0, 0, false, 0);

/// 10%, applied up to and including [`LOWER_BRACKET_CEILING`].
pub const LOWER_BRACKET_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// 20%, applied up to and including [`MIDDLE_BRACKET_CEILING`].
pub const MIDDLE_BRACKET_RATE: Decimal = Decimal::from_parts(20, 0, 0, false, 2);

/// 30%, applied above [`MIDDLE_BRACKET_CEILING`].
pub const UPPER_BRACKET_RATE: Decimal = Decimal::from_parts(30, 0, 0, false, 2);

/// Returns the tax rate for a gross salary.
///
/// # Examples
///
/// ```
/// use hr_payroll::calculation::tax_rate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(tax_rate(Decimal::new(50_000, 0)), Decimal::from_str("0.10").unwrap());
/// assert_eq!(tax_rate(Decimal::from_str("50000.01").unwrap()), Decimal::from_str("0.20").unwrap());
/// ```
pub fn tax_rate(gross_salary: Decimal) -> Decimal {
    if gross_salary <= LOWER_BRACKET_CEILING {
        LOWER_BRACKET_RATE
    } else if gross_salary <= MIDDLE_BRACKET_CEILING {
        MIDDLE_BRACKET_RATE
    } else {
        UPPER_BRACKET_RATE
    }
}

/// Returns the tax owed on a gross salary: `gross_salary * tax_rate(gross_salary)`.
///
/// The whole salary is taxed at its bracket's rate; brackets are not
/// marginal.
pub fn tax_amount(gross_salary: Decimal) -> Decimal {
    gross_salary * tax_rate(gross_salary)
}
