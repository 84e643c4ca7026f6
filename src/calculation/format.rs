//! Display formatting for payroll figures.
//!
//! Rounding to two decimal places happens here and nowhere else.

use rust_decimal::{Decimal, RoundingStrategy};

fn two_places(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Formats a monetary amount as dollars with two decimal places.
///
/// # Examples
///
/// ```
/// use hr_payroll::calculation::format_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_currency(Decimal::new(7000, 0)), "$7000.00");
/// assert_eq!(format_currency(Decimal::from_str("68.74875").unwrap()), "$68.75");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let rounded = two_places(amount);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-${}", rounded.abs())
    } else {
        format!("${}", rounded.abs())
    }
}

/// Formats a rate such as `0.10` as a percentage with two decimal places.
///
/// # Examples
///
/// ```
/// use hr_payroll::calculation::format_percent;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_percent(Decimal::new(10, 2)), "10.00%");
/// ```
pub fn format_percent(rate: Decimal) -> String {
    format!("{}%", two_places(rate * Decimal::ONE_HUNDRED))
}
