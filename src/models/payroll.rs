//! Payroll result models.
//!
//! This module contains the [`PayrollSummary`] returned by the calculator and
//! the [`PayDistribution`] used to draw the money breakdown chart. The two
//! are kept apart on purpose: the distribution shows the bonus twice (inside
//! the salary slice and as its own slice), so only the summary carries
//! figures that may be summed.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Bonus;

/// All payroll figures derived for one employee.
///
/// # Example
///
/// ```
/// use hr_payroll::models::{Bonus, PayrollSummary};
/// use rust_decimal::Decimal;
///
/// let summary = PayrollSummary {
///     employee_id: 1,
///     base_pay: Decimal::new(2000, 0),
///     bonus: Bonus::FiveThousand,
///     bonus_amount: Decimal::new(5000, 0),
///     gross_salary: Decimal::new(7000, 0),
///     tax_rate: Decimal::new(10, 2),
///     tax_amount: Decimal::new(700, 0),
///     deductions: Decimal::new(140, 0),
///     net_pay: Decimal::new(6160, 0),
/// };
/// assert_eq!(summary.net_pay, summary.gross_salary - summary.tax_amount - summary.deductions);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollSummary {
    /// The employee these figures belong to.
    pub employee_id: u64,
    /// Wage multiplied by hours.
    pub base_pay: Decimal,
    /// The bonus used for this calculation.
    pub bonus: Bonus,
    /// The value of that bonus.
    pub bonus_amount: Decimal,
    /// Base pay plus bonus.
    pub gross_salary: Decimal,
    /// The bracket rate applied to the gross salary.
    pub tax_rate: Decimal,
    /// Gross salary multiplied by the tax rate.
    pub tax_amount: Decimal,
    /// The flat deduction taken from the gross salary.
    pub deductions: Decimal,
    /// Gross salary less tax and deductions.
    pub net_pay: Decimal,
}

impl PayrollSummary {
    /// The chart breakdown for this summary.
    pub fn distribution(&self) -> PayDistribution {
        PayDistribution {
            salary: self.gross_salary,
            taxes: self.tax_amount,
            deductions: self.deductions,
            bonus: self.bonus.is_some().then_some(self.bonus_amount),
        }
    }
}

/// Values for the money distribution chart.
///
/// `salary` is the gross salary, which already contains the bonus. When a
/// bonus is active it is also reported in `bonus` so the chart can label it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayDistribution {
    /// Gross salary.
    pub salary: Decimal,
    /// Tax amount.
    pub taxes: Decimal,
    /// Deduction amount.
    pub deductions: Decimal,
    /// Bonus amount, present only when a bonus is selected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bonus: Option<Decimal>,
}

impl PayDistribution {
    /// Labelled chart slices, in display order.
    pub fn slices(&self) -> Vec<DistributionSlice> {
        let mut slices = vec![
            DistributionSlice::new("Salary", self.salary),
            DistributionSlice::new("Taxes", self.taxes),
            DistributionSlice::new("Deductions", self.deductions),
        ];
        if let Some(bonus) = self.bonus {
            slices.push(DistributionSlice::new("Bonus", bonus));
        }
        slices
    }
}

/// A single labelled value in the distribution chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionSlice {
    /// Display label.
    pub label: String,
    /// Slice value.
    pub amount: Decimal,
}

impl DistributionSlice {
    fn new(label: &str, amount: Decimal) -> Self {
        Self {
            label: label.to_string(),
            amount,
        }
    }
}
