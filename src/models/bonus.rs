//! Bonus selection model.
//!
//! Bonuses are drawn from a fixed set of amounts. Codes arriving from outside
//! the crate (stored records, form input, query strings) are parsed through
//! [`Bonus::from_code`], which is the only place an out-of-range value can be
//! detected.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A one-off bonus added on top of hourly earnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Bonus {
    /// No bonus.
    #[default]
    None,
    /// A $1000 bonus.
    OneThousand,
    /// A $5000 bonus.
    FiveThousand,
    /// A $10000 bonus.
    TenThousand,
}

impl Bonus {
    /// Every selectable bonus, in the order a picker should offer them.
    pub const ALL: [Bonus; 4] = [
        Bonus::None,
        Bonus::OneThousand,
        Bonus::FiveThousand,
        Bonus::TenThousand,
    ];

    /// Parses a bonus code such as `"None"`, `"5000"` or `"$5000"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hr_payroll::models::Bonus;
    ///
    /// assert_eq!(Bonus::from_code("$1000").unwrap(), Bonus::OneThousand);
    /// assert_eq!(Bonus::from_code("none").unwrap(), Bonus::None);
    /// assert!(Bonus::from_code("2500").is_err());
    /// ```
    pub fn from_code(code: &str) -> EngineResult<Self> {
        let trimmed = code.trim();
        if trimmed.eq_ignore_ascii_case("none") {
            return Ok(Bonus::None);
        }

        match trimmed.strip_prefix('$').unwrap_or(trimmed) {
            "1000" => Ok(Bonus::OneThousand),
            "5000" => Ok(Bonus::FiveThousand),
            "10000" => Ok(Bonus::TenThousand),
            _ => Err(EngineError::InvalidBonus {
                code: code.to_string(),
            }),
        }
    }

    /// The canonical code for this bonus.
    pub fn code(&self) -> &'static str {
        match self {
            Bonus::None => "none",
            Bonus::OneThousand => "1000",
            Bonus::FiveThousand => "5000",
            Bonus::TenThousand => "10000",
        }
    }

    /// The monetary value of this bonus.
    pub fn amount(&self) -> Decimal {
        match self {
            Bonus::None => Decimal::ZERO,
            Bonus::OneThousand => Decimal::new(1000, 0),
            Bonus::FiveThousand => Decimal::new(5000, 0),
            Bonus::TenThousand => Decimal::new(10000, 0),
        }
    }

    /// Returns true when a bonus is selected.
    pub fn is_some(&self) -> bool {
        *self != Bonus::None
    }
}

impl fmt::Display for Bonus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bonus::None => f.write_str("None"),
            other => write!(f, "${}", other.code()),
        }
    }
}

impl TryFrom<String> for Bonus {
    type Error = EngineError;

    fn try_from(value: String) -> EngineResult<Self> {
        Bonus::from_code(&value)
    }
}

impl From<Bonus> for String {
    fn from(bonus: Bonus) -> Self {
        bonus.code().to_string()
    }
}
