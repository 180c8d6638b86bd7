//! Recurrence periods and period-aware amounts.
//!
//! Every monetary figure is stored in a canonical annual form so the rest of
//! the calculation never branches on period type; monthly and weekly views
//! are derived on demand.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::ValidationError;

/// Weeks in a year used for weekly-to-annual conversion (365.25 / 7).
pub const WEEKS_PER_YEAR: f64 = 52.1429;

/// Recurrence period for a bill or expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Weekly,
    Monthly,
    Annual,
}

impl FromStr for Period {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weekly" => Ok(Period::Weekly),
            "monthly" => Ok(Period::Monthly),
            "annual" => Ok(Period::Annual),
            other => Err(ValidationError::UnknownPeriod(other.to_string())),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Weekly => write!(f, "weekly"),
            Period::Monthly => write!(f, "monthly"),
            Period::Annual => write!(f, "annual"),
        }
    }
}

/// An amount held in canonical annual form, viewable per period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodAmount {
    annual: f64,
}

impl PeriodAmount {
    pub fn from_annual(annual: f64) -> Self {
        Self { annual }
    }

    /// Normalize an amount given per `period` into annual terms.
    pub fn from_period(amount: f64, period: Period) -> Self {
        let annual = match period {
            Period::Weekly => amount * WEEKS_PER_YEAR,
            Period::Monthly => amount * 12.0,
            Period::Annual => amount,
        };
        Self { annual }
    }

    pub fn annual(&self) -> f64 {
        self.annual
    }

    pub fn monthly(&self) -> f64 {
        self.annual / 12.0
    }

    pub fn weekly(&self) -> f64 {
        self.annual / WEEKS_PER_YEAR
    }
}
