use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

/// Reporting period tag. Display-only: summaries echo it but never filter
/// records by it, since records carry no dates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Period {
    #[default]
    Monthly,
    Yearly,
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Period::Monthly => "Monthly",
            Period::Yearly => "Yearly",
        };
        f.write_str(label)
    }
}

impl FromStr for Period {
    type Err = LedgerError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            value if value.eq_ignore_ascii_case("monthly") => Ok(Period::Monthly),
            value if value.eq_ignore_ascii_case("yearly") => Ok(Period::Yearly),
            _ => Err(LedgerError::UnknownPeriod(raw.to_string())),
        }
    }
}

/// Totals over the whole ledger for one summary request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub period: Period,
    pub total_income: f64,
    pub total_expense: f64,
    pub net_savings: f64,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Summary ({}):\nTotal Income: {}\nTotal Expenses: {}\nNet Savings: {}",
            self.period, self.total_income, self.total_expense, self.net_savings
        )
    }
}
