use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::LedgerError;
use crate::score::{self, ScoreResult};

/// One financial entry. Immutable once created; the score is derived at
/// construction and never recomputed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub id: Uuid,
    pub category: String,
    pub kind: RecordKind,
    pub amount: f64,
    /// Free text, meaningful only for [`RecordKind::Loan`]; carried verbatim
    /// for the other kinds.
    pub loan_status: String,
    pub score: ScoreResult,
}

impl Record {
    pub fn new(
        category: impl Into<String>,
        kind: RecordKind,
        amount: f64,
        loan_status: impl Into<String>,
    ) -> Self {
        let loan_status = loan_status.into();
        let score = score::compute_score(kind, amount, &loan_status);
        Self {
            id: Uuid::new_v4(),
            category: category.into(),
            kind,
            amount,
            loan_status,
            score,
        }
    }

    /// Row cells in display order, the way table views render an entry.
    pub fn row(&self) -> [String; 5] {
        [
            self.category.clone(),
            self.kind.to_string(),
            self.amount.to_string(),
            self.loan_status.clone(),
            self.score.label(),
        ]
    }
}

/// Supported record types.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RecordKind {
    Income,
    Expense,
    Loan,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RecordKind::Income => "Income",
            RecordKind::Expense => "Expense",
            RecordKind::Loan => "Loan",
        };
        f.write_str(label)
    }
}

impl FromStr for RecordKind {
    type Err = LedgerError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            value if value.eq_ignore_ascii_case("income") => Ok(RecordKind::Income),
            value if value.eq_ignore_ascii_case("expense") => Ok(RecordKind::Expense),
            value if value.eq_ignore_ascii_case("loan") => Ok(RecordKind::Loan),
            _ => Err(LedgerError::UnknownKind(raw.to_string())),
        }
    }
}
