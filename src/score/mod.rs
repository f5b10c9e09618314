//! Placeholder credit-score heuristic for loan records.
//!
//! The formula is an illustrative stand-in, not a financial model: a fixed
//! base adjusted by loan status and amount tier, clamped to the conventional
//! bureau range.

use serde::{Deserialize, Serialize};

use crate::ledger::RecordKind;

/// Lowest score the heuristic will ever report.
pub const SCORE_FLOOR: i32 = 300;
/// Highest score the heuristic will ever report.
pub const SCORE_CEILING: i32 = 900;

const BASE_SCORE: i32 = 750;
const APPROVED_BONUS: i32 = 20;
const PENDING_PENALTY: i32 = 10;
const LARGE_LOAN_THRESHOLD: f64 = 500_000.0;
const LARGE_LOAN_PENALTY: i32 = 30;
const MEDIUM_LOAN_THRESHOLD: f64 = 200_000.0;
const MEDIUM_LOAN_PENALTY: i32 = 20;

/// Outcome of scoring a record: only loans carry a number.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ScoreResult {
    NotApplicable,
    Scored(i32),
}

impl ScoreResult {
    /// Renders the score the way row-based views display it.
    pub fn label(&self) -> String {
        match self {
            ScoreResult::NotApplicable => "N/A".into(),
            ScoreResult::Scored(value) => value.to_string(),
        }
    }
}

/// Derives the credit score for a record being created.
///
/// Deterministic and stateless. Non-loan kinds are never scored. Status
/// matching is ASCII-case-insensitive; statuses other than "Approved" and
/// "Pending" leave the base untouched. The amount tiers are mutually
/// exclusive, and the result is clamped into
/// [`SCORE_FLOOR`]..=[`SCORE_CEILING`].
pub fn compute_score(kind: RecordKind, amount: f64, loan_status: &str) -> ScoreResult {
    if kind != RecordKind::Loan {
        return ScoreResult::NotApplicable;
    }

    let mut score = BASE_SCORE;

    if loan_status.eq_ignore_ascii_case("approved") {
        score += APPROVED_BONUS;
    } else if loan_status.eq_ignore_ascii_case("pending") {
        score -= PENDING_PENALTY;
    }

    if amount > LARGE_LOAN_THRESHOLD {
        score -= LARGE_LOAN_PENALTY;
    } else if amount > MEDIUM_LOAN_THRESHOLD {
        score -= MEDIUM_LOAN_PENALTY;
    }

    ScoreResult::Scored(score.clamp(SCORE_FLOOR, SCORE_CEILING))
}
