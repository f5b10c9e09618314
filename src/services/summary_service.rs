//! Aggregation helpers for the summary dialog.

use crate::ledger::{Ledger, Period, Summary};

/// Aggregates ledger data for summary requests.
pub struct SummaryService;

impl SummaryService {
    /// Totals the whole ledger under the requested reporting period tag.
    pub fn totals(ledger: &Ledger, period: Period) -> Summary {
        ledger.summarize(period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{Record, RecordKind};

    #[test]
    fn totals_cover_the_whole_ledger() {
        let mut ledger = Ledger::new("Summary");
        ledger.append(Record::new("Salary", RecordKind::Income, 100.0, ""));
        ledger.append(Record::new("Rent", RecordKind::Expense, 40.0, ""));
        ledger.append(Record::new("House", RecordKind::Loan, 999.0, "Approved"));

        let summary = SummaryService::totals(&ledger, Period::Yearly);
        assert_eq!(summary.period, Period::Yearly);
        assert_eq!(summary.total_income, 100.0);
        assert_eq!(summary.total_expense, 40.0);
        assert_eq!(summary.net_savings, 60.0);
    }
}
