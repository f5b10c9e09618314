use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::LedgerError;

use super::record::{Record, RecordKind};
use super::summary::{Period, Summary};

/// Insertion-ordered session ledger. Lives only in memory: empty at start,
/// discarded on exit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub records: Vec<Record>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Ledger {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            records: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Appends a record at the end and returns its identifier.
    pub fn append(&mut self, record: Record) -> Uuid {
        let id = record.id;
        self.records.push(record);
        self.touch();
        id
    }

    /// Removes the record at `position`, shifting later records down by one.
    pub fn remove_at(&mut self, position: usize) -> Result<Record, LedgerError> {
        if position >= self.records.len() {
            return Err(LedgerError::OutOfRange {
                position,
                len: self.records.len(),
            });
        }
        let removed = self.records.remove(position);
        self.touch();
        Ok(removed)
    }

    /// Totals income and expenses over the entire ledger. The period tag is
    /// echoed into the summary but never filters anything.
    pub fn summarize(&self, period: Period) -> Summary {
        let mut total_income = 0.0;
        let mut total_expense = 0.0;
        for record in &self.records {
            match record.kind {
                RecordKind::Income => total_income += record.amount,
                RecordKind::Expense => total_expense += record.amount,
                RecordKind::Loan => {}
            }
        }
        Summary {
            period,
            total_income,
            total_expense,
            net_savings: total_income - total_expense,
        }
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn record(&self, id: Uuid) -> Option<&Record> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(kind: RecordKind, amount: f64) -> Record {
        Record::new("Sample", kind, amount, "")
    }

    #[test]
    fn append_preserves_insertion_order() {
        let mut ledger = Ledger::new("Order");
        let first = ledger.append(sample(RecordKind::Income, 1.0));
        let second = ledger.append(sample(RecordKind::Expense, 2.0));
        assert_eq!(ledger.records[0].id, first);
        assert_eq!(ledger.records[1].id, second);
    }

    #[test]
    fn remove_at_on_empty_ledger_fails() {
        let mut ledger = Ledger::new("Empty");
        let err = ledger.remove_at(0).expect_err("empty ledger has no rows");
        assert!(matches!(
            err,
            LedgerError::OutOfRange {
                position: 0,
                len: 0
            }
        ));
        assert_eq!(ledger.record_count(), 0);
    }

    #[test]
    fn remove_at_out_of_range_leaves_ledger_unchanged() {
        let mut ledger = Ledger::new("Bounds");
        ledger.append(sample(RecordKind::Income, 10.0));
        assert!(ledger.remove_at(5).is_err());
        assert_eq!(ledger.record_count(), 1);
    }

    #[test]
    fn remove_at_shifts_later_records_down() {
        let mut ledger = Ledger::new("Shift");
        ledger.append(sample(RecordKind::Income, 1.0));
        let middle = ledger.append(sample(RecordKind::Expense, 2.0));
        let last = ledger.append(sample(RecordKind::Loan, 3.0));

        let removed = ledger.remove_at(1).unwrap();
        assert_eq!(removed.id, middle);
        assert_eq!(ledger.record_count(), 2);
        assert_eq!(ledger.records[1].id, last);
    }

    #[test]
    fn summarize_splits_income_and_expense() {
        let mut ledger = Ledger::new("Totals");
        ledger.append(sample(RecordKind::Income, 100.0));
        ledger.append(sample(RecordKind::Expense, 40.0));
        ledger.append(sample(RecordKind::Loan, 999.0));

        let summary = ledger.summarize(Period::Monthly);
        assert_eq!(summary.total_income, 100.0);
        assert_eq!(summary.total_expense, 40.0);
        assert_eq!(summary.net_savings, 60.0);
    }

    #[test]
    fn summarize_ignores_period_for_totals() {
        let mut ledger = Ledger::new("Periods");
        ledger.append(sample(RecordKind::Income, 5.0));

        let monthly = ledger.summarize(Period::Monthly);
        let yearly = ledger.summarize(Period::Yearly);
        assert_eq!(monthly.total_income, yearly.total_income);
        assert_eq!(monthly.period, Period::Monthly);
        assert_eq!(yearly.period, Period::Yearly);
    }

    #[test]
    fn summarize_on_empty_ledger_is_all_zero() {
        let ledger = Ledger::new("Zero");
        let summary = ledger.summarize(Period::Yearly);
        assert_eq!(summary.total_income, 0.0);
        assert_eq!(summary.total_expense, 0.0);
        assert_eq!(summary.net_savings, 0.0);
    }
}
