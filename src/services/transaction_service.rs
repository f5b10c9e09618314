//! Business logic helpers for adding and removing ledger records.

use crate::errors::{LedgerError, Result};
use crate::ledger::{Ledger, Record, RecordKind};

/// Validated entry points for mutating the ledger from raw form input.
pub struct TransactionService;

impl TransactionService {
    /// Parses the raw amount, derives the score, and appends a new record.
    ///
    /// On a parse failure the ledger is left untouched and the rejected input
    /// travels back inside the error so the caller can restore the field.
    pub fn add(
        ledger: &mut Ledger,
        category: &str,
        kind: RecordKind,
        raw_amount: &str,
        loan_status: &str,
    ) -> Result<Record> {
        let amount = parse_amount(raw_amount)?;
        let record = Record::new(category, kind, amount, loan_status);
        tracing::debug!(record = %record.id, %kind, amount, "appending record");
        ledger.append(record.clone());
        Ok(record)
    }

    /// Removes the record at the selected position, returning the removed
    /// instance. `None` means nothing is selected.
    pub fn delete(ledger: &mut Ledger, selection: Option<usize>) -> Result<Record> {
        let position = selection.ok_or(LedgerError::NoSelection)?;
        ledger.remove_at(position)
    }

    /// Returns a snapshot of the ledger's records for table rendering.
    pub fn list(ledger: &Ledger) -> Vec<&Record> {
        ledger.records.iter().collect()
    }
}

fn parse_amount(raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| LedgerError::InvalidAmount(raw.to_string()))
}
