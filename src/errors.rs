use thiserror::Error;

/// Error type that captures the recoverable ledger failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("invalid amount: {0:?}")]
    InvalidAmount(String),
    #[error("no record selected")]
    NoSelection,
    #[error("position {position} is out of range (ledger holds {len} records)")]
    OutOfRange { position: usize, len: usize },
    #[error("unknown record kind: {0:?}")]
    UnknownKind(String),
    #[error("unknown period: {0:?}")]
    UnknownPeriod(String),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
