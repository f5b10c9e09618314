//! Ledger domain models and helpers.

#[allow(clippy::module_inception)]
pub mod ledger;
pub mod record;
pub mod summary;

pub use ledger::Ledger;
pub use record::{Record, RecordKind};
pub use summary::{Period, Summary};
