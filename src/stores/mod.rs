//! Storage layer for the ledger. Provides storage for:
//! - Transaction records ([`TransactionsStore`], behind the [`RecordStore`] trait)
//! - The running income/expense totals ([`SummaryStore`])
//!
//! Current implementation is memory-resident; a different backing store can be
//! plugged in by implementing [`RecordStore`].

mod summary;
mod transactions;

pub use summary::SummaryStore;
pub use transactions::TransactionsStore;

use crate::dto::{Transaction, TransactionId, TransactionInput};
use crate::Error;

/// The record collection a [`Ledger`](crate::Ledger) owns.
///
/// Every method returns `Result` and reads hand back owned records, so a
/// backend that lives outside the process can report failure; when a mutation
/// fails the ledger leaves its summary untouched. Implementations must keep ids
/// unique and never hand out an id twice.
pub trait RecordStore {
    /// Stores a new record under a freshly assigned id.
    fn insert(&mut self, input: TransactionInput) -> Result<Transaction, Error>;

    /// Fails with [`Error::NotFound`] for an unknown id.
    fn get(&self, id: TransactionId) -> Result<Transaction, Error>;

    /// Replaces the fields of an existing record, keeping its id.
    /// Returns the previous and the new record.
    fn replace(
        &mut self,
        id: TransactionId,
        input: TransactionInput,
    ) -> Result<(Transaction, Transaction), Error>;

    fn remove(&mut self, id: TransactionId) -> Result<Transaction, Error>;

    /// All records in insertion order.
    fn load(&self) -> Result<Vec<Transaction>, Error>;

    fn len(&self) -> Result<usize, Error> {
        Ok(self.load()?.len())
    }
}
