use std::collections::BTreeMap;
use tracing::debug;

use crate::aggregate;
use crate::dto::{Category, CategoryTotals, Summary, Transaction, TransactionId, TransactionInput};
use crate::query::{self, Filter, Page, PageRequest};
use crate::stores::{RecordStore, SummaryStore, TransactionsStore};
use crate::Error;

/// Sole owner of the records and the running summary.
///
/// Every mutation changes both in the same `&mut self` call, so no reader can see
/// one updated without the other. Use [`LedgerHandle`](crate::LedgerHandle) to
/// share a ledger between tasks.
///
/// Inputs are trusted to be well-formed (see [`TransactionInput::validate`]); the
/// ledger only rejects unknown ids and passes on record store failures. Only
/// [`Ledger::summary`] answers without asking the store.
#[derive(Debug)]
pub struct Ledger<S = TransactionsStore> {
    records: S,
    summary: SummaryStore,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            records: TransactionsStore::new(),
            summary: SummaryStore::new(),
        }
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: RecordStore> Ledger<S> {
    /// Wraps an existing store. The running summary is seeded with one rescan of
    /// whatever the store already holds.
    pub fn with_store(records: S) -> Result<Self, Error> {
        let summary = SummaryStore::from_summary(aggregate::reconcile(&records.load()?));
        Ok(Self { records, summary })
    }

    pub fn list(&self) -> Result<Vec<Transaction>, Error> {
        self.records.load()
    }

    pub fn get(&self, id: TransactionId) -> Result<Transaction, Error> {
        self.records.get(id)
    }

    pub fn create(&mut self, input: TransactionInput) -> Result<Transaction, Error> {
        let transaction = self.records.insert(input)?;
        self.summary.apply(transaction.amount);
        debug!(id = %transaction.id, amount = %transaction.amount, "created transaction");
        Ok(transaction)
    }

    pub fn update(
        &mut self,
        id: TransactionId,
        input: TransactionInput,
    ) -> Result<Transaction, Error> {
        let (previous, updated) = self.records.replace(id, input)?;
        self.summary.reverse(previous.amount);
        self.summary.apply(updated.amount);
        debug!(
            %id,
            previous = %previous.amount,
            amount = %updated.amount,
            "updated transaction"
        );
        Ok(updated)
    }

    pub fn delete(&mut self, id: TransactionId) -> Result<(), Error> {
        let removed = self.records.remove(id)?;
        self.summary.reverse(removed.amount);
        debug!(%id, amount = %removed.amount, "deleted transaction");
        Ok(())
    }

    pub fn summary(&self) -> Summary {
        self.summary.snapshot()
    }

    pub fn query(&self, filter: &Filter, page: PageRequest) -> Result<Page<Transaction>, Error> {
        Ok(query::query(&self.records.load()?, filter, page))
    }

    pub fn by_category(&self) -> Result<BTreeMap<Category, CategoryTotals>, Error> {
        Ok(aggregate::by_category(&self.records.load()?))
    }

    /// Summary recomputed from the records; equals [`Ledger::summary`] unless the
    /// running totals have drifted.
    pub fn reconcile(&self) -> Result<Summary, Error> {
        Ok(aggregate::reconcile(&self.records.load()?))
    }

    pub fn len(&self) -> Result<usize, Error> {
        self.records.len()
    }
}
