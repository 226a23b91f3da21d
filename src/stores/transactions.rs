//! In-memory record storage.
//!
//! Records are keyed by id. Ids are handed out by a counter that only moves
//! forward, so iterating the map in key order is iterating in insertion order,
//! and an update (which keeps the id) keeps the record's position.

use std::collections::BTreeMap;

use super::RecordStore;
use crate::dto::{Transaction, TransactionId, TransactionInput};
use crate::Error;

#[derive(Debug)]
pub struct TransactionsStore {
    records: BTreeMap<TransactionId, Transaction>,
    /// Next id to hand out. Never decremented, so deleted ids are not reused.
    next_id: u64,
}

impl Default for TransactionsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionsStore {
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: 1,
        }
    }

    fn allocate_id(&mut self) -> TransactionId {
        let id = TransactionId(self.next_id);
        self.next_id += 1;
        id
    }
}

impl RecordStore for TransactionsStore {
    fn insert(&mut self, input: TransactionInput) -> Result<Transaction, Error> {
        let id = self.allocate_id();
        let transaction = input.into_transaction(id);
        self.records.insert(id, transaction.clone());
        Ok(transaction)
    }

    fn get(&self, id: TransactionId) -> Result<Transaction, Error> {
        self.records.get(&id).cloned().ok_or(Error::NotFound(id))
    }

    fn replace(
        &mut self,
        id: TransactionId,
        input: TransactionInput,
    ) -> Result<(Transaction, Transaction), Error> {
        let slot = self.records.get_mut(&id).ok_or(Error::NotFound(id))?;
        let updated = input.into_transaction(id);
        let previous = std::mem::replace(slot, updated.clone());
        Ok((previous, updated))
    }

    fn remove(&mut self, id: TransactionId) -> Result<Transaction, Error> {
        self.records.remove(&id).ok_or(Error::NotFound(id))
    }

    fn load(&self) -> Result<Vec<Transaction>, Error> {
        Ok(self.records.values().cloned().collect())
    }

    fn len(&self) -> Result<usize, Error> {
        Ok(self.records.len())
    }
}
