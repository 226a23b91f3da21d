//! Async access to a [`Ledger`] shared between tasks.
//!
//! One task owns the ledger and works through commands from a bounded channel,
//! one at a time, so each mutation completes before the next command is looked
//! at. Callers hold cloneable [`LedgerHandle`]s and get answers over oneshot
//! channels.

use std::collections::BTreeMap;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::dto::{Category, CategoryTotals, Summary, Transaction, TransactionId, TransactionInput};
use crate::query::{Filter, Page, PageRequest};
use crate::stores::RecordStore;
use crate::{Error, Ledger};

const BUFFER_SIZE: usize = 1024;

type Reply<T> = oneshot::Sender<T>;

enum Command {
    List(Reply<Result<Vec<Transaction>, Error>>),
    Get(TransactionId, Reply<Result<Transaction, Error>>),
    Create(TransactionInput, Reply<Result<Transaction, Error>>),
    Update(TransactionId, TransactionInput, Reply<Result<Transaction, Error>>),
    Delete(TransactionId, Reply<Result<(), Error>>),
    Summary(Reply<Summary>),
    Query(Filter, PageRequest, Reply<Result<Page<Transaction>, Error>>),
    ByCategory(Reply<Result<BTreeMap<Category, CategoryTotals>, Error>>),
    Reconcile(Reply<Result<Summary, Error>>),
}

#[derive(Debug, Clone)]
pub struct LedgerHandle {
    commands: mpsc::Sender<Command>,
}

impl LedgerHandle {
    /// Moves `ledger` into a new task. The task ends, handing the ledger back
    /// through the join handle, once every `LedgerHandle` has been dropped.
    pub fn spawn<S>(ledger: Ledger<S>) -> (Self, JoinHandle<Ledger<S>>)
    where
        S: RecordStore + Send + 'static,
    {
        let (tx, rx) = mpsc::channel(BUFFER_SIZE);
        let task = tokio::spawn(serve(ledger, rx));
        (Self { commands: tx }, task)
    }

    async fn request<T>(&self, command: impl FnOnce(Reply<T>) -> Command) -> Result<T, Error> {
        let (reply, response) = oneshot::channel();
        self.commands
            .send(command(reply))
            .await
            .map_err(|_| Error::ServiceClosed)?;
        response.await.map_err(|_| Error::ServiceClosed)
    }

    pub async fn list(&self) -> Result<Vec<Transaction>, Error> {
        self.request(Command::List).await?
    }

    pub async fn get(&self, id: TransactionId) -> Result<Transaction, Error> {
        self.request(|reply| Command::Get(id, reply)).await?
    }

    pub async fn create(&self, input: TransactionInput) -> Result<Transaction, Error> {
        self.request(|reply| Command::Create(input, reply)).await?
    }

    pub async fn update(
        &self,
        id: TransactionId,
        input: TransactionInput,
    ) -> Result<Transaction, Error> {
        self.request(|reply| Command::Update(id, input, reply)).await?
    }

    pub async fn delete(&self, id: TransactionId) -> Result<(), Error> {
        self.request(|reply| Command::Delete(id, reply)).await?
    }

    pub async fn summary(&self) -> Result<Summary, Error> {
        self.request(Command::Summary).await
    }

    pub async fn query(
        &self,
        filter: Filter,
        page: PageRequest,
    ) -> Result<Page<Transaction>, Error> {
        self.request(|reply| Command::Query(filter, page, reply)).await?
    }

    pub async fn by_category(&self) -> Result<BTreeMap<Category, CategoryTotals>, Error> {
        self.request(Command::ByCategory).await?
    }

    pub async fn reconcile(&self) -> Result<Summary, Error> {
        self.request(Command::Reconcile).await?
    }
}

async fn serve<S: RecordStore>(
    mut ledger: Ledger<S>,
    mut commands: mpsc::Receiver<Command>,
) -> Ledger<S> {
    // A send error only means the caller stopped waiting for the answer.
    while let Some(command) = commands.recv().await {
        match command {
            Command::List(reply) => {
                let _ = reply.send(ledger.list());
            }
            Command::Get(id, reply) => {
                let _ = reply.send(ledger.get(id));
            }
            Command::Create(input, reply) => {
                let _ = reply.send(ledger.create(input));
            }
            Command::Update(id, input, reply) => {
                let _ = reply.send(ledger.update(id, input));
            }
            Command::Delete(id, reply) => {
                let _ = reply.send(ledger.delete(id));
            }
            Command::Summary(reply) => {
                let _ = reply.send(ledger.summary());
            }
            Command::Query(filter, page, reply) => {
                let _ = reply.send(ledger.query(&filter, page));
            }
            Command::ByCategory(reply) => {
                let _ = reply.send(ledger.by_category());
            }
            Command::Reconcile(reply) => {
                let _ = reply.send(ledger.reconcile());
            }
        }
    }
    debug!(summary = ?ledger.summary(), "ledger service stopped");
    ledger
}
