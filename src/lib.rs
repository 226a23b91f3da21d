mod aggregate;
mod config;
mod csv_utils;
mod dto;
mod error;
mod input;
mod ledger;
mod query;
mod runner;
mod service;
mod stores;

pub use config::Config;
pub use csv_utils::{read_transactions, write_csv};
pub use dto::{
    Category, CategoryKind, CategoryTotals, Summary, Transaction, TransactionId, TransactionInput,
    TransactionRow,
};
pub use error::{Error, ValidationError};
pub use input::TransactionForm;
pub use ledger::Ledger;
pub use query::{Filter, Page, PageRequest};
pub use runner::{run, run_async, Report, ReportOptions};
pub use service::LedgerHandle;
pub use stores::{RecordStore, SummaryStore, TransactionsStore};
