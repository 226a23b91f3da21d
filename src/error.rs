//! Domain-specific errors for the ledger.
//!
//! Two layers:
//! - [`Error`] is what ledger operations return (unknown ids, a failing record
//!   store, a stopped ledger service)
//! - [`ValidationError`] describes malformed input caught at the boundary, before a
//!   record ever reaches the store
//!
//! I/O and CSV parsing failures are not modelled here; the runners propagate them
//! as boxed errors.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::dto::{Category, TransactionId};

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("transaction not found: {0}")]
    NotFound(TransactionId),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("record store failure: {0}")]
    Storage(String),

    #[error("ledger service is no longer running")]
    ServiceClosed,
}

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("description is required")]
    EmptyDescription,

    #[error("amount is not a number: {0:?}")]
    InvalidAmount(String),

    #[error("amount must be a non-zero number")]
    ZeroAmount,

    #[error("unknown category: {0:?}")]
    UnknownCategory(String),

    #[error("date must be YYYY-MM-DD: {0:?}")]
    InvalidDate(String),

    #[error("amount {amount} has the wrong sign for category {category}")]
    SignMismatch { category: Category, amount: Decimal },

    #[error("invalid page request: page {page}, page size {page_size}")]
    InvalidPage { page: usize, page_size: usize },
}
