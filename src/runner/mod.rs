//! The runner loads a CSV file of transactions into a fresh ledger and writes one
//! report as CSV to a writer.
//!
//! This module provides both a synchronous and an asynchronous runner implementation.
//! CSV parsing errors abort the run; rows that parse but fail validation (an
//! unknown category among them) are logged and skipped.

mod async_runner;
mod sync_runner;

pub use async_runner::run as run_async;
pub use sync_runner::run;

use clap::ValueEnum;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;
use tracing::{info, warn};

use crate::csv_utils::{write_csv, write_header};
use crate::dto::{Category, CategoryTotals, Summary, Transaction, TransactionInput, TransactionRow};
use crate::query::{Filter, Page, PageRequest};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Report {
    /// The filtered, paginated transaction list, newest first
    #[default]
    Transactions,
    /// Total income, total expenses and balance
    Summary,
    /// Income and expenses per category
    Categories,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportOptions {
    pub report: Report,
    /// Only used by [`Report::Transactions`].
    pub filter: Filter,
    /// Only used by [`Report::Transactions`].
    pub page: PageRequest,
}

const TRANSACTION_HEADER: [&str; 5] = ["id", "description", "amount", "category", "date"];
const CATEGORY_HEADER: [&str; 3] = ["category", "income", "expenses"];

#[derive(Debug, Serialize)]
struct CategoryRow {
    category: Category,
    income: Decimal,
    expenses: Decimal,
}

enum ReportData {
    Transactions(Page<Transaction>),
    Summary(Summary),
    Categories(BTreeMap<Category, CategoryTotals>),
}

impl ReportData {
    /// Amounts are written normalized (`-186`, not `-186.00`). A report with no
    /// rows still gets its header.
    fn write<W: Write>(self, writer: W) -> csv::Result<()> {
        match self {
            ReportData::Transactions(page) => {
                info!(
                    total = page.total,
                    page = page.page,
                    pages = page.page_count(),
                    "transactions report"
                );
                if page.items.is_empty() {
                    return write_header(writer, &TRANSACTION_HEADER);
                }
                write_csv(
                    writer,
                    page.items.into_iter().map(|mut transaction| {
                        transaction.amount = transaction.amount.normalize();
                        transaction
                    }),
                )
            }
            ReportData::Summary(summary) => write_csv(
                writer,
                std::iter::once(Summary {
                    total_income: summary.total_income.normalize(),
                    total_expenses: summary.total_expenses.normalize(),
                    balance: summary.balance.normalize(),
                }),
            ),
            ReportData::Categories(categories) if categories.is_empty() => {
                write_header(writer, &CATEGORY_HEADER)
            }
            ReportData::Categories(categories) => write_csv(
                writer,
                categories
                    .into_iter()
                    .map(|(category, totals)| CategoryRow {
                        category,
                        income: totals.income.normalize(),
                        expenses: totals.expenses.normalize(),
                    }),
            ),
        }
    }
}

/// Boundary check for a parsed row; `index` is the 1-based data row for the log.
fn accept(row: TransactionRow, index: usize) -> Option<TransactionInput> {
    match TransactionInput::try_from(row) {
        Ok(input) => Some(input),
        Err(err) => {
            warn!(row = index, error = %err, "skipping invalid transaction");
            None
        }
    }
}
