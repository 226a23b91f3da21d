//! Full-rescan aggregations over the record set.
//!
//! Neither function is on the mutation path: [`by_category`] is recomputed on
//! every call, and [`reconcile`] exists to check the incrementally maintained
//! summary against the records it was derived from.

use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::dto::{Category, CategoryTotals, Summary, Transaction};
use crate::stores::SummaryStore;

/// Income and expenses per category. Positive amounts go to `income`, negative
/// ones to `expenses`. Categories without records are left out.
pub fn by_category<'a, I>(records: I) -> BTreeMap<Category, CategoryTotals>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut categories: BTreeMap<Category, CategoryTotals> = BTreeMap::new();
    for transaction in records {
        let totals = categories.entry(transaction.category).or_default();
        if transaction.amount > Decimal::ZERO {
            totals.income += transaction.amount;
        } else {
            totals.expenses += transaction.amount;
        }
    }
    categories
}

/// Recomputes the summary from scratch, using the same contribution rule as the
/// running totals.
pub fn reconcile<'a, I>(records: I) -> Summary
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut summary = SummaryStore::new();
    for transaction in records {
        summary.apply(transaction.amount);
    }
    summary.snapshot()
}
