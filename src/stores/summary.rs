use rust_decimal::Decimal;

use crate::dto::Summary;

/// Running totals, adjusted by every mutation instead of recomputed.
///
/// A positive amount counts as income, anything else as an expense; the balance
/// always moves by the full amount.
#[derive(Debug, Default)]
pub struct SummaryStore {
    totals: Summary,
}

impl SummaryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from totals computed elsewhere, e.g. a rescan of a pre-filled store.
    pub fn from_summary(totals: Summary) -> Self {
        Self { totals }
    }

    /// Adds a record's contribution.
    pub fn apply(&mut self, amount: Decimal) {
        if amount > Decimal::ZERO {
            self.totals.total_income += amount;
        } else {
            self.totals.total_expenses += amount;
        }
        self.totals.balance += amount;
    }

    /// Takes a record's contribution back out.
    pub fn reverse(&mut self, amount: Decimal) {
        if amount > Decimal::ZERO {
            self.totals.total_income -= amount;
        } else {
            self.totals.total_expenses -= amount;
        }
        self.totals.balance -= amount;
    }

    pub fn snapshot(&self) -> Summary {
        self.totals
    }
}
