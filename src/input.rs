//! Boundary validation for transactions entered as text.
//!
//! A form submits every field as a string and the user types an amount without a
//! sign; the category decides whether it is stored as income or expense.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::dto::{Category, Transaction, TransactionInput};
use crate::error::ValidationError;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionForm {
    pub description: String,
    pub amount: String,
    pub category: String,
    pub date: String,
}

impl TransactionForm {
    /// Pre-fills an edit form. The amount is shown without its sign.
    pub fn from_transaction(transaction: &Transaction) -> Self {
        Self {
            description: transaction.description.clone(),
            amount: transaction.amount.abs().to_string(),
            category: transaction.category.to_string(),
            date: transaction.date.format(DATE_FORMAT).to_string(),
        }
    }

    /// Checks every field and produces an input whose amount carries the sign of
    /// its category.
    pub fn validate(&self) -> Result<TransactionInput, ValidationError> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }

        let amount: Decimal = self
            .amount
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidAmount(self.amount.clone()))?;
        if amount.is_zero() {
            return Err(ValidationError::ZeroAmount);
        }

        let category: Category = self.category.parse()?;

        let date = NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT)
            .map_err(|_| ValidationError::InvalidDate(self.date.clone()))?;

        Ok(TransactionInput {
            description: description.to_string(),
            amount: category.signed(amount),
            category,
            date,
        })
    }
}
