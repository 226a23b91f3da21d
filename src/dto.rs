use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use serde::de::Deserializer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Store-assigned identifier. Ids come from a counter and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(pub u64);

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TransactionId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(TransactionId)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryKind {
    Income,
    Expense,
}

/// Declaration order is the order categories are reported in. Names are
/// matched case-insensitively on the way in, whatever the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Category {
    Salary,
    #[serde(rename = "Other Income")]
    OtherIncome,
    Food,
    Rent,
    Entertainment,
    Utilities,
    Transportation,
    Shopping,
    Healthcare,
    Other,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Salary,
        Category::OtherIncome,
        Category::Food,
        Category::Rent,
        Category::Entertainment,
        Category::Utilities,
        Category::Transportation,
        Category::Shopping,
        Category::Healthcare,
        Category::Other,
    ];

    pub fn kind(self) -> CategoryKind {
        match self {
            Category::Salary | Category::OtherIncome => CategoryKind::Income,
            _ => CategoryKind::Expense,
        }
    }

    pub fn is_income(self) -> bool {
        self.kind() == CategoryKind::Income
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Salary => "Salary",
            Category::OtherIncome => "Other Income",
            Category::Food => "Food",
            Category::Rent => "Rent",
            Category::Entertainment => "Entertainment",
            Category::Utilities => "Utilities",
            Category::Transportation => "Transportation",
            Category::Shopping => "Shopping",
            Category::Healthcare => "Healthcare",
            Category::Other => "Other",
        }
    }

    /// Gives `amount` the sign this category's records carry: income categories
    /// are positive, everything else negative.
    pub fn signed(self, amount: Decimal) -> Decimal {
        match self.kind() {
            CategoryKind::Income => amount.abs(),
            CategoryKind::Expense => -amount.abs(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValidationError::UnknownCategory(s.to_string()))
    }
}

impl TryFrom<String> for Category {
    type Error = ValidationError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub description: String,
    pub amount: Decimal,
    pub category: Category,
    pub date: NaiveDate,
}

/// Payload of create and update. The caller is responsible for handing over
/// well-formed input: non-empty description, non-zero amount, and an amount
/// whose sign matches the category (see [`TransactionInput::validate`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionInput {
    pub description: String,
    #[serde(deserialize_with = "deserialize_decimal_2dp")]
    pub amount: Decimal,
    pub category: Category,
    pub date: NaiveDate,
}

impl TransactionInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.description.trim().is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        if self.amount.is_zero() {
            return Err(ValidationError::ZeroAmount);
        }
        if self.category.signed(self.amount) != self.amount {
            return Err(ValidationError::SignMismatch {
                category: self.category,
                amount: self.amount,
            });
        }
        Ok(())
    }

    pub fn into_transaction(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            description: self.description,
            amount: self.amount,
            category: self.category,
            date: self.date,
        }
    }
}

impl From<Transaction> for TransactionInput {
    fn from(transaction: Transaction) -> Self {
        Self {
            description: transaction.description,
            amount: transaction.amount,
            category: transaction.category,
            date: transaction.date,
        }
    }
}

/// One imported CSV row. The category stays text until [`TryFrom`] turns the
/// row into a [`TransactionInput`], so an unknown name fails that row's
/// validation instead of the whole file's parse.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransactionRow {
    pub description: String,
    #[serde(deserialize_with = "deserialize_decimal_2dp")]
    pub amount: Decimal,
    pub category: String,
    pub date: NaiveDate,
}

impl TryFrom<TransactionRow> for TransactionInput {
    type Error = ValidationError;

    fn try_from(row: TransactionRow) -> Result<Self, Self::Error> {
        let input = TransactionInput {
            description: row.description,
            amount: row.amount,
            category: row.category.parse()?,
            date: row.date,
        };
        input.validate()?;
        Ok(input)
    }
}

fn deserialize_decimal_2dp<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    <Decimal as Deserialize>::deserialize(deserializer)
        .map(|dec| dec.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_income: Decimal,
    /// Negative or zero.
    pub total_expenses: Decimal,
    pub balance: Decimal,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotals {
    pub income: Decimal,
    pub expenses: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn parse_csv_row(row: &str) -> Result<TransactionInput, csv::Error> {
        let data_with_header = format!("description,amount,category,date\n{}", row);
        let mut reader = csv::Reader::from_reader(data_with_header.as_bytes());
        reader.deserialize().next().unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_expense() {
        assert_eq!(
            parse_csv_row("Grocery shopping,-50.25,Food,2025-04-01").unwrap(),
            TransactionInput {
                description: "Grocery shopping".to_string(),
                amount: dec!(-50.25),
                category: Category::Food,
                date: date("2025-04-01"),
            }
        );
    }

    #[test]
    fn test_parse_income_with_spaced_category() {
        assert_eq!(
            parse_csv_row("Freelance payment,500,Other Income,2025-04-10").unwrap(),
            TransactionInput {
                description: "Freelance payment".to_string(),
                amount: dec!(500),
                category: Category::OtherIncome,
                date: date("2025-04-10"),
            }
        );
    }

    fn parse_row(row: &str) -> Result<TransactionRow, csv::Error> {
        let data_with_header = format!("description,amount,category,date\n{}", row);
        let mut reader = csv::Reader::from_reader(data_with_header.as_bytes());
        reader.deserialize().next().unwrap()
    }

    #[test]
    fn test_parse_unknown_category() {
        assert!(parse_csv_row("Lottery,10,Gambling,2025-04-10").is_err());
    }

    #[test]
    fn test_parse_category_ignores_case() {
        let input = parse_csv_row("Lunch,-10,food,2025-04-03").unwrap();
        assert_eq!(input.category, Category::Food);

        let input = parse_csv_row("Freelance payment,500,OTHER INCOME,2025-04-10").unwrap();
        assert_eq!(input.category, Category::OtherIncome);
    }

    #[test]
    fn test_row_with_unknown_category_fails_validation() {
        let row = parse_row("Weekly shop,-80,Groceries,2025-04-03").unwrap();
        assert_eq!(row.category, "Groceries");
        assert_eq!(
            TransactionInput::try_from(row),
            Err(ValidationError::UnknownCategory("Groceries".to_string()))
        );
    }

    #[test]
    fn test_row_into_input() {
        let row = parse_row("Lunch,-10.005,food,2025-04-03").unwrap();
        assert_eq!(
            TransactionInput::try_from(row),
            Ok(TransactionInput {
                description: "Lunch".to_string(),
                amount: dec!(-10.01),
                category: Category::Food,
                date: date("2025-04-03"),
            })
        );

        let row = parse_row("Refund,20,Food,2025-04-05").unwrap();
        assert_eq!(
            TransactionInput::try_from(row),
            Err(ValidationError::SignMismatch {
                category: Category::Food,
                amount: dec!(20)
            })
        );
    }

    #[test]
    fn test_parse_invalid_amount_format() {
        assert!(parse_csv_row("Lunch,abc,Food,2025-04-10").is_err());
    }

    #[test]
    fn test_parse_invalid_date() {
        assert!(parse_csv_row("Lunch,-10,Food,2025-13-40").is_err());
        assert!(parse_csv_row("Lunch,-10,Food,10/04/2025").is_err());
    }

    #[test]
    fn test_rounds_to_2_decimal_places() {
        let input = parse_csv_row("Coffee,-3.456,Food,2025-04-10").unwrap();
        assert_eq!(input.amount, dec!(-3.46));

        let input = parse_csv_row("Coffee,-3.454,Food,2025-04-10").unwrap();
        assert_eq!(input.amount, dec!(-3.45));
    }

    #[test]
    fn test_category_classification() {
        assert!(Category::Salary.is_income());
        assert!(Category::OtherIncome.is_income());
        for category in Category::ALL.into_iter().skip(2) {
            assert_eq!(category.kind(), CategoryKind::Expense, "{category}");
        }
    }

    #[test]
    fn test_category_names_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.name().parse::<Category>(), Ok(category));
        }
        assert_eq!("other income".parse::<Category>(), Ok(Category::OtherIncome));
        assert_eq!(
            "Groceries".parse::<Category>(),
            Err(ValidationError::UnknownCategory("Groceries".to_string()))
        );
    }

    #[test]
    fn test_signed_follows_category() {
        assert_eq!(Category::Salary.signed(dec!(-100)), dec!(100));
        assert_eq!(Category::Food.signed(dec!(100)), dec!(-100));
        assert_eq!(Category::Rent.signed(dec!(-1200)), dec!(-1200));
    }

    #[test]
    fn test_validate_input() {
        let mut input = TransactionInput {
            description: "Rent payment".to_string(),
            amount: dec!(-1200),
            category: Category::Rent,
            date: date("2025-04-03"),
        };
        assert_eq!(input.validate(), Ok(()));

        input.amount = dec!(1200);
        assert_eq!(
            input.validate(),
            Err(ValidationError::SignMismatch {
                category: Category::Rent,
                amount: dec!(1200)
            })
        );

        input.amount = Decimal::ZERO;
        assert_eq!(input.validate(), Err(ValidationError::ZeroAmount));

        input.description = "   ".to_string();
        assert_eq!(input.validate(), Err(ValidationError::EmptyDescription));
    }

    #[test]
    fn test_transaction_id_string_form() {
        assert_eq!(TransactionId(42).to_string(), "42");
        assert_eq!(" 7 ".parse::<TransactionId>(), Ok(TransactionId(7)));
        assert!("abc".parse::<TransactionId>().is_err());
    }
}
