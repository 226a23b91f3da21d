//! This example generates a CSV file of transactions covering a number of months
//! supplied as a command-line argument.
//!
//! The CSV file can then be fed to the `rusty-tally` binary.
//!
//! Example (12 months):
//! ```bash
//! cargo run --example generator 12 > data/12_months.csv
//! ```
//! ### Maths
//! Every month m (1-based) contains the same pattern, scaled by m:
//! - Salary: 3000·m on the 1st
//! - Other Income: 100·m on the 15th
//! - Rent: -1000·m on the 2nd
//! - Food: four purchases of -25·m (the 3rd, 10th, 17th and 24th)
//! - Utilities: -80·m on the 20th
//!
//! So month m adds 3100·m income and -1180·m expenses. Over M months, with S = M·(M+1)/2:
//! - totalIncome = 3100·S
//! - totalExpenses = -1180·S
//! - balance = 1920·S
//!
//! `rusty-tally <file> --report summary` should print exactly these numbers.

use chrono::NaiveDate;
use csv::Writer;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use rusty_tally::{Category, TransactionInput};
use std::{env, error::Error};

/// (day of month, description, base amount, category)
const MONTH: [(u32, &str, Decimal, Category); 8] = [
    (1, "Monthly salary", dec!(3000), Category::Salary),
    (2, "Rent payment", dec!(-1000), Category::Rent),
    (3, "Grocery shopping", dec!(-25), Category::Food),
    (10, "Grocery shopping", dec!(-25), Category::Food),
    (15, "Freelance payment", dec!(100), Category::OtherIncome),
    (17, "Grocery shopping", dec!(-25), Category::Food),
    (20, "Electricity bill", dec!(-80), Category::Utilities),
    (24, "Grocery shopping", dec!(-25), Category::Food),
];

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: cargo run --example generator <num_months>");
        std::process::exit(1);
    }

    let num_months: u32 = match args[1].parse() {
        Ok(n) if n > 0 => n,
        _ => {
            eprintln!("Error: <num_months> must be a positive integer.");
            std::process::exit(1);
        }
    };

    let mut wtr = Writer::from_writer(std::io::stdout());

    for m in 1..=num_months {
        let year = 2025 + ((m - 1) / 12) as i32;
        let month = (m - 1) % 12 + 1;
        let scale = Decimal::from(m);
        for (day, description, amount, category) in MONTH {
            let date = NaiveDate::from_ymd_opt(year, month, day).ok_or("invalid date")?;
            wtr.serialize(TransactionInput {
                description: description.to_string(),
                amount: amount * scale,
                category,
                date,
            })?;
        }
    }
    wtr.flush()?;
    Ok(())
}
