//! Shares one ledger between several tasks through a `LedgerHandle`, then checks
//! the running summary against a full rescan.
//!
//! ```bash
//! cargo run --example async_main -- data/sample_transactions.csv
//! ```

use std::env;
use std::error::Error;
use std::process;

use rusty_tally::{
    read_transactions, Filter, Ledger, LedgerHandle, PageRequest, TransactionInput,
};

#[tokio::main]
async fn main() {
    if let Err(err) = run_app().await {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

async fn run_app() -> Result<(), Box<dyn Error + Send + Sync>> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        return Err("Usage: cargo run --example async_main -- transactions.csv".into());
    }

    let mut inputs = Vec::new();
    for row in read_transactions(&args[1])? {
        inputs.push(TransactionInput::try_from(row?)?);
    }
    let (ledger, service) = LedgerHandle::spawn(Ledger::new());

    // Four writers, each creating every fourth row.
    let mut writers = Vec::new();
    for worker in 0..4 {
        let ledger = ledger.clone();
        let rows: Vec<_> = inputs.iter().skip(worker).step_by(4).cloned().collect();
        writers.push(tokio::spawn(async move {
            for input in rows {
                ledger.create(input).await?;
            }
            Ok::<_, rusty_tally::Error>(())
        }));
    }
    for writer in writers {
        writer.await??;
    }

    let summary = ledger.summary().await?;
    let reconciled = ledger.reconcile().await?;
    println!(
        "income {} / expenses {} / balance {} (consistent: {})",
        summary.total_income,
        summary.total_expenses,
        summary.balance,
        summary == reconciled
    );

    let recent = ledger.query(Filter::default(), PageRequest::new(1, 5)?).await?;
    println!("{} transactions, most recent:", recent.total);
    for transaction in recent.items {
        println!(
            "  {} {:<20} {:>10} {}",
            transaction.date, transaction.description, transaction.amount, transaction.category
        );
    }

    for (category, totals) in ledger.by_category().await? {
        println!(
            "  {:<14} income {:>10} expenses {:>10}",
            category, totals.income, totals.expenses
        );
    }

    drop(ledger);
    service.await?;
    Ok(())
}
