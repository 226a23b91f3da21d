use std::error::Error;
use std::io::Write;
use std::path::Path;
use tracing::info;

use super::{accept, Report, ReportData, ReportOptions};
use crate::{csv_utils::read_transactions, Ledger};

/// Loads the given input file into a new ledger and writes the selected report
/// to the provided writer.
///
/// # Arguments
/// * `input_path` - Path to the input CSV file containing transactions
/// * `options` - Which report to produce, and the filter/page for the transaction list
/// * `writer` - Where to write the report (e.g. stdout)
///
/// # Errors
/// Returns an error if:
/// * The input file cannot be read
/// * The CSV is malformed
/// * Writing to the output fails
pub fn run<P, W>(input_path: P, options: &ReportOptions, writer: W) -> Result<(), Box<dyn Error>>
where
    P: AsRef<Path>,
    W: Write,
{
    let mut ledger = Ledger::new();

    for (index, row) in read_transactions(input_path)?.enumerate() {
        // CSV parsing errors are critical - propagate them
        let row = row?;
        if let Some(input) = accept(row, index + 1) {
            ledger.create(input)?;
        }
    }
    info!(records = ledger.len()?, "loaded transactions");

    let data = match options.report {
        Report::Transactions => {
            ReportData::Transactions(ledger.query(&options.filter, options.page)?)
        }
        Report::Summary => ReportData::Summary(ledger.summary()),
        Report::Categories => ReportData::Categories(ledger.by_category()?),
    };
    data.write(writer)?;
    Ok(())
}
