use std::error::Error;
use std::io::Write;
use std::path::Path;

use csv_async::{AsyncReaderBuilder, Trim};
use tokio::fs::File;
use tokio_stream::StreamExt;
use tracing::info;

use super::{accept, Report, ReportData, ReportOptions};
use crate::{dto::TransactionRow, Ledger, LedgerHandle};

type Result<T, E = Box<dyn Error + Send + Sync>> = std::result::Result<T, E>;

/// Runs the loader async on the given input file and writes the selected report to
/// the provided writer.
/// Spawns two tasks:
/// * Ledger service - owns the ledger and applies commands one at a time.
/// * CSV reader - streams rows from the input file, deserializes them and creates
///   a transaction for each valid row through a [`LedgerHandle`].
///
/// Once the reader is done, the report is queried through the same handle.
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
pub async fn run<P, W>(input_path: P, options: &ReportOptions, writer: W) -> Result<()>
where
    P: AsRef<Path>,
    W: Write,
{
    let (ledger, service) = LedgerHandle::spawn(Ledger::new());
    let input_path = input_path.as_ref().to_owned();

    let reader_handle = tokio::spawn(read_transactions(input_path, ledger.clone()));

    // Wait for reader to finish and propagate any errors
    let loaded = reader_handle.await??;
    info!(records = loaded, "loaded transactions");

    let data = match options.report {
        Report::Transactions => {
            ReportData::Transactions(ledger.query(options.filter.clone(), options.page).await?)
        }
        Report::Summary => ReportData::Summary(ledger.summary().await?),
        Report::Categories => ReportData::Categories(ledger.by_category().await?),
    };

    // Dropping the last handle stops the service
    drop(ledger);
    service.await?;

    data.write(writer)?;
    Ok(())
}

/// Reads and deserializes transactions from a CSV file, creating each valid one
/// through `ledger`. Returns the number of transactions created.
async fn read_transactions(
    input_path: impl AsRef<Path> + Send,
    ledger: LedgerHandle,
) -> Result<usize> {
    let file = File::open(input_path).await?;
    let mut csv_reader = AsyncReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .create_deserializer(file);

    let mut records = csv_reader.deserialize::<TransactionRow>();
    let mut index = 0;
    let mut loaded = 0;
    while let Some(result) = records.next().await {
        index += 1;
        // CSV parsing errors are critical - propagate them
        let row = result?;
        if let Some(input) = accept(row, index) {
            ledger.create(input).await?;
            loaded += 1;
        }
    }
    Ok(loaded)
}
