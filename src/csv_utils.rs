//! CSV import and export.
//!
//! Transactions are read as [`TransactionRow`]s (`description,amount,category,date`)
//! since ids belong to the store. Reports are written from any serializable row type.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

use crate::dto::TransactionRow;

/// Creates an iterator that reads CSV records from a file.
/// Each record is deserialized into type T.
pub fn read_csv<T, P>(path: P) -> csv::Result<impl Iterator<Item = csv::Result<T>>>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    Ok(csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?
        .into_deserialize())
}

/// Reads transaction rows from a file. Rows are not validated here.
pub fn read_transactions<P>(
    path: P,
) -> csv::Result<impl Iterator<Item = csv::Result<TransactionRow>>>
where
    P: AsRef<Path>,
{
    read_csv::<TransactionRow, _>(path)
}

/// Writes an iterator of records to a CSV writer.
/// Each record must implement Serialize. The header comes from the first
/// record, so an empty iterator writes nothing; see [`write_header`].
pub fn write_csv<T, W>(writer: W, records: impl Iterator<Item = T>) -> csv::Result<()>
where
    T: Serialize,
    W: Write,
{
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes a lone header row, for reports that have no records.
pub fn write_header<W: Write>(writer: W, header: &[&str]) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(header)?;
    wtr.flush()?;
    Ok(())
}
