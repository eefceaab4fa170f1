use crate::data::Error;
use log::debug;
use serde::de::DeserializeOwned;
use std::{fs::File, path::Path};

/// Trait for doing something with a row read from a CSV file. Implemented by
/// the aggregators, but also by plain collectors in tests to check what the
/// reader hands out.
pub trait RowUser<T> {
    fn use_row(&mut self, row: T) -> Result<(), Error>;
}

/// Open a ledger file for reading.
pub fn open_source(path: &Path) -> Result<File, Error> {
    File::open(path).map_err(|source| Error::Io {
        path: path.to_owned(),
        source,
    })
}

/// Simple CSV importer: skips the header, trims every field and deserializes
/// the remaining lines by column position. Returns the number of rows fed to
/// `user`.
/// Header names are never looked at, I only trust the column order. Crude, but
/// it's exactly as fragile as the spreadsheets these files come from.
pub fn read_rows<R, T, U>(reader: R, user: &mut U) -> Result<usize, Error>
where
    R: std::io::Read,
    T: DeserializeOwned,
    U: RowUser<T>,
{
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut count = 0;
    for result in rdr.records() {
        let record = result?;
        let row: T = record.deserialize(None)?;
        user.use_row(row)?;
        count += 1;
    }
    debug!("read {count} rows");
    Ok(count)
}
