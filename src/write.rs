use crate::data::Error;
use log::info;
use std::{fs::OpenOptions, io::Write, path::Path};

/// Show a report on `console` and append it to the file at `path`, creating
/// it if needed. The file is never truncated: it keeps one block per run.
pub fn write_report<W: Write>(mut console: W, report: &str, path: &Path) -> Result<(), Error> {
    console
        .write_all(report.as_bytes())
        .and_then(|()| console.flush())
        .map_err(Error::Console)?;
    let io_error = |source| Error::Io {
        path: path.to_owned(),
        source,
    };
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(io_error)?;
    file.write_all(report.as_bytes()).map_err(io_error)?;
    info!("report appended to {}", path.display());
    Ok(())
}
