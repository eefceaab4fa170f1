//! Summary reports for two kinds of dated ledgers: monthly revenue figures
//! (`budget` binary) and one-row-per-vote election results (`election`
//! binary). Both read a CSV file, reduce it, then print the report and
//! append it to a text file.

pub mod compute;
pub mod data;
pub mod format;
pub mod pipeline;
pub mod read;
pub mod write;
