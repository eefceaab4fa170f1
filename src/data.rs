use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

pub const BUDGET_SOURCE: &str = "Resources/budget_data_1.csv";
pub const BUDGET_REPORT: &str = "Financial_Analysis.txt";
pub const ELECTION_SOURCE: &str = "Resources/election_data_2.csv";
pub const ELECTION_REPORT: &str = "Election_Results.txt";

/// Decimal places kept for the average revenue change and for vote shares.
pub const CHANGE_DIGITS: u32 = 2;
pub const PERCENT_DIGITS: u32 = 1;

/// One line of the budget ledger. Columns are read by position, the header
/// names are never looked at.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BudgetRow {
    pub date: String,
    pub revenue: i64,
}

/// One cast vote. Only `candidate` matters, the two other columns are kept
/// so that a row with a missing column is rejected by the reader.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Ballot {
    pub voter_id: String,
    pub county: String,
    pub candidate: String,
}

/// Result of reducing a budget ledger. The total is kept wider than the
/// amounts themselves, so a ledger full of huge months still adds up.
///
/// Both extrema start at zero rather than at the first month, so a ledger
/// whose amounts never go above zero has no increase date (and symmetrically
/// for the decrease), hence the optional dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinancialSummary {
    pub months: usize,
    pub total_revenue: i128,
    pub average_change: Decimal,
    pub greatest_increase: i64,
    pub greatest_increase_date: Option<String>,
    pub greatest_decrease: i64,
    pub greatest_decrease_date: Option<String>,
}

/// Final share of one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateTally {
    pub name: String,
    pub percentage: Decimal,
    pub votes: u64,
}

impl CandidateTally {
    /// Key used to pick the winner(s): percentage first, then raw count.
    pub fn rank(&self) -> (Decimal, u64) {
        (self.percentage, self.votes)
    }
}

/// Result of reducing a poll. `tallies` follow the order in which candidates
/// first appear in the input; `winners` is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElectionSummary {
    pub total_votes: u64,
    pub tallies: Vec<CandidateTally>,
    pub winners: Vec<String>,
}

/// Everything that can abort a run. There's no partial report: any of these
/// stops the pipeline before anything is written.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Cannot write report to console: {0}")]
    Console(#[source] std::io::Error),
    #[error("Malformed row: {0}")]
    Format(#[from] csv::Error),
    #[error("Not enough data: {0}")]
    InsufficientData(&'static str),
}
