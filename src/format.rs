//! Text layout of both reports. Each block starts with an empty line so that
//! successive runs stay apart once appended to the same file. The financial
//! block also ends with one, as the reports people already have on disk do.

use crate::data::{ElectionSummary, FinancialSummary};
use std::fmt;

const BUDGET_DIVIDER: &str = "--------------------------------";
const ELECTION_DIVIDER: &str = "------------------------------";

/// Stands in for an extremum date the zero-seeded tracking never set.
const NO_DATE: &str = "N/A";

impl fmt::Display for FinancialSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "Financial Analysis")?;
        writeln!(f, "{BUDGET_DIVIDER}")?;
        writeln!(f, "Total Months: {}", self.months)?;
        writeln!(f, "Total Revenue: {}", self.total_revenue)?;
        writeln!(f, "Average Revenue Change: ${}", self.average_change)?;
        writeln!(
            f,
            "Greatest Increase in Revenue: {} (${})",
            self.greatest_increase_date.as_deref().unwrap_or(NO_DATE),
            self.greatest_increase
        )?;
        writeln!(
            f,
            "Greatest Decrease in Revenue: {} (${})",
            self.greatest_decrease_date.as_deref().unwrap_or(NO_DATE),
            self.greatest_decrease
        )?;
        writeln!(f)
    }
}

impl fmt::Display for ElectionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "Election Results")?;
        writeln!(f, "{ELECTION_DIVIDER}")?;
        writeln!(f, "Total Votes: {}", self.total_votes)?;
        writeln!(f, "{ELECTION_DIVIDER}")?;
        for tally in &self.tallies {
            writeln!(f, "{}: {}% ({})", tally.name, tally.percentage, tally.votes)?;
        }
        writeln!(f, "{ELECTION_DIVIDER}")?;
        writeln!(f, "Winner: {}", self.winners.join(" "))?;
        writeln!(f, "{ELECTION_DIVIDER}")
    }
}
