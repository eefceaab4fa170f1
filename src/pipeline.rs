use crate::{
    compute::{RevenueAggregator, VoteCounter},
    data::{Ballot, BudgetRow, ElectionSummary, Error, FinancialSummary},
    read::{open_source, read_rows},
    write::write_report,
};
use log::debug;
use std::{io::Write, path::Path};

/// Budget analysis: read the ledger at `source`, print the financial report
/// on `console` and append it to `report`.
pub fn run_budget<W: Write>(
    source: &Path,
    report: &Path,
    console: W,
) -> Result<FinancialSummary, Error> {
    debug!("reading budget ledger {}", source.display());
    let mut aggregator = RevenueAggregator::new();
    read_rows::<_, BudgetRow, _>(open_source(source)?, &mut aggregator)?;
    let summary = aggregator.finish()?;
    write_report(console, &summary.to_string(), report)?;
    Ok(summary)
}

/// Election analysis: count the ballots at `source`, print the results on
/// `console` and append them to `report`.
pub fn run_election<W: Write>(
    source: &Path,
    report: &Path,
    console: W,
) -> Result<ElectionSummary, Error> {
    debug!("reading ballots {}", source.display());
    let mut counter = VoteCounter::new();
    read_rows::<_, Ballot, _>(open_source(source)?, &mut counter)?;
    let summary = counter.finish()?;
    write_report(console, &summary.to_string(), report)?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use crate::{
        data::Error,
        pipeline::{run_budget, run_election},
    };
    use std::fs;

    #[test]
    fn budget_run() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("budget.csv");
        let report = dir.path().join("Financial_Analysis.txt");
        fs::write(
            &source,
            "Date,Revenue\nJan-14,867884\nFeb-14,984655\nMar-14,322013\nApr-14,-69417\nMay-14,310503\n",
        )
        .unwrap();
        let mut console = Vec::<u8>::new();
        let summary = run_budget(&source, &report, &mut console).unwrap();
        assert_eq!(summary.months, 5);
        let printed = String::from_utf8(console).unwrap();
        assert!(printed.contains("Average Revenue Change: $-139345.25\n"));
        assert_eq!(fs::read_to_string(&report).unwrap(), printed);

        let again = run_budget(&source, &report, std::io::sink()).unwrap();
        assert_eq!(again, summary);
        assert_eq!(fs::read_to_string(&report).unwrap(), printed.repeat(2));
    }

    #[test]
    fn election_run() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("election.csv");
        let report = dir.path().join("Election_Results.txt");
        fs::write(
            &source,
            "Voter ID,County,Candidate\n1,Marsh,Khan\n2,Marsh,Correy\n3,Queen,Li\n4,Queen,Khan\n5,Trandee,Khan\n6,Raffah,Li\n",
        )
        .unwrap();
        let mut console = Vec::<u8>::new();
        let summary = run_election(&source, &report, &mut console).unwrap();
        assert_eq!(summary.winners, ["Khan"]);
        let printed = String::from_utf8(console).unwrap();
        assert!(printed.contains("\nLi: 33.3% (2)\n"));
        assert_eq!(fs::read_to_string(&report).unwrap(), printed);
    }

    #[test]
    fn missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let report = dir.path().join("Election_Results.txt");
        assert!(matches!(
            run_election(&dir.path().join("nope.csv"), &report, std::io::sink()),
            Err(Error::Io { .. })
        ));
        assert!(!report.exists());
    }

    #[test]
    fn no_report_on_bad_row() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("budget.csv");
        let report = dir.path().join("Financial_Analysis.txt");
        fs::write(&source, "Date,Revenue\nJan-14,10\nFeb-14,ten\n").unwrap();
        let mut console = Vec::<u8>::new();
        assert!(matches!(
            run_budget(&source, &report, &mut console),
            Err(Error::Format(_))
        ));
        assert!(console.is_empty());
        assert!(!report.exists());
    }

    #[test]
    fn no_report_on_empty_poll() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("election.csv");
        let report = dir.path().join("Election_Results.txt");
        fs::write(&source, "Voter ID,County,Candidate\n").unwrap();
        assert!(matches!(
            run_election(&source, &report, std::io::sink()),
            Err(Error::InsufficientData(_))
        ));
        assert!(!report.exists());
    }
}
