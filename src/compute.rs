use crate::{
    data::{
        Ballot, BudgetRow, CandidateTally, ElectionSummary, Error, FinancialSummary,
        CHANGE_DIGITS, PERCENT_DIGITS,
    },
    read::RowUser,
};
use log::{debug, warn};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use std::collections::HashMap;

/// Round half to even, then pin the scale so that `50` prints as `50.0`.
fn round_to(mut value: Decimal, digits: u32) -> Decimal {
    value = value.round_dp_with_strategy(digits, RoundingStrategy::MidpointNearestEven);
    value.rescale(digits);
    value
}

/// Running state of the budget pipeline. Amounts are kept in file order
/// because the average change needs a second pass over them. I could have
/// kept only the first and last amounts (the deltas telescope anyway), but
/// having the whole series around makes the second pass read like what it
/// computes, and ledgers are a few dozen months at most.
#[derive(Debug, Default)]
pub struct RevenueAggregator {
    total_revenue: i128,
    series: Vec<i64>,
    greatest_increase: i64,
    greatest_increase_date: Option<String>,
    greatest_decrease: i64,
    greatest_decrease_date: Option<String>,
}

impl RevenueAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Close the ledger. Needs at least two months, otherwise there is no
    /// month-to-month change to average.
    pub fn finish(self) -> Result<FinancialSummary, Error> {
        let months = self.series.len();
        let average_change = average_change(&self.series)
            .ok_or(Error::InsufficientData("at least two months are needed"))?;
        if self.greatest_increase_date.is_none() {
            warn!("no month above zero, greatest increase stays at 0");
        }
        if self.greatest_decrease_date.is_none() {
            warn!("no month below zero, greatest decrease stays at 0");
        }
        debug!("budget ledger closed after {months} months");
        Ok(FinancialSummary {
            months,
            total_revenue: self.total_revenue,
            average_change,
            greatest_increase: self.greatest_increase,
            greatest_increase_date: self.greatest_increase_date,
            greatest_decrease: self.greatest_decrease,
            greatest_decrease_date: self.greatest_decrease_date,
        })
    }
}

/// Extrema are compared against their current value, which starts at zero and
/// not at the first month.
impl RowUser<BudgetRow> for RevenueAggregator {
    fn use_row(&mut self, row: BudgetRow) -> Result<(), Error> {
        self.total_revenue += i128::from(row.revenue);
        if row.revenue > self.greatest_increase {
            self.greatest_increase = row.revenue;
            self.greatest_increase_date = Some(row.date.clone());
        }
        if row.revenue < self.greatest_decrease {
            self.greatest_decrease = row.revenue;
            self.greatest_decrease_date = Some(row.date);
        }
        self.series.push(row.revenue);
        Ok(())
    }
}

/// Mean of `series[i] - series[i - 1]`, `None` below two values. Deltas are
/// taken in `i128`: two `i64` amounts can be further apart than `i64` allows.
fn average_change(series: &[i64]) -> Option<Decimal> {
    let deltas: Vec<i128> = series
        .windows(2)
        .map(|w| i128::from(w[1]) - i128::from(w[0]))
        .collect();
    if deltas.is_empty() {
        return None;
    }
    let sum: i128 = deltas.iter().sum();
    let mean = Decimal::from_i128_with_scale(sum, 0) / Decimal::from(deltas.len());
    Some(round_to(mean, CHANGE_DIGITS))
}

/// Running state of the election pipeline: one counter per candidate, filled
/// in a single pass. Recounting every ballot once per candidate gives the
/// very same numbers (there's a test for that), it's just slower, so I went
/// with the map. The `order` vector is only there to list candidates in the
/// order they first show up, since `HashMap` iteration order is anything but
/// stable between runs.
#[derive(Debug, Default)]
pub struct VoteCounter {
    total_votes: u64,
    order: Vec<String>,
    counts: HashMap<String, u64>,
}

impl VoteCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn the counters into shares and pick the winner(s). Every candidate
    /// sharing the best (percentage, votes) pair wins.
    pub fn finish(mut self) -> Result<ElectionSummary, Error> {
        if self.total_votes == 0 {
            return Err(Error::InsufficientData("no votes were cast"));
        }
        let total_votes = self.total_votes;
        let tallies: Vec<CandidateTally> = self
            .order
            .into_iter()
            .map(|name| {
                let votes = self.counts.remove(&name).unwrap_or_default();
                CandidateTally {
                    percentage: vote_share(votes, total_votes),
                    name,
                    votes,
                }
            })
            .collect();
        let best = tallies
            .iter()
            .map(CandidateTally::rank)
            .max()
            .ok_or(Error::InsufficientData("no candidates"))?;
        let winners = tallies
            .iter()
            .filter(|tally| tally.rank() == best)
            .map(|tally| tally.name.clone())
            .collect();
        debug!(
            "{} votes counted for {} candidates",
            total_votes,
            tallies.len()
        );
        Ok(ElectionSummary {
            total_votes,
            tallies,
            winners,
        })
    }
}

impl RowUser<Ballot> for VoteCounter {
    fn use_row(&mut self, ballot: Ballot) -> Result<(), Error> {
        self.total_votes += 1;
        match self.counts.get_mut(&ballot.candidate) {
            Some(votes) => *votes += 1,
            None => {
                self.order.push(ballot.candidate.clone());
                self.counts.insert(ballot.candidate, 1);
            }
        }
        Ok(())
    }
}

fn vote_share(votes: u64, total: u64) -> Decimal {
    round_to(
        Decimal::from(votes) * dec!(100) / Decimal::from(total),
        PERCENT_DIGITS,
    )
}
