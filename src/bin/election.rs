use ledger_reports::{
    data::{ELECTION_REPORT, ELECTION_SOURCE},
    pipeline::run_election,
};
use std::path::Path;

fn main() -> Result<(), anyhow::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    run_election(
        Path::new(ELECTION_SOURCE),
        Path::new(ELECTION_REPORT),
        std::io::stdout(),
    )?;
    Ok(())
}
