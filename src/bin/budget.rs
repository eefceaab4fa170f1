use ledger_reports::{
    data::{BUDGET_REPORT, BUDGET_SOURCE},
    pipeline::run_budget,
};
use std::path::Path;

fn main() -> Result<(), anyhow::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    run_budget(
        Path::new(BUDGET_SOURCE),
        Path::new(BUDGET_REPORT),
        std::io::stdout(),
    )?;
    Ok(())
}
