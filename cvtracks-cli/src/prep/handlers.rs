use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use cvtracks_prep::{DEFAULT_SEED, NoopObserver, PrepConfig, PrepSummary, run_prep};

use crate::progress::ProgressObserver;

fn required_path(matches: &ArgMatches, name: &str) -> Result<PathBuf> {
    matches
        .get_one::<String>(name)
        .map(PathBuf::from)
        .with_context(|| format!("--{} is required", name))
}

pub fn config_from_matches(matches: &ArgMatches) -> Result<PrepConfig> {
    let seed = matches
        .get_one::<u64>("seed")
        .copied()
        .unwrap_or(DEFAULT_SEED);

    Ok(PrepConfig::new(
        required_path(matches, "input-variants")?,
        required_path(matches, "output-intervals")?,
        required_path(matches, "output-density")?,
        required_path(matches, "input-chromosome-sizes")?,
    )
    .with_seed(seed))
}

fn log_summary(summary: &PrepSummary) {
    let rejected = &summary.rejected;
    info!(
        "Read {} records: {} admitted, {} rejected",
        summary.records_read,
        summary.admitted,
        rejected.total()
    );
    info!(
        "Rejected: {} chromosome not accepted, CLNSIG {} missing / {} not accepted",
        rejected.unaccepted_chromosome,
        rejected.missing_significance,
        rejected.unaccepted_significance
    );
    info!(
        "Rejected: CLNREVSTAT {} missing / {} not accepted",
        rejected.missing_review_status, rejected.unaccepted_review_status
    );
    info!("Wrote {} density datasets", summary.datasets_written);
}

pub fn run_prep_cmd(matches: &ArgMatches) -> Result<()> {
    let config = config_from_matches(matches)?;

    let summary = if matches.get_flag("no-progress") {
        run_prep(&config, &mut NoopObserver)
    } else {
        run_prep(&config, &mut ProgressObserver::new())
    }
    .with_context(|| format!("Failed to convert {:?}", config.input_variants))?;

    log_summary(&summary);

    Ok(())
}
