//! Demo command
//!
//! Usage: prettylog demo [--mode <MODE>] [--config <FILE>]

use clap::Args;
use prettylog_core::{
    log_debug, log_error_bg, log_failure, log_failure_bg, log_fatal, log_general, log_info, log_ok,
};

use super::{check, FacilityArgs};

#[derive(Debug, Args)]
pub struct DemoArgs {
    #[command(flatten)]
    pub facility: FacilityArgs,
}

/// Execute demo command
pub fn execute(args: DemoArgs) -> Result<(), Box<dyn std::error::Error>> {
    let facility = args.facility.build()?;

    check(log_general!(target: facility, "connecting to database...").flush())?;
    check(log_ok!(target: facility, "database connected").flush())?;
    check(log_info!(target: facility, "preparing to execute query...").flush())?;
    check(
        log_debug!(target: facility, "query: {}", "SELECT * FROM users WHERE username = $1")
            .flush(),
    )?;
    check(log_failure!(target: facility, "failed to execute query").flush())?;
    check(log_failure_bg!(target: facility, "failed to execute query").flush())?;
    check(log_fatal!(target: facility, "segmentation fault, core dumped").flush())?;
    check(log_error_bg!(target: facility, "DUMPING CORE..").flush())?;

    Ok(())
}
