//! Emit command
//!
//! Usage: prettylog emit <SEVERITY> <FORMAT> [ARGS]... [--timestamp] [--filled]

use std::fmt::Display;

use clap::Args;
use prettylog_core::facility::Severity;

use super::{check, FacilityArgs};

#[derive(Debug, Args)]
pub struct EmitArgs {
    /// Severity name (log, debug, error, fatal, info, success, failure, ok)
    pub severity: String,

    /// Message, with `%v` marking where each argument goes
    pub format: String,

    /// Values substituted into the format, left to right
    pub args: Vec<String>,

    /// Include a timestamp whatever the mode
    #[arg(short, long)]
    pub timestamp: bool,

    /// Fill the tag background instead of colouring the text
    #[arg(long)]
    pub filled: bool,

    #[command(flatten)]
    pub facility: FacilityArgs,
}

/// Execute emit command
pub fn execute(args: EmitArgs) -> Result<(), Box<dyn std::error::Error>> {
    let severity: Severity = args.severity.parse()?;
    let facility = args.facility.build()?;

    let values: Vec<&dyn Display> = args.args.iter().map(|a| a as &dyn Display).collect();
    let message = prettylog_core::substitute(&args.format, &values);

    let entry = if args.filled {
        facility.filled(severity, message)
    } else {
        facility.entry(severity, message)
    };
    let entry = if args.timestamp { entry.timestamp() } else { entry };

    check(entry.flush())
}
