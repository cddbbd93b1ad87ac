pub mod demo;
pub mod emit;

use std::path::PathBuf;

use clap::Args;
use prettylog_core::facility::{FlushStatus, LogFacility};
use prettylog_core::settings::{Destination, FacilitySettings};

/// Options shared by every command that builds a facility
#[derive(Debug, Args)]
pub struct FacilityArgs {
    /// Display mode (SIMPLE or TIMEBASED; anything else means SIMPLE)
    #[arg(short, long)]
    pub mode: Option<String>,

    /// TOML settings file (mode, destination, colours)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write to stderr instead of stdout
    #[arg(long)]
    pub stderr: bool,
}

impl FacilityArgs {
    /// Build a facility from the settings file, then apply flag overrides
    pub fn build(&self) -> Result<LogFacility, Box<dyn std::error::Error>> {
        let mut settings = match &self.config {
            Some(path) => FacilitySettings::load(path)?,
            None => FacilitySettings::default(),
        };

        if let Some(mode) = &self.mode {
            settings.mode = mode.clone();
        }
        if self.stderr {
            settings.destination = Destination::Stderr;
        }

        Ok(LogFacility::with_config(settings.to_config()?))
    }
}

/// Turn a failed write into a command error
pub fn check(status: FlushStatus) -> Result<(), Box<dyn std::error::Error>> {
    match status {
        FlushStatus::Failed(err) => Err(err.into()),
        FlushStatus::Written { .. } | FlushStatus::Uninitialized => Ok(()),
    }
}
