//! Facility initialization
//!
//! Provides the display mode, the configuration value that initialization
//! installs, and the entry points for the shared default facility.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use prettylog_core_types::schema::{EVENT_MODE_FALLBACK, OP_INITIALIZE};
use serde::{Deserialize, Serialize};

use crate::errors::FacilityError;
use crate::facility::clock::{Clock, SystemClock};
use crate::facility::handle::LogFacility;
use crate::facility::severity::Palette;

/// Whether every emitted line carries a timestamp segment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DisplayMode {
    /// Timestamps only on entries that ask for one
    #[default]
    Simple,
    /// Timestamps on every entry
    TimeBased,
}

impl DisplayMode {
    /// Canonical upper-case name (`"SIMPLE"` or `"TIMEBASED"`)
    pub fn name(&self) -> &'static str {
        match self {
            DisplayMode::Simple => "SIMPLE",
            DisplayMode::TimeBased => "TIMEBASED",
        }
    }

    /// Resolve a mode name, falling back to [`DisplayMode::Simple`]
    ///
    /// Matching is case-sensitive. Unrecognised names are not an error; a
    /// debug diagnostic records the fallback.
    pub fn from_name(name: &str) -> Self {
        match name.parse() {
            Ok(mode) => mode,
            Err(_) => {
                if !name.is_empty() {
                    tracing::debug!(
                        component = module_path!(),
                        op = OP_INITIALIZE,
                        event = EVENT_MODE_FALLBACK,
                        requested = name,
                    );
                }
                DisplayMode::Simple
            }
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DisplayMode {
    type Err = FacilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SIMPLE" => Ok(DisplayMode::Simple),
            "TIMEBASED" => Ok(DisplayMode::TimeBased),
            other => Err(FacilityError::UnknownDisplayMode {
                name: other.to_string(),
            }),
        }
    }
}

impl From<&str> for DisplayMode {
    fn from(name: &str) -> Self {
        DisplayMode::from_name(name)
    }
}

/// Configuration installed by initialization
///
/// Initialization always installs a complete value; nothing carries over
/// from the previous configuration.
pub struct LogFacilityConfig {
    pub(crate) mode: DisplayMode,
    pub(crate) destination: Box<dyn Write + Send>,
    pub(crate) palette: Palette,
    pub(crate) clock: Box<dyn Clock>,
}

impl LogFacilityConfig {
    /// Standard output, default palette, local wall clock
    pub fn new(mode: impl Into<DisplayMode>) -> Self {
        Self {
            mode: mode.into(),
            destination: Box::new(std::io::stdout()),
            palette: Palette::default(),
            clock: Box::new(SystemClock),
        }
    }

    /// Write lines to `destination` instead of standard output
    pub fn with_destination(mut self, destination: impl Write + Send + 'static) -> Self {
        self.destination = Box::new(destination);
        self
    }

    /// Replace the colour palette
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Replace the time source used for timestamp segments
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }
}

impl Default for LogFacilityConfig {
    fn default() -> Self {
        Self::new(DisplayMode::Simple)
    }
}

impl fmt::Debug for LogFacilityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogFacilityConfig")
            .field("mode", &self.mode)
            .field("palette", &self.palette)
            .finish_non_exhaustive()
    }
}

/// Initialize the shared default facility, writing to standard output
///
/// Unrecognised mode names fall back to `SIMPLE`. Calling this again
/// replaces the configuration wholesale.
///
/// # Example
///
/// ```
/// use prettylog_core::facility::{init, DisplayMode};
///
/// init("TIMEBASED");
/// init(DisplayMode::Simple);
/// ```
pub fn init(mode: impl Into<DisplayMode>) {
    LogFacility::global().initialize(mode);
}

/// Initialize the shared default facility with a complete configuration
pub fn init_with(config: LogFacilityConfig) {
    LogFacility::global().initialize_with(config);
}
