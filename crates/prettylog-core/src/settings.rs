//! Facility settings loaded from TOML
//!
//! ```toml
//! mode = "TIMEBASED"
//! destination = "stderr"
//!
//! [colors]
//! info = "magenta"
//!
//! [background_colors]
//! error = "bright_red"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use prettylog_core_types::ansi;
use serde::{Deserialize, Serialize};

use crate::errors::{FacilityError, Result};
use crate::facility::{DisplayMode, LogFacilityConfig, Palette, Severity};

/// Standard stream a configured facility writes to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Destination {
    #[default]
    Stdout,
    Stderr,
}

/// On-disk description of a facility configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FacilitySettings {
    /// Mode name; unrecognised names fall back to `SIMPLE`
    pub mode: String,
    pub destination: Destination,
    /// Foreground colour name per severity name
    pub colors: BTreeMap<String, String>,
    /// Filled-background colour name per severity name
    pub background_colors: BTreeMap<String, String>,
}

impl FacilitySettings {
    /// Parse settings from TOML text
    ///
    /// # Errors
    ///
    /// Returns `SettingsParse` for malformed TOML or unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a settings file
    ///
    /// # Errors
    ///
    /// Returns `SettingsRead` when the file cannot be read and
    /// `SettingsParse` when its contents are invalid.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| FacilityError::SettingsRead {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&text)
    }

    pub fn display_mode(&self) -> DisplayMode {
        DisplayMode::from_name(&self.mode)
    }

    /// Default palette with the configured overrides applied
    ///
    /// # Errors
    ///
    /// Returns `UnknownSeverity` or `UnknownColor` for names that do not
    /// resolve.
    pub fn palette(&self) -> Result<Palette> {
        let mut palette = Palette::default();

        for (severity, color) in &self.colors {
            let severity: Severity = severity.parse()?;
            let code = ansi::foreground_by_name(color)
                .ok_or_else(|| FacilityError::UnknownColor { name: color.clone() })?;
            palette = palette.with_foreground(severity, code);
        }

        for (severity, color) in &self.background_colors {
            let severity: Severity = severity.parse()?;
            let code = ansi::background_by_name(color)
                .ok_or_else(|| FacilityError::UnknownColor { name: color.clone() })?;
            palette = palette.with_background(severity, code);
        }

        Ok(palette)
    }

    /// Build the configuration these settings describe
    ///
    /// # Errors
    ///
    /// Propagates palette resolution errors.
    pub fn to_config(&self) -> Result<LogFacilityConfig> {
        let config = LogFacilityConfig::new(self.display_mode()).with_palette(self.palette()?);
        Ok(match self.destination {
            Destination::Stdout => config,
            Destination::Stderr => config.with_destination(std::io::stderr()),
        })
    }
}
