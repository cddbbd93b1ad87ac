use thiserror::Error;

/// Result type alias using FacilityError
pub type Result<T> = std::result::Result<T, FacilityError>;

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// handling, testing, and CLI exit reporting. The taxonomy is intentionally
/// small: most misuse of the facility degrades instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Display mode name not recognised (strict parsing only)
    UnknownMode,
    /// Severity name not recognised
    UnknownSeverity,
    /// Colour name not recognised
    UnknownColor,
    Io,
    Serialization,
}

impl ErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::UnknownMode => "ERR_UNKNOWN_MODE",
            ErrorKind::UnknownSeverity => "ERR_UNKNOWN_SEVERITY",
            ErrorKind::UnknownColor => "ERR_UNKNOWN_COLOR",
            ErrorKind::Io => "ERR_IO",
            ErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Error taxonomy for facility operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FacilityError {
    /// Display mode name is not `SIMPLE` or `TIMEBASED`
    #[error("Unknown display mode: {name:?}")]
    UnknownDisplayMode { name: String },

    /// Severity name does not match any severity
    #[error("Unknown severity: {name:?}")]
    UnknownSeverity { name: String },

    /// Colour name does not match any ANSI colour
    #[error("Unknown colour: {name:?}")]
    UnknownColor { name: String },

    /// Writing to the destination failed
    #[error("Write to destination failed: {reason}")]
    WriteFailed { reason: String },

    /// Settings file could not be read
    #[error("Failed to read settings from {path}: {reason}")]
    SettingsRead { path: String, reason: String },

    /// Settings file is not valid TOML or has unexpected fields
    #[error("Invalid settings: {reason}")]
    SettingsParse { reason: String },
}

impl FacilityError {
    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            FacilityError::UnknownDisplayMode { .. } => ErrorKind::UnknownMode,
            FacilityError::UnknownSeverity { .. } => ErrorKind::UnknownSeverity,
            FacilityError::UnknownColor { .. } => ErrorKind::UnknownColor,
            FacilityError::WriteFailed { .. } | FacilityError::SettingsRead { .. } => {
                ErrorKind::Io
            }
            FacilityError::SettingsParse { .. } => ErrorKind::Serialization,
        }
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }
}

impl From<std::io::Error> for FacilityError {
    fn from(err: std::io::Error) -> Self {
        FacilityError::WriteFailed {
            reason: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for FacilityError {
    fn from(err: toml::de::Error) -> Self {
        FacilityError::SettingsParse {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts_to_write_failed() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: FacilityError = io.into();

        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.to_string().contains("pipe closed"));
    }

    #[test]
    fn test_display_includes_name() {
        let err = FacilityError::UnknownSeverity {
            name: "loud".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown severity: \"loud\"");
    }
}
