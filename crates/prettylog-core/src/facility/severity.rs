//! Severities and their colours

use std::fmt;
use std::str::FromStr;

use prettylog_core_types::{ansi, tags};

use crate::errors::FacilityError;

/// Named log category determining tag text and default colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Log,
    Debug,
    Error,
    Fatal,
    Info,
    Success,
    Failure,
    Ok,
}

impl Severity {
    /// Every severity, in canonical order
    pub const ALL: [Severity; 8] = [
        Severity::Log,
        Severity::Debug,
        Severity::Error,
        Severity::Fatal,
        Severity::Info,
        Severity::Success,
        Severity::Failure,
        Severity::Ok,
    ];

    /// Bare upper-case name (`"LOG"`, `"DEBUG"`, ...)
    pub fn name(&self) -> &'static str {
        match self {
            Severity::Log => "LOG",
            Severity::Debug => "DEBUG",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
            Severity::Info => "INFO",
            Severity::Success => "SUCCESS",
            Severity::Failure => "FAILURE",
            Severity::Ok => "OK",
        }
    }

    /// Tag text padded to [`tags::TAG_WIDTH`] columns
    pub fn tag(&self) -> &'static str {
        match self {
            Severity::Log => tags::TAG_LOG,
            Severity::Debug => tags::TAG_DEBUG,
            Severity::Error => tags::TAG_ERROR,
            Severity::Fatal => tags::TAG_FATAL,
            Severity::Info => tags::TAG_INFO,
            Severity::Success => tags::TAG_SUCCESS,
            Severity::Failure => tags::TAG_FAILURE,
            Severity::Ok => tags::TAG_OK,
        }
    }

    /// Foreground colour used when no palette override exists
    pub fn default_foreground(&self) -> &'static str {
        match self {
            Severity::Log | Severity::Success | Severity::Ok => ansi::GREEN_FG,
            Severity::Debug | Severity::Info => ansi::CYAN_FG,
            Severity::Error => ansi::RED_FG,
            Severity::Fatal => ansi::BRIGHT_RED_FG,
            Severity::Failure => ansi::YELLOW_FG,
        }
    }

    /// Filled background colour used when no palette override exists
    pub fn default_background(&self) -> &'static str {
        match self {
            Severity::Log | Severity::Success | Severity::Ok => ansi::GREEN_BG,
            Severity::Debug | Severity::Info => ansi::CYAN_BG,
            Severity::Error => ansi::RED_BG,
            Severity::Fatal => ansi::BRIGHT_RED_BG,
            Severity::Failure => ansi::YELLOW_BG,
        }
    }

    fn index(self) -> usize {
        match self {
            Severity::Log => 0,
            Severity::Debug => 1,
            Severity::Error => 2,
            Severity::Fatal => 3,
            Severity::Info => 4,
            Severity::Success => 5,
            Severity::Failure => 6,
            Severity::Ok => 7,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Severity {
    type Err = FacilityError;

    /// Case-insensitive; accepts the bare names shown by [`Severity::name`]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Severity::ALL
            .into_iter()
            .find(|severity| severity.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| FacilityError::UnknownSeverity {
                name: s.to_string(),
            })
    }
}

/// Foreground and filled-background colour for every severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    foreground: [&'static str; 8],
    background: [&'static str; 8],
}

impl Palette {
    /// Colour used by the plain entry points
    pub fn foreground(&self, severity: Severity) -> &'static str {
        self.foreground[severity.index()]
    }

    /// Colour used by the filled-background entry points
    pub fn background(&self, severity: Severity) -> &'static str {
        self.background[severity.index()]
    }

    /// Override the foreground colour of one severity
    pub fn with_foreground(mut self, severity: Severity, code: &'static str) -> Self {
        self.foreground[severity.index()] = code;
        self
    }

    /// Override the filled-background colour of one severity
    pub fn with_background(mut self, severity: Severity, code: &'static str) -> Self {
        self.background[severity.index()] = code;
        self
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            foreground: Severity::ALL.map(|s| s.default_foreground()),
            background: Severity::ALL.map(|s| s.default_background()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_match_names() {
        for severity in Severity::ALL {
            assert_eq!(severity.tag().trim(), severity.name());
            assert_eq!(severity.tag().len(), tags::TAG_WIDTH);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("info".parse::<Severity>().unwrap(), Severity::Info);
        assert_eq!("OK".parse::<Severity>().unwrap(), Severity::Ok);
        assert_eq!(" Failure ".parse::<Severity>().unwrap(), Severity::Failure);
    }

    #[test]
    fn test_parse_unknown_severity() {
        let err = "warn".parse::<Severity>().unwrap_err();
        assert_eq!(err.code(), "ERR_UNKNOWN_SEVERITY");
    }

    #[test]
    fn test_default_palette_colours() {
        let palette = Palette::default();
        assert_eq!(palette.foreground(Severity::Log), ansi::GREEN_FG);
        assert_eq!(palette.foreground(Severity::Info), ansi::CYAN_FG);
        assert_eq!(palette.foreground(Severity::Fatal), ansi::BRIGHT_RED_FG);
        assert_eq!(palette.foreground(Severity::Failure), ansi::YELLOW_FG);
        assert_eq!(palette.background(Severity::Error), ansi::RED_BG);
        assert_eq!(palette.background(Severity::Failure), ansi::YELLOW_BG);
    }

    #[test]
    fn test_palette_override_touches_one_severity() {
        let palette = Palette::default().with_foreground(Severity::Info, ansi::MAGENTA_FG);

        assert_eq!(palette.foreground(Severity::Info), ansi::MAGENTA_FG);
        assert_eq!(palette.foreground(Severity::Debug), ansi::CYAN_FG);
    }
}
