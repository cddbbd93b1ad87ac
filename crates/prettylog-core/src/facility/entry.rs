//! Pending log entries and the severity entry points

use std::fmt::{self, Display};

use prettylog_core_types::ansi::RESET;

use crate::errors::FacilityError;
use crate::facility::handle::LogFacility;
use crate::facility::severity::Severity;
use crate::format::substitute;

/// Outcome of flushing an entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlushStatus {
    /// The whole line reached the destination
    Written { bytes: usize },
    /// The facility was never initialized; nothing was written
    Uninitialized,
    /// The destination rejected the write
    Failed(FacilityError),
}

impl FlushStatus {
    pub fn is_written(&self) -> bool {
        matches!(self, FlushStatus::Written { .. })
    }
}

/// A formatted line that has not been written yet
///
/// Nothing reaches the destination until [`flush`](Self::flush) is called;
/// dropping the entry discards it.
#[must_use = "a pending entry writes nothing until flushed"]
#[derive(Clone)]
pub struct PendingLogEntry<'a> {
    facility: &'a LogFacility,
    severity: Severity,
    color: &'static str,
    message: String,
    force_timestamp: bool,
}

impl<'a> PendingLogEntry<'a> {
    fn new(
        facility: &'a LogFacility,
        severity: Severity,
        color: &'static str,
        message: String,
    ) -> Self {
        Self {
            facility,
            severity,
            color,
            message,
            force_timestamp: false,
        }
    }

    /// Include a timestamp segment whatever the display mode
    pub fn timestamp(self) -> Self {
        Self {
            force_timestamp: true,
            ..self
        }
    }

    /// Write the line to the facility's destination
    ///
    /// The display mode is read now, not when the entry was built.
    pub fn flush(self) -> FlushStatus {
        self.facility.write_entry(&self)
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn color(&self) -> &'static str {
        self.color
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn forces_timestamp(&self) -> bool {
        self.force_timestamp
    }
}

impl fmt::Debug for PendingLogEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingLogEntry")
            .field("severity", &self.severity)
            .field("color", &self.color)
            .field("message", &self.message)
            .field("force_timestamp", &self.force_timestamp)
            .finish()
    }
}

/// Compose one output line
///
/// `[` colour tag ` timestamp ` reset `] ` message newline; the timestamp
/// segment is omitted entirely when `timestamp` is `None`.
pub fn render_line(
    color: &str,
    severity: Severity,
    timestamp: Option<&str>,
    message: &str,
) -> String {
    let stamp = timestamp.map(|t| format!(" {} ", t)).unwrap_or_default();
    format!("[{}{}{}{}] {}\n", color, severity.tag(), stamp, RESET, message)
}

impl LogFacility {
    /// Build an entry coloured with the palette's foreground colour
    pub fn entry(&self, severity: Severity, message: impl Display) -> PendingLogEntry<'_> {
        let color = self.palette().foreground(severity);
        PendingLogEntry::new(self, severity, color, message.to_string())
    }

    /// Build an entry whose tag sits on a filled background
    pub fn filled(&self, severity: Severity, message: impl Display) -> PendingLogEntry<'_> {
        let color = self.palette().background(severity);
        PendingLogEntry::new(self, severity, color, message.to_string())
    }

    /// Build an entry from a run-time `%v` format string
    ///
    /// Mismatched verbs and arguments degrade instead of failing; see
    /// [`substitute`].
    pub fn printf(
        &self,
        severity: Severity,
        format: &str,
        args: &[&dyn Display],
    ) -> PendingLogEntry<'_> {
        self.entry(severity, substitute(format, args))
    }

    /// Build and immediately write an entry
    pub fn emit(&self, severity: Severity, message: impl Display) -> FlushStatus {
        self.entry(severity, message).flush()
    }

    /// General log line (green)
    pub fn log(&self, message: impl Display) -> PendingLogEntry<'_> {
        self.entry(Severity::Log, message)
    }

    /// Debug line (cyan)
    pub fn debug(&self, message: impl Display) -> PendingLogEntry<'_> {
        self.entry(Severity::Debug, message)
    }

    /// Error line (red)
    pub fn error(&self, message: impl Display) -> PendingLogEntry<'_> {
        self.entry(Severity::Error, message)
    }

    /// Fatal line (bright red)
    pub fn fatal(&self, message: impl Display) -> PendingLogEntry<'_> {
        self.entry(Severity::Fatal, message)
    }

    /// Info line (cyan)
    pub fn info(&self, message: impl Display) -> PendingLogEntry<'_> {
        self.entry(Severity::Info, message)
    }

    /// Success line (green)
    pub fn success(&self, message: impl Display) -> PendingLogEntry<'_> {
        self.entry(Severity::Success, message)
    }

    /// Failure line (yellow)
    pub fn failure(&self, message: impl Display) -> PendingLogEntry<'_> {
        self.entry(Severity::Failure, message)
    }

    /// OK line (green)
    pub fn ok(&self, message: impl Display) -> PendingLogEntry<'_> {
        self.entry(Severity::Ok, message)
    }

    /// Error line on a filled red background
    pub fn error_bg(&self, message: impl Display) -> PendingLogEntry<'_> {
        self.filled(Severity::Error, message)
    }

    /// Failure line on a filled yellow background
    pub fn failure_bg(&self, message: impl Display) -> PendingLogEntry<'_> {
        self.filled(Severity::Failure, message)
    }
}
