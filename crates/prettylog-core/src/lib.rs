//! prettylog core - colourful console log lines
//!
//! This crate provides the log facility and its supporting pieces:
//! - A configurable [`LogFacility`](facility::LogFacility) with one entry
//!   point per severity and a shared default instance
//! - Pending entries with per-entry timestamp override and explicit flush
//! - Run-time `%v` substitution for format strings known only at run time
//! - TOML settings describing mode, destination and palette
//! - Diagnostics and capture helpers for the facility's own behaviour

pub mod diagnostics;
pub mod errors;
pub mod facility;
pub mod format;
pub mod settings;

// Re-export commonly used types
pub use errors::{ErrorKind, FacilityError, Result};
pub use facility::{init, DisplayMode, FlushStatus, LogFacility, PendingLogEntry, Severity};
pub use format::substitute;
pub use settings::FacilitySettings;
