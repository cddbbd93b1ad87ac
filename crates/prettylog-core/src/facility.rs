//! Console log facility
//!
//! This module provides the pretty console logger:
//! - Initialization via `init(mode)` or an explicit [`LogFacility`] value
//! - One entry point per severity, returning a [`PendingLogEntry`]
//! - Per-entry timestamp override with `.timestamp()`
//! - Explicit write with `.flush()`, reporting a [`FlushStatus`]
//! - Capture helpers for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use prettylog_core::facility::{FlushStatus, LogFacility};
//! use prettylog_core::facility::test_capture::SharedBuffer;
//!
//! let out = SharedBuffer::new();
//! let facility = LogFacility::new();
//! facility.initialize_with_destination("SIMPLE", out.clone());
//!
//! let status = facility.log("connecting to database...").flush();
//! assert!(status.is_written());
//! assert_eq!(out.contents(), "[\x1b[32m   LOG   \x1b[0m] connecting to database...\n");
//! ```
//!
//! # Logging Macros
//!
//! - `log_general!`, `log_debug!`, `log_error!`, `log_fatal!`, `log_info!`,
//!   `log_success!`, `log_failure!`, `log_ok!` - one per severity
//! - `log_error_bg!`, `log_failure_bg!` - filled-background variants
//! - `emit!(severity, ...)` - build and write in one step

pub mod clock;
pub mod entry;
pub mod handle;
pub mod init;
pub mod macros;
pub mod severity;
pub mod test_capture;

pub use clock::{format_timestamp, Clock, FixedClock, SystemClock, TIMESTAMP_FORMAT};
pub use entry::{render_line, FlushStatus, PendingLogEntry};
pub use handle::LogFacility;
pub use init::{init, init_with, DisplayMode, LogFacilityConfig};
pub use severity::{Palette, Severity};
pub use test_capture::{init_test_capture, CapturedEvent, SharedBuffer, TestCapture};
