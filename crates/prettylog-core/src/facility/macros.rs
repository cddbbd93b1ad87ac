//! Format-string entry points
//!
//! Each macro builds a [`PendingLogEntry`](crate::facility::PendingLogEntry)
//! from `format_args!`, so verb/argument mismatches are compile errors. The
//! `target:` form logs through an explicit facility; without it the shared
//! default facility is used.

/// General log line (green)
///
/// # Example
///
/// ```
/// use prettylog_core::facility::LogFacility;
/// use prettylog_core::log_general;
///
/// let facility = LogFacility::new();
/// facility.initialize_with_destination("SIMPLE", std::io::sink());
///
/// log_general!(target: facility, "connecting to {}...", "database").flush();
/// log_general!("not written until the global facility is initialized").flush();
/// ```
#[macro_export]
macro_rules! log_general {
    (target: $facility:expr, $($arg:tt)+) => {
        $facility.log(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::facility::LogFacility::global().log(::std::format_args!($($arg)+))
    };
}

/// Debug line (cyan)
#[macro_export]
macro_rules! log_debug {
    (target: $facility:expr, $($arg:tt)+) => {
        $facility.debug(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::facility::LogFacility::global().debug(::std::format_args!($($arg)+))
    };
}

/// Error line (red)
#[macro_export]
macro_rules! log_error {
    (target: $facility:expr, $($arg:tt)+) => {
        $facility.error(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::facility::LogFacility::global().error(::std::format_args!($($arg)+))
    };
}

/// Fatal line (bright red)
#[macro_export]
macro_rules! log_fatal {
    (target: $facility:expr, $($arg:tt)+) => {
        $facility.fatal(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::facility::LogFacility::global().fatal(::std::format_args!($($arg)+))
    };
}

/// Info line (cyan)
///
/// # Example
///
/// ```
/// use prettylog_core::facility::LogFacility;
/// use prettylog_core::log_info;
///
/// let facility = LogFacility::new();
/// facility.initialize_with_destination("TIMEBASED", std::io::sink());
///
/// log_info!(target: facility, "value={}", 42).flush();
/// log_info!(target: facility, "job info: {}", "running").timestamp().flush();
/// ```
#[macro_export]
macro_rules! log_info {
    (target: $facility:expr, $($arg:tt)+) => {
        $facility.info(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::facility::LogFacility::global().info(::std::format_args!($($arg)+))
    };
}

/// Success line (green)
#[macro_export]
macro_rules! log_success {
    (target: $facility:expr, $($arg:tt)+) => {
        $facility.success(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::facility::LogFacility::global().success(::std::format_args!($($arg)+))
    };
}

/// Failure line (yellow)
#[macro_export]
macro_rules! log_failure {
    (target: $facility:expr, $($arg:tt)+) => {
        $facility.failure(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::facility::LogFacility::global().failure(::std::format_args!($($arg)+))
    };
}

/// OK line (green)
#[macro_export]
macro_rules! log_ok {
    (target: $facility:expr, $($arg:tt)+) => {
        $facility.ok(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::facility::LogFacility::global().ok(::std::format_args!($($arg)+))
    };
}

/// Error line on a filled red background
#[macro_export]
macro_rules! log_error_bg {
    (target: $facility:expr, $($arg:tt)+) => {
        $facility.error_bg(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::facility::LogFacility::global().error_bg(::std::format_args!($($arg)+))
    };
}

/// Failure line on a filled yellow background
#[macro_export]
macro_rules! log_failure_bg {
    (target: $facility:expr, $($arg:tt)+) => {
        $facility.failure_bg(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::facility::LogFacility::global().failure_bg(::std::format_args!($($arg)+))
    };
}

/// Build and immediately write a line, returning the
/// [`FlushStatus`](crate::facility::FlushStatus)
///
/// # Example
///
/// ```
/// use prettylog_core::emit;
/// use prettylog_core::facility::{FlushStatus, LogFacility, Severity};
///
/// let facility = LogFacility::new();
/// let status = emit!(target: facility, Severity::Ok, "database connected");
/// assert_eq!(status, FlushStatus::Uninitialized);
/// ```
#[macro_export]
macro_rules! emit {
    (target: $facility:expr, $severity:expr, $($arg:tt)+) => {
        $facility.emit($severity, ::std::format_args!($($arg)+))
    };
    ($severity:expr, $($arg:tt)+) => {
        $crate::facility::LogFacility::global().emit($severity, ::std::format_args!($($arg)+))
    };
}
