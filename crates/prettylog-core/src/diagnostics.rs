//! Diagnostics initialization
//!
//! The facility reports its own anomalies (mode fallbacks, failed writes)
//! through `tracing`. This module installs a subscriber for those events.
//! It always writes to stderr so diagnostics never interleave with log lines
//! sent to stdout.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Diagnostics profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output with debug level
    Development,
    /// JSON structured output with warn level
    Production,
    /// Test capture mode for deterministic testing
    Test,
}

static INIT_ONCE: Once = Once::new();

/// Initialize diagnostics
///
/// Only the first call in a process has an effect. `RUST_LOG` overrides the
/// profile's default filter.
///
/// # Profiles
///
/// - **Development**: Human-readable events, `prettylog_core=debug`
/// - **Production**: JSON events, `prettylog_core=warn`
/// - **Test**: No output; use
///   [`init_test_capture`](crate::facility::test_capture::init_test_capture)
///
/// # Example
///
/// ```
/// use prettylog_core::diagnostics::{init_diagnostics, Profile};
///
/// init_diagnostics(Profile::Development);
/// ```
pub fn init_diagnostics(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Development => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("prettylog_core=debug")),
                )
                .init();
        }
        Profile::Production => {
            tracing_subscriber::fmt()
                .json()
                .with_writer(std::io::stderr)
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("prettylog_core=warn")),
                )
                .init();
        }
        Profile::Test => {
            tracing_subscriber::registry().init();
        }
    });
}
