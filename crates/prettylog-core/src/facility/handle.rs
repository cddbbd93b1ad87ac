//! The log facility handle

use std::fmt;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use prettylog_core_types::schema::{EVENT_INITIALIZED, EVENT_WRITE_FAILED, OP_FLUSH, OP_INITIALIZE};

use crate::errors::FacilityError;
use crate::facility::clock::format_timestamp;
use crate::facility::entry::{render_line, FlushStatus, PendingLogEntry};
use crate::facility::init::{DisplayMode, LogFacilityConfig};
use crate::facility::severity::Palette;

static GLOBAL: LogFacility = LogFacility::new();

/// Configurable formatter and writer for console log lines
///
/// A facility starts uninitialized: entries can be built but flushing them
/// writes nothing and reports [`FlushStatus::Uninitialized`].
///
/// The configuration sits behind a mutex so a facility can be shared between
/// threads and each line is written whole, but there is no ordering between
/// threads. Re-initializing while other threads hold pending entries decides
/// which mode those entries render with; serialize such calls or give each
/// thread its own facility.
pub struct LogFacility {
    state: Mutex<Option<LogFacilityConfig>>,
    write_warned: AtomicBool,
}

impl LogFacility {
    /// Create an uninitialized facility
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(None),
            write_warned: AtomicBool::new(false),
        }
    }

    /// Create a facility already holding `config`
    pub fn with_config(config: LogFacilityConfig) -> Self {
        let facility = Self::new();
        facility.initialize_with(config);
        facility
    }

    /// The shared default facility
    ///
    /// It stays uninitialized until [`init`](crate::facility::init) (or
    /// [`LogFacility::initialize`] on this handle) is called.
    pub fn global() -> &'static LogFacility {
        &GLOBAL
    }

    /// Install a configuration writing to standard output
    pub fn initialize(&self, mode: impl Into<DisplayMode>) {
        self.initialize_with(LogFacilityConfig::new(mode));
    }

    /// Install a configuration writing to `destination`
    pub fn initialize_with_destination(
        &self,
        mode: impl Into<DisplayMode>,
        destination: impl Write + Send + 'static,
    ) {
        self.initialize_with(LogFacilityConfig::new(mode).with_destination(destination));
    }

    /// Replace the whole configuration
    pub fn initialize_with(&self, config: LogFacilityConfig) {
        let mode = config.mode;
        *self.lock() = Some(config);
        self.write_warned.store(false, Ordering::Relaxed);

        tracing::debug!(
            component = module_path!(),
            op = OP_INITIALIZE,
            event = EVENT_INITIALIZED,
            mode = mode.name(),
        );
    }

    pub fn is_initialized(&self) -> bool {
        self.lock().is_some()
    }

    /// Current display mode, if initialized
    pub fn mode(&self) -> Option<DisplayMode> {
        self.lock().as_ref().map(|config| config.mode)
    }

    /// Current palette, or the default palette when uninitialized
    pub fn palette(&self) -> Palette {
        self.lock()
            .as_ref()
            .map(|config| config.palette)
            .unwrap_or_default()
    }

    /// Write one entry to the configured destination
    pub(crate) fn write_entry(&self, entry: &PendingLogEntry<'_>) -> FlushStatus {
        let mut guard = self.lock();
        let Some(config) = guard.as_mut() else {
            return FlushStatus::Uninitialized;
        };

        let timestamp = (entry.forces_timestamp() || config.mode == DisplayMode::TimeBased)
            .then(|| format_timestamp(&config.clock.now()));
        let line = render_line(
            entry.color(),
            entry.severity(),
            timestamp.as_deref(),
            entry.message(),
        );

        let written = config
            .destination
            .write_all(line.as_bytes())
            .and_then(|()| config.destination.flush());

        match written {
            Ok(()) => FlushStatus::Written { bytes: line.len() },
            Err(e) => {
                let err = FacilityError::from(e);
                if !self.write_warned.swap(true, Ordering::Relaxed) {
                    tracing::warn!(
                        component = module_path!(),
                        op = OP_FLUSH,
                        event = EVENT_WRITE_FAILED,
                        severity = entry.severity().name(),
                        err.code = err.code(),
                        "{}; further write failures are not reported",
                        err
                    );
                }
                FlushStatus::Failed(err)
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<LogFacilityConfig>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for LogFacility {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LogFacility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogFacility")
            .field("mode", &self.mode())
            .finish_non_exhaustive()
    }
}
