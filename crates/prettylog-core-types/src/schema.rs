//! Canonical schema constants for the facility's own diagnostics
//!
//! These keep `tracing` events emitted by the facility consistent and let
//! tests assert on them without repeating string literals.

// Canonical field keys
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_MODE: &str = "mode";
pub const FIELD_REQUESTED: &str = "requested";
pub const FIELD_SEVERITY: &str = "severity";

// Error fields
pub const FIELD_ERR_CODE: &str = "err.code";

// Operation names
pub const OP_INITIALIZE: &str = "initialize";
pub const OP_FLUSH: &str = "flush";

// Canonical event names
pub const EVENT_INITIALIZED: &str = "initialized";
pub const EVENT_MODE_FALLBACK: &str = "mode_fallback";
pub const EVENT_WRITE_FAILED: &str = "write_failed";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_are_non_empty() {
        assert!(!FIELD_COMPONENT.is_empty());
        assert!(!FIELD_OP.is_empty());
        assert!(!EVENT_INITIALIZED.is_empty());
        assert!(!EVENT_WRITE_FAILED.is_empty());
    }

    #[test]
    fn test_event_names_are_distinct() {
        assert_ne!(EVENT_INITIALIZED, EVENT_MODE_FALLBACK);
        assert_ne!(EVENT_INITIALIZED, EVENT_WRITE_FAILED);
        assert_ne!(EVENT_MODE_FALLBACK, EVENT_WRITE_FAILED);
    }
}
