use prettylog_core::errors::{ErrorKind, FacilityError};
use prettylog_core::facility::{DisplayMode, Severity};
use prettylog_core::FacilitySettings;

#[test]
fn test_error_kind_code_mapping() {
    let kinds = vec![
        (ErrorKind::UnknownMode, "ERR_UNKNOWN_MODE"),
        (ErrorKind::UnknownSeverity, "ERR_UNKNOWN_SEVERITY"),
        (ErrorKind::UnknownColor, "ERR_UNKNOWN_COLOR"),
        (ErrorKind::Io, "ERR_IO"),
        (ErrorKind::Serialization, "ERR_SERIALIZATION"),
    ];

    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
    }
}

#[test]
fn test_strict_mode_parse_is_verifiable_by_kind() {
    let err = "complex".parse::<DisplayMode>().unwrap_err();

    assert_eq!(err.kind(), ErrorKind::UnknownMode);
    assert_eq!(
        err,
        FacilityError::UnknownDisplayMode {
            name: "complex".to_string()
        }
    );
}

#[test]
fn test_unknown_severity_is_verifiable_by_kind() {
    let err = "warning".parse::<Severity>().unwrap_err();

    assert_eq!(err.kind(), ErrorKind::UnknownSeverity);
    assert!(err.to_string().contains("warning"));
}

#[test]
fn test_settings_errors_are_distinct_from_io() {
    let err = FacilitySettings::from_toml_str("mode = ").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Serialization);
    assert_ne!(err.kind(), ErrorKind::Io);
}

#[test]
fn test_read_and_write_failures_share_io_kind() {
    let read = FacilityError::SettingsRead {
        path: "prettylog.toml".to_string(),
        reason: "denied".to_string(),
    };
    let write = FacilityError::WriteFailed {
        reason: "pipe closed".to_string(),
    };

    assert_eq!(read.code(), write.code());
    assert!(read.to_string().contains("prettylog.toml"));
}
