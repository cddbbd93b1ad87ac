use std::io::{self, Write};

use chrono::{NaiveDate, NaiveDateTime};
use prettylog_core::facility::{FixedClock, LogFacility, LogFacilityConfig, SharedBuffer};

/// Destination that rejects every write
#[allow(dead_code)]
pub struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// The instant every fixed-clock test renders
#[allow(dead_code)]
pub fn fixed_instant() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 10, 6)
        .and_then(|d| d.and_hms_opt(17, 8, 1))
        .unwrap()
}

/// Facility in `mode` writing into a fresh buffer, with the real clock
#[allow(dead_code)]
pub fn capturing_facility(mode: &str) -> (LogFacility, SharedBuffer) {
    let out = SharedBuffer::new();
    let facility = LogFacility::new();
    facility.initialize_with_destination(mode, out.clone());
    (facility, out)
}

/// Facility in `mode` writing into a fresh buffer, clock frozen at
/// [`fixed_instant`]
#[allow(dead_code)]
pub fn fixed_clock_facility(mode: &str) -> (LogFacility, SharedBuffer) {
    let out = SharedBuffer::new();
    let facility = LogFacility::with_config(
        LogFacilityConfig::new(mode)
            .with_destination(out.clone())
            .with_clock(FixedClock::new(fixed_instant())),
    );
    (facility, out)
}

/// Split a line into (colour+tag, timestamp segment, message)
///
/// Panics unless the line has the shape `[<prefix><segment>\x1b[0m] <message>\n`.
#[allow(dead_code)]
pub fn split_line(line: &str) -> (&str, &str, &str) {
    let inner = line.strip_prefix('[').expect("line starts with '['");
    let (head, rest) = inner.split_once("\x1b[0m] ").expect("reset before ']'");
    let message = rest.strip_suffix('\n').expect("line ends with newline");
    // colour code ends at the first 'm'; the tag is the next 9 columns
    let code_end = head.find('m').expect("colour code") + 1;
    let tag_end = code_end + 9;
    (&head[..tag_end], &head[tag_end..], message)
}

/// Assert that `segment` is ` YYYY/MM/DD HH:MM:SS `
#[allow(dead_code)]
pub fn assert_timestamp_segment(segment: &str) {
    assert_eq!(segment.len(), 21, "unexpected timestamp segment {:?}", segment);

    for (idx, c) in segment.chars().enumerate() {
        let ok = match idx {
            0 | 11 | 20 => c == ' ',
            5 | 8 => c == '/',
            14 | 17 => c == ':',
            _ => c.is_ascii_digit(),
        };
        assert!(ok, "unexpected {:?} at column {} of {:?}", c, idx, segment);
    }
}
