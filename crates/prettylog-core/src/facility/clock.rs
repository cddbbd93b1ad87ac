//! Wall-clock source for timestamp segments

use chrono::{Local, NaiveDateTime};

/// Format of the timestamp segment: `2024/10/06 17:08:01`
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Source of the time printed in timestamp segments
pub trait Clock: Send + Sync {
    /// Current local time, without timezone
    fn now(&self) -> NaiveDateTime;
}

/// Local wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock frozen at a single instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(NaiveDateTime);

impl FixedClock {
    pub fn new(at: NaiveDateTime) -> Self {
        Self(at)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Render an instant as `YYYY/MM/DD HH:MM:SS` (24-hour, no fraction, no zone)
pub fn format_timestamp(at: &NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn instant(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 10, 6)
            .and_then(|d| d.and_hms_milli_opt(h, m, s, 789))
            .unwrap()
    }

    #[test]
    fn test_format_is_zero_padded_without_fraction() {
        assert_eq!(format_timestamp(&instant(7, 8, 1)), "2024/10/06 07:08:01");
    }

    #[test]
    fn test_format_uses_24_hour_clock() {
        assert_eq!(format_timestamp(&instant(17, 8, 1)), "2024/10/06 17:08:01");
    }

    #[test]
    fn test_fixed_clock_is_stable() {
        let clock = FixedClock::new(instant(1, 2, 3));
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn test_system_clock_renders_expected_width() {
        let rendered = format_timestamp(&SystemClock.now());
        assert_eq!(rendered.len(), 19);
    }
}
