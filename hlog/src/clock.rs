/// Wall clock abstraction shared by the formatter and the file sink
use chrono::{Local, NaiveDateTime};

/// Source of local wall-clock time.
///
/// Record timestamps and the calendar day used for file rotation both come
/// from the same clock, so a record is always written into the file of the
/// day printed in its timestamp.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// The host's local time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_system_clock_is_close_to_local_now() {
        let before = Local::now().naive_local();
        let now = SystemClock.now();
        let after = Local::now().naive_local();
        assert!(before <= now && now <= after);
    }

    #[test]
    fn test_mock_clock() {
        let fixed = NaiveDate::from_ymd_opt(2026, 10, 19)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .unwrap();
        let mut clock = MockClock::new();
        clock.expect_now().returning(move || fixed);
        assert_eq!(clock.now(), fixed);
    }
}
