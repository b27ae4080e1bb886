//! Unit tests for the task module.


use chrono::{DateTime, Local, NaiveDate, Utc};
use mockable::Clock;

/// Clock pinned to noon UTC on a fixed date.
#[derive(Debug, Clone, Copy)]
pub(super) struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub(super) fn on(today: NaiveDate) -> Self {
        let noon = today
            .and_hms_opt(12, 0, 0)
            .expect("noon is a valid time of day");
        Self(noon.and_utc())
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Builds a calendar date, panicking on invalid input.
pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}
