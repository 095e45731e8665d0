//! Injectable time source for date-window queries.
//!
//! # Responsibility
//! - Provide "now" and day normalization to the store.
//! - Let tests pin "today" without waiting on the wall clock.
//!
//! # Invariants
//! - `start_of_day` only drops the time-of-day component.
//! - `FixedClock` never advances on its own.

use chrono::{Local, NaiveDate, NaiveDateTime};
use std::sync::{Arc, Mutex, PoisonError};

/// Source of the current local instant.
pub trait Clock {
    /// Returns the current local wall-clock instant.
    fn now(&self) -> NaiveDateTime;

    /// Normalizes an instant to its calendar day.
    fn start_of_day(&self, instant: NaiveDateTime) -> NaiveDate {
        instant.date()
    }

    /// Current calendar day, i.e. `start_of_day(now())`.
    fn today(&self) -> NaiveDate {
        self.start_of_day(self.now())
    }
}

/// Production clock backed by the local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Manually driven clock.
///
/// Clones share the same instant, so a test can keep one handle and move
/// time for a store that owns another.
#[derive(Debug, Clone)]
pub struct FixedClock {
    instant: Arc<Mutex<NaiveDateTime>>,
}

impl FixedClock {
    pub fn new(instant: NaiveDateTime) -> Self {
        Self {
            instant: Arc::new(Mutex::new(instant)),
        }
    }

    /// Clock pinned to midnight of `date`.
    pub fn at_date(date: NaiveDate) -> Self {
        Self::new(date.and_time(chrono::NaiveTime::MIN))
    }

    /// Moves the clock to `instant`.
    pub fn set(&self, instant: NaiveDateTime) {
        *self.instant.lock().unwrap_or_else(PoisonError::into_inner) = instant;
    }

    /// Moves the clock to midnight of `date`.
    pub fn set_date(&self, date: NaiveDate) {
        self.set(date.and_time(chrono::NaiveTime::MIN));
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        *self.instant.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }

    fn start_of_day(&self, instant: NaiveDateTime) -> NaiveDate {
        (**self).start_of_day(instant)
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }

    fn start_of_day(&self, instant: NaiveDateTime) -> NaiveDate {
        (**self).start_of_day(instant)
    }
}

#[cfg(test)]
mod tests {
    use super::{Clock, FixedClock, SystemClock};
    use chrono::{NaiveDate, NaiveTime};

    #[test]
    fn start_of_day_drops_time_component() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).expect("valid date");
        let late = date.and_time(NaiveTime::from_hms_opt(23, 59, 59).expect("valid time"));
        let clock = FixedClock::new(late);

        assert_eq!(clock.today(), date);
        assert_eq!(clock.start_of_day(late), date);
    }

    #[test]
    fn fixed_clock_clones_share_instant() {
        let first = NaiveDate::from_ymd_opt(2024, 3, 5).expect("valid date");
        let second = NaiveDate::from_ymd_opt(2024, 3, 6).expect("valid date");
        let clock = FixedClock::at_date(first);
        let handle = clock.clone();

        handle.set_date(second);
        assert_eq!(clock.today(), second);
    }

    #[test]
    fn system_clock_today_matches_now() {
        let clock = SystemClock;
        let today = clock.today();
        let now = clock.now();
        // Allows for a midnight rollover between the two reads.
        assert!(now.date() == today || now.date() == today.succ_opt().expect("valid date"));
    }
}
