//! Clock implementations.

use super::ClockService;
use chrono::{DateTime, Duration, Utc};
use std::cell::Cell;
use std::rc::Rc;

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl ClockService for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same instant, so a test can keep one handle and advance
/// time under a document set that owns another.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use docket::infrastructure::{ClockService, ManualClock};
///
/// let clock = ManualClock::new(Utc.timestamp_opt(0, 0).unwrap());
/// let handle = clock.clone();
/// handle.advance(Duration::seconds(5));
/// assert_eq!(clock.now_utc().timestamp(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<DateTime<Utc>>>,
}

impl ManualClock {
    #[must_use]
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn set(&self, to: DateTime<Utc>) {
        self.now.set(to);
    }
}

impl ClockService for ManualClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.now.get()
    }
}
