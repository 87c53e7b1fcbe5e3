//! Calendar clock seam used to date synthetic series.

use std::fmt::Debug;

use crate::CalendarDate;

/// Source of "today" for the pipeline.
pub trait Clock: Send + Sync + Debug {
    fn today(&self) -> CalendarDate;
}

/// Wall clock in UTC.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CalendarDate {
        CalendarDate::today_utc()
    }
}

/// Clock pinned to a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(CalendarDate);

impl FixedClock {
    pub const fn new(today: CalendarDate) -> Self {
        Self(today)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> CalendarDate {
        self.0
    }
}
