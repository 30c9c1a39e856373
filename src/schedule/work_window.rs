use derive_more::Display;
use serde::Serialize;

use crate::time::{TimeStamp, WorkingDuration};

/// A contiguous block of work on a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize)]
#[display("{} - {}", start, end)]
pub struct WorkWindow {
    start: TimeStamp,
    end: TimeStamp,
}

impl WorkWindow {
    /// Creates a new window, returns `None` if `end` is not after `start`.
    #[must_use]
    pub fn new(start: TimeStamp, end: TimeStamp) -> Option<Self> {
        (start < end).then_some(Self { start, end })
    }

    /// A window of half an hour that starts at `start`.
    #[must_use]
    pub fn half_hour_at(start: TimeStamp) -> Option<Self> {
        Self::new(start, start.checked_add(WorkingDuration::HALF_HOUR)?)
    }

    #[must_use]
    pub const fn start(&self) -> TimeStamp {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> TimeStamp {
        self.end
    }

    #[must_use]
    pub fn duration(&self) -> WorkingDuration {
        self.start.elapsed(&self.end)
    }

    /// Starts half an hour earlier.
    #[must_use]
    pub fn extended_before(&self) -> Option<Self> {
        Some(Self {
            start: self.start.checked_sub(WorkingDuration::HALF_HOUR)?,
            end: self.end,
        })
    }

    /// Ends half an hour later.
    #[must_use]
    pub fn extended_after(&self) -> Option<Self> {
        Some(Self {
            start: self.start,
            end: self.end.checked_add(WorkingDuration::HALF_HOUR)?,
        })
    }
}
