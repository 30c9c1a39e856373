use thiserror::Error;

use crate::time::{TimeStamp, WorkingDuration};
use crate::{time_stamp, working_duration};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidOptions {
    #[error("the working day has to start before it ends, but it is from {start} to {end}")]
    EmptyWorkingDay { start: TimeStamp, end: TimeStamp },
    #[error("the working day can only start or end on a full or half hour, but got {0}")]
    MisalignedTime(TimeStamp),
    #[error("the maximum working time per day must be a positive multiple of half an hour, but is {0}")]
    InvalidDailyLimit(WorkingDuration),
}

/// Options to configure how the hours are distributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistributorOptions {
    /// The earliest time at which work can start.
    pub work_start: TimeStamp,
    /// The latest time at which work can end.
    pub work_end: TimeStamp,
    /// The maximum duration that can be worked on a single day.
    pub daily_limit: WorkingDuration,
}

impl DistributorOptions {
    #[must_use]
    pub const fn new(
        work_start: TimeStamp,
        work_end: TimeStamp,
        daily_limit: WorkingDuration,
    ) -> Self {
        Self {
            work_start,
            work_end,
            daily_limit,
        }
    }

    pub fn validate(&self) -> Result<(), InvalidOptions> {
        if self.work_start >= self.work_end {
            return Err(InvalidOptions::EmptyWorkingDay {
                start: self.work_start,
                end: self.work_end,
            });
        }

        for time in [self.work_start, self.work_end] {
            if !time.is_aligned_to(WorkingDuration::HALF_HOUR) {
                return Err(InvalidOptions::MisalignedTime(time));
            }
        }

        if self.daily_limit.is_zero() || !self.daily_limit.is_multiple_of(WorkingDuration::HALF_HOUR)
        {
            return Err(InvalidOptions::InvalidDailyLimit(self.daily_limit));
        }

        Ok(())
    }

    /// The number of half hours in which a new window can start.
    #[must_use]
    pub(super) fn start_slots(&self) -> u32 {
        self.work_start.elapsed(&self.work_end).as_mins() / WorkingDuration::HALF_HOUR.as_mins()
    }
}

impl Default for DistributorOptions {
    fn default() -> Self {
        Self {
            work_start: time_stamp!(08:00),
            work_end: time_stamp!(20:00),
            daily_limit: working_duration!(06:00),
        }
    }
}
