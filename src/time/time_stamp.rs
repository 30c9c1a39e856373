use std::cmp;
use std::str::FromStr;

use derive_more::Display;
use serde::{de, ser, Deserialize, Serialize};
use thiserror::Error;

use crate::time::WorkingDuration;

#[macro_export]
macro_rules! time_stamp {
    ( $hour:literal : $minute:literal ) => {{
        static_assertions::const_assert!($hour < 24 || ($hour == 24 && $minute == 0));
        static_assertions::const_assert!($minute < 60);

        $crate::time::TimeStamp::new_unchecked($hour, $minute)
    }};
}

/// A time of the day with minute precision.
///
/// `24:00` is allowed, so that a working day can end at midnight.
#[derive(Debug, Copy, Clone, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display("{:02}:{:02}", hour, minute)]
pub struct TimeStamp {
    hour: u8,
    minute: u8,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidTime {
    #[error("Time is not valid: {hour:02}:{minute:02}")]
    OutOfRange { hour: u8, minute: u8 },
    #[error("`{input}` is not a time, expected `hh:mm` or a number of hours like `8` or `8.5`")]
    Unparseable { input: String },
}

impl TimeStamp {
    pub fn new(hour: u8, minute: u8) -> Result<Self, InvalidTime> {
        if minute > 59 || hour > 24 || (hour == 24 && minute != 0) {
            return Err(InvalidTime::OutOfRange { hour, minute });
        }

        Ok(Self { hour, minute })
    }

    #[doc(hidden)]
    #[must_use]
    pub const fn new_unchecked(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }

    /// Creates a time stamp from the minutes since midnight.
    pub fn from_mins(minutes: u16) -> Result<Self, InvalidTime> {
        Self::new(
            u8::try_from(minutes / 60).unwrap_or(u8::MAX),
            (minutes % 60) as u8,
        )
    }

    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    // the maximum TimeStamp is 24:00, which would be 24 * 60 = 1440
    #[must_use]
    pub const fn as_minutes(&self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }

    /// Returns the duration between `self` and `other`, regardless of which one is earlier.
    #[must_use]
    pub fn elapsed(&self, other: &Self) -> WorkingDuration {
        let minutes = cmp::max(self.as_minutes(), other.as_minutes())
            - cmp::min(self.as_minutes(), other.as_minutes());

        WorkingDuration::from_mins(u32::from(minutes))
    }

    /// Returns the time `duration` later or `None` if that would be past `24:00`.
    #[must_use]
    pub fn checked_add(self, duration: WorkingDuration) -> Option<Self> {
        let minutes = u32::from(self.as_minutes()).checked_add(duration.as_mins())?;
        Self::from_mins(u16::try_from(minutes).ok()?).ok()
    }

    /// Returns the time `duration` earlier or `None` if that would be before `00:00`.
    #[must_use]
    pub fn checked_sub(self, duration: WorkingDuration) -> Option<Self> {
        let minutes = u32::from(self.as_minutes()).checked_sub(duration.as_mins())?;
        Self::from_mins(u16::try_from(minutes).ok()?).ok()
    }

    /// Returns `true` if the time is a multiple of `step` after midnight.
    #[must_use]
    pub fn is_aligned_to(&self, step: WorkingDuration) -> bool {
        step.as_mins() != 0 && u32::from(self.as_minutes()) % step.as_mins() == 0
    }
}

impl FromStr for TimeStamp {
    type Err = InvalidTime;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let unparseable = || InvalidTime::Unparseable {
            input: string.to_string(),
        };

        let minutes = WorkingDuration::from_str(string)
            .map_err(|_| unparseable())?
            .as_mins();

        Self::from_mins(u16::try_from(minutes).map_err(|_| unparseable())?)
    }
}

impl<'de> Deserialize<'de> for TimeStamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let minutes = WorkingDuration::deserialize(deserializer)?.as_mins();
        u16::try_from(minutes)
            .map_err(de::Error::custom)
            .and_then(|minutes| Self::from_mins(minutes).map_err(de::Error::custom))
    }
}

impl Serialize for TimeStamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(self.to_string().as_str())
    }
}
