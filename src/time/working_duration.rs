use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

use derive_more::Display;
use serde::{de, ser, Deserialize, Serialize};
use thiserror::Error;

#[macro_export]
macro_rules! working_duration {
    ( $hours:literal : $minutes:literal ) => {{
        static_assertions::const_assert!($minutes < 60);

        $crate::time::WorkingDuration::new_unchecked($hours, $minutes)
    }};
}

/// A duration of work, printed as `hh:mm`.
#[derive(Debug, Copy, Clone, Display, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[display("{:02}:{:02}", hours, minutes)]
pub struct WorkingDuration {
    hours: u16,
    minutes: u8,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidWorkingDuration {
    #[error("Duration is not valid: {hours:02}:{minutes:02}")]
    OutOfRange { hours: u16, minutes: u8 },
    #[error("`{input}` is not a duration, expected `hh:mm` or a number of hours like `25` or `12.5`")]
    Unparseable { input: String },
}

impl WorkingDuration {
    pub const ZERO: Self = Self {
        hours: 0,
        minutes: 0,
    };

    pub const HALF_HOUR: Self = Self {
        hours: 0,
        minutes: 30,
    };

    pub fn new(hours: u16, minutes: u8) -> Result<Self, InvalidWorkingDuration> {
        if minutes > 59 {
            return Err(InvalidWorkingDuration::OutOfRange { hours, minutes });
        }

        Ok(Self { hours, minutes })
    }

    #[doc(hidden)]
    #[must_use]
    pub const fn new_unchecked(hours: u16, minutes: u8) -> Self {
        Self { hours, minutes }
    }

    #[must_use]
    pub const fn from_hours(hours: u16) -> Self {
        Self { hours, minutes: 0 }
    }

    /// # Panics
    ///
    /// If the duration has more than `u16::MAX` hours.
    #[must_use]
    pub const fn from_mins(minutes: u32) -> Self {
        let hours = minutes / 60;
        assert!(hours <= u16::MAX as u32, "working duration is too long");

        Self {
            hours: hours as u16,
            minutes: (minutes % 60) as u8,
        }
    }

    #[must_use]
    pub const fn hours(&self) -> u16 {
        self.hours
    }

    #[must_use]
    pub const fn minutes(&self) -> u8 {
        self.minutes
    }

    #[must_use]
    pub const fn as_mins(&self) -> u32 {
        self.hours as u32 * 60 + self.minutes as u32
    }

    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.as_mins() == 0
    }

    /// Returns `true` if the duration can be split into parts of length `step`.
    #[must_use]
    pub const fn is_multiple_of(&self, step: Self) -> bool {
        step.as_mins() != 0 && self.as_mins() % step.as_mins() == 0
    }

    #[must_use]
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        Some(Self::from_mins(self.as_mins().checked_sub(other.as_mins())?))
    }
}

fn parse_hours(string: &str) -> Option<u32> {
    if let Some((hours, minutes)) = string.split_once(':') {
        let hours = hours.trim().parse::<u32>().ok()?;
        let minutes = minutes.trim().parse::<u32>().ok()?;

        if minutes > 59 {
            return None;
        }

        return Some(hours * 60 + minutes);
    }

    let hours = string.trim().parse::<f64>().ok()?;
    let minutes = hours * 60.0;

    // only whole minutes are allowed
    if !minutes.is_finite() || minutes < 0.0 || minutes.fract() != 0.0 || minutes > f64::from(u32::MAX) {
        return None;
    }

    Some(minutes as u32)
}

impl FromStr for WorkingDuration {
    type Err = InvalidWorkingDuration;

    /// Accepts `hh:mm` or a (fractional) number of hours.
    fn from_str(string: &str) -> Result<Self, Self::Err> {
        parse_hours(string)
            .filter(|minutes| minutes / 60 <= u32::from(u16::MAX))
            .map(Self::from_mins)
            .ok_or_else(|| InvalidWorkingDuration::Unparseable {
                input: string.to_string(),
            })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WorkingDurationRepr {
    Hours(u16),
    FractionalHours(f64),
    Formatted(String),
}

impl<'de> Deserialize<'de> for WorkingDuration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        match WorkingDurationRepr::deserialize(deserializer)? {
            WorkingDurationRepr::Hours(hours) => Ok(Self::from_hours(hours)),
            WorkingDurationRepr::FractionalHours(hours) => {
                FromStr::from_str(&hours.to_string()).map_err(de::Error::custom)
            }
            WorkingDurationRepr::Formatted(string) => {
                FromStr::from_str(&string).map_err(de::Error::custom)
            }
        }
    }
}

impl Serialize for WorkingDuration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(self.to_string().as_str())
    }
}

impl Add for WorkingDuration {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self::from_mins(self.as_mins() + other.as_mins())
    }
}

impl AddAssign for WorkingDuration {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for WorkingDuration {
    type Output = Self;

    /// # Panics
    ///
    /// If `other` is longer than `self`.
    fn sub(self, other: Self) -> Self::Output {
        self.checked_sub(other)
            .expect("working duration must not become negative")
    }
}

impl SubAssign for WorkingDuration {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Sum for WorkingDuration {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a WorkingDuration> for WorkingDuration {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
