use core::fmt;
use core::str::FromStr;
use std::ops::Add;

use serde::{de, Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash, Serialize)]
pub enum WeekDay {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl WeekDay {
    pub const fn week_days() -> [Self; 7] {
        [
            Self::Monday,
            Self::Tuesday,
            Self::Wednesday,
            Self::Thursday,
            Self::Friday,
            Self::Saturday,
            Self::Sunday,
        ]
    }

    pub const fn as_usize(&self) -> usize {
        *self as usize
    }

    /// Returns the week day that is `days` after this one.
    #[must_use]
    pub const fn add_const(self, days: usize) -> Self {
        Self::week_days()[(self.as_usize() - 1 + days % 7) % 7]
    }

    /// Returns how many days it takes to get from `self` to `other`.
    ///
    /// `self.add_const(self.days_until(other)) == other`
    #[must_use]
    pub const fn days_until(&self, other: Self) -> usize {
        (other.as_usize() + 7 - self.as_usize()) % 7
    }

    /// The first three letters of the english name, this is how the day column
    /// of the time sheet starts.
    #[must_use]
    pub const fn short_name(&self) -> &'static str {
        match self {
            Self::Monday => "Mon",
            Self::Tuesday => "Tue",
            Self::Wednesday => "Wed",
            Self::Thursday => "Thu",
            Self::Friday => "Fri",
            Self::Saturday => "Sat",
            Self::Sunday => "Sun",
        }
    }
}

impl Add<usize> for WeekDay {
    type Output = Self;

    fn add(self, rhs: usize) -> Self::Output {
        self.add_const(rhs)
    }
}

impl fmt::Display for WeekDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{input}` is not a week day, expected a name like `monday` or an index from 0 (monday) to 6 (sunday)")]
pub struct InvalidWeekDay {
    input: String,
}

impl FromStr for WeekDay {
    type Err = InvalidWeekDay;

    /// Accepts the index that is used on the command line (monday = 0, ..., sunday = 6),
    /// english and german names and their abbreviations.
    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let value = string.trim().to_lowercase();

        if let Ok(index) = value.parse::<usize>() {
            return Self::week_days()
                .get(index)
                .copied()
                .ok_or_else(|| InvalidWeekDay {
                    input: string.to_string(),
                });
        }

        let result = match value.as_str() {
            "mo" | "mon" | "monday" | "montag" => Self::Monday,
            "tu" | "di" | "tue" | "tuesday" | "dienstag" => Self::Tuesday,
            "we" | "mi" | "wed" | "wednesday" | "mittwoch" => Self::Wednesday,
            "th" | "do" | "thu" | "thursday" | "donnerstag" => Self::Thursday,
            "fr" | "fri" | "friday" | "freitag" => Self::Friday,
            "sa" | "sat" | "saturday" | "samstag" => Self::Saturday,
            "su" | "so" | "sun" | "sunday" | "sonntag" => Self::Sunday,
            _ => {
                return Err(InvalidWeekDay {
                    input: string.to_string(),
                })
            }
        };

        Ok(result)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WeekDayRepr {
    Index(usize),
    Name(String),
}

impl<'de> Deserialize<'de> for WeekDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        match WeekDayRepr::deserialize(deserializer)? {
            WeekDayRepr::Index(index) => index.to_string().parse(),
            WeekDayRepr::Name(name) => name.parse(),
        }
        .map_err(de::Error::custom)
    }
}

/// Parses a comma separated list of week days like `0,1,2` or `mon,wed`.
pub fn parse_week_days(input: &str) -> Result<Vec<WeekDay>, InvalidWeekDay> {
    let mut result = input
        .split(',')
        .filter(|part| !part.trim().is_empty())
        .map(WeekDay::from_str)
        .collect::<Result<Vec<_>, _>>()?;

    result.sort();
    result.dedup();

    Ok(result)
}
