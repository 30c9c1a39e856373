use core::fmt;
use core::ops::{Add, Sub};
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::time::{Month, WeekDay, Year};
use crate::utils::StrExt;

/// Makes a [`Date`] from `year:month:day`, rejecting days that do not exist
/// at compile time.
#[macro_export]
macro_rules! date {
    ($year:literal : $month:literal : $day:literal) => {{
        const _YEAR: $crate::time::Year = $crate::time::Year::new($year);
        static_assertions::const_assert!($month >= 1 && $month <= 12);
        const _MONTH: $crate::time::Month = $crate::time::Month::new($month);

        static_assertions::const_assert!($day >= 1);
        static_assertions::const_assert!($day <= _YEAR.number_of_days_in_month(_MONTH));

        $crate::time::Date::new_unchecked(_YEAR, _MONTH, $day)
    }};
}

/// A day in the gregorian calendar.
///
/// Dates are converted to and from the number of days since 0000-01-01 for
/// arithmetic, which is how holidays relative to easter are found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct Date {
    year: Year,
    month: Month,
    day: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidDate {
    #[error("`{input}` is not a date like 2024-06-03")]
    Unparseable { input: String },
    #[error("{year:04}-{month:02} does not have a day {day}")]
    NoSuchDay {
        year: Year,
        month: Month,
        day: usize,
    },
}

impl Date {
    pub fn new(year: impl Into<Year>, month: Month, day: usize) -> Result<Self, InvalidDate> {
        let year = year.into();

        if (1..=year.number_of_days_in_month(month)).contains(&day) {
            Ok(Self { year, month, day })
        } else {
            Err(InvalidDate::NoSuchDay { year, month, day })
        }
    }

    /// Creates a date without checking that the day exists in the month.
    ///
    /// Used by the `date!` macro, which validates the date at compile time.
    #[doc(hidden)]
    #[must_use]
    pub const fn new_unchecked(year: Year, month: Month, day: usize) -> Self {
        Self { year, month, day }
    }

    #[must_use]
    pub const fn first_day(year: Year, month: Month) -> Self {
        Self::new_unchecked(year, month, 1)
    }

    #[must_use]
    pub const fn last_day(year: Year, month: Month) -> Self {
        Self::new_unchecked(year, month, year.number_of_days_in_month(month))
    }

    #[must_use]
    pub const fn year(&self) -> Year {
        self.year
    }

    #[must_use]
    pub const fn month(&self) -> Month {
        self.month
    }

    /// The day of the month, starting at 1.
    #[must_use]
    pub const fn day(&self) -> usize {
        self.day
    }

    #[must_use]
    pub const fn week_day(&self) -> WeekDay {
        self.year.week_day(self.month, self.day)
    }

    /// Replaces `{day}`, `{month}` and `{year}` in the template with the
    /// zero padded numbers, `{day}.{month}.{year}` is the german format.
    #[must_use]
    pub fn formatted(&self, template: &str) -> String {
        [
            ("{day}", format!("{:02}", self.day)),
            ("{month}", format!("{:02}", self.month.as_usize())),
            ("{year}", format!("{:04}", self.year.as_usize())),
        ]
        .iter()
        .fold(template.to_string(), |result, (placeholder, value)| {
            result.replace(placeholder, value)
        })
    }

    const fn ordinal(&self) -> usize {
        self.year.days_since_base_date() + self.year.days_before(self.month) + (self.day - 1)
    }

    const fn from_ordinal(ordinal: usize) -> Self {
        let year = Year::from_days_since_base_date(ordinal);
        let mut day_of_year = ordinal - year.days_since_base_date();

        let mut month = Month::January;
        while day_of_year >= year.number_of_days_in_month(month) {
            day_of_year -= year.number_of_days_in_month(month);
            month = month.next();
        }

        Self::new_unchecked(year, month, day_of_year + 1)
    }

    #[must_use]
    pub const fn add_days(self, days: usize) -> Self {
        Self::from_ordinal(self.ordinal() + days)
    }

    /// # Panics
    ///
    /// If the result would be before 0000-01-01.
    #[must_use]
    pub const fn sub_days(self, days: usize) -> Self {
        Self::from_ordinal(self.ordinal() - days)
    }

    /// The number of days from `self` to the later date `other`.
    ///
    /// # Panics
    ///
    /// If `other` is before `self`.
    #[must_use]
    pub const fn days_until(&self, other: Self) -> usize {
        other.ordinal() - self.ordinal()
    }
}

impl Add<usize> for Date {
    type Output = Self;

    fn add(self, days: usize) -> Self::Output {
        self.add_days(days)
    }
}

impl Sub<usize> for Date {
    type Output = Self;

    fn sub(self, days: usize) -> Self::Output {
        self.sub_days(days)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted("{year}-{month}-{day}"))
    }
}

impl FromStr for Date {
    type Err = InvalidDate;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let unparseable = || InvalidDate::Unparseable {
            input: string.to_string(),
        };
        let number = |part: Option<&str>| {
            part.and_then(|part| part.parse::<usize>().ok())
                .ok_or_else(unparseable)
        };

        let [year, month, day] = string.split_exact::<3>("-");
        let month = Month::try_from(number(month)?).map_err(|_| unparseable())?;

        Self::new(number(year)?, month, number(day)?)
    }
}

impl TryFrom<String> for Date {
    type Error = InvalidDate;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Date> for String {
    fn from(date: Date) -> Self {
        date.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_new() {
        assert_eq!(Date::new(2024_usize, Month::February, 29), Ok(date!(2024:02:29)));
        assert_eq!(
            Date::new(2023_usize, Month::February, 29),
            Err(InvalidDate::NoSuchDay {
                year: Year::new(2023),
                month: Month::February,
                day: 29
            })
        );
        assert!(Date::new(2024_usize, Month::June, 0).is_err());
        assert!(Date::new(2024_usize, Month::June, 31).is_err());
    }

    #[test]
    fn test_first_and_last_day() {
        assert_eq!(Date::first_day(Year::new(2024), Month::May), date!(2024:05:01));
        assert_eq!(Date::last_day(Year::new(2024), Month::May), date!(2024:05:31));
        assert_eq!(Date::last_day(Year::new(2100), Month::February), date!(2100:02:28));
    }

    #[test]
    fn test_display_and_parse() {
        assert_eq!(date!(2024:06:03).to_string(), "2024-06-03");
        assert_eq!("2024-06-03".parse(), Ok(date!(2024:06:03)));

        assert_eq!(
            "2024-13-03".parse::<Date>(),
            Err(InvalidDate::Unparseable {
                input: "2024-13-03".to_string()
            })
        );
        assert!("2024-06".parse::<Date>().is_err());
        assert!("03.06.2024".parse::<Date>().is_err());
        assert!("2023-02-29".parse::<Date>().is_err());
    }

    #[test]
    fn test_formatted() {
        assert_eq!(date!(2024:06:03).formatted("{day}.{month}.{year}"), "03.06.2024");
        assert_eq!(date!(2026:10:17).formatted("{month}/{year}"), "10/2026");
    }

    #[test]
    fn test_arithmetic() {
        // month and year boundaries
        assert_eq!(date!(2024:01:31) + 1, date!(2024:02:01));
        assert_eq!(date!(2024:02:28) + 1, date!(2024:02:29));
        assert_eq!(date!(2023:02:28) + 1, date!(2023:03:01));
        assert_eq!(date!(2023:12:31) + 1, date!(2024:01:01));

        // easter 2024 and the holidays around it
        let easter = date!(2024:03:31);
        assert_eq!(easter - 2, date!(2024:03:29));
        assert_eq!(easter + 1, date!(2024:04:01));
        assert_eq!(easter + 39, date!(2024:05:09));
        assert_eq!(easter + 60, date!(2024:05:30));

        assert_eq!(date!(2024:01:01) - 1, date!(2023:12:31));
        assert_eq!(date!(2024:01:01) - 366, date!(2022:12:31));
    }

    #[test]
    fn test_days_until() {
        assert_eq!(date!(2024:05:01).days_until(date!(2024:05:01)), 0);
        assert_eq!(date!(2024:01:01).days_until(date!(2025:01:01)), 366);
        assert_eq!(date!(2024:03:31).days_until(date!(2024:05:09)), 39);

        let start = date!(2023:11:15);
        for offset in 0..800 {
            assert_eq!(start.days_until(start + offset), offset);
            assert_eq!((start + offset) - offset, start);
        }
    }

    #[test]
    fn test_week_day_of_following_days() {
        let mut date = date!(1999:12:25);
        for _ in 0..2000 {
            let next = date + 1;
            assert_eq!(next.week_day(), date.week_day() + 1, "week day of {}", next);
            date = next;
        }
    }

    #[test]
    fn test_serde() {
        let date: Date = serde_json::from_str("\"2024-10-03\"").unwrap();
        assert_eq!(date, date!(2024:10:03));
        assert_eq!(serde_json::to_string(&date).unwrap(), "\"2024-10-03\"");
        assert!(serde_json::from_str::<Date>("\"2024-10-32\"").is_err());
    }
}
