use std::ops::Add;

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::iter_const;
use crate::time::{Date, Month, WeekDay};

#[derive(
    Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize, Display,
)]
#[serde(from = "usize")]
#[serde(into = "usize")]
#[display("{}", _0)]
pub struct Year(usize);

impl Year {
    /// Choose the date 0000/01/01 as a base date, because it does not make sense to got past this date.
    const BASE_WEEK_DAY: WeekDay = WeekDay::Saturday;

    #[must_use]
    pub const fn new(year: usize) -> Self {
        Self(year)
    }

    #[must_use]
    pub const fn as_usize(&self) -> usize {
        self.0
    }

    /// A leap year is a calendar year that contains an additional day added to February, so
    /// it has 29 days instead of the regular 28 days.
    #[must_use]
    pub const fn is_leap_year(&self) -> bool {
        // https://en.wikipedia.org/wiki/Leap_year#Algorithm
        self.0 % 4 == 0 && (self.0 % 100 != 0 || self.0 % 400 == 0)
    }

    #[must_use]
    pub const fn number_of_days_in_month(&self, month: Month) -> usize {
        match month {
            Month::January => 31,
            Month::February => {
                if self.is_leap_year() {
                    29
                } else {
                    28
                }
            }
            Month::March => 31,
            Month::April => 30,
            Month::May => 31,
            Month::June => 30,
            Month::July => 31,
            Month::August => 31,
            Month::September => 30,
            Month::October => 31,
            Month::November => 30,
            Month::December => 31,
        }
    }

    /// Returns the number of days in this year.
    #[must_use]
    pub const fn days(&self) -> usize {
        if self.is_leap_year() {
            366
        } else {
            365
        }
    }

    /// The number of days in this year before the first day of `month`.
    #[must_use]
    pub(super) const fn days_before(&self, month: Month) -> usize {
        let mut result = 0;

        iter_const!(for number in 1,..month.as_usize() => {
            result += self.number_of_days_in_month(Month::new(number));
        });

        result
    }

    /// Returns the number of days between 0000-01-01 and the first day of this year.
    #[must_use]
    pub(super) const fn days_since_base_date(&self) -> usize {
        let year = self.0;
        // year 0 is a leap year, so all years divisible by 4 in 0..year are counted,
        // then the centuries are removed and every 400th year is added again
        365 * year + (year + 3) / 4 - (year + 99) / 100 + (year + 399) / 400
    }

    pub(super) const fn from_days_since_base_date(days: usize) -> Self {
        // the average year has 365.2425 days, this is only an estimate
        let mut year = Self((days * 400) / 146_097);

        while year.days_since_base_date() > days {
            year = Self(year.0 - 1);
        }

        while year.next().days_since_base_date() <= days {
            year = year.next();
        }

        year
    }

    /// Calculate the weekday of this year and the specified month and day.
    ///
    /// # Note
    ///
    /// This function assumes that the day is valid.
    #[must_use]
    pub const fn week_day(&self, month: Month, day: usize) -> WeekDay {
        let days = self.days_since_base_date() + self.days_before(month) + day - 1;

        Self::BASE_WEEK_DAY.add_const(days)
    }

    #[must_use]
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    /// Returns all days of the `month` in ascending order.
    pub fn iter_days_in(&self, month: Month) -> impl Iterator<Item = Date> + Clone {
        let first = Date::first_day(*self, month);
        let days = first.days_until(Date::last_day(*self, month)) + 1;

        (0..days).map(move |offset| first.add_days(offset))
    }
}

impl Add<usize> for Year {
    type Output = Self;

    fn add(self, rhs: usize) -> Self::Output {
        Self(self.as_usize() + rhs)
    }
}

impl From<usize> for Year {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

impl From<Year> for usize {
    fn from(value: Year) -> Self {
        value.as_usize()
    }
}
