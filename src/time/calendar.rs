use std::collections::BTreeMap;

use log::debug;

use crate::time::{holiday, Date, HolidayEntry, Month, State, WeekDay, Year};

/// The calendar of a single month in a german state.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthCalendar {
    year: Year,
    month: Month,
    state: State,
    holidays: BTreeMap<usize, HolidayEntry>,
}

impl MonthCalendar {
    #[must_use]
    pub fn new(year: Year, month: Month, state: State) -> Self {
        let holidays = holiday::holidays_in_year(year, state)
            .into_iter()
            .filter(|(date, _)| date.month() == month)
            .map(|(date, entry)| (date.day(), entry))
            .collect::<BTreeMap<_, _>>();

        debug!(
            "{} public holidays in {:04}-{:02} ({})",
            holidays.len(),
            year.as_usize(),
            month,
            state
        );

        Self {
            year,
            month,
            state,
            holidays,
        }
    }

    #[must_use]
    pub const fn year(&self) -> Year {
        self.year
    }

    #[must_use]
    pub const fn month(&self) -> Month {
        self.month
    }

    #[must_use]
    pub const fn state(&self) -> State {
        self.state
    }

    #[must_use]
    pub const fn days_in_month(&self) -> usize {
        self.year.number_of_days_in_month(self.month)
    }

    /// Returns the holiday on the `day` of this month, if there is one.
    #[must_use]
    pub fn holiday(&self, day: usize) -> Option<&HolidayEntry> {
        self.holidays.get(&day)
    }

    /// Returns all public holidays in this month by day.
    pub fn holidays(&self) -> impl Iterator<Item = (usize, &HolidayEntry)> + '_ {
        self.holidays.iter().map(|(day, entry)| (*day, entry))
    }

    pub fn dates(&self) -> impl Iterator<Item = Date> + Clone {
        self.year.iter_days_in(self.month)
    }

    /// Returns the days that can be worked on, which are the days
    /// - on one of the `week_days`,
    /// - that are not a public holiday,
    /// - and are not after the `last_day` of the month that should be used.
    #[must_use]
    pub fn eligible_days(&self, last_day: usize, week_days: &[WeekDay]) -> Vec<usize> {
        self.dates()
            .take_while(|date| date.day() <= last_day)
            .filter(|date| week_days.contains(&date.week_day()))
            .filter(|date| self.holiday(date.day()).is_none())
            .map(|date| date.day())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    const WORKDAYS: [WeekDay; 5] = [
        WeekDay::Monday,
        WeekDay::Tuesday,
        WeekDay::Wednesday,
        WeekDay::Thursday,
        WeekDay::Friday,
    ];

    #[test]
    fn test_days_in_month() {
        assert_eq!(
            MonthCalendar::new(Year::new(2024), Month::February, State::NI).days_in_month(),
            29
        );
        assert_eq!(
            MonthCalendar::new(Year::new(2023), Month::February, State::NI).days_in_month(),
            28
        );
    }

    #[test]
    fn test_holidays() {
        let calendar = MonthCalendar::new(Year::new(2024), Month::May, State::NI);

        assert_eq!(
            calendar
                .holidays()
                .map(|(day, entry)| (day, entry.name()))
                .collect::<Vec<_>>(),
            vec![
                (1, "Erster Mai"),
                (9, "Christi Himmelfahrt"),
                (20, "Pfingstmontag"),
            ]
        );
    }

    #[test]
    fn test_eligible_days() {
        // may 2024 starts on a wednesday
        let calendar = MonthCalendar::new(Year::new(2024), Month::May, State::NI);

        assert_eq!(
            calendar.eligible_days(31, &WORKDAYS),
            vec![2, 3, 6, 7, 8, 10, 13, 14, 15, 16, 17, 21, 22, 23, 24, 27, 28, 29, 30, 31]
        );

        // the cutoff is inclusive
        assert_eq!(calendar.eligible_days(6, &WORKDAYS), vec![2, 3, 6]);

        // a cutoff past the end of the month is the end of the month
        assert_eq!(calendar.eligible_days(40, &WORKDAYS).len(), 20);

        assert_eq!(
            calendar.eligible_days(31, &[WeekDay::Thursday]),
            vec![2, 16, 23, 30]
        );
        assert_eq!(calendar.eligible_days(31, &[]), Vec::<usize>::new());
    }

    #[test]
    fn test_eligible_days_depend_on_state() {
        let workdays = MonthCalendar::new(Year::new(2024), Month::May, State::BW)
            .eligible_days(31, &WORKDAYS);

        // corpus christi is a holiday in baden-württemberg
        assert!(!workdays.contains(&30));
    }
}
