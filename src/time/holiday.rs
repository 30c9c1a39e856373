use serde::Serialize;

use crate::time::{Date, Month, State, WeekDay, Year};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HolidayEntry {
    name: &'static str,
}

impl HolidayEntry {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

/// Returns the date of easter sunday in the given year.
///
/// The algorithm is based on <https://en.wikipedia.org/wiki/Date_of_Easter#Anonymous_Gregorian_algorithm>
pub const fn easter_sunday(year: Year) -> Date {
    let y = year.as_usize();

    let a = y % 19;
    let b = y / 100;
    let c = y % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let n = (h + l - 7 * m + 114) / 31;
    let o = (h + l - 7 * m + 114) % 31;

    Date::new_unchecked(year, Month::new(n), o + 1)
}

/// The wednesday before the 23rd of november.
const fn day_of_repentance(year: Year) -> Date {
    let reference = Date::new_unchecked(year, Month::November, 22);
    let distance = WeekDay::Wednesday.days_until(reference.week_day());

    reference.sub_days(distance)
}

/// Returns all public holidays of the `year` in the `state`, sorted by date.
#[must_use]
pub fn holidays_in_year(year: Year, state: State) -> Vec<(Date, HolidayEntry)> {
    use State::*;

    let y = year.as_usize();
    let easter = easter_sunday(year);
    let fixed = |month, day| Date::new_unchecked(year, month, day);

    let mut result = Vec::with_capacity(16);
    let mut add = |applies: bool, date: Date, name| {
        if applies {
            result.push((date, HolidayEntry::new(name)));
        }
    };

    add(true, fixed(Month::January, 1), "Neujahr");
    add(
        state.is_one_of(&[BW, BY, ST]),
        fixed(Month::January, 6),
        "Heilige Drei Könige",
    );
    add(
        (state == BE && y >= 2019) || (state == MV && y >= 2023),
        fixed(Month::March, 8),
        "Internationaler Frauentag",
    );
    add(true, easter - 2, "Karfreitag");
    add(state == BB, easter, "Ostersonntag");
    add(true, easter + 1, "Ostermontag");
    add(true, fixed(Month::May, 1), "Erster Mai");
    add(
        state == BE && (y == 2020 || y == 2025),
        fixed(Month::May, 8),
        "Tag der Befreiung",
    );
    add(true, easter + 39, "Christi Himmelfahrt");
    add(state == BB, easter + 49, "Pfingstsonntag");
    add(true, easter + 50, "Pfingstmontag");
    add(
        state.is_one_of(&[BW, BY, HE, NW, RP, SL]),
        easter + 60,
        "Fronleichnam",
    );
    add(state == SL, fixed(Month::August, 15), "Mariä Himmelfahrt");
    add(
        state == TH && y >= 2019,
        fixed(Month::September, 20),
        "Weltkindertag",
    );
    add(y >= 1990, fixed(Month::October, 3), "Tag der Deutschen Einheit");
    add(
        state.is_one_of(&[BB, MV, SN, ST, TH])
            || (y >= 2018 && state.is_one_of(&[HB, HH, NI, SH]))
            // 500 years of reformation
            || y == 2017,
        fixed(Month::October, 31),
        "Reformationstag",
    );
    add(
        state.is_one_of(&[BW, BY, NW, RP, SL]),
        fixed(Month::November, 1),
        "Allerheiligen",
    );
    add(state == SN, day_of_repentance(year), "Buß- und Bettag");
    add(true, fixed(Month::December, 25), "Erster Weihnachtstag");
    add(true, fixed(Month::December, 26), "Zweiter Weihnachtstag");

    result.sort_by_key(|(date, _)| *date);
    result
}

#[must_use]
pub fn get_holiday_entry(date: Date, state: State) -> Option<HolidayEntry> {
    holidays_in_year(date.year(), state)
        .into_iter()
        .find_map(|(holiday, entry)| (holiday == date).then_some(entry))
}

#[must_use]
pub fn is_holiday(date: Date, state: State) -> bool {
    get_holiday_entry(date, state).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::date;

    fn assert_holidays(state: State, first: Date, last: Date, holidays: &[Date]) {
        let mut date = first;
        while date <= last {
            assert_eq!(
                is_holiday(date, state),
                holidays.contains(&date),
                "date {} in {} should {}be a holiday",
                date,
                state,
                if holidays.contains(&date) { "" } else { "not " }
            );

            date = date + 1;
        }
    }

    #[test]
    fn test_is_holiday_bw() {
        let holidays = [
            date!(2023:01:01),
            date!(2023:01:06),
            date!(2023:04:07),
            date!(2023:04:10),
            date!(2023:05:01),
            date!(2023:05:18),
            date!(2023:05:29),
            date!(2023:06:08),
            date!(2023:10:03),
            date!(2023:11:01),
            date!(2023:12:25),
            date!(2023:12:26),
        ];

        assert_holidays(State::BW, date!(2023:01:01), date!(2023:12:31), &holidays);
    }

    #[test]
    fn test_is_holiday_ni() {
        let holidays = [
            date!(2024:01:01),
            date!(2024:03:29),
            date!(2024:04:01),
            date!(2024:05:01),
            date!(2024:05:09),
            date!(2024:05:20),
            date!(2024:10:03),
            date!(2024:10:31),
            date!(2024:12:25),
            date!(2024:12:26),
        ];

        assert_holidays(State::NI, date!(2024:01:01), date!(2024:12:31), &holidays);
    }

    #[test]
    fn test_state_specific_holidays() {
        assert!(is_holiday(date!(2024:11:20), State::SN));
        assert!(!is_holiday(date!(2024:11:20), State::NI));
        assert!(is_holiday(date!(2023:11:22), State::SN));

        assert!(is_holiday(date!(2024:03:08), State::BE));
        assert!(!is_holiday(date!(2018:03:08), State::BE));
        assert!(is_holiday(date!(2024:03:08), State::MV));

        assert!(is_holiday(date!(2024:09:20), State::TH));
        assert!(is_holiday(date!(2024:08:15), State::SL));
        assert!(is_holiday(date!(2024:03:31), State::BB));

        // reformation day became a holiday in the northern states in 2018
        assert!(!is_holiday(date!(2016:10:31), State::NI));
        assert!(is_holiday(date!(2017:10:31), State::NI));
        assert!(is_holiday(date!(2017:10:31), State::BW));
        assert!(!is_holiday(date!(2018:10:31), State::BW));
        assert!(is_holiday(date!(2018:10:31), State::HH));
    }

    #[test]
    fn test_holiday_names() {
        assert_eq!(
            get_holiday_entry(date!(2024:05:09), State::NI).map(|e| e.name()),
            Some("Christi Himmelfahrt")
        );
        assert_eq!(
            get_holiday_entry(date!(2024:10:03), State::BY).map(|e| e.name()),
            Some("Tag der Deutschen Einheit")
        );
        assert_eq!(get_holiday_entry(date!(2024:10:04), State::BY), None);
    }

    #[test]
    fn test_holidays_are_sorted() {
        for state in State::states() {
            let holidays = holidays_in_year(Year::new(2025), state);
            assert!(holidays.windows(2).all(|pair| pair[0].0 < pair[1].0));
        }
    }

    #[test]
    fn test_easter_sunday() {
        for date in [
            date!(2017:04:16),
            date!(2018:04:01),
            date!(2019:04:21),
            date!(2020:04:12),
            date!(2021:04:04),
            date!(2022:04:17),
            date!(2023:04:09),
            date!(2024:03:31),
            date!(2025:04:20),
            date!(2026:04:05),
            date!(2027:03:28),
            date!(2028:04:16),
            date!(2029:04:01),
            date!(2030:04:21),
            date!(2031:04:13),
            date!(2032:03:28),
            date!(2033:04:17),
            date!(2034:04:09),
            date!(2035:03:25),
            date!(2036:04:13),
            date!(2037:04:05),
        ] {
            assert_eq!(easter_sunday(date.year()), date);
        }
    }

    #[test]
    #[ignore = "This test is ignored because it requires an internet connection"]
    fn test_is_up_to_date() {
        use serde::Deserialize;
        use std::collections::HashMap;

        #[derive(Debug, Clone, Deserialize)]
        struct Entry {
            #[serde(rename = "datum")]
            date: Date,
            #[serde(rename = "hinweis")]
            hint: String,
        }

        for state in State::states() {
            for year in 2022..=2026 {
                let res = minreq::get(format!(
                    "https://feiertage-api.de/api/?jahr={}&nur_land={}",
                    year, state
                ))
                .send()
                .expect("Can not reach web api");

                let data: HashMap<String, Entry> =
                    serde_json::from_slice(res.as_bytes()).expect("Format seems to have changed");

                for (_name, entry) in data {
                    if !entry.hint.is_empty() {
                        continue;
                    }

                    assert!(
                        is_holiday(entry.date, state),
                        "date {} should be a holiday in {}",
                        entry.date,
                        state
                    );
                }
            }
        }
    }
}
