//! The content of a time sheet, independent of how it is rendered.

mod row;

pub use row::*;

use log::debug;

use crate::input::Config;
use crate::latex_string::LatexString;
use crate::schedule::Assignment;
use crate::time::{MonthCalendar, WorkingDuration};

#[derive(Debug, Clone, PartialEq)]
pub struct TimeSheet {
    name: LatexString,
    unit_of_organisation: LatexString,
    period: String,
    expected: WorkingDuration,
    rows: Vec<Row>,
}

impl TimeSheet {
    /// Makes a row for every day of the month, the days in the `assignment`
    /// are the ones that have been worked on.
    #[must_use]
    pub fn new(config: &Config, calendar: &MonthCalendar, assignment: &Assignment) -> Self {
        let rows = calendar
            .dates()
            .map(|date| {
                Row::new(
                    date,
                    assignment.get(date.day()).copied(),
                    calendar.holiday(date.day()).copied(),
                )
            })
            .collect::<Vec<_>>();

        debug!(
            "time sheet with {} rows, {} of them worked",
            rows.len(),
            assignment.len()
        );

        Self {
            name: LatexString::new(config.name()),
            unit_of_organisation: LatexString::new(config.unit_of_organisation()),
            period: format!(
                "{} {}",
                calendar.month().german_name(),
                calendar.year().as_usize()
            ),
            expected: config.total(),
            rows,
        }
    }

    #[must_use]
    pub fn name(&self) -> &LatexString {
        &self.name
    }

    #[must_use]
    pub fn unit_of_organisation(&self) -> &LatexString {
        &self.unit_of_organisation
    }

    /// The month and year, like `Mai 2024`.
    #[must_use]
    pub fn period(&self) -> &str {
        &self.period
    }

    /// The monthly working time from the contract.
    #[must_use]
    pub fn expected(&self) -> WorkingDuration {
        self.expected
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The sum of the durations of all rows.
    #[must_use]
    pub fn total(&self) -> WorkingDuration {
        self.rows.iter().filter_map(Row::duration).sum()
    }
}
