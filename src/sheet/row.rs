use crate::schedule::WorkWindow;
use crate::time::{Date, HolidayEntry, TimeStamp, WorkingDuration};

/// A single day of the time sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    date: Date,
    label: String,
    window: Option<WorkWindow>,
    holiday: Option<HolidayEntry>,
}

impl Row {
    #[must_use]
    pub fn new(date: Date, window: Option<WorkWindow>, holiday: Option<HolidayEntry>) -> Self {
        Self {
            date,
            label: format!(
                "{}, {}",
                date.week_day().short_name(),
                date.formatted("{day}.{month}.{year}")
            ),
            window,
            holiday,
        }
    }

    #[must_use]
    pub fn date(&self) -> Date {
        self.date
    }

    /// The day like `Mon, 03.06.2024`.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn is_worked(&self) -> bool {
        self.window.is_some()
    }

    #[must_use]
    pub fn start(&self) -> Option<TimeStamp> {
        self.window.map(|window| window.start())
    }

    #[must_use]
    pub fn end(&self) -> Option<TimeStamp> {
        self.window.map(|window| window.end())
    }

    #[must_use]
    pub fn duration(&self) -> Option<WorkingDuration> {
        self.window.map(|window| window.duration())
    }

    /// The times are recorded on the day they were worked.
    #[must_use]
    pub fn recorded_on(&self) -> Option<&str> {
        self.is_worked().then_some(self.label.as_str())
    }

    /// The name of the public holiday, if nothing was worked on it.
    #[must_use]
    pub fn remarks(&self) -> Option<&'static str> {
        if self.is_worked() {
            return None;
        }

        self.holiday.map(|holiday| holiday.name())
    }

    #[must_use]
    pub fn is_shaded(&self) -> bool {
        !self.is_worked() && self.holiday.is_some()
    }
}
