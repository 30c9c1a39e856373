//! Calendar types, german public holidays and times of the day.

pub mod holiday;

pub use holiday::HolidayEntry;

mod calendar;
pub use calendar::*;
mod date;
pub use date::*;
mod month;
pub use month::*;
mod state;
pub use state::*;
mod time_stamp;
pub use time_stamp::*;
mod week_day;
pub use week_day::*;
mod working_duration;
pub use working_duration::*;
mod year;
pub use year::*;

/// Returns today's date in UTC.
pub fn today() -> anyhow::Result<Date> {
    let today = ::time::OffsetDateTime::now_utc().date();

    let month = Month::try_from(u8::from(today.month()) as usize)?;
    let year = usize::try_from(today.year())?;

    Ok(Date::new(year, month, usize::from(today.day()))?)
}
