use std::path::{Path, PathBuf};

use formatx::formatx;
use log::debug;
use thiserror::Error;

use crate::input::toml_input::Defaults;
use crate::schedule::{DistributorOptions, InvalidOptions};
use crate::time::{Date, Month, MonthCalendar, State, TimeStamp, WeekDay, WorkingDuration, Year};
use crate::utils::PathExt;
use crate::{time_stamp, working_duration};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("the year must be between 1 and 9999, but got {0}")]
    InvalidYear(Year),
    #[error("the last day of the month that should be used must be at least 1")]
    InvalidLastDay,
    #[error("at least one week day has to be selected")]
    NoWeekDays,
    #[error("the hours can only be distributed in steps of half an hour, but got {0}")]
    MisalignedTotal(WorkingDuration),
    #[error(transparent)]
    InvalidOptions(#[from] InvalidOptions),
    #[error("invalid output name `{output}`: {reason}")]
    InvalidOutput { output: String, reason: String },
}

/// Everything that is needed to make a time sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    name: String,
    unit_of_organisation: String,
    year: Year,
    month: Month,
    last_day: usize,
    week_days: Vec<WeekDay>,
    total: WorkingDuration,
    work_start: TimeStamp,
    work_end: TimeStamp,
    max_per_day: WorkingDuration,
    output: PathBuf,
    state: State,
    latex_mk_path: Option<PathBuf>,
    preserve_dir: Option<PathBuf>,
    tex_only: bool,
    json: bool,
    seed: Option<u64>,
}

/// Collects the settings in layers: the built-in defaults, then a defaults
/// file and finally the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigBuilder {
    name: String,
    unit_of_organisation: String,
    year: Option<Year>,
    month: Option<Month>,
    last_day: Option<usize>,
    week_days: Vec<WeekDay>,
    total: WorkingDuration,
    work_start: TimeStamp,
    work_end: TimeStamp,
    max_per_day: WorkingDuration,
    output: String,
    state: State,
    latex_mk_path: Option<PathBuf>,
    preserve_dir: Option<PathBuf>,
    tex_only: bool,
    json: bool,
    seed: Option<u64>,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self {
            name: "Mustermann, Max".to_string(),
            unit_of_organisation: "FB Mathematik/Informatik, Institut für Informatik".to_string(),
            year: None,
            month: None,
            last_day: None,
            week_days: vec![
                WeekDay::Monday,
                WeekDay::Tuesday,
                WeekDay::Wednesday,
                WeekDay::Thursday,
                WeekDay::Friday,
            ],
            total: working_duration!(25:00),
            work_start: time_stamp!(08:00),
            work_end: time_stamp!(20:00),
            max_per_day: working_duration!(06:00),
            output: "timesheet".to_string(),
            state: State::NI,
            latex_mk_path: None,
            preserve_dir: None,
            tex_only: false,
            json: false,
            seed: None,
        }
    }
}

impl ConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from the built-in defaults, overridden by the ones in the file.
    pub fn try_from_toml_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let defaults = Defaults::from_file(path)?;

        let mut result = Self::new();
        result.with_defaults(&defaults);
        Ok(result)
    }

    /// Overrides every setting that is present in the `defaults`.
    pub fn with_defaults(&mut self, defaults: &Defaults) -> &mut Self {
        if let Some(name) = defaults.name() {
            self.name(name);
        }

        if let Some(unit) = defaults.unit_of_organisation() {
            self.unit_of_organisation(unit);
        }

        if let Some(hours) = defaults.hours() {
            self.total(hours);
        }

        if let Some(week_days) = defaults.week_days() {
            self.week_days(week_days.to_vec());
        }

        if let Some(work_start) = defaults.work_start() {
            self.work_start(work_start);
        }

        if let Some(work_end) = defaults.work_end() {
            self.work_end(work_end);
        }

        if let Some(max_per_day) = defaults.max_per_day() {
            self.max_per_day(max_per_day);
        }

        if let Some(output) = defaults.output() {
            self.output(output);
        }

        if let Some(state) = defaults.state() {
            self.state(state);
        }

        if let Some(path) = defaults.latex_mk_path() {
            self.latex_mk_path(path);
        }

        self
    }

    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn unit_of_organisation(&mut self, unit: impl Into<String>) -> &mut Self {
        self.unit_of_organisation = unit.into();
        self
    }

    pub fn year(&mut self, year: impl Into<Year>) -> &mut Self {
        self.year = Some(year.into());
        self
    }

    pub fn month(&mut self, month: Month) -> &mut Self {
        self.month = Some(month);
        self
    }

    pub fn last_day(&mut self, last_day: usize) -> &mut Self {
        self.last_day = Some(last_day);
        self
    }

    pub fn week_days(&mut self, mut week_days: Vec<WeekDay>) -> &mut Self {
        week_days.sort();
        week_days.dedup();
        self.week_days = week_days;
        self
    }

    pub fn total(&mut self, total: WorkingDuration) -> &mut Self {
        self.total = total;
        self
    }

    pub fn work_start(&mut self, work_start: TimeStamp) -> &mut Self {
        self.work_start = work_start;
        self
    }

    pub fn work_end(&mut self, work_end: TimeStamp) -> &mut Self {
        self.work_end = work_end;
        self
    }

    pub fn max_per_day(&mut self, max_per_day: WorkingDuration) -> &mut Self {
        self.max_per_day = max_per_day;
        self
    }

    /// The name of the output file without extension, `{year}` and `{month}`
    /// will be replaced.
    pub fn output(&mut self, output: impl Into<String>) -> &mut Self {
        self.output = output.into();
        self
    }

    pub fn state(&mut self, state: State) -> &mut Self {
        self.state = state;
        self
    }

    pub fn latex_mk_path(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.latex_mk_path = Some(path.into());
        self
    }

    pub fn preserve_dir(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.preserve_dir = Some(path.into());
        self
    }

    pub fn tex_only(&mut self, tex_only: bool) -> &mut Self {
        self.tex_only = tex_only;
        self
    }

    pub fn json(&mut self, json: bool) -> &mut Self {
        self.json = json;
        self
    }

    pub fn seed(&mut self, seed: u64) -> &mut Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the settings, a missing year, month or last day is taken
    /// relative to `today`.
    pub fn build(&self, today: Date) -> Result<Config, ConfigError> {
        let year = self.year.unwrap_or_else(|| today.year());
        let month = self.month.unwrap_or_else(|| today.month());
        // yesterday, the sheet is usually made for the days that have passed
        let last_day = self.last_day.unwrap_or_else(|| today.day().saturating_sub(1).max(1));

        if !(1..=9999).contains(&year.as_usize()) {
            return Err(ConfigError::InvalidYear(year));
        }

        if last_day == 0 {
            return Err(ConfigError::InvalidLastDay);
        }

        if self.week_days.is_empty() {
            return Err(ConfigError::NoWeekDays);
        }

        if !self.total.is_multiple_of(WorkingDuration::HALF_HOUR) {
            return Err(ConfigError::MisalignedTotal(self.total));
        }

        DistributorOptions::new(self.work_start, self.work_end, self.max_per_day).validate()?;

        let output = self.format_output(year, month)?;
        debug!("output: {}", output.display());

        Ok(Config {
            name: self.name.clone(),
            unit_of_organisation: self.unit_of_organisation.clone(),
            year,
            month,
            last_day,
            week_days: self.week_days.clone(),
            total: self.total,
            work_start: self.work_start,
            work_end: self.work_end,
            max_per_day: self.max_per_day,
            output,
            state: self.state,
            latex_mk_path: self.latex_mk_path.clone(),
            preserve_dir: self.preserve_dir.clone(),
            tex_only: self.tex_only,
            json: self.json,
            seed: self.seed,
        })
    }

    fn format_output(&self, year: Year, month: Month) -> Result<PathBuf, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidOutput {
            output: self.output.clone(),
            reason,
        };

        let output = formatx!(
            self.output.as_str(),
            year = year.as_usize(),
            month = month.as_usize()
        )
        .map_err(|e| invalid(e.to_string()))?;

        if output.trim().is_empty() {
            return Err(invalid("the name is empty".to_string()));
        }

        // the extension is chosen depending on what is generated
        let mut output = PathBuf::from(output);
        if output.has_extension("pdf") || output.has_extension("tex") {
            output.set_extension("");
        }

        Ok(output)
    }
}

impl Config {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn unit_of_organisation(&self) -> &str {
        &self.unit_of_organisation
    }

    #[must_use]
    pub fn year(&self) -> Year {
        self.year
    }

    #[must_use]
    pub fn month(&self) -> Month {
        self.month
    }

    #[must_use]
    pub fn last_day(&self) -> usize {
        self.last_day
    }

    #[must_use]
    pub fn week_days(&self) -> &[WeekDay] {
        &self.week_days
    }

    /// The working time from the contract, which is distributed over the month.
    #[must_use]
    pub fn total(&self) -> WorkingDuration {
        self.total
    }

    #[must_use]
    pub fn state(&self) -> State {
        self.state
    }

    #[must_use]
    pub fn distributor_options(&self) -> DistributorOptions {
        DistributorOptions::new(self.work_start, self.work_end, self.max_per_day)
    }

    #[must_use]
    pub fn calendar(&self) -> MonthCalendar {
        MonthCalendar::new(self.year, self.month, self.state)
    }

    /// The path of the output without extension.
    #[must_use]
    pub fn output(&self) -> &Path {
        &self.output
    }

    #[must_use]
    pub fn output_with_extension(&self, extension: &str) -> PathBuf {
        self.output.with_extension(extension)
    }

    #[must_use]
    pub fn latex_mk_path(&self) -> Option<&Path> {
        self.latex_mk_path.as_deref()
    }

    #[must_use]
    pub fn preserve_dir(&self) -> Option<&Path> {
        self.preserve_dir.as_deref()
    }

    #[must_use]
    pub fn tex_only(&self) -> bool {
        self.tex_only
    }

    #[must_use]
    pub fn json(&self) -> bool {
        self.json
    }

    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::date;

    #[test]
    fn test_defaults() {
        let config = ConfigBuilder::new().build(date!(2024:05:17)).unwrap();

        assert_eq!(config.name(), "Mustermann, Max");
        assert_eq!(config.year(), Year::new(2024));
        assert_eq!(config.month(), Month::May);
        assert_eq!(config.last_day(), 16);
        assert_eq!(config.week_days().len(), 5);
        assert_eq!(config.total(), working_duration!(25:00));
        assert_eq!(config.distributor_options(), DistributorOptions::default());
        assert_eq!(config.state(), State::NI);
        assert_eq!(config.output(), Path::new("timesheet"));
        assert_eq!(
            config.output_with_extension("pdf"),
            PathBuf::from("timesheet.pdf")
        );
        assert_eq!(config.seed(), None);
    }

    #[test]
    fn test_last_day_on_first_of_month() {
        let config = ConfigBuilder::new().build(date!(2024:06:01)).unwrap();

        assert_eq!(config.last_day(), 1);
    }

    #[test]
    fn test_explicit_values() {
        let config = ConfigBuilder::new()
            .year(2023_usize)
            .month(Month::December)
            .last_day(31)
            .week_days(vec![WeekDay::Friday, WeekDay::Monday, WeekDay::Friday])
            .total(working_duration!(40:30))
            .state(State::BY)
            .seed(42)
            .build(date!(2024:05:17))
            .unwrap();

        assert_eq!(config.year(), Year::new(2023));
        assert_eq!(config.month(), Month::December);
        assert_eq!(config.last_day(), 31);
        assert_eq!(config.week_days(), &[WeekDay::Monday, WeekDay::Friday]);
        assert_eq!(config.total(), working_duration!(40:30));
        assert_eq!(config.state(), State::BY);
        assert_eq!(config.seed(), Some(42));
    }

    #[test]
    fn test_defaults_are_overridden() {
        let defaults: Defaults = toml::from_str(concat!(
            "name = \"Musterfrau, Erika\"\n",
            "hours = 30\n",
            "state = \"HE\"\n",
        ))
        .unwrap();

        let mut builder = ConfigBuilder::new();
        builder.with_defaults(&defaults);

        let config = builder.build(date!(2024:05:17)).unwrap();
        assert_eq!(config.name(), "Musterfrau, Erika");
        assert_eq!(config.total(), working_duration!(30:00));
        assert_eq!(config.state(), State::HE);
        // untouched
        assert_eq!(
            config.unit_of_organisation(),
            "FB Mathematik/Informatik, Institut für Informatik"
        );

        // the command line comes last
        builder.total(working_duration!(12:00));
        assert_eq!(
            builder.build(date!(2024:05:17)).unwrap().total(),
            working_duration!(12:00)
        );
    }

    #[test]
    fn test_output_placeholders() {
        let config = ConfigBuilder::new()
            .output("sheets/{year}-{month:02}")
            .month(Month::March)
            .build(date!(2024:05:17))
            .unwrap();

        assert_eq!(config.output(), Path::new("sheets/2024-03"));

        let config = ConfigBuilder::new()
            .output("march.pdf")
            .build(date!(2024:05:17))
            .unwrap();

        assert_eq!(config.output(), Path::new("march"));
        assert_eq!(
            config.output_with_extension("tex"),
            PathBuf::from("march.tex")
        );
    }

    #[test]
    fn test_validation() {
        let today = date!(2024:05:17);

        assert_eq!(
            ConfigBuilder::new()
                .year(100_000_000_000_000_000_usize)
                .last_day(31)
                .build(today),
            Err(ConfigError::InvalidYear(Year::new(100_000_000_000_000_000)))
        );

        assert_eq!(
            ConfigBuilder::new().year(0_usize).build(today),
            Err(ConfigError::InvalidYear(Year::new(0)))
        );

        assert!(ConfigBuilder::new().year(9999_usize).build(today).is_ok());

        assert_eq!(
            ConfigBuilder::new().last_day(0).build(today),
            Err(ConfigError::InvalidLastDay)
        );

        assert_eq!(
            ConfigBuilder::new().week_days(Vec::new()).build(today),
            Err(ConfigError::NoWeekDays)
        );

        assert_eq!(
            ConfigBuilder::new()
                .total(working_duration!(10:20))
                .build(today),
            Err(ConfigError::MisalignedTotal(working_duration!(10:20)))
        );

        assert_eq!(
            ConfigBuilder::new()
                .work_start(time_stamp!(20:00))
                .work_end(time_stamp!(08:00))
                .build(today),
            Err(ConfigError::InvalidOptions(InvalidOptions::EmptyWorkingDay {
                start: time_stamp!(20:00),
                end: time_stamp!(08:00),
            }))
        );

        assert_eq!(
            ConfigBuilder::new()
                .max_per_day(working_duration!(00:00))
                .build(today),
            Err(ConfigError::InvalidOptions(
                InvalidOptions::InvalidDailyLimit(working_duration!(00:00))
            ))
        );
    }
}
