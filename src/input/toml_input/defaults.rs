use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::time::{State, TimeStamp, WeekDay, WorkingDuration};
use crate::utils;

/// Personal defaults, read from a toml file like this:
///
/// ```toml
/// name = "Mustermann, Max"
/// unit_of_organisation = "FB Mathematik/Informatik, Institut für Informatik"
/// hours = 40
/// week_days = ["Mon", "Wed", "Fri"]
/// work_start = "09:00"
/// work_end = "18:00"
/// max_per_day = "04:30"
/// state = "BW"
/// ```
///
/// Every key is optional, unknown keys are rejected.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Defaults {
    name: Option<String>,
    unit_of_organisation: Option<String>,
    hours: Option<WorkingDuration>,
    week_days: Option<Vec<WeekDay>>,
    work_start: Option<TimeStamp>,
    work_end: Option<TimeStamp>,
    max_per_day: Option<WorkingDuration>,
    output: Option<String>,
    state: Option<State>,
    latex_mk_path: Option<PathBuf>,
}

impl Defaults {
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).with_context(|| format!("failed to open `{}`", path.display()))?;

        utils::toml_from_reader(file).with_context(|| format!("failed to parse `{}`", path.display()))
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn unit_of_organisation(&self) -> Option<&str> {
        self.unit_of_organisation.as_deref()
    }

    #[must_use]
    pub fn hours(&self) -> Option<WorkingDuration> {
        self.hours
    }

    #[must_use]
    pub fn week_days(&self) -> Option<&[WeekDay]> {
        self.week_days.as_deref()
    }

    #[must_use]
    pub fn work_start(&self) -> Option<TimeStamp> {
        self.work_start
    }

    #[must_use]
    pub fn work_end(&self) -> Option<TimeStamp> {
        self.work_end
    }

    #[must_use]
    pub fn max_per_day(&self) -> Option<WorkingDuration> {
        self.max_per_day
    }

    #[must_use]
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    #[must_use]
    pub fn state(&self) -> Option<State> {
        self.state
    }

    #[must_use]
    pub fn latex_mk_path(&self) -> Option<&Path> {
        self.latex_mk_path.as_deref()
    }
}
