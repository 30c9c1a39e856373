use std::collections::BTreeMap;

use serde::Serialize;

use crate::schedule::WorkWindow;
use crate::time::WorkingDuration;

/// The days of a month on which is worked, with the time worked on each day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Assignment {
    windows: BTreeMap<usize, WorkWindow>,
}

impl Assignment {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the window worked on the `day` of the month.
    #[must_use]
    pub fn get(&self, day: usize) -> Option<&WorkWindow> {
        self.windows.get(&day)
    }

    /// Sets the window of a day, replacing the previous one.
    pub fn insert(&mut self, day: usize, window: WorkWindow) -> Option<WorkWindow> {
        self.windows.insert(day, window)
    }

    /// Iterates over the days with work, in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &WorkWindow)> + '_ {
        self.windows.iter().map(|(day, window)| (*day, window))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// The sum of the durations of all windows.
    #[must_use]
    pub fn total_duration(&self) -> WorkingDuration {
        self.windows.values().map(WorkWindow::duration).sum()
    }
}

impl FromIterator<(usize, WorkWindow)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (usize, WorkWindow)>>(iter: I) -> Self {
        Self {
            windows: iter.into_iter().collect(),
        }
    }
}
