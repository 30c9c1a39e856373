use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::schedule::{
    Assignment, DistributorOptions, InvalidOptions, ScheduleError, WeightedChoice, WorkWindow,
};
use crate::time::{TimeStamp, WorkingDuration};

/// Distributes working hours in half hour steps over the days of a month.
///
/// The days are shuffled and the `i`-th day gets the weight `1 / i`, so that
/// some days end up with long blocks of work while others stay short or free.
#[derive(Debug, Clone, PartialEq)]
pub struct HourDistributor {
    options: DistributorOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Extension {
    Before,
    After,
}

impl HourDistributor {
    pub fn new(options: DistributorOptions) -> Result<Self, InvalidOptions> {
        options.validate()?;

        Ok(Self { options })
    }

    #[must_use]
    pub const fn options(&self) -> &DistributorOptions {
        &self.options
    }

    /// Distributes the `total` over the `eligible_days`.
    ///
    /// The sum of all windows in the result is exactly `total`.
    pub fn distribute<R: Rng + ?Sized>(
        &self,
        total: WorkingDuration,
        eligible_days: &[usize],
        rng: &mut R,
    ) -> Result<Assignment, ScheduleError> {
        self.extend_assignment(Assignment::new(), total, eligible_days, rng)
    }

    /// Distributes `additional` hours on top of an existing assignment.
    ///
    /// Days of the assignment that have already reached the daily limit
    /// will not receive any more work.
    pub fn extend_assignment<R: Rng + ?Sized>(
        &self,
        assignment: Assignment,
        additional: WorkingDuration,
        eligible_days: &[usize],
        rng: &mut R,
    ) -> Result<Assignment, ScheduleError> {
        let mut days = eligible_days.to_vec();
        days.sort_unstable();
        days.dedup();
        days.shuffle(rng);

        self.distribute_in_order(assignment, additional, days, rng)
    }

    /// Like `extend_assignment`, but the days are weighted in the order in which they are given.
    pub(crate) fn distribute_in_order<R: Rng + ?Sized>(
        &self,
        mut assignment: Assignment,
        total: WorkingDuration,
        days: Vec<usize>,
        rng: &mut R,
    ) -> Result<Assignment, ScheduleError> {
        if !total.is_multiple_of(WorkingDuration::HALF_HOUR) {
            return Err(ScheduleError::MisalignedTotal(total));
        }

        let mut candidates = WeightedChoice::with_decaying_weights(
            days.into_iter()
                .filter(|day| assignment.get(*day).map_or(true, |w| self.can_extend(w))),
        );

        debug!(
            "distributing {} over {} days, at most {} per day",
            total,
            candidates.len(),
            self.options.daily_limit
        );

        let mut remaining = total;
        while !remaining.is_zero() {
            let Some(day) = candidates.choose(rng) else {
                return Err(ScheduleError::Unsatisfiable { remaining });
            };

            let window = match assignment.get(day) {
                Some(window) => {
                    let Some(window) = self.extend(window, rng) else {
                        // the day is full, it should not have been a candidate
                        trace!("day {} can not be extended, removing it", day);
                        candidates.remove(&day);
                        continue;
                    };

                    window
                }
                None => self.start_window(rng)?,
            };

            trace!("day {:02}: {} ({})", day, window, window.duration());
            assignment.insert(day, window);
            remaining -= WorkingDuration::HALF_HOUR;

            if !self.can_extend(&window) {
                trace!("day {} is full", day);
                candidates.remove(&day);
            }
        }

        Ok(assignment)
    }

    /// A new window of half an hour at a random time of the working day.
    fn start_window<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<WorkWindow, ScheduleError> {
        let slot = rng.gen_range(0..self.options.start_slots());
        let offset = WorkingDuration::from_mins(slot * WorkingDuration::HALF_HOUR.as_mins());

        self.options
            .work_start
            .checked_add(offset)
            .and_then(WorkWindow::half_hour_at)
            .ok_or(ScheduleError::InvalidOptions(InvalidOptions::EmptyWorkingDay {
                start: self.options.work_start,
                end: self.options.work_end,
            }))
    }

    fn possible_extensions(&self, window: &WorkWindow) -> Vec<Extension> {
        let mut result = Vec::with_capacity(2);

        if window.start() > self.options.work_start {
            result.push(Extension::Before);
        }

        if window.end() < self.options.work_end {
            result.push(Extension::After);
        }

        result
    }

    /// Returns `true` if the window is below the daily limit and can grow in at least one direction.
    fn can_extend(&self, window: &WorkWindow) -> bool {
        window.duration() < self.options.daily_limit && !self.possible_extensions(window).is_empty()
    }

    /// Extends the window by half an hour in a random direction.
    fn extend<R: Rng + ?Sized>(&self, window: &WorkWindow, rng: &mut R) -> Option<WorkWindow> {
        if window.duration() >= self.options.daily_limit {
            return None;
        }

        match self.possible_extensions(window).choose(rng)? {
            Extension::Before => window.extended_before(),
            Extension::After => window.extended_after(),
        }
    }

    /// Returns `true` if the window lies within the working day and respects the daily limit.
    #[must_use]
    pub fn is_valid_window(&self, window: &WorkWindow) -> bool {
        let is_aligned = |time: TimeStamp| time.is_aligned_to(WorkingDuration::HALF_HOUR);

        window.start() >= self.options.work_start
            && window.end() <= self.options.work_end
            && window.duration() <= self.options.daily_limit
            && is_aligned(window.start())
            && is_aligned(window.end())
    }
}
