#![allow(dead_code)]

use hiwi_timesheet::schedule::{Assignment, DistributorOptions, HourDistributor};
use hiwi_timesheet::time::{TimeStamp, WorkingDuration};

#[must_use]
pub fn distributor(start: TimeStamp, end: TimeStamp, max: WorkingDuration) -> HourDistributor {
    HourDistributor::new(DistributorOptions::new(start, end, max)).expect("options should be valid")
}

/// Panics if the assignment breaks any of the rules of the distributor.
pub fn assert_valid_assignment(
    assignment: &Assignment,
    options: &DistributorOptions,
    eligible_days: &[usize],
    total: WorkingDuration,
) {
    assert_eq!(assignment.total_duration(), total);

    for (day, window) in assignment.iter() {
        assert!(
            eligible_days.contains(&day),
            "day {} is not eligible ({:?})",
            day,
            eligible_days
        );
        assert!(
            window.start() >= options.work_start && window.end() <= options.work_end,
            "{} on day {} is outside of the working day",
            window,
            day
        );
        assert!(
            window.duration() <= options.daily_limit,
            "{} on day {} is longer than {}",
            window,
            day,
            options.daily_limit
        );
        assert_eq!(window.start().minute() % 30, 0, "{} is not aligned", window);
        assert_eq!(window.end().minute() % 30, 0, "{} is not aligned", window);
    }
}
