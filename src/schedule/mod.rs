mod assignment;
mod distributor;
mod options;
mod weighted;
mod work_window;

pub use assignment::*;
pub use distributor::*;
pub use options::*;
pub use weighted::*;
pub use work_window::*;

use thiserror::Error;

use crate::time::WorkingDuration;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("could not work off all hours with the given parameters, {remaining} are left over")]
    Unsatisfiable { remaining: WorkingDuration },
    #[error("the hours can only be distributed in steps of half an hour, but the total is {0}")]
    MisalignedTotal(WorkingDuration),
    #[error(transparent)]
    InvalidOptions(#[from] InvalidOptions),
}
