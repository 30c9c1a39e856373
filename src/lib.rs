mod latex_generator;
mod latex_string;
mod tex_render;
mod utils;

pub mod input;
pub mod schedule;
pub mod sheet;
pub mod time;

use std::path::PathBuf;

use anyhow::Context;
use log::info;
use rand::Rng;

use crate::input::Config;
use crate::latex_generator::LatexGenerator;
use crate::schedule::{Assignment, HourDistributor};
use crate::sheet::TimeSheet;

/// Distributes the working time of the month over the days that can be worked on.
pub fn distribute_hours<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> anyhow::Result<Assignment> {
    let calendar = config.calendar();
    let eligible_days = calendar.eligible_days(config.last_day(), config.week_days());
    info!(
        "distributing {} over {} days in {:04}-{:02}",
        config.total(),
        eligible_days.len(),
        config.year().as_usize(),
        config.month()
    );

    let distributor = HourDistributor::new(config.distributor_options())?;
    let assignment = distributor.distribute(config.total(), &eligible_days, rng)?;

    info!("worked on {} days", assignment.len());

    Ok(assignment)
}

/// Makes the time sheet and returns the paths of the files that were written.
pub fn generate_time_sheet<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> anyhow::Result<Vec<PathBuf>> {
    let assignment = distribute_hours(config, rng)?;
    let sheet = TimeSheet::new(config, &config.calendar(), &assignment);

    info!("generating time sheet for {}", sheet.period());

    let mut written = LatexGenerator::new(config, &sheet)
        .generate()
        .context("failed to generate the time sheet")?;

    if config.json() {
        let path = config.output_with_extension("json");
        utils::write(&path, serde_json::to_string_pretty(&assignment)?)
            .with_context(|| format!("failed to write `{}`", path.display()))?;
        written.push(path);
    }

    Ok(written)
}
