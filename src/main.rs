use std::env;
use std::ffi::OsStr;
use std::path::Path;

use anyhow::Context as _;
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use seahorse::{App, Context, Flag, FlagType};

use hiwi_timesheet::generate_time_sheet;
use hiwi_timesheet::input::{Config, ConfigBuilder};
use hiwi_timesheet::time::{self, parse_week_days, Month, State, TimeStamp, WorkingDuration};

const DEFAULTS_FILE: &str = "timesheet.toml";

fn set_env_if_absent<K: AsRef<OsStr>, V: AsRef<OsStr>>(var: K, default: impl FnOnce() -> V) {
    if env::var(var.as_ref()).is_err() {
        env::set_var(var, default());
    }
}

fn main() {
    set_env_if_absent("RUST_APP_LOG", || "info");
    color_backtrace::install();
    pretty_env_logger::init_custom_env("RUST_APP_LOG");

    let args: Vec<String> = env::args().collect();
    app().run(args);
}

fn exit_on_error(result: anyhow::Result<()>) {
    if let Err(e) = result {
        error!("{:?}", e);
        ::std::process::exit(1);
    }
}

mod seahorse_exts {
    use core::str::FromStr;
    use std::error::Error;

    use anyhow::Context as _;
    use seahorse::Context;

    pub trait ContextExt {
        fn context(&self) -> &Context;

        /// Returns `None` if the flag has not been passed.
        fn optional_string_flag(&self, name: &str) -> Option<String> {
            self.context().string_flag(name).ok()
        }

        fn parsed_flag<T>(&self, name: &str) -> anyhow::Result<Option<T>>
        where
            T: FromStr,
            T::Err: Error + Send + Sync + 'static,
        {
            self.optional_string_flag(name)
                .map(|value| {
                    value
                        .parse()
                        .with_context(|| format!("invalid value `{}` for flag \"{}\"", value, name))
                })
                .transpose()
        }
    }

    impl ContextExt for Context {
        fn context(&self) -> &Context {
            self
        }
    }
}

use seahorse_exts::ContextExt;

fn build_config(context: &Context) -> anyhow::Result<Config> {
    let mut builder = match context.optional_string_flag("config") {
        Some(path) => ConfigBuilder::try_from_toml_file(path)?,
        None if Path::new(DEFAULTS_FILE).is_file() => {
            info!("using defaults from `{}`", DEFAULTS_FILE);
            ConfigBuilder::try_from_toml_file(DEFAULTS_FILE)?
        }
        None => ConfigBuilder::new(),
    };

    if let Some(name) = context.optional_string_flag("name") {
        builder.name(name);
    }

    if let Some(unit) = context.optional_string_flag("unit") {
        builder.unit_of_organisation(unit);
    }

    if let Some(year) = context.parsed_flag::<usize>("year")? {
        builder.year(year);
    }

    if let Some(month) = context.parsed_flag::<usize>("month")? {
        builder.month(Month::try_from(month).with_context(|| format!("invalid month `{}`", month))?);
    }

    if let Some(last_day) = context.parsed_flag::<usize>("last-day")? {
        builder.last_day(last_day);
    }

    if let Some(days) = context.optional_string_flag("days") {
        builder.week_days(parse_week_days(&days)?);
    }

    if let Some(hours) = context.parsed_flag::<WorkingDuration>("hours")? {
        builder.total(hours);
    }

    if let Some(start) = context.parsed_flag::<TimeStamp>("start")? {
        builder.work_start(start);
    }

    if let Some(end) = context.parsed_flag::<TimeStamp>("end")? {
        builder.work_end(end);
    }

    if let Some(max) = context.parsed_flag::<WorkingDuration>("max")? {
        builder.max_per_day(max);
    }

    if let Some(output) = context.optional_string_flag("output") {
        builder.output(output);
    }

    if let Some(state) = context.parsed_flag::<State>("state")? {
        builder.state(state);
    }

    if let Some(seed) = context.parsed_flag::<u64>("seed")? {
        builder.seed(seed);
    }

    if let Some(path) = context.optional_string_flag("latexmk") {
        builder.latex_mk_path(path);
    }

    if let Some(path) = context.optional_string_flag("preserve-dir") {
        builder.preserve_dir(path);
    }

    builder
        .tex_only(context.bool_flag("tex-only"))
        .json(context.bool_flag("json"));

    let config = builder.build(time::today()?)?;

    info!("finished building config");

    Ok(config)
}

fn make(context: &Context) -> anyhow::Result<()> {
    let config = build_config(context)?;

    let seed = config.seed().unwrap_or_else(rand::random);
    info!("seed: {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    for path in generate_time_sheet(&config, &mut rng)? {
        let path = dunce::canonicalize(&path)
            .with_context(|| format!("failed to find `{}`", path.display()))?;
        info!("wrote {}", path.display());
    }

    Ok(())
}

fn app() -> App {
    App::new(env!("CARGO_PKG_NAME"))
        .description(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .usage(format!("{} [args]", env!("CARGO_PKG_NAME")))
        .flag(
            Flag::new("name", FlagType::String)
                .description("Name of the employee. Default: \"Mustermann, Max\"")
                .alias("n"),
        )
        .flag(
            Flag::new("unit", FlagType::String)
                .description("Unit of organisation.")
                .alias("u"),
        )
        .flag(
            Flag::new("year", FlagType::String)
                .description("Year of the time sheet. Default: current year")
                .alias("y"),
        )
        .flag(
            Flag::new("month", FlagType::String)
                .description("Month of the time sheet (1-12). Default: current month")
                .alias("m"),
        )
        .flag(
            Flag::new("last-day", FlagType::String)
                .description("Last day of the month that should be used. Default: yesterday")
                .alias("l"),
        )
        .flag(
            Flag::new("days", FlagType::String)
                .description("Comma separated days of the week (monday = 0, tuesday = 1, ... or mon,tue,...). Default: 0,1,2,3,4")
                .alias("d"),
        )
        .flag(
            Flag::new("hours", FlagType::String)
                .description("Working time of the month, like `25`, `12.5` or `12:30`. Default: 25"),
        )
        .flag(
            Flag::new("start", FlagType::String)
                .description("Earliest start of work on a day. Default: 8")
                .alias("s"),
        )
        .flag(
            Flag::new("end", FlagType::String)
                .description("Latest end of work on a day. Default: 20")
                .alias("e"),
        )
        .flag(
            Flag::new("max", FlagType::String)
                .description("Maximum working time on a single day. Default: 6"),
        )
        .flag(
            Flag::new("output", FlagType::String)
                .description("Name of the output file, `{year}` and `{month}` will be replaced. Default: timesheet")
                .alias("o"),
        )
        .flag(
            Flag::new("state", FlagType::String)
                .description("German state for public holidays, one of BW, BY, BE, BB, HB, HH, HE, MV, NI, NW, RP, SL, SN, ST, SH, TH. Default: NI"),
        )
        .flag(
            Flag::new("config", FlagType::String)
                .description("[optional] Path to a toml file with personal defaults. Default: `timesheet.toml` if it exists")
                .alias("c"),
        )
        .flag(
            Flag::new("seed", FlagType::String)
                .description("[optional] Seed for the random distribution, the same seed gives the same time sheet."),
        )
        .flag(
            Flag::new("latexmk", FlagType::String)
                .description("[optional] Path to latexmk. Default: latexmk"),
        )
        .flag(
            Flag::new("preserve-dir", FlagType::String)
                .description("[optional] Directory in which the latex files are kept if compiling fails."),
        )
        .flag(
            Flag::new("tex-only", FlagType::Bool)
                .description("[optional] Writes the latex file instead of compiling it."),
        )
        .flag(
            Flag::new("json", FlagType::Bool)
                .description("[optional] Additionally writes the distributed hours as json."),
        )
        .action(|context: &Context| exit_on_error(make(context)))
}
