//! Tests that make a whole time sheet, without compiling the latex file.

use std::fs;

use hiwi_timesheet::input::ConfigBuilder;
use hiwi_timesheet::time::{Month, State, WeekDay};
use hiwi_timesheet::{date, distribute_hours, generate_time_sheet, working_duration};

use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

#[test]
fn test_tex_and_json_are_written() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("sheets").join("hiwi-{year}-{month:02}");

    let config = ConfigBuilder::new()
        .name("Musterfrau, Erika")
        .year(2024_usize)
        .month(Month::May)
        .last_day(31)
        .total(working_duration!(20:00))
        .state(State::NI)
        .output(output.to_string_lossy())
        .tex_only(true)
        .json(true)
        .build(date!(2024:06:10))
        .unwrap();

    let mut rng = StdRng::seed_from_u64(2024);
    let written = generate_time_sheet(&config, &mut rng).unwrap();

    let tex_path = temp.path().join("sheets").join("hiwi-2024-05.tex");
    let logo_path = temp.path().join("sheets").join("logo.png");
    let json_path = temp.path().join("sheets").join("hiwi-2024-05.json");
    assert_eq!(
        written,
        vec![tex_path.clone(), logo_path.clone(), json_path.clone()]
    );
    assert!(!fs::read(logo_path).unwrap().is_empty());

    let tex = fs::read_to_string(tex_path).unwrap();
    assert!(tex.contains("Monat/Jahr: & Mai 2024"));
    assert!(tex.contains("\\cellcolor{lightgray!50}Wed, 01.05.2024&&&&&&Erster Mai"));
    assert!(tex.contains("\\cellcolor{lightgray!50}Thu, 09.05.2024&&&&&&Christi Himmelfahrt"));
    assert!(tex.contains("\\textbf{Summe}}&&&&20:00&&"));

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(json_path).unwrap()).unwrap();
    let days = json.as_object().unwrap();
    assert!(!days.is_empty());
    for day in days.keys() {
        let day: usize = day.parse().unwrap();
        assert!(![1, 9, 20].contains(&day), "worked on the holiday {}", day);
    }
}

#[test]
fn test_same_seed_same_hours() {
    let config = ConfigBuilder::new()
        .year(2024_usize)
        .month(Month::October)
        .last_day(31)
        .week_days(vec![WeekDay::Tuesday, WeekDay::Thursday])
        .total(working_duration!(18:30))
        .build(date!(2024:11:02))
        .unwrap();

    let first = distribute_hours(&config, &mut StdRng::seed_from_u64(1)).unwrap();
    let second = distribute_hours(&config, &mut StdRng::seed_from_u64(1)).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.total_duration(), working_duration!(18:30));
    for (day, _) in first.iter() {
        // the 3rd of october is a thursday and a holiday
        assert_ne!(day, 3);
    }
}

#[test]
fn test_last_day_limits_the_days() {
    let config = ConfigBuilder::new()
        .year(2024_usize)
        .month(Month::May)
        .last_day(3)
        .total(working_duration!(12:00))
        .build(date!(2024:05:04))
        .unwrap();

    // only the 2nd and the 3rd can be worked on
    let mut rng = StdRng::seed_from_u64(0);
    let assignment = distribute_hours(&config, &mut rng).unwrap();
    assert_eq!(assignment.iter().map(|(day, _)| day).collect::<Vec<_>>(), vec![2, 3]);

    let config = ConfigBuilder::new()
        .year(2024_usize)
        .month(Month::May)
        .last_day(3)
        .total(working_duration!(12:30))
        .build(date!(2024:05:04))
        .unwrap();

    let mut rng = StdRng::seed_from_u64(0);
    let error = distribute_hours(&config, &mut rng).unwrap_err();
    assert!(error.to_string().contains("00:30 are left over"));
}
