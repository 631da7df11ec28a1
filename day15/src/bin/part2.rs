use anyhow::{Context, Result};
use clap::Parser;
use day15::Part2CLIArgs;

fn main() -> Result<()> {
    let args = Part2CLIArgs::parse();
    let sensors = day15::read_sensors(&args.input_path).with_context(|| {
        format!(
            "Failed to read sensors from given file({}).",
            args.input_path.display()
        )
    })?;

    match day15::find_uncovered(&sensors, args.search_bound) {
        Some((x, y)) => println!(
            "The distress beacon is at ({}, {}), tuning frequency {}.",
            x,
            y,
            day15::tuning_frequency((x, y))
        ),
        None => println!("Every position in the search area is covered by a sensor."),
    }

    Ok(())
}
