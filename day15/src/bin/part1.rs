use anyhow::{Context, Result};
use clap::Parser;
use day15::Part1CLIArgs;

fn main() -> Result<()> {
    let args = Part1CLIArgs::parse();
    let sensors = day15::read_sensors(&args.input_path).with_context(|| {
        format!(
            "Failed to read sensors from given file({}).",
            args.input_path.display()
        )
    })?;

    println!(
        "On row y={}, {} position(s) cannot contain a beacon.",
        args.target_row,
        day15::covered_on_row(&sensors, args.target_row)
    );

    Ok(())
}
