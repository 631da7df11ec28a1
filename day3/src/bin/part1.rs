use anyhow::{Context, Result};
use clap::Parser;
use day3::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let rucksacks = day3::read_rucksacks(&args.input_path).with_context(|| {
        format!(
            "Failed to read rucksacks from given file({}).",
            args.input_path.display()
        )
    })?;

    let priority_sum = day3::shared_priority_sum(&rucksacks)
        .context("Failed to find the shared item of every rucksack.")?;
    println!(
        "The sum of priorities of items shared by both compartments is {}.",
        priority_sum
    );

    Ok(())
}
