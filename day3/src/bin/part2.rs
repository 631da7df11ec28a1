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

    let priority_sum = day3::badge_priority_sum(&rucksacks)
        .context("Failed to find the badge item of every group.")?;
    println!(
        "The sum of priorities of badge items over all groups is {}.",
        priority_sum
    );

    Ok(())
}
