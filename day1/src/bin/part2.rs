use anyhow::{Context, Result};
use clap::Parser;
use day1::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let mut totals = day1::read_totals(&args.input_path).with_context(|| {
        format!(
            "Failed to read calorie totals from given file({}).",
            args.input_path.display()
        )
    })?;

    totals.sort_unstable();
    let top3_sum = totals.iter().rev().take(3).sum::<usize>();
    println!(
        "The three elves carrying the most food carry {} calories in total.",
        top3_sum
    );

    Ok(())
}
