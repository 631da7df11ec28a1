use anyhow::{Context, Result};
use clap::Parser;
use day1::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let totals = day1::read_totals(&args.input_path).with_context(|| {
        format!(
            "Failed to read calorie totals from given file({}).",
            args.input_path.display()
        )
    })?;

    let max_total = totals.iter().max().copied().unwrap_or(0);
    println!(
        "The elf carrying the most food carries {} calories.",
        max_total
    );

    Ok(())
}
