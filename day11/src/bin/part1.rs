use anyhow::{Context, Result};
use clap::Parser;
use day11::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let mut troop = day11::read_troop(&args.input_path).with_context(|| {
        format!(
            "Failed to read monkeys from given file({}).",
            args.input_path.display()
        )
    })?;

    for _ in 0..20 {
        troop.play_round(true);
    }
    println!(
        "After 20 rounds, the level of monkey business is {}.",
        troop.monkey_business()
    );

    Ok(())
}
