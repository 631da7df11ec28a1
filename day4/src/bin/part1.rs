use anyhow::{Context, Result};
use clap::Parser;
use day4::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let pairs = day4::read_pairs(&args.input_path).with_context(|| {
        format!(
            "Failed to read assignment pairs from given file({}).",
            args.input_path.display()
        )
    })?;

    let enclosed_count = pairs
        .iter()
        .filter(|(left, right)| left.encloses(right) || right.encloses(left))
        .count();
    println!(
        "In {} pair(s), one assignment fully contains the other.",
        enclosed_count
    );

    Ok(())
}
