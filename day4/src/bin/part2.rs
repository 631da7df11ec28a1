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

    let overlap_count = pairs
        .iter()
        .filter(|(left, right)| left.overlaps(right))
        .count();
    println!("In {} pair(s), the assignments overlap.", overlap_count);

    Ok(())
}
