use anyhow::{Context, Result};
use clap::Parser;
use day13::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let packets = day13::read_packets(&args.input_path).with_context(|| {
        format!(
            "Failed to read packets from given file({}).",
            args.input_path.display()
        )
    })?;

    println!(
        "The sum of indices of pairs in the right order is {}.",
        day13::ordered_pair_index_sum(&packets)
    );

    Ok(())
}
