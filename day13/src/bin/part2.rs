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
        "The decoder key for the distress signal is {}.",
        day13::decoder_key(packets)
    );

    Ok(())
}
