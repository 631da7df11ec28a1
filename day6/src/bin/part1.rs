use anyhow::{Context, Result};
use clap::Parser;
use day6::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let signals = day6::read_signals(&args.input_path).with_context(|| {
        format!(
            "Failed to read signals from given file({}).",
            args.input_path.display()
        )
    })?;

    for signal in &signals {
        match day6::find_marker(signal, day6::PACKET_MARKER_LEN) {
            Some(marker) => println!("Start-of-packet marker after character {}.", marker),
            None => println!("No start-of-packet marker found in signal."),
        }
    }

    Ok(())
}
