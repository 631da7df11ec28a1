use anyhow::{Context, Result};
use clap::Parser;
use day10::{CLIArgs, Processor};

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let instructions = day10::read_instructions(&args.input_path).with_context(|| {
        format!(
            "Failed to read instructions from given file({}).",
            args.input_path.display()
        )
    })?;

    let mut proc = Processor::new();
    for inst in instructions {
        proc.execute(inst);
    }
    println!(
        "The sum of the six signal strengths is {}.",
        proc.signal_sum(&[20, 60, 100, 140, 180, 220])
    );

    Ok(())
}
