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
    proc.render_crt().context("Failed to draw CRT image.")?;

    Ok(())
}
