use anyhow::{Context, Result};
use clap::Parser;
use day6_2015::{CLIArgs, LightGrid};

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let instructions = day6_2015::read_instructions(&args.input_path).with_context(|| {
        format!(
            "Failed to read instructions from given file({}).",
            args.input_path.display()
        )
    })?;

    let mut grid = LightGrid::new();
    for inst in &instructions {
        grid.apply(inst).context("Failed to apply instruction.")?;
    }
    println!("{} light(s) are lit after all instructions.", grid.lit_count());

    Ok(())
}
