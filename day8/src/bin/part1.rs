use anyhow::{Context, Result};
use clap::Parser;
use day8::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let grid = day8::read_grid(&args.input_path).with_context(|| {
        format!(
            "Failed to read tree grid from given file({}).",
            args.input_path.display()
        )
    })?;

    println!(
        "{} tree(s) are visible from outside the grid.",
        grid.visible_count()
    );

    Ok(())
}
