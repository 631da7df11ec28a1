use anyhow::{Context, Result};
use clap::Parser;
use day5::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let (mut stacks, moves) = day5::read_plan(&args.input_path).with_context(|| {
        format!(
            "Failed to read crate stacks and move commands from given file({}).",
            args.input_path.display()
        )
    })?;

    for mv in &moves {
        stacks
            .move_with_9001(mv)
            .context("Failed to replay move command.")?;
    }
    println!(
        "After the CrateMover 9001 finishes, the top crates read {}.",
        stacks.top_crates()
    );

    Ok(())
}
