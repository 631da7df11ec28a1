use anyhow::{Context, Result};
use clap::Parser;
use day9::{CLIArgs, Rope};

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let motions = day9::read_motions(&args.input_path).with_context(|| {
        format!(
            "Failed to read motions from given file({}).",
            args.input_path.display()
        )
    })?;

    let mut rope = Rope::new();
    for motion in &motions {
        rope.apply(motion);
    }
    println!(
        "The last tail knot visited {} grid cell(s).",
        rope.last_tail_visited_n()
    );

    Ok(())
}
