use anyhow::{Context, Result};
use clap::Parser;
use day7::CLIArgs;

const PART1_LIMIT: usize = 100000;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let tree = day7::read_tree(&args.input_path).with_context(|| {
        format!(
            "Failed to read directory tree from given file({}).",
            args.input_path.display()
        )
    })?;

    tree.print().context("Failed to print directory tree.")?;

    match tree
        .dir_sizes()
        .into_iter()
        .filter(|(_, size)| *size < PART1_LIMIT)
        .max_by_key(|(_, size)| *size)
    {
        Some((name, size)) => println!(
            "The largest directory under {} is {} with total size {}.",
            PART1_LIMIT, name, size
        ),
        None => println!("No directory has total size under {}.", PART1_LIMIT),
    }

    Ok(())
}
