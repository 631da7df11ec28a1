use anyhow::{Context, Result};
use clap::Parser;
use day7::CLIArgs;

const DISK_SIZE: usize = 70000000;
const UPDATE_SIZE: usize = 30000000;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let tree = day7::read_tree(&args.input_path).with_context(|| {
        format!(
            "Failed to read directory tree from given file({}).",
            args.input_path.display()
        )
    })?;

    let total_used = tree.total_size();
    let required = UPDATE_SIZE.saturating_sub(DISK_SIZE.saturating_sub(total_used));
    match tree
        .dir_sizes()
        .into_iter()
        .filter(|(_, size)| *size > required)
        .min_by_key(|(_, size)| *size)
    {
        Some((name, size)) => println!(
            "Deleting directory {} with total size {} frees enough space for the update.",
            name, size
        ),
        None => println!("No single directory frees enough space for the update."),
    }

    Ok(())
}
