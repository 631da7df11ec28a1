use anyhow::{Context, Result};
use clap::Parser;
use day12::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let map = day12::read_map(&args.input_path).with_context(|| {
        format!(
            "Failed to read elevation map from given file({}).",
            args.input_path.display()
        )
    })?;

    let end = map.end();
    match map
        .lowest_positions()
        .iter()
        .filter_map(|start| map.find_path(start, &end))
        .map(|path| path.len() - 1)
        .min()
    {
        Some(steps) => println!(
            "The shortest route from any lowest square takes {} step(s).",
            steps
        ),
        None => println!("No route from any lowest square to the end."),
    }

    Ok(())
}
