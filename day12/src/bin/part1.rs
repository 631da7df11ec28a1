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

    match map.find_path(&map.start(), &map.end()) {
        Some(path) => println!(
            "The shortest route from start to end takes {} step(s).",
            path.len() - 1
        ),
        None => println!("No route from start to end."),
    }

    Ok(())
}
