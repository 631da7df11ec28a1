use anyhow::{Context, Result};
use clap::Parser;
use day14::{CLIArgs, DropOutcome, Grid, SAND_SOURCE};

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let paths = day14::read_rock_paths(&args.input_path).with_context(|| {
        format!(
            "Failed to read rock paths from given file({}).",
            args.input_path.display()
        )
    })?;

    let mut grid = Grid::from_paths(&paths).context("Failed to build rock grid.")?;
    let mut rested = 0;
    loop {
        match grid
            .drop_grain_from(SAND_SOURCE.0, SAND_SOURCE.1)
            .context("Failed to drop sand grain.")?
        {
            DropOutcome::Rest(_, _) => rested += 1,
            DropOutcome::FellOff => break,
        }
    }
    println!(
        "{} grain(s) of sand came to rest before sand flows into the abyss.",
        rested
    );

    Ok(())
}
