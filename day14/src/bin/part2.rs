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
    grid.add_floor().context("Failed to add rock floor.")?;
    let mut dropped = 0;
    loop {
        match grid
            .drop_grain_from(SAND_SOURCE.0, SAND_SOURCE.1)
            .context("Failed to drop sand grain.")?
        {
            DropOutcome::Rest(x, y) => {
                dropped += 1;
                if (x, y) == SAND_SOURCE {
                    break;
                }
            }
            DropOutcome::FellOff => break,
        }
    }

    grid.display(SAND_SOURCE.0.saturating_sub(grid.height()))
        .context("Failed to draw sand grid.")?;
    println!("{} grain(s) of sand dropped until the source is blocked.", dropped);

    Ok(())
}
