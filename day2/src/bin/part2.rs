use anyhow::{Context, Result};
use clap::Parser;
use day2::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let rounds = day2::read_rounds(&args.input_path).with_context(|| {
        format!(
            "Failed to read strategy rounds from given file({}).",
            args.input_path.display()
        )
    })?;

    let total_score = rounds.iter().map(|r| r.score_as_outcome()).sum::<usize>();
    println!(
        "Following the guide as required outcomes, the total score is {}.",
        total_score
    );

    Ok(())
}
