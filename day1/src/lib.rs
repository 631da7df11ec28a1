use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Debug)]
pub enum Error {
    InvalidCalorieText(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidCalorieText(s) => write!(f, "Invalid text({}) for calorie count.", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

pub fn read_totals<P: AsRef<Path>>(path: P) -> Result<Vec<usize>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut totals = Vec::new();
    let mut cur_total = 0;
    let mut in_group = false;
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} of given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        let text = line.trim();
        if text.is_empty() {
            if in_group {
                totals.push(cur_total);
                cur_total = 0;
                in_group = false;
            }
        } else {
            let calories = text
                .parse::<usize>()
                .map_err(|_| Error::InvalidCalorieText(text.to_string()))
                .with_context(|| format!("Failed to parse calorie count at line {}.", ind + 1))?;
            cur_total += calories;
            in_group = true;
        }
    }

    if in_group {
        totals.push(cur_total);
    }

    Ok(totals)
}
