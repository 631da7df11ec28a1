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
    NoCommaInPairText(String),
    NoDashInRangeText(String),
    InvalidSectionText(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoCommaInPairText(s) => {
                write!(f, "Expect a comma between two ranges in text({}).", s)
            }
            Error::NoDashInRangeText(s) => {
                write!(f, "Expect a dash between two sections in text({}).", s)
            }
            Error::InvalidSectionText(s) => write!(f, "Invalid text({}) for section number.", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy)]
pub struct Assignment {
    min: usize,
    max: usize,
}

impl TryFrom<&str> for Assignment {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let dash_pos = value
            .find('-')
            .ok_or_else(|| Error::NoDashInRangeText(value.to_string()))?;
        let min_text = &value[..dash_pos];
        let min = min_text
            .parse::<usize>()
            .map_err(|_| Error::InvalidSectionText(min_text.to_string()))?;
        let max_text = &value[(dash_pos + 1)..];
        let max = max_text
            .parse::<usize>()
            .map_err(|_| Error::InvalidSectionText(max_text.to_string()))?;

        Ok(Assignment { min, max })
    }
}

impl Assignment {
    pub fn encloses(&self, that: &Assignment) -> bool {
        self.min <= that.min && self.max >= that.max
    }

    pub fn overlaps(&self, that: &Assignment) -> bool {
        self.min <= that.max && self.max >= that.min
    }
}

pub fn read_pairs<P: AsRef<Path>>(path: P) -> Result<Vec<(Assignment, Assignment)>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut pairs = Vec::new();
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
            continue;
        }

        pairs.push(
            parse_pair(text)
                .with_context(|| format!("Failed to parse assignment pair at line {}.", ind + 1))?,
        );
    }

    Ok(pairs)
}

fn parse_pair(text: &str) -> Result<(Assignment, Assignment), Error> {
    let comma_pos = text
        .find(',')
        .ok_or_else(|| Error::NoCommaInPairText(text.to_string()))?;

    Ok((
        Assignment::try_from(&text[..comma_pos])?,
        Assignment::try_from(&text[(comma_pos + 1)..])?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(text: &str) -> (Assignment, Assignment) {
        parse_pair(text).unwrap()
    }

    #[test]
    fn separate_ranges_do_not_overlap() {
        let (left, right) = pair("2-4,6-8");
        assert!(!left.overlaps(&right));
        assert!(!left.encloses(&right) && !right.encloses(&left));
    }

    #[test]
    fn touching_ranges_overlap() {
        let (left, right) = pair("5-7,7-9");
        assert!(left.overlaps(&right));
        assert!(!left.encloses(&right) && !right.encloses(&left));
    }

    #[test]
    fn one_range_encloses_the_other() {
        let (left, right) = pair("6-6,4-6");
        assert!(right.encloses(&left));
        assert!(left.overlaps(&right));
    }
}
