use std::{
    collections::HashSet,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

pub const PACKET_MARKER_LEN: usize = 4;
pub const MESSAGE_MARKER_LEN: usize = 14;

// Index just past the first window of marker_len distinct characters, None
// when the signal has no such window.
pub fn find_marker(signal: &str, marker_len: usize) -> Option<usize> {
    let chars = signal.chars().collect::<Vec<_>>();
    chars
        .windows(marker_len)
        .position(|window| window.iter().collect::<HashSet<_>>().len() == marker_len)
        .map(|ind| ind + marker_len)
}

pub fn read_signals<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut signals = Vec::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} of given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        if !line.trim().is_empty() {
            signals.push(line.trim().to_string());
        }
    }

    Ok(signals)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_found_past_first_distinct_window() {
        assert_eq!(
            find_marker("bvwbjplbgvbhsrlpgdmjqwftvncz", PACKET_MARKER_LEN),
            Some(5)
        );
        assert_eq!(
            find_marker("bvwbjplbgvbhsrlpgdmjqwftvncz", MESSAGE_MARKER_LEN),
            Some(23)
        );
    }

    #[test]
    fn no_marker_in_repetitive_signal() {
        assert_eq!(find_marker("aabbaabb", PACKET_MARKER_LEN), None);
    }
}
