use std::{
    collections::HashSet,
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
    InvalidDirectionChar(char),
    InvalidMotionText(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidDirectionChar(c) => write!(f, "Invalid character({}) for direction.", c),
            Error::InvalidMotionText(s) => write!(f, "Invalid text({}) for motion.", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl TryFrom<char> for Direction {
    type Error = Error;

    fn try_from(value: char) -> std::result::Result<Self, Self::Error> {
        match value {
            'U' => Ok(Direction::Up),
            'D' => Ok(Direction::Down),
            'L' => Ok(Direction::Left),
            'R' => Ok(Direction::Right),
            other => Err(Error::InvalidDirectionChar(other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    row: isize,
    col: isize,
}

impl Position {
    fn step(&mut self, dir: Direction) {
        match dir {
            Direction::Up => self.row -= 1,
            Direction::Down => self.row += 1,
            Direction::Left => self.col -= 1,
            Direction::Right => self.col += 1,
        }
    }

    // Move one step toward the knot ahead when it is no longer adjacent.
    // Returns whether this knot moved at all.
    fn follow(&mut self, ahead: &Position) -> bool {
        let row_diff = ahead.row - self.row;
        let col_diff = ahead.col - self.col;
        if row_diff.abs().max(col_diff.abs()) < 2 {
            return false;
        }

        self.row += row_diff.signum();
        self.col += col_diff.signum();
        true
    }
}

#[derive(Debug, Clone)]
pub struct Motion {
    pub dir: Direction,
    pub count: usize,
}

impl TryFrom<&str> for Motion {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let mut parts = value.split_whitespace();
        let dir_char = parts
            .next()
            .and_then(|s| s.chars().next())
            .ok_or_else(|| Error::InvalidMotionText(value.to_string()))?;
        let count = parts
            .next()
            .and_then(|s| s.parse::<usize>().ok())
            .ok_or_else(|| Error::InvalidMotionText(value.to_string()))?;

        Ok(Motion {
            dir: Direction::try_from(dir_char)?,
            count,
        })
    }
}

const TAIL_N: usize = 9;

// One simulation of the head and all nine tail knots serves both parts: the
// first tail's trace answers part 1, the last tail's answers part 2.
#[derive(Debug)]
pub struct Rope {
    head: Position,
    tails: [Position; TAIL_N],
    first_visited: HashSet<Position>,
    last_visited: HashSet<Position>,
}

impl Rope {
    pub fn new() -> Self {
        let start = Position::default();
        Self {
            head: start,
            tails: [start; TAIL_N],
            first_visited: HashSet::from([start]),
            last_visited: HashSet::from([start]),
        }
    }

    pub fn apply(&mut self, motion: &Motion) {
        for _ in 0..motion.count {
            self.head.step(motion.dir);
            if self.tails[0].follow(&self.head) {
                self.first_visited.insert(self.tails[0]);
            }
            for ind in 1..TAIL_N {
                let ahead = self.tails[ind - 1];
                self.tails[ind].follow(&ahead);
            }
            self.last_visited.insert(self.tails[TAIL_N - 1]);
        }
    }

    pub fn first_tail_visited_n(&self) -> usize {
        self.first_visited.len()
    }

    pub fn last_tail_visited_n(&self) -> usize {
        self.last_visited.len()
    }
}

impl Default for Rope {
    fn default() -> Self {
        Self::new()
    }
}

pub fn read_motions<P: AsRef<Path>>(path: P) -> Result<Vec<Motion>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut motions = Vec::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} of given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        if line.trim().is_empty() {
            continue;
        }

        motions.push(
            Motion::try_from(line.trim())
                .with_context(|| format!("Failed to parse motion at line {}.", ind + 1))?,
        );
    }

    Ok(motions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacent_tail_stays_put() {
        let mut tail = Position::default();
        let head = Position { row: 1, col: 1 };
        assert!(!tail.follow(&head));
        assert_eq!(tail, Position::default());
    }

    #[test]
    fn distant_tail_moves_diagonally() {
        let mut tail = Position::default();
        let head = Position { row: 2, col: 1 };
        assert!(tail.follow(&head));
        assert_eq!(tail, Position { row: 1, col: 1 });
    }
}
