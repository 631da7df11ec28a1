use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug)]
pub enum Error {
    NoStackNumberLine,
    InvalidCrateChar(char),
    InvalidMoveText(String),
    InvalidStackNumber(usize),
    EmptyStack(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoStackNumberLine => {
                write!(f, "Expect a stack number line below the crate drawing.")
            }
            Error::InvalidCrateChar(c) => write!(f, "Invalid character({}) for crate.", c),
            Error::InvalidMoveText(s) => write!(f, "Invalid text({}) for move command.", s),
            Error::InvalidStackNumber(n) => {
                write!(f, "Stack number({}) is out of range of given stacks.", n)
            }
            Error::EmptyStack(n) => write!(f, "Can't grab a crate from empty stack {}.", n),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Default)]
pub struct Stack {
    crates: Vec<char>,
}

impl Stack {
    pub fn grab_crate(&mut self) -> Option<char> {
        self.crates.pop()
    }

    pub fn drop_crate(&mut self, c: char) {
        self.crates.push(c);
    }

    pub fn top_crate(&self) -> Option<char> {
        self.crates.last().copied()
    }
}

#[derive(Debug, Clone)]
pub struct CrateStacks {
    stacks: Vec<Stack>,
}

impl CrateStacks {
    // CrateMover 9000 grabs one crate at a time, so the moved block ends up
    // in reverse order.
    pub fn move_with_9000(&mut self, mv: &Move) -> Result<(), Error> {
        let (from, to) = self.check_move(mv)?;
        for _ in 0..mv.count {
            let c = self.stacks[from].grab_crate().ok_or(Error::EmptyStack(mv.from))?;
            self.stacks[to].drop_crate(c);
        }

        Ok(())
    }

    // CrateMover 9001 keeps the block's order, modeled by moving through a
    // temporary stack twice.
    pub fn move_with_9001(&mut self, mv: &Move) -> Result<(), Error> {
        let (from, to) = self.check_move(mv)?;
        let mut temp = Stack::default();
        for _ in 0..mv.count {
            let c = self.stacks[from].grab_crate().ok_or(Error::EmptyStack(mv.from))?;
            temp.drop_crate(c);
        }
        while let Some(c) = temp.grab_crate() {
            self.stacks[to].drop_crate(c);
        }

        Ok(())
    }

    pub fn top_crates(&self) -> String {
        self.stacks
            .iter()
            .map(|stack| stack.top_crate().unwrap_or(' '))
            .collect()
    }

    fn check_move(&self, mv: &Move) -> Result<(usize, usize), Error> {
        let from = mv
            .from
            .checked_sub(1)
            .filter(|ind| *ind < self.stacks.len())
            .ok_or(Error::InvalidStackNumber(mv.from))?;
        let to = mv
            .to
            .checked_sub(1)
            .filter(|ind| *ind < self.stacks.len())
            .ok_or(Error::InvalidStackNumber(mv.to))?;

        Ok((from, to))
    }
}

#[derive(Debug, Clone)]
pub struct Move {
    pub count: usize,
    pub from: usize,
    pub to: usize,
}

impl TryFrom<&str> for Move {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        static MOVE_PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"move (\d+) from (\d+) to (\d+)").unwrap());

        if let Some(caps) = MOVE_PATTERN.captures(value) {
            Ok(Move {
                count: caps[1].parse::<usize>().unwrap(),
                from: caps[2].parse::<usize>().unwrap(),
                to: caps[3].parse::<usize>().unwrap(),
            })
        } else {
            Err(Error::InvalidMoveText(value.to_string()))
        }
    }
}

pub fn read_plan<P: AsRef<Path>>(path: P) -> Result<(CrateStacks, Vec<Move>)> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut drawing_lines = Vec::new();
    let mut moves = Vec::new();
    let mut in_drawing = true;
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} of given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        if in_drawing {
            if line.trim().is_empty() {
                in_drawing = false;
            } else {
                drawing_lines.push(line);
            }
        } else if !line.trim().is_empty() {
            moves.push(
                Move::try_from(line.as_str())
                    .with_context(|| format!("Failed to parse move command at line {}.", ind + 1))?,
            );
        }
    }

    let stacks = parse_drawing(&drawing_lines).context("Failed to parse crate drawing.")?;
    Ok((stacks, moves))
}

fn parse_drawing(lines: &[String]) -> Result<CrateStacks, Error> {
    let (number_line, crate_lines) = lines.split_last().ok_or(Error::NoStackNumberLine)?;
    let stack_n = number_line.split_whitespace().count();
    if stack_n == 0 {
        return Err(Error::NoStackNumberLine);
    }

    // In the drawing, stack s keeps its crate letters in column s * 4 + 1.
    let mut stacks = vec![Stack::default(); stack_n];
    for line in crate_lines.iter().rev() {
        let chars = line.chars().collect::<Vec<_>>();
        for (ind, stack) in stacks.iter_mut().enumerate() {
            match chars.get(ind * 4 + 1) {
                Some(c) if c.is_ascii_uppercase() => stack.drop_crate(*c),
                Some(' ') | None => (),
                Some(c) => return Err(Error::InvalidCrateChar(*c)),
            }
        }
    }

    Ok(CrateStacks { stacks })
}
