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
    InvalidShapeChar(char),
    InvalidResponseChar(char),
    InvalidRoundText(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidShapeChar(c) => write!(f, "Invalid character({}) for elf shape.", c),
            Error::InvalidResponseChar(c) => {
                write!(f, "Invalid character({}) for player response.", c)
            }
            Error::InvalidRoundText(s) => write!(f, "Invalid text({}) for round.", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Rock,
    Paper,
    Scissors,
}

impl TryFrom<char> for Shape {
    type Error = Error;

    fn try_from(value: char) -> std::result::Result<Self, Self::Error> {
        match value {
            'A' => Ok(Shape::Rock),
            'B' => Ok(Shape::Paper),
            'C' => Ok(Shape::Scissors),
            other => Err(Error::InvalidShapeChar(other)),
        }
    }
}

impl Shape {
    // Rock(0), Paper(1), Scissors(2): each shape beats the one two ahead of
    // it in cyclic order and loses to the one right after it.
    pub fn beats(self) -> Self {
        Self::from_ord((self as u32 + 2) % 3)
    }

    pub fn loses_to(self) -> Self {
        Self::from_ord((self as u32 + 1) % 3)
    }

    pub fn score(self) -> usize {
        self as usize + 1
    }

    pub fn against(self, elf: Shape) -> Outcome {
        if self == elf {
            Outcome::Draw
        } else if self.beats() == elf {
            Outcome::Win
        } else {
            Outcome::Loss
        }
    }

    pub fn play_for(self, outcome: Outcome) -> Shape {
        match outcome {
            Outcome::Loss => self.beats(),
            Outcome::Draw => self,
            Outcome::Win => self.loses_to(),
        }
    }

    fn from_ord(ord: u32) -> Self {
        match ord % 3 {
            0 => Shape::Rock,
            1 => Shape::Paper,
            _ => Shape::Scissors,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Loss,
    Draw,
    Win,
}

impl Outcome {
    pub fn score(self) -> usize {
        match self {
            Outcome::Loss => 0,
            Outcome::Draw => 3,
            Outcome::Win => 6,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Response {
    X,
    Y,
    Z,
}

impl TryFrom<char> for Response {
    type Error = Error;

    fn try_from(value: char) -> std::result::Result<Self, Self::Error> {
        match value {
            'X' => Ok(Response::X),
            'Y' => Ok(Response::Y),
            'Z' => Ok(Response::Z),
            other => Err(Error::InvalidResponseChar(other)),
        }
    }
}

impl Response {
    pub fn as_shape(self) -> Shape {
        match self {
            Response::X => Shape::Rock,
            Response::Y => Shape::Paper,
            Response::Z => Shape::Scissors,
        }
    }

    pub fn as_outcome(self) -> Outcome {
        match self {
            Response::X => Outcome::Loss,
            Response::Y => Outcome::Draw,
            Response::Z => Outcome::Win,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Round {
    pub elf: Shape,
    pub response: Response,
}

impl TryFrom<&str> for Round {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let mut chars = value.split_whitespace();
        let elf_char = chars
            .next()
            .and_then(|s| s.chars().next())
            .ok_or_else(|| Error::InvalidRoundText(value.to_string()))?;
        let response_char = chars
            .next()
            .and_then(|s| s.chars().next())
            .ok_or_else(|| Error::InvalidRoundText(value.to_string()))?;

        Ok(Round {
            elf: Shape::try_from(elf_char)?,
            response: Response::try_from(response_char)?,
        })
    }
}

impl Round {
    // Part 1 reading: the response names the shape the player plays.
    pub fn score_as_shape(&self) -> usize {
        let player = self.response.as_shape();
        player.score() + player.against(self.elf).score()
    }

    // Part 2 reading: the response names the outcome the round must have.
    pub fn score_as_outcome(&self) -> usize {
        let player = self.elf.play_for(self.response.as_outcome());
        player.score() + player.against(self.elf).score()
    }
}

pub fn read_rounds<P: AsRef<Path>>(path: P) -> Result<Vec<Round>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut rounds = Vec::new();
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

        rounds.push(
            Round::try_from(line.as_str())
                .with_context(|| format!("Failed to parse round at line {}.", ind + 1))?,
        );
    }

    Ok(rounds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_relation_is_cyclic() {
        for shape in [Shape::Rock, Shape::Paper, Shape::Scissors] {
            assert_eq!(shape.beats().loses_to(), shape);
            assert_eq!(shape.loses_to().beats(), shape);
            assert_eq!(shape.play_for(Outcome::Draw), shape);
            assert_eq!(shape.play_for(Outcome::Win).against(shape), Outcome::Win);
            assert_eq!(shape.play_for(Outcome::Loss).against(shape), Outcome::Loss);
        }
    }

    #[test]
    fn round_scores_match_examples() {
        let round = Round::try_from("A Y").unwrap();
        assert_eq!(round.score_as_shape(), 8);
        assert_eq!(round.score_as_outcome(), 4);
    }
}
