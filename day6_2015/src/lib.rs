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
    InvalidInstructionText(String),
    OutOfGrid(usize, usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidInstructionText(s) => write!(f, "Invalid text({}) for instruction.", s),
            Error::OutOfGrid(x, y) => write!(
                f,
                "Corner({}, {}) is off the {} x {} light grid.",
                x, y, GRID_SIDE, GRID_SIDE
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

pub const GRID_SIDE: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Light {
    On,
    Off,
}

impl Light {
    pub fn toggled(self) -> Self {
        match self {
            Light::On => Light::Off,
            Light::Off => Light::On,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Command {
    TurnOn,
    TurnOff,
    Toggle,
}

#[derive(Debug, Clone)]
pub struct Instruction {
    pub command: Command,
    pub from: (usize, usize),
    pub to: (usize, usize),
}

impl TryFrom<&str> for Instruction {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        static INSTRUCTION_PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"(turn on|turn off|toggle) (\d+),(\d+) through (\d+),(\d+)").unwrap()
        });

        if let Some(caps) = INSTRUCTION_PATTERN.captures(value) {
            let command = match &caps[1] {
                "turn on" => Command::TurnOn,
                "turn off" => Command::TurnOff,
                _ => Command::Toggle,
            };
            Ok(Instruction {
                command,
                from: (
                    caps[2].parse::<usize>().unwrap(),
                    caps[3].parse::<usize>().unwrap(),
                ),
                to: (
                    caps[4].parse::<usize>().unwrap(),
                    caps[5].parse::<usize>().unwrap(),
                ),
            })
        } else {
            Err(Error::InvalidInstructionText(value.to_string()))
        }
    }
}

#[derive(Debug)]
pub struct LightGrid {
    lights: Vec<Light>,
}

impl LightGrid {
    pub fn new() -> Self {
        Self {
            lights: vec![Light::Off; GRID_SIDE * GRID_SIDE],
        }
    }

    // Apply a command over the inclusive rectangle between the two corners.
    pub fn apply(&mut self, inst: &Instruction) -> Result<(), Error> {
        for corner in [inst.from, inst.to] {
            if corner.0 >= GRID_SIDE || corner.1 >= GRID_SIDE {
                return Err(Error::OutOfGrid(corner.0, corner.1));
            }
        }

        for row in inst.from.0..=inst.to.0 {
            for col in inst.from.1..=inst.to.1 {
                let light = &mut self.lights[row * GRID_SIDE + col];
                *light = match inst.command {
                    Command::TurnOn => Light::On,
                    Command::TurnOff => Light::Off,
                    Command::Toggle => light.toggled(),
                };
            }
        }

        Ok(())
    }

    pub fn lit_count(&self) -> usize {
        self.lights
            .iter()
            .filter(|light| **light == Light::On)
            .count()
    }
}

impl Default for LightGrid {
    fn default() -> Self {
        Self::new()
    }
}

pub fn read_instructions<P: AsRef<Path>>(path: P) -> Result<Vec<Instruction>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut instructions = Vec::new();
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

        instructions.push(
            Instruction::try_from(line.as_str())
                .with_context(|| format!("Failed to parse instruction at line {}.", ind + 1))?,
        );
    }

    Ok(instructions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_follow_the_demo_sequence() {
        let mut grid = LightGrid::new();
        grid.apply(&Instruction::try_from("turn on 0,0 through 999,999").unwrap())
            .unwrap();
        assert_eq!(grid.lit_count(), 1000000);
        grid.apply(&Instruction::try_from("toggle 0,0 through 999,0").unwrap())
            .unwrap();
        assert_eq!(grid.lit_count(), 999000);
        grid.apply(&Instruction::try_from("turn off 499,499 through 500,500").unwrap())
            .unwrap();
        assert_eq!(grid.lit_count(), 998996);
    }

    #[test]
    fn out_of_grid_corner_is_an_error() {
        let mut grid = LightGrid::new();
        assert!(grid
            .apply(&Instruction::try_from("turn on 0,0 through 1000,3").unwrap())
            .is_err());
    }
}
