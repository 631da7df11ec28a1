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
    InconsistentRow(usize, usize),
    InvalidChar(char),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InconsistentRow(expect_col_n, this_col_n) => write!(
                f,
                "Expect {} character(s) in one row, given {}.",
                expect_col_n, this_col_n
            ),
            Error::InvalidChar(c) => write!(f, "Invalid character({}) for tree height.", c),
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

impl Direction {
    pub fn all_dirs() -> &'static [Direction] {
        static ALL_DIRECTIONS: [Direction; 4] = [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ];

        &ALL_DIRECTIONS
    }
}

#[derive(Debug)]
pub struct Grid {
    heights: Vec<u32>,
    row_n: usize,
    col_n: usize,
}

impl Grid {
    pub fn visible_count(&self) -> usize {
        (0..self.row_n)
            .flat_map(|r| (0..self.col_n).map(move |c| (r, c)))
            .filter(|(r, c)| self.is_visible(*r, *c))
            .count()
    }

    pub fn best_scenic_score(&self) -> usize {
        (0..self.row_n)
            .flat_map(|r| (0..self.col_n).map(move |c| (r, c)))
            .map(|(r, c)| self.scenic_score(r, c))
            .max()
            .unwrap_or(0)
    }

    // Visible from outside the grid along at least one axis direction.
    pub fn is_visible(&self, r: usize, c: usize) -> bool {
        let target = self.height(r, c);
        Direction::all_dirs()
            .iter()
            .any(|dir| self.sight_line(r, c, *dir).iter().all(|h| *h < target))
    }

    pub fn scenic_score(&self, r: usize, c: usize) -> usize {
        Direction::all_dirs()
            .iter()
            .map(|dir| self.viewing_distance(r, c, *dir))
            .product()
    }

    fn viewing_distance(&self, r: usize, c: usize, dir: Direction) -> usize {
        let target = self.height(r, c);
        let mut distance = 0;
        for h in self.sight_line(r, c, dir) {
            distance += 1;
            if h >= target {
                break;
            }
        }

        distance
    }

    // Heights from (r, c) outward, nearest tree first.
    fn sight_line(&self, r: usize, c: usize, dir: Direction) -> Vec<u32> {
        match dir {
            Direction::Up => (0..r).rev().map(|sr| self.height(sr, c)).collect(),
            Direction::Down => ((r + 1)..self.row_n).map(|sr| self.height(sr, c)).collect(),
            Direction::Left => (0..c).rev().map(|sc| self.height(r, sc)).collect(),
            Direction::Right => ((c + 1)..self.col_n).map(|sc| self.height(r, sc)).collect(),
        }
    }

    fn height(&self, r: usize, c: usize) -> u32 {
        self.heights[r * self.col_n + c]
    }
}

pub struct GridBuilder {
    heights: Vec<u32>,
    row_n: usize,
    col_n: Option<usize>,
}

impl GridBuilder {
    pub fn new() -> Self {
        Self {
            heights: Vec::new(),
            row_n: 0,
            col_n: None,
        }
    }

    pub fn add_row(&mut self, text: &str) -> Result<(), Error> {
        let this_col_n = text.chars().count();
        if *self.col_n.get_or_insert(this_col_n) != this_col_n {
            return Err(Error::InconsistentRow(self.col_n.unwrap(), this_col_n));
        }

        for c in text.chars() {
            let height = c.to_digit(10).ok_or(Error::InvalidChar(c))?;
            self.heights.push(height);
        }
        self.row_n += 1;

        Ok(())
    }

    pub fn build(self) -> Grid {
        Grid {
            heights: self.heights,
            row_n: self.row_n,
            col_n: self.col_n.unwrap_or(0),
        }
    }
}

impl Default for GridBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn read_grid<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut builder = GridBuilder::new();
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

        builder
            .add_row(line.trim())
            .with_context(|| format!("Failed to parse tree row at line {}.", ind + 1))?;
    }

    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_grid() -> Grid {
        let mut builder = GridBuilder::new();
        for row in ["30373", "25512", "65332", "33549", "35390"] {
            builder.add_row(row).unwrap();
        }
        builder.build()
    }

    #[test]
    fn edge_trees_are_visible() {
        let grid = example_grid();
        assert!(grid.is_visible(0, 0));
        assert!(grid.is_visible(4, 4));
    }

    #[test]
    fn hidden_tree_in_the_middle() {
        let grid = example_grid();
        assert!(!grid.is_visible(2, 2));
    }

    #[test]
    fn scenic_score_multiplies_viewing_distances() {
        let grid = example_grid();
        assert_eq!(grid.scenic_score(1, 2), 4);
        assert_eq!(grid.scenic_score(3, 2), 8);
    }
}
