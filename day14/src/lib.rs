use std::{
    error,
    fmt::Display,
    fs::File,
    io::{stdout, BufRead, BufReader, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Debug)]
pub enum Error {
    NoCommaInPointText(String),
    InvalidCoordText(String),
    DiagonalSegment((usize, usize), (usize, usize)),
    OutOfGrid(usize, usize, usize, usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoCommaInPointText(s) => {
                write!(f, "Expect a comma between coordinates in text({}).", s)
            }
            Error::InvalidCoordText(s) => write!(f, "Invalid text({}) for coordinate.", s),
            Error::DiagonalSegment(from, to) => write!(
                f,
                "Diagonal rock segment({},{} -> {},{}) detected, expect horizontal or vertical.",
                from.0, from.1, to.0, to.1
            ),
            Error::OutOfGrid(x, y, width, height) => write!(
                f,
                "Cell({}, {}) is off the grid of {} x {} cell(s).",
                x, y, width, height
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

pub const SAND_SOURCE: (usize, usize) = (500, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Rock,
    Sand,
}

impl Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cell_char = match self {
            Cell::Empty => '.',
            Cell::Rock => '#',
            Cell::Sand => 'o',
        };

        write!(f, "{}", cell_char)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Rest(usize, usize),
    FellOff,
}

#[derive(Debug)]
pub struct Grid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: vec![Cell::Empty; width * height],
            width,
            height,
        }
    }

    // Allocate from the rock paths' bounding box (always anchored at 0,0,
    // with one spare column on the right) and draw every segment.
    pub fn from_paths(paths: &[Vec<(usize, usize)>]) -> Result<Self, Error> {
        let (mut max_x, mut max_y) = SAND_SOURCE;
        for point in paths.iter().flatten() {
            max_x = max_x.max(point.0);
            max_y = max_y.max(point.1);
        }

        let mut grid = Self::new(max_x + 2, max_y + 1);
        for path in paths {
            for segment in path.windows(2) {
                grid.add_rocks(segment[0], segment[1])?;
            }
        }

        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        if x < self.width && y < self.height {
            self.cells.get(y * self.width + x)
        } else {
            None
        }
    }

    pub fn set_cell(&mut self, x: usize, y: usize, cell: Cell) -> Result<(), Error> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfGrid(x, y, self.width, self.height));
        }

        self.cells[y * self.width + x] = cell;
        Ok(())
    }

    // Grow the grid by dx empty columns and dy empty rows.
    pub fn extend(&mut self, dx: usize, dy: usize) {
        let new_width = self.width + dx;
        let new_height = self.height + dy;
        let mut new_cells = vec![Cell::Empty; new_width * new_height];
        for y in 0..self.height {
            for x in 0..self.width {
                new_cells[y * new_width + x] = self.cells[y * self.width + x];
            }
        }

        self.cells = new_cells;
        self.width = new_width;
        self.height = new_height;
    }

    // Widen the grid enough for a full sand pile, then lay a rock floor two
    // rows below the deepest rock.
    pub fn add_floor(&mut self) -> Result<(), Error> {
        let dx = (SAND_SOURCE.0 + 3 + self.height).saturating_sub(self.width);
        self.extend(dx, 2);
        let floor_y = self.height - 1;
        for x in 0..self.width {
            self.set_cell(x, floor_y, Cell::Rock)?;
        }

        Ok(())
    }

    // One grain: straight down while empty, then down-left, then down-right,
    // else it comes to rest. Leaving the grid in any direction means it
    // falls forever.
    pub fn drop_grain_from(&mut self, start_x: usize, start_y: usize) -> Result<DropOutcome, Error> {
        let (mut x, mut y) = (start_x, start_y);
        loop {
            match self.cell(x, y + 1) {
                None => return Ok(DropOutcome::FellOff),
                Some(Cell::Empty) => {
                    y += 1;
                    continue;
                }
                Some(_) => (),
            }

            if x == 0 {
                return Ok(DropOutcome::FellOff);
            }
            if self.cell(x - 1, y + 1) == Some(&Cell::Empty) {
                x -= 1;
                y += 1;
                continue;
            }
            match self.cell(x + 1, y + 1) {
                None => return Ok(DropOutcome::FellOff),
                Some(Cell::Empty) => {
                    x += 1;
                    y += 1;
                    continue;
                }
                Some(_) => (),
            }

            self.set_cell(x, y, Cell::Sand)?;
            return Ok(DropOutcome::Rest(x, y));
        }
    }

    pub fn display(&self, start_x: usize) -> Result<()> {
        let mut lock = stdout().lock();
        for y in 0..self.height {
            for x in start_x..self.width {
                write!(lock, "{}", self.cell(x, y).unwrap_or(&Cell::Empty))?;
            }
            writeln!(lock)?;
        }

        Ok(())
    }

    fn add_rocks(&mut self, from: (usize, usize), to: (usize, usize)) -> Result<(), Error> {
        if from.0 == to.0 {
            for y in from.1.min(to.1)..=from.1.max(to.1) {
                self.set_cell(from.0, y, Cell::Rock)?;
            }
        } else if from.1 == to.1 {
            for x in from.0.min(to.0)..=from.0.max(to.0) {
                self.set_cell(x, from.1, Cell::Rock)?;
            }
        } else {
            return Err(Error::DiagonalSegment(from, to));
        }

        Ok(())
    }
}

pub fn read_rock_paths<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<(usize, usize)>>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut paths = Vec::new();
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

        let points = line
            .trim()
            .split(" -> ")
            .map(parse_point)
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("Failed to parse rock path at line {}.", ind + 1))?;
        paths.push(points);
    }

    Ok(paths)
}

fn parse_point(text: &str) -> Result<(usize, usize), Error> {
    let text = text.trim();
    let comma_pos = text
        .find(',')
        .ok_or_else(|| Error::NoCommaInPointText(text.to_string()))?;
    let x_text = &text[..comma_pos];
    let x = x_text
        .parse::<usize>()
        .map_err(|_| Error::InvalidCoordText(x_text.to_string()))?;
    let y_text = &text[(comma_pos + 1)..];
    let y = y_text
        .parse::<usize>()
        .map_err(|_| Error::InvalidCoordText(y_text.to_string()))?;

    Ok((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonal_segment_is_rejected() {
        let paths = vec![vec![(0, 0), (2, 2)]];
        assert!(Grid::from_paths(&paths).is_err());
    }

    #[test]
    fn grain_rests_on_rock_then_falls_off_the_edge() {
        let paths = vec![vec![(0, 2), (2, 2)]];
        let mut grid = Grid::from_paths(&paths).unwrap();
        assert_eq!(grid.drop_grain_from(1, 0).unwrap(), DropOutcome::Rest(1, 1));
        assert_eq!(grid.drop_grain_from(1, 0).unwrap(), DropOutcome::FellOff);
    }

    #[test]
    fn floor_catches_every_grain() {
        let mut grid = Grid::from_paths(&[]).unwrap();
        grid.add_floor().unwrap();
        let outcome = grid.drop_grain_from(SAND_SOURCE.0, SAND_SOURCE.1).unwrap();
        assert_eq!(outcome, DropOutcome::Rest(SAND_SOURCE.0, grid.height() - 2));
    }
}
