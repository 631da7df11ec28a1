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
    MultipleStarts(Position, Position),
    MultipleEnds(Position, Position),
    NoStart,
    NoEnd,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InconsistentRow(expect_col_n, this_col_n) => write!(
                f,
                "Expect {} character(s) in one row, given {}.",
                expect_col_n, this_col_n
            ),
            Error::InvalidChar(c) => write!(f, "Invalid character({}) for elevation.", c),
            Error::MultipleStarts(last_pos, this_pos) => write!(
                f,
                "Given two start squares({}, {}), expect only one.",
                last_pos, this_pos
            ),
            Error::MultipleEnds(last_pos, this_pos) => write!(
                f,
                "Given two end squares({}, {}), expect only one.",
                last_pos, this_pos
            ),
            Error::NoStart => write!(f, "No start square found in given map, expect one."),
            Error::NoEnd => write!(f, "No end square found in given map, expect one."),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub r: usize,
    pub c: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

impl Position {
    pub fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }

    pub fn neighbor(&self, dir: Direction) -> Option<Self> {
        match dir {
            Direction::Up if self.r > 0 => Some(Position::new(self.r - 1, self.c)),
            Direction::Down => Some(Position::new(self.r + 1, self.c)),
            Direction::Left if self.c > 0 => Some(Position::new(self.r, self.c - 1)),
            Direction::Right => Some(Position::new(self.r, self.c + 1)),
            _ => None,
        }
    }
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

// A discovered square in the arena, linked back to the square that
// discovered it so the route can be walked in reverse at the end.
#[derive(Debug)]
struct Node {
    pos: Position,
    prev: Option<usize>,
}

#[derive(Debug)]
pub struct Map {
    elevations: Vec<u8>,
    row_n: usize,
    col_n: usize,
    start: Position,
    end: Position,
}

impl Map {
    pub fn start(&self) -> Position {
        self.start
    }

    pub fn end(&self) -> Position {
        self.end
    }

    // Breadth expansion in rings: every round expands the squares added in
    // the previous round, so ring N holds exactly the squares N steps from
    // the start. Returns the route from start to end, None when the
    // frontier runs dry first.
    pub fn find_path(&self, start: &Position, end: &Position) -> Option<Vec<Position>> {
        let start_ind = self.pos_to_ind(start)?;
        self.pos_to_ind(end)?;

        let mut discovered = vec![false; self.row_n * self.col_n];
        discovered[start_ind] = true;
        let mut arena = vec![Node {
            pos: *start,
            prev: None,
        }];
        let mut ring = vec![0];
        let mut end_node = if start == end { Some(0) } else { None };
        while end_node.is_none() {
            let mut new_ring = Vec::new();
            for node_ind in ring {
                let from = arena[node_ind].pos;
                for dir in Direction::all_dirs() {
                    let Some(to) = from.neighbor(*dir) else {
                        continue;
                    };
                    if !self.is_accessible(&from, &to) {
                        continue;
                    }
                    let to_ind = self.pos_to_ind(&to).unwrap();
                    if discovered[to_ind] {
                        continue;
                    }

                    discovered[to_ind] = true;
                    arena.push(Node {
                        pos: to,
                        prev: Some(node_ind),
                    });
                    new_ring.push(arena.len() - 1);
                    if to == *end {
                        end_node = Some(arena.len() - 1);
                    }
                }
            }

            if end_node.is_none() && new_ring.is_empty() {
                return None;
            }
            ring = new_ring;
        }

        let mut path = Vec::new();
        let mut cur = end_node;
        while let Some(ind) = cur {
            path.push(arena[ind].pos);
            cur = arena[ind].prev;
        }
        path.reverse();
        Some(path)
    }

    // Candidate starts for part 2: every square at the lowest elevation.
    pub fn lowest_positions(&self) -> Vec<Position> {
        (0..self.row_n)
            .flat_map(|r| (0..self.col_n).map(move |c| Position::new(r, c)))
            .filter(|pos| self.elevation(pos) == Some(b'a'))
            .collect()
    }

    // Climbing is limited to one unit per step, descending is free.
    fn is_accessible(&self, from: &Position, to: &Position) -> bool {
        match (self.elevation(from), self.elevation(to)) {
            (Some(from_elev), Some(to_elev)) => to_elev <= from_elev + 1,
            _ => false,
        }
    }

    fn elevation(&self, pos: &Position) -> Option<u8> {
        self.pos_to_ind(pos).map(|ind| self.elevations[ind])
    }

    fn pos_to_ind(&self, pos: &Position) -> Option<usize> {
        if pos.r < self.row_n && pos.c < self.col_n {
            Some(pos.r * self.col_n + pos.c)
        } else {
            None
        }
    }
}

pub struct MapBuilder {
    elevations: Vec<u8>,
    row_n: usize,
    col_n: Option<usize>,
    start: Option<Position>,
    end: Option<Position>,
}

impl MapBuilder {
    pub fn new() -> Self {
        Self {
            elevations: Vec::new(),
            row_n: 0,
            col_n: None,
            start: None,
            end: None,
        }
    }

    pub fn add_row(&mut self, text: &str) -> Result<(), Error> {
        let this_col_n = text.chars().count();
        if *self.col_n.get_or_insert(this_col_n) != this_col_n {
            return Err(Error::InconsistentRow(self.col_n.unwrap(), this_col_n));
        }

        for (ind, c) in text.chars().enumerate() {
            let pos = Position::new(self.row_n, ind);
            let elevation = match c {
                'S' => {
                    if let Some(last_pos) = self.start.replace(pos) {
                        return Err(Error::MultipleStarts(last_pos, pos));
                    }
                    b'a'
                }
                'E' => {
                    if let Some(last_pos) = self.end.replace(pos) {
                        return Err(Error::MultipleEnds(last_pos, pos));
                    }
                    b'z'
                }
                'a'..='z' => c as u8,
                other => return Err(Error::InvalidChar(other)),
            };
            self.elevations.push(elevation);
        }
        self.row_n += 1;

        Ok(())
    }

    pub fn build(self) -> Result<Map, Error> {
        Ok(Map {
            elevations: self.elevations,
            row_n: self.row_n,
            col_n: self.col_n.unwrap_or(0),
            start: self.start.ok_or(Error::NoStart)?,
            end: self.end.ok_or(Error::NoEnd)?,
        })
    }
}

impl Default for MapBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn read_map<P: AsRef<Path>>(path: P) -> Result<Map> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut builder = MapBuilder::new();
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
            .with_context(|| format!("Failed to parse map row at line {}.", ind + 1))?;
    }

    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashSet, VecDeque};

    fn build_map(rows: &[&str]) -> Map {
        let mut builder = MapBuilder::new();
        for row in rows {
            builder.add_row(row).unwrap();
        }
        builder.build().unwrap()
    }

    // Plain queue BFS for cross-checking the ring expansion.
    fn brute_force_steps(map: &Map, start: Position, end: Position) -> Option<usize> {
        let mut searched = HashSet::from([(start.r, start.c)]);
        let mut queue = VecDeque::from([(0, start)]);
        while let Some((steps, pos)) = queue.pop_front() {
            if pos == end {
                return Some(steps);
            }

            for dir in Direction::all_dirs() {
                if let Some(next) = pos.neighbor(*dir) {
                    if map.is_accessible(&pos, &next) && searched.insert((next.r, next.c)) {
                        queue.push_back((steps + 1, next));
                    }
                }
            }
        }

        None
    }

    #[test]
    fn published_example_takes_31_steps() {
        let map = build_map(&["Sabqponm", "abcryxxl", "accszExk", "acctuvwj", "abdefghi"]);
        let path = map.find_path(&map.start(), &map.end()).unwrap();
        assert_eq!(path.len() - 1, 31);
    }

    #[test]
    fn ring_expansion_matches_brute_force() {
        let fixtures: [&[&str]; 3] = [
            &["Sabqponm", "abcryxxl", "accszExk", "acctuvwj", "abdefghi"],
            &["Sab", "dcb", "efE"],
            &["SbcdefghijklmnopqrstuvwxyE"],
        ];
        for rows in fixtures {
            let map = build_map(rows);
            let ring_steps = map
                .find_path(&map.start(), &map.end())
                .map(|path| path.len() - 1);
            let brute_steps = brute_force_steps(&map, map.start(), map.end());
            assert_eq!(ring_steps, brute_steps);
        }
    }

    #[test]
    fn unreachable_end_is_not_found() {
        let map = build_map(&["Sz", "zE"]);
        assert!(map.find_path(&map.start(), &map.end()).is_none());
    }

    #[test]
    fn path_to_itself_is_empty() {
        let map = build_map(&["SE"]);
        let path = map.find_path(&map.start(), &map.start()).unwrap();
        assert_eq!(path.len() - 1, 0);
    }
}
