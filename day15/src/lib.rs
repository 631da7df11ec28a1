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
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug)]
pub enum Error {
    InvalidSensorText(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidSensorText(s) => write!(f, "Invalid text({}) for sensor.", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct Part1CLIArgs {
    pub input_path: PathBuf,
    pub target_row: i64,
}

#[derive(Debug, Parser)]
pub struct Part2CLIArgs {
    pub input_path: PathBuf,
    pub search_bound: i64,
}

pub const FREQUENCY_FACTOR: i64 = 4000000;

// A sensor covers the Manhattan ball that just reaches its closest beacon.
#[derive(Debug, Clone)]
pub struct Sensor {
    x: i64,
    y: i64,
    beacon_x: i64,
    beacon_y: i64,
    range: i64,
}

impl TryFrom<&str> for Sensor {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        static SENSOR_PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"Sensor at x=(-?\d+), y=(-?\d+): closest beacon is at x=(-?\d+), y=(-?\d+)")
                .unwrap()
        });

        if let Some(caps) = SENSOR_PATTERN.captures(value) {
            let x = caps[1].parse::<i64>().unwrap();
            let y = caps[2].parse::<i64>().unwrap();
            let beacon_x = caps[3].parse::<i64>().unwrap();
            let beacon_y = caps[4].parse::<i64>().unwrap();
            Ok(Sensor {
                x,
                y,
                beacon_x,
                beacon_y,
                range: (x - beacon_x).abs() + (y - beacon_y).abs(),
            })
        } else {
            Err(Error::InvalidSensorText(value.to_string()))
        }
    }
}

impl Sensor {
    pub fn beacon(&self) -> (i64, i64) {
        (self.beacon_x, self.beacon_y)
    }

    pub fn in_range(&self, x: i64, y: i64) -> bool {
        (self.x - x).abs() + (self.y - y).abs() <= self.range
    }

    pub fn intersects(&self, y: i64) -> bool {
        (self.y - y).abs() <= self.range
    }

    // The rightmost covered x on the given row, None when the row misses
    // the sensor's range entirely.
    pub fn manhattan_max_x(&self, y: i64) -> Option<i64> {
        if self.intersects(y) {
            Some(self.range - (y - self.y).abs() + self.x)
        } else {
            None
        }
    }
}

// Count positions on the row that cannot hold an undetected beacon. The
// scan jumps from each covered position to the end of that sensor's
// coverage instead of stepping cell by cell.
pub fn covered_on_row(sensors: &[Sensor], y: i64) -> i64 {
    let Some(min_x) = sensors.iter().map(|s| s.x - s.range).min() else {
        return 0;
    };
    let max_x = sensors.iter().map(|s| s.x + s.range).max().unwrap();

    let mut covered = 0;
    let mut x = min_x;
    while x <= max_x {
        match sensors
            .iter()
            .filter_map(|s| {
                if s.in_range(x, y) {
                    s.manhattan_max_x(y)
                } else {
                    None
                }
            })
            .next()
        {
            Some(end_x) => {
                covered += end_x - x + 1;
                x = end_x + 1;
            }
            None => x += 1,
        }
    }

    let beacons_on_row = sensors
        .iter()
        .filter(|s| s.beacon_y == y)
        .map(|s| s.beacon_x)
        .collect::<HashSet<_>>();
    covered - beacons_on_row.len() as i64
}

// The single position inside the square 0..=bound that no sensor covers,
// None when everything is covered.
pub fn find_uncovered(sensors: &[Sensor], bound: i64) -> Option<(i64, i64)> {
    for y in 0..=bound {
        let mut x = 0;
        while x <= bound {
            match sensors.iter().find(|s| s.in_range(x, y)) {
                Some(sensor) => x = sensor.manhattan_max_x(y).unwrap() + 1,
                None => return Some((x, y)),
            }
        }
    }

    None
}

pub fn tuning_frequency(pos: (i64, i64)) -> i64 {
    pos.0 * FREQUENCY_FACTOR + pos.1
}

pub fn read_sensors<P: AsRef<Path>>(path: P) -> Result<Vec<Sensor>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut sensors = Vec::new();
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

        sensors.push(
            Sensor::try_from(line.as_str())
                .with_context(|| format!("Failed to parse sensor at line {}.", ind + 1))?,
        );
    }

    Ok(sensors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sensor(text: &str) -> Sensor {
        Sensor::try_from(text).unwrap()
    }

    #[test]
    fn range_reaches_the_closest_beacon() {
        let s = sensor("Sensor at x=8, y=7: closest beacon is at x=2, y=10");
        assert!(s.in_range(2, 10));
        assert!(s.in_range(8, 7));
        assert!(!s.in_range(8, 17));
    }

    #[test]
    fn max_x_on_row_follows_manhattan_geometry() {
        let s = sensor("Sensor at x=8, y=7: closest beacon is at x=2, y=10");
        assert_eq!(s.manhattan_max_x(10), Some(14));
        assert_eq!(s.manhattan_max_x(7), Some(17));
        assert_eq!(s.manhattan_max_x(100), None);
    }

    #[test]
    fn fully_covered_square_has_no_uncovered_position() {
        let sensors = [sensor("Sensor at x=1, y=1: closest beacon is at x=1, y=4")];
        assert_eq!(find_uncovered(&sensors, 1), None);
    }
}
