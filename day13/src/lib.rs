use std::{
    cmp::Ordering,
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
    slice,
};

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Debug)]
pub enum Error {
    UnexpectedChar(char, usize),
    UnexpectedEnd,
    TrailingText(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::UnexpectedChar(c, pos) => {
                write!(f, "Unexpected character({}) at position {} in packet.", c, pos)
            }
            Error::UnexpectedEnd => write!(f, "Packet text ends before its value is complete."),
            Error::TrailingText(s) => write!(f, "Trailing text({}) after packet value.", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

// A packet value is an integer or a list of packet values. The puzzle's
// comparison rules are exactly a total order: integers compare numerically,
// lists compare elementwise with length as the tiebreak, and a lone integer
// compares as a one-element list.
#[derive(Debug, Clone)]
pub enum Value {
    Int(i64),
    List(Vec<Value>),
}

// Equality follows the comparator, so an integer equals its one-element
// list form.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Value::Int(left), Value::Int(right)) => left.cmp(right),
            (Value::List(left), Value::List(right)) => left.cmp(right),
            (Value::Int(_), Value::List(right)) => slice::from_ref(self).cmp(right.as_slice()),
            (Value::List(left), Value::Int(_)) => left.as_slice().cmp(slice::from_ref(other)),
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl TryFrom<&str> for Value {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let bytes = value.trim().as_bytes();
        let mut pos = 0;
        let parsed = parse_value(bytes, &mut pos)?;
        if pos != bytes.len() {
            return Err(Error::TrailingText(value.trim()[pos..].to_string()));
        }

        Ok(parsed)
    }
}

fn parse_value(bytes: &[u8], pos: &mut usize) -> Result<Value, Error> {
    match bytes.get(*pos) {
        Some(b'[') => parse_list(bytes, pos),
        Some(c) if c.is_ascii_digit() || *c == b'-' => parse_int(bytes, pos),
        Some(c) => Err(Error::UnexpectedChar(*c as char, *pos)),
        None => Err(Error::UnexpectedEnd),
    }
}

fn parse_list(bytes: &[u8], pos: &mut usize) -> Result<Value, Error> {
    *pos += 1;
    let mut values = Vec::new();
    if bytes.get(*pos) == Some(&b']') {
        *pos += 1;
        return Ok(Value::List(values));
    }

    loop {
        values.push(parse_value(bytes, pos)?);
        match bytes.get(*pos) {
            Some(b',') => *pos += 1,
            Some(b']') => {
                *pos += 1;
                return Ok(Value::List(values));
            }
            Some(c) => return Err(Error::UnexpectedChar(*c as char, *pos)),
            None => return Err(Error::UnexpectedEnd),
        }
    }
}

fn parse_int(bytes: &[u8], pos: &mut usize) -> Result<Value, Error> {
    let start = *pos;
    if bytes.get(*pos) == Some(&b'-') {
        *pos += 1;
    }
    while bytes.get(*pos).is_some_and(|c| c.is_ascii_digit()) {
        *pos += 1;
    }

    std::str::from_utf8(&bytes[start..*pos])
        .ok()
        .and_then(|s| s.parse::<i64>().ok())
        .map(Value::Int)
        .ok_or(Error::UnexpectedEnd)
}

// Sum of the 1-based indices of the pairs already in order.
pub fn ordered_pair_index_sum(packets: &[Value]) -> usize {
    packets
        .chunks_exact(2)
        .enumerate()
        .filter(|(_, pair)| pair[0] < pair[1])
        .map(|(ind, _)| ind + 1)
        .sum()
}

// Sort every packet together with the two divider packets, then multiply
// the dividers' 1-based positions.
pub fn decoder_key(mut packets: Vec<Value>) -> usize {
    let dividers = [
        Value::List(vec![Value::List(vec![Value::Int(2)])]),
        Value::List(vec![Value::List(vec![Value::Int(6)])]),
    ];
    packets.extend(dividers.iter().cloned());
    packets.sort_unstable();

    dividers
        .iter()
        .map(|divider| {
            packets
                .binary_search(divider)
                .expect("divider packets are in the sorted list")
                + 1
        })
        .product()
}

pub fn read_packets<P: AsRef<Path>>(path: P) -> Result<Vec<Value>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut packets = Vec::new();
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

        packets.push(
            Value::try_from(line.as_str())
                .with_context(|| format!("Failed to parse packet at line {}.", ind + 1))?,
        );
    }

    Ok(packets)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn packet(text: &str) -> Value {
        Value::try_from(text).unwrap()
    }

    #[test]
    fn ints_compare_numerically() {
        assert!(packet("[1,1,3,1,1]") < packet("[1,1,5,1,1]"));
    }

    #[test]
    fn int_promotes_to_one_element_list() {
        assert!(packet("[[1],[2,3,4]]") < packet("[[1],4]"));
        assert!(packet("[9]") > packet("[[8,7,6]]"));
    }

    #[test]
    fn shorter_list_wins_the_tiebreak() {
        assert!(packet("[]") < packet("[3]"));
        assert!(packet("[7,7,7]") < packet("[7,7,7,7]"));
        assert!(packet("[[[]]]") > packet("[[]]"));
    }

    #[test]
    fn malformed_packets_are_rejected() {
        assert!(Value::try_from("[1,2").is_err());
        assert!(Value::try_from("[1]2").is_err());
        assert!(Value::try_from("[a]").is_err());
    }
}
