use std::{
    collections::VecDeque,
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
    IncompleteMonkey(usize),
    InvalidItemsText(String),
    InvalidOperationText(String),
    InvalidTestText(String),
    InvalidTargetText(String),
    InvalidTarget(usize, usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::IncompleteMonkey(n) => {
                write!(f, "Expect 6 line(s) for one monkey, {} left.", n)
            }
            Error::InvalidItemsText(s) => write!(f, "Invalid text({}) for starting items.", s),
            Error::InvalidOperationText(s) => write!(f, "Invalid text({}) for operation.", s),
            Error::InvalidTestText(s) => write!(f, "Invalid text({}) for divisibility test.", s),
            Error::InvalidTargetText(s) => write!(f, "Invalid text({}) for throw target.", s),
            Error::InvalidTarget(target, monkey_n) => write!(
                f,
                "Throw target({}) is out of range of {} monkey(s).",
                target, monkey_n
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy)]
pub enum Operation {
    Add(u64),
    Mul(u64),
    Square,
}

impl Operation {
    pub fn apply(self, old: u64) -> u64 {
        match self {
            Operation::Add(value) => old + value,
            Operation::Mul(value) => old * value,
            Operation::Square => old * old,
        }
    }
}

#[derive(Debug)]
pub struct Monkey {
    items: VecDeque<u64>,
    operation: Operation,
    divisor: u64,
    true_target: usize,
    false_target: usize,
    inspect_n: usize,
}

impl Monkey {
    pub fn new(
        items: Vec<u64>,
        operation: Operation,
        divisor: u64,
        true_target: usize,
        false_target: usize,
    ) -> Self {
        Self {
            items: VecDeque::from(items),
            operation,
            divisor,
            true_target,
            false_target,
            inspect_n: 0,
        }
    }

    pub fn items(&self) -> impl Iterator<Item = &u64> {
        self.items.iter()
    }

    pub fn inspect_n(&self) -> usize {
        self.inspect_n
    }
}

// Every monkey's worry levels stay reduced modulo the product of all
// divisors, which keeps them bounded without changing any divisibility test.
#[derive(Debug)]
pub struct Troop {
    monkeys: Vec<Monkey>,
    sanity_modulus: u64,
}

impl Troop {
    pub fn new(monkeys: Vec<Monkey>) -> Result<Self, Error> {
        let monkey_n = monkeys.len();
        if let Some(monkey) = monkeys
            .iter()
            .find(|m| m.true_target >= monkey_n || m.false_target >= monkey_n)
        {
            return Err(Error::InvalidTarget(
                monkey.true_target.max(monkey.false_target),
                monkey_n,
            ));
        }

        let sanity_modulus = monkeys.iter().map(|m| m.divisor).product();
        Ok(Self {
            monkeys,
            sanity_modulus,
        })
    }

    pub fn play_round(&mut self, gets_bored: bool) {
        for ind in 0..self.monkeys.len() {
            let operation = self.monkeys[ind].operation;
            let divisor = self.monkeys[ind].divisor;
            let true_target = self.monkeys[ind].true_target;
            let false_target = self.monkeys[ind].false_target;
            while let Some(level) = self.monkeys[ind].items.pop_front() {
                self.monkeys[ind].inspect_n += 1;
                let mut level = operation.apply(level);
                if gets_bored {
                    level /= 3;
                }
                level %= self.sanity_modulus;

                let target = if level % divisor == 0 {
                    true_target
                } else {
                    false_target
                };
                self.monkeys[target].items.push_back(level);
            }
        }
    }

    pub fn monkeys(&self) -> &[Monkey] {
        &self.monkeys
    }

    // Product of the two highest inspection counts.
    pub fn monkey_business(&self) -> usize {
        let mut inspect_counts = self
            .monkeys
            .iter()
            .map(|m| m.inspect_n)
            .collect::<Vec<_>>();
        inspect_counts.sort_unstable();
        inspect_counts.iter().rev().take(2).product()
    }
}

pub fn read_troop<P: AsRef<Path>>(path: P) -> Result<Troop> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut lines = Vec::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} of given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        if !line.trim().is_empty() {
            lines.push(line.trim().to_string());
        }
    }

    let mut monkeys = Vec::new();
    for block in lines.chunks(6) {
        monkeys.push(
            parse_monkey(block)
                .with_context(|| format!("Failed to parse monkey {}.", monkeys.len()))?,
        );
    }

    Ok(Troop::new(monkeys)?)
}

fn parse_monkey(block: &[String]) -> Result<Monkey, Error> {
    static ITEMS_PATTERN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"Starting items: ([\d, ]+)").unwrap());
    static OP_PATTERN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"Operation: new = old ([*+]) (old|\d+)").unwrap());
    static TEST_PATTERN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"Test: divisible by (\d+)").unwrap());
    static TRUE_PATTERN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"If true: throw to monkey (\d+)").unwrap());
    static FALSE_PATTERN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"If false: throw to monkey (\d+)").unwrap());

    if block.len() != 6 {
        return Err(Error::IncompleteMonkey(block.len()));
    }

    let items_caps = ITEMS_PATTERN
        .captures(&block[1])
        .ok_or_else(|| Error::InvalidItemsText(block[1].clone()))?;
    let items = items_caps[1]
        .split(',')
        .map(|s| {
            s.trim()
                .parse::<u64>()
                .map_err(|_| Error::InvalidItemsText(block[1].clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let op_caps = OP_PATTERN
        .captures(&block[2])
        .ok_or_else(|| Error::InvalidOperationText(block[2].clone()))?;
    let operation = match (&op_caps[1], &op_caps[2]) {
        ("*", "old") => Operation::Square,
        ("*", value) => Operation::Mul(value.parse::<u64>().unwrap()),
        (_, "old") => return Err(Error::InvalidOperationText(block[2].clone())),
        (_, value) => Operation::Add(value.parse::<u64>().unwrap()),
    };

    let divisor = TEST_PATTERN
        .captures(&block[3])
        .ok_or_else(|| Error::InvalidTestText(block[3].clone()))?[1]
        .parse::<u64>()
        .unwrap();
    let true_target = TRUE_PATTERN
        .captures(&block[4])
        .ok_or_else(|| Error::InvalidTargetText(block[4].clone()))?[1]
        .parse::<usize>()
        .unwrap();
    let false_target = FALSE_PATTERN
        .captures(&block[5])
        .ok_or_else(|| Error::InvalidTargetText(block[5].clone()))?[1]
        .parse::<usize>()
        .unwrap();

    Ok(Monkey::new(
        items,
        operation,
        divisor,
        true_target,
        false_target,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanity_modulus_preserves_divisibility() {
        let divisors = [23u64, 19, 13, 17];
        let modulus = divisors.iter().product::<u64>();
        for x in [0u64, 1, 22, 96576, 123456789, 987654321987] {
            for d in divisors {
                assert_eq!(x % d, (x % modulus) % d);
            }
        }
    }

    fn example_troop() -> Troop {
        Troop::new(vec![
            Monkey::new(vec![79, 98], Operation::Mul(19), 23, 2, 3),
            Monkey::new(vec![54, 65, 75, 74], Operation::Add(6), 19, 2, 0),
            Monkey::new(vec![79, 60, 97], Operation::Square, 13, 1, 3),
            Monkey::new(vec![74], Operation::Add(3), 17, 0, 1),
        ])
        .unwrap()
    }

    #[test]
    fn first_round_throws_match_example() {
        let mut troop = example_troop();
        troop.play_round(true);
        let items = troop.monkeys()[0].items().copied().collect::<Vec<_>>();
        assert_eq!(items, vec![20, 23, 27, 26]);
        let items = troop.monkeys()[1].items().copied().collect::<Vec<_>>();
        assert_eq!(items, vec![2080, 25, 167, 207, 401, 1046]);
    }

    #[test]
    fn out_of_range_target_is_an_error() {
        assert!(Troop::new(vec![Monkey::new(vec![1], Operation::Add(1), 2, 0, 5)]).is_err());
    }
}
