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
    InvalidItemChar(char),
    NoSharedItem(String),
    IncompleteGroup(usize),
    NoBadgeItem(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidItemChar(c) => write!(f, "Invalid character({}) for item type.", c),
            Error::NoSharedItem(s) => {
                write!(f, "No item type is shared by both halves of rucksack({}).", s)
            }
            Error::IncompleteGroup(n) => write!(
                f,
                "Expect group(s) of 3 rucksacks, {} left after grouping.",
                n
            ),
            Error::NoBadgeItem(group_ind) => {
                write!(f, "No item type is shared by all rucksacks in group {}.", group_ind)
            }
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct Rucksack {
    items: String,
}

impl TryFrom<&str> for Rucksack {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        if let Some(c) = value.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(Error::InvalidItemChar(c));
        }

        Ok(Rucksack {
            items: value.to_string(),
        })
    }
}

impl Rucksack {
    // The one item type present in both compartments(halves).
    pub fn shared_item(&self) -> Option<char> {
        let half_len = self.items.len() / 2;
        let (front, rear) = self.items.split_at(half_len);
        let rear_items = rear.chars().collect::<HashSet<_>>();
        front.chars().find(|c| rear_items.contains(c))
    }

    pub fn item_set(&self) -> HashSet<char> {
        self.items.chars().collect()
    }
}

pub fn priority(item: char) -> usize {
    if item.is_ascii_lowercase() {
        item as usize - 'a' as usize + 1
    } else {
        item as usize - 'A' as usize + 27
    }
}

pub fn shared_priority_sum(rucksacks: &[Rucksack]) -> Result<usize, Error> {
    let mut sum = 0;
    for sack in rucksacks {
        let item = sack
            .shared_item()
            .ok_or_else(|| Error::NoSharedItem(sack.items.clone()))?;
        sum += priority(item);
    }

    Ok(sum)
}

pub fn badge_priority_sum(rucksacks: &[Rucksack]) -> Result<usize, Error> {
    if rucksacks.len() % 3 != 0 {
        return Err(Error::IncompleteGroup(rucksacks.len() % 3));
    }

    let mut sum = 0;
    for (group_ind, group) in rucksacks.chunks(3).enumerate() {
        let common = group
            .iter()
            .map(|sack| sack.item_set())
            .reduce(|common, items| common.intersection(&items).copied().collect())
            .unwrap_or_default();
        let badge = common
            .into_iter()
            .next()
            .ok_or(Error::NoBadgeItem(group_ind))?;
        sum += priority(badge);
    }

    Ok(sum)
}

pub fn read_rucksacks<P: AsRef<Path>>(path: P) -> Result<Vec<Rucksack>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut rucksacks = Vec::new();
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

        rucksacks.push(
            Rucksack::try_from(line.trim())
                .with_context(|| format!("Failed to parse rucksack at line {}.", ind + 1))?,
        );
    }

    Ok(rucksacks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_follows_alphabetic_rank() {
        assert_eq!(priority('a'), 1);
        assert_eq!(priority('z'), 26);
        assert_eq!(priority('A'), 27);
        assert_eq!(priority('Z'), 52);
    }

    #[test]
    fn shared_item_found_in_both_halves() {
        let sack = Rucksack::try_from("vJrwpWtwJgWrhcsFMMfFFhFp").unwrap();
        assert_eq!(sack.shared_item(), Some('p'));
    }
}
