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
    InvalidCommandText(String),
    InvalidEntryText(String),
    NoParentDir(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidCommandText(s) => write!(f, "Invalid text({}) for command.", s),
            Error::InvalidEntryText(s) => write!(f, "Invalid text({}) for listing entry.", s),
            Error::NoParentDir(name) => {
                write!(f, "Directory({}) has no parent to change into.", name)
            }
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug)]
struct Node {
    name: String,
    size: usize,
    children: Vec<usize>,
}

// The transcript tree lives in an index arena, node 0 is the root. A node
// with children is a directory; its own size stays 0.
#[derive(Debug)]
pub struct FileTree {
    nodes: Vec<Node>,
}

impl FileTree {
    // Total size of every directory, bottom-up.
    pub fn dir_sizes(&self) -> Vec<(String, usize)> {
        let mut sizes = Vec::new();
        self.sum_node(0, &mut sizes);
        sizes
    }

    pub fn total_size(&self) -> usize {
        self.sum_node(0, &mut Vec::new())
    }

    pub fn print(&self) -> Result<()> {
        let mut lock = stdout().lock();
        self.print_node(&mut lock, 0, 0)?;
        Ok(())
    }

    fn sum_node(&self, ind: usize, sizes: &mut Vec<(String, usize)>) -> usize {
        let node = &self.nodes[ind];
        if node.children.is_empty() {
            node.size
        } else {
            let total = node
                .children
                .iter()
                .map(|child_ind| self.sum_node(*child_ind, sizes))
                .sum();
            sizes.push((node.name.clone(), total));
            total
        }
    }

    fn print_node(&self, lock: &mut impl Write, ind: usize, level: usize) -> Result<()> {
        let node = &self.nodes[ind];
        writeln!(lock, "{}{} : {}", "    ".repeat(level), node.size, node.name)?;
        for child_ind in &node.children {
            self.print_node(lock, *child_ind, level + 1)?;
        }

        Ok(())
    }
}

pub struct TreeBuilder {
    nodes: Vec<Node>,
    parents: Vec<Option<usize>>,
    current: usize,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                name: "/".to_string(),
                size: 0,
                children: Vec::new(),
            }],
            parents: vec![None],
            current: 0,
        }
    }

    pub fn process_line(&mut self, line: &str) -> Result<(), Error> {
        let parts = line.split_whitespace().collect::<Vec<_>>();
        match parts.as_slice() {
            ["$", "cd", dir] => self.cd(dir),
            ["$", "ls"] => Ok(()),
            ["$", ..] => Err(Error::InvalidCommandText(line.to_string())),
            ["dir", name] => {
                self.add_node(name, 0);
                Ok(())
            }
            [size_text, name] => {
                let size = size_text
                    .parse::<usize>()
                    .map_err(|_| Error::InvalidEntryText(line.to_string()))?;
                self.add_node(name, size);
                Ok(())
            }
            _ => Err(Error::InvalidEntryText(line.to_string())),
        }
    }

    pub fn build(self) -> FileTree {
        FileTree { nodes: self.nodes }
    }

    fn cd(&mut self, dir: &str) -> Result<(), Error> {
        match dir {
            "/" => self.current = 0,
            ".." => {
                self.current = self.parents[self.current]
                    .ok_or_else(|| Error::NoParentDir(self.nodes[self.current].name.clone()))?;
            }
            name => {
                // Change into the named child, creating it first if the
                // listing never mentioned it.
                let found = self.nodes[self.current]
                    .children
                    .iter()
                    .find(|child_ind| self.nodes[**child_ind].name == name)
                    .copied();
                self.current = found.unwrap_or_else(|| self.add_node(name, 0));
            }
        }

        Ok(())
    }

    fn add_node(&mut self, name: &str, size: usize) -> usize {
        let ind = self.nodes.len();
        self.nodes.push(Node {
            name: name.to_string(),
            size,
            children: Vec::new(),
        });
        self.parents.push(Some(self.current));
        self.nodes[self.current].children.push(ind);
        ind
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn read_tree<P: AsRef<Path>>(path: P) -> Result<FileTree> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut builder = TreeBuilder::new();
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
            .process_line(line.trim())
            .with_context(|| format!("Failed to process transcript line {}.", ind + 1))?;
    }

    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(transcript: &[&str]) -> FileTree {
        let mut builder = TreeBuilder::new();
        for line in transcript {
            builder.process_line(line).unwrap();
        }
        builder.build()
    }

    #[test]
    fn dir_sizes_sum_recursively() {
        let tree = build(&[
            "$ cd /", "$ ls", "dir a", "100 b.txt", "$ cd a", "$ ls", "30 c", "70 d",
        ]);
        let sizes = tree.dir_sizes();
        assert!(sizes.contains(&("a".to_string(), 100)));
        assert!(sizes.contains(&("/".to_string(), 200)));
        assert_eq!(tree.total_size(), 200);
    }

    #[test]
    fn cd_into_unlisted_dir_creates_it() {
        let tree = build(&["$ cd /", "$ cd x", "$ ls", "10 f"]);
        assert!(tree.dir_sizes().contains(&("x".to_string(), 10)));
    }

    #[test]
    fn cd_above_root_is_an_error() {
        let mut builder = TreeBuilder::new();
        assert!(builder.process_line("$ cd ..").is_err());
    }
}
