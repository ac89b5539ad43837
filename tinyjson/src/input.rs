//! Reading the raw JSON text from files or standard input.

use anyhow::{Context, Result};
use std::{
	fmt::Display,
	fs::File,
	io::{BufRead, BufReader},
	path::PathBuf,
};

/// Where one JSON document is read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
	Stdin,
	File(PathBuf),
}

impl Source {
	/// `-` stands for standard input, anything else is a file path.
	pub fn from_arg(arg: &str) -> Self {
		if arg == "-" {
			Source::Stdin
		} else {
			Source::File(PathBuf::from(arg))
		}
	}

	/// Read the whole source, joining its lines with `\n`.
	pub fn read(&self) -> Result<String> {
		match self {
			Source::Stdin => read_lines(std::io::stdin().lock()).context("while reading standard input"),
			Source::File(path) => {
				let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
				read_lines(BufReader::new(file)).with_context(|| format!("while reading {}", path.display()))
			}
		}
	}
}

impl Display for Source {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Source::Stdin => write!(f, "<stdin>"),
			Source::File(path) => write!(f, "'{}'", path.display()),
		}
	}
}

/// Concatenate all lines of `reader` with `\n`. Line endings (`\n` or `\r\n`) are normalized and
/// a final line break is dropped.
pub fn read_lines(reader: impl BufRead) -> Result<String> {
	let lines = reader.lines().collect::<std::io::Result<Vec<String>>>()?;
	Ok(lines.join("\n"))
}
