mod input;

use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::{ErrorLevel, Verbosity};
use input::Source;
use log::info;
use std::io::Write;
use tinyjson_core::{DEFAULT_MAX_DEPTH, ParseOptions, parse_json_str_with};

#[derive(Parser, Debug)]
#[command(
	author, // Set the author
	version, // Set the version
	about, // Set a short description
	long_about = None, // Disable long description
)]
struct Cli {
	/// JSON files to parse, "-" for standard input [default: standard input]
	inputs: Vec<String>,

	/// Print the value tree across multiple lines
	#[arg(short, long)]
	pretty: bool,

	/// Maximum nesting depth of arrays and objects
	#[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
	max_depth: usize,

	/// Accept a comma directly before a closing bracket or brace
	#[arg(long)]
	trailing_commas: bool,

	/// Ignore anything after the first JSON value instead of failing
	#[arg(long)]
	lenient: bool,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>, // Set verbosity flag
}

impl Cli {
	fn parse_options(&self) -> ParseOptions {
		ParseOptions::new()
			.with_max_depth(self.max_depth)
			.with_trailing_commas(self.trailing_commas)
			.with_strict_end(!self.lenient)
	}

	fn sources(&self) -> Vec<Source> {
		if self.inputs.is_empty() {
			vec![Source::Stdin]
		} else {
			self.inputs.iter().map(|arg| Source::from_arg(arg)).collect()
		}
	}
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	// Initialize logger and set log level based on verbosity flag
	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(&cli, &mut std::io::stdout().lock())
}

// Parse every input and print its value tree
fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
	let options = cli.parse_options();

	for source in cli.sources() {
		let text = source.read()?;
		info!("parsing {} characters from {source}", text.chars().count());

		let value = parse_json_str_with(&text, &options).with_context(|| format!("while parsing JSON from {source}"))?;
		if cli.pretty {
			writeln!(out, "{value:#?}")?;
		} else {
			writeln!(out, "{value:?}")?;
		}
	}

	Ok(())
}
