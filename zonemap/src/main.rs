mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	#[command(flatten)]
	verbose: Verbosity<WarnLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// List the zones of a boundary source
	Probe(tools::probe::Subcommand),

	/// Find the zone containing a point
	Locate(tools::locate::Subcommand),

	/// Write the zones of a boundary source as GeoJSON
	Convert(tools::convert::Subcommand),

	/// Select zones interactively with points read from stdin
	Pick(tools::pick::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	match &cli.command {
		Commands::Probe(arguments) => tools::probe::run(arguments),
		Commands::Locate(arguments) => tools::locate::run(arguments),
		Commands::Convert(arguments) => tools::convert::run(arguments),
		Commands::Pick(arguments) => tools::pick::run(arguments),
	}
}
