use super::SourceArgs;
use anyhow::{Context, Result};
use std::io::Write;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	#[command(flatten)]
	source: SourceArgs,

	/// output GeoJSON file, or "-" for stdout
	#[arg(required = true)]
	output: String,

	/// round coordinates to this many decimal places
	#[arg(long, short, value_name = "int", display_order = 2)]
	precision: Option<u8>,

	/// indent the output
	#[arg(long, display_order = 2)]
	pretty: bool,
}

#[tokio::main]
pub async fn run(arguments: &Subcommand) -> Result<()> {
	let zones = arguments.source.load().await?;
	let json = zones.to_geo_collection().to_json(arguments.precision);

	let mut text = if arguments.pretty {
		serde_json::to_string_pretty(&json)?
	} else {
		json.to_string()
	};
	text.push('\n');

	if arguments.output == "-" {
		std::io::stdout().lock().write_all(text.as_bytes())?;
	} else {
		std::fs::write(&arguments.output, text).with_context(|| format!("writing {}", arguments.output))?;
		log::info!("wrote {} zones to {}", zones.len(), arguments.output);
	}

	Ok(())
}
