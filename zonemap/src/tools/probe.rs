use super::{SourceArgs, format_bounds};
use anyhow::Result;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	#[command(flatten)]
	source: SourceArgs,
}

#[tokio::main]
pub async fn run(arguments: &Subcommand) -> Result<()> {
	let zones = arguments.source.load().await?;

	println!("{} zones in {}", zones.len(), arguments.source.source);
	for zone in &zones {
		println!(
			"#{}\t{}\t{}\tparts={}\tbounds={}",
			zone.index(),
			zone.name(),
			zone.geometry().type_name(),
			zone.geometry().part_count(),
			format_bounds(zone.bounds())
		);
	}
	println!("bounds: {}", format_bounds(zones.bounds()));

	Ok(())
}
