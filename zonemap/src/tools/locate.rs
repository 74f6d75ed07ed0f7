use super::SourceArgs;
use anyhow::Result;
use zonemap_geometry::{Coordinates, LatLng};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true, allow_negative_numbers = true)]
pub struct Subcommand {
	#[command(flatten)]
	source: SourceArgs,

	/// latitude of the point
	#[arg(required = true)]
	lat: f64,

	/// longitude of the point
	#[arg(required = true)]
	lng: f64,

	/// list every zone containing the point, not only the first one
	#[arg(long, short)]
	all: bool,
}

#[tokio::main]
pub async fn run(arguments: &Subcommand) -> Result<()> {
	let zones = arguments.source.load().await?;
	let point = Coordinates::from(LatLng::new(arguments.lat, arguments.lng));

	let matches = if arguments.all {
		zones.find_all_containing_zones(&point)
	} else {
		zones.find_containing_zone(&point).into_iter().collect()
	};

	if matches.is_empty() {
		println!("no zone");
	}
	for found in matches {
		println!("#{}\t{}", found.zone.index(), found.zone.name());
	}

	Ok(())
}
