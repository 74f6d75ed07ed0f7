pub mod convert;
pub mod locate;
pub mod pick;
pub mod probe;

use anyhow::Result;
use std::path::PathBuf;
use zonemap::{BoundaryFormat, Config, LoadOptions, ZoneCollection, load_zones};
use zonemap_core::DataLocation;

/// Arguments shared by all subcommands that read a boundary source.
#[derive(clap::Args, Debug)]
pub struct SourceArgs {
	/// boundary source: a *.kml or *.geojson file, an http(s) URL, or "-" for stdin
	#[arg(required = true)]
	pub source: String,

	/// YAML file with loader settings (format, name_properties, bbox_prefilter)
	#[arg(long, short, value_name = "FILE", display_order = 1)]
	pub config: Option<PathBuf>,

	/// format of the boundary source, detected if not given
	#[arg(long, short, value_enum, display_order = 1)]
	pub format: Option<BoundaryFormat>,
}

impl SourceArgs {
	pub fn location(&self) -> Result<DataLocation> {
		DataLocation::try_from(self.source.as_str())
	}

	pub fn load_options(&self) -> Result<LoadOptions> {
		let config = match &self.config {
			Some(path) => Config::from_path(path)?,
			None => Config::default(),
		};
		let mut options = LoadOptions::from(&config);
		if self.format.is_some() {
			options.format = self.format;
		}
		Ok(options)
	}

	pub async fn load(&self) -> Result<ZoneCollection> {
		let options = self.load_options()?;
		Ok(load_zones(&self.location()?, &options).await?)
	}
}

pub fn format_bounds(bounds: Option<[f64; 4]>) -> String {
	match bounds {
		Some(b) => format!("[{}, {}, {}, {}]", b[0], b[1], b[2], b[3]),
		None => String::from("-"),
	}
}
