use super::SourceArgs;
use anyhow::{Context, Result, bail, ensure};
use std::io::BufRead;
use zonemap::{LogMapView, ZoneLayer, ZonePicker};
use zonemap_geometry::LatLng;

const INPUT_HELP: &str = "Reads one command per line from stdin:
  <lat>,<lng>   click at a point
  clear         clear the selection
  reset <n>     report the external reset counter
After every selection change the selected ring is printed as a JSON array.";

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true, after_help = INPUT_HELP)]
pub struct Subcommand {
	#[command(flatten)]
	source: SourceArgs,
}

#[derive(Debug, PartialEq)]
enum Command {
	Click(LatLng),
	Clear,
	Reset(u64),
}

fn parse_command(line: &str) -> Result<Option<Command>> {
	let line = line.trim();
	if line.is_empty() || line.starts_with('#') {
		return Ok(None);
	}
	if line == "clear" {
		return Ok(Some(Command::Clear));
	}
	if let Some(counter) = line.strip_prefix("reset") {
		let counter = counter.trim().parse().with_context(|| format!("invalid reset counter in '{line}'"))?;
		return Ok(Some(Command::Reset(counter)));
	}
	let Some((lat, lng)) = line.split_once(',') else {
		bail!("expected '<lat>,<lng>', 'clear' or 'reset <n>', got '{line}'");
	};
	let lat = lat.trim().parse().with_context(|| format!("invalid latitude in '{line}'"))?;
	let lng = lng.trim().parse().with_context(|| format!("invalid longitude in '{line}'"))?;
	Ok(Some(Command::Click(LatLng::new(lat, lng))))
}

#[tokio::main]
pub async fn run(arguments: &Subcommand) -> Result<()> {
	ensure!(
		arguments.source.source != "-",
		"pick reads its commands from stdin, so the boundary source cannot be \"-\""
	);

	let layer = ZoneLayer::new(arguments.source.load_options()?);
	let mut picker = ZonePicker::new(layer, LogMapView);
	if let zonemap::LoadOutcome::Committed(Err(error)) = picker.reload(&arguments.source.location()?).await {
		return Err(error.into());
	}

	picker.subscribe(|points| match serde_json::to_string(points) {
		Ok(json) => println!("{json}"),
		Err(error) => log::error!("cannot serialize points: {error}"),
	});

	for (number, line) in std::io::stdin().lock().lines().enumerate() {
		let line = line.context("reading stdin")?;
		match parse_command(&line) {
			Ok(Some(Command::Click(point))) => {
				let outcome = picker.handle_click(point);
				log::debug!("{outcome:?}");
			}
			Ok(Some(Command::Clear)) => {
				picker.clear();
			}
			Ok(Some(Command::Reset(counter))) => {
				picker.observe_reset(counter);
			}
			Ok(None) => {}
			Err(error) => log::warn!("line {}: {error:#}", number + 1),
		}
	}

	Ok(())
}
