//! Click handling on top of a [`ZoneLayer`] and a [`ZoneSelection`].

use crate::{LoadOutcome, SubscriptionId, ZoneCollection, ZoneLayer, ZoneSelection};
use std::sync::Arc;
use zonemap_core::DataLocation;
use zonemap_geometry::{Coordinates, LatLng};

/// Hint shown when a click hits no zone.
pub const NO_ZONE_HINT: &str = "Select a point inside a zone";

/// The map widget the picker drives. Passed to the picker explicitly, never global.
pub trait MapView {
	/// Fits the view to `[lng_min, lat_min, lng_max, lat_max]`.
	fn fit_bounds(&mut self, bounds: [f64; 4]);
	fn invalidate_size(&mut self);
	/// A short contextual hint, e.g. after a click outside all zones.
	fn show_hint(&mut self, message: &str);
	/// A non-blocking notice, e.g. after a failed load.
	fn show_notice(&mut self, message: &str);
}

/// A [`MapView`] without a map: everything goes to the log.
#[derive(Debug, Default)]
pub struct LogMapView;

impl MapView for LogMapView {
	fn fit_bounds(&mut self, bounds: [f64; 4]) {
		log::debug!("fit view to {bounds:?}");
	}

	fn invalidate_size(&mut self) {}

	fn show_hint(&mut self, message: &str) {
		log::info!("{message}");
	}

	fn show_notice(&mut self, message: &str) {
		log::warn!("{message}");
	}
}

#[derive(Clone, Debug, PartialEq)]
pub enum ClickOutcome {
	Selected { zone_index: usize, name: String },
	NoMatch,
}

pub struct ZonePicker<V: MapView> {
	layer: ZoneLayer,
	/// Layer revision the selection refers to.
	revision: u64,
	selection: ZoneSelection,
	view: V,
}

impl<V: MapView> ZonePicker<V> {
	pub fn new(layer: ZoneLayer, mut view: V) -> Self {
		view.invalidate_size();
		let (revision, zones) = layer.snapshot();
		if let Some(bounds) = zones.bounds() {
			view.fit_bounds(bounds);
		}
		Self {
			layer,
			revision,
			selection: ZoneSelection::new(),
			view,
		}
	}

	pub fn layer(&self) -> &ZoneLayer {
		&self.layer
	}

	/// The current selection. A selection made before the layer last committed is cleared
	/// first, whoever committed.
	pub fn selection(&mut self) -> &ZoneSelection {
		self.sync();
		&self.selection
	}

	pub fn view(&self) -> &V {
		&self.view
	}

	pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
	where
		F: Fn(&[LatLng]) + Send + Sync + 'static,
	{
		self.selection.subscribe(callback)
	}

	pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
		self.selection.unsubscribe(id)
	}

	/// Selects the first zone containing `click`. A click outside every zone leaves the
	/// selection as it is and shows [`NO_ZONE_HINT`].
	pub fn handle_click(&mut self, click: LatLng) -> ClickOutcome {
		let zones = self.sync();
		match zones.find_containing_zone(&Coordinates::from(click)) {
			Some(found) => {
				self.selection.select(&found, click);
				ClickOutcome::Selected {
					zone_index: found.zone.index(),
					name: found.zone.name().to_string(),
				}
			}
			None => {
				self.view.show_hint(NO_ZONE_HINT);
				ClickOutcome::NoMatch
			}
		}
	}

	/// Clears the selection if the layer committed since it was made. Returns the collection
	/// the picker now works on.
	fn sync(&mut self) -> Arc<ZoneCollection> {
		let (revision, zones) = self.layer.snapshot();
		if revision != self.revision {
			log::debug!("zone layer moved from revision {} to {revision}", self.revision);
			self.revision = revision;
			self.selection.clear();
		}
		zones
	}

	pub fn observe_reset(&mut self, counter: u64) -> bool {
		self.selection.observe_reset(counter)
	}

	pub fn clear(&mut self) -> bool {
		self.selection.clear()
	}

	/// Loads a new boundary source into the layer.
	///
	/// If the load commits, the view is fitted to the new zones, or shows a notice on failure.
	/// Whenever the layer has committed meanwhile, by this load or another holder of the
	/// layer, the old selection is cleared: its ring belongs to the previous collection.
	pub async fn reload(&mut self, location: &DataLocation) -> LoadOutcome {
		let outcome = self.layer.load(location).await;
		self.sync();
		match &outcome {
			LoadOutcome::Committed(Ok(zones)) => {
				if let Some(bounds) = zones.bounds() {
					self.view.fit_bounds(bounds);
				}
			}
			LoadOutcome::Committed(Err(error)) => {
				self.view.show_notice(&error.to_string());
			}
			LoadOutcome::Stale => {}
		}
		outcome
	}
}
