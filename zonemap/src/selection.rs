//! Selection state of the interactive zone picker.
//!
//! The selection is either `Idle` or `Selected` with the zone index, the clicked point and
//! the zone's outer ring. Subscribers receive the ring after every change, or an empty
//! slice when the selection is cleared.

use crate::ZoneMatch;
use zonemap_geometry::LatLng;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum SelectionState {
	#[default]
	Idle,
	Selected {
		zone_index: usize,
		point: LatLng,
		ring: Vec<LatLng>,
	},
}

/// Returned by [`ZoneSelection::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type PointsCallback = Box<dyn Fn(&[LatLng]) + Send + Sync>;

#[derive(Default)]
pub struct ZoneSelection {
	state: SelectionState,
	subscribers: Vec<(SubscriptionId, PointsCallback)>,
	next_subscription: u64,
	last_reset: Option<u64>,
}

impl ZoneSelection {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn state(&self) -> &SelectionState {
		&self.state
	}

	pub fn is_selected(&self) -> bool {
		matches!(self.state, SelectionState::Selected { .. })
	}

	pub fn zone_index(&self) -> Option<usize> {
		match &self.state {
			SelectionState::Selected { zone_index, .. } => Some(*zone_index),
			SelectionState::Idle => None,
		}
	}

	pub fn point(&self) -> Option<LatLng> {
		match &self.state {
			SelectionState::Selected { point, .. } => Some(*point),
			SelectionState::Idle => None,
		}
	}

	/// The selected outer ring; empty while idle.
	pub fn ring(&self) -> &[LatLng] {
		match &self.state {
			SelectionState::Selected { ring, .. } => ring,
			SelectionState::Idle => &[],
		}
	}

	/// Registers a callback that receives the ring after every selection change.
	pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
	where
		F: Fn(&[LatLng]) + Send + Sync + 'static,
	{
		self.next_subscription += 1;
		let id = SubscriptionId(self.next_subscription);
		self.subscribers.push((id, Box::new(callback)));
		id
	}

	/// Returns `false` if `id` was not subscribed.
	pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
		let before = self.subscribers.len();
		self.subscribers.retain(|(other, _)| *other != id);
		self.subscribers.len() != before
	}

	/// Replaces the current selection, if any, with the matched zone.
	pub fn select(&mut self, found: &ZoneMatch, point: LatLng) {
		let ring = found.ring.0.iter().map(LatLng::from).collect();
		self.state = SelectionState::Selected {
			zone_index: found.zone.index(),
			point,
			ring,
		};
		self.notify();
	}

	/// Returns to `Idle`. Returns `false`, without notifying, if already idle.
	pub fn clear(&mut self) -> bool {
		if !self.is_selected() {
			return false;
		}
		self.state = SelectionState::Idle;
		self.notify();
		true
	}

	/// Observes the external reset counter. Any value different from the previously
	/// observed one clears the selection; the first observation only sets the baseline.
	///
	/// Returns whether the selection was cleared.
	pub fn observe_reset(&mut self, counter: u64) -> bool {
		let previous = self.last_reset.replace(counter);
		match previous {
			Some(previous) if previous != counter => self.clear(),
			_ => false,
		}
	}

	fn notify(&self) {
		let ring = self.ring();
		for (_, callback) in &self.subscribers {
			callback(ring);
		}
	}
}

impl std::fmt::Debug for ZoneSelection {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ZoneSelection")
			.field("state", &self.state)
			.field("subscribers", &self.subscribers.len())
			.field("last_reset", &self.last_reset)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{Zone, ZoneCollection};
	use parking_lot::Mutex;
	use std::sync::Arc;
	use zonemap_geometry::{Coordinates, GeoProperties, Geometry};

	fn zones() -> ZoneCollection {
		let square = |x: f64| {
			Geometry::new_polygon(vec![vec![[x, 0.0], [x + 1.0, 0.0], [x + 1.0, 1.0], [x, 1.0], [x, 0.0]]])
		};
		ZoneCollection::new(vec![
			Zone::new(0, String::from("A"), square(0.0), GeoProperties::new()),
			Zone::new(1, String::from("B"), square(2.0), GeoProperties::new()),
		])
	}

	fn recorder(selection: &mut ZoneSelection) -> Arc<Mutex<Vec<Vec<LatLng>>>> {
		let calls = Arc::new(Mutex::new(Vec::new()));
		let sink = calls.clone();
		selection.subscribe(move |points| sink.lock().push(points.to_vec()));
		calls
	}

	fn select_at(selection: &mut ZoneSelection, zones: &ZoneCollection, lng: f64, lat: f64) {
		let point = LatLng::new(lat, lng);
		let found = zones.find_containing_zone(&Coordinates::from(point)).unwrap();
		selection.select(&found, point);
	}

	fn assert_consistent(selection: &ZoneSelection) {
		assert_eq!(selection.ring().is_empty(), selection.zone_index().is_none());
		assert_eq!(selection.point().is_none(), selection.zone_index().is_none());
	}

	#[test]
	fn select_converts_ring_to_lat_lng() {
		let zones = zones();
		let mut selection = ZoneSelection::new();
		let calls = recorder(&mut selection);

		select_at(&mut selection, &zones, 2.5, 0.5);
		assert_eq!(selection.zone_index(), Some(1));
		assert_eq!(selection.point(), Some(LatLng::new(0.5, 2.5)));
		assert_eq!(selection.ring()[1], LatLng::new(0.0, 3.0));
		assert_eq!(selection.ring().len(), 5);
		assert_eq!(calls.lock().len(), 1);
		assert_eq!(calls.lock()[0], selection.ring());
	}

	#[test]
	fn reselect_replaces_without_idle() {
		let zones = zones();
		let mut selection = ZoneSelection::new();
		let calls = recorder(&mut selection);

		select_at(&mut selection, &zones, 0.5, 0.5);
		select_at(&mut selection, &zones, 2.5, 0.5);
		assert_eq!(selection.zone_index(), Some(1));
		assert!(calls.lock().iter().all(|points| !points.is_empty()));
	}

	#[test]
	fn clear_notifies_empty_once() {
		let zones = zones();
		let mut selection = ZoneSelection::new();
		let calls = recorder(&mut selection);

		assert!(!selection.clear());
		assert!(calls.lock().is_empty());

		select_at(&mut selection, &zones, 0.5, 0.5);
		assert!(selection.clear());
		assert!(!selection.clear());
		assert_eq!(selection.state(), &SelectionState::Idle);
		assert_eq!(*calls.lock().last().unwrap(), Vec::<LatLng>::new());
		assert_eq!(calls.lock().len(), 2);
		assert_consistent(&selection);
	}

	#[test]
	fn reset_counter_change_clears_once() {
		let zones = zones();
		let mut selection = ZoneSelection::new();
		assert!(!selection.observe_reset(2));
		select_at(&mut selection, &zones, 0.5, 0.5);
		let calls = recorder(&mut selection);

		assert!(selection.observe_reset(3));
		assert!(!selection.observe_reset(3));
		assert!(!selection.is_selected());
		assert_eq!(*calls.lock(), vec![Vec::<LatLng>::new()]);
	}

	#[test]
	fn same_reset_value_keeps_selection() {
		let zones = zones();
		let mut selection = ZoneSelection::new();
		selection.observe_reset(7);
		select_at(&mut selection, &zones, 0.5, 0.5);
		assert!(!selection.observe_reset(7));
		assert_eq!(selection.zone_index(), Some(0));
	}

	#[test]
	fn reset_while_idle_is_silent() {
		let mut selection = ZoneSelection::new();
		let calls = recorder(&mut selection);
		selection.observe_reset(0);
		assert!(!selection.observe_reset(1));
		assert!(calls.lock().is_empty());
	}

	#[test]
	fn unsubscribe() {
		let zones = zones();
		let mut selection = ZoneSelection::new();
		let calls = Arc::new(Mutex::new(0));
		let sink = calls.clone();
		let id = selection.subscribe(move |_| *sink.lock() += 1);

		select_at(&mut selection, &zones, 0.5, 0.5);
		assert!(selection.unsubscribe(id));
		assert!(!selection.unsubscribe(id));
		selection.clear();
		assert_eq!(*calls.lock(), 1);
	}

	#[test]
	fn consistency_over_event_sequence() {
		let zones = zones();
		let mut selection = ZoneSelection::new();
		selection.observe_reset(0);
		for step in 0..20u32 {
			match step % 5 {
				0 => select_at(&mut selection, &zones, 0.5, 0.5),
				1 => select_at(&mut selection, &zones, 2.5, 0.5),
				2 => {
					selection.observe_reset(u64::from(step / 3));
				}
				3 => {
					selection.clear();
				}
				_ => select_at(&mut selection, &zones, 2.2, 0.9),
			}
			assert_consistent(&selection);
		}
	}
}
