use super::Coordinates;
use serde::{Deserialize, Serialize};

/// A map-facing position as delivered by click events and consumed by zone forms.
///
/// Internally all geometry uses [`Coordinates`] in `[lng, lat]` order. The `From`
/// impls below are the only place where the two orders meet.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
	pub latitude: f64,
	pub longitude: f64,
}

impl LatLng {
	#[must_use]
	pub fn new(latitude: f64, longitude: f64) -> Self {
		Self { latitude, longitude }
	}
}

impl From<LatLng> for Coordinates {
	fn from(value: LatLng) -> Self {
		Coordinates::new(value.longitude, value.latitude)
	}
}

impl From<&LatLng> for Coordinates {
	fn from(value: &LatLng) -> Self {
		Coordinates::new(value.longitude, value.latitude)
	}
}

impl From<Coordinates> for LatLng {
	fn from(value: Coordinates) -> Self {
		LatLng::new(value.y(), value.x())
	}
}

impl From<&Coordinates> for LatLng {
	fn from(value: &Coordinates) -> Self {
		LatLng::new(value.y(), value.x())
	}
}
