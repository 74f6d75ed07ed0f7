use std::fmt::Debug;

/// A position in geometry space, stored as `[x, y]` = `[longitude, latitude]`.
///
/// This matches the axis order of KML and GeoJSON. Map clicks arrive as
/// [`LatLng`](super::LatLng) and must be converted explicitly.
#[derive(Clone, Copy, PartialEq)]
pub struct Coordinates([f64; 2]);

impl Coordinates {
	#[must_use]
	pub fn new(x: f64, y: f64) -> Self {
		Self([x, y])
	}

	/// Longitude.
	#[must_use]
	pub fn x(&self) -> f64 {
		self.0[0]
	}

	/// Latitude.
	#[must_use]
	pub fn y(&self) -> f64 {
		self.0[1]
	}

	#[must_use]
	pub fn is_finite(&self) -> bool {
		self.0[0].is_finite() && self.0[1].is_finite()
	}

	#[must_use]
	pub fn to_rounded(&self, precision: Option<u8>) -> [f64; 2] {
		if let Some(prec) = precision {
			let factor = 10f64.powi(i32::from(prec));
			[
				(self.0[0] * factor).round() / factor,
				(self.0[1] * factor).round() / factor,
			]
		} else {
			self.0
		}
	}
}

impl<'a, T> From<&'a [T; 2]> for Coordinates
where
	T: Copy + Into<f64>,
{
	fn from(value: &'a [T; 2]) -> Self {
		Coordinates([value[0].into(), value[1].into()])
	}
}

impl From<[f64; 2]> for Coordinates {
	fn from(value: [f64; 2]) -> Self {
		Coordinates(value)
	}
}

impl From<(f64, f64)> for Coordinates {
	fn from(value: (f64, f64)) -> Self {
		Coordinates([value.0, value.1])
	}
}

impl From<Coordinates> for [f64; 2] {
	fn from(value: Coordinates) -> Self {
		value.0
	}
}

impl Debug for Coordinates {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}
