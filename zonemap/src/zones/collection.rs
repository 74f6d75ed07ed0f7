use super::Zone;
use zonemap_geometry::{Coordinates, GeoCollection, RingGeometry, union_all_bounds};

/// A zone that contains a query point, together with the outer ring of the matching part.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoneMatch<'a> {
	pub zone: &'a Zone,
	pub ring: &'a RingGeometry,
}

/// All zones of one loaded boundary source, in source order.
///
/// `zones[i].index() == i` holds for every collection built by the loader.
#[derive(Clone, Debug, PartialEq)]
pub struct ZoneCollection {
	zones: Vec<Zone>,
	bbox_prefilter: bool,
}

impl Default for ZoneCollection {
	fn default() -> Self {
		Self::new(Vec::new())
	}
}

impl ZoneCollection {
	pub fn new(zones: Vec<Zone>) -> Self {
		Self {
			zones,
			bbox_prefilter: true,
		}
	}

	/// Enables or disables the bounding-box check that runs before the ring tests.
	/// Results are the same either way.
	#[must_use]
	pub fn with_bbox_prefilter(mut self, enabled: bool) -> Self {
		self.bbox_prefilter = enabled;
		self
	}

	/// The first zone, in index order, that contains `point`.
	///
	/// Overlapping zones are resolved by load order: the lower index wins.
	pub fn find_containing_zone(&self, point: &Coordinates) -> Option<ZoneMatch<'_>> {
		self.zones.iter().find_map(|zone| self.match_zone(zone, point))
	}

	/// Every zone that contains `point`, in index order.
	pub fn find_all_containing_zones(&self, point: &Coordinates) -> Vec<ZoneMatch<'_>> {
		self.zones.iter().filter_map(|zone| self.match_zone(zone, point)).collect()
	}

	fn match_zone<'a>(&self, zone: &'a Zone, point: &Coordinates) -> Option<ZoneMatch<'a>> {
		if self.bbox_prefilter && !zone.bounds_contain(point) {
			return None;
		}
		zone.containing_ring(point).map(|ring| ZoneMatch { zone, ring })
	}

	pub fn get(&self, index: usize) -> Option<&Zone> {
		self.zones.get(index)
	}

	pub fn len(&self) -> usize {
		self.zones.len()
	}

	pub fn is_empty(&self) -> bool {
		self.zones.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Zone> {
		self.zones.iter()
	}

	/// Union of all zone bounds, `None` if no zone has any.
	pub fn bounds(&self) -> Option<[f64; 4]> {
		union_all_bounds(self.zones.iter().map(Zone::bounds))
	}

	/// The zones as a feature collection, each tagged with its index and name.
	pub fn to_geo_collection(&self) -> GeoCollection {
		self.zones.iter().map(Zone::to_feature).collect()
	}
}

impl<'a> IntoIterator for &'a ZoneCollection {
	type Item = &'a Zone;
	type IntoIter = std::slice::Iter<'a, Zone>;
	fn into_iter(self) -> Self::IntoIter {
		self.zones.iter()
	}
}
