// Geometric primitives used by the zone resolver. Coordinates are stored as `[lng, lat]`
// (x = longitude, y = latitude); `LatLng` is the map-facing counterpart and the only
// other representation of a point. Area types (`RingGeometry`, `PolygonGeometry`,
// `MultiPolygonGeometry`) implement containment via even-odd ray casting.

mod bounds;
mod coordinates;
mod lat_lng;
mod linestring;
mod macros;
mod multi_polygon;
mod point;
mod polygon;
mod ring;
mod traits;

pub use bounds::*;
pub use coordinates::*;
pub use lat_lng::*;
pub use linestring::*;
pub use multi_polygon::*;
pub use point::*;
pub use polygon::*;
pub use ring::*;
pub use traits::*;
