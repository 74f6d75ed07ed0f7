mod geo;
pub mod geojson;
pub mod kml;

pub use self::geo::*;
