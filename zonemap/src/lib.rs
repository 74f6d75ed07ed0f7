//! # zonemap
//!
//! Delivery zone resolution for a map-based zone picker.
//!
//! - [`load_zones`] reads a KML or GeoJSON boundary source into a [`ZoneCollection`].
//! - [`ZoneCollection::find_containing_zone`] tells which zone contains a point.
//! - [`ZoneLayer`] holds the current collection and makes sure the newest load wins.
//! - [`ZonePicker`] turns map clicks into a [`ZoneSelection`] whose outer ring is handed
//!   to subscribers as `{latitude, longitude}` points.
//!
//! ## Usage Example
//!
//! ```rust
//! use zonemap::{ClickOutcome, LogMapView, ZoneLayer, ZonePicker};
//! use zonemap_core::{Blob, DataLocation};
//! use zonemap_geometry::LatLng;
//!
//! #[tokio::main]
//! async fn main() {
//!     let kml = r#"<kml><Placemark><name>Mitte</name><Polygon><outerBoundaryIs><LinearRing>
//!         <coordinates>13.3,52.5 13.5,52.5 13.5,52.6 13.3,52.6 13.3,52.5</coordinates>
//!     </LinearRing></outerBoundaryIs></Polygon></Placemark></kml>"#;
//!
//!     let mut picker = ZonePicker::new(ZoneLayer::default(), LogMapView);
//!     picker.reload(&DataLocation::from(Blob::from(kml))).await;
//!     picker.subscribe(|points| println!("{} points", points.len()));
//!
//!     let outcome = picker.handle_click(LatLng::new(52.52, 13.40));
//!     assert!(matches!(outcome, ClickOutcome::Selected { zone_index: 0, .. }));
//! }
//! ```

mod config;
mod layer;
mod loader;
mod picker;
mod selection;
mod zones;

pub use config::*;
pub use layer::*;
pub use loader::*;
pub use picker::*;
pub use selection::*;
pub use zones::*;
