use thiserror::Error;

/// Why a boundary source could not be turned into zones.
#[derive(Debug, Error)]
pub enum LoadError {
	/// The source is unreachable or unreadable.
	#[error("cannot read boundary source {source_name}: {cause:#}")]
	Fetch { source_name: String, cause: anyhow::Error },

	/// The document is not valid KML or GeoJSON.
	#[error("cannot parse boundary source {source_name}: {cause:#}")]
	Parse { source_name: String, cause: anyhow::Error },

	/// The document was read, but none of its features is a polygon or multipolygon.
	#[error("boundary source {source_name} has no polygon features ({feature_count} features in total)")]
	NoAreaFeatures { source_name: String, feature_count: usize },
}

impl LoadError {
	pub fn source_name(&self) -> &str {
		match self {
			LoadError::Fetch { source_name, .. }
			| LoadError::Parse { source_name, .. }
			| LoadError::NoAreaFeatures { source_name, .. } => source_name,
		}
	}
}
