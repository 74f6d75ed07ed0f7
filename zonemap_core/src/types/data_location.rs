//! `DataLocation` describes where a boundary document lives: a remote URL, a filesystem
//! path or an in-memory blob.
//!
//! It is used to accept flexible inputs in the CLI tools and the zone layer, and offers
//! `filename` and `extension` helpers used for format detection.

use crate::Blob;
use anyhow::{Context, Result, anyhow, bail};
use reqwest::Url;
use std::{
	fmt::Debug,
	path::{Path, PathBuf},
};

/// A flexible location of data used across I/O code.
///
/// # Examples
/// ```
/// use zonemap_core::DataLocation;
/// let a = DataLocation::try_from("https://example.org/zones.kml").unwrap();
/// let b = DataLocation::try_from("./data/zones.kml").unwrap();
/// assert!(matches!(a, DataLocation::Url(_)));
/// assert!(matches!(b, DataLocation::Path(_)));
/// ```
#[derive(Clone, PartialEq)]
pub enum DataLocation {
	/// An absolute URL with scheme and host.
	Url(Url),
	/// An absolute or relative file path.
	Path(PathBuf),
	/// In-memory blob data.
	Blob(Blob),
}

impl DataLocation {
	/// Return the last path segment (e.g., `zones.kml`).
	pub fn filename(&self) -> Result<String> {
		let filename = match self {
			DataLocation::Url(url) => url
				.path_segments()
				.ok_or(anyhow!("Invalid URL"))?
				.next_back()
				.ok_or(anyhow!("Invalid URL"))?,
			DataLocation::Path(path) => path
				.file_name()
				.ok_or(anyhow!("Invalid Path"))?
				.to_str()
				.ok_or(anyhow!("Invalid Path"))?,
			DataLocation::Blob(_) => bail!("Blob has no filename"),
		};
		Ok(filename.to_string())
	}

	/// Return the filename's last extension, lowercased and without the dot.
	pub fn extension(&self) -> Result<String> {
		let filename = self
			.filename()
			.with_context(|| format!("Getting extension from DataLocation {self}"))?;
		match filename.rfind('.') {
			Some(pos) if pos + 1 < filename.len() => Ok(filename[pos + 1..].to_lowercase()),
			_ => bail!("No extension found in '{filename}'"),
		}
	}

	/// Parse a DataLocation from a string, reading from `stdin` if input is `"-"`.
	pub fn parse_with_stdin<R: std::io::Read>(input: &str, mut stdin: R) -> Result<Self> {
		Ok(if input == "-" {
			let mut buffer = Vec::new();
			stdin.read_to_end(&mut buffer).context("Failed to read from stdin")?;
			DataLocation::Blob(Blob::from(buffer))
		} else if let Ok(url) = Url::parse(input)
			&& url.has_host()
		{
			DataLocation::Url(url)
		} else {
			DataLocation::Path(PathBuf::from(input))
		})
	}

	/// Parse a DataLocation from a string.
	pub fn parse(input: &str) -> Result<Self> {
		Self::parse_with_stdin(input, std::io::stdin().lock())
	}
}

/// Display as a plain URL string for `Url`, as a path for `Path`,
/// and as `<blob len=N>` for in-memory `Blob` values.
impl std::fmt::Display for DataLocation {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			DataLocation::Url(url) => write!(f, "{url}"),
			DataLocation::Path(path) => write!(f, "{}", path.display()),
			DataLocation::Blob(blob) => write!(f, "<blob len={}>", blob.len()),
		}
	}
}

impl Debug for DataLocation {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			DataLocation::Url(url) => write!(f, "Url({url})"),
			DataLocation::Path(path) => write!(f, "Path({})", path.display()),
			DataLocation::Blob(blob) => write!(f, "Blob(len={})", blob.len()),
		}
	}
}

impl TryFrom<&str> for DataLocation {
	type Error = anyhow::Error;
	fn try_from(s: &str) -> Result<Self> {
		DataLocation::parse(s)
	}
}

impl From<&Path> for DataLocation {
	fn from(p: &Path) -> Self {
		DataLocation::Path(p.to_path_buf())
	}
}

impl From<PathBuf> for DataLocation {
	fn from(p: PathBuf) -> Self {
		DataLocation::Path(p)
	}
}

impl From<Url> for DataLocation {
	fn from(url: Url) -> Self {
		DataLocation::Url(url)
	}
}

impl From<Blob> for DataLocation {
	fn from(blob: Blob) -> Self {
		DataLocation::Blob(blob)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::io::Cursor;

	#[rstest]
	#[case("https://example.org/zones/city.kml", "city.kml", "kml")]
	#[case("http://example.org/a/b/Zones.GeoJSON", "Zones.GeoJSON", "geojson")]
	#[case("data/zones.kml", "zones.kml", "kml")]
	#[case("/abs/path/zones.json", "zones.json", "json")]
	fn filename_and_extension(#[case] input: &str, #[case] filename: &str, #[case] extension: &str) {
		let location = DataLocation::try_from(input).unwrap();
		assert_eq!(location.filename().unwrap(), filename);
		assert_eq!(location.extension().unwrap(), extension);
	}

	#[test]
	fn url_without_host_is_a_path() {
		let location = DataLocation::try_from("c:/zones.kml").unwrap();
		assert!(matches!(location, DataLocation::Path(_)));
	}

	#[test]
	fn missing_extension() {
		let location = DataLocation::try_from("https://example.org/zones").unwrap();
		assert!(location.extension().is_err());
	}

	#[test]
	fn stdin_becomes_blob() {
		let location = DataLocation::parse_with_stdin("-", Cursor::new(b"<kml/>".to_vec())).unwrap();
		assert_eq!(location, DataLocation::Blob(Blob::from("<kml/>")));
		assert!(location.filename().is_err());
		assert_eq!(location.to_string(), "<blob len=6>");
	}
}
