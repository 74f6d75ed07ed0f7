/// Property keys checked, in order, for a zone's display name.
pub const DEFAULT_NAME_PROPERTIES: &[&str] = &["name", "Name", "zone_name", "title", "Title"];

/// Name used when none of the candidate properties holds a label.
pub fn fallback_zone_name(index: usize) -> String {
	format!("Zone #{}", index + 1)
}
