//! Helpers for `[x_min, y_min, x_max, y_max]` bounding boxes.

/// Smallest box covering both inputs.
#[must_use]
pub fn union_bounds(a: [f64; 4], b: [f64; 4]) -> [f64; 4] {
	[a[0].min(b[0]), a[1].min(b[1]), a[2].max(b[2]), a[3].max(b[3])]
}

/// Folds optional boxes into one, ignoring `None`.
pub fn union_all_bounds(boxes: impl IntoIterator<Item = Option<[f64; 4]>>) -> Option<[f64; 4]> {
	boxes.into_iter().flatten().reduce(union_bounds)
}

/// Inclusive point-in-box test. Used as a cheap pre-check, so the edges count as inside.
#[must_use]
pub fn bounds_contain(bounds: &[f64; 4], x: f64, y: f64) -> bool {
	x >= bounds[0] && x <= bounds[2] && y >= bounds[1] && y <= bounds[3]
}
