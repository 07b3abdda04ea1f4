/// Title given to a freshly opened graph.
pub const DEFAULT_GRAPH_NAME: &str = "Untitled graph";

/// Distance in pixels within which a point counts as touching an edge segment.
pub const EDGE_HIT_TOLERANCE: f64 = 3.0;

/// Per-document settings for a [`GraphStore`](super::GraphStore).
#[derive(Clone, Debug, PartialEq)]
pub struct StoreOptions {
	/// Initial document name.
	pub name: String,
	/// Hit-test tolerance used by `edge_drawable_at`.
	pub edge_hit_tolerance: f64,
}

impl Default for StoreOptions {
	fn default() -> Self {
		Self {
			name: DEFAULT_GRAPH_NAME.to_owned(),
			edge_hit_tolerance: EDGE_HIT_TOLERANCE,
		}
	}
}
