use std::ops::RangeInclusive;

/// Knobs for generating a round.
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
	/// Vertex count is drawn uniformly from this range for every new graph.
	pub vertex_range: RangeInclusive<usize>,
	/// Keeps vertices this far from the board's edges.
	pub padding: f64,
	/// Board width used when the canvas parent has no measurable size.
	pub fallback_width: f64,
	/// Board height used when the canvas parent has no measurable size.
	pub fallback_height: f64,
}

impl Default for GameConfig {
	fn default() -> Self {
		Self {
			vertex_range: 3..=6,
			padding: 50.0,
			fallback_width: 800.0,
			fallback_height: 400.0,
		}
	}
}
