use std::fmt;

use super::palette::is_palette_color;
use super::types::{ColorId, Graph, VertexId};

impl Graph {
	/// Paint `vertex` with `color` and refresh every edge's conflict flag.
	///
	/// Unknown vertices and colors outside the palette leave the graph
	/// untouched and return `false`.
	pub fn assign_color(&mut self, vertex: VertexId, color: ColorId) -> bool {
		if !is_palette_color(color) {
			return false;
		}
		let Some(v) = self.vertex_mut(vertex) else {
			return false;
		};
		v.color = Some(color);
		self.refresh_conflicts();
		true
	}

	/// Recompute `has_conflict` on every edge from the current colors.
	pub fn refresh_conflicts(&mut self) {
		let color_of = |id: VertexId| self.vertices.get(id).and_then(|v| v.color);
		let flags: Vec<bool> = self
			.edges
			.iter()
			.map(|e| match (color_of(e.source), color_of(e.target)) {
				(Some(a), Some(b)) => a == b,
				_ => false,
			})
			.collect();
		for (edge, flag) in self.edges.iter_mut().zip(flags) {
			edge.has_conflict = flag;
		}
	}

	/// Clear all colors and conflicts. Topology and positions stay.
	pub fn reset_colors(&mut self) {
		for v in &mut self.vertices {
			v.color = None;
		}
		for e in &mut self.edges {
			e.has_conflict = false;
		}
	}

	/// Result of a finished coloring, judged against `minimum`.
	///
	/// `None` while any vertex is uncolored or any edge conflicts.
	pub fn outcome(&self, minimum: usize) -> Option<Outcome> {
		if !self.all_colored() || self.has_conflicts() {
			return None;
		}
		let used = self.colors_used();
		Some(if used == minimum {
			Outcome::Perfect { colors: used }
		} else {
			Outcome::Suboptimal { used, minimum }
		})
	}
}

/// A complete, conflict-free coloring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
	/// Matched the target.
	Perfect {
		/// Colors used, equal to the target.
		colors: usize,
	},
	/// Valid, but with a different color count than the target.
	Suboptimal {
		/// Distinct colors on the board.
		used: usize,
		/// The round's target.
		minimum: usize,
	},
}

impl Outcome {
	/// Used exactly the target number of colors.
	pub fn is_perfect(&self) -> bool {
		matches!(self, Outcome::Perfect { .. })
	}
}

impl fmt::Display for Outcome {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Outcome::Perfect { colors } => write!(
				f,
				"Congratulations! You used the minimum number of colors ({colors})!"
			),
			Outcome::Suboptimal { used, minimum } => write!(
				f,
				"All vertices colored! You used {used} colors, but the minimum possible is {minimum}."
			),
		}
	}
}
