use crate::graph::{Graph, VertexId};

pub const VERTEX_RADIUS: f64 = 20.0;
pub const HIT_RADIUS: f64 = 20.0;

pub const EDGE_COLOR: &str = "#aaa";
pub const CONFLICT_COLOR: &str = "#f44336";
pub const VERTEX_STROKE: &str = "#333";
pub const DROP_HOVER_STROKE: &str = "#2196f3";
pub const UNCOLORED_FILL: &str = "#fff";

/// Parent size when it has area, otherwise `fallback`.
pub fn measured_size(parent: Option<(f64, f64)>, fallback: (f64, f64)) -> (f64, f64) {
	parent
		.filter(|&(w, h)| w > 0.0 && h > 0.0)
		.unwrap_or(fallback)
}

/// Canvas-side view of the board: its size and the vertex under a pending drop.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoardState {
	pub width: f64,
	pub height: f64,
	pub drop_hover: Option<VertexId>,
}

impl BoardState {
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			width,
			height,
			drop_hover: None,
		}
	}

	/// Topmost vertex within `HIT_RADIUS` of `(x, y)`. Later vertices are drawn
	/// on top, so they win when circles overlap.
	pub fn vertex_at_position(graph: &Graph, x: f64, y: f64) -> Option<VertexId> {
		graph
			.vertices
			.iter()
			.rev()
			.find(|v| {
				let (dx, dy) = (v.x - x, v.y - y);
				(dx * dx + dy * dy).sqrt() < HIT_RADIUS
			})
			.map(|v| v.id)
	}

	/// Returns whether the hover target changed, so callers know to redraw.
	pub fn set_drop_hover(&mut self, vertex: Option<VertexId>) -> bool {
		if self.drop_hover == vertex {
			return false;
		}
		self.drop_hover = vertex;
		true
	}

	pub fn is_drop_target(&self, id: VertexId) -> bool {
		self.drop_hover == Some(id)
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::Vertex;

	fn graph_at(points: &[(f64, f64)]) -> Graph {
		Graph {
			vertices: points
				.iter()
				.enumerate()
				.map(|(id, &(x, y))| Vertex {
					id,
					x,
					y,
					color: None,
				})
				.collect(),
			edges: Vec::new(),
		}
	}

	#[test]
	fn test_vertex_at_position() {
		let graph = graph_at(&[(100.0, 100.0), (300.0, 200.0)]);
		assert_eq!(BoardState::vertex_at_position(&graph, 105.0, 95.0), Some(0));
		assert_eq!(BoardState::vertex_at_position(&graph, 300.0, 219.0), Some(1));
		assert_eq!(BoardState::vertex_at_position(&graph, 300.0, 221.0), None);
		assert_eq!(BoardState::vertex_at_position(&graph, 0.0, 0.0), None);
	}

	#[test]
	fn test_overlapping_vertices_pick_topmost() {
		let graph = graph_at(&[(50.0, 50.0), (50.0, 50.0), (55.0, 50.0)]);
		assert_eq!(BoardState::vertex_at_position(&graph, 50.0, 50.0), Some(2));
	}

	#[test]
	fn test_measured_size_uses_parent() {
		assert_eq!(
			measured_size(Some((640.0, 400.0)), (800.0, 400.0)),
			(640.0, 400.0)
		);
	}

	#[test]
	fn test_measured_size_falls_back_without_area() {
		let fallback = (800.0, 400.0);
		assert_eq!(measured_size(None, fallback), fallback);
		assert_eq!(measured_size(Some((0.0, 0.0)), fallback), fallback);
		assert_eq!(measured_size(Some((640.0, 0.0)), fallback), fallback);
		assert_eq!(measured_size(Some((0.0, 400.0)), fallback), fallback);
	}

	#[test]
	fn test_set_drop_hover_reports_changes() {
		let mut state = BoardState::new(800.0, 400.0);
		assert!(state.set_drop_hover(Some(1)));
		assert!(!state.set_drop_hover(Some(1)));
		assert!(state.is_drop_target(1));
		assert!(state.set_drop_hover(None));
		assert!(!state.is_drop_target(1));
	}
}
