use std::collections::HashSet;

/// Dense, 0-based vertex identifier. Doubles as the index into [`Graph::vertices`].
pub type VertexId = usize;

/// Index into the color palette.
pub type ColorId = usize;

/// A positioned vertex. Only `color` changes once the graph exists.
#[derive(Clone, Debug, PartialEq)]
pub struct Vertex {
	/// Dense id, equal to the index in [`Graph::vertices`].
	pub id: VertexId,
	/// Board position in canvas pixels.
	pub x: f64,
	/// See `x`.
	pub y: f64,
	/// Palette index chosen by the player, if any.
	pub color: Option<ColorId>,
}

/// Undirected edge; `source`/`target` order carries no meaning.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge {
	/// One endpoint.
	pub source: VertexId,
	/// The other endpoint.
	pub target: VertexId,
	/// Cached: both endpoints share a color. Kept current by [`Graph::refresh_conflicts`].
	pub has_conflict: bool,
}

impl Edge {
	/// Conflict-free edge.
	pub fn new(source: VertexId, target: VertexId) -> Self {
		Self {
			source,
			target,
			has_conflict: false,
		}
	}

	/// True when this edge joins `a` and `b`, in either orientation.
	pub fn connects(&self, a: VertexId, b: VertexId) -> bool {
		(self.source == a && self.target == b) || (self.source == b && self.target == a)
	}
}

/// A simple undirected graph with a position per vertex.
///
/// Vertex ids equal their position in `vertices`, so lookups are plain
/// indexing. Only the `color` fields and the derived `has_conflict` flags
/// change after construction.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
	/// Indexed by id.
	pub vertices: Vec<Vertex>,
	/// Insertion order: spanning-tree edges first, then extras.
	pub edges: Vec<Edge>,
}

impl Graph {
	/// Number of vertices.
	pub fn vertex_count(&self) -> usize {
		self.vertices.len()
	}

	/// Number of edges.
	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}

	/// O(1) lookup; `None` for unknown ids.
	pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
		self.vertices.get(id)
	}

	/// Mutable counterpart of [`Graph::vertex`].
	pub fn vertex_mut(&mut self, id: VertexId) -> Option<&mut Vertex> {
		self.vertices.get_mut(id)
	}

	/// Orientation-insensitive.
	pub fn contains_edge(&self, a: VertexId, b: VertexId) -> bool {
		self.edges.iter().any(|e| e.connects(a, b))
	}

	/// Neighbor lists indexed by vertex id. Every edge contributes to both endpoints.
	pub fn adjacency(&self) -> Vec<Vec<VertexId>> {
		let mut adjacency = vec![Vec::new(); self.vertices.len()];
		for edge in &self.edges {
			if edge.source < adjacency.len() && edge.target < adjacency.len() {
				adjacency[edge.source].push(edge.target);
				adjacency[edge.target].push(edge.source);
			}
		}
		adjacency
	}

	/// Whether every vertex is reachable from vertex 0. The empty graph counts as connected.
	pub fn is_connected(&self) -> bool {
		if self.vertices.is_empty() {
			return true;
		}
		let adjacency = self.adjacency();
		let mut seen = vec![false; self.vertices.len()];
		let mut stack = vec![0];
		seen[0] = true;
		while let Some(v) = stack.pop() {
			for &n in &adjacency[v] {
				if !seen[n] {
					seen[n] = true;
					stack.push(n);
				}
			}
		}
		seen.into_iter().all(|s| s)
	}

	/// Number of distinct colors currently assigned.
	pub fn colors_used(&self) -> usize {
		self.vertices
			.iter()
			.filter_map(|v| v.color)
			.collect::<HashSet<_>>()
			.len()
	}

	/// Every vertex has a color.
	pub fn all_colored(&self) -> bool {
		self.vertices.iter().all(|v| v.color.is_some())
	}

	/// Any edge joins two same-colored vertices.
	pub fn has_conflicts(&self) -> bool {
		self.edges.iter().any(|e| e.has_conflict)
	}
}

#[cfg(test)]
impl Graph {
	/// Uncolored graph with every vertex at the origin.
	pub(crate) fn from_edges(n: usize, edges: &[(VertexId, VertexId)]) -> Self {
		Self {
			vertices: (0..n)
				.map(|id| Vertex {
					id,
					x: 0.0,
					y: 0.0,
					color: None,
				})
				.collect(),
			edges: edges.iter().map(|&(s, t)| Edge::new(s, t)).collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_contains_edge_either_orientation() {
		let graph = Graph::from_edges(3, &[(0, 1)]);
		assert!(graph.contains_edge(0, 1));
		assert!(graph.contains_edge(1, 0));
		assert!(!graph.contains_edge(1, 2));
	}

	#[test]
	fn test_adjacency_lists_both_endpoints() {
		let graph = Graph::from_edges(4, &[(0, 1), (0, 2), (0, 3)]);
		let adjacency = graph.adjacency();
		assert_eq!(adjacency[0], vec![1, 2, 3]);
		assert_eq!(adjacency[3], vec![0]);
	}

	#[test]
	fn test_is_connected() {
		assert!(Graph::from_edges(0, &[]).is_connected());
		assert!(Graph::from_edges(1, &[]).is_connected());
		assert!(Graph::from_edges(3, &[(0, 1), (2, 1)]).is_connected());
		assert!(!Graph::from_edges(4, &[(0, 1), (2, 3)]).is_connected());
	}

	#[test]
	fn test_colors_used_counts_distinct() {
		let mut graph = Graph::from_edges(4, &[]);
		assert_eq!(graph.colors_used(), 0);
		graph.vertices[0].color = Some(2);
		graph.vertices[1].color = Some(2);
		graph.vertices[3].color = Some(5);
		assert_eq!(graph.colors_used(), 2);
		assert!(!graph.all_colored());
		graph.vertices[2].color = Some(0);
		assert!(graph.all_colored());
	}
}
