use std::ops::RangeInclusive;

use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::types::{Edge, Graph, Vertex, VertexId};

/// Rejection-sampling draws allowed per extra edge before switching to
/// picking directly from the remaining vertex pairs.
pub const MAX_SAMPLES_PER_EDGE: usize = 64;

/// Uniform vertex count in `range`, or its start if the range is empty.
pub fn random_vertex_count<R: Rng + ?Sized>(
	rng: &mut R,
	range: RangeInclusive<usize>,
) -> usize {
	if range.is_empty() {
		return *range.start();
	}
	rng.random_range(range)
}

/// Extra edges added on top of the spanning tree: `floor(0.5 * (n - 1))`.
pub fn extra_edge_budget(vertex_count: usize) -> usize {
	vertex_count.saturating_sub(1) / 2
}

/// Build a random connected graph with `vertex_count` vertices placed inside
/// `[padding, width - padding] x [padding, height - padding]`.
///
/// Every vertex `i > 0` first attaches to a random earlier vertex, which
/// yields a random recursive tree rooted at 0. Then `extra_edge_budget`
/// further edges are added between random non-adjacent pairs. Vertices may
/// land on the same spot.
pub fn generate<R: Rng + ?Sized>(
	rng: &mut R,
	vertex_count: usize,
	width: f64,
	height: f64,
	padding: f64,
) -> Graph {
	let vertices: Vec<Vertex> = (0..vertex_count)
		.map(|id| Vertex {
			id,
			x: coordinate(rng, width, padding),
			y: coordinate(rng, height, padding),
			color: None,
		})
		.collect();

	let mut graph = Graph {
		vertices,
		edges: (1..vertex_count)
			.map(|target| Edge::new(rng.random_range(0..target), target))
			.collect(),
	};

	add_extra_edges(rng, &mut graph, extra_edge_budget(vertex_count));
	debug_assert!(graph.is_connected());

	debug!(
		"Generated graph: {} vertices, {} edges",
		graph.vertex_count(),
		graph.edge_count()
	);
	graph
}

fn coordinate<R: Rng + ?Sized>(rng: &mut R, extent: f64, padding: f64) -> f64 {
	let span = extent - 2.0 * padding;
	if span <= 0.0 {
		return extent / 2.0;
	}
	padding + rng.random::<f64>() * span
}

fn add_extra_edges<R: Rng + ?Sized>(rng: &mut R, graph: &mut Graph, extra: usize) {
	let n = graph.vertex_count();
	let max_edges = n * n.saturating_sub(1) / 2;
	let extra = extra.min(max_edges.saturating_sub(graph.edge_count()));

	let mut added = 0;
	let mut samples = 0;
	while added < extra {
		if samples >= MAX_SAMPLES_PER_EDGE * extra {
			debug!("Edge sampling hit its cap, choosing from remaining pairs");
			let missing: Vec<(VertexId, VertexId)> = (0..n)
				.flat_map(|a| (a + 1..n).map(move |b| (a, b)))
				.filter(|&(a, b)| !graph.contains_edge(a, b))
				.collect();
			let Some(&(source, target)) = missing.choose(rng) else {
				break;
			};
			graph.edges.push(Edge::new(source, target));
			added += 1;
			continue;
		}

		samples += 1;
		let (source, target) = (rng.random_range(0..n), rng.random_range(0..n));
		if source == target || graph.contains_edge(source, target) {
			continue;
		}
		graph.edges.push(Edge::new(source, target));
		added += 1;
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use rand::rngs::StdRng;
	use rand::{RngCore, SeedableRng};

	use super::*;

	fn unordered(edge: &Edge) -> (VertexId, VertexId) {
		(edge.source.min(edge.target), edge.source.max(edge.target))
	}

	#[test]
	fn test_generated_graphs_are_simple_and_connected() {
		for seed in 0..500 {
			let mut rng = StdRng::seed_from_u64(seed);
			let n = random_vertex_count(&mut rng, 1..=12);
			let graph = generate(&mut rng, n, 800.0, 400.0, 50.0);

			assert_eq!(graph.vertex_count(), n);
			assert!(graph.is_connected(), "seed {seed}");
			assert_eq!(graph.edge_count(), (n - 1) + (n - 1) / 2, "seed {seed}");

			let mut pairs = HashSet::new();
			for edge in &graph.edges {
				assert_ne!(edge.source, edge.target, "self-loop for seed {seed}");
				assert!(edge.source < n && edge.target < n);
				assert!(pairs.insert(unordered(edge)), "duplicate edge for seed {seed}");
				assert!(!edge.has_conflict);
			}
		}
	}

	#[test]
	fn test_tree_phase_attaches_to_earlier_vertex() {
		let mut rng = StdRng::seed_from_u64(7);
		let graph = generate(&mut rng, 6, 800.0, 400.0, 50.0);
		for (i, edge) in graph.edges.iter().take(5).enumerate() {
			assert_eq!(edge.target, i + 1);
			assert!(edge.source < edge.target);
		}
	}

	#[test]
	fn test_vertices_inside_padded_area() {
		let mut rng = StdRng::seed_from_u64(42);
		for _ in 0..50 {
			let graph = generate(&mut rng, 6, 640.0, 400.0, 50.0);
			for (i, v) in graph.vertices.iter().enumerate() {
				assert_eq!(v.id, i);
				assert!(v.color.is_none());
				assert!((50.0..=590.0).contains(&v.x));
				assert!((50.0..=350.0).contains(&v.y));
			}
		}
	}

	#[test]
	fn test_single_vertex_has_no_edges() {
		let mut rng = StdRng::seed_from_u64(1);
		let graph = generate(&mut rng, 1, 800.0, 400.0, 50.0);
		assert_eq!(graph.vertex_count(), 1);
		assert_eq!(graph.edge_count(), 0);
		assert_eq!(extra_edge_budget(1), 0);
	}

	#[test]
	fn test_empty_graph() {
		let mut rng = StdRng::seed_from_u64(1);
		let graph = generate(&mut rng, 0, 800.0, 400.0, 50.0);
		assert_eq!(graph, Graph::default());
	}

	#[test]
	fn test_small_area_centers_vertices() {
		let mut rng = StdRng::seed_from_u64(3);
		let graph = generate(&mut rng, 3, 60.0, 80.0, 50.0);
		for v in &graph.vertices {
			assert_eq!((v.x, v.y), (30.0, 40.0));
		}
	}

	#[test]
	fn test_large_graph_terminates_with_exact_budget() {
		let mut rng = StdRng::seed_from_u64(99);
		let graph = generate(&mut rng, 200, 2000.0, 2000.0, 10.0);
		assert_eq!(graph.edge_count(), 199 + 99);
		assert!(graph.is_connected());
	}

	#[test]
	fn test_extra_edges_fill_remaining_pairs() {
		let mut rng = StdRng::seed_from_u64(5);
		// Triangle minus one edge: only (0, 2) can still be added.
		let mut graph = Graph::from_edges(3, &[(0, 1), (1, 2)]);
		add_extra_edges(&mut rng, &mut graph, 1);
		assert!(graph.contains_edge(0, 2));
		assert_eq!(graph.edge_count(), 3);

		// Complete graph: nothing left to add.
		add_extra_edges(&mut rng, &mut graph, 2);
		assert_eq!(graph.edge_count(), 3);
	}

	#[test]
	fn test_accepts_trait_object_rng() {
		let mut seeded = StdRng::seed_from_u64(21);
		let rng: &mut dyn RngCore = &mut seeded;
		let n = random_vertex_count(rng, 3..=6);
		let graph = generate(rng, n, 800.0, 400.0, 50.0);
		assert_eq!(graph.vertex_count(), n);
		assert!(graph.is_connected());
		assert_eq!(graph.edge_count(), (n - 1) + extra_edge_budget(n));
	}

	#[test]
	fn test_random_vertex_count_in_range() {
		let mut rng = StdRng::seed_from_u64(11);
		let mut seen = HashSet::new();
		for _ in 0..200 {
			let n = random_vertex_count(&mut rng, 3..=6);
			assert!((3..=6).contains(&n));
			seen.insert(n);
		}
		assert_eq!(seen.len(), 4);
		#[allow(clippy::reversed_empty_ranges)]
		let empty = 5..=4;
		assert_eq!(random_vertex_count(&mut rng, empty), 5);
	}
}
