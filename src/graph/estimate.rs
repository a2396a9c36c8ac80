use std::cmp::Reverse;
use std::collections::HashSet;

use super::types::{ColorId, Graph};

/// First-fit coloring in descending degree order (Welsh-Powell).
///
/// The order is computed once up front; ties go to the lower vertex id.
/// Existing vertex colors are ignored. Entry `i` is the color given to vertex `i`.
pub fn greedy_coloring(graph: &Graph) -> Vec<ColorId> {
	let adjacency = graph.adjacency();
	let mut order: Vec<usize> = (0..adjacency.len()).collect();
	order.sort_by_key(|&v| Reverse(adjacency[v].len()));

	let mut colors: Vec<Option<ColorId>> = vec![None; adjacency.len()];
	for v in order {
		let taken: HashSet<ColorId> = adjacency[v].iter().filter_map(|&n| colors[n]).collect();
		colors[v] = (0..).find(|c| !taken.contains(c));
	}
	colors.into_iter().map(|c| c.unwrap_or_default()).collect()
}

/// Number of colors the greedy coloring needs. An upper bound on the
/// chromatic number, used as the round's target. Zero for an empty graph.
pub fn estimate_minimum_colors(graph: &Graph) -> usize {
	greedy_coloring(graph)
		.into_iter()
		.max()
		.map_or(0, |max| max + 1)
}
