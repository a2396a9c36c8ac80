use log::debug;
use rand::Rng;

use super::coloring::Outcome;
use super::config::GameConfig;
use super::estimate::estimate_minimum_colors;
use super::generate::{generate, random_vertex_count};
use super::types::{ColorId, Graph, VertexId};

/// One round: a generated graph and the color target computed for it.
#[derive(Clone, Debug, PartialEq)]
pub struct Puzzle {
	graph: Graph,
	minimum_colors: usize,
}

impl Puzzle {
	/// Generate a fresh graph sized to a `width` x `height` board.
	pub fn new<R: Rng + ?Sized>(rng: &mut R, config: &GameConfig, width: f64, height: f64) -> Self {
		let vertex_count = random_vertex_count(rng, config.vertex_range.clone());
		Self::from_graph(generate(rng, vertex_count, width, height, config.padding))
	}

	/// Wrap an existing graph and compute its target.
	pub fn from_graph(graph: Graph) -> Self {
		let minimum_colors = estimate_minimum_colors(&graph);
		debug!(
			"New puzzle: {} vertices, {} edges, target {} colors",
			graph.vertex_count(),
			graph.edge_count(),
			minimum_colors
		);
		Self {
			graph,
			minimum_colors,
		}
	}

	/// Current board, including the player's colors.
	pub fn graph(&self) -> &Graph {
		&self.graph
	}

	/// Target from the greedy estimate; fixed for the round.
	pub fn minimum_colors(&self) -> usize {
		self.minimum_colors
	}

	/// Distinct colors currently on the board.
	pub fn colors_used(&self) -> usize {
		self.graph.colors_used()
	}

	/// Apply a drop. Returns the outcome if this completed the coloring.
	pub fn assign(&mut self, vertex: VertexId, color: ColorId) -> Option<Outcome> {
		if !self.graph.assign_color(vertex, color) {
			return None;
		}
		self.outcome()
	}

	/// Clear the player's colors, keeping the graph.
	pub fn reset(&mut self) {
		self.graph.reset_colors();
	}

	/// Win-check against this round's target.
	pub fn outcome(&self) -> Option<Outcome> {
		self.graph.outcome(self.minimum_colors)
	}
}
