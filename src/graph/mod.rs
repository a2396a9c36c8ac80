//! Puzzle core: random connected graphs, the greedy color target, and the
//! player's coloring actions. Nothing here touches the browser.

mod coloring;
mod config;
mod estimate;
mod generate;
mod palette;
mod puzzle;
mod types;

pub use coloring::Outcome;
pub use config::GameConfig;
pub use estimate::{estimate_minimum_colors, greedy_coloring};
pub use generate::{MAX_SAMPLES_PER_EDGE, extra_edge_budget, generate, random_vertex_count};
pub use palette::{PALETTE, PaletteColor, is_palette_color, palette_color};
pub use puzzle::Puzzle;
pub use types::{ColorId, Edge, Graph, Vertex, VertexId};
