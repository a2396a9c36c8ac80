//! Browser entry point: mounts the graph coloring puzzle.

use graph_coloring::{App, init_logging};

fn main() {
	init_logging();
	leptos::mount::mount_to_body(App);
}
