use leptos::prelude::*;
use log::info;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use web_sys::{HtmlCanvasElement, MouseEvent};

use crate::components::coloring_board::{ColoringBoard, fit_canvas};
use crate::components::palette::Palette;
use crate::graph::{ColorId, GameConfig, Puzzle};

/// Seed from the browser's Math.random, so no OS entropy source is needed.
fn browser_seed() -> u64 {
	(js_sys::Math::random() * (1u64 << 53) as f64) as u64
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let config = StoredValue::new(GameConfig::default());
	let rng = StoredValue::new(SmallRng::seed_from_u64(browser_seed()));

	let puzzle = RwSignal::new(None::<Puzzle>);
	let drag_color = RwSignal::new(None::<ColorId>);
	let board_size = RwSignal::new(None::<(f64, f64)>);
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let (fallback_width, fallback_height) =
		config.with_value(|c| (c.fallback_width, c.fallback_height));

	// Every round is laid out on the board's current size
	let new_puzzle = move || {
		let Some(canvas) = canvas_ref.get_untracked() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (width, height) = fit_canvas(&canvas, (fallback_width, fallback_height));
		board_size.set(Some((width, height)));

		let next = config.with_value(|config| {
			rng.try_update_value(|rng| Puzzle::new(rng, config, width, height))
		});
		if let Some(next) = next {
			info!(
				"New graph with {} vertices, target {} colors",
				next.graph().vertex_count(),
				next.minimum_colors()
			);
			puzzle.set(Some(next));
		}
	};

	// First round starts once the board knows its size
	Effect::new(move |_| {
		if board_size.get().is_some() && puzzle.with_untracked(Option::is_none) {
			new_puzzle();
		}
	});

	let reset = move |_: MouseEvent| {
		puzzle.update(|p| {
			if let Some(p) = p {
				p.reset();
			}
		});
	};

	let colors_used = move || puzzle.with(|p| p.as_ref().map_or(0, Puzzle::colors_used));
	let minimum_colors = move || puzzle.with(|p| p.as_ref().map_or(0, Puzzle::minimum_colors));
	let outcome = move || puzzle.with(|p| p.as_ref().and_then(Puzzle::outcome));
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="container">
				<header>
					<h1>"Graph Coloring Challenge"</h1>
					<p class="subtitle">
						"Drag a color onto a vertex. No two adjacent vertices can share the same color!"
					</p>
				</header>

				<Palette drag_color=drag_color />

				<div class="instructions">
					<p>
						"Drag a color from the palette and drop it on a vertex. Adjacent vertices must have different colors."
					</p>
					<p>
						"When all vertices are colored, you'll see if you used the minimum number of colors!"
					</p>
				</div>

				<div class="controls">
					<div class="colors-used">
						<span>"Colors used:"</span>
						<span class="count">{colors_used}</span>
						<span>"Target:"</span>
						<span class="count">{minimum_colors}</span>
					</div>
					<div class="buttons">
						<button on:click=reset>"Reset"</button>
						<button on:click=move |_| new_puzzle()>"New Graph"</button>
					</div>
				</div>

				{move || {
					outcome()
						.map(|o| {
							view! {
								<div class="outcome" class:perfect=o.is_perfect()>
									{o.to_string()}
								</div>
							}
						})
				}}

				<div class="graph-container">
					<ColoringBoard
						puzzle=puzzle
						drag_color=drag_color
						size=board_size
						canvas_ref=canvas_ref
						fallback_width=fallback_width
						fallback_height=fallback_height
					/>
				</div>

				<div class="footer">
					<p>"Graph coloring is used in scheduling, map-making, and more!"</p>
				</div>
			</div>
		</ErrorBoundary>
	}
}
