use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, DragEvent, HtmlCanvasElement, MouseEvent};

use super::render;
use super::state::{BoardState, measured_size};
use crate::graph::{ColorId, Puzzle, VertexId};

/// Size `canvas` to its parent (or `fallback` when the parent has no area)
/// and return that size. The backing store is only touched on a change,
/// since resizing it wipes the drawing.
pub fn fit_canvas(canvas: &HtmlCanvasElement, fallback: (f64, f64)) -> (f64, f64) {
	let parent = canvas
		.parent_element()
		.map(|p| (p.client_width() as f64, p.client_height() as f64));
	let (w, h) = measured_size(parent, fallback);
	if canvas.width() != w as u32 || canvas.height() != h as u32 {
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);
		debug!("Board sized to {}x{}", w, h);
	}
	(w, h)
}

/// Canvas that draws the current puzzle and accepts palette colors dropped
/// onto its vertices.
///
/// The board fits itself to its parent on mount and on window resize, and
/// publishes that size through `size`. Pages that need a fresh measurement
/// (a new graph) call [`fit_canvas`] on the shared `canvas_ref`.
#[component]
pub fn ColoringBoard(
	puzzle: RwSignal<Option<Puzzle>>,
	#[prop(into)] drag_color: Signal<Option<ColorId>>,
	size: RwSignal<Option<(f64, f64)>>,
	canvas_ref: NodeRef<leptos::html::Canvas>,
	#[prop(default = 800.0)] fallback_width: f64,
	#[prop(default = 400.0)] fallback_height: f64,
) -> impl IntoView {
	let fallback = (fallback_width, fallback_height);
	let board = RwSignal::new(BoardState::new(fallback_width, fallback_height));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		size.set(Some(fit_canvas(&canvas, fallback)));

		if resize_cb.borrow().is_some() {
			return;
		}
		let Some(window) = web_sys::window() else {
			warn!("No window, board will not follow resizes");
			return;
		};
		let cb = Closure::<dyn FnMut()>::new(move || {
			size.set(Some(fit_canvas(&canvas, fallback)));
		});
		let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		*resize_cb.borrow_mut() = Some(cb);
	});

	Effect::new(move |_| {
		if let Some((w, h)) = size.get() {
			board.update(|b| b.resize(w, h));
		}
	});

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(ctx) = context_2d(&canvas) else {
			warn!("Canvas 2d context unavailable, skipping draw");
			return;
		};
		board.with(|b| {
			puzzle.with(|p| match p {
				Some(p) => render::render(b, p.graph(), &ctx),
				None => ctx.clear_rect(0.0, 0.0, b.width, b.height),
			})
		});
	});

	let vertex_under = move |ev: &MouseEvent| -> Option<VertexId> {
		let (x, y) = event_position(canvas_ref, ev)?;
		puzzle.with_untracked(|p| {
			p.as_ref()
				.and_then(|p| BoardState::vertex_at_position(p.graph(), x, y))
		})
	};

	let on_dragover = move |ev: DragEvent| {
		// Required for the canvas to accept the drop
		ev.prevent_default();
		let hit = vertex_under(&*ev);
		board.maybe_update(|b| b.set_drop_hover(hit));
	};

	let on_dragleave = move |_: DragEvent| {
		board.maybe_update(|b| b.set_drop_hover(None));
	};

	let on_drop = move |ev: DragEvent| {
		ev.prevent_default();
		board.maybe_update(|b| b.set_drop_hover(None));

		let Some(color) = drag_color.get_untracked() else {
			return;
		};
		let Some(vertex) = vertex_under(&*ev) else {
			return;
		};

		puzzle.update(|p| {
			let Some(p) = p else {
				return;
			};
			debug!("Color {} dropped on vertex {}", color, vertex);
			if let Some(outcome) = p.assign(vertex, color) {
				info!("{}", outcome);
			}
		});
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="coloring-board"
			on:dragover=on_dragover
			on:dragleave=on_dragleave
			on:drop=on_drop
			style="display: block;"
		/>
	}
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas
		.get_context("2d")
		.ok()
		.flatten()
		.and_then(|ctx| ctx.dyn_into().ok())
}

fn event_position(
	canvas_ref: NodeRef<leptos::html::Canvas>,
	ev: &MouseEvent,
) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get_untracked()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}
