use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::{
	BoardState, CONFLICT_COLOR, DROP_HOVER_STROKE, EDGE_COLOR, UNCOLORED_FILL, VERTEX_RADIUS,
	VERTEX_STROKE,
};
use crate::graph::{Graph, palette_color};

pub fn render(state: &BoardState, graph: &Graph, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, state.width, state.height);
	draw_edges(graph, ctx);
	draw_vertices(state, graph, ctx);
}

fn draw_edges(graph: &Graph, ctx: &CanvasRenderingContext2d) {
	for edge in &graph.edges {
		let (Some(source), Some(target)) = (graph.vertex(edge.source), graph.vertex(edge.target))
		else {
			continue;
		};

		let (stroke, width) = if edge.has_conflict {
			(CONFLICT_COLOR, 3.0)
		} else {
			(EDGE_COLOR, 2.0)
		};
		ctx.set_stroke_style_str(stroke);
		ctx.set_line_width(width);
		ctx.begin_path();
		ctx.move_to(source.x, source.y);
		ctx.line_to(target.x, target.y);
		ctx.stroke();
	}
}

fn draw_vertices(state: &BoardState, graph: &Graph, ctx: &CanvasRenderingContext2d) {
	ctx.set_font("bold 12px Arial, sans-serif");
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");

	for vertex in &graph.vertices {
		let fill = vertex
			.color
			.and_then(palette_color)
			.map_or(UNCOLORED_FILL, |c| c.hex);

		ctx.begin_path();
		let _ = ctx.arc(vertex.x, vertex.y, VERTEX_RADIUS, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(fill);
		ctx.fill();

		// Drop target gets a thicker blue ring
		let (stroke, width) = if state.is_drop_target(vertex.id) {
			(DROP_HOVER_STROKE, 4.0)
		} else {
			(VERTEX_STROKE, 2.0)
		};
		ctx.set_stroke_style_str(stroke);
		ctx.set_line_width(width);
		ctx.stroke();

		ctx.set_fill_style_str("black");
		let _ = ctx.fill_text(&(vertex.id + 1).to_string(), vertex.x, vertex.y);
	}
}
