use leptos::prelude::*;
use web_sys::DragEvent;

use crate::graph::{ColorId, PALETTE};

/// Row of draggable swatches. The swatch being dragged is published in `drag_color`.
#[component]
pub fn Palette(drag_color: RwSignal<Option<ColorId>>) -> impl IntoView {
	let swatches = PALETTE
		.iter()
		.map(|color| {
			let id = color.id;
			let on_dragstart = move |ev: DragEvent| {
				// Firefox won't start a drag without payload
				if let Some(data) = ev.data_transfer() {
					let _ = data.set_data("text/plain", &id.to_string());
				}
				drag_color.set(Some(id));
			};

			view! {
				<div
					class="palette-color"
					class:dragging=move || drag_color.get() == Some(id)
					style=format!("background-color: {};", color.hex)
					title=color.name
					draggable="true"
					on:dragstart=on_dragstart
					on:dragend=move |_| drag_color.set(None)
				/>
			}
		})
		.collect_view();

	view! { <div class="palette">{swatches}</div> }
}
