use std::time::Duration;

use leptos::prelude::*;
use log::{debug, trace};
use web_sys::{HtmlCanvasElement, MouseEvent};

use super::refresh::{DEFAULT_REFRESH_INTERVAL, idle_refresh};
use super::render;
use super::state::ViewState;
use super::types::GraphData;

/// Canvas view of the knowledge graph.
///
/// Redraws everything whenever `data` or `state` changes. Clicks are resolved
/// to a node id (or `None` for empty space) and reported through `on_select`;
/// the host owns the state and decides what to do with it.
///
/// While `state.auto_refresh` is set an idle timer ticks every
/// `refresh_interval`. The tick changes nothing and triggers no redraw; the
/// timer is cleared when auto-refresh is switched off or the view unmounts.
#[component]
pub fn KnowledgeGraphCanvas(
	#[prop(into)] data: Signal<GraphData>,
	#[prop(into)] state: Signal<ViewState>,
	#[prop(into)] on_select: Callback<Option<String>>,
	#[prop(default = DEFAULT_REFRESH_INTERVAL)] refresh_interval: Duration,
	#[prop(default = "600px")] height: &'static str,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

	Effect::new(move |_| {
		let canvas = canvas_ref.get();
		let drawn = data.with(|data| state.with(|state| render::draw_frame(canvas.as_ref(), data, state)));
		if let Err(e) = drawn {
			debug!("Skipping graph render: {e}");
		}
	});

	let auto_refresh = Memo::new(move |_| state.with(|s| s.auto_refresh));
	idle_refresh(auto_refresh.into(), refresh_interval, || trace!("Graph refresh tick"));

	let on_click = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get_untracked() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);
		let hit = data.with_untracked(|data| {
			state.with_untracked(|state| state.node_at_position(data, x, y).map(|n| n.id.clone()))
		});
		debug!("Canvas click at ({x:.0}, {y:.0}) -> {hit:?}");
		on_select.run(hit);
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="knowledge-graph-canvas"
			on:click=on_click
			style=format!("display: block; width: 100%; height: {height}; cursor: pointer;")
		/>
	}
}
