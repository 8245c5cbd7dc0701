use leptos::prelude::*;

use super::state::ViewState;
use super::types::{GraphData, NodeKind};

/// Swatch per node kind. The contradiction swatch carries the warning badge.
#[component]
pub fn Legend() -> impl IntoView {
	view! {
		<div class="legend">
			<p class="field-label">"Legend"</p>
			{NodeKind::ALL
				.into_iter()
				.map(|kind| {
					view! {
						<div class="legend-row">
							<span class="swatch" style:background-color=kind.color()>
								{(kind == NodeKind::Contradiction)
									.then(|| view! { <span class="swatch-badge">"!"</span> })}
							</span>
							<span>{kind.plural()}</span>
						</div>
					}
				})
				.collect_view()}
		</div>
	}
}

/// Details card for the selected node; renders nothing without a selection.
#[component]
pub fn NodeDetails(
	#[prop(into)] data: Signal<GraphData>,
	#[prop(into)] state: Signal<ViewState>,
) -> impl IntoView {
	move || {
		let data = data.get();
		let node = state.with(|s| s.selected_node(&data).cloned())?;
		let related: Vec<String> = data.neighbors(&node).map(|n| n.label.clone()).collect();

		Some(view! {
			<div class="card node-details" class:contradiction=node.contradiction>
				<h3>
					"Node Details"
					{node.contradiction.then(|| view! { <span class="alert">"⚠"</span> })}
				</h3>
				<p class="field-label">"Label"</p>
				<p>{node.label.clone()}</p>
				<p class="field-label">"Type"</p>
				<span class="badge" style:background-color=node.kind.color()>
					{node.kind.as_str()}
				</span>
				{node
					.summary
					.clone()
					.map(|summary| {
						view! {
							<p class="field-label">"AI Summary"</p>
							<p class="summary">{summary}</p>
						}
					})}
				{node
					.predicted_action
					.clone()
					.map(|action| {
						view! {
							<p class="field-label">"Predicted Next Action"</p>
							<p class="predicted">{action}</p>
						}
					})}
				<p class="field-label">"Connections"</p>
				<p>{format!("{} links", node.connection_count())}</p>
				<p class="field-label">"Related Nodes"</p>
				<div class="related">
					{related
						.into_iter()
						.map(|label| view! { <span class="badge outline">{label}</span> })
						.collect_view()}
				</div>
			</div>
		})
	}
}

#[component]
pub fn GraphStats(
	#[prop(into)] data: Signal<GraphData>,
	#[prop(into)] state: Signal<ViewState>,
) -> impl IntoView {
	view! {
		<div class="card stats">
			<h3>"Graph Stats"</h3>
			<div class="stat">
				<span>"Total Nodes"</span>
				<span>{move || data.with(|d| d.nodes.len())}</span>
			</div>
			<div class="stat">
				<span>"Total Connections"</span>
				<span>{move || data.with(GraphData::total_connections)}</span>
			</div>
			<div class="stat">
				<span>"Zoom Level"</span>
				<span>{move || format!("{}%", state.with(|s| s.scale.percent()))}</span>
			</div>
		</div>
	}
}
