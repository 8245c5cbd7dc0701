use leptos::prelude::*;
use log::debug;

use crate::components::knowledge_graph::{
	FilterPanel, GraphData, GraphNode, GraphStats, KnowledgeGraphCanvas, Legend, NodeDetails,
	NodeKind, ViewState, ZoomControls,
};

/// The fixed entity set shown on the knowledge graph page.
pub fn knowledge_graph_data() -> GraphData {
	GraphData::new(vec![
		GraphNode::new("1", "Q4 Strategy", NodeKind::Topic, 300.0, 200.0, &["2", "3", "4", "9"])
			.with_summary(
				"Strategic planning for Q4 with focus on product launch and market expansion",
			)
			.with_predicted_action("Schedule stakeholder review meeting"),
		GraphNode::new("2", "John Doe", NodeKind::Person, 200.0, 100.0, &["1", "5"]),
		GraphNode::new("3", "Product Launch", NodeKind::Action, 400.0, 100.0, &["1", "6"])
			.with_predicted_action("Finalize launch timeline and marketing plan"),
		GraphNode::new("4", "Market Analysis", NodeKind::Document, 300.0, 300.0, &["1", "7", "9"]),
		GraphNode::new("5", "Team Meeting", NodeKind::Topic, 100.0, 200.0, &["2"]),
		GraphNode::new("6", "Revenue Goals", NodeKind::Concept, 500.0, 200.0, &["3", "9"]),
		GraphNode::new("7", "Competitor Research", NodeKind::Concept, 400.0, 400.0, &["4"]),
		GraphNode::new("8", "Sarah Smith", NodeKind::Person, 200.0, 300.0, &["1"]),
		GraphNode::new(
			"9",
			"Budget Contradiction",
			NodeKind::Contradiction,
			400.0,
			250.0,
			&["1", "4", "6"],
		)
		.flagged()
		.with_summary(
			"Q4 Strategy mentions $500K budget, but Market Analysis shows $450K allocation. \
			 Revenue Goals based on $500K assumption.",
		),
	])
}

/// Knowledge graph page: canvas on the left, filters and read-outs on the right.
#[component]
pub fn Home() -> impl IntoView {
	let data = Signal::stored(knowledge_graph_data());
	let state = RwSignal::new(ViewState::default());
	let on_select = move |id: Option<String>| {
		debug!("Selected node: {id:?}");
		state.update(|s| s.selected = id);
	};

	view! {
		<div class="graph-page">
			<header>
				<h2>"Knowledge Graph"</h2>
				<p class="subtitle">
					"Interactive visualization of entities, relationships, and concepts"
				</p>
			</header>
			<div class="graph-layout">
				<section class="card graph-card">
					<div class="graph-card-header">
						<div>
							<h3>"Network Visualization"</h3>
							<p class="subtitle">"Click on nodes to view details"</p>
						</div>
						<ZoomControls state=state />
					</div>
					<KnowledgeGraphCanvas data=data state=state on_select=on_select />
				</section>
				<aside class="sidebar">
					<FilterPanel state=state />
					<Legend />
					<NodeDetails data=data state=state />
					<GraphStats data=data state=state />
				</aside>
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;
	use crate::components::knowledge_graph::TypeFilter;

	#[test]
	fn node_ids_are_unique() {
		let data = knowledge_graph_data();
		let ids: HashSet<_> = data.nodes.iter().map(|n| n.id.as_str()).collect();
		assert_eq!(ids.len(), data.nodes.len());
	}

	#[test]
	fn every_connection_resolves() {
		let data = knowledge_graph_data();
		for node in &data.nodes {
			assert_eq!(data.neighbors(node).count(), node.connection_count(), "{}", node.id);
		}
	}

	#[test]
	fn stats_match_the_fixed_set() {
		let data = knowledge_graph_data();
		assert_eq!(data.nodes.len(), 9);
		assert_eq!(data.total_connections(), 19);
		assert_eq!(ViewState::default().scale.percent(), 100);
	}

	#[test]
	fn only_the_contradiction_node_is_flagged() {
		let data = knowledge_graph_data();
		let flagged: Vec<_> = data.nodes.iter().filter(|n| n.contradiction).map(|n| n.id.as_str()).collect();
		assert_eq!(flagged, vec!["9"]);
	}

	#[test]
	fn strategy_node_is_selected_by_click() {
		let data = knowledge_graph_data();
		let mut state = ViewState::default();
		state.click(&data, 310.0, 205.0);
		let node = state.selected_node(&data).unwrap();
		assert_eq!(node.label, "Q4 Strategy");
		let related: Vec<_> = data.neighbors(node).map(|n| n.label.as_str()).collect();
		assert_eq!(
			related,
			vec!["John Doe", "Product Launch", "Market Analysis", "Budget Contradiction"]
		);
	}

	#[test]
	fn person_filter_shows_two_people() {
		let data = knowledge_graph_data();
		let state = ViewState {
			type_filter: TypeFilter::Person,
			..Default::default()
		};
		let shown: Vec<_> = data.nodes.iter().filter(|n| state.shows_node(n)).map(|n| n.label.as_str()).collect();
		assert_eq!(shown, vec!["John Doe", "Sarah Smith"]);
	}
}
