use super::scale::Scale;
use super::types::{GraphData, GraphNode, NodeKind, TypeFilter};

pub const NODE_RADIUS: f64 = 30.0;
pub const SELECTED_RADIUS: f64 = 35.0;
/// Drawing-space radius; not scaled with zoom.
pub const HIT_RADIUS: f64 = 30.0;

/// View-owned state handed to the canvas as read-only input. The canvas
/// reports clicks back through a callback instead of mutating this.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
	pub scale: Scale,
	pub type_filter: TypeFilter,
	pub search: String,
	pub show_contradictions: bool,
	/// Id of the selected node, if any.
	pub selected: Option<String>,
	/// Drives the idle refresh timer only.
	pub auto_refresh: bool,
}

impl Default for ViewState {
	fn default() -> Self {
		Self {
			scale: Scale::default(),
			type_filter: TypeFilter::All,
			search: String::new(),
			show_contradictions: true,
			selected: None,
			auto_refresh: true,
		}
	}
}

impl ViewState {
	/// Hidden by the contradiction switch. Applies to both edges and nodes.
	pub fn hides_contradiction(&self, node: &GraphNode) -> bool {
		!self.show_contradictions && node.kind == NodeKind::Contradiction
	}

	pub fn matches_search(&self, node: &GraphNode) -> bool {
		self.search.is_empty() || node.label.to_lowercase().contains(&self.search.to_lowercase())
	}

	/// Whether the node itself is drawn: passes contradiction visibility, the
	/// type filter and the search text.
	pub fn shows_node(&self, node: &GraphNode) -> bool {
		!self.hides_contradiction(node)
			&& self.type_filter.matches(node.kind)
			&& self.matches_search(node)
	}

	pub fn is_selected(&self, node: &GraphNode) -> bool {
		self.selected.as_deref() == Some(node.id.as_str())
	}

	pub fn selected_node<'a>(&self, data: &'a GraphData) -> Option<&'a GraphNode> {
		self.selected.as_deref().and_then(|id| data.find(id))
	}

	/// First node in insertion order within [`HIT_RADIUS`] of the screen point.
	/// Filters are not consulted.
	pub fn node_at_position<'a>(&self, data: &'a GraphData, sx: f64, sy: f64) -> Option<&'a GraphNode> {
		let (gx, gy) = self.scale.screen_to_graph(sx, sy);
		data.nodes.iter().find(|node| {
			let (dx, dy) = (node.x - gx, node.y - gy);
			(dx * dx + dy * dy).sqrt() < HIT_RADIUS
		})
	}

	/// Apply a node-type `<select>` value. Unknown values leave the filter as is.
	pub fn select_type(&mut self, value: &str) -> Result<(), String> {
		self.type_filter = value.parse::<TypeFilter>()?;
		Ok(())
	}

	/// Click transition: select the node under the point or clear selection.
	pub fn click(&mut self, data: &GraphData, sx: f64, sy: f64) {
		self.selected = self.node_at_position(data, sx, sy).map(|n| n.id.clone());
	}
}
