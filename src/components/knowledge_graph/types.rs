use std::fmt;
use std::str::FromStr;

/// Kind of entity a node stands for. Drives fill color and legend text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
	Person,
	Topic,
	Document,
	Action,
	Concept,
	Contradiction,
}

impl NodeKind {
	pub const ALL: [NodeKind; 6] = [
		NodeKind::Person,
		NodeKind::Topic,
		NodeKind::Document,
		NodeKind::Action,
		NodeKind::Concept,
		NodeKind::Contradiction,
	];

	pub fn as_str(self) -> &'static str {
		match self {
			NodeKind::Person => "person",
			NodeKind::Topic => "topic",
			NodeKind::Document => "document",
			NodeKind::Action => "action",
			NodeKind::Concept => "concept",
			NodeKind::Contradiction => "contradiction",
		}
	}

	/// Fill color used on the canvas, the legend and the details badge.
	pub fn color(self) -> &'static str {
		match self {
			NodeKind::Person => "#3B82F6",
			NodeKind::Topic => "#10B981",
			NodeKind::Document => "#F59E0B",
			NodeKind::Action => "#EF4444",
			NodeKind::Concept => "#8B5CF6",
			NodeKind::Contradiction => "#DC2626",
		}
	}

	/// Plural name shown in the legend.
	pub fn plural(self) -> &'static str {
		match self {
			NodeKind::Person => "People",
			NodeKind::Topic => "Topics",
			NodeKind::Document => "Documents",
			NodeKind::Action => "Actions",
			NodeKind::Concept => "Concepts",
			NodeKind::Contradiction => "Contradictions",
		}
	}
}

impl fmt::Display for NodeKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Node-type selector value. Contradictions are not selectable here; their
/// visibility is governed by the separate show-contradictions switch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TypeFilter {
	#[default]
	All,
	Person,
	Topic,
	Document,
	Action,
	Concept,
}

impl TypeFilter {
	pub const OPTIONS: [TypeFilter; 6] = [
		TypeFilter::All,
		TypeFilter::Person,
		TypeFilter::Topic,
		TypeFilter::Document,
		TypeFilter::Action,
		TypeFilter::Concept,
	];

	pub fn matches(self, kind: NodeKind) -> bool {
		match self {
			TypeFilter::All => true,
			TypeFilter::Person => kind == NodeKind::Person,
			TypeFilter::Topic => kind == NodeKind::Topic,
			TypeFilter::Document => kind == NodeKind::Document,
			TypeFilter::Action => kind == NodeKind::Action,
			TypeFilter::Concept => kind == NodeKind::Concept,
		}
	}

	/// Value attribute used by the `<select>` element.
	pub fn as_str(self) -> &'static str {
		match self {
			TypeFilter::All => "all",
			TypeFilter::Person => "person",
			TypeFilter::Topic => "topic",
			TypeFilter::Document => "document",
			TypeFilter::Action => "action",
			TypeFilter::Concept => "concept",
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			TypeFilter::All => "All Types",
			TypeFilter::Person => "People",
			TypeFilter::Topic => "Topics",
			TypeFilter::Document => "Documents",
			TypeFilter::Action => "Actions",
			TypeFilter::Concept => "Concepts",
		}
	}
}

impl FromStr for TypeFilter {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		TypeFilter::OPTIONS
			.into_iter()
			.find(|f| f.as_str() == s)
			.ok_or_else(|| format!("unknown node type filter: {s}"))
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	pub id: String,
	pub label: String,
	pub kind: NodeKind,
	pub x: f64,
	pub y: f64,
	/// Outgoing neighbor ids. Ids without a matching node are ignored.
	pub connections: Vec<String>,
	pub contradiction: bool,
	pub summary: Option<String>,
	pub predicted_action: Option<String>,
}

impl GraphNode {
	pub fn new(id: &str, label: &str, kind: NodeKind, x: f64, y: f64, connections: &[&str]) -> Self {
		Self {
			id: id.to_string(),
			label: label.to_string(),
			kind,
			x,
			y,
			connections: connections.iter().map(|c| c.to_string()).collect(),
			contradiction: false,
			summary: None,
			predicted_action: None,
		}
	}

	pub fn flagged(mut self) -> Self {
		self.contradiction = true;
		self
	}

	pub fn with_summary(mut self, summary: &str) -> Self {
		self.summary = Some(summary.to_string());
		self
	}

	pub fn with_predicted_action(mut self, action: &str) -> Self {
		self.predicted_action = Some(action.to_string());
		self
	}

	pub fn connection_count(&self) -> usize {
		self.connections.len()
	}
}

/// Fixed node collection, in insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
}

impl GraphData {
	pub fn new(nodes: Vec<GraphNode>) -> Self {
		Self { nodes }
	}

	pub fn find(&self, id: &str) -> Option<&GraphNode> {
		self.nodes.iter().find(|n| n.id == id)
	}

	/// Resolved neighbors of `node` in connection order; dangling ids are skipped.
	pub fn neighbors<'a>(&'a self, node: &'a GraphNode) -> impl Iterator<Item = &'a GraphNode> + 'a {
		node.connections.iter().filter_map(|id| self.find(id))
	}

	pub fn total_connections(&self) -> usize {
		self.nodes.iter().map(GraphNode::connection_count).sum()
	}
}
