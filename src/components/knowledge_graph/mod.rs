mod component;
mod controls;
mod details;
mod refresh;
pub mod render;
pub mod scale;
pub mod state;
pub mod types;

pub use component::KnowledgeGraphCanvas;
pub use controls::{FilterPanel, ZoomControls};
pub use details::{GraphStats, Legend, NodeDetails};
pub use refresh::{DEFAULT_REFRESH_INTERVAL, idle_refresh};
pub use scale::Scale;
pub use state::ViewState;
pub use types::{GraphData, GraphNode, NodeKind, TypeFilter};
