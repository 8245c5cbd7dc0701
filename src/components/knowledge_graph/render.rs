use std::f64::consts::PI;

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::state::{NODE_RADIUS, SELECTED_RADIUS, ViewState};
use super::types::{GraphData, GraphNode};

const EDGE_COLOR: &str = "#D1D5DB";
const CONTRADICTION_EDGE_COLOR: &str = "#DC2626";
const OUTLINE_COLOR: &str = "#1F2937";
const LABEL_COLOR: &str = "#1F2937";
const BADGE_FILL: &str = "#FEF3C7";
const BADGE_ACCENT: &str = "#F59E0B";

pub const EDGE_WIDTH: f64 = 2.0;
pub const CONTRADICTION_EDGE_WIDTH: f64 = 2.5;
pub const CONTRADICTION_DASH: [f64; 2] = [5.0, 5.0];
pub const LABEL_OFFSET: f64 = 50.0;
pub const BADGE_OFFSET: f64 = 20.0;
pub const BADGE_RADIUS: f64 = 8.0;

/// Why a frame could not get a drawing context.
#[derive(Debug, Error)]
pub enum SurfaceError {
	#[error("canvas element is not mounted")]
	NotMounted,
	#[error("2d context is not supported by this canvas")]
	Unsupported,
	#[error("2d context lookup failed: {0}")]
	Lookup(String),
}

/// Stroke settings for lines and outlines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke<'a> {
	pub color: &'a str,
	pub width: f64,
}

/// The 2D primitives the graph is drawn with. Mirrors the subset of the
/// canvas API the renderer needs.
pub trait Surface {
	/// Surface size in device pixels.
	fn size(&self) -> (f64, f64);
	fn clear(&mut self);
	fn save(&mut self);
	fn restore(&mut self);
	fn scale(&mut self, k: f64);
	/// Empty slice means solid lines.
	fn set_line_dash(&mut self, segments: &[f64]);
	fn line(&mut self, from: (f64, f64), to: (f64, f64), stroke: Stroke<'_>);
	fn circle(&mut self, center: (f64, f64), radius: f64, fill: &str, outline: Option<Stroke<'_>>);
	/// Text horizontally centered on `at`.
	fn text(&mut self, text: &str, at: (f64, f64), font: &str, color: &str);
}

/// Draw the whole graph from scratch.
pub fn render(data: &GraphData, view: &ViewState, surface: &mut impl Surface) {
	surface.clear();
	surface.save();
	surface.scale(view.scale.k());
	draw_edges(data, view, surface);
	surface.set_line_dash(&[]);
	draw_nodes(data, view, surface);
	surface.restore();
}

/// Edges respect only the contradiction switch, at either end, so lines may
/// run to nodes that the type filter or search hides.
fn draw_edges(data: &GraphData, view: &ViewState, surface: &mut impl Surface) {
	for node in &data.nodes {
		if view.hides_contradiction(node) {
			continue;
		}
		for target in data.neighbors(node) {
			if view.hides_contradiction(target) {
				continue;
			}
			let stroke = if node.contradiction || target.contradiction {
				surface.set_line_dash(&CONTRADICTION_DASH);
				Stroke {
					color: CONTRADICTION_EDGE_COLOR,
					width: CONTRADICTION_EDGE_WIDTH,
				}
			} else {
				surface.set_line_dash(&[]);
				Stroke {
					color: EDGE_COLOR,
					width: EDGE_WIDTH,
				}
			};
			surface.line((node.x, node.y), (target.x, target.y), stroke);
		}
	}
}

fn draw_nodes(data: &GraphData, view: &ViewState, surface: &mut impl Surface) {
	for node in data.nodes.iter().filter(|n| view.shows_node(n)) {
		draw_node(node, view.is_selected(node), surface);
	}
}

fn draw_node(node: &GraphNode, selected: bool, surface: &mut impl Surface) {
	let (x, y) = (node.x, node.y);
	let (radius, outline) = if selected {
		(
			SELECTED_RADIUS,
			Some(Stroke {
				color: OUTLINE_COLOR,
				width: 3.0,
			}),
		)
	} else {
		(NODE_RADIUS, None)
	};
	surface.circle((x, y), radius, node.kind.color(), outline);

	if node.contradiction {
		let (bx, by) = (x + BADGE_OFFSET, y - BADGE_OFFSET);
		surface.circle(
			(bx, by),
			BADGE_RADIUS,
			BADGE_FILL,
			Some(Stroke {
				color: BADGE_ACCENT,
				width: 2.0,
			}),
		);
		surface.text("!", (bx, by + 4.0), "bold 10px sans-serif", BADGE_ACCENT);
	}

	let font = if node.contradiction {
		"bold 12px sans-serif"
	} else {
		"12px sans-serif"
	};
	surface.text(&node.label, (x, y + LABEL_OFFSET), font, LABEL_COLOR);
}

/// One full redraw onto `canvas`, or the reason nothing was drawn.
pub fn draw_frame(
	canvas: Option<&HtmlCanvasElement>,
	data: &GraphData,
	view: &ViewState,
) -> Result<(), SurfaceError> {
	let mut ctx = context_2d(canvas.ok_or(SurfaceError::NotMounted)?)?;
	render(data, view, &mut ctx);
	Ok(())
}

/// Resize the backing store to the element's layout size and hand back its
/// 2d context.
pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, SurfaceError> {
	canvas.set_width(canvas.offset_width().max(0) as u32);
	canvas.set_height(canvas.offset_height().max(0) as u32);
	canvas
		.get_context("2d")
		.map_err(|e| SurfaceError::Lookup(format!("{e:?}")))?
		.ok_or(SurfaceError::Unsupported)?
		.dyn_into::<CanvasRenderingContext2d>()
		.map_err(|_| SurfaceError::Unsupported)
}

impl Surface for CanvasRenderingContext2d {
	fn size(&self) -> (f64, f64) {
		self.canvas()
			.map(|c| (c.width() as f64, c.height() as f64))
			.unwrap_or_default()
	}

	fn clear(&mut self) {
		let (w, h) = self.size();
		self.clear_rect(0.0, 0.0, w, h);
	}

	fn save(&mut self) {
		CanvasRenderingContext2d::save(self);
	}

	fn restore(&mut self) {
		CanvasRenderingContext2d::restore(self);
	}

	fn scale(&mut self, k: f64) {
		let _ = CanvasRenderingContext2d::scale(self, k, k);
	}

	fn set_line_dash(&mut self, segments: &[f64]) {
		let dash: js_sys::Array = segments.iter().map(|s| JsValue::from_f64(*s)).collect();
		let _ = CanvasRenderingContext2d::set_line_dash(self, &dash);
	}

	fn line(&mut self, from: (f64, f64), to: (f64, f64), stroke: Stroke<'_>) {
		self.set_stroke_style_str(stroke.color);
		self.set_line_width(stroke.width);
		self.begin_path();
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.stroke();
	}

	fn circle(&mut self, center: (f64, f64), radius: f64, fill: &str, outline: Option<Stroke<'_>>) {
		self.begin_path();
		let _ = self.arc(center.0, center.1, radius, 0.0, 2.0 * PI);
		self.set_fill_style_str(fill);
		self.fill();
		if let Some(stroke) = outline {
			self.set_stroke_style_str(stroke.color);
			self.set_line_width(stroke.width);
			self.stroke();
		}
	}

	fn text(&mut self, text: &str, at: (f64, f64), font: &str, color: &str) {
		self.set_fill_style_str(color);
		self.set_font(font);
		self.set_text_align("center");
		let _ = self.fill_text(text, at.0, at.1);
	}
}


#[cfg(test)]
mod tests {
	use super::recording::{Op, RecordingSurface};
	use super::*;
	use crate::components::knowledge_graph::scale::Scale;
	use crate::components::knowledge_graph::types::{NodeKind, TypeFilter};

	fn data() -> GraphData {
		GraphData::new(vec![
			GraphNode::new("1", "Q4 Strategy", NodeKind::Topic, 300.0, 200.0, &["2", "9"]),
			GraphNode::new("2", "John Doe", NodeKind::Person, 200.0, 100.0, &["1", "missing"]),
			GraphNode::new("9", "Budget Contradiction", NodeKind::Contradiction, 400.0, 250.0, &["1"])
				.flagged(),
		])
	}

	fn draw(data: &GraphData, view: &ViewState) -> RecordingSurface {
		let mut surface = RecordingSurface::default();
		render(data, view, &mut surface);
		surface
	}

	#[test]
	fn unmounted_canvas_skips_the_frame() {
		let result = draw_frame(None, &data(), &ViewState::default());
		assert!(matches!(result, Err(SurfaceError::NotMounted)));
	}

	#[test]
	fn frame_is_cleared_scaled_and_restored() {
		let view = ViewState {
			scale: Scale::new(1.5),
			..Default::default()
		};
		let surface = draw(&data(), &view);
		assert_eq!(&surface.ops[..3], &[Op::Clear, Op::Save, Op::Scale(1.5)]);
		assert_eq!(surface.ops.last(), Some(&Op::Restore));
	}

	#[test]
	fn dangling_connections_are_skipped() {
		let surface = draw(&data(), &ViewState::default());
		// 1->2, 1->9, 2->1, 9->1; "missing" is dropped.
		assert_eq!(surface.lines().len(), 4);
	}

	#[test]
	fn contradiction_edges_are_dashed_red() {
		let surface = draw(&data(), &ViewState::default());
		for op in surface.lines() {
			let Op::Line {
				from,
				to,
				color,
				width,
				dashed,
			} = op
			else {
				unreachable!()
			};
			let touches_flagged = *from == (400.0, 250.0) || *to == (400.0, 250.0);
			if touches_flagged {
				assert_eq!(color, CONTRADICTION_EDGE_COLOR);
				assert_eq!(*width, CONTRADICTION_EDGE_WIDTH);
				assert!(*dashed);
			} else {
				assert_eq!(color, EDGE_COLOR);
				assert_eq!(*width, EDGE_WIDTH);
				assert!(!*dashed);
			}
		}
	}

	#[test]
	fn dash_is_reset_before_nodes() {
		let surface = draw(&data(), &ViewState::default());
		let first_circle = surface
			.ops
			.iter()
			.position(|op| matches!(op, Op::Circle { .. }))
			.unwrap();
		assert_eq!(surface.ops[first_circle - 1], Op::Dash(vec![]));
	}

	#[test]
	fn hidden_contradictions_drop_node_and_touching_edges() {
		let view = ViewState {
			show_contradictions: false,
			..Default::default()
		};
		let surface = draw(&data(), &view);
		assert_eq!(surface.labels(), vec!["Q4 Strategy", "John Doe"]);
		let lines = surface.lines();
		assert_eq!(lines.len(), 2);
		assert!(lines.iter().all(|op| match op {
			Op::Line { from, to, .. } => *from != (400.0, 250.0) && *to != (400.0, 250.0),
			_ => true,
		}));
	}

	#[test]
	fn type_filter_limits_nodes_not_edges() {
		let view = ViewState {
			type_filter: TypeFilter::Person,
			..Default::default()
		};
		let surface = draw(&data(), &view);
		assert_eq!(surface.labels(), vec!["John Doe"]);
		assert_eq!(surface.lines().len(), 4);
	}

	#[test]
	fn search_limits_nodes_not_edges() {
		let view = ViewState {
			search: "STRAT".into(),
			..Default::default()
		};
		let surface = draw(&data(), &view);
		assert_eq!(surface.labels(), vec!["Q4 Strategy"]);
		assert_eq!(surface.lines().len(), 4);
	}

	#[test]
	fn selected_node_is_larger_and_outlined() {
		let view = ViewState {
			selected: Some("2".into()),
			..Default::default()
		};
		let surface = draw(&data(), &view);
		let circles = surface.circles();
		assert!(circles.contains(&&Op::Circle {
			center: (200.0, 100.0),
			radius: SELECTED_RADIUS,
			fill: NodeKind::Person.color().to_string(),
			outline: Some((OUTLINE_COLOR.to_string(), 3.0)),
		}));
		assert!(circles.contains(&&Op::Circle {
			center: (300.0, 200.0),
			radius: NODE_RADIUS,
			fill: NodeKind::Topic.color().to_string(),
			outline: None,
		}));
	}

	#[test]
	fn flagged_node_gets_badge_and_bold_label() {
		let surface = draw(&data(), &ViewState::default());
		assert!(surface.circles().contains(&&Op::Circle {
			center: (420.0, 230.0),
			radius: BADGE_RADIUS,
			fill: BADGE_FILL.to_string(),
			outline: Some((BADGE_ACCENT.to_string(), 2.0)),
		}));
		assert!(surface.ops.contains(&Op::Text {
			text: "Budget Contradiction".into(),
			at: (400.0, 300.0),
			font: "bold 12px sans-serif".into(),
		}));
		assert!(surface.ops.contains(&Op::Text {
			text: "John Doe".into(),
			at: (200.0, 150.0),
			font: "12px sans-serif".into(),
		}));
	}
}
