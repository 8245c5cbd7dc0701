//! Uniform zoom factor applied to the drawing surface.

/// Zoom factor, always within [`Scale::MIN`, `Scale::MAX`].
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Scale(f64);

impl Scale {
	pub const MIN: f64 = 0.5;
	pub const MAX: f64 = 2.0;
	pub const STEP: f64 = 0.1;
	pub const DEFAULT: f64 = 1.0;

	pub fn new(k: f64) -> Self {
		Self(k.clamp(Self::MIN, Self::MAX))
	}

	pub fn k(self) -> f64 {
		self.0
	}

	pub fn zoom_in(&mut self) {
		self.0 = (self.0 + Self::STEP).min(Self::MAX);
	}

	pub fn zoom_out(&mut self) {
		self.0 = (self.0 - Self::STEP).max(Self::MIN);
	}

	pub fn reset(&mut self) {
		self.0 = Self::DEFAULT;
	}

	/// Screen-space point to drawing space. The surface never pans, so this is
	/// a plain division.
	pub fn screen_to_graph(self, sx: f64, sy: f64) -> (f64, f64) {
		(sx / self.0, sy / self.0)
	}

	pub fn percent(self) -> u32 {
		(self.0 * 100.0).round() as u32
	}
}

impl Default for Scale {
	fn default() -> Self {
		Self(Self::DEFAULT)
	}
}
