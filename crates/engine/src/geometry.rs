//! Minimal geometry shared with the convenience layer.

use core::fmt;

/// A width/height pair in points.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Size {
	/// Horizontal extent.
	pub width: f64,
	/// Vertical extent.
	pub height: f64,
}

impl Size {
	/// Creates a new size.
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}
}

impl fmt::Display for Size {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}x{}", self.width, self.height)
	}
}

impl From<(f64, f64)> for Size {
	fn from((width, height): (f64, f64)) -> Self {
		Self { width, height }
	}
}
