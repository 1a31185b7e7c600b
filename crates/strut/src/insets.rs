//! Edge insets for superview pinning.

use core::fmt;

/// Distances to inset each edge of a view from its superview.
///
/// Positive values always move the pinned edge *inward*, regardless of which
/// edge they apply to; the sign flip for trailing-side edges happens when
/// the constraint is built.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct EdgeInsets {
	/// Inset from the superview's top edge.
	pub top: f64,
	/// Inset from the superview's leading edge.
	pub left: f64,
	/// Inset from the superview's bottom edge.
	pub bottom: f64,
	/// Inset from the superview's trailing edge.
	pub right: f64,
}

impl EdgeInsets {
	/// No inset on any edge.
	pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

	/// Creates insets from the four per-edge distances.
	pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
		Self {
			top,
			left,
			bottom,
			right,
		}
	}

	/// The same inset on all four edges.
	pub const fn uniform(inset: f64) -> Self {
		Self::new(inset, inset, inset, inset)
	}
}

impl fmt::Display for EdgeInsets {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"({}, {}, {}, {})",
			self.top, self.left, self.bottom, self.right
		)
	}
}
