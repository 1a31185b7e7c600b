//! The edge/axis/dimension vocabulary and its mapping onto engine attributes.
//!
//! Each variant's discriminant *is* the engine attribute code it encodes to,
//! so the integer adapter ([`Attr::from_raw`]) round-trips through
//! [`Attribute::from_code`] with no translation table.

use strum::{Display, EnumString};
use strut_engine::{Attribute, Orientation};

use crate::error::{LayoutError, Result};

/// An edge of a view's alignment rectangle.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Display, EnumString)]
#[repr(i32)]
pub enum Edge {
	/// The left edge.
	Left = 1,
	/// The right edge.
	Right = 2,
	/// The top edge.
	Top = 3,
	/// The bottom edge.
	Bottom = 4,
	/// The leading edge (left in left-to-right locales).
	Leading = 5,
	/// The trailing edge (right in left-to-right locales).
	Trailing = 6,
}

impl Edge {
	/// The engine attribute this edge encodes to.
	pub const fn attribute(self) -> Attribute {
		match self {
			Self::Left => Attribute::Left,
			Self::Right => Attribute::Right,
			Self::Top => Attribute::Top,
			Self::Bottom => Attribute::Bottom,
			Self::Leading => Attribute::Leading,
			Self::Trailing => Attribute::Trailing,
		}
	}

	/// Whether a positive inset from this edge runs against the coordinate
	/// axis. Insets from these edges become negative constants, and an
	/// inequality pinned against them reverses.
	pub(crate) const fn inset_runs_negative(self) -> bool {
		matches!(self, Self::Right | Self::Bottom | Self::Trailing)
	}
}

/// A dimension of a view's alignment rectangle.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Display, EnumString)]
#[repr(i32)]
pub enum Dimension {
	/// The width.
	Width = 7,
	/// The height.
	Height = 8,
}

impl Dimension {
	/// The engine attribute this dimension encodes to.
	pub const fn attribute(self) -> Attribute {
		match self {
			Self::Width => Attribute::Width,
			Self::Height => Attribute::Height,
		}
	}
}

/// An axis through a view.
///
/// The naming is deliberately crossed with the engine's center attributes:
/// a *vertical* axis is a vertical line, and aligning two views on it
/// constrains their **x** coordinates, so [`Axis::Vertical`] encodes to
/// [`Attribute::CenterX`] (and [`Axis::Horizontal`] to
/// [`Attribute::CenterY`]). This mapping is an invariant of the layer and
/// is never inverted.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Display, EnumString)]
#[repr(i32)]
pub enum Axis {
	/// A vertical line through the center of the view.
	Vertical = 9,
	/// A horizontal line through the center of the view.
	Horizontal = 10,
	/// A horizontal line at the baseline of the view's text.
	Baseline = 11,
}

impl Axis {
	/// The engine attribute this axis encodes to.
	pub const fn attribute(self) -> Attribute {
		match self {
			Self::Vertical => Attribute::CenterX,
			Self::Horizontal => Attribute::CenterY,
			Self::Baseline => Attribute::Baseline,
		}
	}

	/// The layout orientation this axis selects for content-priority calls.
	///
	/// A vertical line's position is a horizontal coordinate, so
	/// [`Axis::Vertical`] selects [`Orientation::Horizontal`]; the
	/// horizontal and baseline axes both select [`Orientation::Vertical`].
	pub const fn orientation(self) -> Orientation {
		match self {
			Self::Vertical => Orientation::Horizontal,
			Self::Horizontal | Self::Baseline => Orientation::Vertical,
		}
	}
}

/// Any constrainable attribute: an edge, an axis, or a dimension.
///
/// This is the tagged form the layer works with internally; the untyped
/// integer surface of the host is admitted only through
/// [`Attr::from_raw`], which rejects unknown codes instead of passing them
/// through.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Attr {
	/// An edge.
	Edge(Edge),
	/// An axis.
	Axis(Axis),
	/// A dimension.
	Dimension(Dimension),
}

impl Attr {
	/// Parses a raw engine attribute code.
	///
	/// Fails with [`LayoutError::InvalidAttribute`] when the code names no
	/// edge, axis, or dimension. [`Attribute::NotAnAttribute`] is rejected
	/// too; it is not a constrainable attribute.
	pub fn from_raw(code: i32) -> Result<Self> {
		Attribute::from_code(code)
			.and_then(|attribute| Self::try_from(attribute).ok())
			.ok_or(LayoutError::InvalidAttribute(code))
	}

	/// The engine attribute this encodes to.
	pub const fn attribute(self) -> Attribute {
		match self {
			Self::Edge(edge) => edge.attribute(),
			Self::Axis(axis) => axis.attribute(),
			Self::Dimension(dimension) => dimension.attribute(),
		}
	}
}

impl From<Edge> for Attr {
	fn from(edge: Edge) -> Self {
		Self::Edge(edge)
	}
}

impl From<Axis> for Attr {
	fn from(axis: Axis) -> Self {
		Self::Axis(axis)
	}
}

impl From<Dimension> for Attr {
	fn from(dimension: Dimension) -> Self {
		Self::Dimension(dimension)
	}
}

impl From<Attr> for Attribute {
	fn from(attr: Attr) -> Self {
		attr.attribute()
	}
}

impl TryFrom<Attribute> for Attr {
	type Error = LayoutError;

	fn try_from(attribute: Attribute) -> Result<Self> {
		match attribute {
			Attribute::Left => Ok(Self::Edge(Edge::Left)),
			Attribute::Right => Ok(Self::Edge(Edge::Right)),
			Attribute::Top => Ok(Self::Edge(Edge::Top)),
			Attribute::Bottom => Ok(Self::Edge(Edge::Bottom)),
			Attribute::Leading => Ok(Self::Edge(Edge::Leading)),
			Attribute::Trailing => Ok(Self::Edge(Edge::Trailing)),
			Attribute::Width => Ok(Self::Dimension(Dimension::Width)),
			Attribute::Height => Ok(Self::Dimension(Dimension::Height)),
			Attribute::CenterX => Ok(Self::Axis(Axis::Vertical)),
			Attribute::CenterY => Ok(Self::Axis(Axis::Horizontal)),
			Attribute::Baseline => Ok(Self::Axis(Axis::Baseline)),
			Attribute::NotAnAttribute => Err(LayoutError::InvalidAttribute(attribute.code())),
		}
	}
}
