//! The engine's native attribute and orientation vocabulary.

use strum::{Display, EnumString};

/// An attribute of a view that can participate in a linear constraint.
///
/// The discriminants are the engine's wire codes and are stable: higher layers
/// encode their own vocabularies as these integers and round-trip through
/// [`Attribute::from_code`].
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash, Display, EnumString)]
#[repr(i32)]
pub enum Attribute {
	/// Placeholder used as the second attribute of absolute constraints.
	#[default]
	NotAnAttribute = 0,
	/// The left edge of the view's alignment rectangle.
	Left = 1,
	/// The right edge of the view's alignment rectangle.
	Right = 2,
	/// The top edge of the view's alignment rectangle.
	Top = 3,
	/// The bottom edge of the view's alignment rectangle.
	Bottom = 4,
	/// The leading edge (left in left-to-right locales).
	Leading = 5,
	/// The trailing edge (right in left-to-right locales).
	Trailing = 6,
	/// The width of the view's alignment rectangle.
	Width = 7,
	/// The height of the view's alignment rectangle.
	Height = 8,
	/// The center of the view along the x axis.
	CenterX = 9,
	/// The center of the view along the y axis.
	CenterY = 10,
	/// The baseline of the view's text content.
	Baseline = 11,
}

impl Attribute {
	/// Returns the stable integer code for this attribute.
	pub const fn code(self) -> i32 {
		self as i32
	}

	/// Looks up an attribute by its integer code.
	pub const fn from_code(code: i32) -> Option<Self> {
		match code {
			0 => Some(Self::NotAnAttribute),
			1 => Some(Self::Left),
			2 => Some(Self::Right),
			3 => Some(Self::Top),
			4 => Some(Self::Bottom),
			5 => Some(Self::Leading),
			6 => Some(Self::Trailing),
			7 => Some(Self::Width),
			8 => Some(Self::Height),
			9 => Some(Self::CenterX),
			10 => Some(Self::CenterY),
			11 => Some(Self::Baseline),
			_ => None,
		}
	}
}

/// One of the two orientations a view lays content out along.
///
/// Content-hugging and compression-resistance priorities are stored per
/// orientation, not per attribute.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Display, EnumString)]
#[repr(u8)]
pub enum Orientation {
	/// Left-to-right.
	Horizontal = 0,
	/// Top-to-bottom.
	Vertical = 1,
}

impl Orientation {
	/// Index into per-orientation storage.
	pub(crate) const fn index(self) -> usize {
		self as usize
	}
}
