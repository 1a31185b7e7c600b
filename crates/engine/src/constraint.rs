//! Linear constraints between view attributes.

use core::fmt;

use strum::{Display, EnumString};

use crate::attribute::Attribute;
use crate::engine::ViewId;
use crate::priority::Priority;

/// The relation between the two sides of a constraint.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash, Display, EnumString)]
pub enum Relation {
	/// The first side is at most the second.
	#[strum(serialize = "<=")]
	LessOrEqual,
	/// The two sides are equal.
	#[default]
	#[strum(serialize = "==")]
	Equal,
	/// The first side is at least the second.
	#[strum(serialize = ">=")]
	GreaterOrEqual,
}

impl Relation {
	/// The relation with its sides swapped. `Equal` is its own reverse.
	pub const fn reversed(self) -> Self {
		match self {
			Self::LessOrEqual => Self::GreaterOrEqual,
			Self::Equal => Self::Equal,
			Self::GreaterOrEqual => Self::LessOrEqual,
		}
	}
}

/// A linear relation `first.first_attr R second.second_attr * multiplier + constant`.
///
/// `second` is `None` only for absolute dimensional constraints
/// (`width == 100`); in that case `second_attr` is
/// [`Attribute::NotAnAttribute`]. Every field except `priority` is fixed at
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
	/// The view whose attribute is on the left-hand side.
	pub first: ViewId,
	/// The attribute on the left-hand side.
	pub first_attr: Attribute,
	/// The relation between the two sides.
	pub relation: Relation,
	/// The view whose attribute is on the right-hand side, if any.
	pub second: Option<ViewId>,
	/// The attribute on the right-hand side.
	pub second_attr: Attribute,
	/// Scale applied to the right-hand attribute.
	pub multiplier: f64,
	/// Offset added to the right-hand side.
	pub constant: f64,
	/// How strongly the solver should hold this constraint.
	pub priority: Priority,
}

impl Constraint {
	/// Whether either participant of this constraint is `view`.
	pub fn involves(&self, view: ViewId) -> bool {
		self.first == view || self.second == Some(view)
	}
}

impl fmt::Display for Constraint {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:?}.{} {}", self.first, self.first_attr, self.relation)?;
		if let Some(second) = self.second {
			write!(f, " {second:?}.{}", self.second_attr)?;
			if self.multiplier != 1.0 {
				write!(f, " * {}", self.multiplier)?;
			}
			if self.constant != 0.0 {
				write!(f, " + {}", self.constant)?;
			}
		} else {
			write!(f, " {}", self.constant)?;
		}
		write!(f, " @{}", self.priority)
	}
}
