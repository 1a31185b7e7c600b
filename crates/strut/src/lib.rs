#![warn(missing_docs)]

//! Convenience layer over a constraint-based layout engine.
//!
//! `strut` turns intent (edge pins, axis alignments, dimension matches,
//! fixed sizes) into the linear constraints a host layout engine solves.
//! It owns none of the solving and none of the rendering: every operation
//! constructs one or more constraints, installs them on the right view, and
//! hands the caller the handles.
//!
//! The interesting work is bookkeeping:
//!
//! - **Vocabulary**: [`Edge`], [`Axis`], and [`Dimension`] compress onto the
//!   engine's generic [`Attribute`] enum. The axis names cross over: a
//!   vertical axis is a vertical *line*, so aligning it constrains x
//!   coordinates ([`Attribute::CenterX`]).
//! - **Placement**: a constraint relating two views installs on their
//!   nearest common ancestor, resolved per call from the live view tree.
//! - **Ambient priority**: [`with_priority`] scopes a priority over every
//!   constraint built inside it, without threading it through each call.
//! - **Bulk removal**: the engine indexes constraints by install target,
//!   so "remove everything affecting this view" walks the view's ancestry
//!   to rediscover them ([`AutoLayout::remove_affecting`]).
//!
//! # Examples
//!
//! Pin a panel to all four edges of its superview:
//!
//! ```
//! use strut::{AutoLayout, EdgeInsets, Engine};
//!
//! let mut engine = Engine::new();
//! let window = engine.create_view();
//! let panel = engine.new_auto_layout_view();
//! engine.add_subview(window, panel);
//!
//! let constraints = engine.pin_edges_to_superview(panel, EdgeInsets::uniform(8.0))?;
//! assert_eq!(constraints.len(), 4);
//! # Ok::<(), strut::LayoutError>(())
//! ```
//!
//! Lay out two labels side by side, the second one reluctant to grow:
//!
//! ```
//! use strut::{AutoLayout, Axis, Edge, Engine, with_priority};
//!
//! let mut engine = Engine::new();
//! let window = engine.create_view();
//! let name = engine.new_auto_layout_view();
//! let detail = engine.new_auto_layout_view();
//! engine.add_subview(window, name);
//! engine.add_subview(window, detail);
//!
//! engine.pin_edge(detail, Edge::Left, Edge::Right, name, 8.0)?;
//! engine.align_axis(detail, Axis::Horizontal, name, 0.0)?;
//! with_priority(251.0, || {
//!     engine.set_content_hugging_priority_for_axis(detail, Axis::Vertical)
//! })?;
//! # Ok::<(), strut::LayoutError>(())
//! ```
//!
//! All layout mutation belongs on the host's UI dispatch context; nothing
//! here synchronizes across threads, and the ambient priority stack is
//! thread-local by construction.

mod ancestor;
mod attr;
mod error;
mod insets;
mod ops;
mod region;

pub use ancestor::{common_ancestor, common_ancestor_of};
pub use attr::{Attr, Axis, Dimension, Edge};
pub use error::{LayoutError, Result};
pub use insets::EdgeInsets;
pub use ops::AutoLayout;
pub use region::{current_priority, with_priority};
pub use strut_engine::{
	Attribute, Constraint, ConstraintId, ControllerId, Engine, Orientation, Priority, Relation,
	Size, ViewId,
};
