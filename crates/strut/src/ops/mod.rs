//! The constraint-building and constraint-removal operations.
//!
//! Everything here is exposed as [`AutoLayout`], an extension trait over
//! the engine. Each building operation funnels into one internal
//! constructor, resolves its install target (the nearest common ancestor
//! for two-view relations), adopts the ambient priority of an active
//! [`with_priority`](crate::with_priority) region, and installs the result
//! before returning its handle. The caller owns every handle returned;
//! nothing is retained across calls.

use strut_engine::{ConstraintId, ControllerId, Engine, Relation, Size, ViewId};

use crate::attr::{Attr, Axis, Dimension, Edge};
use crate::error::{LayoutError, Result};
use crate::insets::EdgeInsets;
use crate::region;

mod build;
mod remove;

#[cfg(test)]
mod tests;

/// Constraint-building conveniences over a layout engine.
///
/// The surface hangs off the engine that owns the views, so one import
/// brings every operation into scope. All operations are synchronous and
/// run on the thread that owns the engine.
///
/// Operations that relate two views fail with
/// [`LayoutError::NoCommonAncestor`] when the views live in disjoint
/// trees; superview-relative operations fail the same way on a view with
/// no superview. On failure nothing is installed, but multi-constraint
/// operations do not roll back constraints installed by earlier steps.
pub trait AutoLayout {
	/// Creates a view that does not translate its autoresizing mask into
	/// constraints, ready to be constrained.
	fn new_auto_layout_view(&mut self) -> ViewId;

	/// Pins an edge of the view to the same edge of its superview, inset by
	/// `inset`.
	///
	/// A positive inset always moves the view's edge *inward*: for the
	/// right, bottom, and trailing edges the constant is negated.
	fn pin_edge_to_superview_edge(
		&mut self,
		view: ViewId,
		edge: Edge,
		inset: f64,
	) -> Result<ConstraintId>;

	/// Pins an edge of the view to the same edge of its superview, inset by
	/// `inset`, as a maximum or minimum.
	///
	/// For the right, bottom, and trailing edges the inequality reverses
	/// along with the constant's sign: "at most 10 points from the trailing
	/// edge" becomes a `>=` constraint on the raw coordinates.
	fn pin_edge_to_superview_edge_with_relation(
		&mut self,
		view: ViewId,
		edge: Edge,
		inset: f64,
		relation: Relation,
	) -> Result<ConstraintId>;

	/// Pins all four edges of the view to its superview with the given
	/// insets. Returns the constraints in top, leading, bottom, trailing
	/// order.
	fn pin_edges_to_superview(
		&mut self,
		view: ViewId,
		insets: EdgeInsets,
	) -> Result<Vec<ConstraintId>>;

	/// Pins three of the four edges of the view to its superview, skipping
	/// `excluding`.
	///
	/// Excluding [`Edge::Left`] skips the leading pin and excluding
	/// [`Edge::Right`] skips the trailing pin, since the four pins are
	/// always leading/trailing relative.
	fn pin_edges_to_superview_excluding(
		&mut self,
		view: ViewId,
		insets: EdgeInsets,
		excluding: Edge,
	) -> Result<Vec<ConstraintId>>;

	/// Pins an edge of the view to an edge of another view:
	/// `view.edge == of.to_edge + offset`.
	///
	/// The constraint installs on the nearest common ancestor of the two
	/// views.
	fn pin_edge(
		&mut self,
		view: ViewId,
		edge: Edge,
		to_edge: Edge,
		of: ViewId,
		offset: f64,
	) -> Result<ConstraintId>;

	/// Pins an edge of the view to an edge of another view as a maximum or
	/// minimum.
	fn pin_edge_with_relation(
		&mut self,
		view: ViewId,
		edge: Edge,
		to_edge: Edge,
		of: ViewId,
		offset: f64,
		relation: Relation,
	) -> Result<ConstraintId>;

	/// Centers the view in its superview.
	///
	/// Returns the vertical-axis constraint then the horizontal-axis
	/// constraint, both installed on the superview.
	fn center_in_superview(&mut self, view: ViewId) -> Result<[ConstraintId; 2]>;

	/// Aligns an axis of the view with the same axis of its superview.
	fn align_axis_to_superview_axis(&mut self, view: ViewId, axis: Axis) -> Result<ConstraintId>;

	/// Aligns an axis of the view with the same axis of another view,
	/// offset by `offset`.
	fn align_axis(
		&mut self,
		view: ViewId,
		axis: Axis,
		of: ViewId,
		offset: f64,
	) -> Result<ConstraintId>;

	/// Matches a dimension of the view to a dimension of another view plus
	/// `offset`.
	fn match_dimension(
		&mut self,
		view: ViewId,
		dimension: Dimension,
		to_dimension: Dimension,
		of: ViewId,
		offset: f64,
	) -> Result<ConstraintId>;

	/// Matches a dimension of the view to a dimension of another view plus
	/// `offset`, as a maximum or minimum.
	fn match_dimension_with_relation(
		&mut self,
		view: ViewId,
		dimension: Dimension,
		to_dimension: Dimension,
		of: ViewId,
		offset: f64,
		relation: Relation,
	) -> Result<ConstraintId>;

	/// Matches a dimension of the view to a multiple of a dimension of
	/// another view.
	fn match_dimension_to_multiple(
		&mut self,
		view: ViewId,
		dimension: Dimension,
		to_dimension: Dimension,
		of: ViewId,
		multiplier: f64,
	) -> Result<ConstraintId>;

	/// Matches a dimension of the view to a multiple of a dimension of
	/// another view, as a maximum or minimum.
	fn match_dimension_to_multiple_with_relation(
		&mut self,
		view: ViewId,
		dimension: Dimension,
		to_dimension: Dimension,
		of: ViewId,
		multiplier: f64,
		relation: Relation,
	) -> Result<ConstraintId>;

	/// Sets a dimension of the view to a fixed size.
	///
	/// The constraint is absolute, with no second view, and installs on the
	/// view itself.
	fn set_dimension_to_size(
		&mut self,
		view: ViewId,
		dimension: Dimension,
		size: f64,
	) -> Result<ConstraintId>;

	/// Sets a dimension of the view to a fixed size as a maximum or
	/// minimum.
	fn set_dimension_to_size_with_relation(
		&mut self,
		view: ViewId,
		dimension: Dimension,
		size: f64,
		relation: Relation,
	) -> Result<ConstraintId>;

	/// Fixes both dimensions of the view. Returns the width constraint then
	/// the height constraint.
	fn set_dimensions_to_size(&mut self, view: ViewId, size: Size) -> Result<[ConstraintId; 2]>;

	/// Constrains any attribute of the view to any attribute of another
	/// view plus `offset`.
	///
	/// This is the escape hatch for relations the edge/axis/dimension
	/// families do not express, such as aligning a baseline to an edge.
	fn constrain_attr(
		&mut self,
		view: ViewId,
		attr: impl Into<Attr>,
		to_attr: impl Into<Attr>,
		of: ViewId,
		offset: f64,
	) -> Result<ConstraintId>;

	/// Constrains any attribute of the view to any attribute of another
	/// view plus `offset`, as a maximum or minimum.
	fn constrain_attr_with_relation(
		&mut self,
		view: ViewId,
		attr: impl Into<Attr>,
		to_attr: impl Into<Attr>,
		of: ViewId,
		offset: f64,
		relation: Relation,
	) -> Result<ConstraintId>;

	/// Constrains any attribute of the view to a multiple of any attribute
	/// of another view.
	fn constrain_attr_to_multiple(
		&mut self,
		view: ViewId,
		attr: impl Into<Attr>,
		to_attr: impl Into<Attr>,
		of: ViewId,
		multiplier: f64,
		relation: Relation,
	) -> Result<ConstraintId>;

	/// Untyped form of [`constrain_attr_with_relation`] taking raw engine
	/// attribute codes, for callers holding host integers.
	///
	/// Fails with [`LayoutError::InvalidAttribute`] on a code that names no
	/// edge, axis, or dimension.
	///
	/// [`constrain_attr_with_relation`]: AutoLayout::constrain_attr_with_relation
	fn constrain_attribute(
		&mut self,
		view: ViewId,
		attribute: i32,
		to_attribute: i32,
		of: ViewId,
		offset: f64,
		relation: Relation,
	) -> Result<ConstraintId>;

	/// Untyped form of [`constrain_attr_to_multiple`] taking raw engine
	/// attribute codes.
	///
	/// [`constrain_attr_to_multiple`]: AutoLayout::constrain_attr_to_multiple
	fn constrain_attribute_to_multiple(
		&mut self,
		view: ViewId,
		attribute: i32,
		to_attribute: i32,
		of: ViewId,
		multiplier: f64,
		relation: Relation,
	) -> Result<ConstraintId>;

	/// Pins the view's top edge below a controller's top layout guide:
	/// `view.top == guide.bottom + inset`, installed on the controller's
	/// view.
	///
	/// Fails with [`LayoutError::UnsupportedOnHost`] when the host provides
	/// no layout guides.
	fn pin_to_top_guide(
		&mut self,
		view: ViewId,
		controller: ControllerId,
		inset: f64,
	) -> Result<ConstraintId>;

	/// Pins the view's bottom edge above a controller's bottom layout
	/// guide: `view.bottom == guide.top - inset`.
	fn pin_to_bottom_guide(
		&mut self,
		view: ViewId,
		controller: ControllerId,
		inset: f64,
	) -> Result<ConstraintId>;

	/// Applies the ambient region priority to the view's
	/// compression-resistance priority along the orientation `axis`
	/// selects.
	///
	/// Only valid inside [`with_priority`](crate::with_priority); fails
	/// with [`LayoutError::NoActivePriorityRegion`] otherwise.
	fn set_content_compression_resistance_priority_for_axis(
		&mut self,
		view: ViewId,
		axis: Axis,
	) -> Result<()>;

	/// Applies the ambient region priority to the view's content-hugging
	/// priority along the orientation `axis` selects.
	///
	/// Only valid inside [`with_priority`](crate::with_priority).
	fn set_content_hugging_priority_for_axis(&mut self, view: ViewId, axis: Axis) -> Result<()>;

	/// Uninstalls a constraint from whatever view it is installed on.
	/// Does nothing if the constraint is not installed.
	fn remove(&mut self, constraint: ConstraintId);

	/// Uninstalls each of the given constraints.
	fn remove_many(&mut self, constraints: &[ConstraintId]);

	/// Uninstalls every constraint that lists the view as a participant,
	/// wherever in the view's ancestry it is installed. Returns the
	/// detached constraints, in no guaranteed order.
	///
	/// With `include_implicit` false, constraints the engine synthesized
	/// from intrinsic content size (the reserved priority band) survive,
	/// which is usually what you want.
	///
	/// The engine's removal cost can be super-linear in constraint count;
	/// this walks and removes one by one without batching.
	fn remove_affecting(&mut self, view: ViewId, include_implicit: bool) -> Vec<ConstraintId>;

	/// [`remove_affecting`] applied to the view and its whole subtree, with
	/// constraints between two subtree members removed once.
	///
	/// [`remove_affecting`]: AutoLayout::remove_affecting
	fn remove_affecting_subtree(
		&mut self,
		view: ViewId,
		include_implicit: bool,
	) -> Vec<ConstraintId>;
}

impl AutoLayout for Engine {
	fn new_auto_layout_view(&mut self) -> ViewId {
		let view = self.create_view();
		self.set_translates_autoresizing_mask(view, false);
		view
	}

	fn pin_edge_to_superview_edge(
		&mut self,
		view: ViewId,
		edge: Edge,
		inset: f64,
	) -> Result<ConstraintId> {
		self.pin_edge_to_superview_edge_with_relation(view, edge, inset, Relation::Equal)
	}

	fn pin_edge_to_superview_edge_with_relation(
		&mut self,
		view: ViewId,
		edge: Edge,
		inset: f64,
		relation: Relation,
	) -> Result<ConstraintId> {
		let superview = self.parent(view).ok_or(LayoutError::NoCommonAncestor)?;
		let (offset, relation) = if edge.inset_runs_negative() {
			(-inset, relation.reversed())
		} else {
			(inset, relation)
		};
		self.pin_edge_with_relation(view, edge, edge, superview, offset, relation)
	}

	fn pin_edges_to_superview(
		&mut self,
		view: ViewId,
		insets: EdgeInsets,
	) -> Result<Vec<ConstraintId>> {
		build::pin_edges(self, view, insets, None)
	}

	fn pin_edges_to_superview_excluding(
		&mut self,
		view: ViewId,
		insets: EdgeInsets,
		excluding: Edge,
	) -> Result<Vec<ConstraintId>> {
		build::pin_edges(self, view, insets, Some(excluding))
	}

	fn pin_edge(
		&mut self,
		view: ViewId,
		edge: Edge,
		to_edge: Edge,
		of: ViewId,
		offset: f64,
	) -> Result<ConstraintId> {
		self.pin_edge_with_relation(view, edge, to_edge, of, offset, Relation::Equal)
	}

	fn pin_edge_with_relation(
		&mut self,
		view: ViewId,
		edge: Edge,
		to_edge: Edge,
		of: ViewId,
		offset: f64,
		relation: Relation,
	) -> Result<ConstraintId> {
		build::build(
			self,
			view,
			edge.into(),
			relation,
			Some((of, to_edge.into())),
			1.0,
			offset,
		)
	}

	fn center_in_superview(&mut self, view: ViewId) -> Result<[ConstraintId; 2]> {
		let vertical = self.align_axis_to_superview_axis(view, Axis::Vertical)?;
		let horizontal = self.align_axis_to_superview_axis(view, Axis::Horizontal)?;
		Ok([vertical, horizontal])
	}

	fn align_axis_to_superview_axis(&mut self, view: ViewId, axis: Axis) -> Result<ConstraintId> {
		let superview = self.parent(view).ok_or(LayoutError::NoCommonAncestor)?;
		self.align_axis(view, axis, superview, 0.0)
	}

	fn align_axis(
		&mut self,
		view: ViewId,
		axis: Axis,
		of: ViewId,
		offset: f64,
	) -> Result<ConstraintId> {
		build::build(
			self,
			view,
			axis.into(),
			Relation::Equal,
			Some((of, axis.into())),
			1.0,
			offset,
		)
	}

	fn match_dimension(
		&mut self,
		view: ViewId,
		dimension: Dimension,
		to_dimension: Dimension,
		of: ViewId,
		offset: f64,
	) -> Result<ConstraintId> {
		self.match_dimension_with_relation(view, dimension, to_dimension, of, offset, Relation::Equal)
	}

	fn match_dimension_with_relation(
		&mut self,
		view: ViewId,
		dimension: Dimension,
		to_dimension: Dimension,
		of: ViewId,
		offset: f64,
		relation: Relation,
	) -> Result<ConstraintId> {
		build::build(
			self,
			view,
			dimension.into(),
			relation,
			Some((of, to_dimension.into())),
			1.0,
			offset,
		)
	}

	fn match_dimension_to_multiple(
		&mut self,
		view: ViewId,
		dimension: Dimension,
		to_dimension: Dimension,
		of: ViewId,
		multiplier: f64,
	) -> Result<ConstraintId> {
		self.match_dimension_to_multiple_with_relation(
			view,
			dimension,
			to_dimension,
			of,
			multiplier,
			Relation::Equal,
		)
	}

	fn match_dimension_to_multiple_with_relation(
		&mut self,
		view: ViewId,
		dimension: Dimension,
		to_dimension: Dimension,
		of: ViewId,
		multiplier: f64,
		relation: Relation,
	) -> Result<ConstraintId> {
		build::build(
			self,
			view,
			dimension.into(),
			relation,
			Some((of, to_dimension.into())),
			multiplier,
			0.0,
		)
	}

	fn set_dimension_to_size(
		&mut self,
		view: ViewId,
		dimension: Dimension,
		size: f64,
	) -> Result<ConstraintId> {
		self.set_dimension_to_size_with_relation(view, dimension, size, Relation::Equal)
	}

	fn set_dimension_to_size_with_relation(
		&mut self,
		view: ViewId,
		dimension: Dimension,
		size: f64,
		relation: Relation,
	) -> Result<ConstraintId> {
		build::build(self, view, dimension.into(), relation, None, 1.0, size)
	}

	fn set_dimensions_to_size(&mut self, view: ViewId, size: Size) -> Result<[ConstraintId; 2]> {
		let width = self.set_dimension_to_size(view, Dimension::Width, size.width)?;
		let height = self.set_dimension_to_size(view, Dimension::Height, size.height)?;
		Ok([width, height])
	}

	fn constrain_attr(
		&mut self,
		view: ViewId,
		attr: impl Into<Attr>,
		to_attr: impl Into<Attr>,
		of: ViewId,
		offset: f64,
	) -> Result<ConstraintId> {
		self.constrain_attr_with_relation(view, attr, to_attr, of, offset, Relation::Equal)
	}

	fn constrain_attr_with_relation(
		&mut self,
		view: ViewId,
		attr: impl Into<Attr>,
		to_attr: impl Into<Attr>,
		of: ViewId,
		offset: f64,
		relation: Relation,
	) -> Result<ConstraintId> {
		build::build(
			self,
			view,
			attr.into(),
			relation,
			Some((of, to_attr.into())),
			1.0,
			offset,
		)
	}

	fn constrain_attr_to_multiple(
		&mut self,
		view: ViewId,
		attr: impl Into<Attr>,
		to_attr: impl Into<Attr>,
		of: ViewId,
		multiplier: f64,
		relation: Relation,
	) -> Result<ConstraintId> {
		build::build(
			self,
			view,
			attr.into(),
			relation,
			Some((of, to_attr.into())),
			multiplier,
			0.0,
		)
	}

	fn constrain_attribute(
		&mut self,
		view: ViewId,
		attribute: i32,
		to_attribute: i32,
		of: ViewId,
		offset: f64,
		relation: Relation,
	) -> Result<ConstraintId> {
		let attr = Attr::from_raw(attribute)?;
		let to_attr = Attr::from_raw(to_attribute)?;
		self.constrain_attr_with_relation(view, attr, to_attr, of, offset, relation)
	}

	fn constrain_attribute_to_multiple(
		&mut self,
		view: ViewId,
		attribute: i32,
		to_attribute: i32,
		of: ViewId,
		multiplier: f64,
		relation: Relation,
	) -> Result<ConstraintId> {
		let attr = Attr::from_raw(attribute)?;
		let to_attr = Attr::from_raw(to_attribute)?;
		self.constrain_attr_to_multiple(view, attr, to_attr, of, multiplier, relation)
	}

	fn pin_to_top_guide(
		&mut self,
		view: ViewId,
		controller: ControllerId,
		inset: f64,
	) -> Result<ConstraintId> {
		let guide = self
			.top_guide(controller)
			.ok_or(LayoutError::UnsupportedOnHost)?;
		// A layout guide is not an ordinary subview; install directly on
		// the controller's view rather than resolving an ancestor.
		let target = self.controller_view(controller);
		Ok(build::build_on(
			self,
			target,
			view,
			Edge::Top.attribute(),
			Relation::Equal,
			Some(guide),
			Edge::Bottom.attribute(),
			1.0,
			inset,
		))
	}

	fn pin_to_bottom_guide(
		&mut self,
		view: ViewId,
		controller: ControllerId,
		inset: f64,
	) -> Result<ConstraintId> {
		let guide = self
			.bottom_guide(controller)
			.ok_or(LayoutError::UnsupportedOnHost)?;
		let target = self.controller_view(controller);
		Ok(build::build_on(
			self,
			target,
			view,
			Edge::Bottom.attribute(),
			Relation::Equal,
			Some(guide),
			Edge::Top.attribute(),
			1.0,
			-inset,
		))
	}

	fn set_content_compression_resistance_priority_for_axis(
		&mut self,
		view: ViewId,
		axis: Axis,
	) -> Result<()> {
		let priority = region::current_priority().ok_or(LayoutError::NoActivePriorityRegion)?;
		self.set_content_compression_resistance_priority(view, axis.orientation(), priority);
		Ok(())
	}

	fn set_content_hugging_priority_for_axis(&mut self, view: ViewId, axis: Axis) -> Result<()> {
		let priority = region::current_priority().ok_or(LayoutError::NoActivePriorityRegion)?;
		self.set_content_hugging_priority(view, axis.orientation(), priority);
		Ok(())
	}

	fn remove(&mut self, constraint: ConstraintId) {
		if let Some(target) = self.installed_on(constraint) {
			self.remove_constraint(target, constraint);
		}
	}

	fn remove_many(&mut self, constraints: &[ConstraintId]) {
		for &constraint in constraints {
			self.remove(constraint);
		}
	}

	fn remove_affecting(&mut self, view: ViewId, include_implicit: bool) -> Vec<ConstraintId> {
		let affecting = remove::affecting(self, view, include_implicit);
		tracing::trace!(?view, count = affecting.len(), include_implicit, "remove affecting");
		self.remove_many(&affecting);
		affecting
	}

	fn remove_affecting_subtree(
		&mut self,
		view: ViewId,
		include_implicit: bool,
	) -> Vec<ConstraintId> {
		let affecting = remove::affecting_subtree(self, view, include_implicit);
		tracing::trace!(
			?view,
			count = affecting.len(),
			include_implicit,
			"remove affecting subtree"
		);
		self.remove_many(&affecting);
		affecting
	}
}
