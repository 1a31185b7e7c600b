//! The funnel every constraint-building operation reduces to.

use strut_engine::{Attribute, ConstraintId, Engine, Relation, ViewId};

use crate::ancestor;
use crate::attr::{Attr, Edge};
use crate::error::Result;
use crate::insets::EdgeInsets;
use crate::ops::AutoLayout;
use crate::region;

/// Builds a constraint and installs it on `target`.
///
/// Ordering is load-bearing: the ambient priority must be written before
/// installation (the engine rejects priority writes on installed
/// constraints), and autoresizing translation is disabled on `first`
/// before its constraint lands.
#[allow(clippy::too_many_arguments)]
pub(super) fn build_on(
	engine: &mut Engine,
	target: ViewId,
	first: ViewId,
	first_attr: Attribute,
	relation: Relation,
	second: Option<ViewId>,
	second_attr: Attribute,
	multiplier: f64,
	constant: f64,
) -> ConstraintId {
	let constraint = engine.make_constraint(
		first, first_attr, relation, second, second_attr, multiplier, constant,
	);
	if let Some(priority) = region::current_priority() {
		engine.set_priority(constraint, priority);
	}
	engine.set_translates_autoresizing_mask(first, false);
	engine.add_constraint(target, constraint);
	constraint
}

/// Resolves the install target, then builds.
///
/// Two-view relations install on the nearest common ancestor of the
/// participants; absolute constraints install on their sole participant.
/// Resolution happens first so a failed resolution constructs nothing.
pub(super) fn build(
	engine: &mut Engine,
	first: ViewId,
	first_attr: Attr,
	relation: Relation,
	second: Option<(ViewId, Attr)>,
	multiplier: f64,
	constant: f64,
) -> Result<ConstraintId> {
	let target = match second {
		Some((second_view, _)) => ancestor::common_ancestor(engine, first, second_view)?,
		None => first,
	};
	let (second_view, second_attr) = match second {
		Some((view, attr)) => (Some(view), attr.attribute()),
		None => (None, Attribute::NotAnAttribute),
	};
	Ok(build_on(
		engine,
		target,
		first,
		first_attr.attribute(),
		relation,
		second_view,
		second_attr,
		multiplier,
		constant,
	))
}

/// Pins the non-excluded edges of `view` to its superview.
///
/// `Left`/`Right` exclusions also exclude `Leading`/`Trailing`; the pins
/// themselves are always leading/trailing relative.
pub(super) fn pin_edges(
	engine: &mut Engine,
	view: ViewId,
	insets: EdgeInsets,
	excluding: Option<Edge>,
) -> Result<Vec<ConstraintId>> {
	let mut constraints = Vec::with_capacity(4);
	if !matches!(excluding, Some(Edge::Top)) {
		constraints.push(engine.pin_edge_to_superview_edge(view, Edge::Top, insets.top)?);
	}
	if !matches!(excluding, Some(Edge::Leading | Edge::Left)) {
		constraints.push(engine.pin_edge_to_superview_edge(view, Edge::Leading, insets.left)?);
	}
	if !matches!(excluding, Some(Edge::Bottom)) {
		constraints.push(engine.pin_edge_to_superview_edge(view, Edge::Bottom, insets.bottom)?);
	}
	if !matches!(excluding, Some(Edge::Trailing | Edge::Right)) {
		constraints.push(engine.pin_edge_to_superview_edge(view, Edge::Trailing, insets.right)?);
	}
	Ok(constraints)
}
