//! Discovery of constraints affecting a view.
//!
//! The engine indexes constraints by install target, not by participant.
//! A constraint is always installed on a common ancestor of its
//! participants, so walking a view's ancestry visits every list that could
//! mention it.

use itertools::Itertools;
use strut_engine::{ConstraintId, Engine, ViewId};

/// Collects the installed constraints that list `view` as a participant.
///
/// With `include_implicit` false, constraints in the reserved implicit
/// priority band are left alone.
pub(super) fn affecting(engine: &Engine, view: ViewId, include_implicit: bool) -> Vec<ConstraintId> {
	let mut found = Vec::new();
	for node in engine.ancestry(view) {
		for &id in engine.constraints_on(node) {
			let constraint = engine.constraint(id);
			if constraint.involves(view) && (include_implicit || !constraint.priority.is_implicit()) {
				found.push(id);
			}
		}
	}
	found
}

/// Collects affecting constraints for `view` and every descendant.
///
/// A constraint between two views in the subtree is found once per
/// participant, so the result is de-duplicated by identity. Nothing is
/// memoized across calls; the tree mutates between them.
pub(super) fn affecting_subtree(
	engine: &Engine,
	view: ViewId,
	include_implicit: bool,
) -> Vec<ConstraintId> {
	let mut found = Vec::new();
	let mut pending = vec![view];
	while let Some(v) = pending.pop() {
		found.extend(affecting(engine, v, include_implicit));
		pending.extend_from_slice(engine.subviews(v));
	}
	found.into_iter().unique().collect()
}
