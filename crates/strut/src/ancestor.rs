//! Nearest-common-ancestor resolution over the view tree.
//!
//! The engine installs every two-view constraint on a shared ancestor of
//! its participants, so relation-building starts here. Resolution is
//! transient; nothing is cached across calls because the tree mutates.

use std::collections::HashSet;

use strut_engine::{Engine, ViewId};

use crate::error::{LayoutError, Result};

/// Finds the nearest common ancestor of `a` and `b`.
///
/// A view counts as its own ancestor: if `b` is inside `a`'s subtree the
/// result is `a` (and vice versa). Runs in `O(depth(a) + depth(b))`.
pub fn common_ancestor(engine: &Engine, a: ViewId, b: ViewId) -> Result<ViewId> {
	let above_a: HashSet<ViewId> = engine.ancestry(a).collect();
	engine
		.ancestry(b)
		.find(|v| above_a.contains(v))
		.ok_or(LayoutError::NoCommonAncestor)
}

/// Finds the nearest common ancestor of every view in `views`.
///
/// Resolution left-folds pairwise: `ca(v1, v2, v3) = ca(ca(v1, v2), v3)`.
/// Fails with [`LayoutError::InsufficientViews`] on fewer than two views
/// and with [`LayoutError::NoCommonAncestor`] as soon as any pair spans
/// disjoint trees.
pub fn common_ancestor_of(engine: &Engine, views: &[ViewId]) -> Result<ViewId> {
	let [first, rest @ ..] = views else {
		return Err(LayoutError::InsufficientViews {
			required: 2,
			actual: views.len(),
		});
	};
	if rest.is_empty() {
		return Err(LayoutError::InsufficientViews {
			required: 2,
			actual: views.len(),
		});
	}
	rest.iter()
		.try_fold(*first, |ancestor, &view| common_ancestor(engine, ancestor, view))
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn child_of(engine: &mut Engine, parent: ViewId) -> ViewId {
		let child = engine.create_view();
		engine.add_subview(parent, child);
		child
	}

	#[test]
	fn siblings_resolve_to_their_superview() {
		let mut engine = Engine::new();
		let root = engine.create_view();
		let a = child_of(&mut engine, root);
		let b = child_of(&mut engine, root);
		assert_eq!(common_ancestor(&engine, a, b), Ok(root));
	}

	#[test]
	fn a_view_is_its_own_ancestor() {
		let mut engine = Engine::new();
		let root = engine.create_view();
		let inner = child_of(&mut engine, root);
		let leaf = child_of(&mut engine, inner);
		assert_eq!(common_ancestor(&engine, leaf, leaf), Ok(leaf));
		assert_eq!(common_ancestor(&engine, leaf, inner), Ok(inner));
		assert_eq!(common_ancestor(&engine, inner, leaf), Ok(inner));
	}

	#[test]
	fn cousins_resolve_to_the_shared_grandparent() {
		let mut engine = Engine::new();
		let root = engine.create_view();
		let left = child_of(&mut engine, root);
		let right = child_of(&mut engine, root);
		let a = child_of(&mut engine, left);
		let b = child_of(&mut engine, right);
		assert_eq!(common_ancestor(&engine, a, b), Ok(root));
	}

	#[test]
	fn disjoint_trees_are_rejected() {
		let mut engine = Engine::new();
		let x = engine.create_view();
		let y = engine.create_view();
		let a = child_of(&mut engine, x);
		let b = child_of(&mut engine, y);
		assert_eq!(common_ancestor(&engine, a, b), Err(LayoutError::NoCommonAncestor));
	}

	#[test]
	fn fold_over_a_collection() {
		let mut engine = Engine::new();
		let root = engine.create_view();
		let left = child_of(&mut engine, root);
		let a = child_of(&mut engine, left);
		let b = child_of(&mut engine, left);
		let c = child_of(&mut engine, root);
		assert_eq!(common_ancestor_of(&engine, &[a, b]), Ok(left));
		assert_eq!(common_ancestor_of(&engine, &[a, b, c]), Ok(root));
	}

	#[test]
	fn collections_need_at_least_two_views() {
		let mut engine = Engine::new();
		let solo = engine.create_view();
		assert_eq!(
			common_ancestor_of(&engine, &[solo]),
			Err(LayoutError::InsufficientViews {
				required: 2,
				actual: 1
			})
		);
		assert_eq!(
			common_ancestor_of(&engine, &[]),
			Err(LayoutError::InsufficientViews {
				required: 2,
				actual: 0
			})
		);
	}
}
