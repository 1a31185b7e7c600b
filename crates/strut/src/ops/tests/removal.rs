//! Bulk constraint removal tests.

use pretty_assertions::assert_eq;
use strut_engine::{Engine, Size, ViewId};

use super::{child_of, sibling_tree};
use crate::attr::{Dimension, Edge};
use crate::insets::EdgeInsets;
use crate::ops::AutoLayout;

/// Every constraint reachable from `view`'s ancestry that mentions it.
fn affecting_count(engine: &Engine, view: ViewId) -> usize {
	engine
		.ancestry(view)
		.collect::<Vec<_>>()
		.into_iter()
		.flat_map(|node| engine.constraints_on(node).to_vec())
		.filter(|&id| engine.constraint(id).involves(view))
		.count()
}

#[test]
fn remove_detaches_and_tolerates_repeats() {
	let (mut engine, root, a, _) = sibling_tree();
	let id = engine.pin_edge_to_superview_edge(a, Edge::Top, 0.0).unwrap();
	assert_eq!(engine.installed_on(id), Some(root));
	engine.remove(id);
	assert_eq!(engine.installed_on(id), None);
	assert_eq!(engine.constraints_on(root), &[]);
	engine.remove(id);
}

#[test]
fn remove_many_detaches_each() {
	let (mut engine, root, a, _) = sibling_tree();
	let constraints = engine
		.pin_edges_to_superview(a, EdgeInsets::ZERO)
		.unwrap();
	engine.remove_many(&constraints);
	assert_eq!(engine.constraints_on(root), &[]);
}

#[test]
fn affecting_removal_reaches_constraints_installed_on_ancestors() {
	let (mut engine, root, a, b) = sibling_tree();
	let pinned = engine.pin_edge(a, Edge::Right, Edge::Left, b, 8.0).unwrap();
	let sized = engine.set_dimension_to_size(a, Dimension::Width, 50.0).unwrap();
	let unrelated = engine.pin_edge_to_superview_edge(b, Edge::Top, 0.0).unwrap();

	let removed = engine.remove_affecting(a, false);
	assert_eq!(removed.len(), 2);
	assert!(removed.contains(&pinned));
	assert!(removed.contains(&sized));

	assert_eq!(affecting_count(&engine, a), 0);
	// The sibling's own pin survives.
	assert_eq!(engine.installed_on(unrelated), Some(root));
}

#[test]
fn implicit_constraints_survive_unless_asked_for() {
	let (mut engine, _, a, _) = sibling_tree();
	engine.set_intrinsic_content_size(a, Some(Size::new(44.0, 44.0)));
	engine.pin_edge_to_superview_edge(a, Edge::Leading, 0.0).unwrap();

	let removed = engine.remove_affecting(a, false);
	assert_eq!(removed.len(), 1);
	// The two intrinsic-size constraints are still installed on the view.
	assert_eq!(affecting_count(&engine, a), 2);

	let removed = engine.remove_affecting(a, true);
	assert_eq!(removed.len(), 2);
	assert_eq!(affecting_count(&engine, a), 0);
}

#[test]
fn subtree_removal_covers_descendants_and_dedupes() {
	let mut engine = Engine::new();
	let root = engine.create_view();
	let panel = child_of(&mut engine, root);
	let x = child_of(&mut engine, panel);
	let y = child_of(&mut engine, panel);

	// Found from both x and y; must be removed (and reported) once.
	let between = engine.pin_edge(x, Edge::Right, Edge::Left, y, 4.0).unwrap();
	let panel_pin = engine
		.pin_edge_to_superview_edge(panel, Edge::Top, 0.0)
		.unwrap();
	let x_size = engine.set_dimension_to_size(x, Dimension::Width, 10.0).unwrap();

	let removed = engine.remove_affecting_subtree(panel, false);
	assert_eq!(removed.len(), 3);
	assert_eq!(removed.iter().filter(|&&id| id == between).count(), 1);
	assert!(removed.contains(&panel_pin));
	assert!(removed.contains(&x_size));
	for view in [panel, x, y] {
		assert_eq!(affecting_count(&engine, view), 0);
	}
	assert_eq!(engine.constraints_on(root), &[]);
	assert_eq!(engine.constraints_on(panel), &[]);
}

#[test]
fn subtree_removal_leaves_outside_constraints_alone() {
	let mut engine = Engine::new();
	let root = engine.create_view();
	let panel = child_of(&mut engine, root);
	let other = child_of(&mut engine, root);
	let outside = engine
		.pin_edge_to_superview_edge(other, Edge::Bottom, 0.0)
		.unwrap();

	engine.pin_edge_to_superview_edge(panel, Edge::Top, 0.0).unwrap();
	engine.remove_affecting_subtree(panel, true);

	assert_eq!(engine.installed_on(outside), Some(root));
}
