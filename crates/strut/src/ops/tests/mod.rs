//! Tests for the constraint-building and removal operations.

mod attrs;
mod dimensions;
mod guides;
mod removal;

use strut_engine::{Engine, ViewId};

/// A fresh subview of `parent`.
fn child_of(engine: &mut Engine, parent: ViewId) -> ViewId {
	let child = engine.create_view();
	engine.add_subview(parent, child);
	child
}

/// An engine holding `root` with two sibling children `a` and `b`.
fn sibling_tree() -> (Engine, ViewId, ViewId, ViewId) {
	let mut engine = Engine::new();
	let root = engine.create_view();
	let a = child_of(&mut engine, root);
	let b = child_of(&mut engine, root);
	(engine, root, a, b)
}
