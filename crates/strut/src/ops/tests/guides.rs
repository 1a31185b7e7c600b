//! Layout-guide pinning tests.

use pretty_assertions::assert_eq;
use strut_engine::{Attribute, Engine, Relation};

use crate::error::LayoutError;
use crate::ops::AutoLayout;

#[test]
fn top_guide_pins_below_the_guide() {
	let mut engine = Engine::new();
	let controller = engine.create_controller(true);
	let root = engine.controller_view(controller);
	let content = engine.new_auto_layout_view();
	engine.add_subview(root, content);

	let id = engine.pin_to_top_guide(content, controller, 20.0).unwrap();
	let constraint = engine.constraint(id);
	assert_eq!(constraint.first, content);
	assert_eq!(constraint.first_attr, Attribute::Top);
	assert_eq!(constraint.relation, Relation::Equal);
	assert_eq!(constraint.second, engine.top_guide(controller));
	assert_eq!(constraint.second_attr, Attribute::Bottom);
	assert_eq!(constraint.constant, 20.0);
	assert_eq!(engine.installed_on(id), Some(root));
}

#[test]
fn bottom_guide_pins_above_the_guide_with_a_negative_inset() {
	let mut engine = Engine::new();
	let controller = engine.create_controller(true);
	let root = engine.controller_view(controller);
	let content = engine.new_auto_layout_view();
	engine.add_subview(root, content);

	let id = engine
		.pin_to_bottom_guide(content, controller, 12.0)
		.unwrap();
	let constraint = engine.constraint(id);
	assert_eq!(constraint.first_attr, Attribute::Bottom);
	assert_eq!(constraint.second, engine.bottom_guide(controller));
	assert_eq!(constraint.second_attr, Attribute::Top);
	assert_eq!(constraint.constant, -12.0);
}

#[test]
fn hosts_without_guides_are_unsupported() {
	let mut engine = Engine::new();
	let controller = engine.create_controller(false);
	let root = engine.controller_view(controller);
	let content = engine.new_auto_layout_view();
	engine.add_subview(root, content);

	assert_eq!(
		engine.pin_to_top_guide(content, controller, 0.0),
		Err(LayoutError::UnsupportedOnHost)
	);
	assert_eq!(
		engine.pin_to_bottom_guide(content, controller, 0.0),
		Err(LayoutError::UnsupportedOnHost)
	);
	assert_eq!(engine.constraints_on(root), &[]);
}
