//! Dimension matching and absolute sizing tests.

use pretty_assertions::assert_eq;
use rstest::rstest;
use strut_engine::{Attribute, Relation, Size};

use super::sibling_tree;
use crate::attr::Dimension;
use crate::ops::AutoLayout;

#[test]
fn match_dimension_relates_the_two_dimensions() {
	let (mut engine, root, a, b) = sibling_tree();
	let id = engine
		.match_dimension(a, Dimension::Width, Dimension::Height, b, 4.0)
		.unwrap();
	let constraint = engine.constraint(id);
	assert_eq!(constraint.first_attr, Attribute::Width);
	assert_eq!(constraint.second_attr, Attribute::Height);
	assert_eq!(constraint.constant, 4.0);
	assert_eq!(constraint.multiplier, 1.0);
	assert_eq!(engine.installed_on(id), Some(root));
}

#[test]
fn match_dimension_to_multiple_scales_without_offset() {
	let (mut engine, _, a, b) = sibling_tree();
	let id = engine
		.match_dimension_to_multiple(a, Dimension::Height, Dimension::Height, b, 0.5)
		.unwrap();
	let constraint = engine.constraint(id);
	assert_eq!(constraint.multiplier, 0.5);
	assert_eq!(constraint.constant, 0.0);
}

#[rstest]
#[case::at_most(Relation::LessOrEqual)]
#[case::exactly(Relation::Equal)]
#[case::at_least(Relation::GreaterOrEqual)]
fn match_dimension_keeps_the_requested_relation(#[case] relation: Relation) {
	let (mut engine, _, a, b) = sibling_tree();
	let id = engine
		.match_dimension_with_relation(a, Dimension::Width, Dimension::Width, b, 0.0, relation)
		.unwrap();
	assert_eq!(engine.constraint(id).relation, relation);
}

#[test]
fn set_dimension_is_absolute_and_installs_on_the_view() {
	let (mut engine, _, a, _) = sibling_tree();
	let id = engine
		.set_dimension_to_size_with_relation(a, Dimension::Width, 100.0, Relation::GreaterOrEqual)
		.unwrap();
	let constraint = engine.constraint(id);
	assert_eq!(constraint.relation, Relation::GreaterOrEqual);
	assert_eq!(constraint.second, None);
	assert_eq!(constraint.second_attr, Attribute::NotAnAttribute);
	assert_eq!(constraint.multiplier, 1.0);
	assert_eq!(constraint.constant, 100.0);
	assert_eq!(engine.installed_on(id), Some(a));
}

#[test]
fn set_dimension_works_without_any_superview() {
	let mut engine = strut_engine::Engine::new();
	let orphan = engine.create_view();
	let id = engine
		.set_dimension_to_size(orphan, Dimension::Height, 40.0)
		.unwrap();
	assert_eq!(engine.installed_on(id), Some(orphan));
	assert!(!engine.translates_autoresizing_mask(orphan));
}

#[test]
fn set_dimensions_fixes_width_then_height() {
	let (mut engine, _, a, _) = sibling_tree();
	let [width, height] = engine
		.set_dimensions_to_size(a, Size::new(320.0, 240.0))
		.unwrap();
	assert_eq!(engine.constraint(width).first_attr, Attribute::Width);
	assert_eq!(engine.constraint(width).constant, 320.0);
	assert_eq!(engine.constraint(height).first_attr, Attribute::Height);
	assert_eq!(engine.constraint(height).constant, 240.0);
}
