//! Tests for the generic attribute family and its raw-integer boundary.

use pretty_assertions::assert_eq;
use rstest::rstest;
use strut_engine::{Attribute, Relation};

use super::sibling_tree;
use crate::attr::{Axis, Dimension, Edge};
use crate::error::LayoutError;
use crate::ops::AutoLayout;

#[test]
fn any_attribute_can_relate_to_any_other() {
	let (mut engine, root, a, b) = sibling_tree();
	let id = engine
		.constrain_attr(a, Axis::Baseline, Edge::Top, b, -2.0)
		.unwrap();
	let constraint = engine.constraint(id);
	assert_eq!(constraint.first_attr, Attribute::Baseline);
	assert_eq!(constraint.second_attr, Attribute::Top);
	assert_eq!(constraint.constant, -2.0);
	assert_eq!(engine.installed_on(id), Some(root));
}

#[test]
fn multiples_go_through_the_same_funnel() {
	let (mut engine, _, a, b) = sibling_tree();
	let id = engine
		.constrain_attr_to_multiple(
			a,
			Dimension::Width,
			Dimension::Height,
			b,
			2.0,
			Relation::LessOrEqual,
		)
		.unwrap();
	let constraint = engine.constraint(id);
	assert_eq!(constraint.multiplier, 2.0);
	assert_eq!(constraint.relation, Relation::LessOrEqual);
}

#[test]
fn raw_codes_resolve_to_typed_attributes() {
	let (mut engine, _, a, b) = sibling_tree();
	let id = engine
		.constrain_attribute(
			a,
			Attribute::CenterX.code(),
			Attribute::Leading.code(),
			b,
			0.0,
			Relation::Equal,
		)
		.unwrap();
	let constraint = engine.constraint(id);
	assert_eq!(constraint.first_attr, Attribute::CenterX);
	assert_eq!(constraint.second_attr, Attribute::Leading);
}

#[rstest]
#[case::not_an_attribute(0)]
#[case::unknown(42)]
fn bad_raw_codes_are_rejected_before_anything_installs(#[case] code: i32) {
	let (mut engine, root, a, b) = sibling_tree();
	assert_eq!(
		engine.constrain_attribute(a, code, Attribute::Top.code(), b, 0.0, Relation::Equal),
		Err(LayoutError::InvalidAttribute(code))
	);
	assert_eq!(
		engine.constrain_attribute_to_multiple(
			a,
			Attribute::Top.code(),
			code,
			b,
			1.0,
			Relation::Equal
		),
		Err(LayoutError::InvalidAttribute(code))
	);
	assert_eq!(engine.constraints_on(root), &[]);
}
