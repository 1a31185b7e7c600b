//! The view tree and constraint store.
//!
//! [`Engine`] owns every view and constraint and indexes installed
//! constraints by the view they were installed on, mirroring how the host
//! toolkit keeps a per-view constraint list rather than a participant
//! index. It holds the data the solver would consume but performs no
//! solving itself.

use slab::Slab;

use crate::attribute::{Attribute, Orientation};
use crate::constraint::{Constraint, Relation};
use crate::geometry::Size;
use crate::priority::Priority;

/// Handle to a view owned by an [`Engine`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct ViewId(usize);

/// Handle to a constraint owned by an [`Engine`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct ConstraintId(usize);

/// Handle to a view controller owned by an [`Engine`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct ControllerId(usize);

#[derive(Debug)]
struct ViewNode {
	parent: Option<ViewId>,
	subviews: Vec<ViewId>,
	translates_autoresizing_mask: bool,
	hugging: [Priority; 2],
	compression_resistance: [Priority; 2],
	installed: Vec<ConstraintId>,
	intrinsic: Option<Intrinsic>,
}

impl ViewNode {
	fn new() -> Self {
		Self {
			parent: None,
			subviews: Vec::new(),
			translates_autoresizing_mask: true,
			hugging: [Priority::DEFAULT_LOW; 2],
			compression_resistance: [Priority::DEFAULT_HIGH; 2],
			installed: Vec::new(),
			intrinsic: None,
		}
	}
}

/// The pair of synthesized constraints backing an intrinsic content size.
#[derive(Debug)]
struct Intrinsic {
	size: Size,
	width: ConstraintId,
	height: ConstraintId,
}

#[derive(Debug)]
struct ConstraintRecord {
	constraint: Constraint,
	installed_on: Option<ViewId>,
}

#[derive(Debug)]
struct ControllerNode {
	view: ViewId,
	top_guide: Option<ViewId>,
	bottom_guide: Option<ViewId>,
}

/// The host layout engine: a view tree plus a constraint store.
///
/// Handles are plain arena keys; passing a handle that this engine did not
/// hand out (or one whose slot was recycled) panics, like any out-of-bounds
/// index. All mutation happens on the single thread that owns the engine.
#[derive(Debug, Default)]
pub struct Engine {
	views: Slab<ViewNode>,
	constraints: Slab<ConstraintRecord>,
	controllers: Slab<ControllerNode>,
}

impl Engine {
	/// Creates an empty engine.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a view with no superview.
	///
	/// The view translates its autoresizing mask into constraints until told
	/// otherwise, matching the host default.
	pub fn create_view(&mut self) -> ViewId {
		ViewId(self.views.insert(ViewNode::new()))
	}

	/// Makes `child` a subview of `parent`, detaching it from any previous
	/// superview.
	pub fn add_subview(&mut self, parent: ViewId, child: ViewId) {
		debug_assert!(parent != child, "a view cannot be its own subview");
		debug_assert!(
			!self.ancestry(parent).any(|v| v == child),
			"reparenting a view under its own descendant"
		);
		if let Some(old) = self.views[child.0].parent {
			self.views[old.0].subviews.retain(|&v| v != child);
		}
		self.views[child.0].parent = Some(parent);
		self.views[parent.0].subviews.push(child);
	}

	/// The view's superview, if it has one.
	pub fn parent(&self, view: ViewId) -> Option<ViewId> {
		self.views[view.0].parent
	}

	/// The view's subviews, in insertion order.
	pub fn subviews(&self, view: ViewId) -> &[ViewId] {
		&self.views[view.0].subviews
	}

	/// Iterates the chain `view, parent(view), …, root`.
	pub fn ancestry(&self, view: ViewId) -> impl Iterator<Item = ViewId> + '_ {
		core::iter::successors(Some(view), move |&v| self.parent(v))
	}

	/// Whether the view still converts its autoresizing mask to constraints.
	pub fn translates_autoresizing_mask(&self, view: ViewId) -> bool {
		self.views[view.0].translates_autoresizing_mask
	}

	/// Enables or disables autoresizing-mask translation for the view.
	pub fn set_translates_autoresizing_mask(&mut self, view: ViewId, translates: bool) {
		self.views[view.0].translates_autoresizing_mask = translates;
	}

	/// The view's content-hugging priority along `orientation`.
	pub fn content_hugging_priority(&self, view: ViewId, orientation: Orientation) -> Priority {
		self.views[view.0].hugging[orientation.index()]
	}

	/// Sets the view's content-hugging priority along `orientation`.
	pub fn set_content_hugging_priority(
		&mut self,
		view: ViewId,
		orientation: Orientation,
		priority: Priority,
	) {
		self.views[view.0].hugging[orientation.index()] = priority;
	}

	/// The view's compression-resistance priority along `orientation`.
	pub fn content_compression_resistance_priority(
		&self,
		view: ViewId,
		orientation: Orientation,
	) -> Priority {
		self.views[view.0].compression_resistance[orientation.index()]
	}

	/// Sets the view's compression-resistance priority along `orientation`.
	pub fn set_content_compression_resistance_priority(
		&mut self,
		view: ViewId,
		orientation: Orientation,
		priority: Priority,
	) {
		self.views[view.0].compression_resistance[orientation.index()] = priority;
	}

	/// The view's intrinsic content size, if one has been set.
	pub fn intrinsic_content_size(&self, view: ViewId) -> Option<Size> {
		self.views[view.0].intrinsic.as_ref().map(|i| i.size)
	}

	/// Sets or clears the view's intrinsic content size.
	///
	/// Setting a size synthesizes one width and one height constraint at
	/// [`Priority::INTRINSIC`], installed on the view itself; these are the
	/// implicit constraints a remover's priority filter preserves. Replacing
	/// or clearing the size retires the previous pair.
	pub fn set_intrinsic_content_size(&mut self, view: ViewId, size: Option<Size>) {
		if let Some(old) = self.views[view.0].intrinsic.take() {
			self.remove_constraint(view, old.width);
			self.remove_constraint(view, old.height);
			self.constraints.remove(old.width.0);
			self.constraints.remove(old.height.0);
		}
		let Some(size) = size else { return };
		let width = self.make_implicit(view, Attribute::Width, size.width);
		let height = self.make_implicit(view, Attribute::Height, size.height);
		self.add_constraint(view, width);
		self.add_constraint(view, height);
		self.views[view.0].intrinsic = Some(Intrinsic { size, width, height });
	}

	fn make_implicit(&mut self, view: ViewId, attr: Attribute, constant: f64) -> ConstraintId {
		let id = self.make_constraint(
			view,
			attr,
			Relation::Equal,
			None,
			Attribute::NotAnAttribute,
			1.0,
			constant,
		);
		self.set_priority(id, Priority::INTRINSIC);
		id
	}

	/// Constructs a constraint without installing it.
	///
	/// New constraints start at [`Priority::REQUIRED`].
	#[allow(clippy::too_many_arguments)]
	pub fn make_constraint(
		&mut self,
		first: ViewId,
		first_attr: Attribute,
		relation: Relation,
		second: Option<ViewId>,
		second_attr: Attribute,
		multiplier: f64,
		constant: f64,
	) -> ConstraintId {
		debug_assert!(
			second.is_some() || second_attr == Attribute::NotAnAttribute,
			"absolute constraints take NotAnAttribute as their second attribute"
		);
		let constraint = Constraint {
			first,
			first_attr,
			relation,
			second,
			second_attr,
			multiplier,
			constant,
			priority: Priority::REQUIRED,
		};
		ConstraintId(self.constraints.insert(ConstraintRecord {
			constraint,
			installed_on: None,
		}))
	}

	/// Reads a constraint's fields.
	pub fn constraint(&self, id: ConstraintId) -> &Constraint {
		&self.constraints[id.0].constraint
	}

	/// Overwrites a constraint's priority.
	///
	/// The host contract forbids changing the priority of an installed
	/// constraint; callers must write priorities before installing.
	pub fn set_priority(&mut self, id: ConstraintId, priority: Priority) {
		let record = &mut self.constraints[id.0];
		debug_assert!(
			record.installed_on.is_none(),
			"cannot change the priority of an installed constraint"
		);
		record.constraint.priority = priority;
	}

	/// Installs a constraint on `target`.
	pub fn add_constraint(&mut self, target: ViewId, id: ConstraintId) {
		let record = &mut self.constraints[id.0];
		debug_assert!(
			record.installed_on.is_none(),
			"constraint is already installed"
		);
		record.installed_on = Some(target);
		tracing::trace!(constraint = %record.constraint, ?target, "install");
		self.views[target.0].installed.push(id);
	}

	/// Uninstalls a constraint from `target`.
	pub fn remove_constraint(&mut self, target: ViewId, id: ConstraintId) {
		let record = &mut self.constraints[id.0];
		debug_assert_eq!(
			record.installed_on,
			Some(target),
			"constraint is not installed on that view"
		);
		record.installed_on = None;
		tracing::trace!(constraint = %record.constraint, ?target, "uninstall");
		self.views[target.0].installed.retain(|&c| c != id);
	}

	/// The view a constraint is currently installed on, if any.
	pub fn installed_on(&self, id: ConstraintId) -> Option<ViewId> {
		self.constraints[id.0].installed_on
	}

	/// The constraints installed on `view`, in installation order.
	pub fn constraints_on(&self, view: ViewId) -> &[ConstraintId] {
		&self.views[view.0].installed
	}

	/// Creates a view controller with a fresh root view.
	///
	/// With `with_guides`, the controller also gets top and bottom layout
	/// guides: constrainable items realized as subviews of the root view.
	/// Without, the guide accessors return `None`, modelling a host that
	/// predates layout guides.
	pub fn create_controller(&mut self, with_guides: bool) -> ControllerId {
		let view = self.create_view();
		let (top_guide, bottom_guide) = if with_guides {
			let top = self.create_view();
			let bottom = self.create_view();
			self.add_subview(view, top);
			self.add_subview(view, bottom);
			(Some(top), Some(bottom))
		} else {
			(None, None)
		};
		ControllerId(self.controllers.insert(ControllerNode {
			view,
			top_guide,
			bottom_guide,
		}))
	}

	/// The controller's root view.
	pub fn controller_view(&self, controller: ControllerId) -> ViewId {
		self.controllers[controller.0].view
	}

	/// The controller's top layout guide, when the host provides one.
	pub fn top_guide(&self, controller: ControllerId) -> Option<ViewId> {
		self.controllers[controller.0].top_guide
	}

	/// The controller's bottom layout guide, when the host provides one.
	pub fn bottom_guide(&self, controller: ControllerId) -> Option<ViewId> {
		self.controllers[controller.0].bottom_guide
	}
}
