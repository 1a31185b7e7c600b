//! Scoped priority regions.
//!
//! A region makes a priority ambient: every constraint the layer builds
//! while the region is active adopts it, without the priority being
//! threaded through each call. The stack lives in a thread local because
//! all layout mutation happens on the host UI dispatch context; use from
//! any other thread is outside the contract and simply sees an empty stack.

use std::cell::RefCell;

use strut_engine::Priority;

thread_local! {
	static STACK: RefCell<Vec<Priority>> = const { RefCell::new(Vec::new()) };
}

/// Pops its frame when dropped, so the stack unwinds with the scope on
/// every exit path.
struct Frame;

impl Frame {
	fn push(priority: Priority) -> Self {
		STACK.with(|stack| stack.borrow_mut().push(priority));
		Self
	}
}

impl Drop for Frame {
	fn drop(&mut self) {
		STACK.with(|stack| {
			stack.borrow_mut().pop();
		});
	}
}

/// Runs `body` with `priority` as the ambient constraint priority.
///
/// Regions nest: the innermost frame wins, and when `body` exits, even by
/// panic, the enclosing frame (or the engine default, when there is none)
/// is back in effect.
///
/// # Examples
///
/// ```
/// use strut::{AutoLayout, Dimension, Engine, Priority, with_priority};
///
/// let mut engine = Engine::new();
/// let badge = engine.new_auto_layout_view();
/// let constraint = with_priority(250.0, || {
///     engine.set_dimension_to_size(badge, Dimension::Width, 24.0)
/// })?;
/// assert_eq!(engine.constraint(constraint).priority, Priority::new(250.0));
/// # Ok::<(), strut::LayoutError>(())
/// ```
pub fn with_priority<R>(priority: impl Into<Priority>, body: impl FnOnce() -> R) -> R {
	let _frame = Frame::push(priority.into());
	body()
}

/// The ambient priority of the innermost active region, if any.
pub fn current_priority() -> Option<Priority> {
	STACK.with(|stack| stack.borrow().last().copied())
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn no_region_means_no_priority() {
		assert_eq!(current_priority(), None);
	}

	#[test]
	fn regions_nest_and_restore() {
		with_priority(500.0, || {
			assert_eq!(current_priority(), Some(Priority::new(500.0)));
			with_priority(250.0, || {
				assert_eq!(current_priority(), Some(Priority::new(250.0)));
			});
			assert_eq!(current_priority(), Some(Priority::new(500.0)));
		});
		assert_eq!(current_priority(), None);
	}

	#[test]
	fn early_exit_pops_the_frame() {
		fn bail() -> Result<(), ()> {
			with_priority(100.0, || Err(()))
		}
		assert!(bail().is_err());
		assert_eq!(current_priority(), None);
	}

	#[test]
	fn panics_pop_the_frame() {
		let result = std::panic::catch_unwind(|| {
			with_priority(750.0, || panic!("boom"));
		});
		assert!(result.is_err());
		assert_eq!(current_priority(), None);
	}

	#[test]
	fn priorities_clamp_on_entry() {
		with_priority(2000.0, || {
			assert_eq!(current_priority(), Some(Priority::REQUIRED));
		});
	}
}
