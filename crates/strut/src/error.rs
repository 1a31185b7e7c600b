//! Error types for constraint construction and removal.

use thiserror::Error;

/// Errors surfaced by the convenience layer.
///
/// Every operation fails synchronously; there is no recovery and no retry.
/// Multi-constraint operations that fail midway leave the constraints they
/// already installed in place.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
	/// An integer attribute code matched no edge, axis, or dimension.
	#[error("unrecognized layout attribute code: {0}")]
	InvalidAttribute(i32),

	/// Two views live in disjoint view trees, or a superview-relative
	/// operation was applied to a view with no superview.
	#[error("views do not share a common ancestor")]
	NoCommonAncestor,

	/// A bulk operation was given fewer views than it needs.
	#[error("expected at least {required} views, got {actual}")]
	InsufficientViews {
		/// Minimum number of views the operation needs.
		required: usize,
		/// Number of views actually supplied.
		actual: usize,
	},

	/// A content-priority call was made outside of [`with_priority`].
	///
	/// [`with_priority`]: crate::with_priority
	#[error("content priorities can only be set inside an active priority region")]
	NoActivePriorityRegion,

	/// The host platform does not provide the requested facility
	/// (layout guides).
	#[error("not supported on this host")]
	UnsupportedOnHost,
}

/// Result type for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;
