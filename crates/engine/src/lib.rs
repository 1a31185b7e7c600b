#![warn(missing_docs)]

//! A model of the host toolkit's view tree and constraint engine.
//!
//! This crate supplies the primitives the [`strut`] convenience layer
//! drives: an owned view tree with per-view constraint lists, linear
//! [`Constraint`]s over [`Attribute`]s, per-orientation content priorities,
//! and view controllers with optional layout guides.
//!
//! Two host conventions matter to everything built on top:
//!
//! - Constraints are indexed by the view they are *installed on* (an
//!   ancestor of their participants), not by the views they mention.
//! - Constraints the engine synthesizes from an intrinsic content size are
//!   stamped with [`Priority::INTRINSIC`], inside the reserved implicit
//!   band below [`Priority::REQUIRED`].
//!
//! The engine stores and indexes constraints but does not solve them;
//! solving belongs to the platform's solver and is out of scope here.
//!
//! [`strut`]: https://docs.rs/strut

mod attribute;
mod constraint;
mod engine;
mod geometry;
mod priority;

pub use attribute::{Attribute, Orientation};
pub use constraint::{Constraint, Relation};
pub use engine::{ConstraintId, ControllerId, Engine, ViewId};
pub use geometry::Size;
pub use priority::Priority;
