//! One-dimensional constraint layout for panes of children.
//!
//! A [`Pane`] arranges its children along one axis. Each child is sized by a
//! [`Constraint`]: exact pixels, a percentage of the surplus, a fill share,
//! its minimum size, or its preferred size. The pane resolves integer sizes
//! that add up, with gaps and margins, to exactly the available space, and
//! gives every child the full cross-axis extent.
//!
//! Pure geometry. `no_std` compatible (needs `alloc`).
//!
//! # Modules
//!
//! - [`constraint`] — Constraint kinds, raw numeric encoding, text parsing
//! - [`geometry`] — Axis, insets, margins and child bounds
//! - [`node`] — The [`Node`] trait hosts implement for their children
//! - [`pane`] — The container and its layout entry points
//! - [`position`] — Offsets and bounds from resolved sizes

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod constraint;
mod distribute;
mod estimate;
pub mod geometry;
pub mod node;
pub mod pane;
pub mod position;
mod px;
mod session;

pub use constraint::{Constraint, ParseConstraintError};
pub use geometry::{Axis, Insets, Margins, Rect};
pub use node::{Entry, Node, Slot};
pub use pane::Pane;
pub use session::{Distribution, Layout, LayoutError};
