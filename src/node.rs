//! Children as seen by the pane.
//!
//! The host supplies nodes that answer size queries and accept bounds. The
//! pane wraps each one in an [`Entry`] holding its constraint, so constraints
//! live next to the node instead of in a side table.

use crate::constraint::{self, Constraint};
use crate::geometry::{Axis, Rect};

/// Size queries and placement for a laid-out child.
///
/// Hints are the size of the other axis when known. `None` means the caller
/// has no opinion.
pub trait Node {
    /// Smallest acceptable width.
    fn min_width(&self, height: Option<f64>) -> f64;
    /// Natural width.
    fn pref_width(&self, height: Option<f64>) -> f64;
    /// Smallest acceptable height.
    fn min_height(&self, width: Option<f64>) -> f64;
    /// Natural height.
    fn pref_height(&self, width: Option<f64>) -> f64;
    /// Place the node.
    fn set_bounds(&mut self, bounds: Rect);
}

/// A pane child: a host node, or an invisible spacer.
#[derive(Clone, Debug, PartialEq)]
pub enum Slot<N> {
    Node(N),
    /// Zero-sized placeholder, normally given [`Constraint::Fill`].
    Spacer,
}

impl<N> Slot<N> {
    /// The node, if this is not a spacer.
    pub fn node(&self) -> Option<&N> {
        match self {
            Self::Node(n) => Some(n),
            Self::Spacer => None,
        }
    }

    /// Mutable access to the node.
    pub fn node_mut(&mut self) -> Option<&mut N> {
        match self {
            Self::Node(n) => Some(n),
            Self::Spacer => None,
        }
    }

    /// Take the node out.
    pub fn into_node(self) -> Option<N> {
        match self {
            Self::Node(n) => Some(n),
            Self::Spacer => None,
        }
    }
}

impl<N: Node> Slot<N> {
    /// Main-axis size, preferred or minimum.
    pub(crate) fn main_size(&self, axis: Axis, preferred: bool) -> f64 {
        let Self::Node(n) = self else { return 0.0 };
        match (axis, preferred) {
            (Axis::Horizontal, true) => n.pref_width(None),
            (Axis::Horizontal, false) => n.min_width(None),
            (Axis::Vertical, true) => n.pref_height(None),
            (Axis::Vertical, false) => n.min_height(None),
        }
    }

    /// Cross-axis size for a given main-axis extent.
    pub(crate) fn cross_size(&self, axis: Axis, main: Option<f64>, preferred: bool) -> f64 {
        let Self::Node(n) = self else { return 0.0 };
        match (axis, preferred) {
            (Axis::Horizontal, true) => n.pref_height(main),
            (Axis::Horizontal, false) => n.min_height(main),
            (Axis::Vertical, true) => n.pref_width(main),
            (Axis::Vertical, false) => n.min_width(main),
        }
    }

    pub(crate) fn place(&mut self, bounds: Rect) {
        if let Self::Node(n) = self {
            n.set_bounds(bounds);
        }
    }
}

/// A child together with its layout properties.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry<N> {
    pub slot: Slot<N>,
    /// Stored constraint. `None` reads as [`Constraint::UsePreferred`].
    pub constraint: Option<Constraint>,
    /// Unmanaged entries are skipped by layout and keep their bounds.
    pub managed: bool,
}

impl<N> Entry<N> {
    pub fn new(slot: Slot<N>) -> Self {
        Self {
            slot,
            constraint: None,
            managed: true,
        }
    }

    pub fn with_constraint(slot: Slot<N>, constraint: Constraint) -> Self {
        Self {
            constraint: Some(constraint),
            ..Self::new(slot)
        }
    }

    /// The constraint a layout pass uses for this entry.
    pub fn resolved_constraint(&self) -> Constraint {
        constraint::resolve(self.constraint)
    }
}
