//! One layout pass.
//!
//! A [`Session`] snapshots the managed children and their constraints, then
//! runs the phases in order:
//!
//! ```text
//! estimate preferred ─┬─ available == preferred ──────────────────┐
//!                     ├─ available >  preferred ── expand ────────┤
//!                     └─ available <  preferred ── estimate min ──┤
//!                                                  └─ contract ───┤
//!                                                        position ┘
//! ```
//!
//! Nothing survives the pass except the returned [`Layout`].

use alloc::vec::Vec;
use core::fmt;

use crate::constraint::Constraint;
use crate::distribute;
use crate::estimate;
use crate::geometry::{Axis, Margins, Rect};
use crate::node::{Entry, Node, Slot};
use crate::position;
use crate::px;

/// A managed child as seen by one pass.
pub(crate) struct Child<'a, N> {
    /// Index in the pane, including unmanaged entries.
    pub index: usize,
    pub slot: &'a Slot<N>,
    pub constraint: Constraint,
}

/// Pane geometry that stays fixed for a pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Frame {
    pub axis: Axis,
    pub margins: Margins,
    pub gap: i32,
}

impl Frame {
    /// Total gap space between `n` children.
    pub(crate) fn gaps(&self, n: usize) -> Option<i32> {
        if n < 2 {
            return Some(0);
        }
        i32::try_from(n - 1).ok()?.checked_mul(self.gap)
    }
}

/// Which distribution a pass ran.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Distribution {
    /// Available space matched the preferred size; baselines used as-is.
    Unchanged,
    /// Surplus handed to fill and percent children.
    Expanded,
    /// Children shrunk toward their minimum sizes.
    Contracted,
}

/// Result of a layout pass.
///
/// All vectors are in child order and cover managed children only;
/// `children` maps each position back to its pane index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    pub distribution: Distribution,
    /// Pane index of each laid-out child.
    pub children: Vec<usize>,
    /// Resolved main-axis sizes. The last one may be negative on overflow.
    pub sizes: Vec<i32>,
    /// Leading edges, plus the trailing edge of the last child.
    pub positions: Vec<i32>,
    /// Bounds handed to each child.
    pub bounds: Vec<Rect>,
}

impl Layout {
    /// Number of laid-out children.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Bounds of the child at pane index `index`, if it was laid out.
    pub fn bounds_of(&self, index: usize) -> Option<Rect> {
        let i = self.children.iter().position(|&c| c == index)?;
        self.bounds.get(i).copied()
    }

    /// Whether even minimum sizes did not fit and the last child was
    /// squeezed below zero.
    pub fn overflowed(&self) -> bool {
        self.sizes.last().is_some_and(|&s| s < 0)
    }
}

/// Layout pass failure.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// Available width or height is NaN or infinite.
    NonFiniteAvailable,
    /// The child at this pane index reported a NaN or infinite size.
    NonFiniteSize { index: usize },
    /// A size or total does not fit in `i32`.
    Overflow,
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteAvailable => f.write_str("available size is not finite"),
            Self::NonFiniteSize { index } => {
                write!(f, "child {index} reported a non-finite size")
            }
            Self::Overflow => f.write_str("layout size overflow"),
        }
    }
}

impl core::error::Error for LayoutError {}

/// State for a single pass over the managed children.
pub(crate) struct Session<'a, N> {
    children: Vec<Child<'a, N>>,
    frame: Frame,
}

impl<'a, N: Node> Session<'a, N> {
    pub(crate) fn new(entries: &'a [Entry<N>], frame: Frame) -> Self {
        let children = entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.managed)
            .map(|(index, e)| Child {
                index,
                slot: &e.slot,
                constraint: e.resolved_constraint(),
            })
            .collect();
        Self { children, frame }
    }

    /// Aggregate main-axis size in preferred or minimum mode.
    pub(crate) fn main_size(&self, preferred: bool) -> Result<i32, LayoutError> {
        estimate::main_axis(&self.children, &self.frame, preferred).map(|e| e.total)
    }

    /// Aggregate cross-axis size for a main-axis hint.
    pub(crate) fn cross_size(&self, main: Option<f64>, preferred: bool) -> Result<i32, LayoutError> {
        estimate::cross_axis(&self.children, &self.frame, main, preferred)
    }

    /// Run the pass for a pane of `main` by `cross` pixels.
    pub(crate) fn run(self, main: f64, cross: f64) -> Result<Layout, LayoutError> {
        if !main.is_finite() || !cross.is_finite() {
            return Err(LayoutError::NonFiniteAvailable);
        }
        let Frame { axis, margins, gap } = self.frame;
        let reserved = self
            .frame
            .gaps(self.children.len())
            .and_then(|g| g.checked_add(margins.main()))
            .ok_or(LayoutError::Overflow)?;
        let constraints: Vec<Constraint> = self.children.iter().map(|c| c.constraint).collect();

        let preferred = estimate::main_axis(&self.children, &self.frame, true)?;
        let surplus = main - f64::from(preferred.total);
        let (distribution, fold) = if surplus < 0.0 {
            let minimum = estimate::main_axis(&self.children, &self.frame, false)?;
            let fold = distribute::contract(&constraints, &minimum.sizes, main, reserved)?;
            (Distribution::Contracted, Some(fold))
        } else if surplus > 0.0 {
            let fold = distribute::expand(&constraints, &preferred.sizes, main, reserved)?;
            (Distribution::Expanded, Some(fold))
        } else {
            (Distribution::Unchanged, None)
        };

        let sizes = match fold {
            Some(mut fold) => {
                log::trace!("{distribution:?}: rounding drift {}", fold.drift);
                distribute::settle_last(&mut fold.sizes, main, reserved)?;
                fold.sizes
            }
            None => preferred.sizes,
        };

        let positions = position::positions(&sizes, margins.leading, gap);
        let cross_extent =
            px::floor(cross - f64::from(margins.cross())).ok_or(LayoutError::Overflow)?;
        let bounds = position::bounds(axis, &sizes, &positions, margins.cross_leading, cross_extent);
        log::debug!(
            "layout {main}x{cross}: {distribution:?} preferred={} sizes={sizes:?}",
            preferred.total
        );

        Ok(Layout {
            distribution,
            children: self.children.iter().map(|c| c.index).collect(),
            sizes,
            positions,
            bounds,
        })
    }
}
