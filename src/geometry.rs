//! Axes, insets, margins and child bounds.

use crate::px;

/// The axis children are laid out along.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left to right. Main size is width, cross size is height.
    #[default]
    Horizontal,
    /// Top to bottom. Main size is height, cross size is width.
    Vertical,
}

impl Axis {
    /// Build child bounds from main/cross coordinates.
    pub fn rect(self, main_pos: i32, cross_pos: i32, main_size: i32, cross_size: i32) -> Rect {
        match self {
            Self::Horizontal => Rect::new(main_pos, cross_pos, main_size, cross_size),
            Self::Vertical => Rect::new(cross_pos, main_pos, cross_size, main_size),
        }
    }

    /// Split a `(width, height)` pair into `(main, cross)`.
    pub fn split(self, width: f64, height: f64) -> (f64, f64) {
        match self {
            Self::Horizontal => (width, height),
            Self::Vertical => (height, width),
        }
    }
}

/// Container insets in host units, before rounding.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Insets {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Insets {
    /// Same inset on all four edges.
    pub const fn uniform(v: f64) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }

    /// Create insets in CSS order: top, right, bottom, left.
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

/// Integer margins oriented to an axis.
///
/// `leading`/`trailing` sit before the first and after the last child on the
/// main axis; `cross_leading`/`cross_trailing` bound the cross axis.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Margins {
    pub leading: i32,
    pub trailing: i32,
    pub cross_leading: i32,
    pub cross_trailing: i32,
}

impl Margins {
    /// Round insets half up and orient them to `axis`.
    ///
    /// Non-finite insets count as zero.
    pub fn from_insets(insets: Insets, axis: Axis) -> Self {
        let r = |v: f64| px::round(v).unwrap_or(0);
        let (top, right, bottom, left) = (
            r(insets.top),
            r(insets.right),
            r(insets.bottom),
            r(insets.left),
        );
        match axis {
            Axis::Horizontal => Self {
                leading: left,
                trailing: right,
                cross_leading: top,
                cross_trailing: bottom,
            },
            Axis::Vertical => Self {
                leading: top,
                trailing: bottom,
                cross_leading: left,
                cross_trailing: right,
            },
        }
    }

    /// Main-axis margins combined.
    pub fn main(&self) -> i32 {
        self.leading.saturating_add(self.trailing)
    }

    /// Cross-axis margins combined.
    pub fn cross(&self) -> i32 {
        self.cross_leading.saturating_add(self.cross_trailing)
    }
}

/// Bounds assigned to a child, in pane coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Create bounds. Negative extents are clamped to zero.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width: if width < 0 { 0 } else { width },
            height: if height < 0 { 0 } else { height },
        }
    }

    /// Right edge (exclusive).
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Whether the rectangle covers no area.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
