//! The pane: an ordered list of children laid out along one axis.

use alloc::vec::Vec;

use crate::constraint::Constraint;
use crate::geometry::{Axis, Insets, Margins};
use crate::node::{Entry, Node, Slot};
use crate::session::{Frame, Layout, LayoutError, Session};

/// Lays out children in a row (or column) using per-child [`Constraint`]s.
///
/// # Example
///
/// ```
/// use hpane::{Distribution, Insets, Node, Pane, Rect};
///
/// struct Label { width: f64, bounds: Rect }
///
/// impl Node for Label {
///     fn min_width(&self, _: Option<f64>) -> f64 { self.width / 2.0 }
///     fn pref_width(&self, _: Option<f64>) -> f64 { self.width }
///     fn min_height(&self, _: Option<f64>) -> f64 { 16.0 }
///     fn pref_height(&self, _: Option<f64>) -> f64 { 20.0 }
///     fn set_bounds(&mut self, bounds: Rect) { self.bounds = bounds; }
/// }
///
/// let label = |width| Label { width, bounds: Rect::default() };
///
/// let mut pane = Pane::horizontal(4).insets(Insets::uniform(2.0));
/// pane.add_with(label(80.0), 80.0);
/// pane.fill(label(40.0));
/// pane.add(label(60.0));
///
/// assert_eq!(pane.pref_main_size(), Ok(80 + 40 + 60 + 8 + 4));
/// assert_eq!(pane.pref_cross_size(None), Ok(24));
///
/// let layout = pane.layout(300.0, 24.0).unwrap();
/// assert_eq!(layout.distribution, Distribution::Expanded);
/// assert_eq!(layout.sizes, vec![80, 148, 60]);
/// assert_eq!(pane.node(1).unwrap().bounds, Rect::new(86, 2, 148, 20));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Pane<N> {
    entries: Vec<Entry<N>>,
    axis: Axis,
    gap: i32,
    insets: Insets,
}

impl<N> Pane<N> {
    /// Empty pane along `axis` with `gap` pixels between children.
    pub fn new(axis: Axis, gap: i32) -> Self {
        Self {
            entries: Vec::new(),
            axis,
            gap,
            insets: Insets::default(),
        }
    }

    /// Children left to right.
    pub fn horizontal(gap: i32) -> Self {
        Self::new(Axis::Horizontal, gap)
    }

    /// Children top to bottom.
    pub fn vertical(gap: i32) -> Self {
        Self::new(Axis::Vertical, gap)
    }

    /// Set the container insets; they become rounded margins.
    pub fn insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    /// Replace the insets on an existing pane.
    pub fn set_insets(&mut self, insets: Insets) {
        self.insets = insets;
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn gap(&self) -> i32 {
        self.gap
    }

    /// Margins the next pass will use.
    pub fn margins(&self) -> Margins {
        Margins::from_insets(self.insets, self.axis)
    }

    /// Append a child with the default constraint. Returns its index.
    pub fn add(&mut self, node: N) -> usize {
        self.push(Entry::new(Slot::Node(node)))
    }

    /// Append a child with a constraint, given as a [`Constraint`] or in the
    /// raw numeric encoding.
    pub fn add_with(&mut self, node: N, constraint: impl Into<Constraint>) -> usize {
        self.push(Entry::with_constraint(Slot::Node(node), constraint.into()))
    }

    /// Append a child that takes a fill share.
    pub fn fill(&mut self, node: N) -> usize {
        self.add_with(node, Constraint::Fill)
    }

    /// Append an invisible spacer that takes a fill share.
    pub fn fill_spacer(&mut self) -> usize {
        self.push(Entry::with_constraint(Slot::Spacer, Constraint::Fill))
    }

    fn push(&mut self, entry: Entry<N>) -> usize {
        self.entries.push(entry);
        self.entries.len() - 1
    }

    /// Remove the child at `index`, shifting later children down.
    pub fn remove(&mut self, index: usize) -> Option<Slot<N>> {
        (index < self.entries.len()).then(|| self.entries.remove(index).slot)
    }

    /// Constraint the next pass will use for the child at `index`.
    pub fn constraint(&self, index: usize) -> Option<Constraint> {
        self.entries.get(index).map(Entry::resolved_constraint)
    }

    /// Store a constraint. Returns `false` if there is no such child.
    pub fn set_constraint(&mut self, index: usize, constraint: impl Into<Constraint>) -> bool {
        match self.entries.get_mut(index) {
            Some(e) => {
                e.constraint = Some(constraint.into());
                true
            }
            None => false,
        }
    }

    /// Drop the stored constraint, reverting to the default.
    pub fn clear_constraint(&mut self, index: usize) -> Option<Constraint> {
        self.entries.get_mut(index)?.constraint.take()
    }

    /// Include or exclude a child from layout. Returns `false` if there is
    /// no such child.
    pub fn set_managed(&mut self, index: usize, managed: bool) -> bool {
        match self.entries.get_mut(index) {
            Some(e) => {
                e.managed = managed;
                true
            }
            None => false,
        }
    }

    pub fn is_managed(&self, index: usize) -> Option<bool> {
        self.entries.get(index).map(|e| e.managed)
    }

    /// The node at `index`. `None` for spacers and out-of-range indices.
    pub fn node(&self, index: usize) -> Option<&N> {
        self.entries.get(index)?.slot.node()
    }

    pub fn node_mut(&mut self, index: usize) -> Option<&mut N> {
        self.entries.get_mut(index)?.slot.node_mut()
    }

    /// All entries in order.
    pub fn entries(&self) -> &[Entry<N>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn frame(&self) -> Frame {
        Frame {
            axis: self.axis,
            margins: self.margins(),
            gap: self.gap,
        }
    }
}

impl<N: Node> Pane<N> {
    fn session(&self) -> Session<'_, N> {
        Session::new(&self.entries, self.frame())
    }

    /// Preferred main-axis size: children, gaps and margins.
    pub fn pref_main_size(&self) -> Result<i32, LayoutError> {
        self.session().main_size(true)
    }

    /// Minimum main-axis size.
    pub fn min_main_size(&self) -> Result<i32, LayoutError> {
        self.session().main_size(false)
    }

    /// Preferred cross-axis size for a main-axis extent.
    pub fn pref_cross_size(&self, main: Option<f64>) -> Result<i32, LayoutError> {
        self.session().cross_size(main, true)
    }

    /// Minimum cross-axis size for a main-axis extent.
    pub fn min_cross_size(&self, main: Option<f64>) -> Result<i32, LayoutError> {
        self.session().cross_size(main, false)
    }

    /// Compute a layout for a pane of `width` by `height` without touching
    /// any child.
    pub fn compute(&self, width: f64, height: f64) -> Result<Layout, LayoutError> {
        let (main, cross) = self.axis.split(width, height);
        self.session().run(main, cross)
    }

    /// Compute a layout and hand every laid-out child its bounds.
    ///
    /// On error no child is touched.
    pub fn layout(&mut self, width: f64, height: f64) -> Result<Layout, LayoutError> {
        let layout = self.compute(width, height)?;
        self.apply(&layout);
        Ok(layout)
    }

    /// Like [`layout`](Self::layout), but a failed pass is logged and the
    /// children keep their previous bounds.
    pub fn layout_or_retain(&mut self, width: f64, height: f64) -> Option<Layout> {
        match self.layout(width, height) {
            Ok(layout) => Some(layout),
            Err(e) => {
                log::warn!("pane layout {width}x{height} failed, keeping previous bounds: {e}");
                None
            }
        }
    }

    /// Hand out the bounds of a computed layout.
    pub fn apply(&mut self, layout: &Layout) {
        for (&index, &bounds) in layout.children.iter().zip(&layout.bounds) {
            if let Some(e) = self.entries.get_mut(index) {
                e.slot.place(bounds);
            }
        }
    }
}
