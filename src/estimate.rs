//! Size estimation: natural sizes of the children and of the whole pane.

use alloc::vec::Vec;

use crate::constraint::Constraint;
use crate::node::Node;
use crate::px;
use crate::session::{Child, Frame, LayoutError};

/// Aggregate main-axis size together with each child's contribution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Estimate {
    /// Children plus margins and gaps.
    pub total: i32,
    /// Per-child baseline, in child order.
    pub sizes: Vec<i32>,
}

/// Snap one child measurement to whole pixels, rounding up.
///
/// Negative answers count as zero.
fn measure(v: f64, index: usize) -> Result<i32, LayoutError> {
    if !v.is_finite() {
        return Err(LayoutError::NonFiniteSize { index });
    }
    px::ceil(v.max(0.0)).ok_or(LayoutError::Overflow)
}

/// Main-axis estimate in preferred or minimum mode.
///
/// Fixed children contribute their pixel value and minimum-constrained
/// children their minimum size regardless of `preferred`.
pub(crate) fn main_axis<N: Node>(
    children: &[Child<'_, N>],
    frame: &Frame,
    preferred: bool,
) -> Result<Estimate, LayoutError> {
    let mut sizes = Vec::with_capacity(children.len());
    let mut sum = 0i32;
    for c in children {
        let d = match c.constraint {
            Constraint::Fixed(v) => px::ceil(v).ok_or(LayoutError::Overflow)?,
            Constraint::UseMinimum => measure(c.slot.main_size(frame.axis, false), c.index)?,
            _ => measure(c.slot.main_size(frame.axis, preferred), c.index)?,
        };
        sum = sum.checked_add(d).ok_or(LayoutError::Overflow)?;
        sizes.push(d);
    }

    let total = sum
        .checked_add(frame.margins.main())
        .and_then(|t| t.checked_add(frame.gaps(children.len())?))
        .ok_or(LayoutError::Overflow)?;
    Ok(Estimate { total, sizes })
}

/// Cross-axis estimate: the tallest child plus cross margins.
///
/// `main` is passed through to every child as its hint. Constraints play no
/// part here.
pub(crate) fn cross_axis<N: Node>(
    children: &[Child<'_, N>],
    frame: &Frame,
    main: Option<f64>,
    preferred: bool,
) -> Result<i32, LayoutError> {
    let mut max = 0;
    for c in children {
        let d = measure(c.slot.cross_size(frame.axis, main, preferred), c.index)?;
        max = max.max(d);
    }
    max.checked_add(frame.margins.cross())
        .ok_or(LayoutError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Axis, Margins};
    use crate::node::Slot;
    use crate::node::tests::Probe;
    use alloc::vec;

    fn frame(gap: i32, margins: Margins) -> Frame {
        Frame {
            axis: Axis::Horizontal,
            margins,
            gap,
        }
    }

    fn children<'a>(slots: &'a [Slot<Probe>], constraints: &[Constraint]) -> Vec<Child<'a, Probe>> {
        slots
            .iter()
            .zip(constraints)
            .enumerate()
            .map(|(index, (slot, &constraint))| Child {
                index,
                slot,
                constraint,
            })
            .collect()
    }

    #[test]
    fn preferred_sum_adds_gaps_and_margins() {
        let slots = [
            Slot::Node(Probe::new(5.0, 10.0)),
            Slot::Node(Probe::new(5.0, 20.0)),
            Slot::Node(Probe::new(5.0, 30.0)),
        ];
        let cs = children(&slots, &[Constraint::UsePreferred; 3]);
        let m = Margins {
            leading: 2,
            trailing: 3,
            cross_leading: 0,
            cross_trailing: 0,
        };
        let e = main_axis(&cs, &frame(5, m), true).unwrap();
        assert_eq!(e.sizes, vec![10, 20, 30]);
        assert_eq!(e.total, 60 + 10 + 5);
    }

    #[test]
    fn minimum_mode_uses_min_sizes() {
        let slots = [
            Slot::Node(Probe::new(5.0, 10.0)),
            Slot::Node(Probe::new(7.0, 20.0)),
        ];
        let cs = children(&slots, &[Constraint::UsePreferred, Constraint::Fill]);
        let e = main_axis(&cs, &frame(0, Margins::default()), false).unwrap();
        assert_eq!(e.sizes, vec![5, 7]);
        assert_eq!(e.total, 12);
    }

    #[test]
    fn fixed_and_minimum_ignore_mode() {
        let slots = [
            Slot::Node(Probe::new(5.0, 10.0)),
            Slot::Node(Probe::new(7.0, 20.0)),
        ];
        let cs = children(&slots, &[Constraint::Fixed(40.2), Constraint::UseMinimum]);
        for preferred in [true, false] {
            let e = main_axis(&cs, &frame(0, Margins::default()), preferred).unwrap();
            assert_eq!(e.sizes, vec![41, 7]);
        }
    }

    #[test]
    fn fractional_measurements_round_up() {
        let slots = [Slot::Node(Probe::new(0.1, 10.2))];
        let cs = children(&slots, &[Constraint::UsePreferred]);
        let e = main_axis(&cs, &frame(0, Margins::default()), true).unwrap();
        assert_eq!(e.sizes, vec![11]);
        let e = main_axis(&cs, &frame(0, Margins::default()), false).unwrap();
        assert_eq!(e.sizes, vec![1]);
    }

    #[test]
    fn negative_measurements_count_as_zero() {
        let slots = [Slot::Node(Probe::new(-4.0, -2.0))];
        let cs = children(&slots, &[Constraint::UsePreferred]);
        let e = main_axis(&cs, &frame(0, Margins::default()), true).unwrap();
        assert_eq!(e.sizes, vec![0]);
    }

    #[test]
    fn empty_pane_is_just_margins() {
        let m = Margins {
            leading: 4,
            trailing: 6,
            cross_leading: 1,
            cross_trailing: 2,
        };
        let cs: Vec<Child<'_, Probe>> = Vec::new();
        let e = main_axis(&cs, &frame(8, m), true).unwrap();
        assert_eq!(e.total, 10);
        assert!(e.sizes.is_empty());
        assert_eq!(cross_axis(&cs, &frame(8, m), None, true), Ok(3));
    }

    #[test]
    fn non_finite_child_is_an_error() {
        let slots = [
            Slot::Node(Probe::new(1.0, 1.0)),
            Slot::Node(Probe::new(1.0, f64::NAN)),
        ];
        let cs = children(&slots, &[Constraint::UsePreferred; 2]);
        assert_eq!(
            main_axis(&cs, &frame(0, Margins::default()), true),
            Err(LayoutError::NonFiniteSize { index: 1 })
        );
    }

    #[test]
    fn huge_sum_overflows() {
        let slots = [
            Slot::Node(Probe::new(0.0, 2.0e9)),
            Slot::Node(Probe::new(0.0, 2.0e9)),
        ];
        let cs = children(&slots, &[Constraint::UsePreferred; 2]);
        assert_eq!(
            main_axis(&cs, &frame(0, Margins::default()), true),
            Err(LayoutError::Overflow)
        );
    }

    #[test]
    fn cross_takes_tallest_child() {
        let slots = [
            Slot::Node(Probe::new(0.0, 0.0).cross(4.0, 12.5)),
            Slot::Spacer,
            Slot::Node(Probe::new(0.0, 0.0).cross(9.0, 11.0)),
        ];
        let cs = children(&slots, &[Constraint::Fixed(99.0); 3]);
        let m = Margins {
            leading: 0,
            trailing: 0,
            cross_leading: 1,
            cross_trailing: 1,
        };
        assert_eq!(cross_axis(&cs, &frame(0, m), Some(100.0), true), Ok(15));
        assert_eq!(cross_axis(&cs, &frame(0, m), Some(100.0), false), Ok(11));
    }
}
