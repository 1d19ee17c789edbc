//! Space distribution: handing surplus or deficit space to the children.
//!
//! Both algorithms walk the children once, keeping the running total twice:
//! exactly as `f64` and rounded as whole pixels. Each growing child gets the
//! rounded difference between the two, so rounding error never accumulates
//! past half a pixel. Afterwards [`settle_last`] overrides the last child with
//! whatever space is left, which makes the sizes cover the pane exactly.

use alloc::vec::Vec;

use crate::constraint::Constraint;
use crate::px;
use crate::session::LayoutError;

/// Sizes from one distribution walk, before the last child is settled.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Fold {
    pub sizes: Vec<i32>,
    /// Exact minus rounded running total at the end of the walk.
    pub drift: f64,
}

/// Running total kept both exactly and in whole pixels.
struct Running {
    exact: f64,
    whole: i32,
    sizes: Vec<i32>,
}

impl Running {
    fn new(start: i32, capacity: usize) -> Self {
        Self {
            exact: f64::from(start),
            whole: start,
            sizes: Vec::with_capacity(capacity),
        }
    }

    /// Append a size that does not take part in distribution.
    fn keep(&mut self, size: i32) -> Result<(), LayoutError> {
        self.exact += f64::from(size);
        self.push(size)
    }

    /// Advance the exact total by `amount` and append the rounded step.
    fn grow(&mut self, amount: f64) -> Result<(), LayoutError> {
        self.exact += amount;
        let size = px::round(self.exact - f64::from(self.whole)).ok_or(LayoutError::Overflow)?;
        self.push(size)
    }

    fn push(&mut self, size: i32) -> Result<(), LayoutError> {
        self.whole = self.whole.checked_add(size).ok_or(LayoutError::Overflow)?;
        self.sizes.push(size);
        Ok(())
    }

    fn finish(self) -> Fold {
        Fold {
            drift: self.exact - f64::from(self.whole),
            sizes: self.sizes,
        }
    }
}

/// Grow children into the space beyond their preferred sizes.
///
/// `baseline` holds the preferred-mode estimate and `reserved` the margins
/// plus gaps. Fixed, minimum and preferred children keep their baseline.
/// Percent children get their fraction of the surplus, scaled down when the
/// fractions add up past `1.0`. Fill children split what percent children
/// leave over. The surplus is measured against the non-growing children only,
/// so a fill or percent child's own preferred size does not count.
pub(crate) fn expand(
    constraints: &[Constraint],
    baseline: &[i32],
    available: f64,
    reserved: i32,
) -> Result<Fold, LayoutError> {
    let mut total_percent = 0.0;
    let mut fills = 0usize;
    let mut kept = 0i32;
    for (&c, &d) in constraints.iter().zip(baseline) {
        match c {
            Constraint::Percent(p) => total_percent += p,
            Constraint::Fill => fills += 1,
            _ => kept = kept.checked_add(d).ok_or(LayoutError::Overflow)?,
        }
    }

    let extra = available - f64::from(reserved) - f64::from(kept);
    let percent_ratio = if total_percent > 1.0 {
        1.0 / total_percent
    } else {
        1.0
    };
    // Once the fractions are normalized they claim the whole surplus.
    let fill_ratio = if fills == 0 {
        0.0
    } else {
        (1.0 - total_percent.min(1.0)) / fills as f64
    };
    log::trace!(
        "expand: extra={extra} total_percent={total_percent} fills={fills} fill_ratio={fill_ratio}"
    );

    let mut run = Running::new(reserved, baseline.len());
    for (&c, &d) in constraints.iter().zip(baseline) {
        match c {
            Constraint::Fill => run.grow(extra * fill_ratio)?,
            Constraint::Percent(p) => run.grow(extra * percent_ratio * p)?,
            Constraint::Fixed(_) | Constraint::UseMinimum | Constraint::UsePreferred => {
                run.keep(d)?
            }
        }
    }
    Ok(run.finish())
}

/// Shrink children toward their minimum sizes.
///
/// `baseline` holds the minimum-mode estimate. Whatever space remains above
/// the minimum total (never less than zero) is split evenly. The divisor
/// counts every non-fixed child, minimum children included, but only percent,
/// fill and preferred children receive a share; percent and fill are not
/// weighted here.
pub(crate) fn contract(
    constraints: &[Constraint],
    baseline: &[i32],
    available: f64,
    reserved: i32,
) -> Result<Fold, LayoutError> {
    let sum = baseline
        .iter()
        .try_fold(0i32, |acc, &d| acc.checked_add(d))
        .ok_or(LayoutError::Overflow)?;
    let ct = constraints
        .iter()
        .filter(|c| !matches!(c, Constraint::Fixed(_)))
        .count();

    let extra = (available - f64::from(reserved) - f64::from(sum)).max(0.0);
    let share = if ct == 0 { 0.0 } else { extra / ct as f64 };
    log::trace!("contract: extra={extra} sharing={ct} share={share}");

    let mut run = Running::new(reserved, baseline.len());
    for (&c, &d) in constraints.iter().zip(baseline) {
        if c.is_frozen() {
            run.keep(d)?;
        } else {
            run.grow(f64::from(d) + share)?;
        }
    }
    Ok(run.finish())
}

/// Give the last child everything not used by the others.
///
/// After this, `reserved + Σ sizes == floor(available)`. The last child may
/// end up at zero or below when even minimum sizes do not fit.
pub(crate) fn settle_last(
    sizes: &mut [i32],
    available: f64,
    reserved: i32,
) -> Result<(), LayoutError> {
    let Some((last, rest)) = sizes.split_last_mut() else {
        return Ok(());
    };
    let used = rest
        .iter()
        .try_fold(reserved, |acc, &d| acc.checked_add(d))
        .ok_or(LayoutError::Overflow)?;
    *last = px::floor(available - f64::from(used)).ok_or(LayoutError::Overflow)?;
    Ok(())
}
