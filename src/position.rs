//! Positioning: turning resolved sizes into offsets and child bounds.

use alloc::vec::Vec;

use crate::geometry::{Axis, Rect};

/// Leading edge of every child, then the trailing edge of the last one.
///
/// Returns `sizes.len() + 1` offsets starting at `leading`. The gap separates
/// consecutive children only, so `positions[n]` is where the content ends.
pub fn positions(sizes: &[i32], leading: i32, gap: i32) -> Vec<i32> {
    let mut out = Vec::with_capacity(sizes.len() + 1);
    let mut at = leading;
    out.push(at);
    for (i, &size) in sizes.iter().enumerate() {
        at = at.saturating_add(size);
        if i + 1 < sizes.len() {
            at = at.saturating_add(gap);
            out.push(at);
        }
    }
    if !sizes.is_empty() {
        out.push(at);
    }
    out
}

/// Bounds for every child: main extent from `sizes`/`positions`, and the
/// same cross band for all of them.
pub fn bounds(
    axis: Axis,
    sizes: &[i32],
    positions: &[i32],
    cross_leading: i32,
    cross_extent: i32,
) -> Vec<Rect> {
    sizes
        .iter()
        .zip(positions)
        .map(|(&size, &pos)| axis.rect(pos, cross_leading, size, cross_extent))
        .collect()
}
