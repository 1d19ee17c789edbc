//! Pixel rounding.
//!
//! Every measurement is snapped to whole pixels before it is summed or
//! compared. `num-traits` provides the float ops so this works without `std`.

use num_traits::Float;

/// Largest value that converts to `i32` without saturating.
const LIMIT: f64 = i32::MAX as f64;

/// Round up to a whole pixel. `None` if `v` is not finite or out of range.
pub(crate) fn ceil(v: f64) -> Option<i32> {
    to_px(Float::ceil(v))
}

/// Round down to a whole pixel. `None` if `v` is not finite or out of range.
pub(crate) fn floor(v: f64) -> Option<i32> {
    to_px(Float::floor(v))
}

/// Round half up (`2.5 → 3`, `-2.5 → -2`).
pub(crate) fn round(v: f64) -> Option<i32> {
    to_px(Float::floor(v + 0.5))
}

fn to_px(v: f64) -> Option<i32> {
    if v.is_finite() && (-LIMIT..=LIMIT).contains(&v) {
        Some(v as i32)
    } else {
        None
    }
}
