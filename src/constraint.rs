//! Sizing constraints for pane children.
//!
//! Each child carries one [`Constraint`] that decides how its main-axis size
//! is resolved. Constraints can also be given as raw numbers, the historical
//! encoding used by callers that store a single `f64` per child:
//!
//! | raw value          | constraint                   |
//! |--------------------|------------------------------|
//! | `> 1.0`            | [`Constraint::Fixed`]        |
//! | `0.0 ..< 1.0`      | [`Constraint::Percent`]      |
//! | [`Constraint::FILL`] (`-1.0`) | [`Constraint::Fill`] |
//! | [`Constraint::PREF`] (`-2.0`) | [`Constraint::UsePreferred`] |
//! | [`Constraint::MIN`] (`-3.0`)  | [`Constraint::UseMinimum`]   |
//! | anything else      | [`Constraint::UsePreferred`] |
//!
//! # Example
//!
//! ```
//! use hpane::Constraint;
//!
//! assert_eq!(Constraint::from(120.0), Constraint::Fixed(120.0));
//! assert_eq!(Constraint::from(0.25), Constraint::Percent(0.25));
//! assert_eq!(Constraint::from(Constraint::FILL), Constraint::Fill);
//! assert_eq!("min".parse::<Constraint>(), Ok(Constraint::UseMinimum));
//! assert_eq!(Constraint::parse_or_default("wide"), Constraint::UsePreferred);
//! ```

use core::fmt;
use core::str::FromStr;

/// How a child's main-axis size is resolved.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum Constraint {
    /// Exact size in pixels, rounded up. Never grows or shrinks.
    Fixed(f64),
    /// Fraction of the surplus handed out when the pane is wider than
    /// preferred. Fractions summing past `1.0` are scaled down together, so a
    /// lone fraction of `1.0` or more claims the whole surplus. The raw
    /// encoding only produces `0.0 ..< 1.0`.
    Percent(f64),
    /// Equal share of whatever surplus the percent children leave over.
    Fill,
    /// Minimum size, rounded up. Never grows or shrinks.
    UseMinimum,
    /// Preferred size, shrinking toward minimum when space is short.
    #[default]
    UsePreferred,
}

impl Constraint {
    /// Raw sentinel for [`Constraint::Fill`].
    pub const FILL: f64 = -1.0;
    /// Raw sentinel for [`Constraint::UsePreferred`].
    pub const PREF: f64 = -2.0;
    /// Raw sentinel for [`Constraint::UseMinimum`].
    pub const MIN: f64 = -3.0;

    /// Decode the raw numeric encoding. Unrecognized values read as
    /// [`Constraint::UsePreferred`].
    pub fn from_raw(v: f64) -> Self {
        if v > 1.0 && v.is_finite() {
            Self::Fixed(v)
        } else if (0.0..1.0).contains(&v) {
            Self::Percent(v)
        } else if v == Self::FILL {
            Self::Fill
        } else if v == Self::MIN {
            Self::UseMinimum
        } else {
            Self::UsePreferred
        }
    }

    /// Encode as a raw number.
    ///
    /// `Fixed` values at or below `1.0` have no raw form and encode as
    /// [`Constraint::PREF`], mirroring how they would be read back.
    pub fn to_raw(self) -> f64 {
        match self.sanitize() {
            Self::Fixed(v) if v > 1.0 => v,
            Self::Percent(v) if v < 1.0 => v,
            Self::Fill => Self::FILL,
            Self::UseMinimum => Self::MIN,
            _ => Self::PREF,
        }
    }

    /// Parse text, falling back to [`Constraint::UsePreferred`] when the text
    /// is not a constraint.
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }

    /// Replace payloads no pass can use (non-finite or negative) with
    /// [`Constraint::UsePreferred`].
    ///
    /// Oversized percents are kept; expansion normalizes them.
    pub fn sanitize(self) -> Self {
        match self {
            Self::Fixed(v) | Self::Percent(v) if !v.is_finite() || v < 0.0 => Self::UsePreferred,
            c => c,
        }
    }

    /// Frozen under both expand and contract.
    pub fn is_frozen(&self) -> bool {
        matches!(self, Self::Fixed(_) | Self::UseMinimum)
    }
}

impl From<f64> for Constraint {
    fn from(v: f64) -> Self {
        Self::from_raw(v)
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(v) => write!(f, "{v}px"),
            Self::Percent(v) => write!(f, "{v}"),
            Self::Fill => f.write_str("fill"),
            Self::UseMinimum => f.write_str("min"),
            Self::UsePreferred => f.write_str("pref"),
        }
    }
}

/// Text that is neither a keyword nor a number.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ParseConstraintError;

impl fmt::Display for ParseConstraintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("not a pane constraint")
    }
}

impl core::error::Error for ParseConstraintError {}

impl FromStr for Constraint {
    type Err = ParseConstraintError;

    /// Accepts `fill`, `min`, `pref` (any case), an optional `px` suffix on
    /// numbers, and otherwise the raw numeric encoding.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("fill") {
            return Ok(Self::Fill);
        }
        if s.eq_ignore_ascii_case("min") {
            return Ok(Self::UseMinimum);
        }
        if s.eq_ignore_ascii_case("pref") {
            return Ok(Self::UsePreferred);
        }
        let number = s.strip_suffix("px").unwrap_or(s).trim_end();
        number
            .parse::<f64>()
            .map(Self::from_raw)
            .map_err(|_| ParseConstraintError)
    }
}

/// Constraint Reader: the stored constraint of a child, or the default.
///
/// Absent and unusable values both read as [`Constraint::UsePreferred`].
pub fn resolve(stored: Option<Constraint>) -> Constraint {
    stored.map(Constraint::sanitize).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── raw encoding ────────────────────────────────────────────────────

    #[test]
    fn raw_above_one_is_fixed() {
        assert_eq!(Constraint::from_raw(1.01), Constraint::Fixed(1.01));
        assert_eq!(Constraint::from_raw(50.0), Constraint::Fixed(50.0));
    }

    #[test]
    fn raw_fraction_is_percent() {
        assert_eq!(Constraint::from_raw(0.0), Constraint::Percent(0.0));
        assert_eq!(Constraint::from_raw(0.3), Constraint::Percent(0.3));
        assert_eq!(Constraint::from_raw(0.999), Constraint::Percent(0.999));
    }

    #[test]
    fn raw_sentinels() {
        assert_eq!(Constraint::from_raw(Constraint::FILL), Constraint::Fill);
        assert_eq!(Constraint::from_raw(Constraint::MIN), Constraint::UseMinimum);
        assert_eq!(
            Constraint::from_raw(Constraint::PREF),
            Constraint::UsePreferred
        );
    }

    #[test]
    fn raw_exactly_one_and_junk_read_as_preferred() {
        for v in [1.0, -0.5, -4.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(Constraint::from_raw(v), Constraint::UsePreferred, "{v}");
        }
    }

    #[test]
    fn raw_encoding_survives_reencoding() {
        for c in [
            Constraint::Fixed(80.0),
            Constraint::Percent(0.5),
            Constraint::Fill,
            Constraint::UseMinimum,
            Constraint::UsePreferred,
        ] {
            assert_eq!(Constraint::from_raw(c.to_raw()), c);
        }
    }

    #[test]
    fn to_raw_of_unencodable_fixed_is_pref() {
        assert_eq!(Constraint::Fixed(0.5).to_raw(), Constraint::PREF);
        assert_eq!(Constraint::Percent(1.5).to_raw(), Constraint::PREF);
    }

    // ── text ────────────────────────────────────────────────────────────

    #[test]
    fn parse_keywords() {
        assert_eq!("fill".parse::<Constraint>(), Ok(Constraint::Fill));
        assert_eq!(" MIN ".parse::<Constraint>(), Ok(Constraint::UseMinimum));
        assert_eq!("Pref".parse::<Constraint>(), Ok(Constraint::UsePreferred));
    }

    #[test]
    fn parse_numbers_use_raw_encoding() {
        assert_eq!("120".parse::<Constraint>(), Ok(Constraint::Fixed(120.0)));
        assert_eq!("120px".parse::<Constraint>(), Ok(Constraint::Fixed(120.0)));
        assert_eq!("0.4".parse::<Constraint>(), Ok(Constraint::Percent(0.4)));
        assert_eq!("-1".parse::<Constraint>(), Ok(Constraint::Fill));
    }

    #[test]
    fn parse_rejects_junk() {
        assert_eq!("".parse::<Constraint>(), Err(ParseConstraintError));
        assert_eq!("wide".parse::<Constraint>(), Err(ParseConstraintError));
        assert_eq!(Constraint::parse_or_default("12 px x"), Constraint::UsePreferred);
    }

    // ── reader ──────────────────────────────────────────────────────────

    #[test]
    fn resolve_absent_is_preferred() {
        assert_eq!(resolve(None), Constraint::UsePreferred);
    }

    #[test]
    fn resolve_passes_valid_values_through() {
        assert_eq!(resolve(Some(Constraint::Fill)), Constraint::Fill);
        assert_eq!(
            resolve(Some(Constraint::Fixed(0.5))),
            Constraint::Fixed(0.5)
        );
        assert_eq!(
            resolve(Some(Constraint::Percent(2.0))),
            Constraint::Percent(2.0)
        );
    }

    #[test]
    fn resolve_degrades_unusable_payloads() {
        assert_eq!(
            resolve(Some(Constraint::Fixed(f64::NAN))),
            Constraint::UsePreferred
        );
        assert_eq!(
            resolve(Some(Constraint::Percent(-0.2))),
            Constraint::UsePreferred
        );
        assert_eq!(
            resolve(Some(Constraint::Fixed(f64::INFINITY))),
            Constraint::UsePreferred
        );
    }

    #[test]
    fn frozen_kinds() {
        assert!(Constraint::Fixed(10.0).is_frozen());
        assert!(Constraint::UseMinimum.is_frozen());
        assert!(!Constraint::Fill.is_frozen());
        assert!(!Constraint::Percent(0.1).is_frozen());
        assert!(!Constraint::UsePreferred.is_frozen());
    }
}
