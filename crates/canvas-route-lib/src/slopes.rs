//! Allowed-slope sets and bracket selection
//!
//! The canvas only permits line segments along a small set of positive slopes.
//! An arbitrary target direction is approximated by the tightest pair of
//! allowed slopes that brackets it.

use crate::{Result, RouteError};

/// Two slopes closer than this are considered the same slope
pub const SLOPE_MATCH_EPSILON: f64 = 1e-9;

/// An ordered set of strictly positive allowed slopes
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlopeSet {
    /// Sorted ascending, finite, strictly positive
    slopes: Vec<f64>,
}

impl SlopeSet {
    /// Build a slope set from arbitrary values
    ///
    /// Values are sorted and deduplicated (within [`SLOPE_MATCH_EPSILON`]).
    /// Non-finite or non-positive values and empty sets are rejected.
    pub fn new(values: impl IntoIterator<Item = f64>) -> Result<Self> {
        let mut slopes: Vec<f64> = Vec::new();
        for value in values {
            if !value.is_finite() || value <= 0.0 {
                return Err(RouteError::InvalidSlopeSet(format!(
                    "slope {value} is not a finite positive number"
                )));
            }
            slopes.push(value);
        }
        if slopes.is_empty() {
            return Err(RouteError::InvalidSlopeSet("empty slope set".to_string()));
        }
        slopes.sort_by(|a, b| a.total_cmp(b));
        slopes.dedup_by(|a, b| (*a - *b).abs() < SLOPE_MATCH_EPSILON);
        Ok(Self { slopes })
    }

    /// The symmetric-reciprocal ladder `{1/max, …, 1/2, 1, 2, …, max}`
    ///
    /// `ladder(5)` is the 9-entry reference set, `ladder(10)` the finer
    /// 19-entry variant.
    pub fn ladder(max: u32) -> Self {
        let max = max.max(1);
        let mut slopes: Vec<f64> = (2..=max).rev().map(|d| 1.0 / d as f64).collect();
        slopes.extend((1..=max).map(f64::from));
        Self { slopes }
    }

    /// The 9-entry reference set, `1/5` through `5`
    pub fn standard() -> Self {
        Self::ladder(5)
    }

    /// The 19-entry fine-grained variant, `1/10` through `10`
    pub fn fine() -> Self {
        Self::ladder(10)
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.slopes
    }

    #[inline]
    pub fn min(&self) -> f64 {
        self.slopes[0]
    }

    #[inline]
    pub fn max(&self) -> f64 {
        self.slopes[self.slopes.len() - 1]
    }

    /// Tightest bracketing pair `(a, b)` with `a <= b` for a target slope
    ///
    /// A target within [`SLOPE_MATCH_EPSILON`] of a set element returns that
    /// element twice (a single slope suffices, no bend needed). A target
    /// outside the set's range clamps to the nearest extreme, also returned
    /// twice. Never fails.
    pub fn bracket(&self, target: f64) -> (f64, f64) {
        let closest = self
            .slopes
            .iter()
            .copied()
            .min_by(|a, b| (a - target).abs().total_cmp(&(b - target).abs()))
            .unwrap_or(self.slopes[0]);
        if (closest - target).abs() < SLOPE_MATCH_EPSILON {
            return (closest, closest);
        }

        let below = self.slopes.iter().copied().filter(|s| *s <= target).last();
        let above = self.slopes.iter().copied().find(|s| *s >= target);
        let a = below.unwrap_or(self.min());
        let b = above.unwrap_or(self.max());
        if a <= b { (a, b) } else { (b, a) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ladder_reference_sets() {
        let standard = SlopeSet::standard();
        assert_eq!(standard.as_slice().len(), 9);
        assert!((standard.min() - 0.2).abs() < 1e-12);
        assert_eq!(standard.max(), 5.0);

        let fine = SlopeSet::fine();
        assert_eq!(fine.as_slice().len(), 19);
        assert!((fine.min() - 0.1).abs() < 1e-12);
        assert_eq!(fine.max(), 10.0);
    }

    #[test]
    fn test_new_rejects_bad_values() {
        assert!(SlopeSet::new([1.0, -2.0]).is_err());
        assert!(SlopeSet::new([0.0]).is_err());
        assert!(SlopeSet::new([f64::NAN]).is_err());
        assert!(SlopeSet::new([]).is_err());
    }

    #[test]
    fn test_new_sorts_and_dedups() {
        let set = SlopeSet::new([3.0, 1.0, 3.0, 0.5]).unwrap();
        assert_eq!(set.as_slice(), &[0.5, 1.0, 3.0]);
    }

    #[test]
    fn test_bracket_interior() {
        let set = SlopeSet::standard();
        let (a, b) = set.bracket(0.3);
        assert!((a - 0.25).abs() < 1e-12);
        assert!((b - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_bracket_exact_match() {
        let set = SlopeSet::standard();
        let (a, b) = set.bracket(2.0);
        assert_eq!((a, b), (2.0, 2.0));

        // Within epsilon also counts as exact
        let (a, b) = set.bracket(2.0 + 1e-12);
        assert_eq!((a, b), (2.0, 2.0));
    }

    #[test]
    fn test_bracket_clamps_below_range() {
        let set = SlopeSet::standard();
        let (a, b) = set.bracket(0.05);
        assert_eq!(a, b);
        assert!((a - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_bracket_clamps_above_range() {
        let set = SlopeSet::standard();
        let (a, b) = set.bracket(42.0);
        assert_eq!((a, b), (5.0, 5.0));
    }

    #[test]
    fn test_bracket_is_ordered() {
        let set = SlopeSet::fine();
        for target in [0.01, 0.15, 0.7, 1.0, 2.5, 9.9, 100.0] {
            let (a, b) = set.bracket(target);
            assert!(a <= b);
            if target >= set.min() && target <= set.max() {
                assert!(a <= target + SLOPE_MATCH_EPSILON);
                assert!(b >= target - SLOPE_MATCH_EPSILON);
            }
        }
    }
}
