//! Ground metric and the Fréchet distance newtype wrapper.

use std::cmp::Ordering;
use std::fmt;

/// Euclidean (L2) distance between two waypoints of equal dimension.
///
/// Extra coordinates in the longer slice are ignored; callers pass waypoints
/// from polylines whose dimensions were already checked to match.
#[must_use]
pub fn euclidean(u: &[f64], v: &[f64]) -> f64 {
    debug_assert_eq!(u.len(), v.len());
    u.iter()
        .zip(v)
        .map(|(a, b)| (a - b) * (a - b))
        .sum::<f64>()
        .sqrt()
}

/// A non-negative discrete Fréchet distance (the coupling measure).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct FrechetDistance(f64);

impl FrechetDistance {
    /// Zero distance, the value for any polyline compared with itself.
    pub const ZERO: Self = Self(0.0);

    /// Create a new Fréchet distance from a raw value.
    pub(crate) fn new(value: f64) -> Self {
        Self(value)
    }

    /// Return the raw distance value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Total ordering comparison using [`f64::total_cmp`].
    #[must_use]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for FrechetDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}

impl From<FrechetDistance> for f64 {
    fn from(d: FrechetDistance) -> Self {
        d.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_pythagorean_triple() {
        assert_eq!(euclidean(&[0.0, 0.0], &[3.0, 4.0]), 5.0);
    }

    #[test]
    fn euclidean_three_dimensions() {
        let d = euclidean(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]);
        assert_eq!(d, 0.0);
        let d = euclidean(&[0.0, 1.0, 1.0], &[0.0, 2.0, 1.0]);
        assert!((d - 1.0).abs() < 1e-12);
    }

    #[test]
    fn display_format() {
        let d = FrechetDistance::new(2.23606797749979);
        assert_eq!(format!("{d}"), "2.236068");
    }

    #[test]
    fn total_cmp_ordering() {
        let a = FrechetDistance::new(1.0);
        let b = FrechetDistance::new(2.0);
        assert_eq!(a.total_cmp(&b), Ordering::Less);
        assert_eq!(b.total_cmp(&a), Ordering::Greater);
        assert_eq!(a.total_cmp(&a), Ordering::Equal);
    }

    #[test]
    fn into_f64() {
        let raw: f64 = FrechetDistance::new(4.5).into();
        assert_eq!(raw, 4.5);
    }
}
