//! Uniform partition of the angle interval `[0, pi]`

use std::f64::consts::PI;

/// Splits `[0, pi]` into `count` equal bins
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AngleBins {
    count: usize,
}

impl AngleBins {
    /// Create a partition with `count` bins
    ///
    /// # Panics
    /// Panics if `count` is zero.
    pub fn new(count: usize) -> Self {
        assert!(count > 0, "AngleBins needs at least one bin");
        Self { count }
    }

    /// Number of bins
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Bin containing `theta`: `floor(count * theta / pi)`, clamped to the
    /// valid range
    ///
    /// Total for every input: negative angles land in bin 0, angles at or
    /// above pi in the last bin, and NaN in bin 0.
    #[inline]
    pub fn index(&self, theta: f64) -> usize {
        let raw = (self.count as f64 * theta / PI) as i64;
        raw.clamp(0, self.count as i64 - 1) as usize
    }

    /// Angle at the centre of bin `i`
    #[inline]
    pub fn midpoint(&self, i: usize) -> f64 {
        (i as f64 + 0.5) * PI / self.count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_endpoints() {
        let bins = AngleBins::new(80);
        assert_eq!(bins.index(0.0), 0);
        assert_eq!(bins.index(PI - 1e-9), 79);
        assert_eq!(bins.index(PI), 79);
    }

    #[test]
    fn test_index_clamps_out_of_range() {
        let bins = AngleBins::new(10);
        assert_eq!(bins.index(-1.0), 0);
        assert_eq!(bins.index(-1e-12), 0);
        assert_eq!(bins.index(4.0), 9);
        assert_eq!(bins.index(f64::INFINITY), 9);
        assert_eq!(bins.index(f64::NEG_INFINITY), 0);
        assert_eq!(bins.index(f64::NAN), 0);
    }

    #[test]
    fn test_index_monotonic() {
        let bins = AngleBins::new(17);
        let mut last = 0;
        for step in 0..=2000 {
            let theta = -0.5 + step as f64 * (PI + 1.0) / 2000.0;
            let i = bins.index(theta);
            assert!(i >= last, "index decreased at theta = {}", theta);
            assert!(i < 17);
            last = i;
        }
        assert_eq!(last, 16);
    }

    #[test]
    fn test_midpoint_round_trip() {
        let bins = AngleBins::new(80);
        for i in 0..80 {
            assert_eq!(bins.index(bins.midpoint(i)), i);
        }
    }

    #[test]
    fn test_midpoint_values() {
        let bins = AngleBins::new(4);
        assert_eq!(bins.midpoint(0), 0.5 * PI / 4.0);
        assert_eq!(bins.midpoint(3), 3.5 * PI / 4.0);
    }

    #[test]
    #[should_panic]
    fn test_zero_bins_panics() {
        AngleBins::new(0);
    }
}
