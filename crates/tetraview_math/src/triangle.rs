//! Base triangle ABC

use std::f64::consts::PI;

/// A triangle given by its internal angles, in radians
///
/// The cosines are cached because both the transform and the classifier
/// evaluate them for every sample. Angles are expected to sum to pi; the
/// classifier's inequalities additionally assume the triangle is acute.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    a: f64,
    b: f64,
    c: f64,
    cos_a: f64,
    cos_b: f64,
    cos_c: f64,
}

impl Triangle {
    /// Create a triangle from its three angles
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self {
            a,
            b,
            c,
            cos_a: a.cos(),
            cos_b: b.cos(),
            cos_c: c.cos(),
        }
    }

    /// Create a triangle whose angles are `numerator * pi / denominator`
    ///
    /// The product is formed before the division, so `[8, 6, 5] / 19` yields
    /// exactly the same angles as writing `8.0 * PI / 19.0` by hand.
    pub fn from_pi_fractions(numerators: [u32; 3], denominator: u32) -> Self {
        let angle = |n: u32| n as f64 * PI / denominator as f64;
        Self::new(angle(numerators[0]), angle(numerators[1]), angle(numerators[2]))
    }

    /// The acute triangle (8pi/19, 6pi/19, 5pi/19) used by the reference run
    pub fn reference() -> Self {
        Self::from_pi_fractions([8, 6, 5], 19)
    }

    #[inline]
    pub fn a(&self) -> f64 {
        self.a
    }

    #[inline]
    pub fn b(&self) -> f64 {
        self.b
    }

    #[inline]
    pub fn c(&self) -> f64 {
        self.c
    }

    #[inline]
    pub fn cos_a(&self) -> f64 {
        self.cos_a
    }

    #[inline]
    pub fn cos_b(&self) -> f64 {
        self.cos_b
    }

    #[inline]
    pub fn cos_c(&self) -> f64 {
        self.cos_c
    }

    /// Angles as an array `[A, B, C]`
    #[inline]
    pub fn angles(&self) -> [f64; 3] {
        [self.a, self.b, self.c]
    }

    /// Sum of the three angles (pi for a proper triangle)
    #[inline]
    pub fn angle_sum(&self) -> f64 {
        self.a + self.b + self.c
    }

    /// Whether every angle is strictly positive and below pi/2
    pub fn is_acute(&self) -> bool {
        self.angles().iter().all(|&x| x > 0.0 && x < PI / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_reference_angles() {
        let t = Triangle::reference();
        assert_eq!(t.a(), 8.0 * PI / 19.0);
        assert_eq!(t.b(), 6.0 * PI / 19.0);
        assert_eq!(t.c(), 5.0 * PI / 19.0);
    }

    #[test]
    fn test_cached_cosines() {
        let t = Triangle::new(1.0, 0.9, PI - 1.9);
        assert_eq!(t.cos_a(), 1.0f64.cos());
        assert_eq!(t.cos_b(), 0.9f64.cos());
        assert_eq!(t.cos_c(), (PI - 1.9).cos());
    }

    #[test]
    fn test_angle_sum_is_pi() {
        let t = Triangle::reference();
        assert!((t.angle_sum() - PI).abs() < EPSILON);
    }

    #[test]
    fn test_is_acute() {
        assert!(Triangle::reference().is_acute());
        assert!(Triangle::from_pi_fractions([1, 1, 1], 3).is_acute());
        // Right angle at A
        assert!(!Triangle::from_pi_fractions([2, 1, 1], 4).is_acute());
        // Obtuse at A
        assert!(!Triangle::from_pi_fractions([4, 1, 1], 6).is_acute());
    }
}
