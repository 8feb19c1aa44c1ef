//! Tilt angles and the view angles they produce
//!
//! Each of three planes contains one side line of the base triangle and is
//! inclined to the triangle's plane by a tilt angle tau. The planes meet in a
//! point, and the dihedral angle formulas give the angles alpha, beta, gamma
//! under which the triangle's sides are seen from that point.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::Triangle;

/// Tilt angles (tau1, tau2, tau3) of the planes through sides a, b, c
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TiltTriple {
    pub tau1: f64,
    pub tau2: f64,
    pub tau3: f64,
}

impl TiltTriple {
    #[inline]
    pub const fn new(tau1: f64, tau2: f64, tau3: f64) -> Self {
        Self { tau1, tau2, tau3 }
    }

    /// Convert to view angles, or `None` if the result is rejected
    ///
    /// See [`TiltTrig::view_angles`].
    pub fn view_angles(&self, triangle: &Triangle) -> Option<ViewAngles> {
        TiltTrig::from(*self).view_angles(triangle)
    }
}

/// Precomputed cosines and sines of a tilt triple
///
/// The sweep reuses the same handful of tilt angles along every axis, so it
/// builds these from a lookup table instead of calling `sin`/`cos` per triple.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltTrig {
    pub cos: [f64; 3],
    pub sin: [f64; 3],
}

impl From<TiltTriple> for TiltTrig {
    fn from(t: TiltTriple) -> Self {
        Self {
            cos: [t.tau1.cos(), t.tau2.cos(), t.tau3.cos()],
            sin: [t.tau1.sin(), t.tau2.sin(), t.tau3.sin()],
        }
    }
}

impl TiltTrig {
    /// Dihedral deficit cosines and sines `(cos_delta, sin_delta)`
    ///
    /// `cos_delta_i = sin(tau_j) sin(tau_k) cos(X_i) - cos(tau_j) cos(tau_k)`.
    /// The sine always takes the non-negative root and nothing is clamped, so
    /// rounding near tau = 0 or pi may leave NaN in the result.
    pub fn deltas(&self, triangle: &Triangle) -> ([f64; 3], [f64; 3]) {
        let [c1, c2, c3] = self.cos;
        let [s1, s2, s3] = self.sin;

        let cos_delta = [
            s2 * s3 * triangle.cos_a() - c2 * c3,
            s3 * s1 * triangle.cos_b() - c3 * c1,
            s1 * s2 * triangle.cos_c() - c1 * c2,
        ];
        let sin_delta = cos_delta.map(|cd| (1.0 - cd * cd).sqrt());

        (cos_delta, sin_delta)
    }

    /// Compute the view angles, returning `None` when they fail
    /// [`ViewAngles::is_valid`]
    ///
    /// NaN from a degenerate triple is not rejected; it is returned as is and
    /// [`AngleBins::index`](crate::AngleBins::index) files it under bin 0.
    pub fn view_angles(&self, triangle: &Triangle) -> Option<ViewAngles> {
        let ([cd1, cd2, cd3], [sd1, sd2, sd3]) = self.deltas(triangle);

        let view = ViewAngles {
            alpha: ((cd1 + cd2 * cd3) / (sd2 * sd3)).acos(),
            beta: ((cd2 + cd3 * cd1) / (sd3 * sd1)).acos(),
            gamma: ((cd3 + cd1 * cd2) / (sd1 * sd2)).acos(),
        };

        view.is_valid().then_some(view)
    }
}

/// View angles (alpha, beta, gamma) at the common point of the three planes
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewAngles {
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

impl ViewAngles {
    #[inline]
    pub const fn new(alpha: f64, beta: f64, gamma: f64) -> Self {
        Self { alpha, beta, gamma }
    }

    /// Whether the triple could be the face angles at a trihedral vertex
    ///
    /// Each angle lies in `[0, pi]`, none exceeds the sum of the other two,
    /// and all three sum to at most `2 pi`. Every test is written as the
    /// violation that rejects the triple; a NaN component compares false
    /// against all of them and is accepted.
    pub fn is_valid(&self) -> bool {
        let Self { alpha, beta, gamma } = *self;

        let rejected = alpha < 0.0
            || alpha > PI
            || beta < 0.0
            || beta > PI
            || gamma < 0.0
            || gamma > PI
            || alpha > beta + gamma
            || beta > gamma + alpha
            || gamma > alpha + beta
            || alpha + beta + gamma > 2.0 * PI;

        !rejected
    }

    /// Angles as an array `[alpha, beta, gamma]`
    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.alpha, self.beta, self.gamma]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: ViewAngles, b: [f64; 3]) -> bool {
        a.to_array().iter().zip(b).all(|(x, y)| (x - y).abs() < EPSILON)
    }

    #[test]
    fn test_known_view_angles() {
        let t = Triangle::reference();

        let v = TiltTriple::new(PI / 3.0, PI / 3.0, PI / 3.0).view_angles(&t).unwrap();
        assert!(approx_eq(v, [1.596549696042738, 1.4216896579653253, 1.316887950399782]));

        let v = TiltTriple::new(PI / 4.0, PI / 3.0, PI / 2.0).view_angles(&t).unwrap();
        assert!(approx_eq(v, [1.3112093072317323, 1.1484725784163055, 1.410959374138804]));

        let v = TiltTriple::new(2.5, 2.5, 2.5).view_angles(&t).unwrap();
        assert!(approx_eq(v, [2.046563445399721, 1.8697007356769582, 1.7765430514063978]));
    }

    #[test]
    fn test_zero_tilts_pass_nan_through() {
        // All planes coincide with the triangle's plane: sin_delta = 0 and 0/0
        let t = Triangle::reference();
        let v = TiltTriple::new(0.0, 0.0, 0.0).view_angles(&t).unwrap();
        assert!(v.alpha.is_nan() && v.beta.is_nan() && v.gamma.is_nan());

        let trig = TiltTrig::from(TiltTriple::default());
        let (cos_delta, sin_delta) = trig.deltas(&t);
        assert_eq!(cos_delta, [-1.0, -1.0, -1.0]);
        assert_eq!(sin_delta, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_deltas_use_non_negative_root() {
        let t = Triangle::reference();
        let trig = TiltTrig::from(TiltTriple::new(0.4, 1.9, 2.7));
        let (cos_delta, sin_delta) = trig.deltas(&t);
        for (c, s) in cos_delta.iter().zip(sin_delta) {
            assert!(s >= 0.0);
            assert!((c * c + s * s - 1.0).abs() < EPSILON);
        }
    }

    #[test]
    fn test_trig_path_matches_direct() {
        let t = Triangle::reference();
        let tilt = TiltTriple::new(0.7, 1.1, 2.0);
        let trig = TiltTrig {
            cos: [0.7f64.cos(), 1.1f64.cos(), 2.0f64.cos()],
            sin: [0.7f64.sin(), 1.1f64.sin(), 2.0f64.sin()],
        };
        assert_eq!(tilt.view_angles(&t), trig.view_angles(&t));
    }

    #[test]
    fn test_accepted_outputs_satisfy_closure() {
        let t = Triangle::reference();
        let m = 24;
        let mut accepted = 0;
        for i in 1..m {
            for j in 1..m {
                for k in 1..m {
                    let tilt = TiltTriple::new(
                        i as f64 * PI / m as f64,
                        j as f64 * PI / m as f64,
                        k as f64 * PI / m as f64,
                    );
                    if let Some(v) = tilt.view_angles(&t) {
                        if v.to_array().iter().any(|x| x.is_nan()) {
                            continue;
                        }
                        accepted += 1;
                        for x in v.to_array() {
                            assert!((0.0..=PI).contains(&x));
                        }
                        assert!(v.alpha <= v.beta + v.gamma);
                        assert!(v.beta <= v.gamma + v.alpha);
                        assert!(v.gamma <= v.alpha + v.beta);
                        assert!(v.alpha + v.beta + v.gamma <= 2.0 * PI);
                    }
                }
            }
        }
        assert!(accepted > 0);
    }

    #[test]
    fn test_is_valid_accepts_nan() {
        // NaN fails every rejection comparison
        assert!(ViewAngles::new(f64::NAN, 1.0, 1.0).is_valid());
        assert!(ViewAngles::new(1.0, f64::NAN, 1.0).is_valid());
        assert!(ViewAngles::new(1.0, 1.0, f64::NAN).is_valid());
        assert!(ViewAngles::new(f64::NAN, f64::NAN, f64::NAN).is_valid());
    }

    #[test]
    fn test_nan_does_not_mask_other_violations() {
        assert!(!ViewAngles::new(f64::NAN, -0.5, 1.0).is_valid());
        assert!(!ViewAngles::new(f64::NAN, 3.5, 0.5).is_valid());
    }

    #[test]
    fn test_is_valid_range_and_closure() {
        assert!(ViewAngles::new(1.0, 1.0, 1.0).is_valid());
        assert!(ViewAngles::new(0.0, 0.0, 0.0).is_valid());
        assert!(!ViewAngles::new(-0.1, 1.0, 1.0).is_valid());
        assert!(!ViewAngles::new(1.0, PI + 0.1, 1.5).is_valid());
        // alpha exceeds beta + gamma
        assert!(!ViewAngles::new(2.5, 1.0, 1.0).is_valid());
        // Each angle fine on its own but the sum exceeds 2 pi
        assert!(!ViewAngles::new(2.2, 2.2, 2.2).is_valid());
    }

    #[test]
    fn test_infinite_rejected() {
        assert!(!ViewAngles::new(f64::INFINITY, 1.0, 1.0).is_valid());
    }
}
