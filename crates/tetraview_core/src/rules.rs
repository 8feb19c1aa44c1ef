//! Allowability inequalities
//!
//! A view-angle triple is allowable for triangle ABC when it satisfies the
//! analytic inequality system for that triangle. The base system has twelve
//! conditions; the near-boundary system adds twelve more that tighten the
//! region where a view angle is smaller than the opposite base angle.
//!
//! Expressions keep their written evaluation order; regrouping the sums
//! changes rounding, and with it the classification of boundary cells.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use tetraview_math::{Triangle, ViewAngles};

/// A predicate deciding whether a view-angle triple is allowable
pub trait AllowabilityRule: Send + Sync {
    /// Whether `view` satisfies every inequality of this rule
    fn admits(&self, view: &ViewAngles) -> bool;

    /// Short name for logging
    fn name(&self) -> &'static str;
}

/// Which inequality system the classifier applies
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleSet {
    /// The twelve base inequalities
    #[default]
    Base,
    /// Base inequalities plus the twelve near-boundary inequalities
    NearBoundary,
}

impl RuleSet {
    /// Select from the `near_boundary` switch
    pub fn from_near_boundary(enabled: bool) -> Self {
        if enabled {
            RuleSet::NearBoundary
        } else {
            RuleSet::Base
        }
    }

    /// Build the rule for a triangle
    pub fn build(self, triangle: Triangle) -> Box<dyn AllowabilityRule> {
        match self {
            RuleSet::Base => Box::new(BaseRules::new(triangle)),
            RuleSet::NearBoundary => Box::new(NearBoundaryRules::new(triangle)),
        }
    }
}

/// The twelve base inequalities
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BaseRules {
    triangle: Triangle,
}

impl BaseRules {
    pub fn new(triangle: Triangle) -> Self {
        Self { triangle }
    }

    /// Closure: with one base angle substituted, the sum stays below 2 pi
    fn closure(&self, v: &ViewAngles) -> bool {
        let t = &self.triangle;
        let (a, b, c) = (t.a(), t.b(), t.c());
        let ViewAngles { alpha, beta, gamma } = *v;

        a + beta + gamma < 2.0 * PI
            && alpha + b + gamma < 2.0 * PI
            && alpha + beta + c < 2.0 * PI
    }

    /// Ordering: a view angle below its base angle bounds its neighbours
    fn ordering(&self, v: &ViewAngles) -> bool {
        let t = &self.triangle;
        let (a, b, c) = (t.a(), t.b(), t.c());
        let ViewAngles { alpha, beta, gamma } = *v;

        (alpha > a || beta < b || beta < c + alpha)
            && (alpha > a || gamma < c || gamma < b + alpha)
            && (beta > b || gamma < c || gamma < a + beta)
            && (beta > b || alpha < a || alpha < c + beta)
            && (gamma > c || alpha < a || alpha < b + gamma)
            && (gamma > c || beta < b || beta < a + gamma)
    }

    /// Sign: pairwise cosine sums stay positive
    fn sign(&self, v: &ViewAngles) -> bool {
        let t = &self.triangle;
        let (cos_a, cos_b, cos_c) = (t.cos_a(), t.cos_b(), t.cos_c());
        let ViewAngles { alpha, beta, gamma } = *v;

        (alpha > t.a() || cos_c * beta.cos() + cos_b * gamma.cos() > 0.0)
            && (beta > t.b() || cos_a * gamma.cos() + cos_c * alpha.cos() > 0.0)
            && (gamma > t.c() || cos_b * alpha.cos() + cos_a * beta.cos() > 0.0)
    }
}

impl AllowabilityRule for BaseRules {
    fn admits(&self, view: &ViewAngles) -> bool {
        self.closure(view) && self.ordering(view) && self.sign(view)
    }

    fn name(&self) -> &'static str {
        "base"
    }
}

/// Base inequalities plus the near-boundary set
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NearBoundaryRules {
    base: BaseRules,
}

impl NearBoundaryRules {
    pub fn new(triangle: Triangle) -> Self {
        Self {
            base: BaseRules::new(triangle),
        }
    }

    /// First six: linear bounds when the base angles are ordered and close
    fn near_sides(&self, v: &ViewAngles) -> bool {
        let t = &self.base.triangle;
        let (a, b, c) = (t.a(), t.b(), t.c());
        let ViewAngles { alpha, beta, gamma } = *v;

        (alpha > a || b < c || b > a + c
            || a * (beta + gamma - alpha) + (b - c) * (alpha + beta - gamma) < 2.0 * a * b)
            && (alpha > a || c < b || c > a + b
                || a * (gamma + beta - alpha) + (c - b) * (alpha + gamma - beta) < 2.0 * a * c)
            && (beta > b || c < a || c > b + a
                || b * (gamma + alpha - beta) + (c - a) * (beta + gamma - alpha) < 2.0 * b * c)
            && (beta > b || a < c || a > b + c
                || b * (alpha + gamma - beta) + (a - c) * (beta + alpha - gamma) < 2.0 * b * a)
            && (gamma > c || a < b || a > c + b
                || c * (alpha + beta - gamma) + (a - b) * (gamma + alpha - beta) < 2.0 * c * a)
            && (gamma > c || b < a || b > c + a
                || c * (beta + alpha - gamma) + (b - a) * (gamma + beta - alpha) < 2.0 * c * b)
    }

    /// Last six: the same bounds when the neighbouring view angle is large
    fn near_vertices(&self, v: &ViewAngles) -> bool {
        let t = &self.base.triangle;
        let (a, b, c) = (t.a(), t.b(), t.c());
        let ViewAngles { alpha, beta, gamma } = *v;

        (alpha > a || b < c || beta < b
            || a * (beta + gamma - alpha) + (b - c) * (beta - alpha - gamma) < 2.0 * a * c)
            && (alpha > a || c < b || gamma < c
                || a * (gamma + beta - alpha) + (c - b) * (gamma - alpha - beta) < 2.0 * a * b)
            && (beta > b || c < a || gamma < c
                || b * (gamma + alpha - beta) + (c - a) * (gamma - beta - alpha) < 2.0 * b * a)
            && (beta > b || a < c || alpha < a
                || b * (alpha + gamma - beta) + (a - c) * (alpha - beta - gamma) < 2.0 * b * c)
            && (gamma > c || a < b || alpha < a
                || c * (alpha + beta - gamma) + (a - b) * (alpha - gamma - beta) < 2.0 * c * b)
            && (gamma > c || b < a || beta < b
                || c * (beta + alpha - gamma) + (b - a) * (beta - gamma - alpha) < 2.0 * c * a)
    }
}

impl AllowabilityRule for NearBoundaryRules {
    fn admits(&self, view: &ViewAngles) -> bool {
        self.base.admits(view) && self.near_sides(view) && self.near_vertices(view)
    }

    fn name(&self) -> &'static str {
        "near-boundary"
    }
}
