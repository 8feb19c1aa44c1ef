//! Allowability pass over the grid

use std::time::Instant;

use crate::{AllowabilityRule, RuleSet, StateGrid, Triangle};

/// Marks every grid cell whose midpoint satisfies an [`AllowabilityRule`]
///
/// Independent of the reachability sweep: it only sets the allowable flag,
/// so the two passes may run in either order.
pub struct AllowabilityClassifier {
    rule: Box<dyn AllowabilityRule>,
}

impl AllowabilityClassifier {
    /// Create a classifier applying `rule`
    pub fn new(rule: Box<dyn AllowabilityRule>) -> Self {
        Self { rule }
    }

    /// Create a classifier for one of the built-in rule sets
    pub fn for_rule_set(rules: RuleSet, triangle: Triangle) -> Self {
        Self::new(rules.build(triangle))
    }

    /// The rule in use
    pub fn rule(&self) -> &dyn AllowabilityRule {
        self.rule.as_ref()
    }

    /// Classify every cell, returning how many were marked allowable
    pub fn classify(&self, grid: &mut StateGrid) -> usize {
        let start = Instant::now();
        let n = grid.resolution();
        let mut allowable = 0;

        for i in 0..n {
            for j in 0..n {
                for k in 0..n {
                    if self.rule.admits(&grid.midpoint(i, j, k)) {
                        grid.mark_allowable(i, j, k);
                        allowable += 1;
                    }
                }
            }
        }

        log::info!(
            "Classified {} cells with {} rules: {} allowable in {:.2?}",
            grid.len(),
            self.rule.name(),
            allowable,
            start.elapsed()
        );

        allowable
    }
}
