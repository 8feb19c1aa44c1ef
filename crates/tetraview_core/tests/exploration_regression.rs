//! Regression tests for the full exploration pipeline
//!
//! The expected counts and rejection totals come from the reference tool run
//! with the triangle (8, 6, 5) pi / 19. They pin down the transform, the
//! validity gate, the bin mapping and both inequality systems at once.

use tetraview_core::{
    AllowabilityClassifier, AllowabilityRule, AngleBins, CellCounts, Exploration, ExplorationParams,
    ReachabilitySweep, RejectionCounter, RuleSet, StateGrid, TiltLattice, Triangle,
};

fn params(m: usize, o: usize, n: usize) -> ExplorationParams {
    ExplorationParams::reference()
        .with_lattice(m, o)
        .with_grid_resolution(n)
}

fn counts(c3: u64, c2: u64, c1: u64, c0: u64) -> CellCounts {
    CellCounts {
        occupied_allowable: c3,
        unoccupied_allowable: c2,
        occupied_unallowable: c1,
        unoccupied_unallowable: c0,
        total: c0 + c1 + c2 + c3,
    }
}

// ==================== Reference Counts ====================

#[test]
fn test_m40_n10_base_rules() {
    let summary = Exploration::run(params(40, 1, 10)).unwrap().summary();
    assert_eq!(summary.counts, counts(247, 62, 27, 664));
    assert_eq!(summary.rejected, 0);
    assert_eq!(summary.evaluated, 38 * 38 * 38);
}

#[test]
fn test_m40_n10_near_boundary_rules() {
    let p = params(40, 1, 10).with_rules(RuleSet::NearBoundary);
    let summary = Exploration::run(p).unwrap().summary();
    assert_eq!(summary.counts, counts(242, 55, 32, 671));
    assert_eq!(summary.rejected, 0);
}

#[test]
fn test_m40_n10_without_margin() {
    // Degenerate tilts at 0 and pi give NaN view angles, which land in cell (0, 0, 0)
    let exploration = Exploration::run(params(40, 0, 10)).unwrap();
    let summary = exploration.summary();
    assert_eq!(summary.counts, counts(251, 58, 58, 633));
    assert_eq!(summary.rejected, 0);
    assert!(exploration.grid().state_at(0, 0, 0).is_reached());
}

#[test]
fn test_m60_n12_base_rules() {
    let summary = Exploration::run(params(60, 1, 12)).unwrap().summary();
    assert_eq!(summary.counts, counts(410, 126, 33, 1159));
    assert_eq!(summary.rejected, 0);
}

#[test]
fn test_m100_n20_base_rules() {
    let summary = Exploration::run(params(100, 1, 20)).unwrap().summary();
    assert_eq!(summary.counts, counts(1794, 841, 10, 5355));
    assert_eq!(summary.rejected, 0);
}

/// The default configuration: about 10^9 transform evaluations
#[test]
#[ignore]
fn test_reference_configuration() {
    let summary = Exploration::run(ExplorationParams::reference()).unwrap().summary();
    assert_eq!(summary.counts, counts(92289, 68874, 1538, 349299));
    assert_eq!(summary.counts.total, 80 * 80 * 80);
    assert_eq!(summary.rejected, 7);
}

// ==================== Pass Properties ====================

#[test]
fn test_rejections_independent_of_grid_resolution() {
    let expected = Exploration::run(params(40, 0, 10)).unwrap().rejected();
    for n in [1, 7, 10, 33] {
        let summary = Exploration::run(params(40, 0, n)).unwrap().summary();
        assert_eq!(summary.rejected, expected, "grid resolution {}", n);
        assert_eq!(summary.counts.total, (n * n * n) as u64);
    }
}

#[test]
fn test_sweep_is_idempotent() {
    let lattice = TiltLattice::new(36, 1);
    let sweep = ReachabilitySweep::new(lattice, Triangle::reference());
    let mut rejections = RejectionCounter::new();

    let mut once = StateGrid::new(AngleBins::new(9));
    sweep.run(&mut once, &mut rejections);

    let mut twice = once.clone();
    sweep.run(&mut twice, &mut rejections);

    assert_eq!(once, twice);
}

#[test]
fn test_pass_order_does_not_matter() {
    let triangle = Triangle::reference();
    let sweep = ReachabilitySweep::new(TiltLattice::new(36, 1), triangle);
    let classifier = AllowabilityClassifier::for_rule_set(RuleSet::NearBoundary, triangle);
    let bins = AngleBins::new(9);

    let mut sweep_first = StateGrid::new(bins);
    sweep.run(&mut sweep_first, &mut RejectionCounter::new());
    classifier.classify(&mut sweep_first);

    let mut classify_first = StateGrid::new(bins);
    classifier.classify(&mut classify_first);
    sweep.run(&mut classify_first, &mut RejectionCounter::new());

    assert_eq!(sweep_first, classify_first);
}

#[test]
fn test_cell_states_stay_in_range() {
    let exploration = Exploration::run(params(40, 1, 10)).unwrap();
    let grid = exploration.grid();
    for ((i, j, k), state) in grid.iter() {
        assert!(state.value() <= 3);
        assert_eq!(state, grid.state_at(i, j, k));
    }
}

#[test]
fn test_allowable_flag_matches_rule_at_midpoint() {
    let triangle = Triangle::reference();
    let rule = RuleSet::Base.build(triangle);
    let exploration = Exploration::run(params(40, 1, 10)).unwrap();
    let grid = exploration.grid();

    for ((i, j, k), state) in grid.iter() {
        assert_eq!(state.is_allowable(), rule.admits(&grid.midpoint(i, j, k)));
    }
}

#[test]
fn test_reached_flag_matches_lattice() {
    let p = params(30, 1, 6);
    let exploration = Exploration::run(p).unwrap();

    let lattice = p.lattice();
    let bins = p.bins();
    let mut expected = StateGrid::new(bins);
    for i in lattice.indices() {
        for j in lattice.indices() {
            for k in lattice.indices() {
                if let Some(view) = lattice.triple(i, j, k).view_angles(&p.triangle) {
                    expected.reach(&view);
                }
            }
        }
    }

    for ((i, j, k), state) in exploration.grid().iter() {
        assert_eq!(state.is_reached(), expected.state_at(i, j, k).is_reached());
    }
}
