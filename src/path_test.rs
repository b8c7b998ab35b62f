use std::f64::consts::PI;

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// --- shortest_path ---

#[test]
fn same_turn_returns_logical_target() {
    assert!(approx_eq(shortest_path(0.1, -1.0), -1.0));
}

#[test]
fn picks_equivalent_in_current_turn() {
    // Three turns in, heading for the logical target near zero.
    let current = 3.0 * TAU + 0.2;
    assert!(approx_eq(shortest_path(current, 0.0), 3.0 * TAU));
}

#[test]
fn negative_turns_resolve_downward() {
    let current = -2.0 * TAU - 0.3;
    let target = shortest_path(current, -0.5);
    assert!(approx_eq(target, -2.0 * TAU - 0.5));
}

#[test]
fn wraps_across_the_seam() {
    // Sitting just short of a full turn, the last item is nearer through the seam.
    let count = 6.0;
    let last = -(5.0 / count) * TAU;
    let first = 0.0;
    let from_last = shortest_path(last, first);
    assert!(approx_eq(from_last, -TAU));
}

#[test]
fn never_more_than_half_a_turn_away() {
    let mut current = -7.3;
    while current < 7.3 {
        for k in 0..8 {
            let logical = -(f64::from(k) / 8.0) * TAU;
            let target = shortest_path(current, logical);
            assert!((target - current).abs() <= PI + EPSILON, "current {current} logical {logical}");
        }
        current += 0.37;
    }
}

#[test]
fn slowly_changing_current_gives_continuous_targets() {
    let logical = -1.0;
    let mut prev = shortest_path(0.0, logical);
    let mut current = 0.0;
    for _ in 0..100 {
        current += 0.05;
        let next = shortest_path(current, logical);
        assert!(next >= prev - EPSILON, "target moved backwards at {current}");
        prev = next;
    }
}

// --- stale handling ---

#[test]
fn zero_offset_with_nonzero_index_is_stale() {
    assert!(is_stale(0.0, 3));
}

#[test]
fn zero_offset_at_index_zero_is_not_stale() {
    assert!(!is_stale(0.0, 0));
}

#[test]
fn moved_offset_is_not_stale() {
    assert!(!is_stale(-0.001, 3));
}

#[test]
fn resolve_ring_target_bypasses_shortest_path_when_stale() {
    let logical = -(4.0 / 6.0) * TAU;
    assert!(approx_eq(resolve_ring_target(0.0, logical, 4), logical));
}

#[test]
fn resolve_ring_target_uses_shortest_path_when_live() {
    let logical = -(4.0 / 6.0) * TAU;
    let current = -0.01;
    assert!(approx_eq(resolve_ring_target(current, logical, 4), shortest_path(current, logical)));
}
