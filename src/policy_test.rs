use super::*;

// --- round_index ---

#[test]
fn round_index_rounds_half_away_from_zero() {
    assert_eq!(round_index(1.5), Some(2));
    assert_eq!(round_index(-1.5), Some(-2));
    assert_eq!(round_index(0.49), Some(0));
}

#[test]
fn round_index_rejects_non_finite() {
    assert_eq!(round_index(f64::NAN), None);
    assert_eq!(round_index(f64::INFINITY), None);
    assert_eq!(round_index(f64::NEG_INFINITY), None);
}

#[test]
fn round_index_rejects_values_past_i64() {
    assert_eq!(round_index(1.0e19), None);
}

// --- constrain_to_neighbors (bounded) ---

#[test]
fn bounded_keeps_start_and_neighbours() {
    assert_eq!(constrain_to_neighbors(3, 3, 0.0, 6, false), 3);
    assert_eq!(constrain_to_neighbors(4, 3, 1.0, 6, false), 4);
    assert_eq!(constrain_to_neighbors(2, 3, -1.0, 6, false), 2);
}

#[test]
fn bounded_far_candidate_falls_back_by_delta_sign() {
    assert_eq!(constrain_to_neighbors(9, 3, 0.5, 12, false), 4);
    assert_eq!(constrain_to_neighbors(-4, 3, -0.5, 12, false), 2);
    assert_eq!(constrain_to_neighbors(9, 3, 0.0, 12, false), 3);
}

#[test]
fn bounded_neighbour_below_zero_is_allowed_before_clamping() {
    assert_eq!(constrain_to_neighbors(-1, 0, -0.2, 4, false), -1);
    assert_eq!(resolve_index(-1, 4, false), Some(0));
}

// --- constrain_to_neighbors (wrapping) ---

#[test]
fn wrapping_accepts_neighbour_across_seam() {
    assert_eq!(constrain_to_neighbors(0, 5, 1.0, 6, true), 0);
    assert_eq!(constrain_to_neighbors(5, 0, -1.0, 6, true), 5);
}

#[test]
fn wrapping_reduces_raw_candidate_mod_count() {
    assert_eq!(constrain_to_neighbors(7, 0, 1.0, 6, true), 1);
    assert_eq!(constrain_to_neighbors(-1, 0, -1.0, 6, true), 5);
}

#[test]
fn wrapping_far_candidate_falls_back_by_delta_sign() {
    assert_eq!(constrain_to_neighbors(3, 0, 0.1, 6, true), 1);
    assert_eq!(constrain_to_neighbors(3, 0, -0.1, 6, true), 5);
    assert_eq!(constrain_to_neighbors(3, 0, 0.0, 6, true), 0);
}

#[test]
fn wrapping_single_item_always_resolves_to_zero() {
    assert_eq!(constrain_to_neighbors(4, 0, 1.0, 1, true), 0);
}

// --- resolve_index ---

#[test]
fn resolve_index_empty_is_none() {
    assert_eq!(resolve_index(0, 0, true), None);
    assert_eq!(resolve_index(0, 0, false), None);
}

#[test]
fn resolve_index_clamps_when_bounded() {
    assert_eq!(resolve_index(10, 2, false), Some(1));
    assert_eq!(resolve_index(-1, 2, false), Some(0));
}

#[test]
fn resolve_index_wraps_when_wrapping() {
    assert_eq!(resolve_index(6, 6, true), Some(0));
    assert_eq!(resolve_index(-1, 6, true), Some(5));
    assert_eq!(resolve_index(-13, 6, true), Some(5));
}
