//! Tests for nearest-neighbor selection and projection.
//!
//! ## Test Organization
//!
//! 1. **Selection** - k nearest, ties, and shortfalls
//! 2. **Weights** - exponential decay and zero distances
//! 3. **Forecast** - projection, gathering, and weighted means
//! 4. **Within-Row** - observed-vector targets and their errors

use approx::assert_relative_eq;

use ssr_rs::prelude::*;
use ssr_rs::{Moments, StateSpace};

fn ramp_table(n: usize) -> TimeSeriesTable<f64> {
    let x: Vec<f64> = (1..=n).map(|i| i as f64).collect();
    let y: Vec<f64> = (1..=n).map(|i| (n + i) as f64).collect();
    TimeSeriesTable::new()
        .with_column("x", &x)
        .unwrap()
        .with_column("y", &y)
        .unwrap()
}

fn ramp_ssr(n: usize) -> StateSpace<f64> {
    let lags = LagSpec::new().with("y", &[0, 1, 2, 3]).unwrap();
    build_ssr(&ramp_table(n), "x", &lags).unwrap()
}

fn wave_table(n: usize) -> TimeSeriesTable<f64> {
    let z: Vec<f64> = (0..n).map(|i| (i as f64 * 0.5).sin()).collect();
    TimeSeriesTable::new().with_column("z", &z).unwrap()
}

// ============================================================================
// Selection Tests
// ============================================================================

#[test]
fn test_select_nearest_first() {
    let row = [Some(3.0), None, Some(1.0), Some(2.0), Some(5.0)];
    let set = NeighborSet::select(&row, 3).unwrap();

    assert_eq!(set.indices, vec![2, 3, 0]);
    assert_eq!(set.distances, vec![1.0, 2.0, 3.0]);
    assert_eq!(set.len(), 3);
}

#[test]
fn test_select_ties_prefer_earlier_index() {
    let row = [Some(1.0), Some(0.5), Some(0.5), None];
    let set = NeighborSet::select(&row, 2).unwrap();
    assert_eq!(set.indices, vec![1, 2]);
    assert_relative_eq!(set.weights[0], set.weights[1]);
}

#[test]
fn test_select_too_few_neighbors() {
    let row = [Some(1.0), None, Some(2.0), None];
    assert!(NeighborSet::select(&row, 3).is_none());
    assert!(NeighborSet::select(&row, 0).is_none());
    assert!(NeighborSet::select(&row, 2).is_some());
}

#[test]
fn test_project_advances_indices() {
    let row = [Some(1.0), Some(2.0), Some(3.0)];
    let set = NeighborSet::select(&row, 2).unwrap();
    let projected = set.project();

    assert_eq!(projected.indices, vec![1, 2]);
    assert_eq!(projected.weights, set.weights);
    assert_eq!(projected.distances, set.distances);
}

// ============================================================================
// Weight Tests
// ============================================================================

#[test]
fn test_weights_decay_with_relative_distance() {
    let row = [Some(2.0), Some(4.0), Some(8.0)];
    let set = NeighborSet::select(&row, 3).unwrap();

    assert_relative_eq!(set.weights[0], (-1.0f64).exp());
    assert_relative_eq!(set.weights[1], (-2.0f64).exp());
    assert_relative_eq!(set.weights[2], (-4.0f64).exp());
}

#[test]
fn test_weights_with_zero_nearest_distance() {
    let row = [Some(0.0), Some(2.0), Some(0.0)];
    let set = NeighborSet::select(&row, 3).unwrap();

    assert_eq!(set.indices, vec![0, 2, 1]);
    assert_eq!(set.weights, vec![1.0, 1.0, 0.0]);
}

// ============================================================================
// Forecast Tests
// ============================================================================

#[test]
fn test_forecast_exactly_focal_times() {
    let ssr = ramp_ssr(30);
    let d = build_distance_matrix(&ssr, &[19, 20, 21, 22, 23, 24], Exact).unwrap();
    let result = forecast(&ssr, &d, false, None).unwrap();

    assert_eq!(result.len(), 30);
    assert_eq!(result.defined_count(), 6);
    for t in 0..30 {
        let expected = (19..=24).contains(&t);
        assert_eq!(result.values[t].is_some(), expected, "time {t}");
        assert_eq!(result.neighbors[t].is_some(), expected, "time {t}");
    }
}

#[test]
fn test_forecast_is_weighted_mean_of_projected_response() {
    let ssr = ramp_ssr(30);
    let d = build_distance_matrix(&ssr, &[19, 24], Exact).unwrap();
    let result = forecast(&ssr, &d, false, None).unwrap();
    let response = ssr.response_column().unwrap();

    for t in [19, 24] {
        let set = result.neighbors[t].as_ref().unwrap();
        assert_eq!(set.len(), ssr.neighbor_count());
        assert!(set.indices.iter().all(|&j| j < t));

        let num: f64 = set
            .indices
            .iter()
            .zip(set.weights.iter())
            .map(|(&j, &w)| w * response[j].unwrap())
            .sum();
        let den: f64 = set.weights.iter().sum();
        assert_relative_eq!(result.values[t].unwrap(), num / den, epsilon = 1e-12);
    }
}

#[test]
fn test_forecast_nearest_analogues_on_a_ramp() {
    let ssr = ramp_ssr(30);
    let d = build_distance_matrix(&ssr, &[19], Exact).unwrap();
    let result = forecast(&ssr, &d, false, None).unwrap();

    // Row 18's nearest earlier states are 17, 16, ..., 12
    let set = result.neighbors[19].as_ref().unwrap();
    assert_eq!(set.indices, vec![18, 17, 16, 15, 14, 13]);
}

#[test]
fn test_forecast_zero_variance_response_is_missing() {
    let y: Vec<f64> = (0..20).map(|i| (i as f64 * 0.7).sin()).collect();
    let table = TimeSeriesTable::new()
        .with_column("x", &[4.0; 20])
        .unwrap()
        .with_column("y", &y)
        .unwrap();
    let lags = LagSpec::new().with("y", &[0, 1]).unwrap();
    let ssr = build_ssr(&table, "x", &lags).unwrap();
    let d = build_distance_matrix(&ssr, &[10], FromEarliest).unwrap();
    let result = forecast(&ssr, &d, false, None).unwrap();

    assert_eq!(result.defined_count(), 0);
}

#[test]
fn test_forecast_rejects_foreign_distance_matrix() {
    let ssr = ramp_ssr(30);
    let other = ramp_ssr(20);
    let d = build_distance_matrix(&other, &[15], Exact).unwrap();

    let err = forecast(&ssr, &d, false, None).unwrap_err();
    assert_eq!(err, SsrError::MismatchedLengths { expected: 30, got: 20 });
}

// ============================================================================
// Within-Row Tests
// ============================================================================

#[test]
fn test_within_row_reads_standardized_observed() {
    let table = wave_table(40);
    let lags = LagSpec::new().with("z", &[0, 1]).unwrap();
    let ssr = build_predictor_ssr(&table, &lags).unwrap();
    let d = build_distance_matrix(&ssr, &[30], FromEarliest).unwrap();

    let observed: Vec<f64> = (0..40).map(|i| (i as f64 * 0.5).cos() * 3.0 + 10.0).collect();
    let result = forecast(&ssr, &d, true, Some(&observed)).unwrap();
    assert_eq!(result.defined_count(), 10);

    let present: Vec<Option<f64>> = observed.iter().copied().map(Some).collect();
    let m = Moments::of(&present);
    let set = result.neighbors[35].as_ref().unwrap();
    let num: f64 = set
        .indices
        .iter()
        .zip(set.weights.iter())
        .map(|(&j, &w)| w * m.standardize_value(observed[j]).unwrap())
        .sum();
    let den: f64 = set.weights.iter().sum();
    assert_relative_eq!(result.values[35].unwrap(), num / den, epsilon = 1e-12);
}

#[test]
fn test_within_row_requires_observed() {
    let lags = LagSpec::new().with("z", &[0, 1]).unwrap();
    let ssr = build_predictor_ssr(&wave_table(40), &lags).unwrap();
    let d = build_distance_matrix(&ssr, &[30], Exact).unwrap();

    let err = forecast(&ssr, &d, true, None).unwrap_err();
    assert_eq!(err, SsrError::MissingObserved);

    let short = vec![1.0; 39];
    let err = forecast(&ssr, &d, true, Some(&short)).unwrap_err();
    assert_eq!(err, SsrError::MismatchedLengths { expected: 40, got: 39 });
}

#[test]
fn test_predictor_ssr_needs_within_row() {
    let lags = LagSpec::new().with("z", &[0, 1]).unwrap();
    let ssr = build_predictor_ssr(&wave_table(40), &lags).unwrap();
    let d = build_distance_matrix(&ssr, &[30], Exact).unwrap();

    let err = forecast(&ssr, &d, false, None).unwrap_err();
    assert!(matches!(err, SsrError::InvalidInput(_)));
}
