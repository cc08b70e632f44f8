//! Tests for the input table, lag specifications, and embedding matrix.

use ssr_rs::{LagSpec, Matrix, SsrError, TimeSeriesTable};

// ============================================================================
// TimeSeriesTable Tests
// ============================================================================

#[test]
fn test_table_columns() {
    let table = TimeSeriesTable::new()
        .with_column("a", &[1.0, 2.0, 3.0])
        .unwrap()
        .with_optional_column("b", vec![Some(4.0), None, Some(6.0)])
        .unwrap();

    assert_eq!(table.n_rows(), 3);
    assert_eq!(table.n_cols(), 2);
    assert!(table.contains("a"));
    assert!(!table.contains("c"));
    assert_eq!(table.column_names().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(table.column("b").unwrap(), &[Some(4.0), None, Some(6.0)]);
}

#[test]
fn test_table_non_finite_values_are_missing() {
    let table = TimeSeriesTable::new()
        .with_column("a", &[1.0, f64::NAN, f64::INFINITY, 4.0])
        .unwrap()
        .with_optional_column("b", vec![Some(f64::NEG_INFINITY), None, Some(1.0), Some(2.0)])
        .unwrap();

    assert_eq!(table.column("a").unwrap(), &[Some(1.0), None, None, Some(4.0)]);
    assert_eq!(table.column("b").unwrap(), &[None, None, Some(1.0), Some(2.0)]);
}

#[test]
fn test_table_errors() {
    let table = TimeSeriesTable::new().with_column("a", &[1.0, 2.0, 3.0]).unwrap();

    let err = table.clone().with_column("a", &[1.0, 2.0, 3.0]).unwrap_err();
    assert_eq!(err, SsrError::DuplicateColumn("a".into()));

    let err = table.clone().with_column("b", &[1.0, 2.0]).unwrap_err();
    assert_eq!(err, SsrError::MismatchedLengths { expected: 3, got: 2 });

    let err = table.column("z").unwrap_err();
    assert_eq!(err, SsrError::UnknownColumn("z".into()));
}

// ============================================================================
// LagSpec Tests
// ============================================================================

#[test]
fn test_lag_spec_pairs_and_names() {
    let spec = LagSpec::new()
        .with("y", &[0, 2])
        .unwrap()
        .with("z", &[-1])
        .unwrap();

    assert_eq!(spec.total_lags(), 3);
    assert_eq!(spec.n_variables(), 2);
    assert_eq!(spec.variables().collect::<Vec<_>>(), vec!["y", "z"]);
    assert_eq!(
        spec.pairs().collect::<Vec<_>>(),
        vec![("y", 0), ("y", 2), ("z", -1)]
    );
    assert_eq!(spec.column_names(), vec!["y_0", "y_2", "z_-1"]);
    assert_eq!(spec.lags("w"), None);
}

#[test]
fn test_lag_spec_errors() {
    let err = LagSpec::new().with("y", &[]).unwrap_err();
    assert_eq!(err, SsrError::EmptyLagSet("y".into()));

    let err = LagSpec::new().with("y", &[1, 2, 1]).unwrap_err();
    assert_eq!(
        err,
        SsrError::DuplicateLag {
            variable: "y".into(),
            lag: 1
        }
    );

    let err = LagSpec::new()
        .with("y", &[1])
        .unwrap()
        .with("y", &[2])
        .unwrap_err();
    assert_eq!(err, SsrError::DuplicateVariable("y".into()));
}

// ============================================================================
// Matrix Tests
// ============================================================================

#[test]
fn test_matrix_rows_and_columns() {
    let m = Matrix::from_columns(vec![
        ("a".to_string(), vec![Some(1.0), Some(2.0), None]),
        ("b".to_string(), vec![Some(4.0), Some(5.0), Some(6.0)]),
    ])
    .unwrap();

    assert_eq!(m.n_rows(), 3);
    assert_eq!(m.n_cols(), 2);
    assert_eq!(m.column_index("b"), Some(1));
    assert_eq!(m.row(1), &[Some(2.0), Some(5.0)]);
    assert_eq!(m.get(2, 0), None);
    assert_eq!(m.complete_row(0), Some(vec![1.0, 4.0]));
    assert!(!m.row_is_complete(2));
    assert_eq!(m.complete_row(2), None);
}

#[test]
fn test_matrix_errors() {
    let err = Matrix::from_columns(vec![
        ("a".to_string(), vec![Some(1.0)]),
        ("b".to_string(), vec![Some(1.0), Some(2.0)]),
    ])
    .unwrap_err();
    assert_eq!(err, SsrError::MismatchedLengths { expected: 1, got: 2 });

    let err = Matrix::from_columns(vec![
        ("a".to_string(), vec![Some(1.0)]),
        ("a".to_string(), vec![Some(2.0)]),
    ])
    .unwrap_err();
    assert_eq!(err, SsrError::DuplicateColumn("a".into()));
}
