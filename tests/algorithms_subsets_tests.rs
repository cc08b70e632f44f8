//! Tests for lag-subset enumeration and bitmasks.
//!
//! ## Test Organization
//!
//! 1. **Bitmask** - binary expansion and digit limits
//! 2. **Enumeration** - count, order, coverage, and grouping
//! 3. **Limits** - oversized specifications

use std::collections::HashSet;

use ssr_rs::{LagSpec, SsrError, SubsetLags, bitmask, enumerate_subset_lags};

fn spec() -> LagSpec {
    LagSpec::new()
        .with("y", &[1, 2])
        .unwrap()
        .with("z", &[0])
        .unwrap()
}

// ============================================================================
// Bitmask Tests
// ============================================================================

#[test]
fn test_bitmask_least_significant_first() {
    assert_eq!(bitmask(5, 4).unwrap(), vec![true, false, true, false]);
    assert_eq!(bitmask(6, 3).unwrap(), vec![false, true, true]);
    assert_eq!(bitmask(0, 3).unwrap(), vec![false, false, false]);
}

#[test]
fn test_bitmask_full_width() {
    let bits = bitmask(u64::MAX, 64).unwrap();
    assert_eq!(bits.len(), 64);
    assert!(bits.iter().all(|&b| b));

    let bits = bitmask(1, 70).unwrap();
    assert_eq!(bits.len(), 70);
    assert_eq!(bits.iter().filter(|&&b| b).count(), 1);
}

#[test]
fn test_bitmask_insufficient_digits() {
    let err = bitmask(8, 3).unwrap_err();
    assert_eq!(err, SsrError::InsufficientDigits { value: 8, digits: 3 });
}

// ============================================================================
// Enumeration Tests
// ============================================================================

#[test]
fn test_subset_count() {
    assert_eq!(enumerate_subset_lags(&spec()).unwrap().len(), 7);

    let single = LagSpec::new().with("y", &[0]).unwrap();
    assert_eq!(enumerate_subset_lags(&single).unwrap().len(), 1);

    let five = LagSpec::new().with("y", &[0, 1, 2, 3, 4]).unwrap();
    assert_eq!(enumerate_subset_lags(&five).unwrap().len(), 31);
}

#[test]
fn test_subsets_follow_bitmask_order() {
    let names: Vec<Vec<String>> = enumerate_subset_lags(&spec())
        .unwrap()
        .iter()
        .map(LagSpec::column_names)
        .collect();

    assert_eq!(
        names,
        vec![
            vec!["y_1"],
            vec!["y_2"],
            vec!["y_1", "y_2"],
            vec!["z_0"],
            vec!["y_1", "z_0"],
            vec!["y_2", "z_0"],
            vec!["y_1", "y_2", "z_0"],
        ]
    );
}

#[test]
fn test_subsets_are_distinct_and_cover_all_pairs() {
    let subsets = enumerate_subset_lags(&spec()).unwrap();

    let distinct: HashSet<Vec<String>> = subsets.iter().map(LagSpec::column_names).collect();
    assert_eq!(distinct.len(), subsets.len());

    let union: HashSet<String> = subsets.iter().flat_map(LagSpec::column_names).collect();
    let all: HashSet<String> = spec().column_names().into_iter().collect();
    assert_eq!(union, all);

    assert!(subsets.iter().all(|s| !s.is_empty()));
}

#[test]
fn test_subsets_group_lags_by_variable() {
    let subsets = enumerate_subset_lags(&spec()).unwrap();
    let full = &subsets[6];

    assert_eq!(full, &spec());
    assert_eq!(full.n_variables(), 2);
    assert_eq!(full.lags("y"), Some(&[1, 2][..]));

    let partial = &subsets[4];
    assert_eq!(partial.lags("y"), Some(&[1][..]));
    assert_eq!(partial.lags("z"), Some(&[0][..]));
}

#[test]
fn test_iterator_yields_masks() {
    let spec = spec();
    let mut iter = SubsetLags::new(&spec).unwrap();
    assert_eq!(iter.remaining(), 7);
    assert_eq!(iter.size_hint(), (7, Some(7)));

    let (mask, first) = iter.next().unwrap();
    assert_eq!(mask, 1);
    assert_eq!(first.total_lags(), 1);
    assert_eq!(iter.remaining(), 6);

    let masks: Vec<u64> = iter.map(|(m, _)| m).collect();
    assert_eq!(masks, vec![2, 3, 4, 5, 6, 7]);
}

#[test]
fn test_subset_masks_agree_with_bitmask() {
    let spec = spec();
    for (mask, subset) in SubsetLags::new(&spec).unwrap() {
        let bits = bitmask(mask, spec.total_lags()).unwrap();
        let expected: Vec<String> = spec
            .column_names()
            .into_iter()
            .zip(bits)
            .filter_map(|(name, keep)| keep.then_some(name))
            .collect();
        assert_eq!(subset.column_names(), expected);
    }
}

// ============================================================================
// Limit Tests
// ============================================================================

#[test]
fn test_empty_spec_has_no_subsets() {
    assert!(enumerate_subset_lags(&LagSpec::new()).unwrap().is_empty());
}

#[test]
fn test_too_many_lags() {
    let lags: Vec<isize> = (0..64).collect();
    let spec = LagSpec::new().with("y", &lags).unwrap();

    let err = enumerate_subset_lags(&spec).unwrap_err();
    assert_eq!(err, SsrError::TooManyLags { got: 64, max: 63 });
    assert!(SubsetLags::new(&spec).is_err());
}
