use proptest::prelude::*;
use tabular_dp::problems::subset::{
    can_partition, knapsack_01, min_coins, ribbon_cut, target_sum_ways, SubsetSum,
};
use tabular_dp::DpError;

#[test]
fn ways_and_reachability_scenarios() {
    let s = SubsetSum::new(&[2, 3, 5, 6, 8, 10], 10).unwrap();
    assert_eq!(s.ways(), 3);
    assert!(s.is_reachable());

    let unreachable = SubsetSum::new(&[2, 4, 6], 5).unwrap();
    assert_eq!(unreachable.ways(), 0);
    assert!(!unreachable.is_reachable());
}

#[test]
fn negative_target_is_an_error() {
    assert_eq!(
        SubsetSum::new(&[1], -1).unwrap_err(),
        DpError::NegativeTarget(-1)
    );
}

#[test]
fn partition_and_knapsack_scenarios() {
    assert!(can_partition(&[1, 5, 11, 5]));
    assert!(!can_partition(&[1, 2, 3, 5]));
    assert_eq!(knapsack_01(&[10, 20, 30], &[60, 100, 120], 50).unwrap(), 220);
    assert_eq!(knapsack_01(&[], &[], 10).unwrap(), 0);
}

#[test]
fn unbounded_scenarios() {
    assert_eq!(ribbon_cut(5, &[5, 3, 2]), Some(2));
    assert_eq!(ribbon_cut(7, &[5, 3]), None);
    assert_eq!(min_coins(11, &[1, 2, 5]), Some(3));
    assert_eq!(min_coins(3, &[2]), None);
}

#[test]
fn target_sum_scenario() {
    assert_eq!(target_sum_ways(&[1, 1, 1, 1, 1], 3), 5);
    assert_eq!(target_sum_ways(&[1, 2, 1], 0), 2);
}

proptest! {
    #[test]
    fn zero_target_always_has_exactly_the_empty_subset(items in prop::collection::vec(1usize..12, 0..10)) {
        let s = SubsetSum::new(&items, 0).unwrap();
        prop_assert_eq!(s.ways(), 1);
        prop_assert!(s.is_reachable());
    }

    #[test]
    fn reachable_iff_ways_positive(items in prop::collection::vec(1usize..8, 0..8), target in 0i64..24) {
        let s = SubsetSum::new(&items, target).unwrap();
        prop_assert_eq!(s.is_reachable(), s.ways() > 0);
    }

    #[test]
    fn total_sum_is_always_reachable(items in prop::collection::vec(1usize..8, 0..8)) {
        let total: usize = items.iter().sum();
        let s = SubsetSum::new(&items, total as i64).unwrap();
        prop_assert!(s.is_reachable());
    }

    #[test]
    fn sign_assignments_total_two_to_the_n(items in prop::collection::vec(1usize..5, 0..7)) {
        // Summing ways over every reachable goal must count every sign
        // assignment exactly once.
        let total: usize = items.iter().sum();
        let all: u64 = (-(total as i64)..=total as i64)
            .map(|goal| target_sum_ways(&items, goal))
            .sum();
        prop_assert_eq!(all, 1u64 << items.len());
    }

    #[test]
    fn knapsack_value_never_exceeds_the_value_sum(
        pairs in prop::collection::vec((1usize..10, 1u64..50), 0..8),
        capacity in 0usize..40,
    ) {
        let weights: Vec<usize> = pairs.iter().map(|p| p.0).collect();
        let values: Vec<u64> = pairs.iter().map(|p| p.1).collect();
        let best = knapsack_01(&weights, &values, capacity).unwrap();
        prop_assert!(best <= values.iter().sum());
    }
}
