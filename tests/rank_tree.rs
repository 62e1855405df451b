use std::collections::BTreeMap;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rank_stream::RankTree;
use rank_stream::order_statistic::NOT_FOUND;

/// The number of values tracked in each proptest case.
const TEST_SIZE: usize = 5_000;

/// The stream from the classic "rank from stream" exercise.
const STREAM: [i64; 9] = [5, 1, 4, 4, 5, 9, 7, 13, 3];

/// Generates values in a range that ensures duplicates.
fn value_strategy() -> impl Strategy<Value = i64> {
    -2_000i64..2_000i64
}

fn model_of(values: &[i64]) -> BTreeMap<i64, usize> {
    let mut model = BTreeMap::new();
    for &value in values {
        *model.entry(value).or_default() += 1;
    }
    model
}

fn model_rank(model: &BTreeMap<i64, usize>, key: i64) -> Option<usize> {
    model.get(&key)?;
    Some(model.range(..=key).map(|(_, &count)| count).sum::<usize>() - 1)
}

// ─── Fixed scenarios ─────────────────────────────────────────────────────────

#[test]
fn ranks_of_tracked_values() {
    let tree = RankTree::from(STREAM);

    let ranks: Vec<_> = [1, 3, 4, 5, 13].iter().map(|key| (*key, tree.rank_of(key))).collect();
    assert_eq!(ranks, [(1, Some(0)), (3, Some(1)), (4, Some(3)), (5, Some(5)), (13, Some(8))]);
}

#[test]
fn ranks_of_untracked_values() {
    let tree = RankTree::from(STREAM);

    for key in [0, 2, 6, 10, 14, 15] {
        assert_eq!(tree.rank_of(&key), None, "rank_of({key})");
        assert_eq!(tree.rank_or_sentinel(&key), NOT_FOUND, "rank_or_sentinel({key})");
    }
}

#[test]
fn dump_is_sorted_with_counts() {
    let tree = RankTree::from(STREAM);

    let dump: Vec<(i64, usize)> = tree.iter().map(|(&key, count)| (key, count)).collect();
    assert_eq!(dump, [(1, 1), (3, 1), (4, 2), (5, 2), (7, 1), (9, 1), (13, 1)]);
}

#[test]
fn rank_zero_differs_from_absent() {
    let mut tree = RankTree::new();
    assert_eq!(tree.rank_of(&7), None);

    tree.track(7);
    assert_eq!(tree.rank_of(&7), Some(0));
    assert_eq!(tree.rank_or_sentinel(&7), 0);
}

#[test]
fn duplicate_tracking_shifts_larger_ranks() {
    let without: RankTree<i64> = [5, 1, 9, 7, 13, 3].into_iter().collect();
    let once: RankTree<i64> = [5, 1, 4, 9, 7, 13, 3].into_iter().collect();
    let twice: RankTree<i64> = [5, 1, 4, 4, 9, 7, 13, 3].into_iter().collect();

    assert_eq!(once.count_of(&4), 1);
    assert_eq!(twice.count_of(&4), 2);
    assert_eq!(twice.distinct_len(), once.distinct_len());

    for key in [5, 7, 9, 13] {
        let base = without.rank_of(&key).unwrap();
        assert_eq!(once.rank_of(&key), Some(base + 1), "rank_of({key}) with one 4");
        assert_eq!(twice.rank_of(&key), Some(base + 2), "rank_of({key}) with two 4s");
    }

    // Smaller keys do not see the 4s at all.
    assert_eq!(twice.rank_of(&3), without.rank_of(&3));
    assert_eq!(twice.rank_of(&1), without.rank_of(&1));
}

#[test]
fn duplicates_of_the_query_count_except_one() {
    let tree = RankTree::from([2, 2, 2, 1]);
    assert_eq!(tree.rank_of(&2), Some(3));
}

#[test]
fn monotonic_streams_are_not_rebalanced() {
    let ascending: RankTree<i64> = (0..1_000).collect();
    let descending: RankTree<i64> = (0..1_000).rev().collect();

    assert_eq!(ascending.height(), 1_000);
    assert_eq!(descending.height(), 1_000);
    assert_eq!(ascending.rank_of(&999), Some(999));
    assert_eq!(descending.rank_of(&0), Some(0));
    assert_eq!(ascending, descending);
}

#[test]
fn borrowed_queries() {
    let tree: RankTree<String> = ["pear", "apple", "fig", "apple"].into_iter().map(String::from).collect();

    assert_eq!(tree.rank_of("fig"), Some(2));
    assert_eq!(tree.rank_of("pear"), Some(3));
    assert_eq!(tree.count_of("apple"), 2);
    assert!(!tree.contains("kiwi"));
}

#[test]
fn clone_is_independent() {
    let original = RankTree::from(STREAM);
    let mut copy = original.clone();
    copy.track(0);

    assert_eq!(original.rank_of(&0), None);
    assert_eq!(copy.rank_of(&0), Some(0));
    assert_eq!(copy.rank_of(&13), Some(9));
    assert_eq!(original.rank_of(&13), Some(8));
}

// ─── Randomized properties ───────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Counts are conserved: every tracked value shows up exactly once in the dump.
    #[test]
    fn counts_sum_to_tracked(values in proptest::collection::vec(value_strategy(), 0..TEST_SIZE)) {
        let tree: RankTree<i64> = values.iter().copied().collect();

        let total: usize = tree.iter().map(|(_, count)| count).sum();
        prop_assert_eq!(total, values.len());
        prop_assert_eq!(tree.len(), values.len());
        prop_assert_eq!(tree.is_empty(), values.is_empty());
    }

    /// The dump matches a BTreeMap of counts, which also checks key order.
    #[test]
    fn dump_matches_btreemap(values in proptest::collection::vec(value_strategy(), 0..TEST_SIZE)) {
        let tree: RankTree<i64> = values.iter().copied().collect();
        let model = model_of(&values);

        let dump: Vec<(i64, usize)> = tree.iter().map(|(&key, count)| (key, count)).collect();
        let expected: Vec<(i64, usize)> = model.into_iter().collect();
        prop_assert_eq!(tree.iter().len(), expected.len());
        prop_assert_eq!(dump, expected);
    }

    /// Ranks agree with a counted model for tracked and untracked keys.
    #[test]
    fn ranks_match_model(
        values in proptest::collection::vec(value_strategy(), 1..TEST_SIZE),
        probes in proptest::collection::vec(value_strategy(), 100),
    ) {
        let tree: RankTree<i64> = values.iter().copied().collect();
        let model = model_of(&values);

        for &key in model.keys().chain(&probes) {
            prop_assert_eq!(tree.rank_of(&key), model_rank(&model, key), "rank_of({})", key);
            prop_assert_eq!(tree.count_of(&key), model.get(&key).copied().unwrap_or(0), "count_of({})", key);
        }
    }

    /// For tracked keys, a smaller key never has a larger rank.
    #[test]
    fn ranks_are_monotonic(values in proptest::collection::vec(value_strategy(), 1..TEST_SIZE)) {
        let tree: RankTree<i64> = values.iter().copied().collect();

        let ranks: Vec<usize> = tree.iter().map(|(key, _)| tree.rank_of(key).unwrap()).collect();
        prop_assert!(ranks.windows(2).all(|pair| pair[0] <= pair[1]), "ranks not monotonic: {:?}", ranks);
    }

    /// Values that were never tracked report the sentinel.
    #[test]
    fn untracked_values_are_not_found(
        values in proptest::collection::vec(0i64..1_000, 0..TEST_SIZE),
        probes in proptest::collection::vec(1_000i64..2_000, 50),
    ) {
        let tree: RankTree<i64> = values.iter().copied().collect();

        for key in probes {
            prop_assert_eq!(tree.rank_of(&key), None);
            prop_assert_eq!(tree.rank_or_sentinel(&key), -1);
            prop_assert!(!tree.contains(&key));
        }
    }

    /// Queries do not disturb the tree.
    #[test]
    fn requery_is_stable(
        values in proptest::collection::vec(value_strategy(), 0..TEST_SIZE),
        probes in proptest::collection::vec(value_strategy(), 50),
    ) {
        let tree: RankTree<i64> = values.iter().copied().collect();

        for key in probes {
            let first = tree.rank_of(&key);
            prop_assert_eq!(tree.rank_of(&key), first);
            prop_assert_eq!(tree.rank_of(&key), first);
        }
    }

    /// Interleaving tracks and queries sees every earlier track.
    #[test]
    fn interleaved_track_and_query(values in proptest::collection::vec(value_strategy(), 1..1_000)) {
        let mut tree = RankTree::new();
        let mut model: BTreeMap<i64, usize> = BTreeMap::new();

        for value in values {
            tree.track(value);
            *model.entry(value).or_default() += 1;
            prop_assert_eq!(tree.rank_of(&value), model_rank(&model, value), "rank_of({})", value);
            prop_assert_eq!(tree.distinct_len(), model.len());
        }
    }
}
