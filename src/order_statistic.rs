/// The rank reported for a value that was never tracked.
///
/// Every real rank is non-negative, so `-1` never collides with one. Prefer
/// [`RankTree::rank_of`](crate::RankTree::rank_of), which says the same thing
/// with `None`.
pub const NOT_FOUND: i64 = -1;

/// Flattens an optional rank into the sentinel convention.
///
/// # Examples
///
/// ```
/// use rank_stream::order_statistic::{NOT_FOUND, to_sentinel};
///
/// assert_eq!(to_sentinel(Some(3)), 3);
/// assert_eq!(to_sentinel(None), NOT_FOUND);
/// ```
///
/// # Panics
///
/// Panics if `rank` does not fit in an `i64`.
#[must_use]
pub fn to_sentinel(rank: Option<usize>) -> i64 {
    rank.map_or(NOT_FOUND, |rank| i64::try_from(rank).expect("rank exceeds `i64::MAX`"))
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn zero_and_absent_stay_distinct() {
        assert_eq!(to_sentinel(Some(0)), 0);
        assert_eq!(to_sentinel(None), -1);
        assert_ne!(to_sentinel(Some(0)), to_sentinel(None));
    }
}
