use core::borrow::Borrow;

use super::RankTree;
use crate::order_statistic::to_sentinel;

impl<K: Ord> RankTree<K> {
    /// Returns the rank of `key`: how many tracked values are less than or
    /// equal to it, not counting `key` itself. Returns `None` if `key` was
    /// never tracked.
    ///
    /// Exactly one occurrence of `key` is left out, so with duplicates the
    /// other occurrences still count. `Some(0)` means `key` is present and
    /// nothing else is at or below it, which is different from `None`.
    ///
    /// # Complexity
    ///
    /// O(height)
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_stream::RankTree;
    ///
    /// let tree = RankTree::from([5, 1, 4, 4, 5, 9, 7, 13, 3]);
    ///
    /// assert_eq!(tree.rank_of(&1), Some(0));
    /// assert_eq!(tree.rank_of(&3), Some(1));
    /// assert_eq!(tree.rank_of(&4), Some(3));
    /// assert_eq!(tree.rank_of(&2), None);
    /// ```
    #[must_use]
    pub fn rank_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.rank_of(key)
    }

    /// Like [`rank_of`](RankTree::rank_of), but reports an untracked key as
    /// [`NOT_FOUND`](crate::order_statistic::NOT_FOUND) (`-1`).
    ///
    /// # Panics
    ///
    /// Panics if the rank does not fit in an `i64`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_stream::RankTree;
    ///
    /// let tree = RankTree::from([5, 1, 4]);
    /// assert_eq!(tree.rank_or_sentinel(&5), 2);
    /// assert_eq!(tree.rank_or_sentinel(&0), -1);
    /// ```
    #[must_use]
    pub fn rank_or_sentinel<Q>(&self, key: &Q) -> i64
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        to_sentinel(self.rank_of(key))
    }

    /// Returns how many times `key` has been tracked, `0` if never.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_stream::RankTree;
    ///
    /// let tree = RankTree::from(["b", "a", "b"]);
    /// assert_eq!(tree.count_of("b"), 2);
    /// assert_eq!(tree.count_of("c"), 0);
    /// ```
    #[must_use]
    pub fn count_of<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.count_of(key)
    }

    /// Returns `true` if `key` has been tracked at least once.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_stream::RankTree;
    ///
    /// let tree = RankTree::from([1, 2]);
    /// assert!(tree.contains(&2));
    /// assert!(!tree.contains(&3));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.search(key).is_some()
    }
}
