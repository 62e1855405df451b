use super::RankTree;
use crate::raw::RawRankTree;

impl<K> RankTree<K> {
    /// Creates an empty tree with room for at least `capacity` distinct keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_stream::RankTree;
    ///
    /// let tree: RankTree<i64> = RankTree::with_capacity(16);
    /// assert!(tree.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        RankTree {
            raw: RawRankTree::with_capacity(capacity),
        }
    }

    /// Returns how many distinct keys the tree can hold without reallocating.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_stream::RankTree;
    ///
    /// let tree: RankTree<i64> = RankTree::with_capacity(32);
    /// assert!(tree.capacity() >= 32);
    /// ```
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
