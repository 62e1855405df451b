use core::fmt;
use core::iter::FusedIterator;

use smallvec::SmallVec;

use crate::raw::{Handle, RawRankTree};

mod capacity;
mod order_statistic;

/// A multiset of ordered keys that answers rank queries, built as an
/// unbalanced binary search tree with one node per distinct key.
///
/// Values are recorded one at a time with [`track`](RankTree::track). Each
/// node carries the number of times its key was tracked and the total count
/// of its subtree, so [`rank_of`](RankTree::rank_of) runs in time
/// proportional to the tree height.
///
/// The tree is never rebalanced. A stream arriving in random order keeps it
/// roughly logarithmic in height, while a sorted or reverse-sorted stream
/// turns it into a path and every operation becomes linear.
///
/// It is a logic error for a key to be modified in such a way that its
/// ordering relative to any other key, as determined by the [`Ord`] trait,
/// changes while it is in the tree. The behavior resulting from such a logic
/// error is not specified, but will not result in undefined behavior.
///
/// # Examples
///
/// ```
/// use rank_stream::RankTree;
///
/// let mut tree = RankTree::new();
/// for value in [5, 1, 4, 4, 5, 9, 7, 13, 3] {
///     tree.track(value);
/// }
///
/// // Values <= 4 are 1, 3, 4, 4; one 4 is the query itself.
/// assert_eq!(tree.rank_of(&4), Some(3));
/// assert_eq!(tree.rank_of(&13), Some(8));
/// assert_eq!(tree.rank_of(&6), None);
///
/// assert_eq!(tree.len(), 9);
/// assert_eq!(tree.distinct_len(), 7);
/// ```
#[derive(Clone)]
pub struct RankTree<K> {
    raw: RawRankTree<K>,
}

/// An iterator over the `(key, count)` pairs of a [`RankTree`], in ascending
/// key order.
///
/// This `struct` is created by the [`iter`] method on [`RankTree`].
///
/// # Examples
///
/// ```
/// use rank_stream::RankTree;
///
/// let tree = RankTree::from([3, 1, 3]);
/// let mut iter = tree.iter();
/// assert_eq!(iter.next(), Some((&1, 1)));
/// assert_eq!(iter.next(), Some((&3, 2)));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`iter`]: RankTree::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K: 'a> {
    tree: &'a RawRankTree<K>,
    // Nodes whose left subtree is done but which are not yet yielded.
    pending: SmallVec<[Handle; 32]>,
    remaining: usize,
}

impl<K> RankTree<K> {
    /// Makes a new, empty `RankTree`.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_stream::RankTree;
    ///
    /// let mut tree = RankTree::new();
    /// tree.track(1);
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        RankTree { raw: RawRankTree::new() }
    }

    /// Returns the number of tracked values, duplicates included.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_stream::RankTree;
    ///
    /// let mut tree = RankTree::new();
    /// assert_eq!(tree.len(), 0);
    /// tree.track(1);
    /// tree.track(1);
    /// assert_eq!(tree.len(), 2);
    /// ```
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns the number of distinct keys, which is also the number of nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_stream::RankTree;
    ///
    /// let tree = RankTree::from([2, 2, 7]);
    /// assert_eq!(tree.distinct_len(), 2);
    /// ```
    #[must_use]
    pub const fn distinct_len(&self) -> usize {
        self.raw.distinct_len()
    }

    /// Returns `true` if nothing has been tracked.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_stream::RankTree;
    ///
    /// let mut tree = RankTree::new();
    /// assert!(tree.is_empty());
    /// tree.track(1);
    /// assert!(!tree.is_empty());
    /// ```
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the number of nodes on the longest path from the root to a
    /// leaf, or `0` for an empty tree.
    ///
    /// This is an inspection aid: every operation costs time proportional to
    /// it, and since the tree is never rebalanced it can reach
    /// [`distinct_len`](RankTree::distinct_len).
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_stream::RankTree;
    ///
    /// let sorted: RankTree<i32> = (0..10).collect();
    /// assert_eq!(sorted.height(), 10);
    ///
    /// let mixed = RankTree::from([4, 2, 6, 1, 3, 5, 7]);
    /// assert_eq!(mixed.height(), 3);
    /// ```
    #[must_use]
    pub fn height(&self) -> usize {
        self.raw.height()
    }

    /// Forgets every tracked value.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_stream::RankTree;
    ///
    /// let mut tree = RankTree::from([1, 2, 3]);
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.rank_of(&1), None);
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Gets an iterator over the `(key, count)` pairs of the tree, sorted by
    /// key.
    ///
    /// This is the in-order dump of the tree. It walks with an explicit stack,
    /// so degenerate trees do not exhaust the call stack.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_stream::RankTree;
    ///
    /// let tree = RankTree::from([5, 1, 4, 4]);
    /// let dump: Vec<_> = tree.iter().map(|(&key, count)| (key, count)).collect();
    /// assert_eq!(dump, [(1, 1), (4, 2), (5, 1)]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K> {
        let mut iter = Iter {
            tree: &self.raw,
            pending: SmallVec::new(),
            remaining: self.raw.distinct_len(),
        };
        iter.descend_left(self.raw.root());
        iter
    }
}

impl<K: Ord> RankTree<K> {
    /// Records one occurrence of `key`.
    ///
    /// A key seen before only has its count incremented; a new key gets a new
    /// leaf at the bottom of its search path. The tree is never rebalanced.
    ///
    /// # Complexity
    ///
    /// O(height)
    ///
    /// # Panics
    ///
    /// Panics if `key` is new and the tree already holds `u32::MAX - 1`
    /// distinct keys. The tree is left unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_stream::RankTree;
    ///
    /// let mut tree = RankTree::new();
    /// tree.track(4);
    /// tree.track(4);
    /// assert_eq!(tree.count_of(&4), 2);
    /// assert_eq!(tree.distinct_len(), 1);
    /// ```
    pub fn track(&mut self, key: K) {
        self.raw.track(key);
    }
}

impl<K: fmt::Debug> fmt::Debug for RankTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K> Default for RankTree<K> {
    fn default() -> Self {
        RankTree::new()
    }
}

/// Two trees are equal when they hold the same keys with the same counts,
/// whatever their shapes.
impl<K: PartialEq> PartialEq for RankTree<K> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.distinct_len() == other.distinct_len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq> Eq for RankTree<K> {}

impl<K: Ord> FromIterator<K> for RankTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = RankTree::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for RankTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.track(key);
        }
    }
}

impl<'a, K: 'a + Ord + Copy> Extend<&'a K> for RankTree<K> {
    fn extend<I: IntoIterator<Item = &'a K>>(&mut self, iter: I) {
        for &key in iter {
            self.track(key);
        }
    }
}

impl<K: Ord, const N: usize> From<[K; N]> for RankTree<K> {
    /// Tracks the array's values in order.
    ///
    /// ```
    /// use rank_stream::RankTree;
    ///
    /// let tree = RankTree::from([3, 1, 2]);
    /// assert_eq!(tree.rank_of(&3), Some(2));
    /// ```
    fn from(arr: [K; N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<'a, K> IntoIterator for &'a RankTree<K> {
    type Item = (&'a K, usize);
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Iter<'a, K> {
        self.iter()
    }
}

impl<K> Iter<'_, K> {
    fn descend_left(&mut self, mut subtree: Option<Handle>) {
        while let Some(handle) = subtree {
            self.pending.push(handle);
            subtree = self.tree.node(handle).left();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = (&'a K, usize);

    fn next(&mut self) -> Option<(&'a K, usize)> {
        let handle = self.pending.pop()?;
        let tree = self.tree;
        let node = tree.node(handle);
        self.descend_left(node.right());
        self.remaining -= 1;
        Some((node.key(), node.count()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K> FusedIterator for Iter<'_, K> {}

impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Iter {
            tree: self.tree,
            pending: self.pending.clone(),
            remaining: self.remaining,
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for Iter<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
