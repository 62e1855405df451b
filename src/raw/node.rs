use core::borrow::Borrow;
use core::cmp::Ordering::{Equal, Greater, Less};
use core::num::NonZero;

use super::arena::Handle;

/// One distinct key of the tree together with its multiplicity.
#[derive(Clone, Debug)]
pub(crate) struct Node<K> {
    key: K,
    /// Number of times `key` has been tracked.
    count: NonZero<usize>,
    /// Sum of `count` over the subtree rooted at this node.
    weight: usize,
    left: Option<Handle>,
    right: Option<Handle>,
}

/// Where a key lies relative to a node.
pub(crate) enum Route {
    /// The node holds the key.
    Here,
    /// The key is smaller; carries the left child, if any.
    Left(Option<Handle>),
    /// The key is larger; carries the right child, if any.
    Right(Option<Handle>),
}

impl<K> Node<K> {
    /// Creates a leaf holding a single occurrence of `key`.
    pub(crate) const fn new(key: K) -> Self {
        Self {
            key,
            count: NonZero::<usize>::MIN,
            weight: 1,
            left: None,
            right: None,
        }
    }

    pub(crate) const fn key(&self) -> &K {
        &self.key
    }

    pub(crate) const fn count(&self) -> usize {
        self.count.get()
    }

    pub(crate) const fn weight(&self) -> usize {
        self.weight
    }

    pub(crate) const fn left(&self) -> Option<Handle> {
        self.left
    }

    pub(crate) const fn right(&self) -> Option<Handle> {
        self.right
    }

    pub(crate) fn set_left(&mut self, child: Handle) {
        debug_assert!(self.left.is_none(), "`Node::set_left()` - left child already present!");
        self.left = Some(child);
    }

    pub(crate) fn set_right(&mut self, child: Handle) {
        debug_assert!(self.right.is_none(), "`Node::set_right()` - right child already present!");
        self.right = Some(child);
    }

    /// Records one more occurrence of this node's key.
    pub(crate) fn increment(&mut self) {
        self.count = self.count.saturating_add(1);
    }

    /// Records one more occurrence somewhere in this subtree.
    pub(crate) fn add_weight(&mut self) {
        self.weight += 1;
    }

    /// Compares `key` with this node's key.
    pub(crate) fn route<Q>(&self, key: &Q) -> Route
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        match key.cmp(self.key.borrow()) {
            Less => Route::Left(self.left),
            Greater => Route::Right(self.right),
            Equal => Route::Here,
        }
    }
}
