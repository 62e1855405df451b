use core::borrow::Borrow;

use smallvec::SmallVec;

use super::arena::Arena;
use super::arena::Handle;
use super::node::{Node, Route};

/// Where a tracked key ends up after the descent.
enum Landing {
    /// A node for the key already exists.
    Existing,
    /// A new leaf goes under the last node, on the left.
    Left,
    /// A new leaf goes under the last node, on the right.
    Right,
}

/// Nodes visited from the root down to the landing point.
type Path = SmallVec<[Handle; 32]>;

/// The unbalanced, count-augmented binary search tree backing `RankTree`.
#[derive(Clone)]
pub(crate) struct RawRankTree<K> {
    /// Arena storing all tree nodes; parents link to children by handle.
    nodes: Arena<Node<K>>,
    /// Handle to the root node, if anything has been tracked.
    root: Option<Handle>,
    /// Total number of tracked values, duplicates included.
    len: usize,
}

impl<K> RawRankTree<K> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            len: 0,
        }
    }

    /// Creates a new tree with room for `capacity` distinct keys.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
            len: 0,
        }
    }

    /// Returns the number of tracked values.
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of distinct keys (one node each).
    pub(crate) const fn distinct_len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Drops every node.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.len = 0;
    }

    pub(crate) const fn root(&self) -> Option<Handle> {
        self.root
    }

    pub(crate) fn node(&self, handle: Handle) -> &Node<K> {
        self.nodes.get(handle)
    }

    fn weight_of(&self, subtree: Option<Handle>) -> usize {
        subtree.map_or(0, |h| self.nodes.get(h).weight())
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    pub(crate) fn height(&self) -> usize {
        let mut stack: SmallVec<[(Handle, usize); 32]> = SmallVec::new();
        let mut height = 0;

        if let Some(root) = self.root {
            stack.push((root, 1));
        }

        while let Some((handle, depth)) = stack.pop() {
            height = height.max(depth);
            let node = self.nodes.get(handle);
            for child in [node.left(), node.right()].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }

        height
    }
}

impl<K: Ord> RawRankTree<K> {
    /// Records one occurrence of `key`.
    ///
    /// A read-only descent finds either the node for `key` or the empty slot
    /// where its leaf belongs. Only then is anything changed: the leaf is
    /// allocated (the one step that can panic), the count or link is updated
    /// and every node on the path has its weight bumped. A full arena
    /// therefore leaves the tree exactly as it was.
    pub(crate) fn track(&mut self, key: K) {
        let Some(root) = self.root else {
            self.root = Some(self.nodes.alloc(Node::new(key)));
            self.len += 1;
            return;
        };

        let mut path: Path = SmallVec::new();
        let mut current = root;
        let landing = loop {
            path.push(current);
            match self.nodes.get(current).route(&key) {
                Route::Here => break Landing::Existing,
                Route::Left(Some(child)) | Route::Right(Some(child)) => current = child,
                Route::Left(None) => break Landing::Left,
                Route::Right(None) => break Landing::Right,
            }
        };

        match landing {
            Landing::Existing => self.nodes.get_mut(current).increment(),
            Landing::Left => {
                let leaf = self.nodes.alloc(Node::new(key));
                self.nodes.get_mut(current).set_left(leaf);
            }
            Landing::Right => {
                let leaf = self.nodes.alloc(Node::new(key));
                self.nodes.get_mut(current).set_right(leaf);
            }
        }

        for &handle in &path {
            self.nodes.get_mut(handle).add_weight();
        }
        self.len += 1;
    }

    /// Searches for `key` and returns its node handle if found.
    pub(crate) fn search<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root?;

        loop {
            match self.nodes.get(current).route(key) {
                Route::Here => return Some(current),
                Route::Left(child) | Route::Right(child) => current = child?,
            }
        }
    }

    /// Returns how many times `key` has been tracked.
    pub(crate) fn count_of<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.search(key).map_or(0, |h| self.nodes.get(h).count())
    }

    /// Returns the number of tracked values `<= key`, less one, or `None`
    /// if `key` was never tracked.
    ///
    /// Equivalent to an in-order walk summing counts up to and including the
    /// node for `key`, then stopping. Subtree weights let the walk skip whole
    /// left subtrees and never enter anything right of the match, so the cost
    /// is bounded by the tree height.
    pub(crate) fn rank_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root?;
        // Tracked values strictly before `current`'s subtree in key order.
        let mut preceding = 0;

        loop {
            let node = self.nodes.get(current);
            match node.route(key) {
                Route::Here => {
                    // `count() >= 1`, so this never underflows.
                    return Some(preceding + self.weight_of(node.left()) + node.count() - 1);
                }
                Route::Left(child) => current = child?,
                Route::Right(child) => {
                    preceding += self.weight_of(node.left()) + node.count();
                    current = child?;
                }
            }
        }
    }
}
