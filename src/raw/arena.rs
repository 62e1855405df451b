use alloc::vec::Vec;
use core::num::NonZero;

// Narrow slots under test so the capacity limit is reachable.
#[cfg(test)]
type Slot = u16;
#[cfg(not(test))]
type Slot = u32;

/// Position of a node in an [`Arena`].
///
/// Stored one past the slot index so `Option<Handle>` child links need no
/// extra tag.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub(crate) struct Handle(NonZero<Slot>);

impl Handle {
    /// Largest slot index a handle can name.
    pub(crate) const MAX: usize = (Slot::MAX - 1) as usize;

    #[allow(clippy::cast_possible_truncation)]
    const fn new(index: usize) -> Self {
        assert!(index <= Self::MAX, "`Handle::new()` - slot index out of range!");
        let Some(biased) = NonZero::new((index + 1) as Slot) else {
            unreachable!()
        };
        Self(biased)
    }

    #[inline]
    const fn index(self) -> usize {
        self.0.get() as usize - 1
    }
}

/// Append-only node storage addressed by [`Handle`].
///
/// Nodes are never removed one at a time, so there is no free list; the
/// whole arena is dropped or cleared at once. Holds at most [`Handle::MAX`]
/// elements.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<T>,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub(crate) const fn len(&self) -> usize {
        self.slots.len()
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns `true` if another [`alloc`](Arena::alloc) would panic.
    pub(crate) const fn is_full(&self) -> bool {
        self.slots.len() >= Handle::MAX
    }

    /// Stores `element` and returns its handle.
    ///
    /// # Panics
    ///
    /// Panics if the arena already holds [`Handle::MAX`] elements.
    pub(crate) fn alloc(&mut self, element: T) -> Handle {
        assert!(
            !self.is_full(),
            "`Arena::alloc()` - arena is at maximum capacity ({})",
            Handle::MAX
        );
        self.slots.push(element);
        Handle::new(self.slots.len() - 1)
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        &self.slots[handle.index()]
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        &mut self.slots[handle.index()]
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
    }
}
