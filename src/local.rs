//! Ring buffer for single-threaded use.

use crate::capacity::{self, CapacityError};
use crate::index;
use crate::storage::Slots;
use alloc::vec::Vec;
use core::fmt;

/// Fixed-capacity FIFO queue with no internal synchronization.
///
/// The allocation is always a power of two and one slot is kept unused to
/// tell a full buffer from an empty one, so [`capacity`](Self::capacity) is
/// the allocation minus one. Cursors point at the last slot read/written and
/// wrap through a bitmask; they are reset only by [`clear`](Self::clear).
///
/// All mutation goes through `&mut self`, so serialization is the caller's
/// problem by construction. Operations never block: a full buffer hands the
/// item back and an empty one returns `None`.
pub struct RingBuffer<T> {
    read: usize,
    write: usize,
    mask: usize,
    slots: Slots<T>,
}

impl<T> RingBuffer<T> {
    /// Creates a buffer holding at least `hint` items.
    ///
    /// The allocation is `hint` rounded up to a power of two, never less
    /// than 2.
    ///
    /// *Panics if the rounded allocation would overflow `usize`.*
    pub fn new(hint: usize) -> Self {
        match Self::try_new(hint) {
            Ok(rb) => rb,
            Err(err) => panic!("{}", err),
        }
    }

    /// Fallible version of [`new`](Self::new).
    pub fn try_new(hint: usize) -> Result<Self, CapacityError> {
        let len = capacity::round_up(hint)?;
        Ok(Self {
            read: 0,
            write: 0,
            mask: len.get() - 1,
            slots: Slots::new(len),
        })
    }

    /// Creates a buffer sized from `items` with all of them immediately
    /// dequeuable in input order.
    ///
    /// The allocation is `items.len()` rounded up to a power of two; fails
    /// with [`CapacityError::Excess`] when the items do not fit beside the
    /// reserved slot. Note that this makes any power-of-two length fail:
    /// pass the items into a buffer constructed with a larger hint instead.
    pub fn try_from_vec(items: Vec<T>) -> Result<Self, CapacityError> {
        let mut rb = Self::try_new(items.len())?;
        if items.len() > rb.capacity() {
            return Err(CapacityError::Excess {
                len: items.len(),
                capacity: rb.capacity(),
            });
        }
        // Slot 0 stays unused: the first push lands at advance(0) == 1.
        for (i, item) in items.into_iter().enumerate() {
            rb.write = i + 1;
            unsafe { rb.slots.put(rb.write, item) };
        }
        Ok(rb)
    }

    /// Appends `item`, handing it back when the buffer is full.
    ///
    /// A rejected push leaves the buffer unchanged.
    pub fn try_push(&mut self, item: T) -> Result<(), T> {
        let next = index::advance(self.write, self.mask);
        if next == self.read {
            return Err(item);
        }
        unsafe { self.slots.put(next, item) };
        self.write = next;
        Ok(())
    }

    /// Removes the oldest item, or `None` when the buffer is empty.
    pub fn try_pop(&mut self) -> Option<T> {
        if index::is_empty(self.read, self.write) {
            return None;
        }
        let next = index::advance(self.read, self.mask);
        let item = unsafe { self.slots.take(next) };
        self.read = next;
        Some(item)
    }

    /// Number of items currently stored.
    #[inline]
    pub fn len(&self) -> usize {
        index::occupied(self.read, self.write, self.mask)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        index::is_empty(self.read, self.write)
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        index::is_full(self.read, self.write, self.mask)
    }

    /// Usable capacity: the allocation minus the one reserved slot.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.mask
    }

    /// Drops all stored items and resets both cursors to zero.
    pub fn clear(&mut self) {
        let (read, write) = (self.read, self.write);
        // Cursors go first so a panicking item `Drop` cannot leave the range
        // claiming already-dropped slots.
        self.read = 0;
        self.write = 0;
        unsafe { self.slots.drop_occupied(read, write) };
    }

    pub(crate) fn describe_as(&self, f: &mut fmt::Formatter<'_>, name: &str) -> fmt::Result {
        index::describe(f, name, self.read, self.write, self.mask)
    }
}

impl<T> Drop for RingBuffer<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.describe_as(f, "RingBuffer")
    }
}
