//! Mutex-guarded decorator over [`RingBuffer`].

use crate::capacity::CapacityError;
use crate::local::RingBuffer;
use alloc::vec::Vec;
use core::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Ring buffer sharable between any number of threads.
///
/// Every operation holds an internal mutex for its full duration and
/// delegates to the [`RingBuffer`] logic, so access is linearizable but
/// fully serialized. Threads may block on the guard, never on buffer state:
/// a full buffer still hands the item back immediately, and callers wanting
/// to wait for space or data must layer their own signalling on top.
///
/// ```
/// use ringq::SyncRingBuffer;
/// use std::{sync::Arc, thread};
///
/// let rb = Arc::new(SyncRingBuffer::new(256));
/// let handle = thread::spawn({
///     let rb = rb.clone();
///     move || rb.try_push(123).unwrap()
/// });
/// handle.join().unwrap();
/// while rb.try_pop().is_none() {}
/// ```
pub struct SyncRingBuffer<T> {
    inner: Mutex<RingBuffer<T>>,
}

impl<T> SyncRingBuffer<T> {
    /// Creates a buffer holding at least `hint` items.
    ///
    /// *Panics if the rounded allocation would overflow `usize`.*
    pub fn new(hint: usize) -> Self {
        Self::from(RingBuffer::new(hint))
    }

    /// Fallible version of [`new`](Self::new).
    pub fn try_new(hint: usize) -> Result<Self, CapacityError> {
        RingBuffer::try_new(hint).map(Self::from)
    }

    /// Creates a buffer pre-filled from `items`; see
    /// [`RingBuffer::try_from_vec`].
    pub fn try_from_vec(items: Vec<T>) -> Result<Self, CapacityError> {
        RingBuffer::try_from_vec(items).map(Self::from)
    }

    // A panic while holding the guard cannot leave torn state: the buffer
    // mutates cursors only after the slot operation succeeded.
    fn lock(&self) -> MutexGuard<'_, RingBuffer<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Appends `item`, handing it back when the buffer is full.
    pub fn try_push(&self, item: T) -> Result<(), T> {
        self.lock().try_push(item)
    }

    /// Removes the oldest item, or `None` when the buffer is empty.
    pub fn try_pop(&self) -> Option<T> {
        self.lock().try_pop()
    }

    /// Number of items currently stored.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.lock().is_full()
    }

    /// Usable capacity: the allocation minus the one reserved slot.
    pub fn capacity(&self) -> usize {
        self.lock().capacity()
    }

    /// Drops all stored items and resets both cursors to zero.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Returns the wrapped single-threaded buffer.
    pub fn into_inner(self) -> RingBuffer<T> {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> From<RingBuffer<T>> for SyncRingBuffer<T> {
    fn from(inner: RingBuffer<T>) -> Self {
        Self { inner: Mutex::new(inner) }
    }
}

impl<T> fmt::Debug for SyncRingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.lock().describe_as(f, "SyncRingBuffer")
    }
}
