//! Lock-free ring buffer for exactly one producer thread and one consumer
//! thread.
//!
//! [`Spsc`] is the shared core: two cache-padded atomic cursors over the
//! same slot array and arithmetic as the other variants. Its operations
//! reload the peer cursor on every call and serve as the plain reference
//! implementation. [`split`](Spsc::split) wraps it into a [`Producer`] and a
//! [`Consumer`] half, the primary implementation, where each side keeps a
//! non-atomic cached copy of the peer's cursor and refreshes it only when
//! the buffer looks full (resp. empty). The cache only ever lags behind the
//! peer, so a stale value can cause a spurious full/empty answer that the
//! refresh resolves, never an overwrite or a double read.
//!
//! Ownership of a slot moves from producer to consumer at the instant the
//! release store of the write cursor becomes visible to the consumer's
//! acquire load; until then the slot belongs to the producer alone even
//! though it sits inside the shared allocation. The mirrored pair hands
//! slots back from consumer to producer.
//!
//! No operation blocks and there is no backoff policy: full and empty are
//! returned immediately and any retry/spin/yield strategy is the caller's.

use crate::capacity::{self, CapacityError};
use crate::index;
use crate::shim::atomic::{AtomicUsize, Ordering};
use crate::shim::sync::Arc;
use crate::storage::Slots;
use alloc::vec::Vec;
use core::fmt;
use crossbeam_utils::CachePadded;

/// Shared core of the SPSC queue.
///
/// Usable on its own as a single-threaded queue through the `&mut self`
/// operations, or split into halves for two-thread use. The cursors live on
/// separate cache lines so that producer-side and consumer-side updates do
/// not invalidate each other's line.
#[cfg_attr(
    feature = "std",
    doc = r##"
```
use std::thread;
use ringq::Spsc;

let (mut prod, mut cons) = Spsc::new(256).split();
thread::spawn(move || {
    prod.try_push(123).unwrap();
})
.join()
.unwrap();
thread::spawn(move || loop {
    if let Some(item) = cons.try_pop() {
        assert_eq!(item, 123);
        break;
    }
})
.join()
.unwrap();
```
"##
)]
pub struct Spsc<T> {
    read: CachePadded<AtomicUsize>,
    write: CachePadded<AtomicUsize>,
    mask: usize,
    slots: Slots<T>,
}

impl<T> Spsc<T> {
    /// Creates a queue holding at least `hint` items.
    ///
    /// The allocation is `hint` rounded up to a power of two, never less
    /// than 2.
    ///
    /// *Panics if the rounded allocation would overflow `usize`.*
    pub fn new(hint: usize) -> Self {
        match Self::try_new(hint) {
            Ok(q) => q,
            Err(err) => panic!("{}", err),
        }
    }

    /// Fallible version of [`new`](Self::new).
    pub fn try_new(hint: usize) -> Result<Self, CapacityError> {
        let len = capacity::round_up(hint)?;
        Ok(Self {
            read: CachePadded::new(AtomicUsize::new(0)),
            write: CachePadded::new(AtomicUsize::new(0)),
            mask: len.get() - 1,
            slots: Slots::new(len),
        })
    }

    /// Creates a queue sized from `items` with all of them immediately
    /// dequeuable in input order.
    ///
    /// Fails with [`CapacityError::Excess`] when the items do not fit beside
    /// the reserved slot; see [`RingBuffer::try_from_vec`] for the
    /// power-of-two caveat.
    ///
    /// [`RingBuffer::try_from_vec`]: crate::RingBuffer::try_from_vec
    pub fn try_from_vec(items: Vec<T>) -> Result<Self, CapacityError> {
        let q = Self::try_new(items.len())?;
        if items.len() > q.capacity() {
            return Err(CapacityError::Excess {
                len: items.len(),
                capacity: q.capacity(),
            });
        }
        let mut write = 0;
        for item in items {
            write += 1;
            unsafe { q.slots.put(write, item) };
        }
        q.write.store(write, Ordering::Relaxed);
        Ok(q)
    }

    /// Enqueues `item`, reloading the consumer's cursor on every call.
    ///
    /// Prefer [`Producer::try_push`], which skips the reload while its
    /// cached cursor proves there is room.
    ///
    /// # Safety
    ///
    /// At most one thread may act as the producer (call `produce`) at any
    /// time, and [`consume`](Self::consume) may run on at most one other
    /// thread. Violations are not detected and corrupt the queue.
    pub unsafe fn produce(&self, item: T) -> Result<(), T> {
        let next = index::advance(self.write.load(Ordering::Relaxed), self.mask);
        if next == self.read.load(Ordering::Acquire) {
            return Err(item);
        }
        self.slots.put(next, item);
        // The release store is the publish point: the slot write above must
        // be visible before the consumer can observe the new cursor.
        self.write.store(next, Ordering::Release);
        Ok(())
    }

    /// Dequeues the oldest item, reloading the producer's cursor on every
    /// call.
    ///
    /// Prefer [`Consumer::try_pop`], which skips the reload while its cached
    /// cursor proves there is data.
    ///
    /// # Safety
    ///
    /// At most one thread may act as the consumer (call `consume`) at any
    /// time, and [`produce`](Self::produce) may run on at most one other
    /// thread. Violations are not detected and corrupt the queue.
    pub unsafe fn consume(&self) -> Option<T> {
        let read = self.read.load(Ordering::Relaxed);
        if read == self.write.load(Ordering::Acquire) {
            return None;
        }
        let next = index::advance(read, self.mask);
        let item = self.slots.take(next);
        // Hands the slot back to the producer only after the value left it.
        self.read.store(next, Ordering::Release);
        Some(item)
    }

    /// Single-threaded push; the exclusive borrow rules out a live peer.
    pub fn try_push(&mut self, item: T) -> Result<(), T> {
        unsafe { self.produce(item) }
    }

    /// Single-threaded pop; the exclusive borrow rules out a live peer.
    pub fn try_pop(&mut self) -> Option<T> {
        unsafe { self.consume() }
    }

    /// Number of items stored at the instant both cursors were read.
    ///
    /// *Advisory: the opposing thread may move either cursor before the
    /// caller acts on the answer.*
    pub fn len(&self) -> usize {
        let read = self.read.load(Ordering::Acquire);
        let write = self.write.load(Ordering::Acquire);
        index::occupied(read, write, self.mask)
    }

    /// *Advisory; see [`len`](Self::len).*
    pub fn is_empty(&self) -> bool {
        let read = self.read.load(Ordering::Acquire);
        let write = self.write.load(Ordering::Acquire);
        index::is_empty(read, write)
    }

    /// *Advisory; see [`len`](Self::len).*
    pub fn is_full(&self) -> bool {
        let read = self.read.load(Ordering::Acquire);
        let write = self.write.load(Ordering::Acquire);
        index::is_full(read, write, self.mask)
    }

    /// Usable capacity: the allocation minus the one reserved slot.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.mask
    }

    /// Drops all stored items and resets both cursors to zero.
    ///
    /// Requiring `&mut self` is what makes this sound: a queue that is still
    /// split cannot be reached here, so neither side can be mid-operation
    /// while the cursors jump.
    pub fn clear(&mut self) {
        let read = self.read.load(Ordering::Relaxed);
        let write = self.write.load(Ordering::Relaxed);
        self.read.store(0, Ordering::Relaxed);
        self.write.store(0, Ordering::Relaxed);
        unsafe { self.slots.drop_occupied(read, write) };
    }

    /// Splits the queue into its producer and consumer halves.
    ///
    /// This is the only way to obtain the halves, which is what pins the
    /// queue to exactly one producer and one consumer: neither half is
    /// `Clone` and both mutate through `&mut self`.
    pub fn split(self) -> (Producer<T>, Consumer<T>) {
        let read = self.read.load(Ordering::Relaxed);
        let write = self.write.load(Ordering::Relaxed);
        let shared = Arc::new(self);
        (
            Producer {
                shared: shared.clone(),
                write,
                cached_read: read,
            },
            Consumer {
                shared,
                read,
                cached_write: write,
            },
        )
    }

    fn describe_as(&self, f: &mut fmt::Formatter<'_>, name: &str) -> fmt::Result {
        let read = self.read.load(Ordering::Acquire);
        let write = self.write.load(Ordering::Acquire);
        index::describe(f, name, read, write, self.mask)
    }
}

impl<T> Drop for Spsc<T> {
    fn drop(&mut self) {
        let read = self.read.load(Ordering::Relaxed);
        let write = self.write.load(Ordering::Relaxed);
        unsafe { self.slots.drop_occupied(read, write) };
    }
}

impl<T> fmt::Debug for Spsc<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.describe_as(f, "Spsc")
    }
}

/// Producer half of a split [`Spsc`].
///
/// Owns the write cursor (the shared atomic is only ever written here) and
/// keeps a cached copy of the consumer's read cursor, refreshed only when
/// the buffer looks full.
pub struct Producer<T> {
    shared: Arc<Spsc<T>>,
    write: usize,
    cached_read: usize,
}

impl<T> Producer<T> {
    /// Enqueues `item`, handing it back when the queue is full.
    ///
    /// A rejected push leaves the queue unchanged; any retry policy is the
    /// caller's.
    pub fn try_push(&mut self, item: T) -> Result<(), T> {
        let next = index::advance(self.write, self.shared.mask);
        if next == self.cached_read {
            self.cached_read = self.shared.read.load(Ordering::Acquire);
            if next == self.cached_read {
                return Err(item);
            }
        }
        unsafe { self.shared.slots.put(next, item) };
        self.shared.write.store(next, Ordering::Release);
        self.write = next;
        Ok(())
    }

    /// *Advisory; see [`Spsc::len`].*
    pub fn len(&self) -> usize {
        self.shared.len()
    }

    /// *Advisory; see [`Spsc::len`].*
    pub fn is_empty(&self) -> bool {
        self.shared.is_empty()
    }

    /// *Advisory; see [`Spsc::len`].*
    pub fn is_full(&self) -> bool {
        self.shared.is_full()
    }

    /// Usable capacity: the allocation minus the one reserved slot.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.shared.capacity()
    }
}

impl<T> fmt::Debug for Producer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.shared.describe_as(f, "spsc::Producer")
    }
}

/// Consumer half of a split [`Spsc`].
///
/// Owns the read cursor and keeps a cached copy of the producer's write
/// cursor, refreshed only when the buffer looks empty.
pub struct Consumer<T> {
    shared: Arc<Spsc<T>>,
    read: usize,
    cached_write: usize,
}

impl<T> Consumer<T> {
    /// Dequeues the oldest item, or `None` when the queue is empty.
    pub fn try_pop(&mut self) -> Option<T> {
        if self.read == self.cached_write {
            self.cached_write = self.shared.write.load(Ordering::Acquire);
            if self.read == self.cached_write {
                return None;
            }
        }
        let next = index::advance(self.read, self.shared.mask);
        let item = unsafe { self.shared.slots.take(next) };
        self.shared.read.store(next, Ordering::Release);
        self.read = next;
        Some(item)
    }

    /// Pops and drops items until the queue reads empty.
    ///
    /// Unlike [`Spsc::clear`] this does not reset the cursors, so it is safe
    /// with a live producer; items pushed concurrently may survive.
    pub fn clear(&mut self) {
        while self.try_pop().is_some() {}
    }

    /// *Advisory; see [`Spsc::len`].*
    pub fn len(&self) -> usize {
        self.shared.len()
    }

    /// *Advisory; see [`Spsc::len`].*
    pub fn is_empty(&self) -> bool {
        self.shared.is_empty()
    }

    /// *Advisory; see [`Spsc::len`].*
    pub fn is_full(&self) -> bool {
        self.shared.is_full()
    }

    /// Usable capacity: the allocation minus the one reserved slot.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.shared.capacity()
    }
}

impl<T> fmt::Debug for Consumer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.shared.describe_as(f, "spsc::Consumer")
    }
}
