//! Bounded FIFO queues over a power-of-two ring of slots.
//!
//! Three variants share the same cursor arithmetic and differ only in how
//! access is serialized:
//!
//! - [`RingBuffer`] — single-threaded; the caller serializes access through
//!   `&mut self`.
//! - [`SyncRingBuffer`] — the same buffer behind a mutex, usable from any
//!   number of threads at the cost of full serialization.
//! - [`Spsc`] — lock-free, split into a [`Producer`] and a [`Consumer`] half
//!   for exactly one producer thread and one consumer thread.
//!
//! Every variant rounds its capacity hint up to a power of two and keeps one
//! slot unused to tell a full buffer from an empty one, so a buffer allocated
//! with `cap` slots stores at most `cap - 1` items. A full buffer hands the
//! pushed item back (`Err(item)`) and an empty buffer returns `None`; nothing
//! ever blocks waiting for space or data.
//!
//! ```
//! use ringq::RingBuffer;
//!
//! let mut rb = RingBuffer::new(3);
//! assert_eq!(rb.capacity(), 3);
//!
//! assert!(rb.try_push(10).is_ok());
//! assert!(rb.try_push(20).is_ok());
//! assert!(rb.try_push(30).is_ok());
//! assert_eq!(rb.try_push(40), Err(40));
//!
//! assert_eq!(rb.try_pop(), Some(10));
//! assert_eq!(rb.try_pop(), Some(20));
//! assert_eq!(rb.try_pop(), Some(30));
//! assert_eq!(rb.try_pop(), None);
//! ```
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod capacity;
pub mod index;
#[cfg(feature = "alloc")]
pub mod local;
#[cfg(feature = "alloc")]
mod shim;
#[cfg(feature = "alloc")]
pub mod spsc;
#[cfg(feature = "alloc")]
mod storage;
#[cfg(feature = "std")]
pub mod sync;

pub use capacity::CapacityError;
#[cfg(feature = "alloc")]
pub use local::RingBuffer;
#[cfg(feature = "alloc")]
pub use spsc::{Consumer, Producer, Spsc};
#[cfg(feature = "std")]
pub use sync::SyncRingBuffer;

#[cfg(all(test, feature = "std", not(feature = "loom")))]
mod tests;
