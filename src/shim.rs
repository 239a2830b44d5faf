//! Switches atomics and `Arc` between their native implementations and the
//! `loom` models, so the SPSC orderings can be checked under
//! `cargo test --features loom`.

#[cfg(not(feature = "loom"))]
pub(crate) mod atomic {
    pub use core::sync::atomic::{AtomicUsize, Ordering};
}
#[cfg(feature = "loom")]
pub(crate) mod atomic {
    pub use loom::sync::atomic::{AtomicUsize, Ordering};
}

#[cfg(all(feature = "alloc", not(feature = "loom")))]
pub(crate) mod sync {
    pub use alloc::sync::Arc;
}
#[cfg(feature = "loom")]
pub(crate) mod sync {
    pub use loom::sync::Arc;
}
