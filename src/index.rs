//! Cursor arithmetic shared by every variant.
//!
//! All state of a ring buffer derives from `(read, write, mask)`: cursors
//! point at the last slot read/written and advance through the mask, valid
//! only because the allocation is a power of two. Empty is `read == write`,
//! full is `read == advance(write)`, which is why one slot of the allocation
//! always stays unused.

use core::fmt;

/// Next cursor position: `(cursor + 1) & mask`.
#[inline]
pub const fn advance(cursor: usize, mask: usize) -> usize {
    cursor.wrapping_add(1) & mask
}

/// Number of items stored between the cursors.
#[inline]
pub const fn occupied(read: usize, write: usize, mask: usize) -> usize {
    if read == write {
        0
    } else if read < write {
        write - read
    } else {
        // write has wrapped around behind read
        (mask + 1) - read + write
    }
}

#[inline]
pub const fn is_empty(read: usize, write: usize) -> bool {
    read == write
}

#[inline]
pub const fn is_full(read: usize, write: usize, mask: usize) -> bool {
    read == advance(write, mask)
}

/// Writes the diagnostic form shared by every `Debug` impl:
/// `<Name [FULL|EMPTY] cap=.. len=.. wr=.. rd=..>`.
pub(crate) fn describe(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    read: usize,
    write: usize,
    mask: usize,
) -> fmt::Result {
    let marker = if is_full(read, write, mask) {
        "[FULL] "
    } else if is_empty(read, write) {
        "[EMPTY] "
    } else {
        ""
    };
    write!(
        f,
        "<{} {}cap={} len={} wr={} rd={}>",
        name,
        marker,
        mask + 1,
        occupied(read, write, mask),
        write,
        read,
    )
}
