//! Capacity rounding.

use core::fmt;
use core::num::NonZeroUsize;

/// Error returned when a ring buffer cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityError {
    /// Rounding the requested capacity up to a power of two would overflow
    /// `usize`.
    Overflow {
        /// The capacity hint as given by the caller.
        hint: usize,
    },
    /// Initial contents do not fit within the usable capacity.
    Excess {
        /// Number of initial items.
        len: usize,
        /// Usable capacity of the buffer they were meant to fill.
        capacity: usize,
    },
}

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Overflow { hint } => {
                write!(f, "capacity hint {hint} has no power-of-two allocation within usize")
            }
            Self::Excess { len, capacity } => {
                write!(f, "{len} initial items exceed usable capacity {capacity}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CapacityError {}

/// Rounds a capacity hint up to the allocated slot count.
///
/// Returns the smallest power of two `>= hint`, never less than 2: one slot
/// of every allocation is reserved to tell a full buffer from an empty one,
/// so an allocation of 1 would hold nothing. Hints 0 and 1 both round to 2.
pub(crate) fn round_up(hint: usize) -> Result<NonZeroUsize, CapacityError> {
    hint.max(2)
        .checked_next_power_of_two()
        .and_then(NonZeroUsize::new)
        .ok_or(CapacityError::Overflow { hint })
}
