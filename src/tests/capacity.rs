use crate::{CapacityError, RingBuffer};
use alloc::string::ToString;

#[test]
fn rounding() {
    // (hint, usable capacity = allocation - 1)
    let cases = [
        (0, 1),
        (1, 1),
        (2, 1),
        (3, 3),
        (4, 3),
        (5, 7),
        (7, 7),
        (8, 7),
        (9, 15),
        (100, 127),
        (1000, 1023),
    ];
    for (hint, capacity) in cases {
        let rb = RingBuffer::<u8>::new(hint);
        assert_eq!(rb.capacity(), capacity, "hint={hint}");
    }
}

#[test]
fn allocation_is_power_of_two() {
    for hint in 0..200 {
        let rb = RingBuffer::<u8>::new(hint);
        assert!((rb.capacity() + 1).is_power_of_two(), "hint={hint}");
        assert!(rb.capacity() + 1 >= hint.max(2), "hint={hint}");
    }
}

#[test]
fn overflow_is_detected() {
    let err = RingBuffer::<u8>::try_new(usize::MAX).unwrap_err();
    assert_eq!(err, CapacityError::Overflow { hint: usize::MAX });

    // Largest hint that still rounds within usize.
    let max = 1usize << (usize::BITS - 1);
    assert!(RingBuffer::<u8>::try_new(max + 1).is_err());
}

#[test]
fn error_display() {
    let err = CapacityError::Excess { len: 4, capacity: 3 };
    assert_eq!(err.to_string(), "4 initial items exceed usable capacity 3");
}

#[test]
#[should_panic]
fn new_panics_on_overflow() {
    let _ = RingBuffer::<u8>::new(usize::MAX);
}
