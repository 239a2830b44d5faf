use crate::SyncRingBuffer;
use alloc::format;
use alloc::vec;
use std::sync::Arc;
use std::thread;

#[test]
fn delegates_to_base_buffer() {
    let rb = SyncRingBuffer::new(3);
    assert_eq!(rb.capacity(), 3);
    assert!(rb.is_empty());

    assert_eq!(rb.try_push(10), Ok(()));
    assert_eq!(rb.try_push(20), Ok(()));
    assert_eq!(rb.try_push(30), Ok(()));
    assert!(rb.is_full());
    assert_eq!(rb.try_push(40), Err(40));

    assert_eq!(rb.try_pop(), Some(10));
    assert_eq!(rb.len(), 2);
    rb.clear();
    assert!(rb.is_empty());
    assert_eq!(rb.try_pop(), None);
}

#[test]
fn from_vec_and_into_inner() {
    let rb = SyncRingBuffer::try_from_vec(vec![1, 2, 3]).unwrap();
    assert_eq!(rb.len(), 3);
    let mut inner = rb.into_inner();
    assert_eq!(inner.try_pop(), Some(1));
}

#[test]
fn debug_format() {
    let rb = SyncRingBuffer::<u8>::new(4);
    assert_eq!(format!("{rb:?}"), "<SyncRingBuffer [EMPTY] cap=4 len=0 wr=0 rd=0>");
}

#[test]
fn many_producers_many_consumers() {
    const PRODUCERS: usize = 4;
    const CONSUMERS: usize = 4;
    const PER_PRODUCER: usize = 1000;

    let rb = Arc::new(SyncRingBuffer::new(16));
    let mut handles = vec![];

    for p in 0..PRODUCERS {
        let rb = rb.clone();
        handles.push(thread::spawn(move || {
            for i in 0..PER_PRODUCER {
                let mut item = p * PER_PRODUCER + i;
                loop {
                    match rb.try_push(item) {
                        Ok(()) => break,
                        Err(back) => {
                            item = back;
                            thread::yield_now();
                        }
                    }
                }
            }
        }));
    }

    let mut takers = vec![];
    for _ in 0..CONSUMERS {
        let rb = rb.clone();
        takers.push(thread::spawn(move || {
            let mut sum = 0usize;
            let mut count = 0usize;
            while count < PRODUCERS * PER_PRODUCER / CONSUMERS {
                match rb.try_pop() {
                    Some(item) => {
                        sum += item;
                        count += 1;
                    }
                    None => thread::yield_now(),
                }
            }
            sum
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }
    let total: usize = takers.into_iter().map(|h| h.join().unwrap()).sum();

    let n = PRODUCERS * PER_PRODUCER;
    assert_eq!(total, n * (n - 1) / 2);
    assert!(rb.is_empty());
}

#[test]
fn full_buffer_never_blocks() {
    let rb = SyncRingBuffer::new(2);
    assert_eq!(rb.capacity(), 1);
    rb.try_push(1).unwrap();
    // Must return immediately even though nobody will ever pop.
    assert_eq!(rb.try_push(2), Err(2));
}
