#![cfg(feature = "loom")]

use loom::thread;
use ringq::Spsc;

// Model-checks the publish pair: the slot write must be visible whenever the
// cursor store is.
#[test]
fn publish_then_observe() {
    loom::model(|| {
        let (mut prod, mut cons) = Spsc::new(3).split();

        let producer = thread::spawn(move || {
            prod.try_push(10).unwrap();
            prod.try_push(20).unwrap();
        });

        let consumer = thread::spawn(move || {
            let mut first = None;
            loop {
                if first.is_none() {
                    first = cons.try_pop();
                }
                if first.is_some() {
                    if let Some(second) = cons.try_pop() {
                        assert_eq!(first, Some(10));
                        assert_eq!(second, 20);
                        break;
                    }
                }
                thread::yield_now();
            }
        });

        producer.join().unwrap();
        consumer.join().unwrap();
    });
}

// Drives both cached cursors through their refresh path on a one-slot queue:
// every push sees a full cache and every pop sees an empty one.
#[test]
fn cached_cursor_refresh_on_one_slot() {
    loom::model(|| {
        let (mut prod, mut cons) = Spsc::new(2).split();
        assert_eq!(prod.capacity(), 1);

        let producer = thread::spawn(move || {
            for i in 0..2u32 {
                let mut item = i;
                loop {
                    match prod.try_push(item) {
                        Ok(()) => break,
                        Err(back) => {
                            item = back;
                            thread::yield_now();
                        }
                    }
                }
            }
        });

        let consumer = thread::spawn(move || {
            let mut expected = 0;
            while expected < 2 {
                match cons.try_pop() {
                    Some(item) => {
                        assert_eq!(item, expected);
                        expected += 1;
                    }
                    None => thread::yield_now(),
                }
            }
        });

        producer.join().unwrap();
        consumer.join().unwrap();
    });
}

// Same shape against the uncached reference operations.
#[test]
fn reference_implementation_orders() {
    loom::model(|| {
        let q = loom::sync::Arc::new(Spsc::new(2));
        let (prod, cons) = (q.clone(), q);

        let producer = thread::spawn(move || {
            let mut item = 1u32;
            loop {
                match unsafe { prod.produce(item) } {
                    Ok(()) => break,
                    Err(back) => {
                        item = back;
                        thread::yield_now();
                    }
                }
            }
        });

        let consumer = thread::spawn(move || loop {
            match unsafe { cons.consume() } {
                Some(item) => {
                    assert_eq!(item, 1);
                    break;
                }
                None => thread::yield_now(),
            }
        });

        producer.join().unwrap();
        consumer.join().unwrap();
    });
}
