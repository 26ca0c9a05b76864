use bank_queue::domain::entry::{Entry, Priority, SerialNumber};
use bank_queue::domain::queue::{PriorityQueue, Snapshot, SnapshotOrder};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_queue(rng: &mut StdRng, size: u32) -> PriorityQueue {
    let mut queue = PriorityQueue::new();
    for serial in 1..=size {
        queue.insert(SerialNumber(serial), Priority(rng.gen_range(1..=5)));
    }
    queue
}

#[test]
fn test_drain_order_is_priority_then_arrival() {
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let size = rng.gen_range(0..200);
        let mut queue = random_queue(&mut rng, size);

        let served: Vec<Entry> = std::iter::from_fn(|| queue.remove_highest_priority()).collect();
        assert_eq!(served.len(), size as usize, "seed {seed}");
        for pair in served.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!(
                a.priority < b.priority
                    || (a.priority == b.priority && a.serial_number < b.serial_number),
                "seed {seed}: {a:?} served before {b:?}"
            );
        }
        assert!(queue.remove_highest_priority().is_none());
        assert_eq!(queue.snapshot(SnapshotOrder::Heap), Snapshot::Empty);
    }
}

#[test]
fn test_snapshots_hold_every_entry_once() {
    let mut rng = StdRng::seed_from_u64(7);
    let queue = random_queue(&mut rng, 64);

    let mut heap: Vec<Entry> = queue.snapshot(SnapshotOrder::Heap).entries().to_vec();
    let sorted: Vec<Entry> = queue.snapshot(SnapshotOrder::Sorted).entries().to_vec();

    assert_eq!(heap[0], sorted[0]);
    assert_eq!(Some(heap[0]), queue.peek());

    heap.sort();
    assert_eq!(heap, sorted);
    let serials: Vec<u32> = {
        let mut s: Vec<u32> = sorted.iter().map(|e| e.serial_number.0).collect();
        s.sort_unstable();
        s
    };
    assert_eq!(serials, (1..=64).collect::<Vec<_>>());
}

#[test]
fn test_snapshot_first_entry_tracks_interleaved_serving() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut queue = PriorityQueue::new();
    let mut next_serial = 1;

    for _ in 0..500 {
        if rng.gen_bool(0.6) {
            queue.insert(SerialNumber(next_serial), Priority(rng.gen_range(1..=5)));
            next_serial += 1;
        } else {
            let expected = queue.snapshot(SnapshotOrder::Heap).entries().first().copied();
            assert_eq!(queue.remove_highest_priority(), expected);
        }
    }
}
