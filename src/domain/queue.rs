use super::entry::{Entry, Priority, SerialNumber};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Emitted by [`PriorityQueue::insert`] instead of printing a confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Admission {
    pub entry: Entry,
    /// Entries waiting once this one has been queued.
    pub waiting: usize,
}

/// Order in which a snapshot lists the waiting entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SnapshotOrder {
    /// Raw heap layout. Only the first entry is guaranteed to be the next served.
    #[default]
    Heap,
    /// Fully ordered by priority, then serial number.
    Sorted,
}

/// Read-only view of the queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Snapshot {
    Empty,
    /// Never holds an empty vector; the first entry is the next to be served.
    Waiting(Vec<Entry>),
}

impl Snapshot {
    pub fn entries(&self) -> &[Entry] {
        match self {
            Snapshot::Empty => &[],
            Snapshot::Waiting(entries) => entries,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Snapshot::Empty)
    }
}

/// Binary-heap backed queue keyed on `(priority, serial_number)`.
///
/// Insert and removal are O(log n), a snapshot is O(n) (O(n log n) sorted).
#[derive(Debug, Default, Clone)]
pub struct PriorityQueue {
    heap: BinaryHeap<Reverse<Entry>>,
}

impl PriorityQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a customer. No range checks are made on either value.
    pub fn insert(&mut self, serial_number: SerialNumber, priority: Priority) -> Admission {
        let entry = Entry::new(serial_number, priority);
        self.heap.push(Reverse(entry));
        Admission {
            entry,
            waiting: self.heap.len(),
        }
    }

    /// Removes the most urgent entry, earliest arrival first among equals.
    pub fn remove_highest_priority(&mut self) -> Option<Entry> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }

    pub fn peek(&self) -> Option<Entry> {
        self.heap.peek().map(|Reverse(entry)| *entry)
    }

    pub fn snapshot(&self, order: SnapshotOrder) -> Snapshot {
        if self.heap.is_empty() {
            return Snapshot::Empty;
        }

        let mut entries: Vec<Entry> = self.heap.iter().map(|Reverse(entry)| *entry).collect();
        match order {
            SnapshotOrder::Heap => {
                // Iteration order of BinaryHeap is unspecified; keep the root in front.
                if let Some(root) = entries
                    .iter()
                    .enumerate()
                    .min_by_key(|(_, entry)| **entry)
                    .map(|(index, _)| index)
                {
                    entries.swap(0, root);
                }
            }
            SnapshotOrder::Sorted => entries.sort_unstable(),
        }
        Snapshot::Waiting(entries)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
