use crate::domain::entry::Entry;
use crate::domain::ports::QueueStore;
use crate::domain::queue::{Admission, PriorityQueue, Snapshot, SnapshotOrder};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory home for the waiting queue.
///
/// Uses `Arc<RwLock<PriorityQueue>>` so clones share one queue. Serving and
/// inserting take the write lock, snapshots only read.
#[derive(Default, Clone)]
pub struct InMemoryQueueStore {
    queue: Arc<RwLock<PriorityQueue>>,
}

impl InMemoryQueueStore {
    /// Creates a new, empty in-memory queue store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QueueStore for InMemoryQueueStore {
    async fn insert(&self, entry: Entry) -> Result<Admission> {
        let mut queue = self.queue.write().await;
        Ok(queue.insert(entry.serial_number, entry.priority))
    }

    async fn serve(&self) -> Result<Option<Entry>> {
        let mut queue = self.queue.write().await;
        Ok(queue.remove_highest_priority())
    }

    async fn snapshot(&self, order: SnapshotOrder) -> Result<Snapshot> {
        let queue = self.queue.read().await;
        Ok(queue.snapshot(order))
    }

    async fn len(&self) -> Result<usize> {
        let queue = self.queue.read().await;
        Ok(queue.len())
    }
}
