use super::entry::Entry;
use super::queue::{Admission, Snapshot, SnapshotOrder};
use crate::error::Result;
use async_trait::async_trait;

/// Owner of the waiting queue, shareable between tasks.
#[async_trait]
pub trait QueueStore: Send + Sync {
    async fn insert(&self, entry: Entry) -> Result<Admission>;
    async fn serve(&self) -> Result<Option<Entry>>;
    async fn snapshot(&self, order: SnapshotOrder) -> Result<Snapshot>;
    async fn len(&self) -> Result<usize>;
}

pub type QueueStoreBox = Box<dyn QueueStore>;
