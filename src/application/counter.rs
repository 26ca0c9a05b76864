use crate::domain::entry::{Entry, SerialNumber};
use crate::domain::ports::QueueStoreBox;
use crate::domain::queue::{Admission, Snapshot, SnapshotOrder};
use crate::domain::tier::Tier;
use crate::error::{QueueError, Result};
use log::{debug, info};

/// The service counter a session talks to.
///
/// `ServiceCounter` owns the queue store and the serial number counter. It is
/// passed by reference through the console session, so switching roles keeps
/// both the waiting customers and the numbering.
pub struct ServiceCounter {
    store: QueueStoreBox,
    /// `None` once every serial number has been handed out.
    next_serial: Option<SerialNumber>,
}

impl ServiceCounter {
    /// Creates a counter whose first admission receives serial number 1.
    ///
    /// # Arguments
    ///
    /// * `store` - Where waiting customers are kept.
    pub fn new(store: QueueStoreBox) -> Self {
        Self {
            store,
            next_serial: Some(SerialNumber::FIRST),
        }
    }

    /// Queues a customer under `tier`.
    ///
    /// The serial number is assigned before the counter advances. Fails with
    /// [`QueueError::SerialsExhausted`] rather than reuse a serial number.
    pub async fn admit(&mut self, tier: Tier) -> Result<Admission> {
        let serial = self.next_serial.ok_or(QueueError::SerialsExhausted)?;
        let entry = Entry::new(serial, tier.priority());
        let admission = self.store.insert(entry).await?;
        self.next_serial = serial.next();

        info!(
            "admitted serial {} as {:?} (priority {}), {} waiting",
            entry.serial_number, tier, entry.priority, admission.waiting
        );
        Ok(admission)
    }

    /// Serves the most urgent customer, `None` when nobody is waiting.
    pub async fn serve(&self) -> Result<Option<Entry>> {
        let served = self.store.serve().await?;
        match served {
            Some(entry) => info!(
                "served serial {} (priority {})",
                entry.serial_number, entry.priority
            ),
            None => info!("serve requested on an empty queue"),
        }
        Ok(served)
    }

    pub async fn snapshot(&self, order: SnapshotOrder) -> Result<Snapshot> {
        let snapshot = self.store.snapshot(order).await?;
        debug!(
            "snapshot in {:?} order with {} entries",
            order,
            snapshot.entries().len()
        );
        Ok(snapshot)
    }

    pub async fn waiting(&self) -> Result<usize> {
        self.store.len().await
    }

    pub fn next_serial(&self) -> Option<SerialNumber> {
        self.next_serial
    }

    #[cfg(test)]
    pub(crate) fn starting_at(store: QueueStoreBox, next_serial: SerialNumber) -> Self {
        Self {
            store,
            next_serial: Some(next_serial),
        }
    }
}
