use tokio::sync::{mpsc, oneshot};

use crate::error::{MealError, Result};
use crate::models::MealEntry;

use super::persistence::MealGateway;

enum SaveRequest {
    Save {
        entries: Vec<MealEntry>,
        done: oneshot::Sender<Result<()>>,
    },
    Flush(oneshot::Sender<()>),
}

/// Handle to one queued write.
///
/// Dropping it leaves the write running; awaiting [`PendingSave::wait`]
/// reports how it went.
#[derive(Debug)]
#[must_use = "drop the handle explicitly to ignore the write result"]
pub struct PendingSave {
    rx: oneshot::Receiver<Result<()>>,
}

impl PendingSave {
    /// Wait for the write to finish.
    pub async fn wait(self) -> Result<()> {
        self.rx
            .await
            .map_err(|_| MealError::Storage("save queue stopped before writing".to_string()))?
    }
}

/// Single background writer; snapshots hit storage in the order they were
/// queued.
#[derive(Debug, Clone)]
pub struct SaveQueue {
    tx: mpsc::UnboundedSender<SaveRequest>,
}

impl SaveQueue {
    /// Spawn the writer task on the current tokio runtime.
    pub fn spawn(gateway: MealGateway) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<SaveRequest>();

        tokio::spawn(async move {
            while let Some(request) = rx.recv().await {
                match request {
                    SaveRequest::Save { entries, done } => {
                        let result = gateway.save_all(&entries).await;
                        match &result {
                            Ok(()) => tracing::debug!(
                                "Saved {} meals to slot '{}'",
                                entries.len(),
                                gateway.slot()
                            ),
                            Err(e) => tracing::error!(
                                "Failed to save meals to slot '{}': {}",
                                gateway.slot(),
                                e
                            ),
                        }
                        let _ = done.send(result);
                    }
                    SaveRequest::Flush(done) => {
                        let _ = done.send(());
                    }
                }
            }
            tracing::debug!("Save queue stopped");
        });

        Self { tx }
    }

    /// Queue a full snapshot for writing.
    pub fn enqueue(&self, entries: Vec<MealEntry>) -> PendingSave {
        let (done, rx) = oneshot::channel();
        if self.tx.send(SaveRequest::Save { entries, done }).is_err() {
            tracing::error!("Save queue closed, snapshot dropped");
        }
        PendingSave { rx }
    }

    /// Resolve once every previously queued write has finished.
    pub async fn flush(&self) -> Result<()> {
        let (done, rx) = oneshot::channel();
        self.tx
            .send(SaveRequest::Flush(done))
            .map_err(|_| MealError::Storage("save queue closed".to_string()))?;
        rx.await
            .map_err(|_| MealError::Storage("save queue stopped before flushing".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryId;
    use crate::state::storage::MemoryStorage;
    use crate::tally::DEFAULT_SLOT;
    use std::sync::Arc;

    fn meal(id: &str, name: &str) -> MealEntry {
        MealEntry::new(EntryId::from(id), name, "100", "Snack")
    }

    #[tokio::test]
    async fn test_writes_land_in_order() {
        let storage = Arc::new(MemoryStorage::new());
        let queue = SaveQueue::spawn(MealGateway::new(storage.clone()));

        drop(queue.enqueue(vec![meal("1", "Apple")]));
        drop(queue.enqueue(vec![meal("1", "Apple"), meal("2", "Pear")]));
        let last = queue.enqueue(vec![meal("2", "Pear")]);
        last.wait().await.unwrap();

        assert_eq!(storage.write_count(), 3);
        let stored = storage.peek(DEFAULT_SLOT).unwrap();
        assert!(stored.contains("Pear"));
        assert!(!stored.contains("Apple"));
    }

    #[tokio::test]
    async fn test_failure_is_reported_to_handle() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set_fail_writes(true);
        let queue = SaveQueue::spawn(MealGateway::new(storage.clone()));

        let result = queue.enqueue(vec![meal("1", "Apple")]).wait().await;
        assert!(matches!(result, Err(MealError::Storage(_))));
        assert_eq!(storage.write_count(), 0);
    }

    #[tokio::test]
    async fn test_flush_waits_for_dropped_handles() {
        let storage = Arc::new(MemoryStorage::new());
        let queue = SaveQueue::spawn(MealGateway::new(storage.clone()));

        drop(queue.enqueue(vec![meal("1", "Apple")]));
        drop(queue.enqueue(vec![meal("2", "Pear")]));
        queue.flush().await.unwrap();

        assert_eq!(storage.write_count(), 2);
    }
}
