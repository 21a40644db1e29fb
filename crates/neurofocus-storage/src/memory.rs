use tokio::sync::Mutex;

use neurofocus_core::models::record::ScreeningRecord;

use crate::error::StorageError;
use crate::store::{BoxFuture, ResultStore};

/// In-process store for tests and hosts without a data directory.
#[derive(Debug, Default)]
pub struct MemoryResultStore {
    records: Mutex<Vec<ScreeningRecord>>,
}

impl MemoryResultStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultStore for MemoryResultStore {
    fn append(&self, record: ScreeningRecord) -> BoxFuture<'_, Result<(), StorageError>> {
        Box::pin(async move {
            self.records.lock().await.push(record);
            Ok(())
        })
    }

    fn load_all(&self) -> BoxFuture<'_, Result<Vec<ScreeningRecord>, StorageError>> {
        Box::pin(async move { Ok(self.records.lock().await.clone()) })
    }
}
