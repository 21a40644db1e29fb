use std::future::Future;
use std::pin::Pin;

use neurofocus_core::models::record::ScreeningRecord;

use crate::error::StorageError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Append-only history of completed screeners.
pub trait ResultStore: Send + Sync {
    /// Add one record after every existing one.
    fn append(&self, record: ScreeningRecord) -> BoxFuture<'_, Result<(), StorageError>>;

    /// Every record, in append order.
    fn load_all(&self) -> BoxFuture<'_, Result<Vec<ScreeningRecord>, StorageError>>;
}
