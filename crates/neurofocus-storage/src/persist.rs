//! Fire-and-forget persistence. Storage failures are logged here and never
//! reach the caller that produced the result.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{info, warn};

use neurofocus_core::models::record::ScreeningRecord;

use crate::store::ResultStore;

/// Append `record` on a background task.
///
/// The returned handle resolves once the attempt is over, whether it
/// succeeded or not; awaiting it is optional.
pub fn spawn_persist<S>(store: Arc<S>, record: ScreeningRecord) -> JoinHandle<()>
where
    S: ResultStore + ?Sized + 'static,
{
    tokio::spawn(async move {
        let record_id = record.id;
        let profile_id = record.profile_id.clone();
        match store.append(record).await {
            Ok(()) => info!(%record_id, %profile_id, "screening result saved"),
            Err(e) => warn!(%record_id, %profile_id, error = %e, "failed to save screening result"),
        }
    })
}

/// Load history, degrading to an empty list when the store fails.
pub async fn load_history<S>(store: &S) -> Vec<ScreeningRecord>
where
    S: ResultStore + ?Sized,
{
    match store.load_all().await {
        Ok(records) => records,
        Err(e) => {
            warn!(error = %e, "failed to load screening history");
            Vec::new()
        }
    }
}
