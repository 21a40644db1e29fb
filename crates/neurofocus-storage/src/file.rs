use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::sync::Mutex;
use tracing::debug;

use neurofocus_core::models::record::ScreeningRecord;

use crate::error::StorageError;
use crate::store::{BoxFuture, ResultStore};
use crate::stored::StoredRecord;

/// History kept as a single JSON array file.
///
/// Appends rewrite the whole file through a temp file + rename, so a crash
/// mid-write leaves the previous history intact.
pub struct FileResultStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileResultStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing file = empty history.
    async fn read_stored(&self) -> Result<Vec<StoredRecord>, StorageError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no history file yet");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        serde_json::from_slice(&bytes).map_err(|source| StorageError::Corrupt {
            path: self.path.display().to_string(),
            source,
        })
    }

    async fn write_stored(&self, records: &[StoredRecord]) -> Result<(), StorageError> {
        let json = serde_json::to_vec_pretty(records)?;
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, &json).await?;

        // History holds health answers; keep it private to the user.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tokio::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600)).await?;
        }

        tokio::fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }
}

impl ResultStore for FileResultStore {
    fn append(&self, record: ScreeningRecord) -> BoxFuture<'_, Result<(), StorageError>> {
        Box::pin(async move {
            let _guard = self.write_lock.lock().await;

            let mut records = self.read_stored().await?;
            records.push(StoredRecord::from(&record));
            self.write_stored(&records).await?;

            debug!(
                path = %self.path.display(),
                record_id = %record.id,
                total = records.len(),
                "history record appended"
            );
            Ok(())
        })
    }

    fn load_all(&self) -> BoxFuture<'_, Result<Vec<ScreeningRecord>, StorageError>> {
        Box::pin(async move {
            let stored = self.read_stored().await?;
            Ok(stored.into_iter().map(StoredRecord::into_record).collect())
        })
    }
}
