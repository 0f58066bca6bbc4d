use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::{RecordStore, StoreError};

/// JSON-file-backed store. The whole file is one JSON object keyed by record name.
///
/// Reads are served from memory. Every write rewrites the file through a sibling temp
/// file and a rename, so a crash mid-write leaves the previous contents intact.
pub struct FileStore {
    path: PathBuf,
    entries: RwLock<Map<String, Value>>,
}

impl FileStore {
    /// Opens the store, starting empty if the file does not exist yet.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let entries = match tokio::fs::read(&path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Map::new(),
            Ok(bytes) => match serde_json::from_slice::<Value>(&bytes) {
                Ok(Value::Object(map)) => map,
                Ok(other) => {
                    return Err(StoreError::Corrupt(format!(
                        "{}: expected object, found {}",
                        path.display(),
                        json_kind(&other)
                    )))
                }
                Err(e) => return Err(StoreError::Corrupt(format!("{}: {e}", path.display()))),
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Map::new(),
            Err(e) => return Err(StoreError::Io(e)),
        };

        info!(
            "Record store opened at {} ({} keys)",
            path.display(),
            entries.len()
        );

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RecordStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn put(&self, key: &str, value: Value) -> Result<(), StoreError> {
        // Hold the write lock across the flush so concurrent writers persist in order.
        let mut entries = self.entries.write().await;
        let mut next = entries.clone();
        next.insert(key.to_string(), value);

        let bytes = serde_json::to_vec_pretty(&next)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        *entries = next;
        debug!("Persisted '{key}' to {}", self.path.display());
        Ok(())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
