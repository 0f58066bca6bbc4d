//! Local key-value cache holding the last captured profile and job.
//!
//! Records are stored verbatim under fixed keys and overwritten wholesale on re-capture.
//! `AppState` holds an `Arc<dyn RecordStore>`; the backend is chosen at startup.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::models::{JobPosting, Profile};

pub const PROFILE_KEY: &str = "profileData";
pub const JOB_KEY: &str = "jobData";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("store file is not a JSON object: {0}")]
    Corrupt(String),

    #[error("failed to encode record: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Raw key-value backend. Implement this to swap storage without touching handlers.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;
    async fn put(&self, key: &str, value: Value) -> Result<(), StoreError>;
}

/// Loads and decodes a record. A value that no longer decodes is treated as absent.
async fn load<T: DeserializeOwned>(
    store: &dyn RecordStore,
    key: &str,
) -> Result<Option<T>, StoreError> {
    let Some(value) = store.get(key).await? else {
        return Ok(None);
    };
    match serde_json::from_value(value) {
        Ok(record) => Ok(Some(record)),
        Err(e) => {
            warn!("Ignoring undecodable record under '{key}': {e}");
            Ok(None)
        }
    }
}

async fn save<T: Serialize>(store: &dyn RecordStore, key: &str, record: &T) -> Result<(), StoreError> {
    store.put(key, serde_json::to_value(record)?).await
}

pub async fn load_profile(store: &dyn RecordStore) -> Result<Option<Profile>, StoreError> {
    load(store, PROFILE_KEY).await
}

pub async fn save_profile(store: &dyn RecordStore, profile: &Profile) -> Result<(), StoreError> {
    save(store, PROFILE_KEY, profile).await
}

pub async fn load_job(store: &dyn RecordStore) -> Result<Option<JobPosting>, StoreError> {
    load(store, JOB_KEY).await
}

pub async fn save_job(store: &dyn RecordStore, job: &JobPosting) -> Result<(), StoreError> {
    save(store, JOB_KEY, job).await
}
