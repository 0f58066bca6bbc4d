pub mod job;
pub mod profile;

pub use job::JobPosting;
pub use profile::{Experience, Profile};

use serde::{Deserialize, Deserializer};

/// Deserializes `null` (or a missing field, via `#[serde(default)]`) into `T::default()`.
/// Scraped records routinely carry explicit nulls for fields the page did not render.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
