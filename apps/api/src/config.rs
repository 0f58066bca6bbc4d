use std::time::Duration;

use anyhow::{Context, Result};

/// Sentinel `STORE_PATH` value selecting the in-memory store.
pub const MEMORY_STORE: &str = ":memory:";

/// Application configuration loaded from environment variables.
/// Fails at startup if a numeric variable does not parse.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Local key-value cache file, or `:memory:`.
    pub store_path: String,
    /// Scrape port endpoint. Scraping is disabled when unset.
    pub scraper_url: Option<String>,
    pub scrape_timeout: Duration,
    pub scrape_max_attempts: u32,
    /// Empty means permissive CORS.
    pub allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            store_path: std::env::var("STORE_PATH")
                .unwrap_or_else(|_| "resumate-store.json".to_string()),
            scraper_url: optional_env("SCRAPER_URL"),
            scrape_timeout: Duration::from_secs(parse_env("SCRAPE_TIMEOUT_SECS", 20)?),
            scrape_max_attempts: parse_env("SCRAPE_MAX_ATTEMPTS", 3)?,
            allowed_origins: optional_env("ALLOWED_ORIGINS")
                .map(|raw| split_origins(&raw))
                .unwrap_or_default(),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_origins_trims_and_drops_empties() {
        assert_eq!(
            split_origins(" chrome-extension://abc , ,http://localhost:3000"),
            vec!["chrome-extension://abc", "http://localhost:3000"]
        );
    }

    #[test]
    fn test_parse_env_uses_default_when_unset() {
        let value: u32 = parse_env("RESUMATE_TEST_UNSET_VARIABLE", 7).unwrap();
        assert_eq!(value, 7);
    }

    #[test]
    fn test_parse_env_rejects_malformed_number() {
        std::env::set_var("RESUMATE_TEST_BAD_TIMEOUT", "twenty");
        let err = parse_env::<u64>("RESUMATE_TEST_BAD_TIMEOUT", 20).err().unwrap();
        let message = format!("{err:#}");
        assert!(message.contains("RESUMATE_TEST_BAD_TIMEOUT"));
        assert!(message.contains("twenty"));
    }
}
