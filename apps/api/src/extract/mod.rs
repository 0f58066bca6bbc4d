//! Page Extractor — turns a rendered profile or job page into a structured record by
//! reading a fixed set of CSS selectors. Pure and synchronous.

pub mod job;
pub mod profile;

pub use job::extract_job;
pub use profile::extract_profile;

use scraper::{Html, Selector};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// None of the expected elements carried any text.
    #[error("no {0} content found on page")]
    NotFound(&'static str),

    #[error("invalid selector '{selector}': {reason}")]
    Selector { selector: String, reason: String },
}

/// Collapsed, trimmed text of the first element matching `selector` in document order,
/// or an empty string when nothing matches.
fn first_text(document: &Html, selector: &str) -> Result<String, ExtractError> {
    let parsed = Selector::parse(selector).map_err(|e| ExtractError::Selector {
        selector: selector.to_string(),
        reason: format!("{e:?}"),
    })?;

    Ok(document
        .select(&parsed)
        .next()
        .map(|el| collapse_whitespace(&el.text().collect::<String>()))
        .unwrap_or_default())
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
