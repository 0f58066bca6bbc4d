// Capturing records into the local cache: direct submission, HTML extraction, or a
// remote scrape through the scrape port. Each user action maps to exactly one handler.

pub mod handlers;
pub mod url;
