//! Profile URL validation for remote scraping.

use std::sync::OnceLock;

use regex::Regex;
use url::Url;

const PROFILE_URL_PATTERN: &str = r"^https://(www\.)?linkedin\.com/in/[a-zA-Z0-9\-_%]+/?$";

fn profile_url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PROFILE_URL_PATTERN).expect("profile URL pattern is valid"))
}

/// True for a public profile URL such as `https://www.linkedin.com/in/jane-doe/`.
pub fn is_profile_url(url: &str) -> bool {
    profile_url_regex().is_match(url.trim())
}

/// Job pages only need to be absolute http(s) URLs with a host.
pub fn is_web_url(url: &str) -> bool {
    match Url::parse(url.trim()) {
        Ok(parsed) => {
            matches!(parsed.scheme(), "http" | "https")
                && parsed.host_str().is_some_and(|host| !host.is_empty())
        }
        Err(_) => false,
    }
}
