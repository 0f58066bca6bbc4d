use scraper::Html;
use tracing::{debug, warn};

use super::{first_text, ExtractError};
use crate::models::Profile;

const NAME_SELECTOR: &str = ".pv-text-details__left-panel h1";
const HEADLINE_SELECTOR: &str = ".pv-text-details__left-panel .text-body-medium";
const ABOUT_SELECTOR: &str = ".pv-shared-text-with-see-more span[aria-hidden='true']";

/// Extracts name, headline and about text from a rendered profile page.
///
/// Skills, education and experience are not present in the page's top card and stay empty;
/// clients that have them submit the full record directly.
pub fn extract_profile(html: &str) -> Result<Profile, ExtractError> {
    let document = Html::parse_document(html);

    let profile = Profile {
        name: first_text(&document, NAME_SELECTOR)?,
        headline: first_text(&document, HEADLINE_SELECTOR)?,
        about: first_text(&document, ABOUT_SELECTOR)?,
        ..Default::default()
    };

    if profile.is_blank() {
        warn!("Profile extraction matched no selectors");
        return Err(ExtractError::NotFound("profile"));
    }

    debug!(
        "Extracted profile: name={:?}, about_chars={}",
        profile.name,
        profile.about.chars().count()
    );
    Ok(profile)
}
