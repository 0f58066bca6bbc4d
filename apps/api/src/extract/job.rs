use scraper::Html;
use tracing::{debug, warn};

use super::{first_text, ExtractError};
use crate::models::JobPosting;

// Public and logged-in job pages use different class names; first match wins.
const TITLE_SELECTOR: &str = "h1.top-card-layout__title, h1.jobs-unified-top-card__job-title";
const COMPANY_SELECTOR: &str = "a.topcard__org-name-link, a.jobs-unified-top-card__company-name";
const DESC_SELECTOR: &str =
    ".show-more-less-html__markup, .jobs-box__html-content, .jobs-description__content";

/// Extracts title, company and description from a rendered job posting page.
pub fn extract_job(html: &str) -> Result<JobPosting, ExtractError> {
    let document = Html::parse_document(html);

    let job = JobPosting {
        title: first_text(&document, TITLE_SELECTOR)?,
        company: first_text(&document, COMPANY_SELECTOR)?,
        desc: first_text(&document, DESC_SELECTOR)?,
        url: None,
    };

    if job.is_blank() {
        warn!("Job extraction matched no selectors");
        return Err(ExtractError::NotFound("job"));
    }

    debug!(
        "Extracted job: title={:?}, company={:?}, desc_chars={}",
        job.title,
        job.company,
        job.desc.chars().count()
    );
    Ok(job)
}
