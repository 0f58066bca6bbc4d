//! Illustrative match score for the analysis gauge.
//!
//! This is NOT a fit score. It is derived from the job title length only and carries no
//! analytical meaning; the output type labels it so clients cannot mistake it for one.
//! Real scoring would be a separate feature with its own model.

use serde::Serialize;

use crate::models::JobPosting;

const BASE: usize = 52;
const TITLE_SPREAD: usize = 30;
const FLOOR: u32 = 24;
const CEILING: u32 = 98;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IllustrativeScore {
    pub value: u32,
    /// Always `"illustrative"`.
    pub kind: &'static str,
    pub note: &'static str,
}

pub fn illustrative_score(job: &JobPosting) -> IllustrativeScore {
    let title_len = job.title.chars().count();
    let base = BASE + (title_len % TITLE_SPREAD).min(TITLE_SPREAD);
    let value = (base as u32).clamp(FLOOR, CEILING);

    IllustrativeScore {
        value,
        kind: "illustrative",
        note: "Demo value derived from the job title; not an assessment of fit.",
    }
}
