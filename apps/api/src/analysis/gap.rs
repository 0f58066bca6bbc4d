//! Gap Analysis — compares a captured profile against a captured job posting.
//!
//! Pure keyword heuristics: substring containment against the lower-cased job
//! description, exact membership against the lower-cased profile skills, plus three
//! structural completeness checks. No score is computed here.

use serde::{Deserialize, Serialize};

use crate::models::{JobPosting, Profile};

/// Closed vocabulary of domain keywords checked against the job description.
/// Order is significant: missing skills are reported in this order.
pub const SKILL_VOCABULARY: &[&str] = &[
    "python",
    "matlab",
    "ansys",
    "cad",
    "solidworks",
    "autocad",
    "manufacturing",
    "leadership",
    "teamwork",
    "data",
    "analysis",
    "project",
    "simulation",
    "testing",
];

/// Minimum number of experience entries before the Experience check passes.
const MIN_EXPERIENCES: usize = 2;
/// Minimum trimmed length (in characters) of the about/summary text.
const MIN_ABOUT_CHARS: usize = 100;

const EDUCATION_RECOMMENDATION: &str =
    "Add at least one education entry — employers often filter by degree.";
const EXPERIENCE_RECOMMENDATION: &str =
    "List 2–3 most relevant experiences with metrics (impact, %, etc.).";
const ABOUT_RECOMMENDATION: &str =
    "Write a 2–3 line summary that aligns with the role: include domain, tools, and achievements.";

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// One deficient area of the profile and what is missing from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingField {
    pub field: String,
    pub items: Vec<String>,
}

impl MissingField {
    fn new(field: &str, items: Vec<String>) -> Self {
        Self {
            field: field.to_string(),
            items,
        }
    }
}

/// Derived comparison result. Recomputed on every request, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GapReport {
    pub missing: Vec<MissingField>,
    pub recommendations: Vec<String>,
}

impl GapReport {
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.recommendations.is_empty()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Analysis
// ────────────────────────────────────────────────────────────────────────────

/// Produces the gap report for a profile against a job posting.
///
/// Either side being absent is a defined no-op and yields an empty report.
pub fn analyze(profile: Option<&Profile>, job: Option<&JobPosting>) -> GapReport {
    let (Some(profile), Some(job)) = (profile, job) else {
        return GapReport::default();
    };

    let mut report = GapReport::default();

    let missing_skills = find_missing_skills(profile, job);
    if !missing_skills.is_empty() {
        report
            .missing
            .push(MissingField::new("Skills", missing_skills.clone()));
    }

    if profile.education.is_empty() {
        report.missing.push(MissingField::new(
            "Education",
            vec!["No education info found".to_string()],
        ));
        report
            .recommendations
            .push(EDUCATION_RECOMMENDATION.to_string());
    }

    if profile.experiences.len() < MIN_EXPERIENCES {
        report.missing.push(MissingField::new(
            "Experience",
            vec!["Too few experiences".to_string()],
        ));
        report
            .recommendations
            .push(EXPERIENCE_RECOMMENDATION.to_string());
    }

    if profile.about.trim().chars().count() < MIN_ABOUT_CHARS {
        report.missing.push(MissingField::new(
            "About",
            vec!["Too short or missing".to_string()],
        ));
        report.recommendations.push(ABOUT_RECOMMENDATION.to_string());
    }

    if !missing_skills.is_empty() {
        report.recommendations.push(format!(
            "Add these to your Skills: {}",
            missing_skills.join(", ")
        ));
    }

    report
}

/// Vocabulary keywords present in the job description but absent from the profile skills.
///
/// Containment is a plain substring test, so "data" matches inside "database".
fn find_missing_skills(profile: &Profile, job: &JobPosting) -> Vec<String> {
    let job_text = job.desc.to_lowercase();
    let skills = profile.normalized_skills();

    SKILL_VOCABULARY
        .iter()
        .filter(|kw| job_text.contains(*kw) && !skills.iter().any(|s| s == *kw))
        .map(|kw| kw.to_string())
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
