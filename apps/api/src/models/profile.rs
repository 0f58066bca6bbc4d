use serde::{Deserialize, Serialize};

use super::null_as_default;

/// A single position from the profile's experience history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl Experience {
    /// The date label shown on the rendered entry.
    ///
    /// Prefers the scraped `date` string; falls back to `start – end` built from the
    /// structured dates, with `Present` for an open-ended position.
    pub fn display_date(&self) -> String {
        if !self.date.trim().is_empty() {
            return self.date.clone();
        }
        let start = self.start_date.as_deref().map(str::trim).unwrap_or("");
        if start.is_empty() {
            return String::new();
        }
        let end = self
            .end_date
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .unwrap_or("Present");
        format!("{start} – {end}")
    }
}

/// Education entry. Opaque to the analyzer, which only counts them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub school: Option<String>,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub start_year: Option<String>,
    pub end_year: Option<String>,
}

/// Scraped representation of a person's professional page.
///
/// Captured once per scrape and overwritten wholesale on re-scrape. Every field defaults
/// when absent or null so partially scraped pages still deserialize.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub headline: String,
    #[serde(deserialize_with = "null_as_default")]
    pub about: String,
    #[serde(deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub education: Vec<Education>,
    #[serde(deserialize_with = "null_as_default")]
    pub experiences: Vec<Experience>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Profile {
    /// Skills lower-cased for exact-membership matching.
    pub fn normalized_skills(&self) -> Vec<String> {
        self.skills.iter().map(|s| s.to_lowercase()).collect()
    }

    /// True when the scrape produced nothing usable.
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
            && self.headline.trim().is_empty()
            && self.about.trim().is_empty()
            && self.skills.is_empty()
            && self.experiences.is_empty()
            && self.education.is_empty()
    }
}
