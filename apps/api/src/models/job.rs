use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Scraped representation of a job listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobPosting {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub company: String,
    /// Free-text job description.
    #[serde(deserialize_with = "null_as_default")]
    pub desc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl JobPosting {
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty() && self.company.trim().is_empty() && self.desc.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_posting_defaults_missing_fields() {
        let job: JobPosting = serde_json::from_str(r#"{"title": "ME", "desc": null}"#).unwrap();
        assert_eq!(job.title, "ME");
        assert_eq!(job.company, "");
        assert_eq!(job.desc, "");
        assert!(job.url.is_none());
        assert!(!job.is_blank());
    }

    #[test]
    fn test_url_omitted_when_absent() {
        let json = serde_json::to_value(JobPosting::default()).unwrap();
        assert!(json.get("url").is_none());
    }
}
