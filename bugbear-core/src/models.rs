//! Job domain models
//!
//! Wire types for the job directory service plus the filter set the
//! search UI maintains. The directory returns postings either as a bare
//! JSON array or wrapped in a DRF-style `{ "results": [...] }` envelope;
//! [`JobsPage`] normalizes both.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A job posting as served by the job directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub skills_required: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_min: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_max: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posted_at: Option<DateTime<Utc>>,
}

impl JobPosting {
    /// The searchable text fragments of this posting, in field order
    /// (title, description, location, then each skill tag), with empty
    /// fields skipped.
    pub fn searchable_terms(&self) -> impl Iterator<Item = &str> + '_ {
        [
            self.title.as_str(),
            self.description.as_str(),
            self.location.as_str(),
        ]
        .into_iter()
        .chain(self.skills_required.iter().map(String::as_str))
        .filter(|term| !term.is_empty())
    }
}

/// The filter set of the job search page; empty string means inactive
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobFilters {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub job_type: String,
    #[serde(default)]
    pub experience_level: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub min_salary: String,
    #[serde(default)]
    pub max_salary: String,
    #[serde(default)]
    pub skills: String,
}

impl JobFilters {
    fn fields(&self) -> [(&'static str, &str); 7] {
        [
            ("search", self.search.as_str()),
            ("job_type", self.job_type.as_str()),
            ("experience_level", self.experience_level.as_str()),
            ("location", self.location.as_str()),
            ("min_salary", self.min_salary.as_str()),
            ("max_salary", self.max_salary.as_str()),
            ("skills", self.skills.as_str()),
        ]
    }

    /// True when no filter (search included) is active. Only fetches in
    /// this state may refresh the suggestion corpus.
    pub fn is_unfiltered(&self) -> bool {
        self.fields().iter().all(|(_, value)| value.is_empty())
    }

    /// Number of active filters excluding the free-text search (the
    /// filter badge count in the UI).
    pub fn active_filter_count(&self) -> usize {
        self.fields()
            .iter()
            .filter(|(name, value)| *name != "search" && !value.is_empty())
            .count()
    }

    /// Active filters as query parameters for the directory request
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        self.fields()
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(name, value)| (*name, value.to_string()))
            .collect()
    }
}

/// Directory response: either a paginated envelope or a bare array
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum JobsPage {
    Paginated { results: Vec<JobPosting> },
    Flat(Vec<JobPosting>),
}

impl JobsPage {
    pub fn into_jobs(self) -> Vec<JobPosting> {
        match self {
            JobsPage::Paginated { results } => results,
            JobsPage::Flat(jobs) => jobs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posting() -> JobPosting {
        JobPosting {
            id: 1,
            title: "Penetration Tester".into(),
            description: "Red team engagements".into(),
            location: "Remote".into(),
            skills_required: vec!["Burp Suite".into(), "Python".into()],
            job_type: Some("full_time".into()),
            experience_level: None,
            salary_min: Some(90_000),
            salary_max: None,
            posted_at: None,
        }
    }

    #[test]
    fn searchable_terms_flatten_in_field_order() {
        let job = posting();
        let terms: Vec<&str> = job.searchable_terms().collect();
        assert_eq!(
            terms,
            vec![
                "Penetration Tester",
                "Red team engagements",
                "Remote",
                "Burp Suite",
                "Python",
            ]
        );
    }

    #[test]
    fn searchable_terms_skip_empty_fields() {
        let mut job = posting();
        job.description = String::new();
        job.skills_required = vec![String::new(), "Python".into()];
        let terms: Vec<&str> = job.searchable_terms().collect();
        assert_eq!(terms, vec!["Penetration Tester", "Remote", "Python"]);
    }

    #[test]
    fn default_filters_are_unfiltered() {
        assert!(JobFilters::default().is_unfiltered());
    }

    #[test]
    fn any_field_breaks_unfiltered_state() {
        let mut filters = JobFilters::default();
        filters.min_salary = "50000".into();
        assert!(!filters.is_unfiltered());

        let mut filters = JobFilters::default();
        filters.search = "pentest".into();
        assert!(!filters.is_unfiltered());
    }

    #[test]
    fn active_filter_count_excludes_search() {
        let filters = JobFilters {
            search: "pentest".into(),
            job_type: "full_time".into(),
            location: "Remote".into(),
            ..Default::default()
        };
        assert_eq!(filters.active_filter_count(), 2);
    }

    #[test]
    fn to_query_skips_empty_fields() {
        let filters = JobFilters {
            search: "analyst".into(),
            location: "Berlin".into(),
            ..Default::default()
        };
        assert_eq!(
            filters.to_query(),
            vec![("search", "analyst".to_string()), ("location", "Berlin".to_string())]
        );
    }

    #[test]
    fn jobs_page_accepts_both_envelopes() {
        let flat: JobsPage =
            serde_json::from_str(r#"[{"id": 1, "title": "Security Analyst"}]"#).unwrap();
        assert_eq!(flat.into_jobs()[0].title, "Security Analyst");

        let paginated: JobsPage = serde_json::from_str(
            r#"{"results": [{"id": 2, "title": "SOC Engineer"}], "count": 1}"#,
        )
        .unwrap();
        let jobs = paginated.into_jobs();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].id, 2);
    }
}
