//! Job directory HTTP client
//!
//! Thin wrapper over the job directory REST service. The store only
//! depends on the [`JobDirectory`] trait so tests can substitute an
//! in-memory double.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{JobFilters, JobPosting, JobsPage};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Error type for job directory operations
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed job payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("job directory returned HTTP status {0}")]
    Status(u16),
}

pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// The job directory contract the search store depends on
#[async_trait]
pub trait JobDirectory: Send + Sync {
    /// Fetch postings matching `filters`; empty filters fetch everything
    async fn fetch_jobs(&self, filters: &JobFilters) -> DirectoryResult<Vec<JobPosting>>;

    /// Fetch a single posting by id
    async fn fetch_job(&self, id: i64) -> DirectoryResult<JobPosting>;
}

/// reqwest-backed directory client
pub struct HttpJobDirectory {
    client: reqwest::Client,
    base_url: String,
}

impl HttpJobDirectory {
    /// Build a client for a directory rooted at `base_url`
    /// (e.g. `https://api.bugbear.example`)
    pub fn new(base_url: impl Into<String>) -> DirectoryResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    fn jobs_url(&self) -> String {
        format!("{}/api/jobs/", self.base_url)
    }

    fn job_url(&self, id: i64) -> String {
        format!("{}/api/jobs/{}/", self.base_url, id)
    }

    async fn get_json(&self, url: &str, query: &[(&'static str, String)]) -> DirectoryResult<String> {
        tracing::debug!(%url, params = query.len(), "job directory request");
        let response = self.client.get(url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::Status(status.as_u16()));
        }
        Ok(response.text().await?)
    }
}

#[async_trait]
impl JobDirectory for HttpJobDirectory {
    async fn fetch_jobs(&self, filters: &JobFilters) -> DirectoryResult<Vec<JobPosting>> {
        let body = self.get_json(&self.jobs_url(), &filters.to_query()).await?;
        let page: JobsPage = serde_json::from_str(&body)?;
        Ok(page.into_jobs())
    }

    async fn fetch_job(&self, id: i64) -> DirectoryResult<JobPosting> {
        let body = self.get_json(&self.job_url(id), &[]).await?;
        Ok(serde_json::from_str(&body)?)
    }
}
