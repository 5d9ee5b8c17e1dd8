//! Suggestion corpus cache
//!
//! The suggester scores against a snapshot of the *unfiltered* job
//! population, not whatever narrowed result set is currently on screen.
//! The cache captures a fresh snapshot only when a fetch ran with no
//! active filters; filtered fetches leave it untouched, so the snapshot
//! goes intentionally stale until the next clean fetch.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::models::{JobFilters, JobPosting};

/// Immutable list of searchable terms, frozen at capture time
#[derive(Debug, Default, PartialEq)]
pub struct CorpusSnapshot {
    terms: Vec<String>,
}

impl CorpusSnapshot {
    /// Flatten the searchable fields of `jobs` in posting order
    pub fn from_jobs(jobs: &[JobPosting]) -> Self {
        let terms = jobs
            .iter()
            .flat_map(|job| job.searchable_terms())
            .map(str::to_string)
            .collect();
        Self { terms }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Thread-safe holder of the current corpus snapshot
#[derive(Debug, Default)]
pub struct JobCorpusCache {
    snapshot: RwLock<Arc<CorpusSnapshot>>,
}

impl JobCorpusCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the snapshot with one built from `jobs`, but only when
    /// `filters` is clean and the result set is non-empty. Returns the
    /// snapshot in effect afterwards either way.
    pub fn capture_if_unfiltered(
        &self,
        jobs: &[JobPosting],
        filters: &JobFilters,
    ) -> Arc<CorpusSnapshot> {
        if jobs.is_empty() || !filters.is_unfiltered() {
            return self.snapshot();
        }

        let fresh = Arc::new(CorpusSnapshot::from_jobs(jobs));
        tracing::debug!(terms = fresh.len(), "captured unfiltered job corpus");
        *self.snapshot.write() = Arc::clone(&fresh);
        fresh
    }

    /// The current snapshot (possibly stale, possibly empty)
    pub fn snapshot(&self) -> Arc<CorpusSnapshot> {
        Arc::clone(&self.snapshot.read())
    }
}
