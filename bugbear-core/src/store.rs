//! JobSearchStore - main API for the search UI
//!
//! Ties the pieces together: query keystrokes recompute suggestions
//! synchronously from the corpus snapshot and arm the 800ms search
//! debounce; picking a suggestion cancels the debounce and searches
//! immediately; fetch responses pass a monotonic sequence guard so a
//! slow earlier request can never overwrite a newer result set
//! (last-sent-wins).

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::RwLock;

use crate::client::{DirectoryResult, JobDirectory};
use crate::corpus::JobCorpusCache;
use crate::debounce::Debouncer;
use crate::models::{JobFilters, JobPosting};
use crate::suggest::{suggest, MIN_QUERY_CHARS};

/// Pause after the last keystroke before the search request goes out
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(800);

/// Thread-safe search state for the job listing page
pub struct JobSearchStore {
    directory: Arc<dyn JobDirectory>,
    corpus: JobCorpusCache,
    filters: RwLock<JobFilters>,
    jobs: RwLock<Vec<JobPosting>>,
    suggestions: RwLock<Vec<String>>,
    query: RwLock<String>,
    debouncer: Debouncer,
    /// Ticket counter for the last-sent-wins response guard
    seq: AtomicU64,
    last_error: RwLock<Option<String>>,
    /// Handle to ourselves for the debounced search task
    weak_self: Weak<JobSearchStore>,
}

impl JobSearchStore {
    pub fn new(directory: Arc<dyn JobDirectory>) -> Arc<Self> {
        Arc::new_cyclic(|weak| Self {
            directory,
            corpus: JobCorpusCache::new(),
            filters: RwLock::new(JobFilters::default()),
            jobs: RwLock::new(Vec::new()),
            suggestions: RwLock::new(Vec::new()),
            query: RwLock::new(String::new()),
            debouncer: Debouncer::new(SEARCH_DEBOUNCE),
            seq: AtomicU64::new(0),
            last_error: RwLock::new(None),
            weak_self: weak.clone(),
        })
    }

    pub fn jobs(&self) -> Vec<JobPosting> {
        self.jobs.read().clone()
    }

    pub fn suggestions(&self) -> Vec<String> {
        self.suggestions.read().clone()
    }

    pub fn filters(&self) -> JobFilters {
        self.filters.read().clone()
    }

    pub fn query(&self) -> String {
        self.query.read().clone()
    }

    pub fn last_error(&self) -> Option<String> {
        self.last_error.read().clone()
    }

    pub fn clear_error(&self) {
        *self.last_error.write() = None;
    }

    /// Mutate the filter set in place (search text is managed by
    /// [`set_query`](Self::set_query) and suggestion selection).
    pub fn update_filters(&self, apply: impl FnOnce(&mut JobFilters)) {
        apply(&mut self.filters.write());
    }

    /// Reset every filter and the query text
    pub fn clear_filters(&self) {
        *self.filters.write() = JobFilters::default();
        self.query.write().clear();
        self.suggestions.write().clear();
    }

    /// Handle a keystroke in the search box.
    ///
    /// Suggestions are recomputed synchronously against the in-memory
    /// corpus snapshot (no network); queries of 2 or fewer trimmed
    /// characters skip scoring entirely and clear the list. The actual
    /// search request is armed behind the 800ms debounce, and only goes
    /// out if the text still differs from the active search filter when
    /// the timer fires.
    pub fn set_query(&self, input: &str) {
        *self.query.write() = input.to_string();
        self.refresh_suggestions(input);

        let Some(store) = self.weak_self.upgrade() else {
            return;
        };
        let text = input.to_string();
        self.debouncer.schedule(async move {
            let changed = store.filters.read().search != text;
            if changed {
                store.run_search(text).await;
            }
        });
    }

    /// Accept a suggestion: replace the query, hide the list, cancel any
    /// pending debounce and search immediately.
    pub async fn select_suggestion(&self, term: &str) {
        self.debouncer.cancel();
        *self.query.write() = term.to_string();
        self.suggestions.write().clear();
        self.run_search(term.to_string()).await;
    }

    /// Fetch postings with the current filters and, if this request is
    /// still the newest when the response lands, apply the result set.
    /// A clean (unfiltered) fetch also refreshes the suggestion corpus.
    pub async fn fetch_jobs(&self) -> DirectoryResult<()> {
        let filters = self.filters.read().clone();
        let ticket = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(ticket, search = %filters.search, "dispatching job fetch");

        let outcome = self.directory.fetch_jobs(&filters).await;

        if self.seq.load(Ordering::SeqCst) != ticket {
            tracing::debug!(ticket, "dropping superseded job fetch response");
            return Ok(());
        }

        match outcome {
            Ok(jobs) => {
                self.corpus.capture_if_unfiltered(&jobs, &filters);
                *self.jobs.write() = jobs;
                *self.last_error.write() = None;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(ticket, error = %err, "job fetch failed");
                *self.last_error.write() = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// The current suggestion corpus snapshot size (diagnostics)
    pub fn corpus_len(&self) -> usize {
        self.corpus.snapshot().len()
    }

    fn refresh_suggestions(&self, input: &str) {
        if input.trim().chars().count() < MIN_QUERY_CHARS {
            self.suggestions.write().clear();
            return;
        }
        let snapshot = self.corpus.snapshot();
        *self.suggestions.write() = suggest(input, snapshot.terms());
    }

    async fn run_search(&self, text: String) {
        self.filters.write().search = text;
        // Errors are surfaced through last_error; the caller of a
        // keystroke has nowhere to propagate them.
        let _ = self.fetch_jobs().await;
    }
}
