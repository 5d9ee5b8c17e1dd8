//! Bugbear Core - search logic for the Bugbear cybersecurity job board
//!
//! This library implements the client-side search core: fuzzy suggestion
//! scoring over an in-memory corpus of job postings, plus the stateful
//! plumbing the search UI sits on top of.
//!
//! # Architecture
//! - `models`: Job domain types (JobPosting, JobFilters)
//! - `suggest`: Fuzzy similarity scoring and ranked suggestions
//! - `corpus`: Snapshot cache of the unfiltered job population
//! - `client`: HTTP client for the job directory service
//! - `debounce`: Cancellable last-write-wins timer
//! - `store`: Main API tying query input, suggestions and search together

pub mod client;
pub mod corpus;
pub mod debounce;
pub mod models;
pub mod store;
pub mod suggest;

pub use client::{DirectoryError, HttpJobDirectory, JobDirectory};
pub use corpus::{CorpusSnapshot, JobCorpusCache};
pub use models::{JobFilters, JobPosting, JobsPage};
pub use store::JobSearchStore;
pub use suggest::{similarity, suggest};
