//! Fuzzy Match Suggester
//!
//! Scores a partial search query against a corpus of candidate strings
//! (job titles, descriptions, locations, skill tags) and returns up to
//! five ranked suggestions. Scoring is a two-tier scheme: a case-insensitive
//! substring hit wins immediately at 0.9, otherwise a Levenshtein edit
//! distance normalized by the longer string's length.
//!
//! Pure functions, no I/O. The short-query gate (fewer than 3 characters)
//! lives in the caller, not here.

use std::cmp::Ordering;
use std::collections::HashSet;

/// Maximum suggestions returned from one computation
pub const SUGGESTION_LIMIT: usize = 5;
/// Candidates must score strictly above this to be suggested
pub const SIMILARITY_THRESHOLD: f64 = 0.4;
/// Fixed score for a case-insensitive substring hit
pub const SUBSTRING_SCORE: f64 = 0.9;
/// Queries shorter than this (trimmed) are never scored by callers
pub const MIN_QUERY_CHARS: usize = 3;

/// A scored candidate, alive only for the duration of one `suggest` call
struct SuggestionCandidate<'a> {
    term: &'a str,
    similarity: f64,
}

/// Similarity between a query and a candidate string, in `[0, 1]`.
///
/// The longer of the two strings is the reference side (the query wins
/// ties). Two empty strings score 1.0. A case-insensitive substring
/// containment scores a flat 0.9 and skips the edit distance entirely;
/// everything else scores `(longer_len - edit_distance) / longer_len`,
/// with the edit distance computed case-sensitively.
pub fn similarity(query: &str, candidate: &str) -> f64 {
    let q: Vec<char> = query.chars().collect();
    let c: Vec<char> = candidate.chars().collect();
    let (longer, shorter) = if c.len() > q.len() { (&c, &q) } else { (&q, &c) };

    if longer.is_empty() {
        return 1.0;
    }

    let longer_lower = longer.iter().collect::<String>().to_lowercase();
    let shorter_lower = shorter.iter().collect::<String>().to_lowercase();
    if longer_lower.contains(&shorter_lower) {
        return SUBSTRING_SCORE;
    }

    let distance = levenshtein(longer, shorter);
    (longer.len() as f64 - distance as f64) / longer.len() as f64
}

/// Levenshtein distance over a single rolling cost array.
///
/// `costs` holds the previous DP row; `last` carries the diagonal value
/// while the current row is computed in place.
fn levenshtein(longer: &[char], shorter: &[char]) -> usize {
    let mut costs: Vec<usize> = (0..=shorter.len()).collect();

    for (i, lc) in longer.iter().enumerate() {
        let mut last = i + 1;
        for (j, sc) in shorter.iter().enumerate() {
            let substitution = costs[j] + usize::from(lc != sc);
            let next = substitution.min(last + 1).min(costs[j + 1] + 1);
            costs[j] = last;
            last = next;
        }
        costs[shorter.len()] = last;
    }

    costs[shorter.len()]
}

/// Rank `corpus` against `query` and return the top suggestions.
///
/// Empty entries are dropped and duplicates collapsed (first occurrence
/// wins) before scoring. Only candidates scoring strictly above
/// [`SIMILARITY_THRESHOLD`] survive; ties keep corpus encounter order
/// (stable sort). At most [`SUGGESTION_LIMIT`] terms are returned.
pub fn suggest(query: &str, corpus: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut candidates: Vec<SuggestionCandidate<'_>> = corpus
        .iter()
        .filter(|term| !term.is_empty())
        .filter(|term| seen.insert(term.as_str()))
        .map(|term| SuggestionCandidate {
            term: term.as_str(),
            similarity: similarity(query, term),
        })
        .filter(|candidate| candidate.similarity > SIMILARITY_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(Ordering::Equal)
    });
    candidates.truncate(SUGGESTION_LIMIT);

    candidates
        .into_iter()
        .map(|candidate| candidate.term.to_string())
        .collect()
}
