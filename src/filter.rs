//! Candidate projection for the picker's filter text.
//!
//! The picker does not rank names itself; it asks a [`CandidateFilter`].
//! [`FuzzyFilter`] is the default, backed by `nucleo-matcher`.

use nucleo_matcher::pattern::{CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};
use std::cmp::Reverse;

/// Projects a candidate list onto the subset matching a query.
pub trait CandidateFilter {
    /// Return indices into `candidates` that match `query`, best match first.
    ///
    /// An empty (or all-whitespace) query keeps every candidate in order.
    /// Candidates with equal scores must keep their relative order.
    fn project(&mut self, candidates: &[String], query: &str) -> Vec<usize>;
}

/// Fuzzy subsequence matching with smart case and smart normalization.
pub struct FuzzyFilter {
    matcher: Matcher,
    buf: Vec<char>,
}

impl Default for FuzzyFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl FuzzyFilter {
    pub fn new() -> Self {
        Self {
            matcher: Matcher::new(Config::DEFAULT),
            buf: Vec::new(),
        }
    }
}

impl std::fmt::Debug for FuzzyFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FuzzyFilter").finish_non_exhaustive()
    }
}

impl CandidateFilter for FuzzyFilter {
    fn project(&mut self, candidates: &[String], query: &str) -> Vec<usize> {
        if query.trim().is_empty() {
            return (0..candidates.len()).collect();
        }

        let pattern = Pattern::parse(query, CaseMatching::Smart, Normalization::Smart);
        let mut scored: Vec<(usize, u32)> = candidates
            .iter()
            .enumerate()
            .filter_map(|(i, name)| {
                let haystack = Utf32Str::new(name, &mut self.buf);
                pattern
                    .score(haystack, &mut self.matcher)
                    .map(|score| (i, score))
            })
            .collect();

        // `sort_by_key` is stable: ties stay in candidate order.
        scored.sort_by_key(|&(_, score)| Reverse(score));
        scored.into_iter().map(|(i, _)| i).collect()
    }
}
