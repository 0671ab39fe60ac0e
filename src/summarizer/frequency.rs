// src/summarizer/frequency.rs

// --- Imports ---
use crate::summarizer::sentence::split_tokens;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use std::collections::HashMap;

// Anything that is not an ASCII word character
static NON_WORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^A-Za-z0-9_]").expect("Failed to compile NON_WORD_RE")
});

/// Strips every non-word character from an already lowercased token.
pub fn clean_token(token: &str) -> Cow<'_, str> {
    NON_WORD_RE.replace_all(token, "")
}

/// Document-wide term counts, built fresh for every summarize call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
}

impl FrequencyTable {
    /// Counts every cleaned token of `text` longer than `min_term_chars`.
    pub fn build(text: &str, min_term_chars: usize) -> Self {
        let mut counts: HashMap<String, usize> = HashMap::new();

        for token in split_tokens(&text.to_lowercase()) {
            let term = clean_token(token);
            // Cleaned terms are pure ASCII, so byte length == char length
            if term.len() > min_term_chars {
                *counts.entry(term.into_owned()).or_insert(0) += 1;
            }
        }

        Self { counts }
    }

    /// Occurrence count for `term`, 0 if it never made it into the table.
    pub fn count(&self, term: &str) -> usize {
        self.counts.get(term).copied().unwrap_or(0)
    }

    /// Sum of the counts of every cleaned token in `sentence`.
    ///
    /// Tokens are not length-filtered here: short ones simply score 0
    /// because they were never inserted.
    pub fn score(&self, sentence: &str) -> usize {
        split_tokens(&sentence.to_lowercase())
            .map(|token| self.count(&clean_token(token)))
            .sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The `limit` most frequent terms, ties broken alphabetically.
    pub fn top_terms(&self, limit: usize) -> Vec<(&str, usize)> {
        let mut terms: Vec<(&str, usize)> = self
            .counts
            .iter()
            .map(|(term, count)| (term.as_str(), *count))
            .collect();
        terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        terms.truncate(limit);
        terms
    }
}
