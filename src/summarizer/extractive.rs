// src/summarizer/extractive.rs

// --- Imports ---
use crate::summarizer::frequency::FrequencyTable;
use crate::summarizer::sentence::split_sentences;
use crate::utils::error::AppError;
use serde::Serialize;

// --- Constants ---
const DEFAULT_MAX_SENTENCES: usize = 5;
const DEFAULT_RATIO_PERCENT: usize = 30;
const DEFAULT_MIN_SENTENCE_CHARS: usize = 10;
const DEFAULT_MIN_TERM_CHARS: usize = 3;
const SENTENCE_JOINER: &str = ". ";
const EXPLAIN_TOP_TERMS: usize = 10;

/// Tunables for the extractive summarizer.
/// `Default` gives the reference behaviour: `min(5, ceil(0.3 * n))` sentences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummarizerConfig {
    /// Hard cap on the number of selected sentences
    pub max_sentences: usize,
    /// Share of qualifying sentences to keep, in percent (rounded up)
    pub ratio_percent: usize,
    /// Sentences must be strictly longer than this once trimmed
    pub min_sentence_chars: usize,
    /// Terms must be strictly longer than this once cleaned
    pub min_term_chars: usize,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            max_sentences: DEFAULT_MAX_SENTENCES,
            ratio_percent: DEFAULT_RATIO_PERCENT,
            min_sentence_chars: DEFAULT_MIN_SENTENCE_CHARS,
            min_term_chars: DEFAULT_MIN_TERM_CHARS,
        }
    }
}

impl SummarizerConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.max_sentences == 0 {
            return Err(AppError::Config("max_sentences must be at least 1".to_string()));
        }
        if !(1..=100).contains(&self.ratio_percent) {
            return Err(AppError::Config(format!(
                "ratio_percent must be between 1 and 100, got {}",
                self.ratio_percent
            )));
        }
        Ok(())
    }

    /// Number of sentences to keep out of `sentence_count` qualifying ones.
    /// Integer ceiling, so small documents never round down to zero.
    pub fn summary_size(&self, sentence_count: usize) -> usize {
        let by_ratio = sentence_count
            .saturating_mul(self.ratio_percent)
            .saturating_add(99)
            / 100;
        by_ratio.min(self.max_sentences)
    }
}

// --- Data Structures ---
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredSentence<'a> {
    pub index: usize,   // Position among qualifying sentences
    pub text: &'a str,  // Trimmed slice of the input document
    pub score: usize,   // Sum of term frequencies
}

#[derive(Debug, Clone, Serialize)]
pub struct TermCount {
    pub term: String,
    pub count: usize,
}

/// Everything the summarizer computed for one document.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis<'a> {
    /// Qualifying sentences in document order
    pub sentences: Vec<ScoredSentence<'a>>,
    /// Indices into `sentences`, in output (score) order
    pub selected: Vec<usize>,
    pub distinct_terms: usize,
    pub top_terms: Vec<TermCount>,
    pub summary: String,
}

/// Anything that turns a document into a summary string.
pub trait Summarize {
    fn summarize(&self, text: &str) -> String;
}

/// Frequency-based extractive summarizer.
#[derive(Debug, Clone, Default)]
pub struct ExtractiveSummarizer {
    config: SummarizerConfig,
}

impl ExtractiveSummarizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a summarizer after checking `config`.
    pub fn with_config(config: SummarizerConfig) -> Result<Self, AppError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Produces the summary for `text`.
    ///
    /// Selected sentences are emitted in score order (highest first), not in
    /// the order they appear in the document. Equal scores keep document order.
    pub fn summarize(&self, text: &str) -> String {
        self.analyze(text).summary
    }

    /// Runs segmentation, term counting, scoring, and selection.
    pub fn analyze<'a>(&self, text: &'a str) -> Analysis<'a> {
        // 1. Segmentation
        let sentences = split_sentences(text, self.config.min_sentence_chars);

        // 2. Term extraction over the whole document
        let table = FrequencyTable::build(text, self.config.min_term_chars);
        tracing::debug!(
            "Found {} qualifying sentences and {} distinct terms",
            sentences.len(),
            table.len()
        );

        // 3. Scoring
        let scored: Vec<ScoredSentence<'a>> = sentences
            .into_iter()
            .enumerate()
            .map(|(index, sentence)| {
                let score = table.score(sentence);
                tracing::trace!("Sentence {} scored {}: '{}'", index, score, sentence);
                ScoredSentence { index, text: sentence, score }
            })
            .collect();

        // 4. Selection: sort_by is stable, ties stay in document order
        let mut ranked: Vec<&ScoredSentence<'a>> = scored.iter().collect();
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        let keep = self.config.summary_size(scored.len());
        ranked.truncate(keep);
        tracing::debug!("Selected {} of {} sentences", ranked.len(), scored.len());

        // 5. Assembly
        let summary = format!(
            "{}.",
            ranked
                .iter()
                .map(|sentence| sentence.text)
                .collect::<Vec<_>>()
                .join(SENTENCE_JOINER)
        );

        let selected = ranked.iter().map(|sentence| sentence.index).collect();
        let top_terms = table
            .top_terms(EXPLAIN_TOP_TERMS)
            .into_iter()
            .map(|(term, count)| TermCount { term: term.to_string(), count })
            .collect();

        Analysis {
            sentences: scored,
            selected,
            distinct_terms: table.len(),
            top_terms,
            summary,
        }
    }
}

impl Summarize for ExtractiveSummarizer {
    fn summarize(&self, text: &str) -> String {
        self.analyze(text).summary
    }
}

/// Summarizes `text` with the default configuration.
pub fn summarize(text: &str) -> String {
    ExtractiveSummarizer::new().summarize(text)
}
