// src/summarizer/mod.rs
pub mod extractive;
pub mod frequency;
pub mod sentence;

// Re-export key summarization types for convenience
pub use extractive::{
    summarize,
    Analysis,
    ExtractiveSummarizer,
    ScoredSentence,
    Summarize,
    SummarizerConfig,
    TermCount,
};
pub use frequency::FrequencyTable;
