// src/lib.rs
//! Frequency-based extractive summarization.
//!
//! Sentences are scored by summing document-wide term counts and the best
//! ones are joined in score order. [`api`] wraps the algorithm with request
//! validation and failure reporting.

pub mod api;
pub mod output;
pub mod summarizer;
pub mod utils;

pub use summarizer::{summarize, ExtractiveSummarizer, SummarizerConfig};
pub use utils::AppError;
