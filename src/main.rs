// src/main.rs
use clap::Parser;
use extractive_summarizer::api::{self, SummarizeOutcome, SummarizeRequest};
use extractive_summarizer::output::{self, OutputTarget};
use extractive_summarizer::utils::{self, AppError};
use extractive_summarizer::{ExtractiveSummarizer, SummarizerConfig};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

/// Command Line Interface for the extractive summarizer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Document text to summarize (reads stdin when neither --text nor --file is given)
    #[arg(short, long, conflicts_with = "file")]
    text: Option<String>,

    /// Read the document from a file
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Treat the input as a JSON request body: {"text": "..."}
    #[arg(long)]
    json: bool,

    /// Print the scored sentences and top terms instead of the response
    #[arg(long)]
    explain: bool,

    /// Write the JSON result to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Maximum number of sentences in the summary
    #[arg(long, env = "SUMMARY_MAX_SENTENCES", default_value_t = 5)]
    max_sentences: usize,

    /// Share of qualifying sentences to keep, in percent (rounded up)
    #[arg(long, env = "SUMMARY_RATIO_PERCENT", default_value_t = 30)]
    ratio_percent: usize,

    /// Sentences must be longer than this many characters
    #[arg(long, env = "SUMMARY_MIN_SENTENCE_CHARS", default_value_t = 10)]
    min_sentence_chars: usize,

    /// Terms must be longer than this many characters
    #[arg(long, env = "SUMMARY_MIN_TERM_CHARS", default_value_t = 3)]
    min_term_chars: usize,
}

impl Args {
    fn config(&self) -> SummarizerConfig {
        SummarizerConfig {
            max_sentences: self.max_sentences,
            ratio_percent: self.ratio_percent,
            min_sentence_chars: self.min_sentence_chars,
            min_term_chars: self.min_term_chars,
        }
    }

    fn read_input(&self) -> Result<String, AppError> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        if let Some(path) = &self.file {
            tracing::info!("Reading document from {}", path.display());
            return Ok(std::fs::read_to_string(path)?);
        }
        tracing::debug!("Reading document from stdin");
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    }
}

fn main() -> Result<ExitCode, AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments and validate configuration
    let args = Args::parse();
    tracing::debug!("Starting with args: {:?}", args);
    let summarizer = ExtractiveSummarizer::with_config(args.config())?;
    tracing::debug!("Active summarizer config: {:?}", summarizer.config());

    // 3. Read the document or request body
    let input = args.read_input()?;
    let target = OutputTarget::from_path(args.output.as_ref());

    // 4. Explain mode: dump the full analysis, or the same error body as step 5
    if args.explain {
        let parsed = if args.json {
            api::parse_body(&input)
        } else {
            Ok(SummarizeRequest::from_text(input))
        };
        let result = match &parsed {
            Ok(request) => api::explain(&summarizer, request),
            Err(e) => Err(e.clone()),
        };
        return match result {
            Ok(analysis) => {
                output::write_json(&target, &analysis)?;
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => {
                let outcome = SummarizeOutcome::failure(&e);
                output::write_json(&target, &outcome.response)?;
                tracing::warn!("Explain finished with status {}", outcome.status);
                Ok(ExitCode::FAILURE)
            }
        };
    }

    // 5. Summarize through the request boundary
    let outcome = if args.json {
        api::handle_body(&summarizer, &input)
    } else {
        api::handle_text(&summarizer, &input)
    };
    output::write_json(&target, &outcome.response)?;

    if outcome.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        tracing::warn!("Summarization finished with status {}", outcome.status);
        Ok(ExitCode::FAILURE)
    }
}
