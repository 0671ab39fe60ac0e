// src/api/summarize.rs

// --- Imports ---
use crate::summarizer::{Analysis, ExtractiveSummarizer, Summarize};
use crate::utils::error::RequestError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::panic::{self, RefUnwindSafe};

// --- Data Structures ---
/// Request body, e.g. `{"text": "..."}`.
/// `text` stays untyped so a non-string value is a rejection, not a parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub text: Option<Value>,
}

impl SummarizeRequest {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self { text: Some(Value::String(text.into())) }
    }

    /// The document text, if the request carries a non-empty string.
    pub fn text(&self) -> Result<&str, RequestError> {
        match &self.text {
            Some(Value::String(text)) if !text.is_empty() => Ok(text.as_str()),
            _ => Err(RequestError::InvalidInput),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SummarizeResponse {
    Summary { summary: String },
    Error { error: String },
}

/// A response paired with the status code a server would send with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummarizeOutcome {
    pub status: u16,
    pub response: SummarizeResponse,
}

impl SummarizeOutcome {
    fn success(summary: String) -> Self {
        Self { status: 200, response: SummarizeResponse::Summary { summary } }
    }

    pub fn failure(error: &RequestError) -> Self {
        Self {
            status: error.status_code(),
            response: SummarizeResponse::Error { error: error.to_string() },
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

// --- Handlers ---
/// Parses a raw JSON request body.
/// A body that is not valid JSON is reported as a generic failure.
pub fn parse_body(body: &str) -> Result<SummarizeRequest, RequestError> {
    serde_json::from_str::<SummarizeRequest>(body).map_err(|e| {
        tracing::error!("Failed to parse summarize request body: {}", e);
        RequestError::UnexpectedFailure(e.to_string())
    })
}

pub fn handle_body<S: Summarize + RefUnwindSafe>(summarizer: &S, body: &str) -> SummarizeOutcome {
    match parse_body(body) {
        Ok(request) => handle_request(summarizer, &request),
        Err(e) => SummarizeOutcome::failure(&e),
    }
}

/// Handles plain document text.
pub fn handle_text<S: Summarize + RefUnwindSafe>(summarizer: &S, text: &str) -> SummarizeOutcome {
    handle_request(summarizer, &SummarizeRequest::from_text(text))
}

pub fn handle_request<S: Summarize + RefUnwindSafe>(summarizer: &S, request: &SummarizeRequest) -> SummarizeOutcome {
    match run(summarizer, request) {
        Ok(summary) => SummarizeOutcome::success(summary),
        Err(e) => SummarizeOutcome::failure(&e),
    }
}

/// Validates the request, then runs the summarizer behind a panic boundary.
/// No partial output escapes a failed run.
pub fn run<S: Summarize + RefUnwindSafe>(summarizer: &S, request: &SummarizeRequest) -> Result<String, RequestError> {
    let text = validated_text(request)?;

    tracing::info!("Summarizing document ({} bytes)", text.len());
    let summary = panic::catch_unwind(|| summarizer.summarize(text)).map_err(|payload| {
        let detail = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        tracing::error!("Summarizer panicked: {}", detail);
        RequestError::UnexpectedFailure(detail)
    })?;

    tracing::info!("Generated summary ({} bytes)", summary.len());
    Ok(summary)
}

/// Full scoring breakdown for a request, after the same validation as [`run`].
pub fn explain<'a>(
    summarizer: &ExtractiveSummarizer,
    request: &'a SummarizeRequest,
) -> Result<Analysis<'a>, RequestError> {
    let text = validated_text(request)?;
    Ok(summarizer.analyze(text))
}

fn validated_text(request: &SummarizeRequest) -> Result<&str, RequestError> {
    request.text().map_err(|e| {
        tracing::warn!("Rejected summarize request: {}", e);
        e
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn summarizer() -> ExtractiveSummarizer {
        ExtractiveSummarizer::new()
    }

    struct Exploding;

    impl Summarize for Exploding {
        fn summarize(&self, _text: &str) -> String {
            panic!("sentence index out of range")
        }
    }

    #[test]
    fn panic_in_summarizer_becomes_generic_failure() {
        let request = SummarizeRequest::from_text("A long enough sentence here. Another long sentence.");
        assert_eq!(
            run(&Exploding, &request),
            Err(RequestError::UnexpectedFailure("sentence index out of range".to_string()))
        );

        let outcome = handle_request(&Exploding, &request);
        assert_eq!(outcome.status, 500);
        assert_eq!(
            outcome.response,
            SummarizeResponse::Error { error: "Failed to generate summary.".to_string() }
        );
    }

    #[test]
    fn explain_validates_like_run() {
        assert_eq!(
            explain(&summarizer(), &SummarizeRequest::from_text("")).unwrap_err(),
            RequestError::InvalidInput
        );
        let request = SummarizeRequest::from_text("Cats are great. Dogs are great too.");
        let analysis = explain(&summarizer(), &request).unwrap();
        assert_eq!(analysis.sentences.len(), 2);
    }

    #[test]
    fn explain_failures_serialize_as_error_body() {
        let err = parse_body("{not json").unwrap_err();
        let outcome = SummarizeOutcome::failure(&err);
        assert_eq!(
            serde_json::to_value(&outcome.response).unwrap(),
            json!({ "error": "Failed to generate summary." })
        );
    }

    #[test]
    fn valid_body_returns_summary() {
        let body = json!({ "text": "Cats are great. Dogs are great too. Cats and dogs are popular pets. The weather is nice today." })
            .to_string();
        let outcome = handle_body(&summarizer(), &body);
        assert_eq!(outcome.status, 200);
        assert_eq!(
            outcome.response,
            SummarizeResponse::Summary {
                summary: "Cats and dogs are popular pets. Cats are great.".to_string()
            }
        );
    }

    #[test]
    fn missing_text_is_rejected() {
        let outcome = handle_body(&summarizer(), "{}");
        assert_eq!(outcome.status, 400);
        assert_eq!(
            outcome.response,
            SummarizeResponse::Error { error: "No text provided.".to_string() }
        );
    }

    #[test]
    fn non_string_text_is_rejected() {
        for body in [r#"{"text": 42}"#, r#"{"text": null}"#, r#"{"text": ["a"]}"#] {
            assert_eq!(handle_body(&summarizer(), body).status, 400, "body: {}", body);
        }
    }

    #[test]
    fn empty_text_is_rejected() {
        let outcome = handle_text(&summarizer(), "");
        assert_eq!(outcome.status, 400);
        assert!(!outcome.is_success());
    }

    #[test]
    fn malformed_body_is_a_generic_failure() {
        let outcome = handle_body(&summarizer(), "{not json");
        assert_eq!(outcome.status, 500);
        assert_eq!(
            outcome.response,
            SummarizeResponse::Error { error: "Failed to generate summary.".to_string() }
        );
    }

    #[test]
    fn short_text_still_succeeds_with_period() {
        let outcome = handle_text(&summarizer(), "Hi. Ok. No.");
        assert!(outcome.is_success());
        assert_eq!(outcome.response, SummarizeResponse::Summary { summary: ".".to_string() });
    }

    #[test]
    fn response_serializes_untagged() {
        let ok = SummarizeResponse::Summary { summary: "x.".to_string() };
        assert_eq!(serde_json::to_value(&ok).unwrap(), json!({ "summary": "x." }));
        let err = SummarizeResponse::Error { error: "No text provided.".to_string() };
        assert_eq!(serde_json::to_value(&err).unwrap(), json!({ "error": "No text provided." }));
    }
}
