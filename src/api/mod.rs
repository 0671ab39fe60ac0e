// src/api/mod.rs
pub mod summarize;

pub use summarize::{
    explain,
    handle_body,
    handle_request,
    handle_text,
    parse_body,
    run,
    SummarizeOutcome,
    SummarizeRequest,
    SummarizeResponse,
};
