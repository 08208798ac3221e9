mod openai;

pub use openai::OpenAiSummarizer;

use thiserror::Error;

pub const SUMMARY_INSTRUCTION: &str = "Summarize the above function in one sentence.";

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("API key is not a valid header value")]
    InvalidKey,

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("completion request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("malformed completion response: {0}")]
    Malformed(String),

    #[error("completion response contained no choices")]
    EmptyChoices,
}

/// Produces a one-sentence summary for a declaration header.
pub trait Summarizer {
    fn summarize(&self, header: &str) -> Result<String, SummaryError>;
}

pub fn build_prompt(header: &str) -> String {
    format!("{}\n# {}", header, SUMMARY_INSTRUCTION)
}
