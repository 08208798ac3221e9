use super::{build_prompt, Summarizer, SummaryError};
use crate::config::AnnotatorConfig;
use log::debug;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};

/// Chat-completion client for OpenAI-compatible endpoints.
pub struct OpenAiSummarizer {
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl OpenAiSummarizer {
    pub fn new(api_key: &str, config: &AnnotatorConfig) -> Result<Self, SummaryError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(SummaryError::Client)?;

        Ok(OpenAiSummarizer {
            client,
            api_key: api_key.to_string(),
            endpoint: format!("{}/chat/completions", config.api_url.trim_end_matches('/')),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn auth_header(&self) -> Result<HeaderValue, SummaryError> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", self.api_key))
            .map_err(|_| SummaryError::InvalidKey)?;
        auth.set_sensitive(true);
        Ok(auth)
    }
}

impl Summarizer for OpenAiSummarizer {
    fn summarize(&self, header: &str) -> Result<String, SummaryError> {
        let auth = self.auth_header()?;
        let prompt = build_prompt(header);
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &prompt,
            }],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        debug!("Requesting summary for {:?} from {}", header, self.endpoint);
        let body = self
            .client
            .post(&self.endpoint)
            .header(AUTHORIZATION, auth)
            .json(&request)
            .send()?
            .error_for_status()?
            .text()?;

        parse_completion(&body)
    }
}

fn parse_completion(body: &str) -> Result<String, SummaryError> {
    let completion: ChatCompletionResponse =
        serde_json::from_str(body).map_err(|e| SummaryError::Malformed(e.to_string()))?;
    completion
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content.unwrap_or_default())
        .ok_or(SummaryError::EmptyChoices)
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Debug, Deserialize)]
struct Message {
    content: Option<String>,
}
