use crate::parsers::common::SUPPORTED_EXTENSIONS;
use log::debug;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_OUTPUT_FILE: &str = "code_prompt.txt";
pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const MAX_COMPLETION_TOKENS: u32 = 60;
pub const TEMPERATURE: f32 = 0.5;

const API_URL_ENV: &str = "OPENAI_API_URL";

/// Settings for one annotation run. Everything except the API base URL is fixed.
#[derive(Debug, Clone)]
pub struct AnnotatorConfig {
    pub output_path: PathBuf,
    pub api_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub extensions: Vec<&'static str>,
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        AnnotatorConfig {
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: MAX_COMPLETION_TOKENS,
            temperature: TEMPERATURE,
            extensions: SUPPORTED_EXTENSIONS.to_vec(),
        }
    }
}

impl AnnotatorConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(url) = env::var(API_URL_ENV).ok().filter(|url| !url.trim().is_empty()) {
            debug!("Using API base URL from {}: {}", API_URL_ENV, url);
            config.api_url = url.trim().to_string();
        }
        config
    }

    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }
}
