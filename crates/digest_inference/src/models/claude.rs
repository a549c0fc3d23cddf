use std::fmt;

use async_trait::async_trait;
use digest_core::{Article, Error, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::NarrativeModel;
use crate::prompt::digest_prompt;

const ANTHROPIC_VERSION: &str = "2023-06-01";
const GENERATION_MODEL: &str = "claude-sonnet-4-6";
const MAX_OUTPUT_TOKENS: u32 = 4096;

#[derive(Serialize)]
struct MessagesRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<UserMessage>,
}

#[derive(Serialize)]
struct UserMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    text: String,
}

pub struct ClaudeModel {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    article_cap: usize,
}

impl fmt::Debug for ClaudeModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClaudeModel")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("article_cap", &self.article_cap)
            .finish()
    }
}

impl ClaudeModel {
    /// A missing key is a configuration error, raised here so the pipeline
    /// fails before anything is written to disk.
    pub fn new(api_key: Option<String>, article_cap: usize) -> Result<Self> {
        let api_key =
            api_key.ok_or_else(|| Error::Config("ANTHROPIC_API_KEY is not set".to_string()))?;
        Ok(Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: "https://api.anthropic.com".to_string(),
            article_cap,
        })
    }
}

#[async_trait]
impl NarrativeModel for ClaudeModel {
    fn name(&self) -> &str {
        "Claude"
    }

    async fn generate(&self, articles: &[Article], insights: &str) -> Result<String> {
        let prompt = digest_prompt(articles, insights, self.article_cap);

        let request = MessagesRequest {
            model: GENERATION_MODEL.to_string(),
            max_tokens: MAX_OUTPUT_TOKENS,
            messages: vec![UserMessage {
                role: "user".to_string(),
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<MessagesResponse>()
            .await?;

        let body = response
            .content
            .into_iter()
            .next()
            .map(|block| block.text)
            .ok_or_else(|| Error::Generation("response carried no content blocks".to_string()))?;

        info!(model = GENERATION_MODEL, "Digest body generated");
        Ok(body)
    }
}
