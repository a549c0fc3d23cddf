use std::fmt;
use std::time::Duration;

use digest_core::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

const PERPLEXITY_URL: &str = "https://api.perplexity.ai/chat/completions";
const INSIGHT_MODEL: &str = "llama-3.1-sonar-large-128k-online";
const INSIGHT_QUERY: &str = "What are the most important marketing news, trends, viral ads \
and campaigns from the past 7 days? Include specific brand names, \
campaign names and explain why they matter. Be specific and thorough.";

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Deserialize)]
struct Message {
    content: String,
}

/// One-shot client for the search/summarization API.
pub struct InsightFetcher {
    client: reqwest::Client,
    api_key: Option<String>,
}

impl fmt::Debug for InsightFetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InsightFetcher")
            .field("api_key", &self.api_key.as_deref().map(|_| "<redacted>"))
            .finish()
    }
}

impl InsightFetcher {
    pub fn new(api_key: Option<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, api_key })
    }

    /// Asks for the week's marketing highlights, once, within the configured
    /// timeout. Missing credentials, transport failures, non-success statuses
    /// and empty responses all surface as `Err`; the pipeline treats every
    /// one of them as "no insights this week" and keeps going.
    pub async fn fetch(&self) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| Error::Insight("PERPLEXITY_API_KEY is not set".to_string()))?;

        let request = ChatRequest {
            model: INSIGHT_MODEL.to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: INSIGHT_QUERY.to_string(),
            }],
        };

        let response = self
            .client
            .post(PERPLEXITY_URL)
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<ChatResponse>()
            .await?;

        let content = response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| Error::Insight("response carried no choices".to_string()))?;

        info!("Insight fetch OK");
        Ok(content)
    }
}
