use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use digest_core::{Article, Error, Result};

pub mod claude;
pub mod dummy;

pub use claude::ClaudeModel;
pub use dummy::DummyModel;

/// Seam between the pipeline and the text-generation API.
#[async_trait]
pub trait NarrativeModel: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    /// Produces the digest body as an HTML fragment from the collected
    /// articles and the insight text.
    async fn generate(&self, articles: &[Article], insights: &str) -> Result<String>;
}

pub fn create_model(
    name: &str,
    api_key: Option<String>,
    article_cap: usize,
) -> Result<Arc<dyn NarrativeModel>> {
    match name {
        "claude" => Ok(Arc::new(ClaudeModel::new(api_key, article_cap)?)),
        "dummy" => Ok(Arc::new(DummyModel)),
        other => Err(Error::Config(format!("Unknown model: {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_model() {
        assert!(create_model("dummy", None, 30).is_ok());
        assert!(create_model("claude", Some("key".to_string()), 30).is_ok());
        assert!(create_model("claude", None, 30).is_err());
        assert!(create_model("gpt", None, 30).is_err());
    }
}
