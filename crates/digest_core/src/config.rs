use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Everything a run needs besides credentials. Built once in the binary and
/// passed down the pipeline; there are no module-level globals.
#[derive(Debug, Clone)]
pub struct DigestConfig {
    /// RSS/Atom sources polled each run.
    pub feeds: Vec<String>,
    /// Entries with a resolvable publish date older than this are dropped.
    pub recency_days: i64,
    /// Character budget for stripped entry summaries.
    pub summary_budget: usize,
    /// At most this many articles reach the prompt.
    pub article_cap: usize,
    /// Directory holding the dated digest pages and the archive index.
    pub digest_dir: PathBuf,
    /// Top-level page carrying the marker-delimited digest block.
    pub main_index: PathBuf,
    /// Bound on the insight API call.
    pub insight_timeout: Duration,
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            feeds: vec![
                "https://www.adweek.com/feed/".to_string(),
                "https://marketingland.com/feed".to_string(),
                "https://www.businessoffashion.com/feed/".to_string(),
                "http://feeds.harvardbusiness.org/harvardbusiness".to_string(),
            ],
            recency_days: 7,
            summary_budget: 300,
            article_cap: 30,
            digest_dir: PathBuf::from("marketing-digest"),
            main_index: PathBuf::from("index.html"),
            insight_timeout: Duration::from_secs(45),
        }
    }
}

/// API keys sourced from the process environment. An empty value counts as
/// missing.
#[derive(Clone, Default)]
pub struct Credentials {
    pub anthropic_api_key: Option<String>,
    pub perplexity_api_key: Option<String>,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field(
                "anthropic_api_key",
                &self.anthropic_api_key.as_deref().map(|_| "<redacted>"),
            )
            .field(
                "perplexity_api_key",
                &self.perplexity_api_key.as_deref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

impl Credentials {
    pub fn from_env() -> Self {
        Self {
            anthropic_api_key: std::env::var("ANTHROPIC_API_KEY")
                .ok()
                .filter(|k| !k.is_empty()),
            perplexity_api_key: std::env::var("PERPLEXITY_API_KEY")
                .ok()
                .filter(|k| !k.is_empty()),
        }
    }
}
