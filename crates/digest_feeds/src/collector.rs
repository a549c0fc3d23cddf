use chrono::{DateTime, Duration, Utc};
use digest_core::{Article, DigestConfig, Error, Result};
use feed_rs::model::{Entry, Feed};
use scraper::Html;
use tracing::{info, warn};

pub struct FeedCollector {
    client: reqwest::Client,
    feeds: Vec<String>,
    recency_days: i64,
    summary_budget: usize,
}

impl FeedCollector {
    pub fn new(config: &DigestConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("marketing-digest/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            feeds: config.feeds.clone(),
            recency_days: config.recency_days,
            summary_budget: config.summary_budget,
        })
    }

    /// Polls every configured feed once, sequentially. Sources that fail to
    /// fetch or parse are skipped with a warning; articles from the remaining
    /// sources are always returned.
    pub async fn collect(&self) -> Vec<Article> {
        let cutoff = Utc::now() - Duration::days(self.recency_days);
        let mut articles = Vec::new();

        for feed_url in &self.feeds {
            match self.fetch_feed(feed_url, cutoff).await {
                Ok(mut found) => {
                    info!(feed = %feed_url, count = found.len(), "Feed fetched");
                    articles.append(&mut found);
                }
                Err(e) => warn!(feed = %feed_url, error = %e, "Skipping feed"),
            }
        }

        info!(total = articles.len(), "Collected feed articles");
        articles
    }

    async fn fetch_feed(&self, feed_url: &str, cutoff: DateTime<Utc>) -> Result<Vec<Article>> {
        let resp = self.client.get(feed_url).send().await?.error_for_status()?;
        let bytes = resp.bytes().await?;
        let feed = parse_feed(&bytes, feed_url)?;
        Ok(self.articles_from_feed(feed, feed_url, cutoff))
    }

    fn articles_from_feed(
        &self,
        feed: Feed,
        feed_url: &str,
        cutoff: DateTime<Utc>,
    ) -> Vec<Article> {
        let source = feed
            .title
            .map(|t| t.content)
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| feed_url.to_string());

        feed.entries
            .into_iter()
            .filter_map(|entry| self.article_from_entry(entry, &source, cutoff))
            .collect()
    }

    /// Entries with a resolvable publish date older than the cutoff are
    /// dropped; entries with no resolvable date are kept.
    fn article_from_entry(
        &self,
        entry: Entry,
        source: &str,
        cutoff: DateTime<Utc>,
    ) -> Option<Article> {
        let published_at = entry_timestamp(&entry);
        if let Some(date) = published_at {
            if date < cutoff {
                return None;
            }
        }

        let title = entry
            .title
            .map(|t| t.content.trim().to_string())
            .unwrap_or_default();
        let link = entry
            .links
            .first()
            .map(|l| l.href.clone())
            .unwrap_or_default();
        let summary = entry
            .summary
            .map(|s| truncate_chars(&strip_html(&s.content), self.summary_budget))
            .unwrap_or_default();

        Some(Article {
            title,
            link,
            summary,
            source: source.to_string(),
            published_at,
        })
    }
}

fn parse_feed(bytes: &[u8], feed_url: &str) -> Result<Feed> {
    feed_rs::parser::parse(bytes).map_err(|e| Error::Feed(format!("{}: {}", feed_url, e)))
}

/// First resolvable timestamp among the entry's candidate date fields.
fn entry_timestamp(entry: &Entry) -> Option<DateTime<Utc>> {
    entry.published.or(entry.updated)
}

/// Strips markup from a feed summary fragment and collapses whitespace.
fn strip_html(fragment: &str) -> String {
    let doc = Html::parse_fragment(fragment);
    let text: String = doc.root_element().text().collect();
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncates on a char boundary so multi-byte summaries never split.
fn truncate_chars(s: &str, budget: usize) -> String {
    s.chars().take(budget).collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Test Marketing Feed</title>
    <item>
      <title>Recent campaign news</title>
      <link>https://example.com/recent</link>
      <description>&lt;p&gt;A &lt;strong&gt;viral&lt;/strong&gt; campaign launched.&lt;/p&gt;</description>
      <pubDate>Tue, 03 Feb 2026 12:00:00 GMT</pubDate>
    </item>
    <item>
      <title>Stale news</title>
      <link>https://example.com/stale</link>
      <description>Long forgotten.</description>
      <pubDate>Wed, 01 Jan 2025 00:00:00 GMT</pubDate>
    </item>
    <item>
      <title>Undated note</title>
      <link>https://example.com/undated</link>
      <description>No date on this one.</description>
    </item>
  </channel>
</rss>"#;

    fn collector(summary_budget: usize) -> FeedCollector {
        let config = DigestConfig {
            summary_budget,
            ..DigestConfig::default()
        };
        FeedCollector::new(&config).unwrap()
    }

    fn cutoff() -> DateTime<Utc> {
        "2026-01-27T00:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_cutoff_and_undated_entries() {
        let feed = feed_rs::parser::parse(FEED_XML.as_bytes()).unwrap();
        let articles = collector(300).articles_from_feed(feed, "https://example.com/feed", cutoff());

        let titles: Vec<_> = articles.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["Recent campaign news", "Undated note"]);
        assert!(articles[0].published_at.is_some());
        assert!(articles[1].published_at.is_none());
    }

    #[test]
    fn test_source_from_feed_title() {
        let feed = feed_rs::parser::parse(FEED_XML.as_bytes()).unwrap();
        let articles = collector(300).articles_from_feed(feed, "https://example.com/feed", cutoff());
        assert!(articles.iter().all(|a| a.source == "Test Marketing Feed"));
    }

    #[test]
    fn test_source_falls_back_to_feed_url() {
        let xml = r#"<?xml version="1.0"?><rss version="2.0"><channel>
            <item><title>Entry</title><link>https://example.com/a</link></item>
        </channel></rss>"#;
        let feed = feed_rs::parser::parse(xml.as_bytes()).unwrap();
        let articles = collector(300).articles_from_feed(feed, "https://example.com/feed", cutoff());
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].source, "https://example.com/feed");
    }

    #[test]
    fn test_summary_is_stripped_of_markup() {
        let feed = feed_rs::parser::parse(FEED_XML.as_bytes()).unwrap();
        let articles = collector(300).articles_from_feed(feed, "https://example.com/feed", cutoff());
        assert_eq!(articles[0].summary, "A viral campaign launched.");
    }

    #[test]
    fn test_summary_respects_budget() {
        let feed = feed_rs::parser::parse(FEED_XML.as_bytes()).unwrap();
        let articles = collector(10).articles_from_feed(feed, "https://example.com/feed", cutoff());
        assert!(articles.iter().all(|a| a.summary.chars().count() <= 10));
    }

    #[test]
    fn test_unparseable_feed_is_an_error() {
        let err = parse_feed(b"this is not a feed", "https://example.com/feed").unwrap_err();
        assert!(matches!(err, Error::Feed(_)));
        assert!(err.to_string().contains("https://example.com/feed"));
    }

    #[test]
    fn test_strip_html() {
        assert_eq!(
            strip_html("<p>Hello <strong>world</strong> &amp; more</p>"),
            "Hello world & more"
        );
        assert_eq!(strip_html("plain text"), "plain text");
        assert_eq!(strip_html("  spaced\n\nout  "), "spaced out");
    }

    #[test]
    fn test_truncate_chars_on_boundary() {
        assert_eq!(truncate_chars("příliš žluťoučký kůň", 6), "příliš");
        assert_eq!(truncate_chars("short", 300), "short");
    }
}
