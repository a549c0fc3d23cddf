use std::fmt;

use async_trait::async_trait;
use digest_core::{Article, Result};

use super::NarrativeModel;

/// Offline model for runs without credentials. Emits the same four-section
/// shape the real model is prompted for, built directly from the inputs.
pub struct DummyModel;

impl fmt::Debug for DummyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyModel").finish()
    }
}

#[async_trait]
impl NarrativeModel for DummyModel {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn generate(&self, articles: &[Article], insights: &str) -> Result<String> {
        let news = if articles.is_empty() {
            "<p><em>Tento týden bez RSS článků.</em></p>".to_string()
        } else {
            let items = articles
                .iter()
                .take(5)
                .map(|a| format!("<li><strong>{}</strong> ({})</li>", a.title, a.source))
                .collect::<Vec<_>>()
                .join("\n");
            format!("<ul>\n{}\n</ul>", items)
        };

        let trends = if insights.is_empty() {
            "<p><em>Bez externích insightů.</em></p>".to_string()
        } else {
            format!("<p>{}</p>", insights)
        };

        Ok(format!(
            "<h2>Top novinky týdne</h2>\n{}\n\
             <h2>Virální reklamy &amp; kampaně</h2>\n<p><em>Bez vygenerovaného obsahu.</em></p>\n\
             <h2>Trendy &amp; insights</h2>\n{}\n\
             <h2>Zajímavosti</h2>\n<p><em>Bez vygenerovaného obsahu.</em></p>",
            news, trends
        ))
    }
}
