use digest_core::Article;

const NO_ARTICLES_PLACEHOLDER: &str = "(žádné RSS články nebyly dostupné)";
const NO_INSIGHTS_PLACEHOLDER: &str = "(Perplexity nebyl dostupný)";

/// Builds the single generation prompt: the capped article list, the insight
/// text, and the content contract the output has to follow. Empty inputs are
/// substituted with explicit placeholders so the model never sees a blank
/// section.
pub fn digest_prompt(articles: &[Article], insights: &str, cap: usize) -> String {
    let articles_text = articles
        .iter()
        .take(cap)
        .map(|a| {
            format!(
                "- [{}] {} | {}\n  {}",
                a.date_label(),
                a.title,
                a.source,
                a.summary
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    let articles_block = if articles_text.is_empty() {
        NO_ARTICLES_PLACEHOLDER.to_string()
    } else {
        articles_text
    };

    let insights_block = if insights.is_empty() {
        NO_INSIGHTS_PLACEHOLDER
    } else {
        insights
    };

    format!(
        r#"Napiš weekly marketing digest v češtině, 800–1200 slov.

RSS ČLÁNKY Z TOHOTO TÝDNE:
{articles_block}

PERPLEXITY INSIGHTS (čerstvé marketingové dění):
{insights_block}

Výstup musí být čistý HTML fragment — BEZ tagů <html>, <head>, <body>.
Struktura: přesně 4 sekce s <h2> nadpisy:
  1. Top novinky týdne
  2. Virální reklamy & kampaně
  3. Trendy & insights
  4. Zajímavosti

Pro každou položku: <strong>název</strong>, 2–4 věty popis, zdroj/odkaz kde relevantní.
Piš přirozeně, osobně — jako UGC creatorka zaměřená na marketing.
Pouze HTML tagy: <h2>, <p>, <strong>, <em>, <ul>, <li>, <a href="...">."#
    )
}
