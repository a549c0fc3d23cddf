use digest_core::DigestEntry;

/// Styling shared by every generated page.
pub const SHARED_CSS: &str = r#"    *, *::before, *::after { box-sizing: border-box; margin: 0; padding: 0; }
    :root {
      --bg: #FAF8F5; --bg-card: #F0EAE0; --bg-card-hover: #E8DDD0;
      --text: #1C1410; --text-muted: #7A6A5A; --accent: #C8A96E;
      --accent-dark: #A8893E; --border: #E2D8CC; --white: #FFFFFF;
    }
    html { scroll-behavior: smooth; }
    body { background-color: var(--bg); color: var(--text); font-family: 'Inter', sans-serif; font-weight: 400; line-height: 1.6; -webkit-font-smoothing: antialiased; }
    nav { position: fixed; top: 0; left: 0; right: 0; z-index: 100; padding: 1.25rem 2rem; display: flex; align-items: center; justify-content: space-between; background: rgba(250,248,245,0.85); backdrop-filter: blur(12px); -webkit-backdrop-filter: blur(12px); border-bottom: 1px solid var(--border); }
    .nav-logo { font-family: 'Playfair Display', serif; font-style: italic; font-size: 1.15rem; color: var(--text); text-decoration: none; letter-spacing: 0.01em; }
    .nav-links { display: flex; gap: 1.75rem; list-style: none; }
    .nav-links a { font-size: 0.8rem; font-weight: 500; letter-spacing: 0.1em; text-transform: uppercase; color: var(--text-muted); text-decoration: none; transition: color 0.2s; }
    .nav-links a:hover { color: var(--accent); }
    .section-label { font-size: 0.72rem; font-weight: 600; letter-spacing: 0.18em; text-transform: uppercase; color: var(--accent); margin-bottom: 0.75rem; }
    .section-title { font-family: 'Playfair Display', serif; font-size: clamp(2rem, 5vw, 3rem); font-weight: 700; line-height: 1.15; margin-bottom: 2.5rem; }
    .section-title em { font-style: italic; font-weight: 400; color: var(--accent); }
    .section-inner { max-width: 900px; margin: 0 auto; }
    .digest-list { display: flex; flex-direction: column; gap: 0.75rem; }
    .digest-item { display: flex; align-items: center; gap: 1.5rem; padding: 1.1rem 1.5rem; background: var(--bg-card); border-radius: 12px; border: 1px solid var(--border); text-decoration: none; color: var(--text); transition: transform 0.2s ease, box-shadow 0.2s ease, border-color 0.2s ease; }
    .digest-item:hover { transform: translateX(4px); box-shadow: 0 4px 16px rgba(200,169,110,0.12); border-color: var(--accent); }
    .digest-date { font-size: 0.75rem; font-weight: 600; letter-spacing: 0.08em; color: var(--accent); text-transform: uppercase; white-space: nowrap; flex-shrink: 0; }
    .digest-title { flex: 1; font-size: 0.9rem; color: var(--text-muted); }
    .digest-arrow { color: var(--accent); flex-shrink: 0; }
    .digest-coming-soon { font-size: 0.85rem; color: var(--text-muted); font-style: italic; padding: 1.5rem; text-align: center; background: var(--bg-card); border-radius: 12px; border: 1px dashed var(--border); }
    footer { text-align: center; padding: 2.5rem 2rem; border-top: 1px solid var(--border); font-size: 0.78rem; color: var(--text-muted); letter-spacing: 0.04em; }
    footer a { color: var(--accent); text-decoration: none; }
    footer a:hover { text-decoration: underline; }
    @media (max-width: 700px) { nav { padding: 1rem 1.25rem; } .nav-links { gap: 1.25rem; } .digest-item { flex-direction: column; align-items: flex-start; gap: 0.3rem; } }"#;

const DIGEST_PAGE_CSS: &str = r#"    .digest-page { max-width: 720px; margin: 0 auto; padding: 7rem 2rem 5rem; }
    .digest-page h2 { font-family: 'Playfair Display', serif; font-size: 1.45rem; font-weight: 700; margin: 2.5rem 0 1rem; color: var(--text); border-bottom: 1px solid var(--border); padding-bottom: 0.5rem; }
    .digest-page p { color: var(--text-muted); line-height: 1.85; margin-bottom: 1rem; font-size: 0.95rem; }
    .digest-page strong { color: var(--text); }
    .digest-page ul { list-style: none; padding: 0; margin-bottom: 1rem; }
    .digest-page li { padding: 0.3rem 0; color: var(--text-muted); line-height: 1.75; font-size: 0.95rem; }
    .digest-page li::before { content: "·"; color: var(--accent); margin-right: 0.6rem; font-weight: bold; }
    .digest-page a { color: var(--accent); text-decoration: none; }
    .digest-page a:hover { text-decoration: underline; }
    .digest-meta { font-size: 0.8rem; color: var(--text-muted); letter-spacing: 0.06em; margin-bottom: 3rem; padding-bottom: 2rem; border-bottom: 1px solid var(--border); }
    @media (max-width: 700px) { .digest-page { padding: 6rem 1.25rem 4rem; } }"#;

const ARCHIVE_PAGE_CSS: &str = "    section { padding: 8rem 2rem 6rem; }";

pub const ARCHIVE_EMPTY_NOTE: &str = "Zatím žádné digesty — první vyjde příští pondělí.";
pub const MAIN_INDEX_EMPTY_NOTE: &str = "První digest vychází brzy — sleduj a nezmeškej.";

/// Full page shell around a generated digest body.
pub fn digest_page(date_display: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="cs">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <meta name="description" content="Marketing Digest {date_display} · Arina Isakova" />
  <title>Digest {date_display} · Arina Isakova</title>
  <link rel="preconnect" href="https://fonts.googleapis.com" />
  <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin />
  <link href="https://fonts.googleapis.com/css2?family=Playfair+Display:ital,wght@0,700;1,400;1,700&family=Inter:wght@300;400;500;600&display=swap" rel="stylesheet" />
  <style>
{shared_css}
{page_css}
  </style>
</head>
<body>
  <nav>
    <a href="../index.html" class="nav-logo">arina</a>
    <ul class="nav-links">
      <li><a href="../index.html#digest">← Digest</a></li>
    </ul>
  </nav>

  <main class="digest-page">
    <p class="section-label">Weekly Digest</p>
    <h1 class="section-title">Marketing <em>týdne</em></h1>
    <p class="digest-meta">{date_display}</p>
    {body}
  </main>

  <footer>
    <p>&copy; 2026 Arina Isakova &nbsp;·&nbsp; <a href="../index.html">Zpět na hlavní stránku</a></p>
  </footer>
</body>
</html>"#,
        date_display = date_display,
        shared_css = SHARED_CSS,
        page_css = DIGEST_PAGE_CSS,
        body = body,
    )
}

fn digest_item(entry: &DigestEntry, href_prefix: &str, indent: &str) -> String {
    format!(
        "{indent}<a href=\"{href_prefix}{filename}\" class=\"digest-item\">\n\
         {indent}  <span class=\"digest-date\">{date}</span>\n\
         {indent}  <span class=\"digest-title\">Marketing Digest</span>\n\
         {indent}  <span class=\"digest-arrow\">→</span>\n\
         {indent}</a>",
        indent = indent,
        href_prefix = href_prefix,
        filename = entry.filename,
        date = entry.display_date(),
    )
}

/// Archive index page listing every digest, newest first.
pub fn archive_page(entries: &[DigestEntry]) -> String {
    let list = if entries.is_empty() {
        format!(
            "    <p class=\"digest-coming-soon\">{}</p>",
            ARCHIVE_EMPTY_NOTE
        )
    } else {
        let items = entries
            .iter()
            .map(|e| digest_item(e, "", "      "))
            .collect::<Vec<_>>()
            .join("\n");
        format!("    <div class=\"digest-list\">\n{}\n    </div>", items)
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="cs">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <meta name="description" content="Marketing Digest archiv · Arina Isakova" />
  <title>Marketing Digest · Arina Isakova</title>
  <link rel="preconnect" href="https://fonts.googleapis.com" />
  <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin />
  <link href="https://fonts.googleapis.com/css2?family=Playfair+Display:ital,wght@0,700;1,400;1,700&family=Inter:wght@300;400;500;600&display=swap" rel="stylesheet" />
  <style>
{shared_css}
{page_css}
  </style>
</head>
<body>
  <nav>
    <a href="../index.html" class="nav-logo">arina</a>
    <ul class="nav-links">
      <li><a href="../index.html">← Zpět</a></li>
    </ul>
  </nav>

  <section>
    <div class="section-inner">
      <p class="section-label">Weekly Digest</p>
      <h1 class="section-title">Marketing <em>Digest</em></h1>
      <p style="color: var(--text-muted); margin-bottom: 3rem; max-width: 520px; font-size: 0.95rem; line-height: 1.8;">
        Týdenní přehled z marketingového světa — novinky, virální kampaně, trendy a zajímavosti. Každé pondělí.
      </p>
{list}
    </div>
  </section>

  <footer>
    <p>&copy; 2026 Arina Isakova &nbsp;·&nbsp; <a href="../index.html">Hlavní stránka</a></p>
  </footer>
</body>
</html>"#,
        shared_css = SHARED_CSS,
        page_css = ARCHIVE_PAGE_CSS,
        list = list,
    )
}

/// Marker-delimited block for the external top-level page, markers included.
pub fn main_index_block(start_marker: &str, end_marker: &str, recent: &[DigestEntry]) -> String {
    let inner = if recent.is_empty() {
        format!(
            "        <p class=\"digest-coming-soon\">{}</p>",
            MAIN_INDEX_EMPTY_NOTE
        )
    } else {
        recent
            .iter()
            .map(|e| digest_item(e, "marketing-digest/", "        "))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        "{start_marker}\n      <div class=\"digest-list\">\n{inner}\n      </div>\n      {end_marker}",
        start_marker = start_marker,
        inner = inner,
        end_marker = end_marker,
    )
}
