use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One collected feed entry, held in memory between collection and generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub link: String,
    pub summary: String,
    pub source: String,
    pub published_at: Option<DateTime<Utc>>,
}

impl Article {
    /// `YYYY-MM-DD` label for prompt rendering, empty when the feed gave no date.
    pub fn date_label(&self) -> String {
        self.published_at
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }
}

/// Genitive month names used on the published pages.
const CZECH_MONTHS: [&str; 12] = [
    "ledna", "února", "března", "dubna", "května", "června",
    "července", "srpna", "září", "října", "listopadu", "prosince",
];

/// Localized display form, e.g. `3. února 2026`.
pub fn display_date(date: NaiveDate) -> String {
    format!(
        "{}. {} {}",
        date.day(),
        CZECH_MONTHS[date.month0() as usize],
        date.year()
    )
}

/// One published digest file, keyed by its date-named filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestEntry {
    pub filename: String,
    pub date: NaiveDate,
}

impl DigestEntry {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            filename: format!("{}.html", date.format("%Y-%m-%d")),
            date,
        }
    }

    /// Parses a digest filename. Accepts only strict `YYYY-MM-DD.html` names;
    /// anything else (the archive index itself, unpadded dates, stray files)
    /// is not a digest.
    pub fn from_filename(name: &str) -> Option<Self> {
        let stem = name.strip_suffix(".html")?;
        if stem.len() != 10 {
            return None;
        }
        let date = NaiveDate::parse_from_str(stem, "%Y-%m-%d").ok()?;
        Some(Self {
            filename: name.to_string(),
            date,
        })
    }

    pub fn display_date(&self) -> String {
        display_date(self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_label() {
        let dated = Article {
            title: "Test".to_string(),
            link: "https://example.com".to_string(),
            summary: String::new(),
            source: "test".to_string(),
            published_at: Some("2026-02-03T12:00:00Z".parse().unwrap()),
        };
        assert_eq!(dated.date_label(), "2026-02-03");

        let undated = Article {
            published_at: None,
            ..dated
        };
        assert_eq!(undated.date_label(), "");
    }

    #[test]
    fn test_display_date() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 3).unwrap();
        assert_eq!(display_date(date), "3. února 2026");
        let date = NaiveDate::from_ymd_opt(2025, 9, 15).unwrap();
        assert_eq!(display_date(date), "15. září 2025");
    }

    #[test]
    fn test_entry_from_filename() {
        let entry = DigestEntry::from_filename("2026-02-03.html").unwrap();
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2026, 2, 3).unwrap());
        assert_eq!(entry.display_date(), "3. února 2026");

        assert!(DigestEntry::from_filename("index.html").is_none());
        assert!(DigestEntry::from_filename("2026-2-3.html").is_none());
        assert!(DigestEntry::from_filename("2026-02-03.txt").is_none());
        assert!(DigestEntry::from_filename("2026-13-01.html").is_none());
        assert!(DigestEntry::from_filename("notes-2026-02-03.html").is_none());
    }

    #[test]
    fn test_entry_roundtrip() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 3).unwrap();
        let entry = DigestEntry::new(date);
        assert_eq!(entry.filename, "2026-02-03.html");
        assert_eq!(DigestEntry::from_filename(&entry.filename), Some(entry));
    }
}
