use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use digest_core::{DigestConfig, DigestEntry, Result};
use tracing::{info, warn};

use crate::templates;

pub const START_MARKER: &str = "<!-- DIGEST_LIST_START -->";
pub const END_MARKER: &str = "<!-- DIGEST_LIST_END -->";

/// How many digests the external top-level page shows.
const MAIN_INDEX_RECENT: usize = 3;

/// Renders the static-site artifacts. Every operation is file-driven and
/// idempotent: a rerun for the same date overwrites in place, and the archive
/// is always rebuilt from a fresh directory scan.
pub struct Publisher {
    digest_dir: PathBuf,
    main_index: PathBuf,
}

impl Publisher {
    pub fn new(config: &DigestConfig) -> Self {
        Self {
            digest_dir: config.digest_dir.clone(),
            main_index: config.main_index.clone(),
        }
    }

    /// Wraps the generated body in the page shell and writes the dated file.
    pub fn write_digest_page(&self, date: NaiveDate, body: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.digest_dir)?;
        let entry = DigestEntry::new(date);
        let html = templates::digest_page(&entry.display_date(), body);
        let path = self.digest_dir.join(&entry.filename);
        fs::write(&path, html)?;
        info!(path = %path.display(), "Digest page written");
        Ok(path)
    }

    /// All digests on disk, newest first. The archive index itself and
    /// anything not named `YYYY-MM-DD.html` is ignored.
    pub fn list_digests(&self) -> Result<Vec<DigestEntry>> {
        let mut entries = Vec::new();
        if self.digest_dir.is_dir() {
            for dirent in fs::read_dir(&self.digest_dir)? {
                let dirent = dirent?;
                if let Some(name) = dirent.file_name().to_str() {
                    if let Some(entry) = DigestEntry::from_filename(name) {
                        entries.push(entry);
                    }
                }
            }
        }
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(entries)
    }

    /// Rescans the digest directory and rewrites the archive index from
    /// scratch. Returns the entries, newest first.
    pub fn rebuild_archive(&self) -> Result<Vec<DigestEntry>> {
        fs::create_dir_all(&self.digest_dir)?;
        let entries = self.list_digests()?;
        let html = templates::archive_page(&entries);
        let path = self.digest_dir.join("index.html");
        fs::write(&path, html)?;
        info!(path = %path.display(), count = entries.len(), "Archive index rebuilt");
        Ok(entries)
    }

    /// Replaces the marker-delimited block in the external top-level page
    /// with the most recent digests. When the page or either marker is
    /// missing the patch is skipped with a warning; the page is never
    /// otherwise modified.
    pub fn patch_main_index(&self, entries: &[DigestEntry]) -> Result<()> {
        if !self.main_index.is_file() {
            warn!(path = %self.main_index.display(), "Main index not found, skipping");
            return Ok(());
        }
        let content = fs::read_to_string(&self.main_index)?;

        let (Some(start), Some(end)) = (content.find(START_MARKER), content.find(END_MARKER))
        else {
            warn!(path = %self.main_index.display(), "Digest markers not found, skipping");
            return Ok(());
        };

        let recent = &entries[..entries.len().min(MAIN_INDEX_RECENT)];
        let block = templates::main_index_block(START_MARKER, END_MARKER, recent);
        let patched = format!(
            "{}{}{}",
            &content[..start],
            block,
            &content[end + END_MARKER.len()..]
        );
        fs::write(&self.main_index, patched)?;
        info!(path = %self.main_index.display(), count = recent.len(), "Main index updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn publisher(root: &TempDir) -> Publisher {
        let config = DigestConfig {
            digest_dir: root.path().join("marketing-digest"),
            main_index: root.path().join("index.html"),
            ..DigestConfig::default()
        };
        Publisher::new(&config)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    const MAIN_PAGE: &str = "<html>\n<body>\n    <!-- DIGEST_LIST_START -->\n    old\n    <!-- DIGEST_LIST_END -->\n</body>\n</html>";

    #[test]
    fn test_write_digest_page_overwrites() {
        let root = TempDir::new().unwrap();
        let publisher = publisher(&root);

        let path = publisher
            .write_digest_page(date(2026, 2, 3), "<h2>First</h2>")
            .unwrap();
        publisher
            .write_digest_page(date(2026, 2, 3), "<h2>Second</h2>")
            .unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("<h2>Second</h2>"));
        assert!(!written.contains("<h2>First</h2>"));
        assert_eq!(path.file_name().unwrap(), "2026-02-03.html");
    }

    #[test]
    fn test_rebuild_archive_sorts_descending() {
        let root = TempDir::new().unwrap();
        let publisher = publisher(&root);

        publisher.write_digest_page(date(2026, 1, 20), "a").unwrap();
        publisher.write_digest_page(date(2026, 2, 3), "b").unwrap();
        publisher.write_digest_page(date(2026, 1, 27), "c").unwrap();

        let entries = publisher.rebuild_archive().unwrap();
        let names: Vec<_> = entries.iter().map(|e| e.filename.as_str()).collect();
        assert_eq!(
            names,
            vec!["2026-02-03.html", "2026-01-27.html", "2026-01-20.html"]
        );

        let index = fs::read_to_string(root.path().join("marketing-digest/index.html")).unwrap();
        let first = index.find("2026-02-03.html").unwrap();
        let last = index.find("2026-01-20.html").unwrap();
        assert!(first < last);
    }

    #[test]
    fn test_rebuild_archive_ignores_foreign_files() {
        let root = TempDir::new().unwrap();
        let publisher = publisher(&root);

        publisher.write_digest_page(date(2026, 2, 3), "a").unwrap();
        let dir = root.path().join("marketing-digest");
        fs::write(dir.join("notes.html"), "x").unwrap();
        fs::write(dir.join("2026-2-3.html"), "x").unwrap();

        let entries = publisher.rebuild_archive().unwrap();
        assert_eq!(entries.len(), 1);

        // The freshly written archive index must not count as a digest either.
        let entries = publisher.rebuild_archive().unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_rebuild_archive_empty_renders_placeholder() {
        let root = TempDir::new().unwrap();
        let publisher = publisher(&root);

        let entries = publisher.rebuild_archive().unwrap();
        assert!(entries.is_empty());

        let index = fs::read_to_string(root.path().join("marketing-digest/index.html")).unwrap();
        assert!(index.contains(templates::ARCHIVE_EMPTY_NOTE));
    }

    #[test]
    fn test_patch_main_index_lists_three_most_recent() {
        let root = TempDir::new().unwrap();
        let publisher = publisher(&root);
        fs::write(root.path().join("index.html"), MAIN_PAGE).unwrap();

        for day in [6, 13, 20, 27] {
            publisher.write_digest_page(date(2026, 1, day), "x").unwrap();
        }
        let entries = publisher.rebuild_archive().unwrap();
        publisher.patch_main_index(&entries).unwrap();

        let patched = fs::read_to_string(root.path().join("index.html")).unwrap();
        assert!(patched.contains("marketing-digest/2026-01-27.html"));
        assert!(patched.contains("marketing-digest/2026-01-13.html"));
        assert!(!patched.contains("marketing-digest/2026-01-06.html"));
        assert!(!patched.contains("old"));
        assert!(patched.ends_with("</body>\n</html>"));
    }

    #[test]
    fn test_patch_main_index_is_idempotent() {
        let root = TempDir::new().unwrap();
        let publisher = publisher(&root);
        fs::write(root.path().join("index.html"), MAIN_PAGE).unwrap();

        publisher.write_digest_page(date(2026, 2, 3), "x").unwrap();
        let entries = publisher.rebuild_archive().unwrap();

        publisher.patch_main_index(&entries).unwrap();
        let once = fs::read_to_string(root.path().join("index.html")).unwrap();
        publisher.patch_main_index(&entries).unwrap();
        let twice = fs::read_to_string(root.path().join("index.html")).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_patch_main_index_empty_renders_placeholder() {
        let root = TempDir::new().unwrap();
        let publisher = publisher(&root);
        fs::write(root.path().join("index.html"), MAIN_PAGE).unwrap();

        publisher.patch_main_index(&[]).unwrap();
        let patched = fs::read_to_string(root.path().join("index.html")).unwrap();
        assert!(patched.contains(templates::MAIN_INDEX_EMPTY_NOTE));
    }

    #[test]
    fn test_patch_without_markers_leaves_page_untouched() {
        let root = TempDir::new().unwrap();
        let publisher = publisher(&root);
        let page = "<html><body>no markers here</body></html>";
        fs::write(root.path().join("index.html"), page).unwrap();

        publisher
            .patch_main_index(&[DigestEntry::new(date(2026, 2, 3))])
            .unwrap();
        let after = fs::read_to_string(root.path().join("index.html")).unwrap();
        assert_eq!(after, page);
    }

    #[test]
    fn test_patch_without_main_index_is_skipped() {
        let root = TempDir::new().unwrap();
        let publisher = publisher(&root);
        assert!(publisher.patch_main_index(&[]).is_ok());
        assert!(!root.path().join("index.html").exists());
    }
}
