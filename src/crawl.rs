// src/crawl.rs
//! Builds a [`Corpus`] from a directory of HTML pages.

use regex::Regex;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;
use walkdir::WalkDir;

use crate::corpus::Corpus;
use crate::error::{RankError, Result};

/// Anchor tags with a double-quoted `href`; the target is the first group.
pub const HREF_PATTERN: &str = r#"<a\s+(?:[^>]*?)href="([^"]*)""#;

static HREF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(HREF_PATTERN).unwrap_or_else(|_| panic!("Invalid Regex")));

/// Reads every `.html` file directly inside `dir` and links each page to the
/// other pages of the directory it references.
///
/// Pages are named by file name. Self-links and links leaving the corpus are
/// dropped. Subdirectories are not descended into.
///
/// # Errors
/// Returns [`RankError::Io`] if the directory cannot be listed or a page
/// cannot be read. Unreadable entries that are not pages are skipped.
pub fn crawl(dir: &Path) -> Result<Corpus<String>> {
    let mut raw = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            // Unreadable non-page entries (a stale symlink, say) are not part of the corpus.
            Err(e) if e.depth() > 0 && !e.path().is_some_and(|p| is_page(&p.to_string_lossy())) => {
                debug!(error = %e, "skipped unreadable entry");
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        let name = entry.file_name().to_string_lossy().into_owned();
        if !entry.file_type().is_file() || !is_page(&name) {
            continue;
        }

        let bytes = fs::read(entry.path()).map_err(|source| RankError::Io {
            source,
            path: entry.path().to_path_buf(),
        })?;
        let links: BTreeSet<String> = extract_links(&String::from_utf8_lossy(&bytes))
            .into_iter()
            .collect();
        debug!(page = %name, links = links.len(), "read page");
        raw.push((name, links));
    }

    let extracted: usize = raw.iter().map(|(_, links)| links.len()).sum();
    let corpus = Corpus::from_links(raw);
    debug!(
        pages = corpus.len(),
        dropped = extracted - corpus.link_count(),
        dir = %dir.display(),
        "corpus built"
    );
    Ok(corpus)
}

/// Returns every `href` target of an anchor tag, in document order.
#[must_use]
pub fn extract_links(content: &str) -> Vec<String> {
    HREF_RE
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

fn is_page(name: &str) -> bool {
    name.ends_with(".html")
}
