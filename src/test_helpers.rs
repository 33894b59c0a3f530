//! Shared test utilities for the simple-md test suite.
//!
//! Provides fixture setup, ad-hoc content trees, and lookups into a scanned
//! [`Site`] that panic with the available keys on a miss.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let site = scan_source(&tmp.path().join("content")).unwrap();
//!
//! let travel = find_index(&site, "/travel/");
//! assert_eq!(travel.title, "Filed in /travel/");
//! assert_nav(&site, "/", &[("/about/", "About Me"), ("/projects/", "Projects")]);
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::config::SiteConfig;
use crate::scan::{ScanError, scan};
use crate::title::TitleExtractor;
use crate::types::{Index, Item, Site};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to `<tmp>/content` and return the temp dir.
///
/// The copy lives one level down so the `content_static` output lands inside
/// the temp dir too.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    let content = tmp.path().join("content");
    fs::create_dir(&content).unwrap();
    copy_dir_recursive(&fixtures, &content).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Create `<tmp>/content` populated with `files` (relative path, contents).
///
/// Paths ending in `/` create empty directories.
pub fn content_tree(files: &[(&str, &str)]) -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let content = tmp.path().join("content");
    fs::create_dir(&content).unwrap();
    for (rel, body) in files {
        let path = content.join(rel);
        if rel.ends_with('/') {
            fs::create_dir_all(&path).unwrap();
        } else {
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, body).unwrap();
        }
    }
    (tmp, content)
}

/// Scan `source` into its `_static` sibling.
pub fn scan_source(source: &Path) -> Result<Site, ScanError> {
    let config = SiteConfig::from_source(source).unwrap();
    let titles = TitleExtractor::new().unwrap();
    scan(&config, &titles)
}

// =========================================================================
// Site lookups — panics with a clear message on miss
// =========================================================================

/// Find an index by visible path. Panics if not found.
pub fn find_index<'a>(site: &'a Site, visible_path: &str) -> &'a Index {
    site.indices.get(visible_path).unwrap_or_else(|| {
        let keys: Vec<&str> = site.indices.keys().map(String::as_str).collect();
        panic!("index '{visible_path}' not found. Available: {keys:?}")
    })
}

/// Find an item by output path. Panics if not found.
pub fn find_item<'a>(site: &'a Site, output_path: &str) -> &'a Item {
    site.items
        .iter()
        .find(|i| i.output_path == output_path)
        .unwrap_or_else(|| {
            let paths: Vec<&str> = site.items.iter().map(|i| i.output_path.as_str()).collect();
            panic!("item '{output_path}' not found. Available: {paths:?}")
        })
}

/// All item output paths, sorted.
pub fn item_paths(site: &Site) -> Vec<&str> {
    let mut paths: Vec<&str> = site.items.iter().map(|i| i.output_path.as_str()).collect();
    paths.sort_unstable();
    paths
}

/// Assert an index's navigation entries exactly, ignoring order.
pub fn assert_nav(site: &Site, visible_path: &str, expected: &[(&str, &str)]) {
    let index = find_index(site, visible_path);
    let mut actual: Vec<(&str, &str)> = index
        .nav_items
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    let mut expected = expected.to_vec();
    actual.sort_unstable();
    expected.sort_unstable();
    assert_eq!(actual, expected, "nav of '{visible_path}' mismatch");
}
