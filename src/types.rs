//! The in-memory site model produced by [`scan`](crate::scan) and consumed by
//! [`generate`](crate::generate).
//!
//! Paths come in two flavors:
//!
//! - **Output paths** are relative to the output root and use `/` separators
//!   (`index.html`, `travel/index.html`, `travel/japan/index.html`).
//! - **Visible paths** are the root-absolute URLs a browser sees for a
//!   directory. They always end in `/`, and the root is `/`.

use std::collections::BTreeMap;

/// Title prefix used for directories without an `index.md`, and for the
/// "Filed in" backlinks on every page.
pub const FILED_IN: &str = "Filed in ";

/// One directory's listing page.
#[derive(Debug, Clone, PartialEq)]
pub struct Index {
    /// Destination of the generated HTML, relative to the output root.
    pub output_path: String,
    /// `"Filed in <visible_path>"` unless the directory has an `index.md`.
    pub title: String,
    /// HTML rendered from `index.md`, empty if there is none.
    pub content: String,
    pub visible_path: String,
    /// Child URL → display title. Iteration order is not meaningful.
    pub nav_items: BTreeMap<String, String>,
}

impl Index {
    /// The index a directory gets on first visit, before any `index.md`.
    pub fn for_directory(output_path: String, visible_path: String) -> Self {
        Self {
            output_path,
            title: default_title(&visible_path),
            content: String::new(),
            visible_path,
            nav_items: BTreeMap::new(),
        }
    }
}

/// A Markdown page that is not an `index.md`.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// Clean-URL destination: `notes.md` → `notes/index.html`.
    pub output_path: String,
    pub title: String,
    pub content: String,
    /// Visible path of the directory the source file lives in.
    pub visible_path: String,
}

/// Everything the walk discovered: one index per directory keyed by visible
/// path, plus a flat list of content pages.
#[derive(Debug, Default)]
pub struct Site {
    pub indices: BTreeMap<String, Index>,
    pub items: Vec<Item>,
    /// Non-Markdown files copied during the walk (output paths).
    pub assets: Vec<String>,
}

/// `"Filed in /travel/"` — the label a directory carries until an `index.md`
/// gives it a real title.
pub fn default_title(visible_path: &str) -> String {
    format!("{FILED_IN}{visible_path}")
}
