//! HTML site generation.
//!
//! Stage 2 of the build. Renders every [`Index`] and [`Item`] from the scan
//! through one of two fixed templates and writes it into the output tree the
//! scan already mirrored.
//!
//! ## Generated Pages
//!
//! - **Index pages** (`<dir>/index.html`): `index.md` content (if any), then a
//!   "Filed in" heading and a list of links to every child directory and page
//! - **Item pages** (`<dir>/<stem>/index.html`): page content followed by a
//!   single "Filed in" backlink to the containing directory
//!
//! Indices are written first, then items. When both map to the same file
//! (`notes/` next to `notes.md`) the item wins.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Titles, paths and nav labels are escaped; the Markdown-derived content
//! fragment is inserted as-is. Styles are inlined from `static/style.css`, so
//! pages load nothing external.

use crate::types::{FILED_IN, Index, Item, Site};
use log::{debug, info};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A page written to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct WrittenPage {
    pub title: String,
    pub output_path: String,
}

/// What [`generate`] wrote, in write order.
#[derive(Debug, Default)]
pub struct GenerateReport {
    pub indices: Vec<WrittenPage>,
    pub items: Vec<WrittenPage>,
}

const CSS: &str = include_str!("../static/style.css");

pub fn generate(site: &Site, output_root: &Path) -> Result<GenerateReport, GenerateError> {
    info!("Generating HTML into {}", output_root.display());
    let mut report = GenerateReport::default();

    for index in site.indices.values() {
        write_page(output_root, &index.output_path, render_index(index))?;
        report.indices.push(WrittenPage {
            title: index.title.clone(),
            output_path: index.output_path.clone(),
        });
    }

    for item in &site.items {
        write_page(output_root, &item.output_path, render_item(item))?;
        report.items.push(WrittenPage {
            title: item.title.clone(),
            output_path: item.output_path.clone(),
        });
    }

    Ok(report)
}

fn write_page(output_root: &Path, output_path: &str, page: Markup) -> Result<(), GenerateError> {
    let path = output_root.join(output_path);
    fs::write(&path, page.into_string()).map_err(|source| GenerateError::Write {
        path: path.clone(),
        source,
    })?;
    debug!("wrote {}", path.display());
    Ok(())
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width";
                link rel="icon" href="data:,";
                title { (title) }
                style { (PreEscaped(CSS)) }
            }
            body {
                main {
                    (content)
                }
            }
        }
    }
}

/// `Filed in <a href="/travel/">/travel/</a>`
fn filed_in(visible_path: &str) -> Markup {
    html! {
        (FILED_IN) a href=(visible_path) { (visible_path) }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders a directory listing page
fn render_index(index: &Index) -> Markup {
    let content = html! {
        (PreEscaped(&index.content))
        hr;
        nav {
            h2 { (filed_in(&index.visible_path)) }
            ul {
                @for (path, title) in &index.nav_items {
                    li { a href=(path) { (title) } }
                }
            }
        }
    };

    base_document(&index.title, content)
}

/// Renders a single content page
fn render_item(item: &Item) -> Markup {
    let content = html! {
        (PreEscaped(&item.content))
        h4 { (filed_in(&item.visible_path)) }
    };

    base_document(&item.title, content)
}

// ============================================================================
// Tests
// ============================================================================
