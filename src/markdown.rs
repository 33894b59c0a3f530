//! Markdown → HTML conversion.
//!
//! Rendering uses `pulldown-cmark` with no optional extensions enabled: no
//! tables, footnotes, strikethrough or smart punctuation. Hard line breaks via
//! a trailing backslash are part of CommonMark itself, so
//!
//! ```text
//! first line\
//! second line
//! ```
//!
//! renders as `<p>first line<br />\nsecond line</p>`.
//!
//! Source bytes are normalized before anything else looks at them: every
//! carriage return is dropped, so CRLF and LF files render and title
//! identically.

use crate::title::TitleExtractor;
use pulldown_cmark::{Options, Parser, html as md_html};
use std::fs;
use std::io;
use std::path::Path;

/// A Markdown file after rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedDocument {
    /// Title filtered from the first line of the source.
    pub title: String,
    /// HTML fragment, not escaped further by the templates.
    pub html: String,
}

/// Drop every `\r` byte.
pub fn normalize_line_endings(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().copied().filter(|&b| b != b'\r').collect()
}

/// Render already-normalized Markdown to an HTML fragment.
pub fn render_html(text: &str) -> String {
    let parser = Parser::new_ext(text, Options::empty());
    let mut html = String::with_capacity(text.len() * 3 / 2);
    md_html::push_html(&mut html, parser);
    html
}

/// Normalize, title and render a raw Markdown document.
///
/// Invalid UTF-8 sequences are replaced rather than rejected.
pub fn render_document(bytes: &[u8], titles: &TitleExtractor) -> RenderedDocument {
    let normalized = normalize_line_endings(bytes);
    let text = String::from_utf8_lossy(&normalized);
    let first_line = text.split('\n').next().unwrap_or_default();
    RenderedDocument {
        title: titles.extract(first_line),
        html: render_html(&text),
    }
}

pub fn read_document(path: &Path, titles: &TitleExtractor) -> io::Result<RenderedDocument> {
    let bytes = fs::read(path)?;
    Ok(render_document(&bytes, titles))
}
