//! # Simple MD
//!
//! Turns a folder of Markdown notes into a browsable static HTML site. The
//! folder is the data source: directories become index pages, Markdown files
//! become pages, and everything else is copied as-is.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Scan      notes/  →  Site model         (walk, mirror dirs, copy assets)
//! 2. Generate  Site    →  notes_static/      (render HTML pages)
//! ```
//!
//! The scan stage produces an in-memory [`types::Site`]: one
//! [`types::Index`] per directory keyed by its visible path, and a flat list
//! of [`types::Item`] pages. Generate renders that model and nothing else, so
//! page rendering can be tested without touching the filesystem.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1 — walks the content directory and builds the site model |
//! | [`generate`] | Stage 2 — renders index and item pages using Maud |
//! | [`config`] | Source/output directory resolution and naming constants |
//! | [`types`] | The site model (`Index`, `Item`, `Site`) |
//! | [`markdown`] | Line-ending normalization and Markdown rendering |
//! | [`title`] | Page titles from the first line of a document |
//! | [`assets`] | Verbatim copying of non-Markdown files |
//! | [`output`] | CLI output formatting for both stages |
//!
//! # Failure Model
//!
//! Every error is fatal. The first failed read, write or directory creation
//! stops the build and is returned to the caller; the output directory may be
//! left half-written. Building twice into the same output directory fails,
//! since directories are created rather than reused.

pub mod assets;
pub mod config;
pub mod generate;
pub mod markdown;
pub mod output;
pub mod scan;
pub mod title;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;

use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Title(#[from] title::TitleError),
    #[error(transparent)]
    Scan(#[from] scan::ScanError),
    #[error(transparent)]
    Generate(#[from] generate::GenerateError),
}

/// Everything a finished build produced.
#[derive(Debug)]
pub struct BuildReport {
    pub config: config::SiteConfig,
    pub site: types::Site,
    pub generated: generate::GenerateReport,
}

/// Run the full pipeline for `source`, writing into `<source>_static`.
pub fn build(source: &Path) -> Result<BuildReport, BuildError> {
    let config = config::SiteConfig::from_source(source)?;
    let titles = title::TitleExtractor::new()?;
    let site = scan::scan(&config, &titles)?;
    let generated = generate::generate(&site, &config.output)?;
    Ok(BuildReport {
        config,
        site,
        generated,
    })
}
