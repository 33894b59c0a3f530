//! Build configuration.
//!
//! There is deliberately nothing to configure beyond the content directory:
//! no config file, no environment variables, no flags. Everything else is
//! derived from that one path:
//!
//! ```text
//! ~/notes/            ← source (the only argument)
//! ~/notes_static/     ← output, a sibling named `<source>_static`
//! ```
//!
//! The output directory is never cleaned or reused. If it already exists the
//! build fails when the walk tries to create it.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Appended to the source directory name to form the output directory.
pub const OUTPUT_SUFFIX: &str = "_static";

/// The one Markdown file name that describes its directory instead of
/// becoming a page of its own.
pub const INDEX_FILE_NAME: &str = "index.md";

/// Extension (without the dot) of files rendered as Markdown. Case-sensitive.
pub const MARKDOWN_EXTENSION: &str = "md";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("content directory not found: {0}")]
    SourceNotFound(PathBuf),
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("cannot derive an output directory name from {0}")]
    NoDirectoryName(PathBuf),
    #[error("cannot resolve {path}: {source}")]
    Resolve {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Resolved input and output locations for one build.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// Content directory as given (or canonicalized when it has no name).
    pub source: PathBuf,
    /// `<source>_static`, next to the source directory.
    pub output: PathBuf,
}

impl SiteConfig {
    /// Validate the content directory and derive the output directory.
    pub fn from_source(source: &Path) -> Result<Self, ConfigError> {
        let metadata = fs::metadata(source).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ConfigError::SourceNotFound(source.to_path_buf()),
            _ => ConfigError::Resolve {
                path: source.to_path_buf(),
                source: e,
            },
        })?;
        if !metadata.is_dir() {
            return Err(ConfigError::NotADirectory(source.to_path_buf()));
        }

        // `.`, `..` and `/` have no final name component to suffix.
        let source = if source.file_name().is_some() {
            source.to_path_buf()
        } else {
            source.canonicalize().map_err(|e| ConfigError::Resolve {
                path: source.to_path_buf(),
                source: e,
            })?
        };

        let output = output_dir_for(&source)
            .ok_or_else(|| ConfigError::NoDirectoryName(source.clone()))?;

        Ok(Self { source, output })
    }
}

/// `notes` → `notes_static`, `a/b/` → `a/b_static`.
fn output_dir_for(source: &Path) -> Option<PathBuf> {
    let mut name: OsString = source.file_name()?.to_os_string();
    name.push(OUTPUT_SUFFIX);
    Some(source.with_file_name(name))
}
