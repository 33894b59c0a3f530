//! Content directory walk.
//!
//! Stage 1 of the build. A single depth-first walk over the content
//! directory builds the [`Site`] model and, as it goes, mirrors the directory
//! structure into the output directory and copies assets.
//!
//! ## Directory Structure
//!
//! ```text
//! notes/                         notes_static/
//! ├── index.md                   ├── index.html            (root index, titled by index.md)
//! ├── about.md                   ├── about/index.html      (item, clean URL)
//! ├── logo.svg                   ├── logo.svg              (asset, copied verbatim)
//! ├── travel/                    ├── travel/index.html     ("Filed in /travel/")
//! │   └── japan.md               │   └── japan/index.html
//! └── projects/                  └── projects/index.html   (titled by projects/index.md)
//!     └── index.md
//! ```
//!
//! ## Entry Handling
//!
//! Entries are classified in this order:
//!
//! 1. **Directory**: mirrored with a non-recursive create, so an existing
//!    output directory is an error. Gets an [`Index`] titled
//!    `"Filed in <visible path>"` and is linked from its parent's nav.
//! 2. **`index.md`**: retitles and fills its directory's index in place, and
//!    replaces the parent's nav label with the extracted title.
//! 3. **Other `.md`**: becomes an [`Item`] at `<stem>/index.html` and is
//!    linked from its directory's nav under `/<path>/<stem>/`.
//! 4. **Anything else**: copied byte for byte. If two files map to the same
//!    output path the later one wins.
//!
//! ## Ordering
//!
//! Entries are visited sorted by file name, each directory before its
//! contents. That guarantees every index exists before anything registers
//! into it, and that a directory's `index.md` finds the index it overwrites.
//!
//! Parents are tracked with an explicit stack of visible paths, one per
//! enclosing directory, instead of re-deriving them from path strings.

use crate::assets::copy_asset;
use crate::config::{INDEX_FILE_NAME, MARKDOWN_EXTENSION, SiteConfig};
use crate::markdown::{RenderedDocument, read_document};
use crate::title::TitleExtractor;
use crate::types::{Index, Item, Site, default_title};
use log::{debug, info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Cannot create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Cannot copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Content root is not a directory: {0}")]
    RootNotDirectory(PathBuf),
    #[error("No index registered for {0}")]
    MissingIndex(String),
}

/// Walk `config.source`, writing directories and assets under
/// `config.output`, and return the page model for [`generate`](crate::generate).
pub fn scan(config: &SiteConfig, titles: &TitleExtractor) -> Result<Site, ScanError> {
    info!("Scanning {}", config.source.display());
    let mut builder = SiteBuilder::new(&config.source, &config.output, titles);
    for entry in WalkDir::new(&config.source).sort_by_file_name() {
        builder.visit(&entry?)?;
    }
    Ok(builder.finish())
}

/// Walk state: the model being built plus the enclosing directories of the
/// entry currently visited.
struct SiteBuilder<'a> {
    source_root: &'a Path,
    output_root: &'a Path,
    titles: &'a TitleExtractor,
    /// Visible paths of the enclosing directories, root first. At walk depth
    /// `d` this holds exactly `d` entries.
    ancestors: Vec<String>,
    site: Site,
}

impl<'a> SiteBuilder<'a> {
    fn new(source_root: &'a Path, output_root: &'a Path, titles: &'a TitleExtractor) -> Self {
        Self {
            source_root,
            output_root,
            titles,
            ancestors: Vec::new(),
            site: Site::default(),
        }
    }

    fn finish(self) -> Site {
        self.site
    }

    fn visit(&mut self, entry: &DirEntry) -> Result<(), ScanError> {
        self.ancestors.truncate(entry.depth());
        let rel = entry
            .path()
            .strip_prefix(self.source_root)
            .unwrap_or(entry.path())
            .to_path_buf();
        debug!("visit /{}", url_path(&rel));

        if entry.file_type().is_dir() {
            self.visit_directory(entry, &rel)
        } else if entry.path().extension().is_some_and(|e| e == MARKDOWN_EXTENSION) {
            if entry.file_name() == INDEX_FILE_NAME {
                self.visit_index_file(entry, &rel)
            } else {
                self.visit_page(entry, &rel)
            }
        } else {
            self.visit_asset(entry, &rel)
        }
    }

    fn visit_directory(&mut self, entry: &DirEntry, rel: &Path) -> Result<(), ScanError> {
        let target = self.output_root.join(rel);
        fs::create_dir(&target).map_err(|source| ScanError::CreateDir {
            path: target.clone(),
            source,
        })?;

        let parent = self.ancestors.last().cloned();
        let visible_path = match &parent {
            None => "/".to_string(),
            Some(parent) => format!("{parent}{}/", entry.file_name().to_string_lossy()),
        };

        let output_path = join_url(&url_path(rel), "index.html");
        self.site.indices.insert(
            visible_path.clone(),
            Index::for_directory(output_path, visible_path.clone()),
        );

        if let Some(parent) = parent {
            let label = default_title(&visible_path);
            self.index_mut(&parent)?
                .nav_items
                .insert(visible_path.clone(), label);
        }

        self.ancestors.push(visible_path);
        Ok(())
    }

    fn visit_index_file(&mut self, entry: &DirEntry, rel: &Path) -> Result<(), ScanError> {
        let doc = self.read(entry.path())?;
        let dir_visible = self.containing_dir(entry)?.to_string();
        let output_path = url_path(&rel.with_extension("html"));

        let index = self.index_mut(&dir_visible)?;
        index.output_path = output_path;
        index.title = doc.title.clone();
        index.content = doc.html;
        index.visible_path = dir_visible.clone();

        // The root has no parent nav to relabel.
        if let Some(parent) = self.grandparent_dir().map(str::to_string) {
            self.index_mut(&parent)?
                .nav_items
                .insert(dir_visible, doc.title);
        }
        Ok(())
    }

    fn visit_page(&mut self, entry: &DirEntry, rel: &Path) -> Result<(), ScanError> {
        let doc = self.read(entry.path())?;
        let dir_visible = self.containing_dir(entry)?.to_string();

        let page_dir = rel.with_extension("");
        let target = self.output_root.join(&page_dir);
        if let Err(source) = fs::create_dir(&target)
            && source.kind() != io::ErrorKind::AlreadyExists
        {
            return Err(ScanError::CreateDir {
                path: target,
                source,
            });
        }

        let stem = page_dir
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let link = format!("{dir_visible}{stem}/");

        self.index_mut(&dir_visible)?
            .nav_items
            .insert(link, doc.title.clone());
        self.site.items.push(Item {
            output_path: join_url(&url_path(&page_dir), "index.html"),
            title: doc.title,
            content: doc.html,
            visible_path: dir_visible,
        });
        Ok(())
    }

    fn visit_asset(&mut self, entry: &DirEntry, rel: &Path) -> Result<(), ScanError> {
        if entry.depth() == 0 {
            return Err(ScanError::RootNotDirectory(entry.path().to_path_buf()));
        }
        let target = self.output_root.join(rel);
        let bytes = copy_asset(entry.path(), &target).map_err(|source| ScanError::Copy {
            from: entry.path().to_path_buf(),
            to: target.clone(),
            source,
        })?;
        debug!("copied {} ({bytes} bytes)", target.display());
        self.site.assets.push(url_path(rel));
        Ok(())
    }

    fn read(&self, path: &Path) -> Result<RenderedDocument, ScanError> {
        read_document(path, self.titles).map_err(|source| ScanError::Read {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Visible path of the directory holding the current file.
    fn containing_dir(&self, entry: &DirEntry) -> Result<&str, ScanError> {
        self.ancestors
            .last()
            .map(String::as_str)
            .ok_or_else(|| ScanError::RootNotDirectory(entry.path().to_path_buf()))
    }

    /// Visible path of the parent of the directory holding the current file.
    fn grandparent_dir(&self) -> Option<&str> {
        let depth = self.ancestors.len();
        if depth < 2 {
            return None;
        }
        Some(self.ancestors[depth - 2].as_str())
    }

    fn index_mut(&mut self, visible_path: &str) -> Result<&mut Index, ScanError> {
        self.site
            .indices
            .get_mut(visible_path)
            .ok_or_else(|| ScanError::MissingIndex(visible_path.to_string()))
    }
}

/// Relative filesystem path → `/`-separated URL path, no leading slash.
fn url_path(rel: &Path) -> String {
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn join_url(dir: &str, file: &str) -> String {
    if dir.is_empty() {
        file.to_string()
    } else {
        format!("{dir}/{file}")
    }
}
