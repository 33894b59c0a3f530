//! Page titles derived from the first line of a Markdown document.
//!
//! The first line is filtered down to a conservative character set so the
//! title is safe to use anywhere (HTML `<title>`, nav labels, terminal output)
//! without further escaping concerns:
//!
//! ```text
//! "# Hello, World! 2024"   →  "Hello World 2024"
//! " Leading space title"   →  "Leading space title"
//! "## Über-Notes"          →  "ber-Notes"
//! ```
//!
//! After filtering, at most one leading space is dropped. That covers the
//! usual `# Heading` case, where removing `#` leaves a single space in front.

use regex::Regex;
use thiserror::Error;

/// Everything outside `[A-Za-z0-9 .'-]`.
const UNSAFE_TITLE_CHARS: &str = "[^a-zA-Z0-9 .'-]+";

#[derive(Error, Debug)]
pub enum TitleError {
    #[error("invalid title filter pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Compiled title filter. Build it once at startup and share it.
#[derive(Debug, Clone)]
pub struct TitleExtractor {
    unsafe_chars: Regex,
}

impl TitleExtractor {
    pub fn new() -> Result<Self, TitleError> {
        Ok(Self {
            unsafe_chars: Regex::new(UNSAFE_TITLE_CHARS)?,
        })
    }

    /// Filter a single line into a title. An empty result is valid.
    pub fn extract(&self, line: &str) -> String {
        let filtered = self.unsafe_chars.replace_all(line, "");
        match filtered.strip_prefix(' ') {
            Some(rest) => rest.to_string(),
            None => filtered.into_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(line: &str) -> String {
        TitleExtractor::new().unwrap().extract(line)
    }

    #[test]
    fn heading_marks_and_punctuation_are_stripped() {
        assert_eq!(extract("# Hello, World! 2024"), "Hello World 2024");
    }

    #[test]
    fn exactly_one_leading_space_removed() {
        assert_eq!(extract(" Leading space title"), "Leading space title");
        assert_eq!(extract("#   Three spaces"), "  Three spaces");
    }

    #[test]
    fn allowed_punctuation_is_kept() {
        assert_eq!(extract("# Don't stop - v1.2"), "Don't stop - v1.2");
    }

    #[test]
    fn non_ascii_letters_are_dropped() {
        assert_eq!(extract("## Über-Notes"), "ber-Notes");
    }

    #[test]
    fn empty_title_is_valid() {
        assert_eq!(extract("#!?"), "");
        assert_eq!(extract(""), "");
    }

    #[test]
    fn trailing_spaces_survive() {
        assert_eq!(extract("Title  "), "Title  ");
    }
}
