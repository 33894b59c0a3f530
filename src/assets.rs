//! Verbatim copying of non-Markdown files.
//!
//! Only content is copied: no permissions, timestamps or other metadata. The
//! destination is created or truncated, so when two sources map to the same
//! output path the one copied last wins.

use std::fs::File;
use std::io;
use std::path::Path;

/// Copy `src` to `dst` byte for byte. Returns the number of bytes written.
pub fn copy_asset(src: &Path, dst: &Path) -> io::Result<u64> {
    let mut reader = File::open(src)?;
    let mut writer = File::create(dst)?;
    io::copy(&mut reader, &mut writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn copy_is_byte_identical() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("photo.bin");
        let dst = tmp.path().join("copy.bin");
        let bytes: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
        fs::write(&src, &bytes).unwrap();

        let copied = copy_asset(&src, &dst).unwrap();

        assert_eq!(copied, 4096);
        assert_eq!(fs::read(&dst).unwrap(), bytes);
    }

    #[test]
    fn existing_destination_is_overwritten() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("new.txt");
        let dst = tmp.path().join("old.txt");
        fs::write(&src, "new").unwrap();
        fs::write(&dst, "much longer old content").unwrap();

        copy_asset(&src, &dst).unwrap();

        assert_eq!(fs::read_to_string(&dst).unwrap(), "new");
    }

    #[test]
    fn missing_source_is_error() {
        let tmp = TempDir::new().unwrap();
        let result = copy_asset(&tmp.path().join("nope"), &tmp.path().join("dst"));
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }
}
