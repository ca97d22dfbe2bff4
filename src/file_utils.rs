use anyhow::{Context, Result};
use encoding_rs::GBK;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::errors::SubtitleError;

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    /// Find files whose name ends with the given suffix, recursively.
    ///
    /// Results are sorted so processing order is deterministic across runs
    /// and filesystems.
    pub fn find_files_with_suffix<P: AsRef<Path>>(dir: P, suffix: &str) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();

        for entry in WalkDir::new(dir.as_ref()).follow_links(true) {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.is_file() {
                if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
                    if name.ends_with(suffix) {
                        result.push(path.to_path_buf());
                    }
                }
            }
        }

        result.sort();
        Ok(result)
    }

    /// Read a text file, decoding UTF-8 first and falling back to GBK.
    ///
    /// A leading UTF-8 byte order mark is stripped. Fails with
    /// [`SubtitleError::UndecodableInput`] only when both decodings fail.
    pub fn read_text_file<P: AsRef<Path>>(path: P) -> Result<String> {
        let path = path.as_ref();
        let bytes = fs::read(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        let content = match String::from_utf8(bytes) {
            Ok(content) => content,
            Err(err) => {
                let (decoded, _, had_errors) = GBK.decode(err.as_bytes());
                if had_errors {
                    return Err(SubtitleError::UndecodableInput(path.to_path_buf()).into());
                }
                decoded.into_owned()
            }
        };

        match content.strip_prefix('\u{feff}') {
            Some(stripped) => Ok(stripped.to_string()),
            None => Ok(content),
        }
    }
}
