use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};

// @module: Primary/companion file pairing by naming convention

/// Compound suffix identifying primary overlay documents
pub const PRIMARY_SUFFIX: &str = ".danmaku.ass";

/// Extension of companion subtitle files
pub const COMPANION_EXTENSION: &str = "srt";

/// Marker inserted into merged output file names
pub const MERGED_MARKER: &str = "merged";

/// Base identifier of a primary document, i.e. its file name with the
/// compound suffix stripped. `None` if the name does not carry the suffix.
pub fn base_identifier(primary: &Path) -> Option<&str> {
    primary
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.strip_suffix(PRIMARY_SUFFIX))
}

/// Find companion subtitle files for a primary document.
///
/// A companion lives in the same directory and is named either
/// `<base>.<tag>.srt` or plain `<base>.srt`. Results are deduplicated and
/// sorted lexicographically so merge order never depends on the order the
/// filesystem happens to list entries in.
pub fn find_companions(primary: &Path) -> Result<Vec<PathBuf>> {
    let Some(base) = base_identifier(primary) else {
        return Ok(Vec::new());
    };
    let dir = match primary.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let tagged_prefix = format!("{}.", base);
    let suffix = format!(".{}", COMPANION_EXTENSION);

    let mut companions = Vec::new();
    let read_dir = fs::read_dir(dir)
        .with_context(|| format!("Failed to list directory: {}", dir.display()))?;
    for entry in read_dir {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        let Some(stem) = name.strip_suffix(&suffix) else {
            continue;
        };
        if stem == base || stem.starts_with(&tagged_prefix) {
            companions.push(path);
        }
    }

    companions.sort();
    companions.dedup();
    Ok(companions)
}

/// Derive the output path for one primary/companion pairing.
///
/// The companion's tag is its file stem minus the shared base identifier
/// (with a leading `.` stripped). A non-empty tag yields
/// `<base>.<tag>.merged.<ext>`; an empty tag, or a companion whose name does
/// not contain the base at all, falls back to `<base>.merged.<ext>`. The
/// extension is the primary document's own, and the output is placed in the
/// primary's directory.
pub fn derive_output_path(primary: &Path, companion: &Path) -> PathBuf {
    let dir = primary.parent().unwrap_or_else(|| Path::new("."));
    let extension = primary
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("ass");

    let base = match base_identifier(primary) {
        Some(base) => base.to_string(),
        None => primary
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string(),
    };

    let companion_stem = companion
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("");
    let tag = companion_stem
        .strip_prefix(base.as_str())
        .map(|rest| rest.strip_prefix('.').unwrap_or(rest))
        .unwrap_or("");

    let file_name = if tag.is_empty() {
        format!("{}.{}.{}", base, MERGED_MARKER, extension)
    } else {
        format!("{}.{}.{}.{}", base, tag, MERGED_MARKER, extension)
    };

    dir.join(file_name)
}
